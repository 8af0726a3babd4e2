use thiserror::Error;

/// Error types for matrix construction
#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Data length {actual} does not match {rows}x{cols} matrix")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        actual: usize,
    },
}

/// PixelMatrix: a row-major matrix of packed 0xAARRGGBB color values
///
/// Produced by the bitmap collaborator and only ever read by the separator.
/// A fully opaque white pixel packs to `0xFFFFFFFF`, the whitespace sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl PixelMatrix {
    /// Build a matrix from a flat row-major buffer
    pub fn from_vec(rows: usize, cols: usize, data: Vec<u32>) -> Result<Self, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::SizeMismatch {
                rows,
                cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from nested rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Color at (row, col), or None when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    pub fn data(&self) -> &[u32] {
        &self.data
    }
}

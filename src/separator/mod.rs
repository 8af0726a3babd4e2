/// Whitespace separation analyzer
///
/// Encodes "find uninterrupted whitespace rows/columns" as two shortest-path
/// queries on a single pixel graph. Every pixel is a vertex; 4-neighbor edges
/// cost 1 when both endpoints are whitespace and 100 otherwise, so a pure
/// whitespace path across the image is two orders of magnitude cheaper than
/// any path touching ink. Two synthetic sources feed the left edge and the
/// top edge with cost-free entry edges, which keeps Dijkstra itself generic
/// and caps the expensive calls at exactly two per image.

use crate::bitmap::{self, BitmapError};
use crate::graph::WeightedGraph;
use crate::types::{Pixel, PixelMatrix};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Packed ARGB value treated as blank background
pub const WHITESPACE: u32 = 0xFFFF_FFFF;

/// Edge weight for a step between two whitespace pixels
const BLANK_WEIGHT: i64 = 1;

/// Edge weight for any step touching a non-whitespace pixel
const INK_WEIGHT: i64 = 100;

/// Separation analysis errors
#[derive(Error, Debug)]
pub enum SeparatorError {
    /// Image could not be loaded; no partial result is produced
    #[error("Bitmap error: {0}")]
    Bitmap(#[from] BitmapError),
}

/// Result type for separation analysis
pub type SeparatorResult<T> = Result<T, SeparatorError>;

/// Whitespace rows and columns of one image, each list ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separation {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

/// Find the whitespace separator rows and columns of a pixel matrix
///
/// Builds one graph (all pixels plus the two synthetic sources), runs
/// Dijkstra from each source, and classifies row `i` as whitespace iff the
/// distance to its far-right pixel is exactly `cols - 1` — the cost of a path
/// made purely of whitespace-to-whitespace steps. Columns symmetrically
/// against `rows - 1`. The exact-equality threshold is deliberate: a single
/// ink pixel on every possible path forces the distance above it.
pub fn find_separation(matrix: &PixelMatrix) -> Separation {
    let rows = matrix.rows();
    let cols = matrix.cols();

    if rows == 0 || cols == 0 {
        return Separation {
            rows: Vec::new(),
            cols: Vec::new(),
        };
    }

    let graph = build_pixel_graph(matrix);
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "pixel graph built"
    );

    // Exactly two Dijkstra runs regardless of image size
    let horizontal = graph.shortest_paths(&Pixel::LEFT_SOURCE);
    let vertical = graph.shortest_paths(&Pixel::TOP_SOURCE);

    let whitespace_rows: Vec<usize> = (0..rows)
        .filter(|&i| {
            // Unreachable target counts as not-whitespace
            horizontal.get(&Pixel::at(i, cols - 1)) == Some(&((cols - 1) as u64))
        })
        .collect();

    let whitespace_cols: Vec<usize> = (0..cols)
        .filter(|&j| vertical.get(&Pixel::at(rows - 1, j)) == Some(&((rows - 1) as u64)))
        .collect();

    debug!(
        rows = whitespace_rows.len(),
        cols = whitespace_cols.len(),
        "separation sweep complete"
    );

    Separation {
        rows: whitespace_rows,
        cols: whitespace_cols,
    }
}

/// Find the separation of an image file
///
/// Loads the pixel matrix through the bitmap collaborator; a load failure
/// surfaces as `SeparatorError::Bitmap` with no partial result.
pub fn find_separation_in_file(path: impl AsRef<Path>) -> SeparatorResult<Separation> {
    let matrix = bitmap::load_matrix(path)?;
    Ok(find_separation(&matrix))
}

fn build_pixel_graph(matrix: &PixelMatrix) -> WeightedGraph<Pixel> {
    let rows = matrix.rows();
    let cols = matrix.cols();

    let mut graph = WeightedGraph::new();
    for i in 0..rows {
        for j in 0..cols {
            graph.add_vertex(Pixel::at(i, j));
        }
    }
    graph.add_vertex(Pixel::LEFT_SOURCE);
    graph.add_vertex(Pixel::TOP_SOURCE);

    for i in 0..rows {
        for j in 0..cols {
            let pixel = Pixel::at(i, j);

            // Up to four edges toward in-bounds neighbors
            if j > 0 {
                let left = Pixel::at(i, j - 1);
                graph.add_edge(&pixel, &left, step_weight(matrix, i, j, i, j - 1));
            }
            if j + 1 < cols {
                let right = Pixel::at(i, j + 1);
                graph.add_edge(&pixel, &right, step_weight(matrix, i, j, i, j + 1));
            }
            if i > 0 {
                let up = Pixel::at(i - 1, j);
                graph.add_edge(&pixel, &up, step_weight(matrix, i, j, i - 1, j));
            }
            if i + 1 < rows {
                let down = Pixel::at(i + 1, j);
                graph.add_edge(&pixel, &down, step_weight(matrix, i, j, i + 1, j));
            }

            // Cost-free entry edges from the synthetic sources
            if j == 0 {
                graph.add_edge(&Pixel::LEFT_SOURCE, &pixel, 0);
            }
            if i == 0 {
                graph.add_edge(&Pixel::TOP_SOURCE, &pixel, 0);
            }
        }
    }

    graph
}

/// Weight of the step between two in-bounds pixels: cheap only when both
/// endpoints are whitespace
fn step_weight(matrix: &PixelMatrix, ar: usize, ac: usize, br: usize, bc: usize) -> i64 {
    let a = matrix.get(ar, ac);
    let b = matrix.get(br, bc);
    if a == Some(WHITESPACE) && b == Some(WHITESPACE) {
        BLANK_WEIGHT
    } else {
        INK_WEIGHT
    }
}

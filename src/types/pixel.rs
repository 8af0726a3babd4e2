use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel: a (row, column) coordinate in the image grid
///
/// Real pixels always have non-negative coordinates. Two reserved coordinates
/// outside that domain act as synthetic source vertices for the separation
/// sweeps, so they can never collide with a real pixel by construction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub row: i32,
    pub col: i32,
}

impl Pixel {
    /// Synthetic source connected to every pixel in column 0.
    /// Dijkstra from here sweeps the image left-to-right.
    pub const LEFT_SOURCE: Pixel = Pixel { row: -1, col: -1 };

    /// Synthetic source connected to every pixel in row 0.
    /// Dijkstra from here sweeps the image top-to-bottom.
    pub const TOP_SOURCE: Pixel = Pixel { row: -2, col: -2 };

    /// Create a pixel coordinate
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Create a pixel from unsigned matrix indices
    pub fn at(row: usize, col: usize) -> Self {
        Self {
            row: row as i32,
            col: col as i32,
        }
    }

    /// True for the two synthetic sources, false for any real coordinate
    pub fn is_synthetic(&self) -> bool {
        self.row < 0 || self.col < 0
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_creation() {
        let p = Pixel::new(3, 7);
        assert_eq!(p.row, 3);
        assert_eq!(p.col, 7);
        assert!(!p.is_synthetic());
    }

    #[test]
    fn test_sources_are_synthetic_and_distinct() {
        assert!(Pixel::LEFT_SOURCE.is_synthetic());
        assert!(Pixel::TOP_SOURCE.is_synthetic());
        assert_ne!(Pixel::LEFT_SOURCE, Pixel::TOP_SOURCE);
    }

    #[test]
    fn test_sources_never_equal_real_pixels() {
        for row in 0..4 {
            for col in 0..4 {
                let p = Pixel::new(row, col);
                assert_ne!(p, Pixel::LEFT_SOURCE);
                assert_ne!(p, Pixel::TOP_SOURCE);
            }
        }
    }

    #[test]
    fn test_pixel_display() {
        assert_eq!(format!("{}", Pixel::new(2, 5)), "(2, 5)");
    }

    #[test]
    fn test_pixel_at_conversion() {
        assert_eq!(Pixel::at(1, 2), Pixel::new(1, 2));
    }
}

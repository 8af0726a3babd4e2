/// Core data types for separation analysis
///
/// This module defines the fundamental types used throughout the system:
/// - Pixel: (row, col) coordinate, including the two synthetic source vertices
/// - PixelMatrix: row-major matrix of packed ARGB color values

pub mod matrix;
pub mod pixel;

pub use matrix::{MatrixError, PixelMatrix};
pub use pixel::Pixel;

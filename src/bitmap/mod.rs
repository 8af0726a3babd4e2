/// Bitmap collaborator
///
/// Decodes image files into the packed ARGB `PixelMatrix` the separator
/// reads, and writes the overlay visualization of a detected separation.
/// The core never interprets channel structure beyond packing; equality
/// against the whitespace sentinel is the only color semantic it needs.

use crate::separator::Separation;
use crate::types::{MatrixError, PixelMatrix};
use image::{Rgba, RgbaImage};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Bitmap load/save errors
#[derive(Error, Debug)]
pub enum BitmapError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),
}

/// Result type for bitmap operations
pub type BitmapResult<T> = Result<T, BitmapError>;

/// Load an image file as a rows x cols matrix of packed 0xAARRGGBB values
///
/// An opaque white pixel packs to `0xFFFFFFFF`. Alpha comes from the decoded
/// image, so translucent white does not collide with the whitespace sentinel.
pub fn load_matrix(path: impl AsRef<Path>) -> BitmapResult<PixelMatrix> {
    let path = path.as_ref();
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();

    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
            data.push(pack_argb(a, r, g, b));
        }
    }

    debug!(path = %path.display(), rows = height, cols = width, "bitmap loaded");

    Ok(PixelMatrix::from_vec(height as usize, width as usize, data)?)
}

/// Write a copy of `input` with the separation drawn over it
///
/// Whitespace rows become red lines and whitespace columns green lines,
/// matching the usual debugging overlay for separation output.
pub fn write_overlay(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    separation: &Separation,
) -> BitmapResult<()> {
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    let mut img: RgbaImage = image::open(input.as_ref())?.to_rgba8();
    let (width, height) = img.dimensions();

    for &row in &separation.rows {
        if (row as u32) < height {
            for x in 0..width {
                img.put_pixel(x, row as u32, RED);
            }
        }
    }
    for &col in &separation.cols {
        if (col as u32) < width {
            for y in 0..height {
                img.put_pixel(col as u32, y, GREEN);
            }
        }
    }

    img.save(output.as_ref())?;
    debug!(path = %output.as_ref().display(), "overlay written");
    Ok(())
}

fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_argb() {
        assert_eq!(pack_argb(0xFF, 0xFF, 0xFF, 0xFF), 0xFFFF_FFFF);
        assert_eq!(pack_argb(0xFF, 0x00, 0x00, 0x00), 0xFF00_0000);
        assert_eq!(pack_argb(0x12, 0x34, 0x56, 0x78), 0x1234_5678);
    }
}

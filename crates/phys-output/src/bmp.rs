//! Uncompressed 24-bit BMP backend.
//!
//! The format is the plain Windows `BITMAPINFOHEADER` layout: a 14-byte file
//! header, a 40-byte info header, then pixel rows bottom-up in B, G, R order
//! with each row zero-padded to a 4-byte boundary.  Every viewer opens it
//! and no compression dependency is needed.

use std::fs;
use std::io;
use std::path::Path;

use crate::{ImageWriter, PixelImage};

/// Offset of the pixel data: 14-byte file header + 40-byte info header.
const PIXEL_DATA_OFFSET: u32 = 54;

/// 72 DPI expressed in pixels per metre, the conventional BMP resolution.
const PPM_72DPI: i32 = 2835;

/// Bytes of zero padding appended to each pixel row.
#[inline]
fn row_padding(width: u32) -> usize {
    (4 - (width as usize * 3) % 4) % 4
}

/// Encode `image` as a complete BMP byte stream.
pub fn encode(image: &PixelImage) -> Vec<u8> {
    let width = image.width();
    let height = image.height();
    let padding = row_padding(width);
    let row_size = width as usize * 3 + padding;
    let data_size = row_size * height as usize;
    let file_size = PIXEL_DATA_OFFSET as usize + data_size;

    let mut out = Vec::with_capacity(file_size);

    // File header.
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());

    // Info header.  Positive height marks the rows as bottom-up.
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(data_size as u32).to_le_bytes());
    out.extend_from_slice(&PPM_72DPI.to_le_bytes());
    out.extend_from_slice(&PPM_72DPI.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    // Pixel rows, bottom row first, B-G-R per pixel.
    for y in (0..height).rev() {
        for x in 0..width {
            let (r, g, b) = image.pixel_at(x, y);
            out.push(b);
            out.push(g);
            out.push(r);
        }
        out.resize(out.len() + padding, 0);
    }

    out
}

/// Writes frames as 24-bit BMP files.
pub struct BmpWriter;

impl ImageWriter for BmpWriter {
    fn write_image(&mut self, path: &Path, image: &PixelImage) -> io::Result<()> {
        fs::write(path, encode(image))
    }
}

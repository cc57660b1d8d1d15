//! `PixelImage` — the RGB8 frame buffer handed to image writers.

use phys_field::TrailField;

/// A width x height RGB8 image, row-major, row 0 at the top.
///
/// Pixel `(x, y)` occupies bytes `3 * (y * width + x) ..+ 3` in
/// `pixels`, in R, G, B order.  Writers reorder and flip as their format
/// demands.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PixelImage {
    width:  u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelImage {
    /// Allocate an all-black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    /// Render a trail field to grayscale, normalized to the frame's peak.
    ///
    /// The brightest cell maps to 255 regardless of its absolute value, so
    /// faint early-simulation trails are still visible.  An all-zero field
    /// renders black.
    pub fn from_field(field: &TrailField) -> Self {
        let mut image = Self::new(field.width(), field.height());
        let max = field.max_value();
        if max <= 0.0 {
            return image;
        }

        for (i, &cell) in field.cells().iter().enumerate() {
            let level = (cell / max * 255.0).round() as u8;
            let base = i * 3;
            image.pixels[base] = level;
            image.pixels[base + 1] = level;
            image.pixels[base + 2] = level;
        }
        image
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB8 bytes, row-major from the top-left corner.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The `(r, g, b)` value of one pixel.
    pub fn pixel_at(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let base = 3 * (y as usize * self.width as usize + x as usize);
        (self.pixels[base], self.pixels[base + 1], self.pixels[base + 2])
    }

    /// Overwrite one pixel with `(r, g, b)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: (u8, u8, u8)) {
        let base = 3 * (y as usize * self.width as usize + x as usize);
        self.pixels[base] = rgb.0;
        self.pixels[base + 1] = rgb.1;
        self.pixels[base + 2] = rgb.2;
    }
}

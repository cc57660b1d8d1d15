//! The `ImageWriter` trait implemented by image backends.

use std::io;
use std::path::Path;

use crate::PixelImage;

/// A sink that persists rendered frames.
///
/// The framework ships [`BmpWriter`][crate::BmpWriter]; hosts embedding the
/// simulation can substitute their own (a texture upload, a PNG encoder, a
/// test double) without touching the export logic.
pub trait ImageWriter {
    /// Write `image` to `path`, replacing any existing file.
    fn write_image(&mut self, path: &Path, image: &PixelImage) -> io::Result<()>;
}

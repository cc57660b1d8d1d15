//! `RenderExporter` — drives the engine one step per frame and hands the
//! rendered field to an [`ImageWriter`].

use std::path::{Path, PathBuf};

use phys_core::CoreError;
use phys_engine::SimulationEngine;

use crate::{ImageWriter, PixelImage, RenderError, RenderResult};

/// Derive the path of frame `frame` from `base` by suffixing the file stem.
///
/// `renders/render.bmp` becomes `renders/render_3.bmp`; a base without an
/// extension just gains the suffix.
pub fn frame_path(base: &Path, frame: u32) -> PathBuf {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("frame");
    let name = match base.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_{frame}.{ext}"),
        None => format!("{stem}_{frame}"),
    };
    base.with_file_name(name)
}

/// Couples a [`SimulationEngine`] to an [`ImageWriter`] for frame export.
///
/// Every exported frame advances the simulation exactly one step first, so
/// an animation of `n` frames is also a run of `n` steps — frame `i` shows
/// the world after step `i`.
pub struct RenderExporter<'a, W: ImageWriter> {
    engine: &'a mut SimulationEngine,
    writer: &'a mut W,
}

impl<'a, W: ImageWriter> RenderExporter<'a, W> {
    pub fn new(engine: &'a mut SimulationEngine, writer: &'a mut W) -> Self {
        Self { engine, writer }
    }

    /// Step once and write the resulting frame to `path`.
    pub fn render_single_frame(&mut self, path: &Path) -> RenderResult<()> {
        self.engine.step();
        let image = PixelImage::from_field(&self.engine.field);
        self.writer
            .write_image(path, &image)
            .map_err(|source| RenderError::Io { frame: 1, source })
    }

    /// Step and write `frames` numbered frames derived from `base`.
    ///
    /// Frames are written as they are produced; if frame `i` fails, frames
    /// `1..i` remain on disk and the error names `i`.
    pub fn render_animation(&mut self, base: &Path, frames: u32) -> RenderResult<()> {
        if frames == 0 {
            return Err(CoreError::InvalidParameter {
                name:     "frame_count",
                value:    0.0,
                expected: ">= 1",
            }
            .into());
        }

        for frame in 1..=frames {
            self.engine.step();
            let image = PixelImage::from_field(&self.engine.field);
            self.writer
                .write_image(&frame_path(base, frame), &image)
                .map_err(|source| RenderError::Io { frame, source })?;
        }
        Ok(())
    }
}

//! `phys-output` — rendering and statistics writers for the physarum
//! framework.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`image`]    | `PixelImage` — RGB8 buffer rendered from a trail field |
//! | [`writer`]   | `ImageWriter` trait implemented by image backends      |
//! | [`bmp`]      | `BmpWriter` — uncompressed 24-bit BMP backend          |
//! | [`exporter`] | `RenderExporter` — step-then-write frame export        |
//! | [`stats`]    | `StatsWriter` — per-step CSV summaries                 |
//! | [`error`]    | `OutputError`, `RenderError`                           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use phys_output::{BmpWriter, RenderExporter};
//!
//! let mut writer = BmpWriter;
//! let mut exporter = RenderExporter::new(&mut engine, &mut writer);
//! exporter.render_animation(Path::new("renders/render.bmp"), 250)?;
//! ```

pub mod bmp;
pub mod error;
pub mod exporter;
pub mod image;
pub mod stats;
pub mod writer;


pub use bmp::BmpWriter;
pub use error::{OutputError, OutputResult, RenderError, RenderResult};
pub use exporter::{frame_path, RenderExporter};
pub use image::PixelImage;
pub use stats::{StatsWriter, StepStatsRow};
pub use writer::ImageWriter;

//! `phys-field` — dense planar grids for the physarum framework.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`field`]     | `TrailField` (chemoattractant concentrations)       |
//! | [`occupancy`] | `OccupancyGrid` (per-cell agent counts)             |
//!
//! # Data layout
//!
//! Both grids are a single flat `Vec` in row-major order.  A continuous
//! position `(x, y)` maps to the cell holding it by truncation:
//!
//! ```text
//! cells[ y as u32 * width + x as u32 ]
//! ```
//!
//! Movement is toroidal (positions wrap at the edges) but *sensing* is not:
//! sampling outside the grid reads zero, so trails never appear to continue
//! across the seam.

pub mod field;
pub mod occupancy;


pub use field::{TrailField, SATURATION};
pub use occupancy::OccupancyGrid;

//! `phys-agent` — Structure-of-Arrays agent storage for the physarum framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`pool`]    | `AgentPool` (SoA arrays), `AgentRngs` (per-agent RNG)   |
//! | [`builder`] | `AgentPoolBuilder` (allocation + disc scatter)          |
//!
//! Agent state is three parallel `Vec<f32>`s (x, y, heading) indexed by
//! `AgentId`.  Nothing here knows about trail fields or steering; the pool is
//! plain data that the engine reads and writes each step.

pub mod builder;
pub mod pool;


pub use builder::AgentPoolBuilder;
pub use pool::{AgentPool, AgentRngs};

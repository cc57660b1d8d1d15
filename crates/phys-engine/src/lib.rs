//! `phys-engine` — the simulation step loop for the physarum framework.
//!
//! # Three-pass step
//!
//! ```text
//! step():
//!   ⓪ Decay — multiply every trail cell by decay_factor (the retained
//!             fraction), so only this step's deposits survive a factor of 0.
//!   ① Sense — each agent samples the trail at three sensors and turns
//!             toward the strongest reading, then blends in centre
//!             attraction (parallel with the `parallel` feature).
//!   ② Move  — sequential, ascending AgentId: advance along the heading,
//!             wrap toroidally, resolve collisions, deposit trail.
//! ```
//!
//! The sense pass writes nothing but each agent's own heading, which is what
//! makes it safe to parallelize; the move pass stays sequential so collision
//! outcomes are identical run to run.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Runs the sense pass on Rayon's thread pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use phys_core::ParameterSet;
//! use phys_engine::SimulationEngine;
//!
//! let mut engine = SimulationEngine::new(ParameterSet::default())?;
//! engine.run_steps(100);
//! println!("trail total: {}", engine.field.total());
//! ```

pub mod engine;
pub mod steer;

#[cfg(test)]
mod tests;

pub use engine::SimulationEngine;
pub use steer::{judge_samples, SteerContext, Turn};

//! `phys-core` — foundational types for the `physarum` simulation framework.
//!
//! This crate is a dependency of every other `phys-*` crate.  It intentionally
//! has no `phys-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `TimerHandle`                                |
//! | [`params`] | `ParameterSet` with domain validation and clamping      |
//! | [`angle`]  | planar heading math (`wrap_angle`, `heading_vec`, …)    |
//! | [`rng`]    | `AgentRng` (per-agent deterministic stream)             |
//! | [`error`]  | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on `ParameterSet` for persistence   |

pub mod angle;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, TimerHandle};
pub use params::ParameterSet;
pub use rng::AgentRng;

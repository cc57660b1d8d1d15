//! # phys-control
//!
//! Run lifecycle for a physarum simulation embedded in a host
//! application: a small state machine that starts and stops the
//! per-frame timer, drives the engine once per tick, and gates the
//! render operations on the current state.
//!
//! ```text
//!            start()                       stop() / halt signal
//!   Idle ──────────────▶ Running ──────────────────────────────▶ Idle
//!    ▲                      │
//!    │                      │ on_tick(): step + redraw request
//!    └──────────────────────┘ (timer keeps firing until cancelled)
//! ```
//!
//! | Module       | Responsibility                                        |
//! |--------------|-------------------------------------------------------|
//! | `host`       | [`TimerHost`] trait the embedding application implements |
//! | `scheduler`  | [`FrameScheduler`] — frame-rate interval and timer handle |
//! | `controller` | [`RunController`] — the Idle/Running state machine    |
//! | `error`      | [`ControlError`] and the crate-wide `Result` alias    |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use phys_control::{NoopHost, RunController, TickFlow};
//! use phys_core::ParameterSet;
//!
//! let mut ctl = RunController::new(ParameterSet::default(), NoopHost::default())?;
//! ctl.start()?;
//! while ctl.on_tick() == TickFlow::Continue {
//!     // host event loop runs between ticks
//! }
//! ```

pub mod controller;
pub mod error;
pub mod host;
pub mod scheduler;

pub use controller::{RunController, RunState, TickFlow};
pub use error::{ControlError, ControlResult};
pub use host::{NoopHost, TimerHost};
pub use scheduler::FrameScheduler;

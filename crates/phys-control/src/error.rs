//! Error type for lifecycle and render orchestration.

use phys_core::CoreError;
use phys_output::RenderError;
use thiserror::Error;

use crate::controller::RunState;

/// Everything that can go wrong while driving a run.
#[derive(Debug, Error)]
pub enum ControlError {
    /// The requested operation is not legal in the current state.
    #[error("cannot {requested} while {from}")]
    InvalidTransition {
        from:      RunState,
        requested: &'static str,
    },

    /// The parameter set failed validation.
    #[error("parameter validation failed: {0}")]
    Parameter(#[from] CoreError),

    /// A render operation failed after it was admitted.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

pub type ControlResult<T> = Result<T, ControlError>;

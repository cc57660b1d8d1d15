//! Error types for phys-output.

use phys_core::CoreError;
use thiserror::Error;

/// Errors that can occur when writing statistics output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;

/// Errors that can occur while exporting rendered frames.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing one frame failed.  `frame` is 1-based, matching the frame
    /// number in the file name, so the message points at the exact file.
    #[error("failed to write frame {frame}: {source}")]
    Io {
        frame: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid render request: {0}")]
    Parameter(#[from] CoreError),
}

/// Alias for `Result<T, RenderError>`.
pub type RenderResult<T> = Result<T, RenderError>;

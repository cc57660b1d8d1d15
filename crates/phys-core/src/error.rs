//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` (see `phys-control`), keeping error sites clean
//! while the parameter taxonomy stays in one place.

use thiserror::Error;

/// The base error type for `phys-core` and the validation boundary of the
/// whole framework.
///
/// `InvalidParameter` is raised when a [`ParameterSet`][crate::ParameterSet]
/// field is outside its declared domain.  It is only ever produced at
/// `reset()`/`start()`/export entry — never mid-step — so a running
/// simulation cannot fail on parameters it already accepted.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parameter `{name}` out of domain: got {value}, expected {expected}")]
    InvalidParameter {
        name:     &'static str,
        value:    f64,
        expected: &'static str,
    },
}

/// Shorthand result type for parameter validation.
pub type CoreResult<T> = Result<T, CoreError>;

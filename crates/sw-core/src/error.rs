//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface it.

use thiserror::Error;

/// The error type for `sw-core` parsing and record checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown phase {0:?} (expected one of D1, D7, D30, D90)")]
    UnknownPhase(String),

    #[error("trait {name} = {value} is outside [0, 1]")]
    TraitOutOfRange { name: &'static str, value: String },
}

/// Shorthand result type for `sw-core`.
pub type CoreResult<T> = Result<T, CoreError>;

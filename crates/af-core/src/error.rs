//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while validating colony-wide inputs.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid number of ants: {0} (must be at least 1)")]
    InvalidAgentCount(i64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `af-core`.
pub type CoreResult<T> = Result<T, CoreError>;

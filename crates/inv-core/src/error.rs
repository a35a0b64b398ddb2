//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `InvError` as one variant
//! where they need the shared cases.

use thiserror::Error;

/// Errors shared across `inv-*` crates.
#[derive(Debug, Error)]
pub enum InvError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `inv-core`.
pub type InvResult<T> = Result<T, InvError>;

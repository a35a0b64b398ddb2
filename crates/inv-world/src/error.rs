//! World-construction error type.

use thiserror::Error;

/// Errors produced while building or loading a [`World`][crate::World].
///
/// Once a world is built, nothing in this crate fails.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("city {0:?} is declared more than once")]
    DuplicateCity(String),

    #[error("map parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;

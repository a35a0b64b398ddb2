use inv_core::InvError;
use thiserror::Error;

/// Errors raised while setting up a simulation.  A built [`Sim`][crate::Sim]
/// never fails.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] InvError),

    #[error("alien count {requested} must be between 1 and the city count {cities}")]
    AlienCount { requested: usize, cities: usize },

    #[error("{what} length {got} does not match alien count {expected}")]
    AlienCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("invalid placement: {0}")]
    Placement(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;

//! Run configuration.

use crate::{InvError, InvResult};

/// Number of moves after which an alien is considered exhausted and stops
/// roaming.  Guarantees termination on graphs where aliens never meet.
pub const DEFAULT_VISIT_CAP: u32 = 10_000;

/// Top-level simulation configuration.
///
/// Typically assembled by the application from CLI flags and an optional
/// JSON file, then handed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed for initial placement and destination choice.
    ///
    /// Parallel rounds take the world lock in scheduler order, so with more
    /// than one alien the same seed need not reproduce a run.
    pub seed: u64,

    /// Moves after which an alien is resolved as exhausted.
    pub visit_cap: u32,

    /// Worker thread count for the per-round Rayon pool.  `None` uses all
    /// logical cores.
    pub num_threads: Option<usize>,
}

impl SimConfig {
    /// Reject configurations that could never converge or never start.
    pub fn validate(&self) -> InvResult<()> {
        if self.visit_cap == 0 {
            return Err(InvError::Config("visit_cap must be at least 1".into()));
        }
        if self.num_threads == Some(0) {
            return Err(InvError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:        0,
            visit_cap:   DEFAULT_VISIT_CAP,
            num_threads: None,
        }
    }
}

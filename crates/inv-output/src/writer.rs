//! The `OutputWriter` trait implemented by backend writers.

use crate::{AlienStateRow, DestructionRow, OutputResult, RoundSummaryRow};

/// A sink for run output.
///
/// Errors are not fatal to the run: [`SimOutputObserver`][crate::SimOutputObserver]
/// keeps the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    fn write_destruction(&mut self, row: &DestructionRow) -> OutputResult<()>;

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()>;

    /// Write the final state of every alien.
    fn write_alien_states(&mut self, rows: &[AlienStateRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

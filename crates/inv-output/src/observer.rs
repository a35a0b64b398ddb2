//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use inv_world::World;
use inv_sim::{Destruction, Invasion, InvasionReport, RoundSummary, SimObserver};

use crate::row::{AlienStateRow, DestructionRow, RoundSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes destructions, round summaries and the final
/// alien states to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_destruction(&mut self, round: u64, event: &Destruction, world: &World) {
        let row = DestructionRow {
            round,
            city:   world.city(event.city).name.clone(),
            aliens: event.aliens.iter().map(|a| a.0).collect(),
        };
        let result = self.writer.write_destruction(&row);
        self.store_err(result);
    }

    fn on_round_end(&mut self, summary: &RoundSummary) {
        let result = self.writer.write_round_summary(&RoundSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_converged(&mut self, _report: &InvasionReport, invasion: &Invasion) {
        let rows: Vec<AlienStateRow> = invasion
            .aliens
            .iter()
            .enumerate()
            .map(|(i, state)| AlienStateRow {
                alien:  i as u32,
                city:   invasion.world.city(state.city).name.clone(),
                visits: state.visits,
                dead:   state.dead,
                stuck:  state.stuck,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_alien_states(&rows);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}

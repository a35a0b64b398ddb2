//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `destructions.csv`
//! - `round_summaries.csv`
//! - `alien_states.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AlienStateRow, DestructionRow, OutputResult, RoundSummaryRow};

/// Writes run output to three CSV files.
pub struct CsvWriter {
    destructions: Writer<File>,
    summaries:    Writer<File>,
    aliens:       Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut destructions = Writer::from_path(dir.join("destructions.csv"))?;
        destructions.write_record(["round", "city", "aliens"])?;

        let mut summaries = Writer::from_path(dir.join("round_summaries.csv"))?;
        summaries.write_record(["round", "eligible", "moves", "stalled", "skipped", "destructions"])?;

        let mut aliens = Writer::from_path(dir.join("alien_states.csv"))?;
        aliens.write_record(["alien", "city", "visits", "dead", "stuck"])?;

        Ok(Self { destructions, summaries, aliens, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_destruction(&mut self, row: &DestructionRow) -> OutputResult<()> {
        let aliens: Vec<String> = row.aliens.iter().map(u32::to_string).collect();
        self.destructions.write_record(&[
            row.round.to_string(),
            row.city.clone(),
            aliens.join(";"),
        ])?;
        Ok(())
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.round.to_string(),
            row.eligible.to_string(),
            row.moves.to_string(),
            row.stalled.to_string(),
            row.skipped.to_string(),
            row.destructions.to_string(),
        ])?;
        Ok(())
    }

    fn write_alien_states(&mut self, rows: &[AlienStateRow]) -> OutputResult<()> {
        for row in rows {
            self.aliens.write_record(&[
                row.alien.to_string(),
                row.city.clone(),
                row.visits.to_string(),
                (row.dead as u8).to_string(),
                (row.stuck as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.destructions.flush()?;
        self.summaries.flush()?;
        self.aliens.flush()?;
        Ok(())
    }
}

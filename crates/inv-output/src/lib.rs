//! `inv-output` — run output writers for the invasion simulator.
//!
//! | Backend | Files created                                                  |
//! |---------|----------------------------------------------------------------|
//! | CSV     | `destructions.csv`, `round_summaries.csv`, `alien_states.csv`  |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `inv_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use inv_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AlienStateRow, DestructionRow, RoundSummaryRow};
pub use writer::OutputWriter;

//! `inv-sim` — round loop orchestrator for the alien invasion simulator.
//!
//! # Round loop
//!
//! ```text
//! loop:
//!   ① Select   — scan every alien; stop once all are dead, stuck, or have
//!                used up their visit cap.  Runs between rounds, lock-free.
//!   ② Move     — one Rayon task per eligible alien.  Each task takes the
//!                world lock for one full `move_alien`:
//!                  pick a random road → relocate → collision check →
//!                  destroy city + prune roads → dead-end check
//!   ③ Barrier  — wait for the whole cohort, then report destructions and
//!                the round summary to the observer.
//! ```
//!
//! The whole graph sits behind one `parking_lot::Mutex`.  A single move can
//! rewrite the edge list of every city (pruning roads into a destroyed
//! city), so per-city locks would need a global acquisition order anyway.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use inv_core::SimConfig;
//! use inv_sim::{NoopObserver, SimBuilder};
//!
//! let world = inv_world::load_world(Path::new("cities.txt"))?;
//! let mut sim = SimBuilder::new(SimConfig::default(), world, 4).build()?;
//! let report = sim.run(&mut NoopObserver);
//! ```

pub mod alien;
pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;
pub mod termination;


pub use alien::{AlienState, AlienStatus};
pub use builder::SimBuilder;
pub use engine::{Destruction, Invasion, MoveOutcome, move_alien};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{InvasionReport, RoundSummary};
pub use sim::{RoundResult, Sim, run_simulation};
pub use termination::{Selection, select_active};

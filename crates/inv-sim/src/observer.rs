//! Simulation observer trait for progress reporting and data collection.

use inv_core::AlienId;
use inv_world::World;

use crate::{Destruction, Invasion, InvasionReport, RoundSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] between rounds.
///
/// Every hook runs on the driver thread after the round barrier, so
/// implementors need no synchronisation.  All methods default to no-ops.
///
/// # Example — destruction printer
///
/// ```rust,ignore
/// struct Announcer;
///
/// impl SimObserver for Announcer {
///     fn on_destruction(&mut self, _round: u64, event: &Destruction, world: &World) {
///         println!("{}", event.describe(world));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the movement tasks of `round` are launched.
    fn on_round_start(&mut self, _round: u64, _eligible: &[AlienId]) {}

    /// Called once per city destroyed during `round`, in the order the
    /// destructions happened.
    fn on_destruction(&mut self, _round: u64, _event: &Destruction, _world: &World) {}

    /// Called after every movement task of the round has finished.
    fn on_round_end(&mut self, _summary: &RoundSummary) {}

    /// Called once when no alien is eligible any more.
    fn on_converged(&mut self, _report: &InvasionReport, _invasion: &Invasion) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

//! The `Sim` struct and its round loop.

use parking_lot::Mutex;
use rayon::prelude::*;

use inv_core::{Chooser, SimConfig, SimRng};
use inv_world::World;

use crate::{
    Invasion, InvasionReport, MoveOutcome, RoundSummary, SimBuilder, SimObserver, SimResult,
    move_alien, select_active,
};

// ── Shared state ──────────────────────────────────────────────────────────────

/// Everything a movement task touches, behind the one world lock.  The
/// chooser lives here too so every random pick is made under the lock.
pub(crate) struct Shared<C> {
    pub(crate) invasion: Invasion,
    pub(crate) chooser:  C,
}

/// Whether [`Sim::step_round`] ran a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundResult {
    Continued(RoundSummary),
    /// Nothing was eligible; no round was run.
    Converged,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Two states: running and converged.  Each call to
/// [`step_round`](Self::step_round) selects the eligible aliens, runs one
/// movement task per alien on the worker pool, and returns once the whole
/// cohort has finished.  Once nothing is eligible the sim is converged and
/// further steps do nothing.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<C: Chooser = SimRng> {
    pub config: SimConfig,

    pub(crate) shared: Mutex<Shared<C>>,
    pub(crate) pool:   rayon::ThreadPool,

    /// Rounds executed so far.
    pub(crate) round: u64,
}

impl<C: Chooser> Sim<C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run rounds until convergence and return the final report.
    ///
    /// Terminates for every finite map: each round either resolves an alien
    /// or moves every eligible alien one step closer to the visit cap.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> InvasionReport {
        while let RoundResult::Continued(_) = self.step_round(observer) {}

        let report = self.report();
        tracing::info!(
            rounds    = report.rounds,
            destroyed = report.destroyed.len(),
            dead      = report.dead.len(),
            stuck     = report.stuck.len(),
            exhausted = report.exhausted.len(),
            "invasion converged",
        );
        observer.on_converged(&report, &self.shared.get_mut().invasion);
        report
    }

    /// Run a single round, or report convergence if nothing is eligible.
    pub fn step_round<O: SimObserver>(&mut self, observer: &mut O) -> RoundResult {
        // `get_mut` proves no movement task is running: no lock needed.
        let visit_cap = self.config.visit_cap;
        let selection = select_active(&self.shared.get_mut().invasion.aliens, visit_cap);
        if selection.done {
            return RoundResult::Converged;
        }

        self.round += 1;
        let round = self.round;
        observer.on_round_start(round, &selection.eligible);
        tracing::debug!(round, eligible = selection.eligible.len(), "round start");

        let shared = &self.shared;
        let outcomes: Vec<MoveOutcome> = self.pool.install(|| {
            selection
                .eligible
                .par_iter()
                .map(|&alien| {
                    let mut guard = shared.lock();
                    let Shared { invasion, chooser } = &mut *guard;
                    move_alien(invasion, alien, chooser)
                })
                .collect()
        });

        // ── Barrier passed ────────────────────────────────────────────────
        let invasion = &mut self.shared.get_mut().invasion;
        for event in invasion.drain_destructions() {
            observer.on_destruction(round, &event, &invasion.world);
        }

        let summary = RoundSummary::tally(round, &outcomes);
        tracing::debug!(
            round,
            moves        = summary.moves,
            destructions = summary.destructions,
            "round end",
        );
        observer.on_round_end(&summary);
        RoundResult::Continued(summary)
    }

    /// Snapshot of the current state.
    pub fn report(&mut self) -> InvasionReport {
        InvasionReport::collect(self.round, &self.shared.get_mut().invasion, self.config.visit_cap)
    }

    pub fn rounds(&self) -> u64 {
        self.round
    }

    /// Current state, readable between rounds.
    pub fn invasion(&mut self) -> &Invasion {
        &self.shared.get_mut().invasion
    }

    pub fn world(&mut self) -> &World {
        &self.invasion().world
    }

    pub fn into_invasion(self) -> Invasion {
        self.shared.into_inner().invasion
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Unleash `alien_count` aliens on `world` with random placement and a seeded
/// RNG, run to convergence, and return the report with the final state.
///
/// Fails without running if `alien_count` is zero or exceeds the number of
/// cities.
pub fn run_simulation(
    world:       World,
    alien_count: usize,
    config:      SimConfig,
) -> SimResult<(InvasionReport, Invasion)> {
    let mut sim = SimBuilder::new(config, world, alien_count).build()?;
    let report = sim.run(&mut crate::NoopObserver);
    Ok((report, sim.into_invasion()))
}

//! Plain summary types handed to observers and returned by `Sim::run`.

use inv_core::{AlienId, CityId};

use crate::{AlienStatus, Invasion, MoveOutcome};

/// Tally of one round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round:        u64,
    /// Aliens selected to move.
    pub eligible:     usize,
    /// Aliens that changed city.
    pub moves:        usize,
    /// Aliens found with no road out.
    pub stalled:      usize,
    /// Aliens skipped because an earlier move this round killed them.
    pub skipped:      usize,
    pub destructions: usize,
}

impl RoundSummary {
    pub(crate) fn tally(round: u64, outcomes: &[MoveOutcome]) -> Self {
        let mut summary = RoundSummary { round, eligible: outcomes.len(), ..Self::default() };
        for outcome in outcomes {
            match outcome {
                MoveOutcome::Skipped          => summary.skipped += 1,
                MoveOutcome::Stuck { .. }     => summary.stalled += 1,
                MoveOutcome::Moved { .. }     => summary.moves += 1,
                MoveOutcome::Destroyed { .. } => {
                    summary.moves += 1;
                    summary.destructions += 1;
                }
            }
        }
        summary
    }
}

/// Final (or current) state of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvasionReport {
    /// Rounds executed so far.
    pub rounds:    u64,
    /// Destroyed cities in arena order.
    pub destroyed: Vec<CityId>,
    pub dead:      Vec<AlienId>,
    pub stuck:     Vec<AlienId>,
    /// Aliens that hit the visit cap.
    pub exhausted: Vec<AlienId>,
    /// Aliens still eligible.  Empty once converged.
    pub roaming:   Vec<AlienId>,
}

impl InvasionReport {
    pub fn collect(rounds: u64, invasion: &Invasion, visit_cap: u32) -> Self {
        let mut report = InvasionReport {
            rounds,
            destroyed: invasion
                .world
                .cities()
                .filter(|(_, c)| c.destroyed)
                .map(|(id, _)| id)
                .collect(),
            ..Self::default()
        };
        for (i, alien) in invasion.aliens.iter().enumerate() {
            let id = AlienId(i as u32);
            match alien.status(visit_cap) {
                AlienStatus::Dead      => report.dead.push(id),
                AlienStatus::Stuck     => report.stuck.push(id),
                AlienStatus::Exhausted => report.exhausted.push(id),
                AlienStatus::Roaming   => report.roaming.push(id),
            }
        }
        report
    }

    pub fn converged(&self) -> bool {
        self.roaming.is_empty()
    }
}

//! Plain data row types written by output backends.

use inv_sim::RoundSummary;

/// One city destroyed during a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestructionRow {
    pub round:  u64,
    pub city:   String,
    /// Alien ids in the order they entered the city.
    pub aliens: Vec<u32>,
}

/// Tally of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummaryRow {
    pub round:        u64,
    pub eligible:     u64,
    pub moves:        u64,
    pub stalled:      u64,
    pub skipped:      u64,
    pub destructions: u64,
}

impl From<&RoundSummary> for RoundSummaryRow {
    fn from(s: &RoundSummary) -> Self {
        Self {
            round:        s.round,
            eligible:     s.eligible as u64,
            moves:        s.moves as u64,
            stalled:      s.stalled as u64,
            skipped:      s.skipped as u64,
            destructions: s.destructions as u64,
        }
    }
}

/// Final state of one alien.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlienStateRow {
    pub alien:  u32,
    /// Last city entered (the destroyed city for dead aliens).
    pub city:   String,
    pub visits: u32,
    pub dead:   bool,
    pub stuck:  bool,
}

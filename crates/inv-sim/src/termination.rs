//! Termination detection between rounds.

use inv_core::AlienId;

use crate::AlienState;

/// Result of scanning all aliens before a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// `true` when every alien is dead, stuck, or exhausted.
    pub done:     bool,
    /// Aliens that move in the next round, ascending by id.
    pub eligible: Vec<AlienId>,
}

/// Split aliens into resolved and eligible.
///
/// Takes a plain slice: the simulator hands it the alien arena through
/// `Mutex::get_mut`, which is only possible while no round is in flight.
pub fn select_active(aliens: &[AlienState], visit_cap: u32) -> Selection {
    let eligible: Vec<AlienId> = aliens
        .iter()
        .enumerate()
        .filter(|(_, a)| !a.is_resolved(visit_cap))
        .map(|(i, _)| AlienId(i as u32))
        .collect();

    Selection { done: eligible.is_empty(), eligible }
}

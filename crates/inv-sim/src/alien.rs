//! Per-alien state.

use inv_core::CityId;

/// Mutable state of one alien.  Indexed by `AlienId` in
/// [`Invasion::aliens`][crate::Invasion::aliens] and only written by
/// [`move_alien`][crate::move_alien] while the world lock is held.
///
/// `dead` and `stuck` are never cleared once set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlienState {
    /// Current city.  A dead alien keeps pointing at the city it died in.
    pub city:   CityId,
    /// Completed moves.
    pub visits: u32,
    pub dead:   bool,
    /// Set when the alien finds itself in a city with no roads out.
    pub stuck:  bool,
}

/// Resolution of an alien, in precedence order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AlienStatus {
    Dead,
    Stuck,
    /// Reached the visit cap without dying or getting stuck.
    Exhausted,
    /// Still eligible to move.
    Roaming,
}

impl AlienState {
    pub fn new(city: CityId) -> Self {
        Self { city, visits: 0, dead: false, stuck: false }
    }

    /// `true` once the alien can no longer be selected to move.
    #[inline]
    pub fn is_resolved(&self, visit_cap: u32) -> bool {
        self.dead || self.stuck || self.visits >= visit_cap
    }

    pub fn status(&self, visit_cap: u32) -> AlienStatus {
        if self.dead {
            AlienStatus::Dead
        } else if self.stuck {
            AlienStatus::Stuck
        } else if self.visits >= visit_cap {
            AlienStatus::Exhausted
        } else {
            AlienStatus::Roaming
        }
    }
}

//! The movement engine: one alien, one step.
//!
//! [`Invasion`] bundles everything a move may touch (the world and every
//! alien's state) so the simulator can guard it with a single mutex.
//! [`move_alien`] is the only code that mutates it during a round.

use inv_core::{AlienId, Chooser, CityId};
use inv_world::World;

use crate::AlienState;

// ── Invasion ──────────────────────────────────────────────────────────────────

/// The shared mutable state of a run.
#[derive(Clone, Debug)]
pub struct Invasion {
    pub world:  World,

    /// Per-alien state, indexed by `AlienId`.
    pub aliens: Vec<AlienState>,

    /// Destructions since the last drain, in the order they happened.
    pub(crate) destructions: Vec<Destruction>,
}

impl Invasion {
    /// Place one alien per entry of `positions`; alien `i` starts in
    /// `positions[i]`.
    ///
    /// Callers guarantee the positions are distinct, surviving cities of
    /// `world` (see [`SimBuilder`][crate::SimBuilder] for the validated path).
    pub fn new(mut world: World, positions: &[CityId]) -> Self {
        let aliens = positions
            .iter()
            .enumerate()
            .map(|(i, &city)| {
                world.place(AlienId(i as u32), city);
                AlienState::new(city)
            })
            .collect();
        Self { world, aliens, destructions: Vec::new() }
    }

    #[inline]
    pub fn alien(&self, id: AlienId) -> &AlienState {
        &self.aliens[id.index()]
    }

    pub fn alien_count(&self) -> usize {
        self.aliens.len()
    }

    /// Remove and return the destruction events logged so far.
    pub fn drain_destructions(&mut self) -> Vec<Destruction> {
        std::mem::take(&mut self.destructions)
    }
}

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// A city destroyed by colliding aliens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destruction {
    pub city:   CityId,
    /// Every alien that was in the city, in arrival order.
    pub aliens: Vec<AlienId>,
}

impl Destruction {
    /// `"Foo has been destroyed by Alien-3 and Alien-7!"`
    pub fn describe(&self, world: &World) -> String {
        let names: Vec<String> = self.aliens.iter().map(|a| a.name()).collect();
        let by = match names.split_last() {
            None => "nobody".to_string(),
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
        };
        format!("{} has been destroyed by {by}!", world.city(self.city).name)
    }
}

/// What a single [`move_alien`] call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The alien was already dead or stuck.
    Skipped,
    /// No road out of the current city; the alien is now stuck.
    Stuck { at: CityId },
    /// Moved without meeting anyone.
    Moved { from: CityId, to: CityId },
    /// Moved into an occupied city, destroying it.
    Destroyed { from: CityId, to: CityId },
}

impl MoveOutcome {
    #[inline]
    pub fn relocated(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. } | MoveOutcome::Destroyed { .. })
    }
}

// ── move_alien ────────────────────────────────────────────────────────────────

/// Advance `alien` by one step.
///
/// 1. Dead or stuck → no-op.
/// 2. Current city has no roads → mark stuck.
/// 3. Pick one road with `chooser` (uniform over the ordered edge list).
/// 4. Relocate: leave the source, enter the destination, count the visit.
/// 5. More than one alien in the destination → all of them die, the city is
///    destroyed and every road into it is removed.
/// 6. Destination has no roads left → mark stuck.
///
/// The caller must hold exclusive access to `invasion` for the whole call;
/// the simulator does this by locking its world mutex.
///
/// # Panics
/// Panics if `alien` or its recorded city is out of range, which the
/// simulator's invariants rule out.
pub fn move_alien<C: Chooser + ?Sized>(
    invasion: &mut Invasion,
    alien:    AlienId,
    chooser:  &mut C,
) -> MoveOutcome {
    let state = &invasion.aliens[alien.index()];
    if state.dead || state.stuck {
        return MoveOutcome::Skipped;
    }

    let from  = state.city;
    let edges = &invasion.world.city(from).edges;
    if edges.is_empty() {
        invasion.aliens[alien.index()].stuck = true;
        tracing::trace!(alien = %alien.name(), city = %invasion.world.city(from).name, "stuck");
        return MoveOutcome::Stuck { at: from };
    }

    let to = edges[chooser.choose_index(edges.len())].to;

    invasion.world.relocate(alien, from, to);
    let state = &mut invasion.aliens[alien.index()];
    state.city    = to;
    state.visits += 1;

    let collided = invasion.world.city(to).occupants.len() > 1;
    if collided {
        let casualties = invasion.world.destroy(to);
        for a in &casualties {
            invasion.aliens[a.index()].dead = true;
        }
        let event = Destruction { city: to, aliens: casualties };
        tracing::info!(city = %invasion.world.city(to).name, "{}", event.describe(&invasion.world));
        invasion.destructions.push(event);
    }

    if invasion.world.city(to).is_dead_end() {
        invasion.aliens[alien.index()].stuck = true;
    }

    tracing::trace!(
        alien = %alien.name(),
        from  = %invasion.world.city(from).name,
        to    = %invasion.world.city(to).name,
        collided,
        "moved",
    );

    if collided {
        MoveOutcome::Destroyed { from, to }
    } else {
        MoveOutcome::Moved { from, to }
    }
}

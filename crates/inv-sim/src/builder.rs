//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use parking_lot::Mutex;

use inv_core::{Chooser, CityId, SimConfig, SimRng};
use inv_world::World;

use crate::sim::Shared;
use crate::{Invasion, Sim, SimError, SimResult};

/// Seed offset for the placement shuffle, so placement and movement draw
/// from independent streams of the same master seed.
const PLACEMENT_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Fluent builder for [`Sim<C>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, visit cap, thread count
/// - [`World`] — the map
/// - alien count — `1 ..= world.city_count()`
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                         |
/// |-------------------|-------------------------------------------------|
/// | `.chooser(c)`     | `SimRng::new(config.seed)`                      |
/// | `.placement(v)`   | One alien per city on a seeded random subset    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, world, 3)
///     .chooser(SequenceChooser::first())
///     .placement(vec![CityId(0), CityId(2), CityId(4)])
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<C: Chooser = SimRng> {
    config:      SimConfig,
    world:       World,
    alien_count: usize,
    chooser:     C,
    placement:   Option<Vec<CityId>>,
}

impl SimBuilder<SimRng> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, world: World, alien_count: usize) -> Self {
        let chooser = SimRng::new(config.seed);
        Self { config, world, alien_count, chooser, placement: None }
    }
}

impl<C: Chooser> SimBuilder<C> {
    /// Replace the destination chooser, e.g. with a
    /// [`SequenceChooser`][inv_core::SequenceChooser] for deterministic tests.
    pub fn chooser<D: Chooser>(self, chooser: D) -> SimBuilder<D> {
        SimBuilder {
            config:      self.config,
            world:       self.world,
            alien_count: self.alien_count,
            chooser,
            placement:   self.placement,
        }
    }

    /// Supply the starting city of each alien (must be length `alien_count`,
    /// distinct, and not destroyed).
    pub fn placement(mut self, cities: Vec<CityId>) -> Self {
        self.placement = Some(cities);
        self
    }

    /// Validate inputs, place the aliens, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<C>> {
        self.config.validate()?;

        let cities = self.world.city_count();
        if self.alien_count == 0 || self.alien_count > cities {
            return Err(SimError::AlienCount { requested: self.alien_count, cities });
        }

        let positions = match self.placement {
            Some(p) => {
                validate_placement(&self.world, &p, self.alien_count)?;
                p
            }
            None => random_placement(&self.world, self.alien_count, self.config.seed)?,
        };

        let mut pool = rayon::ThreadPoolBuilder::new();
        if let Some(n) = self.config.num_threads {
            pool = pool.num_threads(n);
        }
        let pool = pool.build()?;

        tracing::debug!(
            aliens  = self.alien_count,
            cities,
            threads = pool.current_num_threads(),
            "simulation ready",
        );

        Ok(Sim {
            config: self.config,
            shared: Mutex::new(Shared {
                invasion: Invasion::new(self.world, &positions),
                chooser:  self.chooser,
            }),
            pool,
            round:  0,
        })
    }
}

// ── Placement helpers ─────────────────────────────────────────────────────────

fn random_placement(world: &World, count: usize, seed: u64) -> SimResult<Vec<CityId>> {
    let mut candidates = world.surviving_ids();
    if candidates.len() < count {
        return Err(SimError::AlienCount { requested: count, cities: candidates.len() });
    }
    SimRng::new(seed ^ PLACEMENT_SALT).shuffle(&mut candidates);
    candidates.truncate(count);
    Ok(candidates)
}

fn validate_placement(world: &World, positions: &[CityId], count: usize) -> SimResult<()> {
    if positions.len() != count {
        return Err(SimError::AlienCountMismatch {
            expected: count,
            got:      positions.len(),
            what:     "placement",
        });
    }
    let mut seen = HashSet::with_capacity(positions.len());
    for &city in positions {
        if city.index() >= world.city_count() {
            return Err(SimError::Placement(format!("{city} is not in the map")));
        }
        if world.city(city).destroyed {
            return Err(SimError::Placement(format!("{} is destroyed", world.city(city).name)));
        }
        if !seen.insert(city) {
            return Err(SimError::Placement(format!(
                "more than one alien starts in {}",
                world.city(city).name
            )));
        }
    }
    Ok(())
}

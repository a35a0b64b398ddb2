//! City arena, builder, and structural mutators.
//!
//! # Data layout
//!
//! Cities live in a `Vec<City>` indexed by [`CityId`].  A name index maps
//! each city name to its id for loading and rendering.  Destroyed cities are
//! tombstoned in place: the arena never shrinks, so every `CityId` recorded by
//! an alien stays resolvable for the whole run.
//!
//! # Invariants
//!
//! - A destroyed city has no edges, no occupants, and no city holds an edge
//!   targeting it.
//! - `occupants` is a set: an alien appears at most once.
//!
//! The mutators ([`place`](World::place), [`relocate`](World::relocate),
//! [`destroy`](World::destroy)) take `&mut self`.  The simulator keeps the
//! `World` behind a single mutex, so every structural edit is serialised.

use inv_core::{AlienId, CityId};

use crate::{WorldError, WorldResult};

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, CityId>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<String, CityId>;

// ── City / Edge ───────────────────────────────────────────────────────────────

/// A directed, labelled road out of a city.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Direction tag as written in the map (`north`, `east`, …).  Free-form.
    pub direction: String,
    pub to:        CityId,
}

/// One node of the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct City {
    pub name: String,

    /// Outgoing edges in declaration order.  Empty once destroyed.
    pub edges: Vec<Edge>,

    /// Aliens currently in the city.  At most one between rounds.
    pub occupants: Vec<AlienId>,

    pub destroyed: bool,

    /// The aliens that collided here.  Reporting only; empty unless
    /// `destroyed`.
    pub destroyed_by: Vec<AlienId>,
}

impl City {
    fn new(name: String) -> Self {
        Self {
            name,
            edges:        Vec::new(),
            occupants:    Vec::new(),
            destroyed:    false,
            destroyed_by: Vec::new(),
        }
    }

    #[inline]
    pub fn is_dead_end(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Snapshots ─────────────────────────────────────────────────────────────────

/// Read-only copy of a city for external rendering and reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CitySnapshot {
    pub name:      String,
    pub edges:     Vec<EdgeSnapshot>,
    pub destroyed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSnapshot {
    pub direction: String,
    pub to:        String,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The city graph.  Construct with [`WorldBuilder`] or the
/// [loader](crate::loader).
#[derive(Clone, Debug)]
pub struct World {
    cities: Vec<City>,
    index:  NameIndex,
}

impl World {
    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of cities, including auto-created and destroyed ones.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn destroyed_count(&self) -> usize {
        self.cities.iter().filter(|c| c.destroyed).count()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// # Panics
    /// Panics if `id` was not issued by this world.
    #[inline]
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.index.get(name).copied()
    }

    /// All cities in arena order, destroyed ones included.
    pub fn cities(&self) -> impl Iterator<Item = (CityId, &City)> + '_ {
        self.cities
            .iter()
            .enumerate()
            .map(|(i, c)| (CityId(i as u32), c))
    }

    /// Ids of all cities not yet destroyed, in arena order.
    pub fn surviving_ids(&self) -> Vec<CityId> {
        self.cities()
            .filter(|(_, c)| !c.destroyed)
            .map(|(id, _)| id)
            .collect()
    }

    #[inline]
    pub fn out_degree(&self, id: CityId) -> usize {
        self.cities[id.index()].edges.len()
    }

    /// Number of edges, across all cities, that target `id`.
    pub fn incoming_count(&self, id: CityId) -> usize {
        self.cities
            .iter()
            .flat_map(|c| c.edges.iter())
            .filter(|e| e.to == id)
            .count()
    }

    /// Copy out the whole graph for rendering.
    pub fn snapshot(&self) -> Vec<CitySnapshot> {
        self.cities
            .iter()
            .map(|c| CitySnapshot {
                name:      c.name.clone(),
                edges:     c
                    .edges
                    .iter()
                    .map(|e| EdgeSnapshot {
                        direction: e.direction.clone(),
                        to:        self.cities[e.to.index()].name.clone(),
                    })
                    .collect(),
                destroyed: c.destroyed,
            })
            .collect()
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Put `alien` into `city` without moving it from anywhere (initial
    /// placement).
    pub fn place(&mut self, alien: AlienId, city: CityId) {
        let occupants = &mut self.cities[city.index()].occupants;
        if !occupants.contains(&alien) {
            occupants.push(alien);
        }
    }

    /// Move `alien` from `from` to `to`, matching it by identity.
    ///
    /// Removal happens first, so a self-loop (`from == to`) leaves the alien
    /// as the city's only entry.
    pub fn relocate(&mut self, alien: AlienId, from: CityId, to: CityId) {
        self.cities[from.index()].occupants.retain(|&a| a != alien);
        self.place(alien, to);
    }

    /// Destroy `city`: tombstone it, clear its edges and occupants, and prune
    /// every edge in the graph that targets it.
    ///
    /// Returns the aliens that were in the city.  Destroying an already
    /// destroyed city is a no-op that returns an empty list.
    ///
    /// The sweep is O(cities × edges); maps are small.  A reverse-edge index
    /// would make it proportional to the in-degree instead.
    pub fn destroy(&mut self, city: CityId) -> Vec<AlienId> {
        let target = &mut self.cities[city.index()];
        if target.destroyed {
            return Vec::new();
        }
        target.destroyed = true;
        target.edges.clear();
        let casualties = std::mem::take(&mut target.occupants);
        target.destroyed_by = casualties.clone();

        for c in &mut self.cities {
            c.edges.retain(|e| e.to != city);
        }
        casualties
    }
}

// ── WorldBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`World`] from `(city, [(direction, target)])` declarations.
///
/// Targets never declared as a source are created automatically with no
/// outgoing edges.  Arena order is first mention order.
///
/// # Example
///
/// ```
/// use inv_world::WorldBuilder;
///
/// let mut b = WorldBuilder::new();
/// b.declare("Foo", [("north", "Bar"), ("west", "Baz")]).unwrap();
/// b.declare("Bar", [("south", "Foo")]).unwrap();
/// let world = b.build();
/// assert_eq!(world.city_count(), 3); // Baz is auto-created
/// assert_eq!(world.out_degree(world.city_id("Baz").unwrap()), 0);
/// ```
#[derive(Default)]
pub struct WorldBuilder {
    cities:   Vec<City>,
    declared: Vec<bool>,
    index:    NameIndex,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` as a source city with the given outgoing edges.
    ///
    /// Fails if `name` was already declared as a source.
    pub fn declare<I, D, T>(&mut self, name: &str, edges: I) -> WorldResult<CityId>
    where
        I: IntoIterator<Item = (D, T)>,
        D: Into<String>,
        T: AsRef<str>,
    {
        let id = self.intern(name);
        if self.declared[id.index()] {
            return Err(WorldError::DuplicateCity(name.to_string()));
        }
        self.declared[id.index()] = true;

        let edges: Vec<Edge> = edges
            .into_iter()
            .map(|(direction, target)| Edge {
                direction: direction.into(),
                to:        self.intern(target.as_ref()),
            })
            .collect();
        self.cities[id.index()].edges = edges;
        Ok(id)
    }

    /// Declare `name` as a city with no outgoing edges.
    pub fn add_city(&mut self, name: &str) -> WorldResult<CityId> {
        self.declare(name, std::iter::empty::<(String, String)>())
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn build(self) -> World {
        let auto_created = self.declared.iter().filter(|d| !**d).count();
        tracing::debug!(
            cities = self.cities.len(),
            auto_created,
            "world built",
        );
        World { cities: self.cities, index: self.index }
    }

    fn intern(&mut self, name: &str) -> CityId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = CityId(self.cities.len() as u32);
        self.cities.push(City::new(name.to_string()));
        self.declared.push(false);
        self.index.insert(name.to_string(), id);
        id
    }
}

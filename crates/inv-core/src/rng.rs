//! Random choice primitives.
//!
//! Destination choice goes through the [`Chooser`] trait so the movement
//! algorithm can run against a seeded RNG in production and a fixed sequence
//! in tests.  Every `Chooser` call in the simulator happens while the world
//! lock is held, so one shared instance serves all aliens.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform choice of an index into a non-empty ordered sequence.
pub trait Chooser: Send {
    /// Return an index in `0..len`.  Callers never pass `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Used only in single-threaded or explicitly synchronised contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}

impl Chooser for SimRng {
    #[inline]
    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "choose_index on empty sequence");
        self.0.gen_range(0..len)
    }
}

// ── SequenceChooser ───────────────────────────────────────────────────────────

/// Deterministic [`Chooser`] replaying a fixed sequence of picks.
///
/// Each call consumes the next value of the sequence (wrapping around at the
/// end) and reduces it modulo `len`.  An empty sequence always picks `0`.
///
/// ```
/// use inv_core::{Chooser, SequenceChooser};
///
/// let mut c = SequenceChooser::new(vec![1, 0, 5]);
/// assert_eq!(c.choose_index(2), 1);
/// assert_eq!(c.choose_index(2), 0);
/// assert_eq!(c.choose_index(2), 1); // 5 % 2
/// assert_eq!(c.choose_index(3), 1); // wrapped back to the first value
/// ```
#[derive(Clone, Debug, Default)]
pub struct SequenceChooser {
    picks: Vec<usize>,
    pos:   usize,
}

impl SequenceChooser {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, pos: 0 }
    }

    /// Always choose the first option.
    pub fn first() -> Self {
        Self::default()
    }
}

impl Chooser for SequenceChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.pos % self.picks.len()];
        self.pos += 1;
        pick % len
    }
}

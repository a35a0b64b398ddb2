//! Strongly typed, zero-cost identifier wrappers.
//!
//! Cities and aliens live in arenas (`Vec`s) owned by the world and the
//! simulation; an id is the index into its arena.  IDs are `Copy + Ord +
//! Hash` so they can be used as map keys and sorted without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an alien in the simulation's alien arena.
    pub struct AlienId(u32);
}

typed_id! {
    /// Index of a city in the world's city arena.  Stable for the whole run:
    /// destroyed cities are tombstoned, never removed.
    pub struct CityId(u32);
}

impl AlienId {
    /// Human-facing alien name (`Alien-0`, `Alien-1`, …) used in logs and
    /// reports.
    pub fn name(self) -> String {
        format!("Alien-{}", self.0)
    }
}

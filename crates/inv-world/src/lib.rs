//! `inv-world` — the city graph the aliens roam.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`world`]   | `City`, `Edge`, `World` (arena), `WorldBuilder`, snapshots  |
//! | [`loader`]  | `load_world`, `load_world_reader` (text map format)         |
//! | [`render`]  | `render_map` — writes the surviving map back as text        |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash` for the city-name index.                 |

pub mod error;
pub mod loader;
pub mod render;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use loader::{load_world, load_world_reader};
pub use render::render_map;
pub use world::{City, CitySnapshot, Edge, EdgeSnapshot, World, WorldBuilder};

//! `inv-core` — foundational types for the alien invasion simulator.
//!
//! This crate is a dependency of every other `inv-*` crate.  It has no
//! `inv-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AlienId`, `CityId`                                   |
//! | [`config`]      | `SimConfig`, `DEFAULT_VISIT_CAP`                      |
//! | [`rng`]         | `Chooser` trait, `SimRng`, `SequenceChooser`          |
//! | [`error`]       | `InvError`, `InvResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `SimConfig`.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_VISIT_CAP, SimConfig};
pub use error::{InvError, InvResult};
pub use ids::{AlienId, CityId};
pub use rng::{Chooser, SequenceChooser, SimRng};

//! kw-core: Solvable colored key and locked door placement
//!
//! Given a level whose rooms and corridors are already laid out, places one
//! locked door and one matching key per active color so that the exit can
//! always be reached under some order of key pickups.
//!
//! All randomness flows through an injected [`GameRng`], so a level's
//! layout is reproducible from its seed.

pub mod dungeon;
pub mod keys;
pub mod options;

mod consts;
mod rng;

pub use consts::*;
pub use options::{OptionsError, PlacementOptions};
pub use rng::GameRng;

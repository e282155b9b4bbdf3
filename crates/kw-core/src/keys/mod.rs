//! Colored keys and locked doors
//!
//! Placement runs once per level, after rooms and corridors exist:
//!
//! 1. [`RoomGraph`] turns the corridors into room-to-room edges.
//! 2. [`TierBands`] decides how many colors the level gets.
//! 3. [`attempt_placement`] hangs one door per color and drops its key.
//! 4. [`verify_no_softlocks`] replays a greedy player to prove the exit can
//!    be reached.
//! 5. [`place_keys_and_doors`] retries 3 and 4 and commits the first
//!    placement that passes.
//!
//! At play time [`try_open_door`], [`can_pass`] and [`unlock_if_possible`]
//! answer door questions against whatever the player carries.

mod color;
mod door;
mod error;
mod graph;
mod place;
mod placement;
mod tier;
mod verify;

pub use color::{KeyColor, PALETTE};
pub use door::{
    Door, DoorInteraction, Inventory, Key, KeyRing, can_pass, try_open_door, unlock_if_possible,
};
pub use error::{AttemptFailure, ParseColorError, PlacementError};
pub use graph::{Link, RoomGraph};
pub use place::{PlacementReport, generate_keys_and_doors, place_keys_and_doors};
pub use placement::{DoorSpot, KeySpot, Placement, attempt_placement, find_door_position};
pub use tier::{TierBands, colors_for_level, key_count};
pub use verify::{
    Gate, KeySite, Walkthrough, accessible_rooms, door_is_passable, level_gates, level_key_sites,
    verify_level, verify_no_softlocks,
};

//! Retry loop and commit
//!
//! Runs placement attempts until one passes the softlock check, then writes
//! its doors and keys onto the level.

use serde::{Deserialize, Serialize};

use super::{
    AttemptFailure, Door, Key, KeyColor, Placement, PlacementError, RoomGraph, Walkthrough,
    attempt_placement, verify_no_softlocks,
};
use crate::dungeon::Level;
use crate::options::PlacementOptions;
use crate::rng::GameRng;

/// Summary of a committed placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    /// 1-based number of the attempt that succeeded
    pub attempts: u32,
    pub colors: Vec<KeyColor>,
    pub walkthrough: Walkthrough,
}

/// Place keys and doors on `level`, retrying up to `options.max_attempts`.
///
/// Any doors and keys already on the level are discarded first. On failure
/// the level is left without doors or keys.
pub fn place_keys_and_doors(
    level: &mut Level,
    options: &PlacementOptions,
    rng: &mut GameRng,
) -> Result<PlacementReport, PlacementError> {
    let rooms = level.rooms.len();
    for index in [level.start_room, level.exit_room] {
        if index >= rooms {
            return Err(PlacementError::InvalidRoomIndex { index, rooms });
        }
    }

    level.clear_keys_and_doors();

    let colors = options.colors_for_level(level.number);
    let graph = RoomGraph::build(level);

    for attempt in 1..=options.max_attempts {
        match try_once(level, &graph, colors, rng) {
            Ok((placement, walkthrough)) => {
                commit(level, &placement);
                log::info!(
                    "Placed {} key/door pairs on level {} after {} attempt(s)",
                    colors.len(),
                    level.number,
                    attempt
                );
                return Ok(PlacementReport {
                    attempts: attempt,
                    colors: colors.to_vec(),
                    walkthrough,
                });
            }
            Err(failure) => {
                log::debug!("[attempt {}] level {}: {}", attempt, level.number, failure);
            }
        }
    }

    Err(PlacementError::Exhausted {
        attempts: options.max_attempts,
    })
}

/// Level generation hook.
///
/// Returns `None` when the level is too shallow for the puzzle or when no
/// solvable placement was found; in both cases the level has no doors.
pub fn generate_keys_and_doors(
    level: &mut Level,
    options: &PlacementOptions,
    rng: &mut GameRng,
) -> Option<PlacementReport> {
    if level.number < options.min_level {
        return None;
    }

    match place_keys_and_doors(level, options, rng) {
        Ok(report) => Some(report),
        Err(err) => {
            log::warn!("Level {} left without keys: {}", level.number, err);
            None
        }
    }
}

fn try_once(
    level: &Level,
    graph: &RoomGraph,
    colors: &[KeyColor],
    rng: &mut GameRng,
) -> Result<(Placement, Walkthrough), AttemptFailure> {
    let placement = attempt_placement(level, graph, colors, rng)?;
    let walkthrough = verify_no_softlocks(
        graph,
        level.start_room,
        level.exit_room,
        &placement.gates(),
        &placement.key_sites(),
    )
    .ok_or(AttemptFailure::Softlock)?;
    Ok((placement, walkthrough))
}

/// Materialize a verified placement onto the level
fn commit(level: &mut Level, placement: &Placement) {
    level.doors = placement
        .doors
        .iter()
        .map(|spot| Door::new(spot.color, spot.position))
        .collect();

    for spot in &placement.keys {
        level.rooms[spot.room].add_key(Key::placed(spot.color, spot.position));
    }
}

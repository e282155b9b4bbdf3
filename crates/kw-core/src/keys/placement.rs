//! A single randomized placement attempt
//!
//! Picks one door corridor per color, away from the start room, and puts
//! each color's key in a room that stays reachable while its own door is
//! shut. The result is not yet known to be solvable; that is the
//! verifier's job.

use hashbrown::HashSet;

use super::{AttemptFailure, KeyColor, RoomGraph};
use crate::consts::DOOR_END_SECTION_DIVISOR;
use crate::dungeon::{Corridor, Level, Position};
use crate::rng::GameRng;

/// Where one color's door goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorSpot {
    pub color: KeyColor,
    pub corridor: usize,
    pub position: Position,
}

/// Where one color's key goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpot {
    pub color: KeyColor,
    pub room: usize,
    pub position: Position,
}

/// Candidate door and key layout for one attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub doors: Vec<DoorSpot>,
    pub keys: Vec<KeySpot>,
}

impl Placement {
    pub fn door_for(&self, color: KeyColor) -> Option<&DoorSpot> {
        self.doors.iter().find(|d| d.color == color)
    }

    pub fn key_for(&self, color: KeyColor) -> Option<&KeySpot> {
        self.keys.iter().find(|k| k.color == color)
    }

    /// Keys already assigned to `room`
    pub fn load_of(&self, room: usize) -> usize {
        self.keys.iter().filter(|k| k.room == room).count()
    }
}

/// Choose the tile of `corridor` to hang a door on.
///
/// Looks at the tiles near both ends first and takes the first one that is
/// next to a room wall. Falls back to the middle tile. Returns `None` only
/// for an empty corridor.
pub fn find_door_position(level: &Level, corridor: &Corridor) -> Option<Position> {
    let len = corridor.len();
    if len == 0 {
        return None;
    }

    let section = (len / DOOR_END_SECTION_DIVISOR).max(1);
    let front = 0..section.min(len);
    let back = len.saturating_sub(section).max(section)..len;

    let next_to_wall = |pos: Position| {
        pos.neighbors4()
            .iter()
            .any(|&n| level.rooms.iter().any(|room| room.is_on_wall(n)))
    };

    front
        .chain(back)
        .map(|i| corridor.tiles[i])
        .find(|&pos| next_to_wall(pos))
        .or_else(|| corridor.midpoint())
}

/// Run one placement attempt for `colors` on `level`
pub fn attempt_placement(
    level: &Level,
    graph: &RoomGraph,
    colors: &[KeyColor],
    rng: &mut GameRng,
) -> Result<Placement, AttemptFailure> {
    let start = level.start_room;
    let exit = level.exit_room;

    // Doors right outside the start room could shut the player in
    let start_corridors = graph.corridors_of(start);
    let mut candidates: Vec<usize> = level
        .corridors
        .iter()
        .enumerate()
        .filter(|(idx, corridor)| !corridor.is_empty() && !start_corridors.contains(idx))
        .map(|(idx, _)| idx)
        .collect();

    if candidates.len() < colors.len() {
        return Err(AttemptFailure::NoDoorCorridor);
    }

    rng.shuffle(&mut candidates);

    let mut placement = Placement::default();

    for &color in colors {
        let corridor = candidates.pop().ok_or(AttemptFailure::NoDoorCorridor)?;
        let position = find_door_position(level, &level.corridors[corridor])
            .ok_or(AttemptFailure::NoDoorCorridor)?;
        placement.doors.push(DoorSpot {
            color,
            corridor,
            position,
        });
    }

    for &color in colors {
        let blocked = placement
            .door_for(color)
            .map(|d| d.corridor)
            .ok_or(AttemptFailure::NoDoorCorridor)?;

        let reachable = graph.reachable_from(start, |c| c != blocked);
        let rooms = key_room_candidates(level, &reachable, start, exit);
        let room = pick_least_loaded(&placement, &rooms, rng)
            .ok_or(AttemptFailure::NoKeyRoom(color))?;
        let position = level.rooms[room].random_floor_position(rng);
        placement.keys.push(KeySpot {
            color,
            room,
            position,
        });
    }

    Ok(placement)
}

/// Reachable rooms other than start and exit that have floor to hold a key,
/// in index order
fn key_room_candidates(
    level: &Level,
    reachable: &HashSet<usize>,
    start: usize,
    exit: usize,
) -> Vec<usize> {
    (0..level.rooms.len())
        .filter(|r| *r != start && *r != exit && reachable.contains(r))
        .filter(|&r| level.rooms[r].floor_area() > 0)
        .collect()
}

/// Room holding the fewest keys so far, ties broken at random
fn pick_least_loaded(placement: &Placement, rooms: &[usize], rng: &mut GameRng) -> Option<usize> {
    let min_load = rooms.iter().map(|&r| placement.load_of(r)).min()?;
    let least: Vec<usize> = rooms
        .iter()
        .copied()
        .filter(|&r| placement.load_of(r) == min_load)
        .collect();
    rng.choose(&least).copied()
}

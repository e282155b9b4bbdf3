//! Level structure
//!
//! The finalized room/corridor topology of one dungeon floor, plus the doors
//! committed onto it by key/door placement.

use serde::{Deserialize, Serialize};

use super::{Corridor, Position, Room};
use crate::keys::{Door, Key};

/// One dungeon floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based depth
    pub number: u32,
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
    /// Index into `rooms` where the player arrives
    pub start_room: usize,
    /// Index into `rooms` holding the way down
    pub exit_room: usize,
    pub exit_position: Position,
    /// Committed doors; empty until placement succeeds
    #[serde(default)]
    pub doors: Vec<Door>,
}

impl Level {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            rooms: Vec::new(),
            corridors: Vec::new(),
            start_room: 0,
            exit_room: 0,
            exit_position: Position::default(),
            doors: Vec::new(),
        }
    }

    /// Add a room, returning its index
    pub fn add_room(&mut self, room: Room) -> usize {
        self.rooms.push(room);
        self.rooms.len() - 1
    }

    /// Add a corridor, returning its index
    pub fn add_corridor(&mut self, corridor: Corridor) -> usize {
        self.corridors.push(corridor);
        self.corridors.len() - 1
    }

    /// Mark the start and exit rooms; the exit position is the exit room's center
    pub fn set_start_and_exit(&mut self, start_room: usize, exit_room: usize) {
        self.start_room = start_room;
        self.exit_room = exit_room;
        if let Some(room) = self.rooms.get(exit_room) {
            self.exit_position = room.center();
        }
    }

    /// Get the door at the specified position
    pub fn door_at(&self, pos: Position) -> Option<&Door> {
        self.doors.iter().find(|d| d.position == pos)
    }

    pub fn door_at_mut(&mut self, pos: Position) -> Option<&mut Door> {
        self.doors.iter_mut().find(|d| d.position == pos)
    }

    /// Room whose bounds (walls included) contain `pos`
    pub fn room_at(&self, pos: Position) -> Option<(usize, &Room)> {
        self.rooms.iter().enumerate().find(|(_, r)| r.is_inside(pos))
    }

    /// Corridor that has `pos` as one of its tiles
    pub fn corridor_at(&self, pos: Position) -> Option<(usize, &Corridor)> {
        self.corridors.iter().enumerate().find(|(_, c)| c.contains(pos))
    }

    /// Check if a position can be walked on.
    ///
    /// Locked doors block; otherwise room floors and corridor tiles are open.
    pub fn is_walkable(&self, pos: Position) -> bool {
        if self.doors.iter().any(|d| d.position == pos && d.locked) {
            return false;
        }
        self.rooms.iter().any(|r| r.contains_point(pos))
            || self.corridors.iter().any(|c| c.contains(pos))
    }

    /// All keys lying in rooms, with the index of the room holding each
    pub fn all_keys(&self) -> impl Iterator<Item = (usize, &Key)> {
        self.rooms
            .iter()
            .enumerate()
            .flat_map(|(idx, room)| room.keys.iter().map(move |k| (idx, k)))
    }

    /// Drop every door and key, leaving the bare topology
    pub fn clear_keys_and_doors(&mut self) {
        self.doors.clear();
        for room in &mut self.rooms {
            room.keys.clear();
        }
    }
}

//! Rectangular rooms
//!
//! A room's `x`/`y` is its top-left wall corner and `width`/`height` include
//! the walls, so the walkable floor is the interior strictly inside them.

use serde::{Deserialize, Serialize};

use super::Position;
use crate::keys::Key;
use crate::rng::GameRng;

/// Rectangle representing a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// X coordinate of the left wall
    pub x: i32,
    /// Y coordinate of the top wall
    pub y: i32,
    /// Width including both walls
    pub width: i32,
    /// Height including both walls
    pub height: i32,
    /// Keys lying on this room's floor
    #[serde(default)]
    pub keys: Vec<Key>,
}

impl Room {
    /// Create an empty room
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            keys: Vec::new(),
        }
    }

    /// Rightmost column (the right wall)
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Bottom row (the bottom wall)
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Check if point is anywhere in the room, walls included
    pub fn is_inside(&self, pos: Position) -> bool {
        pos.x >= self.x && pos.x <= self.right() && pos.y >= self.y && pos.y <= self.bottom()
    }

    /// Check if point is on the room floor (walls excluded)
    pub fn contains_point(&self, pos: Position) -> bool {
        pos.x > self.x && pos.x < self.right() && pos.y > self.y && pos.y < self.bottom()
    }

    /// Check if point lies on one of the four walls
    pub fn is_on_wall(&self, pos: Position) -> bool {
        self.is_inside(pos)
            && (pos.x == self.x || pos.x == self.right() || pos.y == self.y || pos.y == self.bottom())
    }

    /// True if `pos` is inside the room or within one tile of it
    pub fn touches(&self, pos: Position) -> bool {
        pos.with_neighbors8().any(|p| self.is_inside(p))
    }

    /// Get center point of room
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Get a uniformly random floor tile. Only meaningful when
    /// `floor_area()` is positive.
    pub fn random_floor_position(&self, rng: &mut GameRng) -> Position {
        Position::new(
            rng.range_inclusive(self.x + 1, self.right() - 1),
            rng.range_inclusive(self.y + 1, self.bottom() - 1),
        )
    }

    /// Number of floor tiles
    pub fn floor_area(&self) -> i32 {
        (self.width - 2).max(0) * (self.height - 2).max(0)
    }

    /// Drop a key on this room's floor
    pub fn add_key(&mut self, key: Key) {
        self.keys.push(key);
    }

    /// Remove and return the key lying at `pos`, if any
    pub fn take_key_at(&mut self, pos: Position) -> Option<Key> {
        let idx = self.keys.iter().position(|k| k.position == Some(pos))?;
        Some(self.keys.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyColor;

    #[test]
    fn test_inside_vs_floor() {
        let room = Room::new(10, 20, 6, 5);
        assert!(room.is_inside(Position::new(10, 20)));
        assert!(!room.contains_point(Position::new(10, 20)));
        assert!(room.contains_point(Position::new(11, 21)));
        assert!(room.contains_point(Position::new(14, 23)));
        assert!(!room.contains_point(Position::new(15, 23)));
        assert!(!room.is_inside(Position::new(16, 20)));
    }

    #[test]
    fn test_walls() {
        let room = Room::new(0, 0, 5, 5);
        assert!(room.is_on_wall(Position::new(0, 2)));
        assert!(room.is_on_wall(Position::new(4, 4)));
        assert!(!room.is_on_wall(Position::new(2, 2)));
        assert!(!room.is_on_wall(Position::new(5, 2)));
    }

    #[test]
    fn test_touches_one_tile_margin() {
        let room = Room::new(0, 0, 5, 5);
        assert!(room.touches(Position::new(5, 5)));
        assert!(room.touches(Position::new(-1, 2)));
        assert!(!room.touches(Position::new(6, 2)));
    }

    #[test]
    fn test_random_floor_position_on_floor() {
        let room = Room::new(3, 4, 8, 6);
        let mut rng = GameRng::new(42);
        for _ in 0..500 {
            assert!(room.contains_point(room.random_floor_position(&mut rng)));
        }
    }

    #[test]
    fn test_center_and_area() {
        let room = Room::new(10, 10, 6, 5);
        assert_eq!(room.center(), Position::new(13, 12));
        assert_eq!(room.floor_area(), 12);
    }

    #[test]
    fn test_take_key_at() {
        let mut room = Room::new(0, 0, 6, 6);
        room.add_key(Key::placed(KeyColor::Red, Position::new(2, 2)));
        assert!(room.take_key_at(Position::new(3, 3)).is_none());
        let key = room.take_key_at(Position::new(2, 2)).unwrap();
        assert_eq!(key.color, KeyColor::Red);
        assert!(room.keys.is_empty());
    }
}

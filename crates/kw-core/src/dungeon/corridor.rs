//! Corridors between rooms
//!
//! A corridor is an ordered list of walkable tiles. The order matters: the
//! first and last tiles are the ends that meet rooms, which is where doors
//! are preferably hung.

use serde::{Deserialize, Serialize};

use super::Position;

/// Pathway connecting two or more rooms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub tiles: Vec<Position>,
}

impl Corridor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corridor from tiles, dropping repeats while keeping order
    pub fn from_tiles(tiles: impl IntoIterator<Item = Position>) -> Self {
        let mut corridor = Self::new();
        for tile in tiles {
            corridor.add_tile(tile);
        }
        corridor
    }

    /// Append a tile unless it is already part of the corridor
    pub fn add_tile(&mut self, pos: Position) {
        if !self.tiles.contains(&pos) {
            self.tiles.push(pos);
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.tiles.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Middle tile of the corridor
    pub fn midpoint(&self) -> Option<Position> {
        self.tiles.get(self.tiles.len() / 2).copied()
    }

    /// Straight horizontal run from `x1` to `x2` (either direction) at row `y`
    pub fn add_horizontal_run(&mut self, x1: i32, x2: i32, y: i32) {
        let step = if x2 >= x1 { 1 } else { -1 };
        let mut x = x1;
        loop {
            self.add_tile(Position::new(x, y));
            if x == x2 {
                break;
            }
            x += step;
        }
    }

    /// Straight vertical run from `y1` to `y2` (either direction) at column `x`
    pub fn add_vertical_run(&mut self, x: i32, y1: i32, y2: i32) {
        let step = if y2 >= y1 { 1 } else { -1 };
        let mut y = y1;
        loop {
            self.add_tile(Position::new(x, y));
            if y == y2 {
                break;
            }
            y += step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tile_dedupes() {
        let mut c = Corridor::new();
        c.add_tile(Position::new(1, 1));
        c.add_tile(Position::new(2, 1));
        c.add_tile(Position::new(1, 1));
        assert_eq!(c.len(), 2);
        assert!(c.contains(Position::new(2, 1)));
    }

    #[test]
    fn test_runs_keep_order() {
        let mut c = Corridor::new();
        c.add_horizontal_run(3, 1, 0);
        c.add_vertical_run(1, 0, 2);
        assert_eq!(
            c.tiles,
            vec![
                Position::new(3, 0),
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_midpoint() {
        assert!(Corridor::new().midpoint().is_none());
        let c = Corridor::from_tiles((0..5).map(|x| Position::new(x, 0)));
        assert_eq!(c.midpoint(), Some(Position::new(2, 0)));
    }
}

//! Integer map coordinates

use core::fmt;

use serde::{Deserialize, Serialize};

/// A tile coordinate on the level map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours (W, E, N, S)
    pub fn neighbors4(self) -> [Position; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }

    /// This position and its eight surrounding tiles
    pub fn with_neighbors8(self) -> impl Iterator<Item = Position> {
        (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| self.offset(dx, dy)))
    }

    /// True if `other` is one of the eight surrounding tiles
    pub fn is_adjacent_to(self, other: Position) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx != 0 || dy != 0)
    }

    pub fn manhattan_distance(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_includes_diagonals() {
        let p = Position::new(10, 10);
        assert!(p.is_adjacent_to(Position::new(9, 9)));
        assert!(p.is_adjacent_to(Position::new(11, 10)));
        assert!(!p.is_adjacent_to(p));
        assert!(!p.is_adjacent_to(Position::new(12, 10)));
    }

    #[test]
    fn test_neighbors8_covers_block() {
        let tiles: Vec<_> = Position::new(0, 0).with_neighbors8().collect();
        assert_eq!(tiles.len(), 9);
        assert!(tiles.contains(&Position::new(-1, 1)));
        assert!(tiles.contains(&Position::new(0, 0)));
    }

    #[test]
    fn test_manhattan_and_display() {
        let a = Position::new(1, 2);
        assert_eq!(a.manhattan_distance(Position::new(4, -2)), 7);
        assert_eq!(a.to_string(), "(1, 2)");
        assert_eq!(Position::from((3, 4)), Position::new(3, 4));
    }
}

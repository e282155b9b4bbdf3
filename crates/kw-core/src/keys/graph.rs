//! Room connectivity graph
//!
//! Rooms are nodes. Every corridor that touches two or more rooms links each
//! pair of them, tagged with the corridor index so that a door hung on the
//! corridor can block the edge.

use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::dungeon::Level;

/// One side of an edge: the neighbouring room and the corridor leading there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub room: usize,
    pub corridor: usize,
}

/// Adjacency list indexed by room
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomGraph {
    adjacency: Vec<Vec<Link>>,
}

impl RoomGraph {
    /// Build the graph for a level's rooms and corridors
    pub fn build(level: &Level) -> Self {
        let mut adjacency = vec![Vec::new(); level.rooms.len()];

        for (corridor_idx, corridor) in level.corridors.iter().enumerate() {
            // Rooms touched by this corridor, in first-seen order
            let mut touched: Vec<usize> = Vec::new();
            for &tile in &corridor.tiles {
                for (room_idx, room) in level.rooms.iter().enumerate() {
                    if !touched.contains(&room_idx) && room.touches(tile) {
                        touched.push(room_idx);
                    }
                }
            }

            for (i, &a) in touched.iter().enumerate() {
                for &b in &touched[i + 1..] {
                    adjacency[a].push(Link {
                        room: b,
                        corridor: corridor_idx,
                    });
                    adjacency[b].push(Link {
                        room: a,
                        corridor: corridor_idx,
                    });
                }
            }
        }

        Self { adjacency }
    }

    pub fn room_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Links out of `room`; empty for an unknown index
    pub fn neighbors(&self, room: usize) -> &[Link] {
        self.adjacency.get(room).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct corridors incident to `room`
    pub fn corridors_of(&self, room: usize) -> HashSet<usize> {
        self.neighbors(room).iter().map(|l| l.corridor).collect()
    }

    /// Rooms reachable from `start` crossing only corridors accepted by
    /// `passable`. Always contains `start` when it is a valid index.
    pub fn reachable_from<F>(&self, start: usize, passable: F) -> HashSet<usize>
    where
        F: Fn(usize) -> bool,
    {
        let mut visited = HashSet::new();
        if start >= self.adjacency.len() {
            return visited;
        }

        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(room) = queue.pop_front() {
            for link in &self.adjacency[room] {
                if !visited.contains(&link.room) && passable(link.corridor) {
                    visited.insert(link.room);
                    queue.push_back(link.room);
                }
            }
        }

        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Corridor, Position, Room};

    /// Three rooms in a row, corridor 0 joins 0-1, corridor 1 joins 1-2
    fn chain() -> Level {
        let mut level = Level::new(1);
        level.add_room(Room::new(0, 0, 6, 6));
        level.add_room(Room::new(10, 0, 6, 6));
        level.add_room(Room::new(20, 0, 6, 6));
        level.add_corridor(Corridor::from_tiles((6..10).map(|x| Position::new(x, 3))));
        level.add_corridor(Corridor::from_tiles((16..20).map(|x| Position::new(x, 3))));
        level.set_start_and_exit(0, 2);
        level
    }

    #[test]
    fn test_edges_both_directions() {
        let graph = RoomGraph::build(&chain());
        assert_eq!(graph.room_count(), 3);
        assert_eq!(graph.neighbors(0), &[Link { room: 1, corridor: 0 }]);
        assert_eq!(graph.neighbors(1).len(), 2);
        assert_eq!(graph.neighbors(2), &[Link { room: 1, corridor: 1 }]);
        assert!(graph.neighbors(7).is_empty());
    }

    #[test]
    fn test_corridor_touching_one_room_adds_no_edge() {
        let mut level = chain();
        level.add_corridor(Corridor::from_tiles((0..3).map(|y| Position::new(30, y))));
        level.add_corridor(Corridor::from_tiles([Position::new(26, 3)]));
        let graph = RoomGraph::build(&level);
        assert_eq!(graph.neighbors(2).len(), 1);
    }

    #[test]
    fn test_corridor_touching_three_rooms_links_every_pair() {
        let mut level = Level::new(1);
        level.add_room(Room::new(0, 0, 5, 5));
        level.add_room(Room::new(6, 0, 5, 5));
        level.add_room(Room::new(3, 6, 5, 5));
        // A single tile next to all three
        level.add_corridor(Corridor::from_tiles([Position::new(5, 5)]));
        let graph = RoomGraph::build(&level);
        for room in 0..3 {
            assert_eq!(graph.neighbors(room).len(), 2);
        }
    }

    #[test]
    fn test_reachability_with_blocked_corridor() {
        let graph = RoomGraph::build(&chain());
        let all = graph.reachable_from(0, |_| true);
        assert_eq!(all.len(), 3);

        let blocked = graph.reachable_from(0, |c| c != 1);
        assert!(blocked.contains(&1));
        assert!(!blocked.contains(&2));

        assert!(graph.reachable_from(9, |_| true).is_empty());
    }

    #[test]
    fn test_corridors_of_start() {
        let graph = RoomGraph::build(&chain());
        let of_middle = graph.corridors_of(1);
        assert!(of_middle.contains(&0) && of_middle.contains(&1));
        assert_eq!(graph.corridors_of(0).len(), 1);
    }
}

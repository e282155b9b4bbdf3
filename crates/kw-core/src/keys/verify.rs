//! Softlock verification
//!
//! Simulates a greedy player: walk everywhere currently open, pick up every
//! key lying in reach, open every door those keys fit, repeat. A placement
//! is accepted when this process reaches the exit and every key can be
//! picked up along the way.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::{KeyColor, Placement, RoomGraph};
use crate::dungeon::Level;

/// A door as the verifier sees it: the corridor it blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    pub corridor: usize,
    pub color: KeyColor,
    pub locked: bool,
}

/// A key as the verifier sees it: the room it lies in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySite {
    pub color: KeyColor,
    pub room: usize,
}

/// Pickup order found by the greedy player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walkthrough {
    /// Colors picked up in each round, in palette order within a round.
    /// Every key color appears exactly once.
    pub rounds: Vec<Vec<KeyColor>>,
}

impl Walkthrough {
    /// Every collected color, in pickup order
    pub fn pickup_order(&self) -> impl Iterator<Item = KeyColor> + '_ {
        self.rounds.iter().flatten().copied()
    }
}

impl Placement {
    pub fn gates(&self) -> Vec<Gate> {
        self.doors
            .iter()
            .map(|d| Gate {
                corridor: d.corridor,
                color: d.color,
                locked: true,
            })
            .collect()
    }

    pub fn key_sites(&self) -> Vec<KeySite> {
        self.keys
            .iter()
            .map(|k| KeySite {
                color: k.color,
                room: k.room,
            })
            .collect()
    }
}

/// Gates for the doors committed on a level.
///
/// Doors that do not sit on any corridor tile cannot block anything and are
/// skipped.
pub fn level_gates(level: &Level) -> Vec<Gate> {
    level
        .doors
        .iter()
        .filter_map(|door| {
            let (corridor, _) = level.corridor_at(door.position)?;
            Some(Gate {
                corridor,
                color: door.color,
                locked: door.locked,
            })
        })
        .collect()
}

/// Key sites for the keys lying in a level's rooms
pub fn level_key_sites(level: &Level) -> Vec<KeySite> {
    level
        .all_keys()
        .map(|(room, key)| KeySite {
            color: key.color,
            room,
        })
        .collect()
}

/// A gate can be crossed if it is unlocked or its color has been collected
pub fn door_is_passable(gate: &Gate, collected: &HashSet<KeyColor>) -> bool {
    !gate.locked || collected.contains(&gate.color)
}

/// Rooms reachable from `start` holding the `collected` colors
pub fn accessible_rooms(
    graph: &RoomGraph,
    start: usize,
    gates: &[Gate],
    collected: &HashSet<KeyColor>,
) -> HashSet<usize> {
    graph.reachable_from(start, |corridor| {
        gates
            .iter()
            .filter(|g| g.corridor == corridor)
            .all(|g| door_is_passable(g, collected))
    })
}

/// Check that the exit can be reached under some order of key pickups.
///
/// Returns the greedy walkthrough on success and `None` for a softlock.
pub fn verify_no_softlocks(
    graph: &RoomGraph,
    start: usize,
    exit: usize,
    gates: &[Gate],
    keys: &[KeySite],
) -> Option<Walkthrough> {
    let wanted: HashSet<KeyColor> = keys.iter().map(|k| k.color).collect();
    let mut collected: HashSet<KeyColor> = HashSet::new();
    let mut rounds = Vec::new();
    let mut accessible = accessible_rooms(graph, start, gates, &collected);

    for _ in 0..keys.len() + 2 {
        let exit_open = accessible.contains(&exit);
        let keys_open = keys
            .iter()
            .filter(|k| !collected.contains(&k.color))
            .all(|k| accessible.contains(&k.room));

        let mut picked: Vec<KeyColor> = keys
            .iter()
            .filter(|k| !collected.contains(&k.color) && accessible.contains(&k.room))
            .map(|k| k.color)
            .collect();
        picked.sort();
        picked.dedup();

        if exit_open && keys_open {
            // Whatever is left gets picked up on the way out
            if !picked.is_empty() {
                rounds.push(picked);
            }
            return Some(Walkthrough { rounds });
        }

        // Stuck with the exit sealed or a key stranded behind a door
        if picked.is_empty() {
            return None;
        }

        collected.extend(picked.iter().copied());
        rounds.push(picked);
        accessible = accessible_rooms(graph, start, gates, &collected);
    }

    if collected.len() == wanted.len() && accessible.contains(&exit) {
        Some(Walkthrough { rounds })
    } else {
        None
    }
}

/// Verify the doors and keys committed on a level
pub fn verify_level(level: &Level) -> Option<Walkthrough> {
    let graph = RoomGraph::build(level);
    verify_no_softlocks(
        &graph,
        level.start_room,
        level.exit_room,
        &level_gates(level),
        &level_key_sites(level),
    )
}

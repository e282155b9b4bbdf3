//! Door and key entities and the runtime door queries
//!
//! Keys are never consumed: one key opens every door of its color on the
//! level. Keys do not travel between levels.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::KeyColor;
use crate::dungeon::{Level, Position};

/// A colored key item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub color: KeyColor,
    /// World position, unset until the key is placed
    pub position: Option<Position>,
}

impl Key {
    pub fn new(color: KeyColor) -> Self {
        Self {
            color,
            position: None,
        }
    }

    pub fn placed(color: KeyColor, position: Position) -> Self {
        Self {
            color,
            position: Some(position),
        }
    }
}

/// A colored door blocking a corridor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub color: KeyColor,
    pub position: Position,
    pub locked: bool,
}

impl Door {
    /// New doors start locked
    pub fn new(color: KeyColor, position: Position) -> Self {
        Self {
            color,
            position,
            locked: true,
        }
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }
}

/// Anything that can answer "do you hold a key of this color?"
pub trait KeyRing {
    fn has_key(&self, color: KeyColor) -> bool;
}

impl KeyRing for [Key] {
    fn has_key(&self, color: KeyColor) -> bool {
        self.iter().any(|k| k.color == color)
    }
}

impl KeyRing for Vec<Key> {
    fn has_key(&self, color: KeyColor) -> bool {
        self.as_slice().has_key(color)
    }
}

impl KeyRing for HashSet<KeyColor> {
    fn has_key(&self, color: KeyColor) -> bool {
        self.contains(&color)
    }
}

/// Keys the player is carrying on the current level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    keys: Vec<Key>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a key in the backpack; picked-up keys lose their world position
    pub fn pick_up(&mut self, mut key: Key) {
        key.position = None;
        self.keys.push(key);
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Drop every key, e.g. when descending to the next level
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

impl KeyRing for Inventory {
    fn has_key(&self, color: KeyColor) -> bool {
        self.keys.has_key(color)
    }
}

/// True if the door is unlocked or the holder carries a key of its color
pub fn can_pass<K: KeyRing + ?Sized>(door: &Door, inventory: &K) -> bool {
    !door.locked || inventory.has_key(door.color)
}

/// Unlock the door if the holder carries a matching key.
///
/// Returns true if the door is (now) unlocked. The key is kept. Calling this
/// on an already unlocked door is a no-op that returns true.
pub fn unlock_if_possible<K: KeyRing + ?Sized>(door: &mut Door, inventory: &K) -> bool {
    if !door.locked {
        return true;
    }
    if inventory.has_key(door.color) {
        door.unlock();
        return true;
    }
    false
}

/// Outcome of the player bumping into (or using) a door tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorInteraction {
    NoDoor,
    AlreadyOpen,
    Unlocked(KeyColor),
    NeedKey(KeyColor),
}

impl DoorInteraction {
    /// Player-facing message line
    pub fn message(&self) -> String {
        match self {
            DoorInteraction::NoDoor => "No door nearby".to_string(),
            DoorInteraction::AlreadyOpen => "Door is already open".to_string(),
            DoorInteraction::Unlocked(color) => format!("Unlocked {color} door!"),
            DoorInteraction::NeedKey(color) => {
                format!("Locked {color} door - need {color} key!")
            }
        }
    }

    /// Whether the player may step onto the tile afterwards
    pub fn passable(&self) -> bool {
        matches!(self, DoorInteraction::AlreadyOpen | DoorInteraction::Unlocked(_))
    }
}

/// Try to open the door at `pos` with the given keys
pub fn try_open_door<K: KeyRing + ?Sized>(
    level: &mut Level,
    pos: Position,
    inventory: &K,
) -> DoorInteraction {
    let Some(door) = level.door_at_mut(pos) else {
        return DoorInteraction::NoDoor;
    };
    if !door.locked {
        return DoorInteraction::AlreadyOpen;
    }
    if unlock_if_possible(door, inventory) {
        DoorInteraction::Unlocked(door.color)
    } else {
        DoorInteraction::NeedKey(door.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_door() -> Door {
        Door::new(KeyColor::Red, Position::new(5, 5))
    }

    #[test]
    fn test_new_door_is_locked() {
        assert!(red_door().locked);
        assert!(Key::new(KeyColor::Blue).position.is_none());
    }

    #[test]
    fn test_can_pass_needs_matching_key() {
        let door = red_door();
        let mut inv = Inventory::new();
        assert!(!can_pass(&door, &inv));
        inv.pick_up(Key::new(KeyColor::Blue));
        assert!(!can_pass(&door, &inv));
        inv.pick_up(Key::new(KeyColor::Red));
        assert!(can_pass(&door, &inv));
    }

    #[test]
    fn test_unlocked_door_always_passable() {
        let mut door = red_door();
        door.unlock();
        assert!(can_pass(&door, &Inventory::new()));
    }

    #[test]
    fn test_unlock_without_key_leaves_state() {
        let mut door = red_door();
        let inv = vec![Key::new(KeyColor::Green)];
        assert!(!unlock_if_possible(&mut door, &inv));
        assert!(door.locked);
    }

    #[test]
    fn test_unlock_is_idempotent_and_keeps_key() {
        let mut door = red_door();
        let mut inv = Inventory::new();
        inv.pick_up(Key::placed(KeyColor::Red, Position::new(1, 1)));

        assert!(unlock_if_possible(&mut door, &inv));
        assert!(!door.locked);
        assert!(unlock_if_possible(&mut door, &inv));
        assert!(!door.locked);
        assert_eq!(inv.keys().len(), 1);
        assert!(inv.keys()[0].position.is_none());
    }

    #[test]
    fn test_one_key_opens_all_doors_of_color() {
        let mut a = red_door();
        let mut b = Door::new(KeyColor::Red, Position::new(9, 9));
        let held: HashSet<KeyColor> = [KeyColor::Red].into_iter().collect();
        assert!(unlock_if_possible(&mut a, &held));
        assert!(unlock_if_possible(&mut b, &held));
    }

    #[test]
    fn test_try_open_door_messages() {
        let mut level = Level::new(1);
        level.doors.push(red_door());
        let mut inv = Inventory::new();

        let miss = try_open_door(&mut level, Position::new(0, 0), &inv);
        assert_eq!(miss, DoorInteraction::NoDoor);

        let blocked = try_open_door(&mut level, Position::new(5, 5), &inv);
        assert_eq!(blocked, DoorInteraction::NeedKey(KeyColor::Red));
        assert_eq!(blocked.message(), "Locked red door - need red key!");
        assert!(!blocked.passable());

        inv.pick_up(Key::new(KeyColor::Red));
        let opened = try_open_door(&mut level, Position::new(5, 5), &inv);
        assert_eq!(opened.message(), "Unlocked red door!");
        assert!(opened.passable());

        let again = try_open_door(&mut level, Position::new(5, 5), &inv);
        assert_eq!(again, DoorInteraction::AlreadyOpen);
    }

    #[test]
    fn test_inventory_clear() {
        let mut inv = Inventory::new();
        inv.pick_up(Key::new(KeyColor::Yellow));
        inv.clear();
        assert!(!inv.has_key(KeyColor::Yellow));
    }
}

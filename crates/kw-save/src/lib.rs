//! kw-save: Save/restore of key and door state
//!
//! Persists the doors, room keys and carried keys of one level as JSON.
//! Loading rebuilds that state exactly as saved and never reruns placement.
//! A color name that is not in the palette, or that the level's tier does
//! not use, marks the save as corrupted and is rejected.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use kw_core::PlacementOptions;
use kw_core::dungeon::{Level, Position};
use kw_core::keys::{Door, Inventory, Key, KeyColor, TierBands};

/// Current save file format version
pub const SAVE_VERSION: u32 = 1;

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Save file not found")]
    NotFound,

    #[error("Incompatible save version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },

    #[error("Invalid save file header")]
    InvalidHeader,

    #[error("Unknown key color '{0}' in save data")]
    UnknownKeyColor(String),

    #[error("Key color {color} is not used on level {level}")]
    ColorOutsideTier { color: KeyColor, level: u32 },

    #[error("Save is for level {found}, not level {expected}")]
    LevelMismatch { expected: u32, found: u32 },

    #[error("Save has keys for {found} rooms but the level has {expected}")]
    RoomMismatch { expected: usize, found: usize },
}

/// Save file header for versioning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveHeader {
    /// Magic identifier
    pub magic: String,
    /// Save format version
    pub version: u32,
}

impl SaveHeader {
    const MAGIC: &'static str = "KWRS";

    pub fn new() -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: SAVE_VERSION,
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.magic != Self::MAGIC {
            return Err(SaveError::InvalidHeader);
        }
        if self.version != SAVE_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

impl Default for SaveHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Persisted door
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorRecord {
    pub color: String,
    pub position: [i32; 2],
    pub is_locked: bool,
}

/// Persisted key, either lying in a room or carried
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    pub color: String,
    pub position: Option<[i32; 2]>,
}

/// Key and door state of one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelKeysRecord {
    pub level_number: u32,
    pub doors: Vec<DoorRecord>,
    /// Keys per room, indexed like the level's rooms
    pub room_keys: Vec<Vec<KeyRecord>>,
    /// Keys the player carries
    pub inventory: Vec<KeyRecord>,
}

/// Complete save file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub header: SaveHeader,
    pub record: LevelKeysRecord,
}

impl From<&Door> for DoorRecord {
    fn from(door: &Door) -> Self {
        Self {
            color: door.color.to_string(),
            position: [door.position.x, door.position.y],
            is_locked: door.locked,
        }
    }
}

impl From<&Key> for KeyRecord {
    fn from(key: &Key) -> Self {
        Self {
            color: key.color.to_string(),
            position: key.position.map(|p| [p.x, p.y]),
        }
    }
}

fn to_position([x, y]: [i32; 2]) -> Position {
    Position::new(x, y)
}

/// Resolve a saved color name, rejecting names the level cannot contain
fn parse_color(name: &str, level: u32, tiers: &TierBands) -> Result<KeyColor, SaveError> {
    let color = KeyColor::from_name(name).map_err(|_| {
        log::warn!("Corrupted save: unknown key color '{}'", name);
        SaveError::UnknownKeyColor(name.to_string())
    })?;
    if !tiers.colors_for_level(level).contains(&color) {
        log::warn!(
            "Corrupted save: key color {} is not used on level {}",
            color,
            level
        );
        return Err(SaveError::ColorOutsideTier { color, level });
    }
    Ok(color)
}

fn door_from_record(
    record: &DoorRecord,
    level: u32,
    tiers: &TierBands,
) -> Result<Door, SaveError> {
    let color = parse_color(&record.color, level, tiers)?;
    let mut door = Door::new(color, to_position(record.position));
    door.locked = record.is_locked;
    Ok(door)
}

fn key_from_record(record: &KeyRecord, level: u32, tiers: &TierBands) -> Result<Key, SaveError> {
    let color = parse_color(&record.color, level, tiers)?;
    Ok(Key {
        color,
        position: record.position.map(to_position),
    })
}

/// Capture the key and door state of `level` and the carried keys
pub fn snapshot(level: &Level, inventory: &Inventory) -> LevelKeysRecord {
    LevelKeysRecord {
        level_number: level.number,
        doors: level.doors.iter().map(DoorRecord::from).collect(),
        room_keys: level
            .rooms
            .iter()
            .map(|room| room.keys.iter().map(KeyRecord::from).collect())
            .collect(),
        inventory: inventory.keys().iter().map(KeyRecord::from).collect(),
    }
}

/// Restore saved state onto `level` and `inventory` using the default tiers
pub fn restore(
    level: &mut Level,
    inventory: &mut Inventory,
    record: &LevelKeysRecord,
) -> Result<(), SaveError> {
    restore_with(level, inventory, record, &PlacementOptions::default())
}

/// Restore saved state, validating colors against `options`' tiers.
///
/// Nothing is modified unless the whole record is valid.
pub fn restore_with(
    level: &mut Level,
    inventory: &mut Inventory,
    record: &LevelKeysRecord,
    options: &PlacementOptions,
) -> Result<(), SaveError> {
    if record.level_number != level.number {
        return Err(SaveError::LevelMismatch {
            expected: level.number,
            found: record.level_number,
        });
    }
    if record.room_keys.len() != level.rooms.len() {
        return Err(SaveError::RoomMismatch {
            expected: level.rooms.len(),
            found: record.room_keys.len(),
        });
    }

    let number = level.number;
    let tiers = options.tiers();

    let doors = record
        .doors
        .iter()
        .map(|d| door_from_record(d, number, &tiers))
        .collect::<Result<Vec<_>, _>>()?;
    let room_keys = record
        .room_keys
        .iter()
        .map(|keys| {
            keys.iter()
                .map(|k| key_from_record(k, number, &tiers))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    let carried = record
        .inventory
        .iter()
        .map(|k| key_from_record(k, number, &tiers))
        .collect::<Result<Vec<_>, _>>()?;

    level.doors = doors;
    for (room, keys) in level.rooms.iter_mut().zip(room_keys) {
        room.keys = keys;
    }
    inventory.clear();
    for key in carried {
        inventory.pick_up(key);
    }
    Ok(())
}

/// Write a record to a file
pub fn save_to_file(record: &LevelKeysRecord, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let save_file = SaveFile {
        header: SaveHeader::new(),
        record: record.clone(),
    };
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &save_file)?;
    Ok(())
}

/// Read a record from a file
pub fn load_from_file(path: impl AsRef<Path>) -> Result<LevelKeysRecord, SaveError> {
    let file = File::open(path).map_err(|_| SaveError::NotFound)?;
    let reader = BufReader::new(file);
    let save_file: SaveFile = serde_json::from_reader(reader)?;

    save_file.header.validate()?;
    Ok(save_file.record)
}

//! Key colors

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::ParseColorError;

/// Key/door color. The declaration order is the palette order: a level with
/// N active colors uses the first N.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum KeyColor {
    Red = 0,
    Blue = 1,
    Yellow = 2,
    Green = 3,
    Purple = 4,
}

/// Full ordered palette
pub static PALETTE: [KeyColor; 5] = [
    KeyColor::Red,
    KeyColor::Blue,
    KeyColor::Yellow,
    KeyColor::Green,
    KeyColor::Purple,
];

impl KeyColor {
    /// Position in the palette
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a lowercase color name
    pub fn from_name(name: &str) -> Result<Self, ParseColorError> {
        name.parse().map_err(|_| ParseColorError(name.to_string()))
    }

    /// Map letter: uppercase for the door
    pub const fn door_symbol(self) -> char {
        match self {
            KeyColor::Red => 'R',
            KeyColor::Blue => 'B',
            KeyColor::Yellow => 'Y',
            KeyColor::Green => 'G',
            KeyColor::Purple => 'P',
        }
    }

    /// Map letter: lowercase for the key
    pub const fn key_symbol(self) -> char {
        self.door_symbol().to_ascii_lowercase()
    }
}

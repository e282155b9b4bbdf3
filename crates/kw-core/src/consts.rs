//! Core constants for key and door placement and the reference grid layout

/// Highest level number of the first depth band
pub const TIER_1_MAX_LEVEL: u32 = 7;
/// Highest level number of the second depth band
pub const TIER_2_MAX_LEVEL: u32 = 14;

/// Key colors active in each depth band
pub const TIER_1_KEY_COUNT: usize = 3;
pub const TIER_2_KEY_COUNT: usize = 4;
pub const TIER_3_KEY_COUNT: usize = 5;

/// Attempt/verify rounds before a level is left without doors
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 15;

/// First level number that receives a key/door puzzle
pub const MIN_KEY_LEVEL: u32 = 1;

/// Fraction of a corridor (1/n of its tiles) searched at each end for a door spot
pub const DOOR_END_SECTION_DIVISOR: usize = 5;

/// Map dimensions of the reference grid layout
pub const MAP_WIDTH: i32 = 80;
pub const MAP_HEIGHT: i32 = 24;

/// Rooms per row and column of the reference grid layout
pub const ROOMS_PER_ROW: i32 = 3;
pub const ROOM_COUNT: usize = (ROOMS_PER_ROW * ROOMS_PER_ROW) as usize;

pub const SECTION_WIDTH: i32 = MAP_WIDTH / ROOMS_PER_ROW;
pub const SECTION_HEIGHT: i32 = MAP_HEIGHT / ROOMS_PER_ROW;

/// Room size limits (walls included)
pub const MIN_ROOM_WIDTH: i32 = 8;
pub const MAX_ROOM_WIDTH: i32 = 20;
pub const MIN_ROOM_HEIGHT: i32 = 5;
pub const MAX_ROOM_HEIGHT: i32 = 7;

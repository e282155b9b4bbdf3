//! Dungeon level topology
//!
//! Contains positions, rooms, corridors, the level container and the
//! reference grid layout.

mod corridor;
mod layout;
mod level;
mod position;
mod room;

pub use corridor::Corridor;
pub use layout::generate_grid_level;
pub use level::Level;
pub use position::Position;
pub use room::Room;

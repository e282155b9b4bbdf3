//! Reference grid layout
//!
//! Builds a 3x3 grid of rooms joined by corridors to their row and column
//! neighbours. Real games bring their own room/corridor generator; this one
//! exists so the placement algorithm has realistic input for the demo binary
//! and tests.

use crate::consts::{
    MAX_ROOM_HEIGHT, MAX_ROOM_WIDTH, MIN_ROOM_HEIGHT, MIN_ROOM_WIDTH, ROOMS_PER_ROW, SECTION_HEIGHT,
    SECTION_WIDTH,
};
use crate::rng::GameRng;

use super::{Corridor, Level, Room};

/// Generate a grid level with rooms and corridors, start and exit chosen at random
pub fn generate_grid_level(number: u32, rng: &mut GameRng) -> Level {
    let mut level = Level::new(number);

    for room in generate_rooms(rng) {
        level.add_room(room);
    }

    for corridor in generate_corridors(&level.rooms) {
        level.add_corridor(corridor);
    }

    let count = level.rooms.len() as u32;
    let start = rng.rn2(count) as usize;
    // Exit is any other room
    let exit = (start + 1 + rng.rn2(count - 1) as usize) % count as usize;
    level.set_start_and_exit(start, exit);

    level
}

/// One room per grid section, randomly sized and offset inside it
fn generate_rooms(rng: &mut GameRng) -> Vec<Room> {
    let mut rooms = Vec::with_capacity((ROOMS_PER_ROW * ROOMS_PER_ROW) as usize);

    for row in 0..ROOMS_PER_ROW {
        for col in 0..ROOMS_PER_ROW {
            let section_x = col * SECTION_WIDTH;
            let section_y = row * SECTION_HEIGHT;

            let width = rng.range_inclusive(MIN_ROOM_WIDTH, MAX_ROOM_WIDTH);
            let height = rng.range_inclusive(MIN_ROOM_HEIGHT, MAX_ROOM_HEIGHT);

            let max_x = section_x + SECTION_WIDTH - width - 1;
            let max_y = section_y + SECTION_HEIGHT - height - 1;

            let x = rng.range_inclusive(section_x + 1, max_x.max(section_x + 1));
            let y = rng.range_inclusive(section_y + 1, max_y.max(section_y + 1));

            rooms.push(Room::new(x, y, width, height));
        }
    }

    rooms
}

/// Horizontal corridors along each row, then vertical corridors down each column
fn generate_corridors(rooms: &[Room]) -> Vec<Corridor> {
    let per_row = ROOMS_PER_ROW as usize;
    let mut corridors = Vec::new();

    for row in 0..per_row {
        for col in 0..per_row - 1 {
            let idx = row * per_row + col;
            corridors.push(connect_horizontal(&rooms[idx], &rooms[idx + 1]));
        }
    }

    for col in 0..per_row {
        for row in 0..per_row - 1 {
            let idx = row * per_row + col;
            corridors.push(connect_vertical(&rooms[idx], &rooms[idx + per_row]));
        }
    }

    corridors
}

/// Z-shaped corridor from the right wall of `left` to the left wall of `right`
fn connect_horizontal(left: &Room, right: &Room) -> Corridor {
    let x1 = left.right();
    let y1 = left.y + left.height / 2;
    let x2 = right.x;
    let y2 = right.y + right.height / 2;
    let mid_x = (x1 + x2) / 2;

    let mut corridor = Corridor::new();
    corridor.add_horizontal_run(x1, mid_x, y1);
    corridor.add_vertical_run(mid_x, y1, y2);
    corridor.add_horizontal_run(mid_x, x2, y2);
    corridor
}

/// Z-shaped corridor from the bottom wall of `top` to the top wall of `bottom`
fn connect_vertical(top: &Room, bottom: &Room) -> Corridor {
    let x1 = top.x + top.width / 2;
    let y1 = top.bottom();
    let x2 = bottom.x + bottom.width / 2;
    let y2 = bottom.y;
    let mid_y = (y1 + y2) / 2;

    let mut corridor = Corridor::new();
    corridor.add_vertical_run(x1, y1, mid_y);
    corridor.add_horizontal_run(x1, x2, mid_y);
    corridor.add_vertical_run(x2, mid_y, y2);
    corridor
}

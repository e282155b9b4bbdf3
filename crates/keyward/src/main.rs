//! keyward: generate a level and place solvable keys and doors
//!
//! Prints the level as an ASCII map followed by a pickup walkthrough, or the
//! saved key/door record with `--json`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use kw_core::dungeon::{Level, Position, generate_grid_level};
use kw_core::keys::{Inventory, PlacementReport, generate_keys_and_doors};
use kw_core::{GameRng, MAP_HEIGHT, MAP_WIDTH, PlacementOptions};

/// Colored key and locked door placement demo
#[derive(Parser, Debug)]
#[command(name = "keyward")]
#[command(author, version, about = "Generate a level with solvable keys and doors", long_about = None)]
struct Args {
    /// RNG seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Dungeon level number (1-based)
    #[arg(short, long, default_value_t = 1)]
    level: u32,

    /// Override the number of placement attempts
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Options file (OPTIONS=name:value lines)
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Print the key/door save record as JSON instead of the map
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let mut options = match &args.options {
        Some(path) => PlacementOptions::load_from_file(path)
            .with_context(|| format!("reading options from {}", path.display()))?,
        None => PlacementOptions::default(),
    };
    if let Some(max_attempts) = args.max_attempts {
        anyhow::ensure!(max_attempts > 0, "--max-attempts must be at least 1");
        options.max_attempts = max_attempts;
    }
    anyhow::ensure!(args.level > 0, "--level is 1-based");

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("Generating level {} with seed {}", args.level, rng.seed());

    let mut level = generate_grid_level(args.level, &mut rng);
    let report = generate_keys_and_doors(&mut level, &options, &mut rng);

    if args.json {
        let record = kw_save::snapshot(&level, &Inventory::new());
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{}", render_map(&level));
    println!();
    print!("{}", describe(&level, report.as_ref(), rng.seed()));
    Ok(())
}

/// Draw the level: walls `#`, floor and corridors `.`, doors as uppercase
/// color letters, keys lowercase, `@` start and `>` exit.
fn render_map(level: &Level) -> String {
    let mut grid = vec![vec![' '; MAP_WIDTH as usize]; MAP_HEIGHT as usize];
    let mut put = |pos: Position, ch: char| {
        if (0..MAP_WIDTH).contains(&pos.x) && (0..MAP_HEIGHT).contains(&pos.y) {
            grid[pos.y as usize][pos.x as usize] = ch;
        }
    };

    for room in &level.rooms {
        for y in room.y..=room.bottom() {
            for x in room.x..=room.right() {
                let pos = Position::new(x, y);
                put(pos, if room.is_on_wall(pos) { '#' } else { '.' });
            }
        }
    }
    for corridor in &level.corridors {
        for &tile in &corridor.tiles {
            put(tile, '.');
        }
    }
    if let Some(start) = level.rooms.get(level.start_room) {
        put(start.center(), '@');
    }
    put(level.exit_position, '>');
    for (_, key) in level.all_keys() {
        if let Some(pos) = key.position {
            put(pos, key.color.key_symbol());
        }
    }
    for door in &level.doors {
        put(door.position, door.color.door_symbol());
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text summary of the placement
fn describe(level: &Level, report: Option<&PlacementReport>, seed: u64) -> String {
    let mut out = format!(
        "Level {} (seed {}): start room {}, exit room {}\n",
        level.number, seed, level.start_room, level.exit_room
    );

    let Some(report) = report else {
        out.push_str("No keys or doors on this level\n");
        return out;
    };

    let names: Vec<String> = report.colors.iter().map(|c| c.to_string()).collect();
    out.push_str(&format!(
        "Colors: {} (placed on attempt {})\n",
        names.join(", "),
        report.attempts
    ));

    for door in &level.doors {
        out.push_str(&format!("  {} door at {}\n", door.color, door.position));
    }
    for (room, key) in level.all_keys() {
        if let Some(pos) = key.position {
            out.push_str(&format!("  {} key in room {} at {}\n", key.color, room, pos));
        }
    }

    if report.walkthrough.rounds.is_empty() {
        out.push_str("Walkthrough: the exit is open from the start\n");
    } else {
        out.push_str("Walkthrough:\n");
        for (i, round) in report.walkthrough.rounds.iter().enumerate() {
            let picked: Vec<String> = round.iter().map(|c| c.to_string()).collect();
            out.push_str(&format!("  {}. pick up {}\n", i + 1, picked.join(", ")));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_shows_doors_and_keys() {
        let options = PlacementOptions::default();
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let mut level = generate_grid_level(1, &mut rng);
            if generate_keys_and_doors(&mut level, &options, &mut rng).is_none() {
                continue;
            }
            let map = render_map(&level);
            assert!(map.lines().count() <= MAP_HEIGHT as usize);
            assert!(map.lines().all(|l| l.len() <= MAP_WIDTH as usize));
            for door in &level.doors {
                assert!(map.contains(door.color.door_symbol()));
            }
            assert!(map.contains('>'));
            return;
        }
        panic!("no seed produced a placement");
    }

    #[test]
    fn test_describe_without_puzzle() {
        let level = Level::new(1);
        let text = describe(&level, None, 5);
        assert!(text.contains("seed 5"));
        assert!(text.contains("No keys or doors"));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["keyward", "--seed", "9", "--level", "12", "--json"]);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.level, 12);
        assert!(args.json);
        assert!(args.options.is_none());
    }
}

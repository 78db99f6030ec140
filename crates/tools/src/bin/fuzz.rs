use std::collections::{BTreeSet, VecDeque};

use anyhow::{Result, bail};
use clap::Parser;
use maze_core::mazegen::{floor_component_count, progression};
use maze_core::{GeneratedMaze, MazeGenerator, Pos};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
    #[arg(long, default_value_t = 10)]
    max_level: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    log::info!("Starting maze fuzz on seed {} for {} runs...", args.seed, args.runs);
    let generator = MazeGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for run in 0..args.runs {
        let maze_seed = rng.next_u64();
        let level = 1 + (rng.next_u64() % u64::from(args.max_level.max(1))) as u32;
        let maze = match generator.generate_level(level, Some(maze_seed)) {
            Ok(maze) => maze,
            Err(err) => bail!("run {run}: level {level} seed {maze_seed} failed: {err}"),
        };
        if let Err(reason) = check_invariants(&maze) {
            bail!("run {run}: level {level} seed {maze_seed} broke an invariant: {reason}");
        }
    }

    log::info!("Fuzzing completed successfully.");
    Ok(())
}

fn check_invariants(maze: &GeneratedMaze) -> Result<(), String> {
    if floor_component_count(&maze.grid) != 1 {
        return Err("floor is not a single component".to_string());
    }

    let spawn = maze.player_spawn_cell();
    if !maze.grid.is_floor(spawn) {
        return Err(format!("spawn {spawn:?} is inside a wall"));
    }
    if reachable_floor(maze, spawn) != maze.grid.floor_count() {
        return Err("spawn does not reach every floor cell".to_string());
    }

    let min_distance_squared = {
        let threshold = 5 * i64::from(maze.tile_size);
        threshold * threshold
    };
    let mut occupied = BTreeSet::from([spawn]);
    for (cell, pos) in maze
        .key_cells()
        .chain(maze.zombie_cells())
        .zip(maze.key_positions.iter().chain(&maze.zombie_positions))
    {
        if !maze.grid.is_floor(cell) {
            return Err(format!("placement {cell:?} is inside a wall"));
        }
        if pos.distance_squared(maze.player_spawn) < min_distance_squared {
            return Err(format!("placement {cell:?} is too close to spawn {spawn:?}"));
        }
        if !occupied.insert(cell) {
            return Err(format!("placement {cell:?} shares a cell"));
        }
    }

    if maze.key_positions.len() != progression::key_count(maze.level) {
        return Err("key count does not match level".to_string());
    }
    if maze.zombie_positions.len() != progression::zombie_count(maze.level) {
        return Err("zombie count does not match level".to_string());
    }
    Ok(())
}

fn reachable_floor(maze: &GeneratedMaze, start: Pos) -> usize {
    let mut seen = BTreeSet::from([start]);
    let mut open = VecDeque::from([start]);
    while let Some(pos) = open.pop_front() {
        for next in [
            Pos { y: pos.y - 1, x: pos.x },
            Pos { y: pos.y, x: pos.x + 1 },
            Pos { y: pos.y + 1, x: pos.x },
            Pos { y: pos.y, x: pos.x - 1 },
        ] {
            if maze.grid.is_floor(next) && seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    seen.len()
}

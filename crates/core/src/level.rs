//! Per-level entity roster built from a generated maze.
//!
//! Each entity category lives in its own typed collection so level-load code never has to
//! inspect a runtime tag to find out what it is holding.

use slotmap::SlotMap;

use crate::error::MazeError;
use crate::mazegen::{GeneratedMaze, MazeGenerator, progression};
use crate::types::{KeyId, TileKind, WorldPos, ZombieId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerSpawn {
    pub pos: WorldPos,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySpawn {
    pub pos: WorldPos,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZombieSpawn {
    pub pos: WorldPos,
    pub health: u32,
    pub max_health: u32,
}

#[derive(Clone, Debug)]
pub struct LevelRoster {
    pub level: u32,
    pub walls: Vec<WorldPos>,
    pub player: PlayerSpawn,
    pub keys: SlotMap<KeyId, KeySpawn>,
    pub zombies: SlotMap<ZombieId, ZombieSpawn>,
    pub keys_required: usize,
}

impl LevelRoster {
    pub fn from_maze(maze: &GeneratedMaze) -> Self {
        let walls = maze
            .grid
            .positions()
            .filter(|&pos| maze.grid.tile_at(pos) == TileKind::Wall)
            .map(|pos| pos.to_world(maze.tile_size))
            .collect();

        let mut keys = SlotMap::with_key();
        for &pos in &maze.key_positions {
            keys.insert(KeySpawn { pos });
        }

        let health = progression::zombie_health(maze.level);
        let mut zombies = SlotMap::with_key();
        for &pos in &maze.zombie_positions {
            zombies.insert(ZombieSpawn { pos, health, max_health: health });
        }

        Self {
            level: maze.level,
            walls,
            player: PlayerSpawn { pos: maze.player_spawn },
            keys_required: maze.key_positions.len(),
            keys,
            zombies,
        }
    }
}

/// Generates a fresh maze for `level` and builds its roster. Nothing is reused between levels.
pub fn load_level(
    generator: &MazeGenerator,
    level: u32,
    seed: Option<u64>,
) -> Result<(GeneratedMaze, LevelRoster), MazeError> {
    let maze = generator.generate_level(level, seed)?;
    let roster = LevelRoster::from_maze(&maze);
    log::info!(
        "loaded level {level}: {} keys required, {} zombies at {} hp",
        roster.keys_required,
        roster.zombies.len(),
        progression::zombie_health(level)
    );
    Ok((maze, roster))
}

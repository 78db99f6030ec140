//! Public output model for a generated maze level.

use std::iter;

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{EntityCategory, PlacementPoint, Pos, TileKind, WorldPos};

use super::grid::Grid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedMaze {
    pub seed: u64,
    pub level: u32,
    pub tile_size: u32,
    pub grid: Grid,
    pub player_spawn: WorldPos,
    pub key_positions: Vec<WorldPos>,
    pub zombie_positions: Vec<WorldPos>,
}

impl GeneratedMaze {
    pub fn player_spawn_cell(&self) -> Pos {
        world_to_cell(self.player_spawn, self.tile_size)
    }

    pub fn key_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let tile_size = self.tile_size;
        self.key_positions.iter().map(move |&pos| world_to_cell(pos, tile_size))
    }

    pub fn zombie_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let tile_size = self.tile_size;
        self.zombie_positions.iter().map(move |&pos| world_to_cell(pos, tile_size))
    }

    /// Every placement tagged with its category: spawn first, then keys, then zombies.
    pub fn placements(&self) -> Vec<PlacementPoint> {
        let spawn =
            PlacementPoint { category: EntityCategory::PlayerSpawn, pos: self.player_spawn };
        let keys = self
            .key_positions
            .iter()
            .map(|&pos| PlacementPoint { category: EntityCategory::Key, pos });
        let zombies = self
            .zombie_positions
            .iter()
            .map(|&pos| PlacementPoint { category: EntityCategory::Zombie, pos });
        iter::once(spawn).chain(keys).chain(zombies).collect()
    }

    /// Byte encoding of grid and placements; the seed is excluded so equal mazes compare equal.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.grid.width() as u32).to_le_bytes());
        bytes.extend((self.grid.height() as u32).to_le_bytes());
        for tile in self.grid.tiles() {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
            });
        }
        bytes.extend(self.tile_size.to_le_bytes());
        bytes.extend(self.player_spawn.x.to_le_bytes());
        bytes.extend(self.player_spawn.y.to_le_bytes());
        for positions in [&self.key_positions, &self.zombie_positions] {
            bytes.extend((positions.len() as u32).to_le_bytes());
            for pos in positions {
                bytes.extend(pos.x.to_le_bytes());
                bytes.extend(pos.y.to_le_bytes());
            }
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn world_to_cell(pos: WorldPos, tile_size: u32) -> Pos {
    let tile = tile_size as i32;
    Pos { y: pos.y / tile, x: pos.x / tile }
}

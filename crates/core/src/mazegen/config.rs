//! Tunable generation constants, loadable from TOML.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MazeError;

pub const DEFAULT_TILE_SIZE: u32 = 32;
pub const DEFAULT_ROOM_PUNCH_PERCENT: u8 = 20;
pub const DEFAULT_MIN_SPAWN_DISTANCE_TILES: u32 = 5;
pub const DEFAULT_PLACEMENT_ATTEMPT_BUDGET: u32 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub tile_size: u32,
    /// Chance (0..=100) that an interior wall is opened after carving.
    pub room_punch_percent: u8,
    pub min_spawn_distance_tiles: u32,
    /// Inclusive cell range sampled on both axes for the player spawn.
    pub spawn_region_min: usize,
    pub spawn_region_max: usize,
    /// Draws allowed per entity before placement gives up.
    pub placement_attempt_budget: u32,
    /// Reject key/zombie cells already taken by another placement.
    pub distinct_cells: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            room_punch_percent: DEFAULT_ROOM_PUNCH_PERCENT,
            min_spawn_distance_tiles: DEFAULT_MIN_SPAWN_DISTANCE_TILES,
            spawn_region_min: 1,
            spawn_region_max: 3,
            placement_attempt_budget: DEFAULT_PLACEMENT_ATTEMPT_BUDGET,
            distinct_cells: true,
        }
    }
}

impl MazeConfig {
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if self.tile_size == 0 {
            return Err(MazeError::InvalidConfig("tile_size must be positive"));
        }
        if i32::try_from(self.tile_size).is_err() {
            return Err(MazeError::InvalidConfig("tile_size must fit in i32 world units"));
        }
        if self.room_punch_percent > 100 {
            return Err(MazeError::InvalidConfig("room_punch_percent must be at most 100"));
        }
        if self.spawn_region_min == 0 || self.spawn_region_min > self.spawn_region_max {
            return Err(MazeError::InvalidConfig(
                "spawn region must be a non-empty range inside the border",
            ));
        }
        if self.placement_attempt_budget == 0 {
            return Err(MazeError::InvalidConfig("placement_attempt_budget must be positive"));
        }
        Ok(())
    }

    /// Checks the parts of the config that depend on grid size.
    pub(super) fn validate_for_grid(&self, width: usize, height: usize) -> Result<(), MazeError> {
        self.validate()?;
        if self.spawn_region_max + 2 > width || self.spawn_region_max + 2 > height {
            return Err(MazeError::InvalidConfig("spawn region does not fit inside the grid"));
        }
        let far_cell = i32::try_from(width.max(height) - 1).ok();
        let tile = i32::try_from(self.tile_size).ok();
        if far_cell.zip(tile).and_then(|(cell, tile)| cell.checked_mul(tile)).is_none() {
            return Err(MazeError::InvalidConfig("grid extent overflows i32 world units"));
        }
        if self.checked_spawn_distance_squared().is_none() {
            return Err(MazeError::InvalidConfig("min spawn distance overflows i64 when squared"));
        }
        Ok(())
    }

    /// Squared world-unit threshold; saturates for configs that `validate_for_grid` rejects.
    pub(super) fn min_spawn_distance_squared(&self) -> i64 {
        self.checked_spawn_distance_squared().unwrap_or(i64::MAX)
    }

    fn checked_spawn_distance_squared(&self) -> Option<i64> {
        let threshold =
            i64::from(self.min_spawn_distance_tiles).checked_mul(i64::from(self.tile_size))?;
        threshold.checked_mul(threshold)
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }
}

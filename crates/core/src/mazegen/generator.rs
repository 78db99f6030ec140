//! Generation pipeline: carve, punch rooms, repair connectivity, then place entities.

use crate::error::MazeError;
use crate::types::{EntityCategory, TileKind};

use super::carve::carve_backtracking_maze;
use super::config::MazeConfig;
use super::connectivity::{repair_connectivity, verify_single_component};
use super::grid::Grid;
use super::model::GeneratedMaze;
use super::placement::{PlacementContext, place_entities, place_player_spawn};
use super::progression;
use super::rooms::punch_rooms;
use super::seed::{rng_from_seed, runtime_seed};

pub const MIN_DIMENSION: usize = 5;
/// Upper bound on `width * height`.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Clone, Debug, Default)]
pub struct MazeGenerator {
    config: MazeConfig,
}

impl MazeGenerator {
    pub fn new(config: MazeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Generates a level at its progression size (`20 + level` by `15 + level`).
    pub fn generate_level(
        &self,
        level: u32,
        seed: Option<u64>,
    ) -> Result<GeneratedMaze, MazeError> {
        if level < progression::STARTING_LEVEL {
            return Err(MazeError::InvalidConfig("levels start at 1"));
        }
        let (width, height) = progression::level_dimensions(level);
        self.generate(width, height, level, seed)
    }

    pub fn generate(
        &self,
        width: usize,
        height: usize,
        level: u32,
        seed: Option<u64>,
    ) -> Result<GeneratedMaze, MazeError> {
        if width < MIN_DIMENSION
            || height < MIN_DIMENSION
            || i32::try_from(width).is_err()
            || i32::try_from(height).is_err()
            || width.checked_mul(height).is_none_or(|cells| cells > MAX_CELLS)
        {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        self.config.validate_for_grid(width, height)?;

        let seed = seed.unwrap_or_else(runtime_seed);
        let mut rng = rng_from_seed(seed);
        let mut grid = Grid::filled(width, height, TileKind::Wall);

        let carved = carve_backtracking_maze(&mut grid, &mut rng);
        let punched = punch_rooms(&mut grid, &mut rng, self.config.room_punch_percent);
        let connectors = repair_connectivity(&mut grid, &mut rng);
        verify_single_component(&grid)?;
        log::debug!(
            "maze {width}x{height} seed={seed}: carved {carved}, punched {punched}, \
             connectors {connectors}, floor {}",
            grid.floor_count()
        );

        let player_spawn = place_player_spawn(&grid, &self.config, &mut rng)?;
        let context = PlacementContext { grid: &grid, config: &self.config, player_spawn };
        let mut taken = vec![player_spawn];
        let keys = place_entities(
            &context,
            &mut rng,
            EntityCategory::Key,
            progression::key_count(level),
            &mut taken,
        )?;
        let zombies = place_entities(
            &context,
            &mut rng,
            EntityCategory::Zombie,
            progression::zombie_count(level),
            &mut taken,
        )?;

        let tile_size = self.config.tile_size;
        Ok(GeneratedMaze {
            seed,
            level,
            tile_size,
            player_spawn: player_spawn.to_world(tile_size),
            key_positions: keys.into_iter().map(|cell| cell.to_world(tile_size)).collect(),
            zombie_positions: zombies.into_iter().map(|cell| cell.to_world(tile_size)).collect(),
            grid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mazegen::connectivity::floor_components;
    use crate::mazegen::placement::far_enough_from_spawn;
    use crate::types::Pos;

    #[test]
    fn reference_scenario_meets_every_invariant() {
        let generator = MazeGenerator::default();
        let maze = generator.generate(22, 17, 1, Some(2_024)).expect("22x17 should generate");

        assert_eq!((maze.grid.width(), maze.grid.height()), (22, 17));
        assert_eq!(floor_components(&maze.grid).len(), 1);

        let spawn = maze.player_spawn_cell();
        assert!(maze.grid.is_floor(spawn));
        assert!((1..=3).contains(&spawn.x) && (1..=3).contains(&spawn.y));

        assert_eq!(maze.key_positions.len(), 3);
        assert_eq!(maze.zombie_positions.len(), 3);
        for pos in maze.key_positions.iter().chain(&maze.zombie_positions) {
            assert!(pos.distance(maze.player_spawn) >= 160.0, "{pos:?} is too close to spawn");
        }
        for cell in maze.key_cells().chain(maze.zombie_cells()) {
            assert!(maze.grid.is_floor(cell));
            assert!(far_enough_from_spawn(generator.config(), spawn, cell));
        }
    }

    #[test]
    fn rejects_dimensions_below_minimum() {
        let generator = MazeGenerator::default();
        assert_eq!(
            generator.generate(4, 20, 1, Some(1)),
            Err(MazeError::InvalidDimensions { width: 4, height: 20 })
        );
        assert_eq!(
            generator.generate(20, 0, 1, Some(1)),
            Err(MazeError::InvalidDimensions { width: 20, height: 0 })
        );
    }

    #[test]
    fn rejects_grids_with_too_many_cells() {
        let generator = MazeGenerator::default();
        let side = i32::MAX as usize;
        assert_eq!(
            generator.generate(side, side, 1, Some(1)),
            Err(MazeError::InvalidDimensions { width: side, height: side })
        );
        assert_eq!(
            generator.generate(MAX_CELLS, 5, 1, Some(1)),
            Err(MazeError::InvalidDimensions { width: MAX_CELLS, height: 5 })
        );
    }

    #[test]
    fn huge_tile_sizes_are_rejected_instead_of_overflowing() {
        for tile_size in [1 << 30, u32::MAX] {
            let generator = MazeGenerator::new(MazeConfig::default().with_tile_size(tile_size));
            let result = generator.generate(22, 17, 1, Some(1));
            assert!(
                matches!(result, Err(MazeError::InvalidConfig(_))),
                "tile size {tile_size} gave {result:?}"
            );
        }
    }

    #[test]
    fn huge_level_exhausts_placement_without_allocating() {
        let result = MazeGenerator::default().generate(22, 17, u32::MAX, Some(1));
        assert_eq!(
            result,
            Err(MazeError::PlacementExhausted {
                category: EntityCategory::Key,
                requested: progression::key_count(u32::MAX),
                placed: 0
            })
        );
    }

    #[test]
    fn smallest_grid_fails_fast_instead_of_hanging() {
        // No interior cell of a 5x5 grid is five tiles from the spawn corner.
        let result = MazeGenerator::default().generate(5, 5, 1, Some(42));
        assert!(
            matches!(
                result,
                Err(MazeError::PlacementExhausted { .. } | MazeError::SpawnRegionBlocked)
            ),
            "unexpected result {result:?}"
        );
    }

    #[test]
    fn level_zero_is_rejected() {
        let result = MazeGenerator::default().generate_level(0, Some(1));
        assert!(matches!(result, Err(MazeError::InvalidConfig(_))));
    }

    #[test]
    fn generate_level_uses_progression_size() {
        let maze = MazeGenerator::default().generate_level(3, Some(77)).expect("level 3");
        assert_eq!((maze.grid.width(), maze.grid.height()), (23, 18));
        assert_eq!(maze.level, 3);
    }

    #[test]
    fn tile_size_scales_world_positions() {
        let generator = MazeGenerator::new(MazeConfig::default().with_tile_size(16));
        let maze = generator.generate(22, 17, 2, Some(5)).expect("generate");
        assert_eq!(maze.tile_size, 16);
        for pos in maze.key_positions.iter().chain(&maze.zombie_positions) {
            assert_eq!(pos.x % 16, 0);
            assert_eq!(pos.y % 16, 0);
            assert!(pos.distance(maze.player_spawn) >= 80.0);
        }
    }

    #[test]
    fn seed_is_recorded_and_runtime_seed_used_when_absent() {
        let generator = MazeGenerator::default();
        let seeded = generator.generate(21, 16, 1, Some(9)).expect("generate");
        assert_eq!(seeded.seed, 9);

        let unseeded = generator.generate(21, 16, 1, None).expect("generate");
        let replayed = generator.generate(21, 16, 1, Some(unseeded.seed)).expect("generate");
        assert_eq!(unseeded, replayed);
    }

    #[test]
    fn no_punching_keeps_the_perfect_maze() {
        let config = MazeConfig { room_punch_percent: 0, ..MazeConfig::default() };
        let maze = MazeGenerator::new(config).generate(21, 15, 1, Some(3)).expect("generate");
        // Only the centre-anchored lattice and its passages are carved.
        let off_lattice = maze
            .grid
            .floor_cells()
            .filter(|pos: &Pos| pos.x % 2 == 1 && pos.y % 2 == 0)
            .count();
        assert_eq!(off_lattice, 0);
    }
}

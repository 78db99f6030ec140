//! Procedural maze generation split into coherent submodules.

pub mod config;
pub mod model;
pub mod progression;

mod carve;
mod connectivity;
mod generator;
mod grid;
mod placement;
mod rooms;
mod seed;

pub use config::MazeConfig;
pub use generator::{MAX_CELLS, MIN_DIMENSION, MazeGenerator};
pub use grid::Grid;
pub use model::GeneratedMaze;
pub use seed::runtime_seed;

use crate::error::MazeError;

/// One-call entry point: builds a generator for `tile_size` with default tuning.
pub fn generate(
    width: usize,
    height: usize,
    level: u32,
    tile_size: u32,
    seed: Option<u64>,
) -> Result<GeneratedMaze, MazeError> {
    MazeGenerator::new(MazeConfig::default().with_tile_size(tile_size))
        .generate(width, height, level, seed)
}

pub fn floor_component_count(grid: &Grid) -> usize {
    connectivity::floor_components(grid).len()
}

/// Runs the connectivity repair pass on `grid` and returns the number of corridors carved.
pub fn reconnect(grid: &mut Grid, seed: u64) -> usize {
    connectivity::repair_connectivity(grid, &mut seed::rng_from_seed(seed))
}

#[cfg(test)]
mod tests {
    use super::{MazeConfig, MazeGenerator};

    #[test]
    fn generate_matches_generator_output() {
        let from_helper = super::generate(20, 15, 2, 32, Some(123)).expect("helper");
        let from_generator =
            MazeGenerator::new(MazeConfig::default()).generate(20, 15, 2, Some(123)).expect("gen");

        assert_eq!(from_helper, from_generator);
    }
}

//! Floor component analysis and the corridor pass that merges every component into one.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;

use crate::error::MazeError;
use crate::types::{Pos, TileKind};

use super::grid::{Grid, neighbors};
use super::seed::random_in;

/// Enumerates 4-connected floor components, ordered by their first cell in row-major order.
pub(crate) fn floor_components(grid: &Grid) -> Vec<Vec<Pos>> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let visit_index = |pos: Pos| (pos.y as usize) * grid.width() + (pos.x as usize);
    let mut components = Vec::new();

    for start in grid.floor_cells() {
        if visited[visit_index(start)] {
            continue;
        }
        visited[visit_index(start)] = true;

        let mut component = Vec::new();
        let mut open = VecDeque::from([start]);
        while let Some(pos) = open.pop_front() {
            component.push(pos);
            for next in neighbors(pos) {
                if grid.is_floor(next) && !visited[visit_index(next)] {
                    visited[visit_index(next)] = true;
                    open.push_back(next);
                }
            }
        }
        components.push(component);
    }

    components
}

/// Joins every component to the first one with an L-shaped corridor and returns the number
/// of corridors carved.
///
/// Corridors run along the row of the primary endpoint, then down the column of the other
/// endpoint. They may cut through unrelated walls or components; carving floor is idempotent.
pub(super) fn repair_connectivity(grid: &mut Grid, rng: &mut ChaCha8Rng) -> usize {
    let components = floor_components(grid);
    log::debug!("connectivity repair found {} floor components", components.len());
    let Some((primary, others)) = components.split_first() else {
        return 0;
    };

    for component in others {
        let from = primary[random_in(rng, 0, primary.len() - 1)];
        let to = component[random_in(rng, 0, component.len() - 1)];
        carve_connector(grid, from, to);
    }

    others.len()
}

/// Fails when the grid still holds more than one floor component.
pub(super) fn verify_single_component(grid: &Grid) -> Result<(), MazeError> {
    let components = floor_components(grid).len();
    if components > 1 {
        return Err(MazeError::DisconnectedAfterRepair { components });
    }
    Ok(())
}

fn carve_connector(grid: &mut Grid, from: Pos, to: Pos) {
    for x in from.x.min(to.x)..=from.x.max(to.x) {
        grid.set(Pos { y: from.y, x }, TileKind::Floor);
    }
    for y in from.y.min(to.y)..=from.y.max(to.y) {
        grid.set(Pos { y, x: to.x }, TileKind::Floor);
    }
}

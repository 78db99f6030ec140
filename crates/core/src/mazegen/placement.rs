//! Player spawn selection and rejection-sampled key/zombie placement.

use rand_chacha::ChaCha8Rng;

use crate::error::MazeError;
use crate::types::{EntityCategory, Pos};

use super::config::MazeConfig;
use super::grid::Grid;
use super::seed::random_in;

pub(super) struct PlacementContext<'a> {
    pub(super) grid: &'a Grid,
    pub(super) config: &'a MazeConfig,
    pub(super) player_spawn: Pos,
}

/// Draws spawn cells from the configured corner region until one is floor. After the attempt
/// budget runs out the region is scanned in row-major order before giving up.
pub(super) fn place_player_spawn(
    grid: &Grid,
    config: &MazeConfig,
    rng: &mut ChaCha8Rng,
) -> Result<Pos, MazeError> {
    let (low, high) = (config.spawn_region_min, config.spawn_region_max);
    for _ in 0..config.placement_attempt_budget {
        let x = random_in(rng, low, high);
        let y = random_in(rng, low, high);
        let candidate = Pos { y: y as i32, x: x as i32 };
        if grid.is_floor(candidate) {
            return Ok(candidate);
        }
    }

    (low..=high)
        .flat_map(|y| (low..=high).map(move |x| Pos { y: y as i32, x: x as i32 }))
        .find(|&pos| grid.is_floor(pos))
        .ok_or(MazeError::SpawnRegionBlocked)
}

/// Places `count` entities of one category on interior floor cells far enough from the player
/// spawn. Accepted cells are appended to `taken`; with `distinct_cells` set, cells already in
/// `taken` are rejected.
pub(super) fn place_entities(
    context: &PlacementContext<'_>,
    rng: &mut ChaCha8Rng,
    category: EntityCategory,
    count: usize,
    taken: &mut Vec<Pos>,
) -> Result<Vec<Pos>, MazeError> {
    let eligible = eligible_cell_count(context, taken);
    let reachable = if context.config.distinct_cells { count <= eligible } else { eligible > 0 };
    if count > 0 && !reachable {
        log::warn!("{category:?} placement needs {count} cells but only {eligible} qualify");
        return Err(MazeError::PlacementExhausted { category, requested: count, placed: 0 });
    }

    let mut placed = Vec::with_capacity(count.min(eligible));
    let mut attempts_used = 0_u64;

    while placed.len() < count {
        let Some((cell, attempts)) = sample_cell(context, rng, taken) else {
            log::warn!(
                "giving up on {category:?} placement after {} draws: placed {} of {count}",
                context.config.placement_attempt_budget,
                placed.len()
            );
            return Err(MazeError::PlacementExhausted {
                category,
                requested: count,
                placed: placed.len(),
            });
        };
        attempts_used += u64::from(attempts);
        taken.push(cell);
        placed.push(cell);
    }

    log::debug!("placed {count} {category:?} cells in {attempts_used} draws");
    Ok(placed)
}

pub(super) fn far_enough_from_spawn(config: &MazeConfig, spawn: Pos, cell: Pos) -> bool {
    let spawn_world = spawn.to_world(config.tile_size);
    cell.to_world(config.tile_size).distance_squared(spawn_world)
        >= config.min_spawn_distance_squared()
}

/// Interior floor cells that pass the spawn-distance rule and, with `distinct_cells`, are free.
fn eligible_cell_count(context: &PlacementContext<'_>, taken: &[Pos]) -> usize {
    let grid = context.grid;
    let interior = |pos: Pos| {
        pos.x >= 1
            && pos.y >= 1
            && (pos.x as usize) < grid.width() - 1
            && (pos.y as usize) < grid.height() - 1
    };
    grid.floor_cells()
        .filter(|&pos| interior(pos))
        .filter(|&pos| far_enough_from_spawn(context.config, context.player_spawn, pos))
        .filter(|pos| !context.config.distinct_cells || !taken.contains(pos))
        .count()
}

fn sample_cell(
    context: &PlacementContext<'_>,
    rng: &mut ChaCha8Rng,
    taken: &[Pos],
) -> Option<(Pos, u32)> {
    let grid = context.grid;
    for attempt in 1..=context.config.placement_attempt_budget {
        let x = random_in(rng, 1, grid.width() - 2);
        let y = random_in(rng, 1, grid.height() - 2);
        let candidate = Pos { y: y as i32, x: x as i32 };
        if !grid.is_floor(candidate)
            || !far_enough_from_spawn(context.config, context.player_spawn, candidate)
        {
            continue;
        }
        if context.config.distinct_cells && taken.contains(&candidate) {
            continue;
        }
        return Some((candidate, attempt));
    }
    None
}

//! Room punching: opens random interior walls to break up the perfect maze.

use rand_chacha::ChaCha8Rng;

use crate::types::{Pos, TileKind};

use super::grid::Grid;
use super::seed::random_percent_below;

/// Flips interior walls to floor with `percent` chance each and returns how many were opened.
/// The outer border is never touched. Connectivity is not preserved here.
pub(super) fn punch_rooms(grid: &mut Grid, rng: &mut ChaCha8Rng, percent: u8) -> usize {
    let mut opened = 0_usize;
    for y in 1..grid.height().saturating_sub(1) {
        for x in 1..grid.width().saturating_sub(1) {
            let pos = Pos { y: y as i32, x: x as i32 };
            if grid.tile_at(pos) == TileKind::Wall && random_percent_below(rng, percent) {
                grid.set(pos, TileKind::Floor);
                opened += 1;
            }
        }
    }
    opened
}

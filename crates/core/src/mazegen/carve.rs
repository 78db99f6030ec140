//! Randomized recursive-backtracking carver that produces the maze skeleton.

use rand_chacha::ChaCha8Rng;

use crate::types::{Pos, TileKind};

use super::grid::Grid;
use super::seed::shuffle;

/// Right, left, down, up in two-cell steps.
const STEPS: [(i32, i32); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Carves a perfect maze starting from the grid centre and returns the number of floor cells.
///
/// The walk is an explicit stack: the top cell tries its four steps in shuffled order and
/// advances into the first target that is still wall, opening the cell in between. A cell
/// with no open step is popped. Every carved cell is therefore reachable from the start.
pub(super) fn carve_backtracking_maze(grid: &mut Grid, rng: &mut ChaCha8Rng) -> usize {
    let start = Pos { y: (grid.height() / 2) as i32, x: (grid.width() / 2) as i32 };
    grid.set(start, TileKind::Floor);
    let mut carved = 1_usize;

    let mut stack = vec![start];
    while let Some(&current) = stack.last() {
        let mut directions = STEPS;
        shuffle(rng, &mut directions);

        let mut moved = false;
        for (dx, dy) in directions {
            let target = Pos { y: current.y + dy, x: current.x + dx };
            if !grid.in_bounds(target) || grid.tile_at(target) != TileKind::Wall {
                continue;
            }
            let between = Pos { y: current.y + dy / 2, x: current.x + dx / 2 };
            grid.set(between, TileKind::Floor);
            grid.set(target, TileKind::Floor);
            carved += 2;
            stack.push(target);
            moved = true;
            break;
        }

        if !moved {
            stack.pop();
        }
    }

    carved
}

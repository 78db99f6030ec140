//! Level progression rules: maze size, key and zombie counts, zombie health.

pub const STARTING_LEVEL: u32 = 1;

const BASE_WIDTH: usize = 20;
const BASE_HEIGHT: usize = 15;
const BASE_KEY_COUNT: usize = 3;
const BASE_ZOMBIE_COUNT: usize = 2;
const ZOMBIE_HEALTH_PER_LEVEL: u32 = 2;

/// Grid `(width, height)` for a level; each level adds one column and one row.
pub fn level_dimensions(level: u32) -> (usize, usize) {
    (BASE_WIDTH + level as usize, BASE_HEIGHT + level as usize)
}

pub fn key_count(level: u32) -> usize {
    BASE_KEY_COUNT + (level / 2) as usize
}

pub fn zombie_count(level: u32) -> usize {
    BASE_ZOMBIE_COUNT + level as usize
}

/// Starting (and maximum) health of every zombie on a level.
pub fn zombie_health(level: u32) -> u32 {
    ZOMBIE_HEALTH_PER_LEVEL.saturating_mul(level)
}

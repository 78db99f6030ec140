use std::collections::{BTreeSet, VecDeque};

use maze_core::mazegen::{MazeConfig, MazeGenerator, floor_component_count, progression, reconnect};
use maze_core::{GeneratedMaze, MazeError, Pos, generate};
use proptest::prelude::*;

fn reachable_from(maze: &GeneratedMaze, start: Pos) -> BTreeSet<Pos> {
    let mut seen = BTreeSet::from([start]);
    let mut open = VecDeque::from([start]);
    while let Some(pos) = open.pop_front() {
        for next in [
            Pos { y: pos.y - 1, x: pos.x },
            Pos { y: pos.y, x: pos.x + 1 },
            Pos { y: pos.y + 1, x: pos.x },
            Pos { y: pos.y, x: pos.x - 1 },
        ] {
            if maze.grid.is_floor(next) && seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    seen
}

fn check_invariants(maze: &GeneratedMaze) -> Result<(), String> {
    let spawn = maze.player_spawn_cell();
    if !maze.grid.is_floor(spawn) {
        return Err(format!("spawn {spawn:?} is not floor"));
    }

    let reachable = reachable_from(maze, spawn);
    if reachable.len() != maze.grid.floor_count() {
        return Err(format!(
            "spawn reaches {} of {} floor cells",
            reachable.len(),
            maze.grid.floor_count()
        ));
    }

    let threshold = 5.0 * f64::from(maze.tile_size);
    for pos in maze.key_positions.iter().chain(&maze.zombie_positions) {
        if pos.distance(maze.player_spawn) < threshold {
            return Err(format!("{pos:?} is closer than {threshold} to spawn"));
        }
    }

    let mut cells = BTreeSet::from([spawn]);
    for cell in maze.key_cells().chain(maze.zombie_cells()) {
        if !maze.grid.is_floor(cell) {
            return Err(format!("placement {cell:?} is not floor"));
        }
        if !cells.insert(cell) {
            return Err(format!("placement {cell:?} shares a cell"));
        }
    }

    if maze.key_positions.len() != progression::key_count(maze.level)
        || maze.zombie_positions.len() != progression::zombie_count(maze.level)
    {
        return Err("placement counts do not match level".to_string());
    }
    Ok(())
}

#[test]
fn reference_scenario_twenty_two_by_seventeen() {
    for seed in [1_u64, 2, 3, 40, 99, 321, 1_024, 999_999] {
        let maze = generate(22, 17, 1, 32, Some(seed)).expect("22x17 should generate");
        assert_eq!((maze.grid.height(), maze.grid.width()), (17, 22));
        assert_eq!(floor_component_count(&maze.grid), 1);

        let spawn = maze.player_spawn_cell();
        assert!((1..=3).contains(&spawn.x) && (1..=3).contains(&spawn.y), "seed={seed}");
        assert_eq!(maze.key_positions.len(), 3);
        assert_eq!(maze.zombie_positions.len(), 3);
        check_invariants(&maze).unwrap_or_else(|err| panic!("seed={seed}: {err}"));
    }
}

#[test]
fn counts_match_level_progression() {
    for (level, keys, zombies) in [(1, 3, 3), (2, 4, 4), (3, 4, 5), (5, 5, 7), (10, 8, 12)] {
        let maze = generate(30, 24, level, 32, Some(u64::from(level) * 31)).expect("generate");
        assert_eq!(maze.key_positions.len(), keys, "keys on level {level}");
        assert_eq!(maze.zombie_positions.len(), zombies, "zombies on level {level}");
        check_invariants(&maze).unwrap_or_else(|err| panic!("level={level}: {err}"));
    }
}

#[test]
fn repair_is_idempotent_on_generated_grid() {
    let maze = generate(20, 15, 1, 32, Some(42)).expect("generate");
    let mut grid = maze.grid.clone();
    assert_eq!(reconnect(&mut grid, 1), 0);
    assert_eq!(reconnect(&mut grid, 2), 0);
    assert_eq!(grid, maze.grid);
}

#[test]
fn minimum_grid_never_hangs() {
    for seed in 0..16 {
        match generate(5, 5, 1, 32, Some(seed)) {
            Err(MazeError::PlacementExhausted { .. } | MazeError::SpawnRegionBlocked) => {}
            Ok(maze) => check_invariants(&maze).unwrap_or_else(|err| panic!("{err}")),
            Err(other) => panic!("unexpected error for 5x5: {other}"),
        }
    }
}

#[test]
fn overlapping_placements_allowed_when_distinctness_is_off() {
    let config = MazeConfig { distinct_cells: false, ..MazeConfig::default() };
    let maze = MazeGenerator::new(config).generate(22, 17, 10, Some(5)).expect("generate");
    assert_eq!(maze.key_positions.len(), 8);
    assert_eq!(maze.zombie_positions.len(), 12);
    for cell in maze.key_cells().chain(maze.zombie_cells()) {
        assert!(maze.grid.is_floor(cell));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn generated_mazes_hold_every_invariant(
        seed in any::<u64>(),
        width in 12_usize..40,
        height in 12_usize..32,
        level in 1_u32..=6
    ) {
        let maze = generate(width, height, level, 32, Some(seed));
        prop_assert!(maze.is_ok(), "seed={seed} {width}x{height} level={level}: {maze:?}");
        if let Ok(maze) = maze {
            prop_assert_eq!(check_invariants(&maze), Ok(()));
        }
    }

    #[test]
    fn progression_levels_are_connected(seed in any::<u64>(), level in 1_u32..=10) {
        let maze = MazeGenerator::default().generate_level(level, Some(seed));
        prop_assert!(maze.is_ok(), "seed={seed} level={level}");
        if let Ok(maze) = maze {
            prop_assert_eq!(floor_component_count(&maze.grid), 1);
        }
    }
}

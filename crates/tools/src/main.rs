use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{GeneratedMaze, MazeConfig, MazeGenerator, Pos};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Level number; also sets the maze size unless width/height are given
    #[arg(short, long, default_value_t = 1)]
    level: u32,
    /// Seed for a reproducible maze; a runtime seed is used when absent
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long, requires = "height")]
    width: Option<usize>,
    #[arg(long, requires = "width")]
    height: Option<usize>,
    /// TOML file overriding generation constants
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the maze as JSON instead of ASCII
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => MazeConfig::load(path)
            .with_context(|| format!("Failed to read maze config: {}", path.display()))?,
        None => MazeConfig::default(),
    };
    let generator = MazeGenerator::new(config);

    let maze = match (args.width, args.height) {
        (Some(width), Some(height)) => generator.generate(width, height, args.level, args.seed),
        _ => generator.generate_level(args.level, args.seed),
    }
    .context("Maze generation failed")?;

    log::info!(
        "generated level {} ({}x{}) seed={} fingerprint={:#018x}",
        maze.level,
        maze.grid.width(),
        maze.grid.height(),
        maze.seed,
        maze.fingerprint()
    );

    if args.json {
        let json = serde_json::to_string_pretty(&maze).context("Failed to serialize maze")?;
        println!("{json}");
    } else {
        print!("{}", render_with_entities(&maze));
        println!("Keys: {}  Zombies: {}", maze.key_positions.len(), maze.zombie_positions.len());
    }

    Ok(())
}

fn render_with_entities(maze: &GeneratedMaze) -> String {
    let width = maze.grid.width();
    let mut rows: Vec<Vec<char>> =
        maze.grid.render_ascii().lines().map(|line| line.chars().collect()).collect();

    let mut mark = |cell: Pos, glyph: char| {
        let slot = rows.get_mut(cell.y as usize).and_then(|row| row.get_mut(cell.x as usize));
        if let Some(slot) = slot {
            *slot = glyph;
        }
    };
    for cell in maze.zombie_cells() {
        mark(cell, 'z');
    }
    for cell in maze.key_cells() {
        mark(cell, 'k');
    }
    mark(maze.player_spawn_cell(), '@');

    let mut out = String::with_capacity((width + 1) * rows.len());
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

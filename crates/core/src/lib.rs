pub mod error;
pub mod level;
pub mod mazegen;
pub mod types;

pub use error::MazeError;
pub use level::{LevelRoster, load_level};
pub use mazegen::{GeneratedMaze, Grid, MazeConfig, MazeGenerator, generate};
pub use types::*;

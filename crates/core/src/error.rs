//! Failure modes surfaced by maze generation to level-load code.

use std::error::Error;
use std::fmt;

use crate::types::EntityCategory;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimensions { width: usize, height: usize },
    InvalidConfig(&'static str),
    SpawnRegionBlocked,
    PlacementExhausted { category: EntityCategory, requested: usize, placed: usize },
    DisconnectedAfterRepair { components: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "maze dimensions {width}x{height} are too small to carve")
            }
            Self::InvalidConfig(reason) => write!(f, "invalid maze config: {reason}"),
            Self::SpawnRegionBlocked => write!(f, "no floor cell inside the player spawn region"),
            Self::PlacementExhausted { category, requested, placed } => write!(
                f,
                "placement budget exhausted for {category:?}: placed {placed} of {requested}"
            ),
            Self::DisconnectedAfterRepair { components } => {
                write!(f, "connectivity repair left {components} floor components")
            }
        }
    }
}

impl Error for MazeError {}

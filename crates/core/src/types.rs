use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct KeyId;
    pub struct ZombieId;
}

/// Cell coordinate inside a maze grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn to_world(self, tile_size: u32) -> WorldPos {
        let tile = tile_size as i32;
        WorldPos { x: self.x * tile, y: self.y * tile }
    }
}

/// Position in world units (cell coordinate scaled by tile size).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: i32,
    pub y: i32,
}

impl WorldPos {
    pub fn distance_squared(self, other: WorldPos) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    pub fn distance(self, other: WorldPos) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    Key,
    Zombie,
    PlayerSpawn,
}

/// A world position tagged with the kind of entity that spawns there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementPoint {
    pub category: EntityCategory,
    pub pos: WorldPos,
}

//! Wall/floor grid and tile-space primitives shared by every generation stage.

use serde::Serialize;

use crate::types::{Pos, TileKind};

/// Row-major `height x width` tile grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    pub(crate) fn filled(width: usize, height: usize, tile: TileKind) -> Self {
        Self { width, height, tiles: vec![tile; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Out-of-bounds positions read as walls.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn is_floor(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Floor
    }

    pub(crate) fn set(&mut self, pos: Pos, tile: TileKind) {
        let index = self.index(pos);
        self.tiles[index] = tile;
    }

    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile == TileKind::Floor).count()
    }

    pub fn floor_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&pos| self.is_floor(pos))
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos { y: y as i32, x: x as i32 }))
    }

    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (index, tile) in self.tiles.iter().enumerate() {
            out.push(match tile {
                TileKind::Wall => '#',
                TileKind::Floor => '.',
            });
            if (index + 1) % self.width == 0 {
                out.push('\n');
            }
        }
        out
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

pub(super) fn neighbors(pos: Pos) -> [Pos; 4] {
    [
        Pos { y: pos.y - 1, x: pos.x },
        Pos { y: pos.y, x: pos.x + 1 },
        Pos { y: pos.y + 1, x: pos.x },
        Pos { y: pos.y, x: pos.x - 1 },
    ]
}

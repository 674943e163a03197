//! Terrain tiles and the grid that stores them.
//!
//! Targets and the agent's start are not terrain: a [`Maze`](crate::Maze)
//! keeps them beside the grid, and the cell underneath both is floor.

use gallery_core::{Bounds, Point};

/// Terrain of one maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Floor,
    /// Passable, but costs more to enter.
    Mud,
    /// Impassable and opaque.
    Wall,
}

impl Tile {
    /// Whether the agent may stand on this tile.
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Whether a shot can travel through this tile.
    #[inline]
    pub fn is_transparent(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Layout character for this tile.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Mud => 'M',
            Tile::Wall => 'X',
        }
    }
}

/// A rectangular grid of [`Tile`]s with its origin at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    bounds: Bounds,
}

impl TileGrid {
    /// Create a new grid filled with [`Tile::Floor`].
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Bounds::new(width, height);
        Self {
            tiles: vec![Tile::default(); bounds.len()],
            bounds,
        }
    }

    /// The rectangle covered by the grid.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.bounds.index(p).map(|i| self.tiles[i])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.bounds.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Fill the whole grid using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Tile) {
        for (p, tile) in self.bounds.iter().zip(self.tiles.iter_mut()) {
            *tile = f(p);
        }
    }

    /// Whether the agent may stand at `p`. Out of bounds is never passable.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_passable)
    }

    /// Count how many cells hold the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }
}

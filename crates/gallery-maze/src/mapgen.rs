//! Random maze generation.
//!
//! Produces walled rectangles whose interior cells are independently turned
//! into walls, mud or targets, with the agent placed on a random floor cell.
//! Generated mazes are not guaranteed to be solvable.

use gallery_core::{Bounds, Point, TargetSet};
use rand::{Rng, RngExt};

use crate::layout::Maze;
use crate::tile::{Tile, TileGrid};

/// Interior cell proportions, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    pub wall_pct: f64,
    pub mud_pct: f64,
    pub target_pct: f64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            wall_pct: 0.2,
            mud_pct: 0.1,
            target_pct: 0.1,
        }
    }
}

/// Random maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: GenConfig,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R, config: GenConfig) -> Self {
        Self { rng, config }
    }

    /// Generate a `width` x `height` maze, border included. Both sides are
    /// raised to at least 3 so there is an interior. The start is always on
    /// plain floor.
    pub fn generate(&mut self, width: i32, height: i32) -> Maze {
        let width = width.max(3);
        let height = height.max(3);
        let bounds = Bounds::new(width, height);
        let GenConfig {
            wall_pct,
            mud_pct,
            target_pct,
        } = self.config;

        let mut grid = TileGrid::new(width, height);
        grid.fill_fn(|p| if bounds.on_border(p) { Tile::Wall } else { Tile::Floor });
        let mut targets = Vec::new();
        let mut floor = Vec::new();

        for p in bounds.iter().filter(|&p| !bounds.on_border(p)) {
            let r: f64 = self.rng.random();
            if r < wall_pct {
                grid.set(p, Tile::Wall);
            } else if r < wall_pct + mud_pct {
                grid.set(p, Tile::Mud);
            } else if r < wall_pct + mud_pct + target_pct {
                targets.push(p);
            } else {
                floor.push(p);
            }
        }

        let start = if floor.is_empty() {
            // No plain floor inside: clear a corner.
            let corner = Point::new(1, 1);
            grid.set(corner, Tile::Floor);
            targets.retain(|&t| t != corner);
            corner
        } else {
            floor[self.rng.random_range(0..floor.len())]
        };

        let targets: TargetSet = targets.into_iter().collect();
        log::debug!(
            "generated {}x{} maze with {} target(s), start {}",
            width,
            height,
            targets.len(),
            start
        );
        Maze::new(grid, start, targets)
    }
}

//! Lines of sight.
//!
//! A shot travels in the four cardinal directions at once. Each ray starts on
//! the cell next to the shooter and stops at the first wall or at the edge of
//! the maze. Targets do not stop a ray: every target along it is hit.

use gallery_core::{Direction, Point, TargetSet};

use crate::tile::TileGrid;

/// The cells a ray from `from` passes through in direction `dir`.
#[derive(Debug, Clone)]
pub struct Ray<'a> {
    grid: &'a TileGrid,
    pos: Point,
    step: Point,
}

impl<'a> Ray<'a> {
    pub fn new(grid: &'a TileGrid, from: Point, dir: Direction) -> Self {
        Self {
            grid,
            pos: from,
            step: dir.delta(),
        }
    }
}

impl Iterator for Ray<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let next = self.pos + self.step;
        if !self.grid.at(next)?.is_transparent() {
            return None;
        }
        self.pos = next;
        Some(next)
    }
}

/// Every cell in line of sight from `from`, ray by ray in `U`, `D`, `L`, `R`
/// order. The shooter's own cell is not included.
pub fn sight_lines(grid: &TileGrid, from: Point) -> impl Iterator<Item = Point> + '_ {
    Direction::ALL
        .into_iter()
        .flat_map(move |dir| Ray::new(grid, from, dir))
}

/// The members of `targets` in line of sight from `from`.
pub fn visible_targets(grid: &TileGrid, from: Point, targets: &TargetSet) -> TargetSet {
    if targets.is_empty() {
        return TargetSet::new();
    }
    sight_lines(grid, from).filter(|&p| targets.contains(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Maze;

    const GALLERY: &str = "\
XXXXXXX
X.....X
X.X...X
X..@..X
X.....X
XXXXXXX";

    #[test]
    fn ray_stops_at_walls() {
        let maze = Maze::parse(GALLERY).unwrap();
        let up: Vec<_> = Ray::new(maze.grid(), maze.start(), Direction::Up).collect();
        assert_eq!(up, vec![Point::new(3, 2), Point::new(3, 1)]);
        let left: Vec<_> = Ray::new(maze.grid(), maze.start(), Direction::Left).collect();
        assert_eq!(left, vec![Point::new(2, 3), Point::new(1, 3)]);
        // Blocked right away by the wall at (2, 2).
        assert_eq!(Ray::new(maze.grid(), Point::new(2, 1), Direction::Down).count(), 0);
    }

    #[test]
    fn sight_lines_cover_all_rays() {
        let maze = Maze::parse(GALLERY).unwrap();
        let seen: Vec<_> = sight_lines(maze.grid(), maze.start()).collect();
        // 2 up, 1 down, 2 left, 2 right.
        assert_eq!(seen.len(), 7);
        assert!(!seen.contains(&maze.start()));
    }

    #[test]
    fn targets_do_not_block_each_other() {
        let maze = Maze::parse("XXXXXXX\nX@.T.TX\nXXXXXXX").unwrap();
        let seen = visible_targets(maze.grid(), maze.start(), maze.targets());
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn only_remaining_targets_are_reported() {
        let maze = Maze::parse("XXXXXXX\nXT.@.TX\nX..T..X\nXXXXXXX").unwrap();
        let remaining = TargetSet::from([Point::new(1, 1), Point::new(3, 2)]);
        let seen = visible_targets(maze.grid(), maze.start(), &remaining);
        assert_eq!(seen, remaining);
        assert!(visible_targets(maze.grid(), maze.start(), &TargetSet::new()).is_empty());
    }

    #[test]
    fn diagonal_targets_are_invisible() {
        let maze = Maze::parse("XXXX\nXT.X\nX.@X\nXXXX").unwrap();
        assert!(visible_targets(maze.grid(), maze.start(), maze.targets()).is_empty());
    }
}

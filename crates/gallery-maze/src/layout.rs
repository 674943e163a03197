//! Mazes and their text layout.
//!
//! A layout is a block of equally wide lines, one character per cell:
//!
//! | Char | Cell |
//! |---|---|
//! | `X` | wall |
//! | `.` | floor |
//! | `M` | mud |
//! | `T` | target standing on floor |
//! | `@` | agent start, on floor |
//!
//! Exactly one `@` is required. Leading and trailing whitespace around the
//! whole block is ignored, but not inside lines.

use std::fmt;
use std::str::FromStr;

use gallery_core::{Point, TargetSet};

use crate::tile::{Tile, TileGrid};

/// Terrain plus the agent's start and the targets to destroy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: TileGrid,
    start: Point,
    targets: TargetSet,
}

impl Maze {
    /// Assemble a maze from its parts.
    ///
    /// `start` and every target should sit on passable terrain.
    pub fn new(grid: TileGrid, start: Point, targets: TargetSet) -> Self {
        debug_assert!(grid.passable(start), "start {start} is not passable");
        Self {
            grid,
            start,
            targets,
        }
    }

    /// Parse a layout string. See the [module docs](self) for the format.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }
        let rows: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        Self::from_rows(&rows)
    }

    /// Build a maze from one string per row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        let width = match rows.first() {
            Some(first) => first.as_ref().chars().count(),
            None => return Err(LayoutError::Empty),
        };
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut grid = TileGrid::new(width as i32, rows.len() as i32);
        let mut start: Option<Point> = None;
        let mut targets = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentSize {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let tile = match ch {
                    'X' => Tile::Wall,
                    '.' => Tile::Floor,
                    'M' => Tile::Mud,
                    'T' => {
                        targets.push(p);
                        Tile::Floor
                    }
                    '@' => {
                        if let Some(first) = start {
                            return Err(LayoutError::MultipleStarts { first, second: p });
                        }
                        start = Some(p);
                        Tile::Floor
                    }
                    _ => return Err(LayoutError::InvalidRune { ch, pos: p }),
                };
                grid.set(p, tile);
            }
        }

        let start = start.ok_or(LayoutError::MissingStart)?;
        let targets: TargetSet = targets.into_iter().collect();
        log::debug!(
            "parsed {}x{} maze, start {}, {} target(s)",
            grid.width(),
            grid.height(),
            start,
            targets.len()
        );
        Ok(Self::new(grid, start, targets))
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Where the agent starts.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Every target in the maze.
    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    /// Size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.grid.size()
    }

    /// The layout text of this maze, one line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.grid.bounds().len() + self.grid.height() as usize);
        for (p, tile) in self.grid.iter() {
            if p.x == 0 && p.y > 0 {
                out.push('\n');
            }
            let ch = if p == self.start {
                '@'
            } else if self.targets.contains(p) {
                'T'
            } else {
                tile.glyph()
            };
            out.push(ch);
        }
        out
    }
}

impl FromStr for Maze {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Errors that can occur when parsing a maze layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No rows, or an empty first row.
    Empty,
    /// A row does not have the same width as the first one.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character with no meaning in a layout.
    InvalidRune { ch: char, pos: Point },
    /// No `@` in the layout.
    MissingStart,
    /// More than one `@` in the layout.
    MultipleStarts { first: Point, second: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: empty layout"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(f, "maze: row {row} has width {found}, expected {expected}"),
            Self::InvalidRune { ch, pos } => write!(
                f,
                "maze contains invalid rune \u{201c}{ch}\u{201d} at ({}, {})",
                pos.x, pos.y
            ),
            Self::MissingStart => write!(f, "maze: no agent start (@)"),
            Self::MultipleStarts { first, second } => {
                write!(f, "maze: agent start (@) at both {first} and {second}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

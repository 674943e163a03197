//! Grid geometry: [`Point`] and [`Bounds`].
//!
//! Mazes use screen coordinates: `x` is the column and grows right, `y` is
//! the row and grows down. Every maze has its top-left cell at (0, 0).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column and row gaps to `other`, both non-negative.
    #[inline]
    pub fn axis_distance(self, other: Point) -> (i32, i32) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }

    /// Whether `other` shares this point's row or column.
    #[inline]
    pub fn is_aligned(self, other: Point) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reading order: top row first, left to right within a row.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The cells of a `width` x `height` maze, from (0, 0) inclusive to
/// (width, height) exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// Negative sides are clamped to zero.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Size as a Point (width = x, height = y).
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Row-major offset of `p` in flat storage, or `None` outside.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// Whether `p` is on the outer ring of cells.
    #[inline]
    pub fn on_border(self, p: Point) -> bool {
        self.contains(p)
            && (p.x == 0 || p.y == 0 || p.x == self.width - 1 || p.y == self.height - 1)
    }

    /// Every cell in reading order.
    #[inline]
    pub fn iter(self) -> Cells {
        Cells {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Point;
    type IntoIter = Cells;
    #[inline]
    fn into_iter(self) -> Cells {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Iterator over the cells of a [`Bounds`], in reading order.
#[derive(Clone, Debug)]
pub struct Cells {
    bounds: Bounds,
    next: usize,
}

impl Iterator for Cells {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let w = self.bounds.width as usize;
        let p = Point::new((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.bounds.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells {}

//! Immutable target sets.
//!
//! Every search node carries two of these (targets hit, targets remaining).
//! A [`TargetSet`] never changes after construction: set operations build a
//! new set, and an operation that would not change anything hands back a
//! clone sharing the same storage. Storage is sorted, so equality and hashing
//! do not depend on the order in which targets were inserted.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::geom::Point;

/// An immutable, cheaply clonable set of target coordinates.
#[derive(Clone, Default)]
pub struct TargetSet {
    points: Rc<BTreeSet<Point>>,
}

impl TargetSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of targets in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Targets in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Set of targets in `self` or `other`.
    pub fn union(&self, other: &TargetSet) -> TargetSet {
        if other.points.iter().all(|p| self.points.contains(p)) {
            return self.clone();
        }
        if self.points.iter().all(|p| other.points.contains(p)) {
            return other.clone();
        }
        self.points.union(&other.points).copied().collect()
    }

    /// Set of targets in `self` but not in `other`.
    pub fn difference(&self, other: &TargetSet) -> TargetSet {
        if !self.points.iter().any(|p| other.points.contains(p)) {
            return self.clone();
        }
        self.points.difference(&other.points).copied().collect()
    }

    /// Whether both sets are views of the same storage.
    #[inline]
    pub fn shares_storage(&self, other: &TargetSet) -> bool {
        Rc::ptr_eq(&self.points, &other.points)
    }
}

impl FromIterator<Point> for TargetSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: Rc::new(iter.into_iter().collect()),
        }
    }
}

impl<const N: usize> From<[Point; N]> for TargetSet {
    fn from(points: [Point; N]) -> Self {
        points.into_iter().collect()
    }
}

impl PartialEq for TargetSet {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage(other) || self.points == other.points
    }
}

impl Eq for TargetSet {}

impl Hash for TargetSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Sorted iteration, so equal sets feed the hasher identically.
        self.points.len().hash(state);
        for p in self.points.iter() {
            p.hash(state);
        }
    }
}

impl fmt::Debug for TargetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.points.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TargetSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.points.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TargetSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let points = Vec::<Point>::deserialize(deserializer)?;
        Ok(points.into_iter().collect())
    }
}

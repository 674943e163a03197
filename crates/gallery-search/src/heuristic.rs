use gallery_core::{Point, TargetSet};

use crate::node::SearchTreeNode;

/// Closest-axis distance: the smaller of the horizontal and vertical gaps.
#[inline]
pub fn closest_axis(a: Point, b: Point) -> i32 {
    let (dx, dy) = a.axis_distance(b);
    dx.min(dy)
}

/// Estimate used by the reference ordering.
///
/// Zero until something has been hit; afterwards the closest-axis distance
/// from the node's location to the nearest *already destroyed* target. This
/// is not admissible in general.
pub fn hit_axis_estimate(node: &SearchTreeNode) -> i32 {
    nearest_axis(node.location, &node.targets_hit)
}

fn nearest_axis(from: Point, targets: &TargetSet) -> i32 {
    targets.iter().map(|t| closest_axis(t, from)).min().unwrap_or(0)
}

use gallery_core::{Action, Point, TargetSet};

/// Where an action leads and what it costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub next_loc: Point,
    pub cost: i32,
}

/// The puzzle as seen by the search: start state, legal actions, visibility.
pub trait TargetProblem {
    /// Where the agent starts.
    fn initial_loc(&self) -> Point;

    /// Every target that must be destroyed.
    fn initial_targets(&self) -> TargetSet;

    /// Append the legal actions from `loc` into `buf`, given the targets still
    /// standing. The caller clears `buf` before calling. Costs must be >= 0.
    fn transitions(&self, loc: Point, remaining: &TargetSet, buf: &mut Vec<(Action, Transition)>);

    /// The subset of `remaining` in line of sight from `loc`.
    fn visible_targets(&self, loc: Point, remaining: &TargetSet) -> TargetSet;
}

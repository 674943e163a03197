use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use gallery_core::Action;

use crate::node::{NodeId, SearchTree, SearchTreeNode, StateKey};
use crate::traits::Transition;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How frontier priorities are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// `cost + hit-axis estimate + remaining target count`.
    #[default]
    Reference,
    /// `cost` only. Slower, but always returns a cheapest solution.
    UniformCost,
}

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub strategy: Strategy,
}

/// Counters describing the last search run by a [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes created, root included.
    pub generated: usize,
    /// Nodes popped and expanded.
    pub expanded: usize,
    /// Popped entries discarded because an equal node was already expanded.
    pub stale: usize,
    /// Largest frontier size observed.
    pub frontier_peak: usize,
}

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// Reference into the node arena, ordered for use in `BinaryHeap`.
///
/// Smallest priority first, then smallest cost, then oldest node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: i32,
    pub(crate) cost: i32,
    pub(crate) id: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// A* solver for [`TargetProblem`](crate::TargetProblem)s.
///
/// `Solver` owns the node arena, frontier, visited set and transition
/// buffer, so repeated solves reuse their allocations.
#[derive(Debug, Default)]
pub struct Solver {
    pub(crate) config: SearchConfig,
    pub(crate) tree: SearchTree,
    pub(crate) frontier: BinaryHeap<FrontierEntry>,
    pub(crate) visited: HashSet<StateKey>,
    pub(crate) tbuf: Vec<(Action, Transition)>,
    pub(crate) stats: SearchStats,
    pub(crate) goal: Option<NodeId>,
}

impl Solver {
    /// Create a solver with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            tbuf: Vec::with_capacity(5),
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the configuration used by subsequent searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Counters of the last search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Goal node reached by the last search, if it succeeded.
    #[inline]
    pub fn goal(&self) -> Option<NodeId> {
        self.goal
    }

    /// Nodes created by the last search, for inspection.
    #[inline]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Forget everything from the previous search, keeping allocations.
    pub(crate) fn reset(&mut self) {
        self.tree.clear();
        self.frontier.clear();
        self.visited.clear();
        self.tbuf.clear();
        self.stats = SearchStats::default();
        self.goal = None;
    }

    /// Add a node to the arena and the frontier.
    pub(crate) fn enqueue(&mut self, node: SearchTreeNode, priority: i32) -> NodeId {
        let cost = node.cost;
        let id = self.tree.push(node);
        self.frontier.push(FrontierEntry { priority, cost, id });
        self.stats.generated += 1;
        self.stats.frontier_peak = self.stats.frontier_peak.max(self.frontier.len());
        id
    }
}

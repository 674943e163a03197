use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use gallery_core::{Action, Point, TargetSet};

/// Index of a node inside a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in creation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One state in the search tree.
///
/// Identity (`Eq` / `Hash`) covers `location`, `action` and
/// `remaining_targets` only. `cost` and `targets_hit` are bookkeeping: a
/// costlier node equal to one already expanded is redundant.
#[derive(Debug, Clone)]
pub struct SearchTreeNode {
    pub location: Point,
    /// Action that produced this node. `None` for the root.
    pub action: Option<Action>,
    /// Node this one was generated from. `None` for the root.
    pub parent: Option<NodeId>,
    pub cost: i32,
    pub targets_hit: TargetSet,
    pub remaining_targets: TargetSet,
}

impl SearchTreeNode {
    pub fn new(
        location: Point,
        action: Option<Action>,
        parent: Option<NodeId>,
        cost: i32,
        targets_hit: TargetSet,
        remaining_targets: TargetSet,
    ) -> Self {
        debug_assert!(cost >= 0, "negative path cost {cost}");
        Self {
            location,
            action,
            parent,
            cost,
            targets_hit,
            remaining_targets,
        }
    }

    /// Root node of a search: no action, no parent, nothing hit yet.
    pub fn root(location: Point, targets: TargetSet) -> Self {
        Self::new(location, None, None, 0, TargetSet::new(), targets)
    }

    /// Whether every target has been destroyed.
    #[inline]
    pub fn is_goal(&self) -> bool {
        self.remaining_targets.is_empty()
    }

    /// Compare by accumulated cost alone.
    #[inline]
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }

    /// Owned identity of this node, as stored in the visited set.
    pub fn key(&self) -> StateKey {
        StateKey {
            location: self.location,
            action: self.action,
            remaining_targets: self.remaining_targets.clone(),
        }
    }
}

impl PartialEq for SearchTreeNode {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
            && self.action == other.action
            && self.remaining_targets == other.remaining_targets
    }
}

impl Eq for SearchTreeNode {}

impl Hash for SearchTreeNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location.hash(state);
        self.action.hash(state);
        self.remaining_targets.hash(state);
    }
}

/// The identifying part of a [`SearchTreeNode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub location: Point,
    pub action: Option<Action>,
    pub remaining_targets: TargetSet,
}

// ---------------------------------------------------------------------------
// SearchTree
// ---------------------------------------------------------------------------

/// Arena of every node created during one search.
///
/// Parents are always pushed before their children, so parent links point
/// strictly backwards and the structure cannot contain a cycle.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchTreeNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its id.
    pub fn push(&mut self, node: SearchTreeNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        debug_assert!(node.parent.is_none_or(|p| p < id), "parent must precede child");
        self.nodes.push(node);
        id
    }

    /// Panics if `id` does not come from this tree.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchTreeNode {
        &self.nodes[id.0]
    }

    /// The first node pushed, if any.
    pub fn root(&self) -> Option<&SearchTreeNode> {
        self.nodes.first()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node, keeping the allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Node ids from the root down to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(ci) = cur {
            path.push(ci);
            cur = self.get(ci).parent;
        }
        path.reverse();
        path
    }

    /// Actions leading from the root to `id`, in the order they are taken.
    pub fn actions_to(&self, id: NodeId) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut cur = self.get(id);
        while let Some(parent) = cur.parent {
            if let Some(action) = cur.action {
                actions.push(action);
            }
            cur = self.get(parent);
        }
        actions.reverse();
        actions
    }
}

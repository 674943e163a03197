use gallery_core::Action;

use crate::heuristic::hit_axis_estimate;
use crate::node::{NodeId, SearchTreeNode};
use crate::solver::{SearchConfig, Solver, Strategy};
use crate::traits::{TargetProblem, Transition};

impl Solver {
    /// Find a cheapest action sequence that destroys every target.
    ///
    /// Returns `None` if the problem has no targets to begin with, or if
    /// every reachable state was expanded without clearing the targets.
    pub fn solve<P: TargetProblem + ?Sized>(&mut self, problem: &P) -> Option<Vec<Action>> {
        self.reset();

        let targets = problem.initial_targets();
        if targets.is_empty() {
            log::debug!("no targets to destroy, reporting no solution");
            return None;
        }

        let start = problem.initial_loc();
        log::debug!(
            "searching from {} for {} target(s) ({:?})",
            start,
            targets.len(),
            self.config.strategy
        );
        self.enqueue(SearchTreeNode::root(start, targets), 0);

        let mut tbuf = std::mem::take(&mut self.tbuf);

        let found = 'search: loop {
            let Some(current) = self.frontier.pop() else {
                break 'search None;
            };

            let node = self.tree.get(current.id).clone();
            let key = node.key();

            // Skip stale entries.
            if self.visited.contains(&key) {
                self.stats.stale += 1;
                continue;
            }

            if node.is_goal() {
                break 'search Some(current.id);
            }

            tbuf.clear();
            problem.transitions(node.location, &node.remaining_targets, &mut tbuf);
            self.stats.expanded += 1;
            log::trace!(
                "expand {} via {:?}: cost {}, {} left, {} action(s)",
                node.location,
                node.action,
                node.cost,
                node.remaining_targets.len(),
                tbuf.len()
            );

            for &(action, transition) in tbuf.iter() {
                let child = make_child(problem, &node, current.id, action, transition);
                let priority = priority(self.config, &child);
                self.enqueue(child, priority);
            }

            self.visited.insert(key);
        };

        self.tbuf = tbuf;
        self.goal = found;

        match found {
            Some(goal) => {
                let actions = self.tree.actions_to(goal);
                log::debug!(
                    "solved with {} action(s) at cost {}: {:?}",
                    actions.len(),
                    self.tree.get(goal).cost,
                    self.stats
                );
                Some(actions)
            }
            None => {
                log::debug!("frontier exhausted without a solution: {:?}", self.stats);
                None
            }
        }
    }
}

/// Solve `problem` with the default configuration.
pub fn pathfind<P: TargetProblem + ?Sized>(problem: &P) -> Option<Vec<Action>> {
    Solver::new(SearchConfig::default()).solve(problem)
}

/// Build the node reached from `parent` by taking `action`.
///
/// Only a shot changes the target sets; moves share the parent's sets.
fn make_child<P: TargetProblem + ?Sized>(
    problem: &P,
    parent: &SearchTreeNode,
    parent_id: NodeId,
    action: Action,
    transition: Transition,
) -> SearchTreeNode {
    let cost = parent.cost + transition.cost;
    let (targets_hit, remaining_targets) = if action.is_shoot() {
        let visible = problem.visible_targets(transition.next_loc, &parent.remaining_targets);
        let hit = parent.targets_hit.union(&visible);
        let remaining = parent.remaining_targets.difference(&hit);
        (hit, remaining)
    } else {
        (parent.targets_hit.clone(), parent.remaining_targets.clone())
    };
    SearchTreeNode::new(
        transition.next_loc,
        Some(action),
        Some(parent_id),
        cost,
        targets_hit,
        remaining_targets,
    )
}

fn priority(config: SearchConfig, node: &SearchTreeNode) -> i32 {
    match config.strategy {
        Strategy::Reference => {
            node.cost + hit_axis_estimate(node) + node.remaining_targets.len() as i32
        }
        Strategy::UniformCost => node.cost,
    }
}

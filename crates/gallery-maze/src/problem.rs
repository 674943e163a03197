//! The maze as a search problem.

use std::fmt;

use gallery_core::{Action, Direction, Point, TargetSet};
use gallery_search::{TargetProblem, Transition};

use crate::layout::Maze;
use crate::sight;
use crate::tile::Tile;

/// Action costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    /// Entering a floor cell.
    pub step: i32,
    /// Entering a mud cell.
    pub mud: i32,
    /// Firing; the agent stays in place.
    pub shoot: i32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            step: 1,
            mud: 3,
            shoot: 2,
        }
    }
}

impl CostModel {
    /// Cost of stepping onto a tile, or `None` for a wall.
    #[inline]
    pub fn enter(&self, tile: Tile) -> Option<i32> {
        match tile {
            Tile::Floor => Some(self.step),
            Tile::Mud => Some(self.mud),
            Tile::Wall => None,
        }
    }
}

/// Outcome of replaying an action sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionReport {
    /// Whether every target was destroyed by the end.
    pub is_solution: bool,
    /// Total cost of the sequence.
    pub cost: i32,
}

/// A [`Maze`] with a [`CostModel`], implementing [`TargetProblem`].
///
/// Targets still standing block movement; destroyed ones are floor.
#[derive(Debug, Clone)]
pub struct MazeProblem {
    maze: Maze,
    costs: CostModel,
}

impl MazeProblem {
    pub fn new(maze: Maze) -> Self {
        Self::with_costs(maze, CostModel::default())
    }

    pub fn with_costs(maze: Maze, costs: CostModel) -> Self {
        Self { maze, costs }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn costs(&self) -> CostModel {
        self.costs
    }

    /// Where `dir` leads from `loc` and what it costs, if the move is legal.
    fn step(&self, loc: Point, dir: Direction, remaining: &TargetSet) -> Option<Transition> {
        let next = loc + dir.delta();
        if remaining.contains(next) {
            return None;
        }
        let cost = self.costs.enter(self.maze.grid().at(next)?)?;
        Some(Transition {
            next_loc: next,
            cost,
        })
    }

    /// Replay `actions` from the start and report whether they solve the maze
    /// and what they cost.
    pub fn test_solution(&self, actions: &[Action]) -> Result<SolutionReport, ReplayError> {
        let mut loc = self.maze.start();
        let mut remaining = self.maze.targets().clone();
        let mut cost = 0;

        for (step, &action) in actions.iter().enumerate() {
            match action {
                Action::Move(dir) => {
                    let t = self
                        .step(loc, dir, &remaining)
                        .ok_or(ReplayError::IllegalMove { step, from: loc, dir })?;
                    loc = t.next_loc;
                    cost += t.cost;
                }
                Action::Shoot => {
                    let hit = sight::visible_targets(self.maze.grid(), loc, &remaining);
                    remaining = remaining.difference(&hit);
                    cost += self.costs.shoot;
                }
            }
        }

        Ok(SolutionReport {
            is_solution: remaining.is_empty(),
            cost,
        })
    }
}

impl From<Maze> for MazeProblem {
    fn from(maze: Maze) -> Self {
        Self::new(maze)
    }
}

impl TargetProblem for MazeProblem {
    fn initial_loc(&self) -> Point {
        self.maze.start()
    }

    fn initial_targets(&self) -> TargetSet {
        self.maze.targets().clone()
    }

    fn transitions(&self, loc: Point, remaining: &TargetSet, buf: &mut Vec<(Action, Transition)>) {
        for dir in Direction::ALL {
            if let Some(t) = self.step(loc, dir, remaining) {
                buf.push((Action::Move(dir), t));
            }
        }
        buf.push((
            Action::Shoot,
            Transition {
                next_loc: loc,
                cost: self.costs.shoot,
            },
        ));
    }

    fn visible_targets(&self, loc: Point, remaining: &TargetSet) -> TargetSet {
        sight::visible_targets(self.maze.grid(), loc, remaining)
    }
}

/// Errors that can occur when replaying an action sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The move at index `step` runs into a wall, a standing target, or the
    /// edge of the maze.
    IllegalMove {
        step: usize,
        from: Point,
        dir: Direction,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalMove { step, from, dir } => {
                write!(f, "replay: illegal move {} at step {step} from {from}", Action::Move(*dir))
            }
        }
    }
}

impl std::error::Error for ReplayError {}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::parse_actions;

    fn problem(layout: &str) -> MazeProblem {
        MazeProblem::new(Maze::parse(layout).unwrap())
    }

    const MUDDY: &str = "\
XXXXXX
XTM.XX
XXMX.X
XX@X.X
X.M.TX
XXXXXX";

    #[test]
    fn transitions_list_legal_moves_then_shoot() {
        let p = problem(MUDDY);
        let mut buf = Vec::new();
        p.transitions(p.initial_loc(), &p.initial_targets(), &mut buf);
        assert_eq!(
            buf,
            vec![
                (
                    Action::Move(Direction::Up),
                    Transition {
                        next_loc: Point::new(2, 2),
                        cost: 3
                    }
                ),
                (
                    Action::Move(Direction::Down),
                    Transition {
                        next_loc: Point::new(2, 4),
                        cost: 3
                    }
                ),
                (
                    Action::Shoot,
                    Transition {
                        next_loc: Point::new(2, 3),
                        cost: 2
                    }
                ),
            ]
        );
    }

    #[test]
    fn standing_targets_block_movement() {
        let p = problem("XXXXX\nX@T.X\nXXXXX");
        let mut buf = Vec::new();
        p.transitions(p.initial_loc(), &p.initial_targets(), &mut buf);
        assert_eq!(buf.len(), 1);
        assert!(buf[0].0.is_shoot());

        buf.clear();
        p.transitions(p.initial_loc(), &TargetSet::new(), &mut buf);
        assert_eq!(buf[0].0, Action::Move(Direction::Right));
    }

    #[test]
    fn replay_known_solution() {
        let p = problem(MUDDY);
        let actions = parse_actions("DSUUUS").unwrap();
        assert_eq!(
            p.test_solution(&actions),
            Ok(SolutionReport {
                is_solution: true,
                cost: 14
            })
        );
    }

    #[test]
    fn replay_incomplete_solution() {
        let p = problem(MUDDY);
        let report = p.test_solution(&parse_actions("DS").unwrap()).unwrap();
        assert!(!report.is_solution);
        assert_eq!(report.cost, 5);
        assert_eq!(
            p.test_solution(&[]),
            Ok(SolutionReport {
                is_solution: false,
                cost: 0
            })
        );
    }

    #[test]
    fn replay_rejects_illegal_moves() {
        let p = problem(MUDDY);
        assert_eq!(
            p.test_solution(&parse_actions("R").unwrap()),
            Err(ReplayError::IllegalMove {
                step: 0,
                from: Point::new(2, 3),
                dir: Direction::Right
            })
        );
        let err = p.test_solution(&parse_actions("DLL").unwrap()).unwrap_err();
        assert_eq!(
            err,
            ReplayError::IllegalMove {
                step: 2,
                from: Point::new(1, 4),
                dir: Direction::Left
            }
        );
        assert!(err.to_string().contains("step 2"));
    }

    #[test]
    fn destroyed_targets_become_floor() {
        let p = problem(MUDDY);
        // (4, 4) still stands on the second move.
        assert!(p.test_solution(&parse_actions("DRR").unwrap()).is_err());
        let report = p.test_solution(&parse_actions("DSRR").unwrap()).unwrap();
        assert!(!report.is_solution);
        assert_eq!(report.cost, 3 + 2 + 1 + 1);
    }

    #[test]
    fn walls_cannot_be_entered() {
        let costs = CostModel::default();
        assert_eq!(costs.enter(Tile::Floor), Some(1));
        assert_eq!(costs.enter(Tile::Mud), Some(3));
        assert_eq!(costs.enter(Tile::Wall), None);
    }

    #[test]
    fn custom_costs_apply() {
        let costs = CostModel {
            step: 2,
            mud: 5,
            shoot: 1,
        };
        let p = MazeProblem::with_costs(Maze::parse(MUDDY).unwrap(), costs);
        let report = p.test_solution(&parse_actions("DSUUUS").unwrap()).unwrap();
        assert!(report.is_solution);
        assert_eq!(report.cost, 5 + 1 + 2 + 5 + 5 + 1);
        assert_eq!(p.costs(), costs);
    }
}

//! Shared code for the gallery command-line demos.
//!
//! Argument parsing and per-maze solving live here so the binaries stay thin.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use gallery_core::{Action, format_actions};
use gallery_maze::{CostModel, MazeProblem, ReplayError, SolutionReport};
use gallery_search::{SearchConfig, SearchStats, Solver, Strategy};

/// Size of generated mazes when no file is given.
pub const DEFAULT_SIZE: MazeSize = MazeSize {
    width: 12,
    height: 8,
};

/// Width and height of a generated maze, written `WxH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeSize {
    pub width: i32,
    pub height: i32,
}

impl FromStr for MazeSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
        let dim = |v: &str| -> Result<i32, String> {
            match v.trim().parse::<i32>() {
                Ok(n) if n >= 3 => Ok(n),
                Ok(n) => Err(format!("maze side {n} is below the minimum of 3")),
                Err(e) => Err(format!("bad maze side {v:?}: {e}")),
            }
        };
        Ok(Self {
            width: dim(w)?,
            height: dim(h)?,
        })
    }
}

impl fmt::Display for MazeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Parser, Debug)]
#[command(name = "gallery-solve", about = "Solve shooting-gallery mazes")]
pub struct Args {
    /// Maze layout files to solve
    pub files: Vec<PathBuf>,

    /// Generate random mazes of this size (e.g. 12x8)
    #[arg(long, value_name = "WxH")]
    pub random: Option<MazeSize>,

    /// Number of random mazes to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for the maze generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Order the frontier by cost alone
    #[arg(long, default_value_t = false)]
    pub uniform_cost: bool,

    /// Cost of stepping onto floor
    #[arg(long, default_value_t = CostModel::default().step, value_parser = clap::value_parser!(i32).range(0..))]
    pub step_cost: i32,

    /// Cost of stepping into mud
    #[arg(long, default_value_t = CostModel::default().mud, value_parser = clap::value_parser!(i32).range(0..))]
    pub mud_cost: i32,

    /// Cost of a shot
    #[arg(long, default_value_t = CostModel::default().shoot, value_parser = clap::value_parser!(i32).range(0..))]
    pub shoot_cost: i32,
}

impl Args {
    pub fn costs(&self) -> CostModel {
        CostModel {
            step: self.step_cost,
            mud: self.mud_cost,
            shoot: self.shoot_cost,
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        let strategy = if self.uniform_cost {
            Strategy::UniformCost
        } else {
            Strategy::Reference
        };
        SearchConfig { strategy }
    }

    /// Size of random mazes to generate, if any. Without files or
    /// `--random`, one [`DEFAULT_SIZE`] maze is generated.
    pub fn random_size(&self) -> Option<MazeSize> {
        match self.random {
            Some(size) => Some(size),
            None if self.files.is_empty() => Some(DEFAULT_SIZE),
            None => None,
        }
    }
}

/// Result of solving one maze.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The actions found, with their replay, or `None` if unsolvable.
    pub solution: Option<(Vec<Action>, SolutionReport)>,
    pub stats: SearchStats,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.solution {
            Some((actions, report)) => {
                write!(f, "{} (cost {})", format_actions(actions), report.cost)
            }
            None => write!(f, "no solution"),
        }
    }
}

/// Solve `problem` and replay the answer.
pub fn solve_maze(solver: &mut Solver, problem: &MazeProblem) -> Result<Outcome, ReplayError> {
    let solution = match solver.solve(problem) {
        Some(actions) => {
            let report = problem.test_solution(&actions)?;
            if !report.is_solution {
                log::warn!("replay of {} leaves targets standing", format_actions(&actions));
            }
            Some((actions, report))
        }
        None => None,
    };
    Ok(Outcome {
        solution,
        stats: solver.stats(),
    })
}

//! Shooting-gallery mazes: text layouts, line of sight, random generation,
//! and the [`TargetProblem`](gallery_search::TargetProblem) implementation
//! the solver runs on.

pub mod layout;
pub mod mapgen;
pub mod problem;
pub mod sight;
pub mod tile;

#[cfg(test)]
mod scenarios;

pub use layout::{LayoutError, Maze};
pub use mapgen::{GenConfig, MazeGen};
pub use problem::{CostModel, MazeProblem, ReplayError, SolutionReport};
pub use tile::{Tile, TileGrid};

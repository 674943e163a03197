//! A* search for the shooting-gallery puzzle.
//!
//! An agent walks a maze and fires along its lines of sight; a puzzle is
//! solved once every target has been hit. This crate finds the cheapest
//! sequence of [`Action`](gallery_core::Action)s that does so, or reports
//! that none exists.
//!
//! The maze itself stays behind the [`TargetProblem`] trait: the search only
//! asks for the start state, the legal actions from a cell, and which targets
//! a cell can see.
//!
//! - [`pathfind`] runs a one-off search with the default configuration.
//! - [`Solver`] owns and reuses every internal buffer across searches and
//!   exposes [`SearchStats`] and the final [`SearchTree`].
//!
//! # Frontier ordering
//!
//! With [`Strategy::Reference`] nodes are ordered by
//! `cost + estimate + remaining targets`, where the estimate is the
//! closest-axis distance to the nearest target already hit
//! ([`hit_axis_estimate`]). [`Strategy::UniformCost`] orders by cost alone.

mod astar;
mod heuristic;
mod node;
mod solver;
mod traits;

pub use astar::pathfind;
pub use heuristic::{closest_axis, hit_axis_estimate};
pub use node::{NodeId, SearchTree, SearchTreeNode, StateKey};
pub use solver::{SearchConfig, SearchStats, Solver, Strategy};
pub use traits::{TargetProblem, Transition};

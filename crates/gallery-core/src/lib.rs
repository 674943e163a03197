//! **gallery-core**: core types for the shooting-gallery puzzle solver.
//!
//! This crate provides the types shared across the *gallery* workspace:
//! grid geometry, agent actions, and immutable target sets.

pub mod action;
pub mod geom;
pub mod targets;

pub use action::{Action, ActionError, Direction, format_actions, parse_actions};
pub use geom::{Bounds, Cells, Point};
pub use targets::TargetSet;

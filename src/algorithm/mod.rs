//! Search engine for the tile-covering puzzle

/// Deterministic enumeration of aligned placement anchors
pub mod cursor;
/// Overshoot pruning for hypothetical placements
pub mod feasibility;
/// Backtracking search over tile placements
pub mod solver;

pub use solver::{Placement, SearchStats, Solver};

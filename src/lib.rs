//! Backtracking solver for landscape tile-covering puzzles
//!
//! A landscape is a rectangular grid of small integer codes. Given a finite
//! inventory of three fixed 4x4 tile shapes and an exact target count for each
//! code, the solver searches for an ordered sequence of tile placements whose
//! covering leaves the landscape with precisely the target histogram.

#![forbid(unsafe_code)]

/// Search engine: anchor sequencing, placement feasibility, and backtracking
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Landscape grid, tile shapes, and inventory management
pub mod spatial;

pub use io::error::{Result, SolverError};

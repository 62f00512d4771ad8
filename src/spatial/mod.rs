//! Spatial data structures for the puzzle state
//!
//! This module contains the landscape-related functionality including:
//! - Landscape grid storage and histogram queries
//! - Tile shape catalog and stamping
//! - Tile inventory bookkeeping

/// Landscape grid, anchors, and target counts
pub mod grid;
/// Tile shape catalog, inventory, and stamping
pub mod tiles;

pub use grid::{Anchor, Landscape, TargetCounts};
pub use tiles::{TileInventory, TileShape};

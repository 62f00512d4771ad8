//! Backtracking search over tile placements
//!
//! The engine owns the single mutable landscape/inventory pair for the
//! lifetime of the search and walks anchors in the fixed order produced by
//! the cursor. Around every trial placement it snapshots the full landscape
//! and restores it on failure, so sibling branches always start from
//! identical state. Depth is bounded by one placement per 4x4 block, which
//! keeps the recursion shallow even for generous grids.

use crate::algorithm::cursor::next_anchor;
use crate::algorithm::feasibility::can_place;
use crate::spatial::{Anchor, Landscape, TargetCounts, TileInventory, TileShape};
use std::fmt;

/// One committed tile placement in a solution path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Anchor row of the placement window
    pub row: usize,
    /// Anchor column of the placement window
    pub col: usize,
    /// Shape placed at the anchor
    pub shape: TileShape,
}

impl Placement {
    /// Record a placement of `shape` at `anchor`
    pub const fn new(anchor: Anchor, shape: TileShape) -> Self {
        Self {
            row: anchor.row,
            col: anchor.col,
            shape,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:2}, {:2}) : {}", self.row, self.col, self.shape)
    }
}

/// Counters describing the shape of a finished search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search-tree nodes entered
    pub nodes: usize,
    /// Tentative placements committed for trial
    pub placements: usize,
    /// Trial placements undone after their subtree failed
    pub backtracks: usize,
}

/// Depth-first backtracking solver for one puzzle instance
///
/// Consumes the initial landscape, inventory, and targets, and reports
/// either the ordered placement path that reaches the target histogram or
/// the absence of any such path. An unsolvable puzzle is a normal outcome,
/// not an error.
#[derive(Debug)]
pub struct Solver {
    landscape: Landscape,
    inventory: TileInventory,
    targets: TargetCounts,
    stats: SearchStats,
}

impl Solver {
    /// Create a solver over an initial puzzle state
    pub const fn new(
        landscape: Landscape,
        inventory: TileInventory,
        targets: TargetCounts,
    ) -> Self {
        Self {
            landscape,
            inventory,
            targets,
            stats: SearchStats {
                nodes: 0,
                placements: 0,
                backtracks: 0,
            },
        }
    }

    /// Run the search to completion
    ///
    /// Returns the ordered placement path when the targets are reachable,
    /// or `None` after exhausting the search tree. A landscape that already
    /// matches its targets solves immediately with an empty path.
    pub fn solve(&mut self) -> Option<Vec<Placement>> {
        let mut path = Vec::new();
        self.backtrack(Anchor::ORIGIN, &mut path).then_some(path)
    }

    /// Counters gathered during the last `solve` run
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Landscape in its current state; after a successful solve this is the
    /// committed solved grid
    pub const fn landscape(&self) -> &Landscape {
        &self.landscape
    }

    /// Remaining inventory; after an unsolved search every trial has been
    /// undone and this equals the initial counts
    pub const fn inventory(&self) -> TileInventory {
        self.inventory
    }

    fn backtrack(&mut self, anchor: Anchor, path: &mut Vec<Placement>) -> bool {
        self.stats.nodes += 1;

        // Fires before any tile is tried, so a landscape that already
        // satisfies the targets mid-scan stops without covering more cells
        if self.landscape.matches_targets(&self.targets) {
            return true;
        }

        for shape in TileShape::TRIAL_ORDER {
            if self.inventory.remaining(shape) == 0 {
                continue;
            }
            if !can_place(shape, &self.landscape, anchor, &self.targets) {
                continue;
            }

            let snapshot = self.landscape.clone();
            self.inventory.take(shape);
            self.landscape = shape.stamped(&self.landscape, anchor);
            self.stats.placements += 1;
            path.push(Placement::new(anchor, shape));

            match next_anchor(self.landscape.dims(), anchor) {
                None => {
                    // Grid fully scanned: only an exact match can save this
                    // branch, there are no further anchors to place at
                    if self.landscape.matches_targets(&self.targets) {
                        return true;
                    }
                }
                Some(next) => {
                    if self.backtrack(next, path) {
                        return true;
                    }
                }
            }

            path.pop();
            self.landscape = snapshot;
            self.inventory.put_back(shape);
            self.stats.backtracks += 1;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::{Placement, Solver};
    use crate::spatial::{Anchor, Landscape, TargetCounts, TileInventory, TileShape};

    #[test]
    fn test_placement_display_matches_path_format() {
        let placement = Placement::new(Anchor::new(4, 0), TileShape::ElShape);
        assert_eq!(placement.to_string(), "( 4,  0) : EL_SHAPE");
    }

    #[test]
    fn test_failed_search_restores_initial_state_exactly() {
        // EL_SHAPE passes the feasibility check (leaves 9 >= 8) but fails
        // the exact match at scan exhaustion, so its trial is undone; the
        // other shapes overshoot and are never placed. The landscape must
        // come back bit-for-bit.
        let landscape = Landscape::filled(4, 4, 1);
        let inventory = TileInventory::new(1, 1, 1);
        let mut targets = TargetCounts::default();
        assert!(targets.set(1, 8));

        let mut solver = Solver::new(landscape.clone(), inventory, targets);
        assert!(solver.solve().is_none());
        assert_eq!(solver.landscape(), &landscape, "landscape was not restored");
        assert_eq!(solver.inventory(), inventory, "inventory was not restored");
        assert!(solver.stats().placements >= 1, "no placement was ever tried");
        assert_eq!(solver.stats().placements, solver.stats().backtracks);
    }

    #[test]
    fn test_stats_count_nodes_and_backtracks() {
        let landscape = Landscape::filled(4, 4, 1);
        let inventory = TileInventory::new(1, 1, 1);
        let mut targets = TargetCounts::default();
        // Unreachable: no shape leaves exactly 14 of 16 cells visible
        assert!(targets.set(1, 14));

        let mut solver = Solver::new(landscape, inventory, targets);
        assert!(solver.solve().is_none());

        let stats = solver.stats();
        assert!(stats.nodes >= 1);
        assert_eq!(
            stats.placements, stats.backtracks,
            "every failed trial must be backtracked"
        );
    }
}

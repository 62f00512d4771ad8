//! Tile shape catalog, inventory bookkeeping, and pattern stamping
//!
//! The three shapes are fixed 4x4 covering patterns carried as static data
//! on a closed enum, so an unknown shape is unrepresentable past the input
//! boundary. Stamping is copy-on-write: the engine evaluates hypothetical
//! placements without touching the committed landscape.

use crate::spatial::grid::{Anchor, COVERED, Landscape, TILE_SPAN};
use std::fmt;
use std::str::FromStr;

/// One row of a covering pattern; `true` marks a cell overwritten with `-1`
pub type PatternRow = [bool; TILE_SPAN];

const ROW_FULL: PatternRow = [true, true, true, true];
const ROW_ENDS: PatternRow = [true, false, false, true];
const ROW_START: PatternRow = [true, false, false, false];

/// One of the three fixed 4x4 tile covering patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileShape {
    /// Full top and bottom rows, both ends of the middle rows; the interior
    /// 2x2 stays untouched
    OuterBoundary,
    /// Full top row, first column of the remaining rows
    ElShape,
    /// All sixteen cells of the window
    FullBlock,
}

impl TileShape {
    /// Shapes in the fixed order the engine tries them at each anchor
    pub const TRIAL_ORDER: [Self; 3] = [Self::OuterBoundary, Self::ElShape, Self::FullBlock];

    /// The shape's 4x4 covering pattern, row-major within the window
    pub const fn pattern(self) -> [PatternRow; TILE_SPAN] {
        match self {
            Self::OuterBoundary => [ROW_FULL, ROW_ENDS, ROW_ENDS, ROW_FULL],
            Self::ElShape => [ROW_FULL, ROW_START, ROW_START, ROW_START],
            Self::FullBlock => [ROW_FULL, ROW_FULL, ROW_FULL, ROW_FULL],
        }
    }

    /// The shape's name in the puzzle input format
    pub const fn name(self) -> &'static str {
        match self {
            Self::OuterBoundary => "OUTER_BOUNDARY",
            Self::ElShape => "EL_SHAPE",
            Self::FullBlock => "FULL_BLOCK",
        }
    }

    /// Dense index used by the inventory, following the trial order
    pub const fn index(self) -> usize {
        match self {
            Self::OuterBoundary => 0,
            Self::ElShape => 1,
            Self::FullBlock => 2,
        }
    }

    /// Copy the landscape and apply this shape's pattern at the anchor
    ///
    /// Covering is destructive: every patterned cell is overwritten with the
    /// `-1` marker regardless of its prior value. The input landscape is
    /// never mutated. The 4x4 window must lie within the grid; the sequencer
    /// guarantees this for every anchor it produces.
    pub fn stamped(self, landscape: &Landscape, anchor: Anchor) -> Landscape {
        debug_assert!(
            anchor.row + TILE_SPAN <= landscape.rows()
                && anchor.col + TILE_SPAN <= landscape.cols(),
            "anchor window out of bounds"
        );

        let mut stamped = landscape.clone();
        for (row_offset, pattern_row) in self.pattern().iter().enumerate() {
            for (col_offset, &covers) in pattern_row.iter().enumerate() {
                if covers {
                    if let Some(cell) =
                        stamped.cell_mut(anchor.row + row_offset, anchor.col + col_offset)
                    {
                        *cell = COVERED;
                    }
                }
            }
        }
        stamped
    }
}

impl fmt::Display for TileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileShape {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::TRIAL_ORDER
            .into_iter()
            .find(|shape| shape.name() == name)
            .ok_or(())
    }
}

/// Remaining placement counts per tile shape
///
/// Decremented when a shape is tentatively placed and restored on backtrack;
/// counts never go negative because the engine skips exhausted shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileInventory {
    counts: [usize; 3],
}

impl TileInventory {
    /// Create an inventory with the given count for each shape
    pub fn new(outer_boundary: usize, el_shape: usize, full_block: usize) -> Self {
        Self {
            counts: [outer_boundary, el_shape, full_block],
        }
    }

    /// Remaining count for a shape
    pub fn remaining(&self, shape: TileShape) -> usize {
        self.counts.get(shape.index()).copied().unwrap_or(0)
    }

    /// Consume one tile of a shape for a tentative placement
    pub fn take(&mut self, shape: TileShape) {
        if let Some(count) = self.counts.get_mut(shape.index()) {
            *count = count.saturating_sub(1);
        }
    }

    /// Return one tile of a shape when its placement is backtracked
    pub fn put_back(&mut self, shape: TileShape) {
        if let Some(count) = self.counts.get_mut(shape.index()) {
            *count += 1;
        }
    }
}

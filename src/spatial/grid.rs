//! Landscape grid storage and histogram queries
//!
//! The landscape is a rectangular grid of `i8` cell values: `0` for empty
//! cells, codes `1..=4` for countable categories, and `-1` for cells consumed
//! by a placed tile. Dimensions are fixed at construction; only cell values
//! change during the search.

use ndarray::Array2;
use std::collections::HashMap;

/// Number of rows and columns spanned by one tile placement window
pub const TILE_SPAN: usize = 4;

/// Cell value marking a cell consumed by a placed tile
pub const COVERED: i8 = -1;

/// Cell value of an empty, uncovered cell
pub const EMPTY: i8 = 0;

/// Smallest code tracked by the target counts
pub const MIN_CODE: i8 = 1;

/// Largest code tracked by the target counts
pub const MAX_CODE: i8 = 4;

/// Top-left coordinate of a 4x4 placement window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Row index of the window's top-left cell
    pub row: usize,
    /// Column index of the window's top-left cell
    pub col: usize,
}

impl Anchor {
    /// The first anchor visited by every search
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create an anchor at the given grid coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Exact per-code cell counts required of a solved landscape
///
/// Immutable once loaded. Codes absent from the input default to a target
/// of zero, so an all-covered landscape satisfies an empty target set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetCounts {
    counts: [usize; (MAX_CODE - MIN_CODE + 1) as usize],
}

impl TargetCounts {
    /// Set the required count for a code
    ///
    /// Returns `false` when the code falls outside the tracked `1..=4`
    /// range, leaving the counts untouched.
    pub fn set(&mut self, code: i8, count: usize) -> bool {
        match Self::slot(code).and_then(|slot| self.counts.get_mut(slot)) {
            Some(entry) => {
                *entry = count;
                true
            }
            None => false,
        }
    }

    /// Required count for a code; codes outside `1..=4` have target zero
    pub fn get(&self, code: i8) -> usize {
        Self::slot(code)
            .and_then(|slot| self.counts.get(slot))
            .copied()
            .unwrap_or(0)
    }

    const fn slot(code: i8) -> Option<usize> {
        if code >= MIN_CODE && code <= MAX_CODE {
            Some((code - MIN_CODE) as usize)
        } else {
            None
        }
    }
}

/// Rectangular landscape grid with fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landscape {
    cells: Array2<i8>,
}

impl Landscape {
    /// Build a landscape from row-major cell rows
    ///
    /// Returns `None` when the rows are empty or ragged. Dimension
    /// constraints beyond rectangularity (multiples of 4, size caps) are
    /// enforced by the reader.
    pub fn from_rows(rows: &[Vec<i8>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let flat: Vec<i8> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((height, width), flat).ok()?;
        Some(Self { cells })
    }

    /// Build a landscape with every cell set to the same value
    pub fn filled(rows: usize, cols: usize, value: i8) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), value),
        }
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dims(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Cell value at a coordinate, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<i8> {
        self.cells.get([row, col]).copied()
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut i8> {
        self.cells.get_mut([row, col])
    }

    /// Count occurrences of every distinct cell value in the grid
    ///
    /// Includes the covered marker `-1` and the empty marker `0`; the counts
    /// always sum to `rows * cols`.
    pub fn histogram(&self) -> HashMap<i8, usize> {
        let mut counts = HashMap::new();
        for &value in &self.cells {
            *counts.entry(value).or_insert(0) += 1;
        }
        counts
    }

    /// Solved-state predicate: the histogram equals the targets exactly
    ///
    /// Every code `1..=4` must match its target count precisely; values
    /// outside that range (`-1`, `0`) never affect the result.
    pub fn matches_targets(&self, targets: &TargetCounts) -> bool {
        let histogram = self.histogram();
        (MIN_CODE..=MAX_CODE).all(|code| {
            histogram.get(&code).copied().unwrap_or(0) == targets.get(code)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Anchor, COVERED, EMPTY, Landscape, MAX_CODE, MIN_CODE, TargetCounts};

    #[test]
    fn test_histogram_counts_sum_to_cell_total() {
        let Some(landscape) = Landscape::from_rows(&[
            vec![1, 2, COVERED, EMPTY],
            vec![3, 4, 4, 1],
        ]) else {
            unreachable!("rows are rectangular")
        };

        let histogram = landscape.histogram();
        let total: usize = histogram.values().sum();
        assert_eq!(total, landscape.rows() * landscape.cols());
        assert_eq!(histogram.get(&4).copied(), Some(2));
        assert_eq!(histogram.get(&COVERED).copied(), Some(1));
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_empty_input() {
        assert!(Landscape::from_rows(&[]).is_none());
        assert!(Landscape::from_rows(&[vec![]]).is_none());
        assert!(Landscape::from_rows(&[vec![1, 2], vec![1]]).is_none());
    }

    #[test]
    fn test_matches_targets_requires_exact_counts() {
        let Some(landscape) = Landscape::from_rows(&[vec![1, 1, 2, EMPTY]]) else {
            unreachable!("row is rectangular")
        };

        let mut targets = TargetCounts::default();
        assert!(targets.set(1, 2));
        assert!(targets.set(2, 1));
        assert!(landscape.matches_targets(&targets));

        // A surplus is a mismatch, not a satisfied lower bound
        assert!(targets.set(1, 1));
        assert!(!landscape.matches_targets(&targets));
    }

    #[test]
    fn test_matches_targets_ignores_covered_and_empty_cells() {
        let covered = Landscape::filled(4, 4, COVERED);
        let targets = TargetCounts::default();
        assert!(covered.matches_targets(&targets));

        let empty = Landscape::filled(4, 8, EMPTY);
        assert!(empty.matches_targets(&targets));
    }

    #[test]
    fn test_target_counts_reject_untracked_codes() {
        let mut targets = TargetCounts::default();
        assert!(!targets.set(MIN_CODE - 1, 3));
        assert!(!targets.set(MAX_CODE + 1, 3));
        assert_eq!(targets.get(MIN_CODE - 1), 0);
        assert_eq!(targets.get(5), 0);
    }

    #[test]
    fn test_anchor_origin_is_top_left() {
        assert_eq!(Anchor::ORIGIN, Anchor::new(0, 0));
    }
}

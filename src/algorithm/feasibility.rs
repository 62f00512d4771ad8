//! Overshoot pruning for hypothetical tile placements
//!
//! Covering only ever converts cells to the `-1` marker, so a code count can
//! never recover once it drops below its target. A placement that would push
//! any code under target is therefore unrecoverable and its whole subtree
//! can be pruned. This is deliberately a weak prune: it does not reason
//! about remaining inventory capacity, matching the exhaustive character of
//! the search on the small grids it is built for.

use crate::spatial::grid::{Anchor, Landscape, MAX_CODE, MIN_CODE, TargetCounts};
use crate::spatial::tiles::TileShape;

/// Whether stamping `shape` at `anchor` keeps every code count at or above
/// its target
///
/// Evaluates the hypothetical post-stamp landscape without committing it.
/// This is a monotone feasibility check, not the solved-state predicate:
/// counts above target are allowed here and only rejected by the final
/// exact match.
pub fn can_place(
    shape: TileShape,
    landscape: &Landscape,
    anchor: Anchor,
    targets: &TargetCounts,
) -> bool {
    let hypothetical = shape.stamped(landscape, anchor);
    let histogram = hypothetical.histogram();
    (MIN_CODE..=MAX_CODE).all(|code| {
        histogram.get(&code).copied().unwrap_or(0) >= targets.get(code)
    })
}

#[cfg(test)]
mod tests {
    use super::can_place;
    use crate::spatial::grid::{Anchor, Landscape, TargetCounts};
    use crate::spatial::tiles::TileShape;

    #[test]
    fn test_rejects_placement_that_overshoots_a_target() {
        // Sixteen 1-cells; FULL_BLOCK would leave zero against a target of 4
        let landscape = Landscape::filled(4, 4, 1);
        let mut targets = TargetCounts::default();
        assert!(targets.set(1, 4));

        assert!(!can_place(
            TileShape::FullBlock,
            &landscape,
            Anchor::ORIGIN,
            &targets
        ));
    }

    #[test]
    fn test_accepts_placement_that_stays_at_or_above_targets() {
        let landscape = Landscape::filled(4, 4, 1);
        let mut targets = TargetCounts::default();
        assert!(targets.set(1, 4));

        // OUTER_BOUNDARY covers 12 cells, leaving exactly 4
        assert!(can_place(
            TileShape::OuterBoundary,
            &landscape,
            Anchor::ORIGIN,
            &targets
        ));
        // EL_SHAPE covers 7, leaving 9: above target is still feasible
        assert!(can_place(
            TileShape::ElShape,
            &landscape,
            Anchor::ORIGIN,
            &targets
        ));
    }

    #[test]
    fn test_rejection_is_monotone_in_coverage() {
        // If the 7-cell EL_SHAPE overshoots, the supersets must too
        let landscape = Landscape::filled(4, 4, 2);
        let mut targets = TargetCounts::default();
        assert!(targets.set(2, 12));

        assert!(!can_place(
            TileShape::ElShape,
            &landscape,
            Anchor::ORIGIN,
            &targets
        ));
        assert!(!can_place(
            TileShape::OuterBoundary,
            &landscape,
            Anchor::ORIGIN,
            &targets
        ));
        assert!(!can_place(
            TileShape::FullBlock,
            &landscape,
            Anchor::ORIGIN,
            &targets
        ));
    }

    #[test]
    fn test_check_leaves_the_landscape_untouched() {
        let landscape = Landscape::filled(4, 8, 3);
        let before = landscape.clone();
        let targets = TargetCounts::default();

        let _ = can_place(TileShape::FullBlock, &landscape, Anchor::ORIGIN, &targets);
        assert_eq!(landscape, before);
    }
}

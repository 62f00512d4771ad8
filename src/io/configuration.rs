//! Runtime configuration constants

// Safety limit on memory use and search depth: the engine recurses once per
// 4x4 block and holds one full-grid snapshot per frame, so this cap bounds
// the descent at 1_000 * 1_000 / 16 = 62_500 frames
/// Maximum allowed landscape dimension in cells
pub const MAX_GRID_DIMENSION: usize = 1_000;

// Puzzle file section headers
/// Header opening the landscape rows
pub const LANDSCAPE_HEADER: &str = "# Landscape";
/// Header opening the tile inventory line
pub const TILES_HEADER: &str = "# Tiles";
/// Header opening the target count lines
pub const TARGETS_HEADER: &str = "# Targets";

// Progress display settings
/// Spinner refresh interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 100;

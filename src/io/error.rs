//! Error types for puzzle loading and solver operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
///
/// Malformed input is detected and surfaced here at load time; the search
/// core assumes it never receives such data. An unsolvable puzzle is not an
/// error and never appears in this taxonomy.
#[derive(Debug)]
pub enum SolverError {
    /// Failed to read the puzzle file from the filesystem
    FileSystem {
        /// Path to the puzzle file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A required section header was not found in the puzzle file
    MissingSection {
        /// Name of the missing section header
        section: &'static str,
    },

    /// Landscape rows could not be parsed into a rectangular grid
    MalformedLandscape {
        /// One-based line number of the offending row, when known
        line: usize,
        /// Description of what is wrong with the row
        reason: String,
    },

    /// Landscape dimensions violate the solver's preconditions
    InvalidDimensions {
        /// Parsed row count
        rows: usize,
        /// Parsed column count
        cols: usize,
        /// Which precondition failed
        reason: &'static str,
    },

    /// Tile inventory line could not be parsed
    MalformedTiles {
        /// Description of the parse failure
        reason: String,
    },

    /// Tile inventory names a shape outside the fixed catalog
    UnknownTileShape {
        /// The unrecognized shape name
        name: String,
    },

    /// Target line could not be parsed into code:count pairs
    MalformedTargets {
        /// One-based line number of the offending line
        line: usize,
        /// Description of the parse failure
        reason: String,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem { path, source } => {
                write!(f, "Failed to read puzzle '{}': {source}", path.display())
            }
            Self::MissingSection { section } => {
                write!(f, "Puzzle file has no '{section}' section")
            }
            Self::MalformedLandscape { line, reason } => {
                write!(f, "Malformed landscape row at line {line}: {reason}")
            }
            Self::InvalidDimensions { rows, cols, reason } => {
                write!(f, "Invalid landscape dimensions {rows}x{cols}: {reason}")
            }
            Self::MalformedTiles { reason } => {
                write!(f, "Malformed tile inventory: {reason}")
            }
            Self::UnknownTileShape { name } => {
                write!(f, "Unknown tile shape '{name}'")
            }
            Self::MalformedTargets { line, reason } => {
                write!(f, "Malformed targets at line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

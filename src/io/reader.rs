//! Puzzle file parsing
//!
//! The text format has three sections. `# Landscape` is followed by one
//! line per grid row, cells occupying every second character column (a
//! space is the empty code 0), terminated by a blank line. `# Tiles` is
//! followed by a single braced list like
//! `{OUTER_BOUNDARY=1, EL_SHAPE=2, FULL_BLOCK=3}`. `# Targets` is followed
//! by lines of whitespace-separated `code:count` pairs.
//!
//! All input validation lives here: the search core assumes it only ever
//! receives a rectangular landscape whose dimensions are multiples of 4,
//! a known shape inventory, and targets on codes `1..=4`.

use crate::io::configuration::{
    LANDSCAPE_HEADER, MAX_GRID_DIMENSION, TARGETS_HEADER, TILES_HEADER,
};
use crate::io::error::{Result, SolverError};
use crate::spatial::grid::{Landscape, MAX_CODE, TILE_SPAN, TargetCounts};
use crate::spatial::tiles::{TileInventory, TileShape};
use std::path::Path;

/// A fully validated puzzle instance ready for the solver
#[derive(Debug)]
pub struct Puzzle {
    /// Initial landscape grid
    pub landscape: Landscape,
    /// Available tile counts per shape
    pub inventory: TileInventory,
    /// Required final histogram per code
    pub targets: TargetCounts,
}

/// Read and parse a puzzle file
///
/// # Errors
///
/// Returns an error when the file cannot be read or any section fails
/// validation; see [`SolverError`] for the malformed-input taxonomy.
pub fn read_puzzle(path: &Path) -> Result<Puzzle> {
    let text = std::fs::read_to_string(path).map_err(|source| SolverError::FileSystem {
        path: path.to_path_buf(),
        source,
    })?;
    parse_puzzle(&text)
}

/// Parse puzzle text into a validated instance
///
/// # Errors
///
/// Returns an error when a section header is missing or a section's
/// contents fail validation.
pub fn parse_puzzle(text: &str) -> Result<Puzzle> {
    let lines: Vec<&str> = text.lines().collect();

    let landscape = parse_landscape(&lines)?;
    let inventory = parse_inventory(&lines)?;
    let targets = parse_targets(&lines)?;

    Ok(Puzzle {
        landscape,
        inventory,
        targets,
    })
}

/// Index of the first line starting with `header`
fn find_header(lines: &[&str], header: &'static str) -> Result<usize> {
    lines
        .iter()
        .position(|line| line.starts_with(header))
        .ok_or(SolverError::MissingSection { section: header })
}

fn parse_landscape(lines: &[&str]) -> Result<Landscape> {
    let header = find_header(lines, LANDSCAPE_HEADER)?;

    let mut rows: Vec<Vec<i8>> = Vec::new();
    for (offset, line) in lines.get(header + 1..).unwrap_or(&[]).iter().enumerate() {
        if line.is_empty() {
            break;
        }
        let line_number = header + 2 + offset;
        let row = parse_landscape_row(line, line_number)?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(SolverError::MalformedLandscape {
                    line: line_number,
                    reason: format!("expected {} cells, found {}", first.len(), row.len()),
                });
            }
        }
        rows.push(row);
    }

    let rows_count = rows.len();
    let cols_count = rows.first().map_or(0, Vec::len);
    validate_dimensions(rows_count, cols_count)?;

    Landscape::from_rows(&rows).ok_or(SolverError::InvalidDimensions {
        rows: rows_count,
        cols: cols_count,
        reason: "landscape rows are not rectangular",
    })
}

/// Cells occupy every second character column; even positions hold the cell
fn parse_landscape_row(line: &str, line_number: usize) -> Result<Vec<i8>> {
    line.chars()
        .step_by(2)
        .map(|cell| match cell {
            ' ' => Ok(0),
            '0'..='4' => Ok((cell as u8 - b'0') as i8),
            other => Err(SolverError::MalformedLandscape {
                line: line_number,
                reason: format!("cell character '{other}' is not a space or a code 0..{MAX_CODE}"),
            }),
        })
        .collect()
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    let fail = |reason| {
        Err(SolverError::InvalidDimensions { rows, cols, reason })
    };

    if rows == 0 || cols == 0 {
        return fail("landscape section is empty");
    }
    if rows % TILE_SPAN != 0 || cols % TILE_SPAN != 0 {
        return fail("both dimensions must be multiples of 4");
    }
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return fail("landscape exceeds the maximum supported dimension");
    }
    Ok(())
}

fn parse_inventory(lines: &[&str]) -> Result<TileInventory> {
    let header = find_header(lines, TILES_HEADER)?;
    let line = lines
        .get(header + 1)
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .ok_or_else(|| SolverError::MalformedTiles {
            reason: "no inventory line follows the header".to_string(),
        })?;

    let body = line
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| SolverError::MalformedTiles {
            reason: format!("expected a braced shape list, found '{line}'"),
        })?;

    // Shapes absent from the list default to a count of zero
    let mut counts = [0usize; 3];
    for entry in body.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (name, count) = entry.split_once('=').ok_or_else(|| SolverError::MalformedTiles {
            reason: format!("expected NAME=COUNT, found '{entry}'"),
        })?;

        let shape: TileShape =
            name.trim()
                .parse()
                .map_err(|()| SolverError::UnknownTileShape {
                    name: name.trim().to_string(),
                })?;
        let count: usize =
            count
                .trim()
                .parse()
                .map_err(|_| SolverError::MalformedTiles {
                    reason: format!("count for {shape} is not a non-negative integer"),
                })?;

        if let Some(slot) = counts.get_mut(shape.index()) {
            *slot = count;
        }
    }

    let [outer_boundary, el_shape, full_block] = counts;
    Ok(TileInventory::new(outer_boundary, el_shape, full_block))
}

fn parse_targets(lines: &[&str]) -> Result<TargetCounts> {
    let header = find_header(lines, TARGETS_HEADER)?;

    // Codes never listed keep the default target of zero
    let mut targets = TargetCounts::default();
    for (offset, line) in lines.get(header + 1..).unwrap_or(&[]).iter().enumerate() {
        if line.is_empty() {
            break;
        }
        let line_number = header + 2 + offset;

        for pair in line.split_whitespace() {
            let (code, count) =
                pair.split_once(':')
                    .ok_or_else(|| SolverError::MalformedTargets {
                        line: line_number,
                        reason: format!("expected CODE:COUNT, found '{pair}'"),
                    })?;

            let code: i8 = code.parse().map_err(|_| SolverError::MalformedTargets {
                line: line_number,
                reason: format!("code '{code}' is not an integer"),
            })?;
            let count: usize = count.parse().map_err(|_| SolverError::MalformedTargets {
                line: line_number,
                reason: format!("count '{count}' is not a non-negative integer"),
            })?;

            if !targets.set(code, count) {
                return Err(SolverError::MalformedTargets {
                    line: line_number,
                    reason: format!("code {code} is outside the tracked range 1..{MAX_CODE}"),
                });
            }
        }
    }

    Ok(targets)
}

//! Command-line interface for solving puzzle files

use crate::algorithm::Solver;
use crate::io::error::Result;
use crate::io::progress::SearchProgress;
use crate::io::reader::read_puzzle;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the puzzle solver
#[derive(Parser)]
#[command(name = "tilescape")]
#[command(
    author,
    version,
    about = "Solve landscape tile-covering puzzles by backtracking search"
)]
pub struct Cli {
    /// Puzzle description file (landscape, tile inventory, targets)
    #[arg(value_name = "PUZZLE")]
    pub puzzle: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Loads a puzzle, runs the solver, and presents the outcome
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve the puzzle file and print the placement path
    ///
    /// An unsolvable puzzle prints the no-solution message and exits
    /// successfully; only malformed input or I/O failures are errors.
    ///
    /// # Errors
    ///
    /// Returns an error when the puzzle file cannot be read or parsed.
    // Printing the result is this binary's entire purpose
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let puzzle = read_puzzle(&self.cli.puzzle)?;

        let progress = (!self.cli.quiet).then(SearchProgress::new);

        let mut solver = Solver::new(puzzle.landscape, puzzle.inventory, puzzle.targets);
        let solution = solver.solve();

        if let Some(ref progress) = progress {
            progress.finish(solution.is_some(), solver.stats());
        }

        match solution {
            Some(path) => {
                for placement in path {
                    println!("{placement}");
                }
            }
            None => println!("There is no solution for this landscape !"),
        }

        Ok(())
    }
}

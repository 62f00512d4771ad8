//! CLI entry point for the landscape tile-covering solver

use clap::Parser;
use tilescape::io::cli::{Cli, PuzzleRunner};

fn main() -> tilescape::Result<()> {
    let cli = Cli::parse();
    let runner = PuzzleRunner::new(cli);
    runner.run()
}

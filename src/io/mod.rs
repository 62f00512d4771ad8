//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime configuration constants
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Search progress display
pub mod progress;
/// Puzzle file parsing and validation
pub mod reader;

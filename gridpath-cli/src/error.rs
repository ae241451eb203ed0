//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The puzzle input could not be read
    #[error("Cannot read {source_name}: {source}")]
    Input {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// Puzzle parse or solve error
    #[error("Puzzle error: {0}")]
    Puzzle(#[from] gridpath_puzzles::PuzzleError),

    /// Some parts were attempted and failed
    #[error("{0} part(s) failed")]
    PartsFailed(usize),
}

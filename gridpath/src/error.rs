//! Error types for grid construction and search

use thiserror::Error;

/// Error type for a search run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The open set emptied without any goal node being finalized
    #[error("No path found: goal is unreachable from start")]
    NoPathFound,
    /// A node key did not contain a decodable position segment
    #[error("Malformed node key: {0:?}")]
    MalformedNodeKey(String),
}

/// Error type for building a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or rows with no cells
    #[error("Grid is empty")]
    Empty,
    /// A row's length differs from the first row's
    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell could not be converted
    #[error("Invalid cell at ({row}, {col}): {reason}")]
    InvalidCell {
        row: usize,
        col: usize,
        reason: String,
    },
}

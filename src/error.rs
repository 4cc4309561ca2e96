//! Error types for maze loading, generation and engine construction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised before a traversal starts.
///
/// Once an [`Explorer`](crate::simulation::agent::Explorer) has been built
/// the walk itself cannot fail.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("Maze description is empty")]
    Empty,

    #[error("Invalid dimension line '{0}': expected 'rows cols'")]
    InvalidDimensions(String),

    #[error("Maze declares {expected} rows but only {found} were found")]
    MissingRows { expected: usize, found: usize },

    #[error("Row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown glyph '{glyph}' at ({row}, {col})")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    #[error("Maze has no start cell 'M'")]
    MissingStart,

    #[error("Maze has more than one start cell: ({first_row}, {first_col}) and ({row}, {col})")]
    DuplicateStart {
        first_row: usize,
        first_col: usize,
        row: usize,
        col: usize,
    },

    #[error("Border cell ({row}, {col}) is not a wall")]
    OpenBorder { row: usize, col: usize },

    #[error("Cannot generate a {rows}x{cols} maze: {reason}")]
    InvalidSize {
        rows: usize,
        cols: usize,
        reason: String,
    },

    #[error("Failed to read maze file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

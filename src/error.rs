//! Errors raised by maze construction, loading and play

use crate::grid::{Marker, Position};

/// Everything that can go wrong in this crate
#[derive(thiserror::Error, Debug)]
pub enum MazeError {
    /// Requested generation size is outside [`MIN_SIZE`](crate::MIN_SIZE)..=[`MAX_SIZE`](crate::MAX_SIZE)
    #[error(
        "maze size {width}x{height} is invalid, both dimensions must be between {} and {}",
        crate::MIN_SIZE,
        crate::MAX_SIZE
    )]
    InvalidSize { width: usize, height: usize },

    /// Direct cell access outside the grid
    #[error("position row={row}, col={col} is outside the maze")]
    OutOfBounds { row: usize, col: usize },

    /// Maze has no start or no end cell
    #[error("maze has no {0} marker")]
    MissingMarker(Marker),

    /// Maze has more than one start or end cell
    #[error("maze has more than one {marker} marker, at {first} and {second}")]
    DuplicateMarker {
        marker: Marker,
        first: Position,
        second: Position,
    },

    /// Rows are not all of the same length
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Character outside the configured alphabet
    #[error("unexpected character `{symbol}` at line {line}, column {column}")]
    UnknownSymbol {
        symbol: char,
        line: usize,
        column: usize,
    },

    /// No rows at all
    #[error("maze is empty")]
    EmptyMaze,

    /// Dimension header disagrees with the rows that follow it
    #[error("header declares {declared_height}x{declared_width} but maze is {height}x{width}")]
    HeaderMismatch {
        declared_height: usize,
        declared_width: usize,
        height: usize,
        width: usize,
    },

    /// Two of the wall/path/start/end characters are the same
    #[error("wall, path, start and end characters must all differ (got `{wall}`, `{path}`, `{start}`, `{end}`)")]
    AmbiguousSymbols {
        wall: char,
        path: char,
        start: char,
        end: char,
    },

    /// Line breaks separate rows, so they cannot stand for a cell
    #[error("maze characters cannot be line breaks (got {0:?})")]
    LineBreakSymbol(char),

    /// Input token that is not a game command
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MazeError {
    /// Whether this error describes a structurally broken maze text
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MissingMarker(_)
                | Self::DuplicateMarker { .. }
                | Self::RaggedRow { .. }
                | Self::UnknownSymbol { .. }
                | Self::EmptyMaze
                | Self::HeaderMismatch { .. }
        )
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, MazeError>;

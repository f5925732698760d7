use std::path::PathBuf;

use crate::game::Token;

/// Errors raised by [`Column`](crate::game::Column) and
/// [`Board`](crate::game::Board) operations.
///
/// A failed operation never mutates the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("the {dimension} ({value}) must be at least the number of tokens to connect ({tokens_to_connect})")]
    InvalidDimensions {
        dimension: Dimension,
        value: usize,
        tokens_to_connect: usize,
    },

    #[error("column {col} is out of bounds (width {width})")]
    ColumnIndex { col: usize, width: usize },

    #[error("position ({row}, {col}) is out of bounds ({width}x{height} board)")]
    Position {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("row {row} is out of range (height {height})")]
    IndexOutOfRange { row: usize, height: usize },

    #[error("{}", describe_column("full", .col))]
    ColumnFull { col: Option<usize> },

    #[error("{}", describe_column("empty", .col))]
    ColumnEmpty { col: Option<usize> },

    #[error("sequence length {length} is below the minimum of {min}")]
    InvalidLength { length: usize, min: usize },

    #[error("the empty token cannot be placed")]
    EmptyToken,
}

impl BoardError {
    /// Attach a column index to column-level errors that were raised without one.
    pub(crate) fn in_column(self, col: usize) -> Self {
        match self {
            BoardError::ColumnFull { col: None } => BoardError::ColumnFull { col: Some(col) },
            BoardError::ColumnEmpty { col: None } => BoardError::ColumnEmpty { col: Some(col) },
            other => other,
        }
    }
}

fn describe_column(state: &str, col: &Option<usize>) -> String {
    match col {
        Some(col) => format!("column {col} is {state}"),
        None => format!("column is {state}"),
    }
}

/// Which board dimension failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Width => f.write_str("width"),
            Dimension::Height => f.write_str("height"),
        }
    }
}

/// Errors raised while playing games between strategies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    #[error("{strategy} chose column {col} for {token}: {source}")]
    IllegalMove {
        strategy: String,
        token: Token,
        col: usize,
        source: BoardError,
    },

    #[error("{strategy} found no move for {token} on a board with {free} free cells")]
    NoMove {
        strategy: String,
        token: Token,
        free: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

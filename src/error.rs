use std::path::PathBuf;

/// Errors produced while parsing a line typed at one of the console prompts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("could not understand '{0}'")]
    InvalidFormat(String),

    #[error("{value} is out of range (expected {min}..={max})")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

/// Errors produced when a move is submitted to a session or board.
///
/// None of these mutate game state; the same player is simply asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {column} does not exist (expected 1..={max})")]
    OutOfRange { column: usize, max: usize },

    #[error("no move is expected right now")]
    NotAwaitingMove,
}

/// Errors that can occur when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board of {rows}x{columns} is too small to hold a line of four")]
    TooSmall { rows: usize, columns: usize },
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

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

use thiserror::Error;

/// Why a piece of algebraic text could not be read as a position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("malformed position {0:?}: expected letters followed by digits")]
    Malformed(String),

    #[error("unknown file {0:?}: files are single letters a-z")]
    UnknownFile(String),

    #[error("invalid rank {0:?}")]
    InvalidRank(String),
}

/// Board dimensions that cannot be built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid file count {0} (must be 1-26)")]
    InvalidFileCount(u8),

    #[error("invalid rank count {0} (must be at least 1)")]
    InvalidRankCount(u8),
}

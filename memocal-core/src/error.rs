//! Error types for the memocal domain model.

use thiserror::Error;

/// Errors that can occur in memocal operations.
#[derive(Error, Debug)]
pub enum MemocalError {
    #[error("Invalid month {0}, expected 1-12")]
    InvalidMonth(u32),

    #[error("Invalid year-month '{0}'. Expected YYYY-MM")]
    ParseYearMonth(String),

    #[error("Memo content contains reserved character {0:?}")]
    ReservedCharacter(char),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for memocal operations.
pub type MemocalResult<T> = Result<T, MemocalError>;

//! Error types shared by the window, reference and session modules.

use thiserror::Error;

/// Errors reported by the compression engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied input that violates an operation's precondition.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A size or count exceeds what the packed encoding can represent.
    #[error("Input too large: {length} exceeds maximum of {max_length}")]
    InputTooLarge { length: usize, max_length: usize },

    /// A match reference field does not fit its bit budget.
    #[error("{field} {value} does not fit in the packed encoding (max {max})")]
    FieldOutOfRange {
        field: &'static str,
        value: usize,
        max: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Error::InvalidInput(message.into())
    }
}

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

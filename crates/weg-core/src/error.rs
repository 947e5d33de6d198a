//! Error types for the shared value types.

/// Errors produced when reading core value types from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The text is not a canonical dice code.
    #[error("invalid dice code: {0}")]
    InvalidDiceCode(String),

    /// The text names no known attribute.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

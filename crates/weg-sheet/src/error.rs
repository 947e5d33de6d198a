//! Error types for sheet parsing.

use thiserror::Error;

/// Result type for sheet operations.
pub type SheetResult<T> = Result<T, ParseError>;

/// A sheet that cannot be turned into any character.
///
/// Nothing should be persisted when parsing fails. Individual malformed
/// fields never produce this error; they fall back to defaults instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input was empty or whitespace only.
    #[error("character sheet is empty")]
    Empty,

    /// The input exceeds the configured size limit.
    #[error("character sheet is {size} bytes, limit is {limit}")]
    TooLarge {
        /// Size of the input in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// The input bytes are not UTF-8 text.
    #[error("character sheet is not valid UTF-8 text")]
    InvalidUtf8,

    /// JSON input could not be decoded.
    #[error("invalid JSON format: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// JSON input decoded to something other than an object.
    #[error("JSON character sheet must be an object")]
    NotAnObject,

    /// CSV input could not be read.
    #[error("error parsing CSV: {0}")]
    InvalidCsv(#[from] csv::Error),

    /// CSV input had a header but no data row.
    #[error("CSV character sheet has no data rows")]
    NoRows,
}

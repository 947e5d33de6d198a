//! Configuration for sheet parsing.

use crate::character::CharacterDefaults;

/// Default upload limit: 1 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Configuration for a [`SheetParser`](crate::SheetParser).
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Values used for numeric fields a sheet leaves out.
    pub defaults: CharacterDefaults,
    /// Reject inputs larger than this many bytes (`None` = unlimited).
    pub max_input_bytes: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            defaults: CharacterDefaults::default(),
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
        }
    }
}

impl ParserConfig {
    /// Set the numeric defaults.
    pub fn with_defaults(mut self, defaults: CharacterDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set the input size limit.
    pub fn with_max_input_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_input_bytes = limit;
        self
    }
}

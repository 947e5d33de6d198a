//! Error types for the dice engine.
//!
//! These never cross [`DiceRoller::roll`](crate::DiceRoller::roll); a failed
//! roll is reported through [`RollResult::error`](crate::RollResult::error).

/// Errors that can occur while preparing a roll.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The dice code does not match the accepted grammar.
    #[error("invalid dice code format: {0}")]
    InvalidCode(String),

    /// The dice code asks for more dice than the roller allows.
    #[error("too many dice: {dice} (limit {limit})")]
    TooManyDice {
        /// Dice requested.
        dice: u32,
        /// Configured limit.
        limit: u32,
    },
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

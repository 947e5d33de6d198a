//! WEG Star Wars dice-code engine.
//!
//! Rolls codes like `4D+2` under the wild-die rule, formats breakdowns and
//! checks totals against named or numeric difficulties. Rolling never fails
//! across the public surface; problems are reported inside the result.

pub mod config;
pub mod dice;
pub mod difficulty;
pub mod error;
pub mod helpers;
pub mod roller;

pub use config::{DEFAULT_MAX_DICE, RollerConfig};
pub use dice::{
    DieSource, RollResult, RollSpec, SequenceDice, WildDie, WildDieState, format_breakdown,
};
pub use difficulty::{Difficulty, DifficultyOutcome, check_difficulty};
pub use error::{DiceError, DiceResult};
pub use helpers::{LightsaberAttack, RollHelper};
pub use roller::{DamageRoll, DiceRoller, ForcePowerRoll, OpposedRoll, Winner};

//! Shared value types for the WEG Star Wars toolkit.
//!
//! Both the sheet parser and the dice engine speak in [`DiceCode`]s and
//! [`Attribute`]s; neither depends on the other.

pub mod attribute;
pub mod code;
pub mod error;

pub use attribute::Attribute;
pub use code::{DiceCode, PIPS_PER_DIE};
pub use error::{CoreError, CoreResult};

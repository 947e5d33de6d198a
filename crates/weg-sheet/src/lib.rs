//! Multi-format WEG Star Wars character sheet parser.
//!
//! Reconstructs a canonical [`Character`] from JSON, CSV or free-form text
//! with inconsistent field naming. Malformed fields degrade to documented
//! defaults; only input that cannot describe any character is an error.

pub mod character;
pub mod config;
pub mod error;
mod fields;
pub mod format;
pub mod normalize;
pub mod parser;
pub mod taxonomy;
pub mod untrained;
pub mod validate;

pub use character::{Character, CharacterDefaults, UNKNOWN};
pub use config::{DEFAULT_MAX_INPUT_BYTES, ParserConfig};
pub use error::{ParseError, SheetResult};
pub use format::FormatHint;
pub use normalize::{normalize_dice_code, try_normalize_dice_code};
pub use parser::{DefaultReason, DefaultedField, ParsedSheet, SheetParser, parse};
pub use taxonomy::{SkillTaxonomy, attribute_for_skill, normalize_skill};
pub use untrained::{
    RollTarget, RollTargetKind, UntrainedPolicy, apply_penalty, find_roll_target,
    untrained_dice_code,
};
pub use validate::{SheetWarning, validate, validate_with};
pub use weg_core::{Attribute, DiceCode};

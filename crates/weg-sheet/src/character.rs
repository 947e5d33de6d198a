//! The canonical character record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use weg_core::{Attribute, DiceCode};

/// Name and template used when a sheet does not provide one.
pub const UNKNOWN: &str = "Unknown";

/// A parsed WEG Star Wars character.
///
/// Characters are immutable once parsed; an updated sheet is re-parsed and
/// replaces the old value. The serde form is the persisted blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Archetype label (e.g. "Smuggler").
    pub template: String,
    /// Dice code for each of the six attributes.
    pub attributes: BTreeMap<Attribute, DiceCode>,
    /// Dice codes for trained skills, keyed by canonical skill name.
    pub skills: BTreeMap<String, DiceCode>,
    /// Force points.
    pub force_points: u32,
    /// Character points.
    pub character_points: u32,
    /// Dark side points.
    pub dark_side_points: u32,
    /// Whether the character can use the Force.
    pub force_sensitive: bool,
    /// Carried equipment, in sheet order.
    pub equipment: Vec<String>,
    /// Credits on hand.
    pub credits: u32,
}

impl Character {
    /// Create a character with every field at its default value.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_defaults(name, &CharacterDefaults::default())
    }

    /// Create a character using the given numeric defaults.
    pub fn with_defaults(name: impl Into<String>, defaults: &CharacterDefaults) -> Self {
        Self {
            name: name.into(),
            template: UNKNOWN.to_string(),
            attributes: Attribute::ALL
                .into_iter()
                .map(|a| (a, DiceCode::DEFAULT))
                .collect(),
            skills: BTreeMap::new(),
            force_points: defaults.force_points,
            character_points: defaults.character_points,
            dark_side_points: 0,
            force_sensitive: false,
            equipment: Vec::new(),
            credits: defaults.credits,
        }
    }

    /// The dice code for an attribute, or `2D` if it is missing.
    pub fn attribute(&self, attribute: Attribute) -> DiceCode {
        self.attributes
            .get(&attribute)
            .copied()
            .unwrap_or(DiceCode::DEFAULT)
    }

    /// The dice code for a trained skill (canonical name), if any.
    pub fn skill(&self, name: &str) -> Option<DiceCode> {
        self.skills.get(name).copied()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Default values for numeric fields that a sheet leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterDefaults {
    /// Default force points.
    pub force_points: u32,
    /// Default character points.
    pub character_points: u32,
    /// Default credits.
    pub credits: u32,
}

impl Default for CharacterDefaults {
    fn default() -> Self {
        Self {
            force_points: 1,
            character_points: 5,
            credits: 1000,
        }
    }
}

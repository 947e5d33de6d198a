//! The six fixed WEG attributes.
//!
//! Every skill is governed by exactly one attribute. Attributes also accept
//! a short alias (`dex`, `know`, ...) when reading sheets; aliases are never
//! stored.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One of the six WEG Star Wars attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Hand-eye coordination and agility.
    Dexterity,
    /// Education and general know-how.
    Knowledge,
    /// Operating vehicles and machinery.
    Mechanical,
    /// Awareness and social insight.
    Perception,
    /// Physical power and endurance.
    Strength,
    /// Building and fixing things.
    Technical,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Self; 6] = [
        Self::Dexterity,
        Self::Knowledge,
        Self::Mechanical,
        Self::Perception,
        Self::Strength,
        Self::Technical,
    ];

    /// The canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dexterity => "dexterity",
            Self::Knowledge => "knowledge",
            Self::Mechanical => "mechanical",
            Self::Perception => "perception",
            Self::Strength => "strength",
            Self::Technical => "technical",
        }
    }

    /// The short alias accepted when parsing.
    pub fn alias(self) -> &'static str {
        match self {
            Self::Dexterity => "dex",
            Self::Knowledge => "know",
            Self::Mechanical => "mech",
            Self::Perception => "perc",
            Self::Strength => "str",
            Self::Technical => "tech",
        }
    }

    /// The capitalized display label (e.g. "Dexterity").
    pub fn label(self) -> &'static str {
        match self {
            Self::Dexterity => "Dexterity",
            Self::Knowledge => "Knowledge",
            Self::Mechanical => "Mechanical",
            Self::Perception => "Perception",
            Self::Strength => "Strength",
            Self::Technical => "Technical",
        }
    }

    /// Parse an attribute from its name or alias, ignoring case and
    /// surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s || a.alias() == s)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Attribute {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownAttribute(s.to_string()))
    }
}

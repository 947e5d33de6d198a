//! Untrained skill use and roll-target lookup.
//!
//! A character without a skill rolls the governing attribute instead.
//! The live policy is [`UntrainedPolicy::Unpenalized`]; the classic -1D
//! house rule is available as [`UntrainedPolicy::Penalized`].

use serde::{Deserialize, Serialize};
use weg_core::{Attribute, DiceCode};

use crate::character::Character;
use crate::taxonomy::SkillTaxonomy;

/// How an untrained skill's dice code is derived from its attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UntrainedPolicy {
    /// Roll the governing attribute as-is.
    #[default]
    Unpenalized,
    /// Subtract whole dice from the attribute, never going below 1D.
    Penalized {
        /// Dice to subtract.
        dice: u32,
    },
}

impl UntrainedPolicy {
    /// The classic house rule: -1D.
    pub const HOUSE_RULE: Self = Self::Penalized { dice: 1 };

    /// Derive the untrained code from an attribute code.
    pub fn apply(self, attribute_code: DiceCode) -> DiceCode {
        match self {
            Self::Unpenalized => attribute_code,
            Self::Penalized { dice } => attribute_code.with_penalty(dice),
        }
    }

    /// The untrained code for `skill`, or `None` if the taxonomy does not
    /// know the skill.
    pub fn resolve(
        self,
        character: &Character,
        taxonomy: &SkillTaxonomy,
        skill: &str,
    ) -> Option<DiceCode> {
        let attribute = taxonomy.attribute_for_skill(skill)?;
        Some(self.apply(character.attribute(attribute)))
    }
}

/// The governing attribute's code for an untrained skill, unpenalized.
///
/// Uses the standard taxonomy. Returns `None` for unknown skills.
pub fn untrained_dice_code(character: &Character, skill: &str) -> Option<DiceCode> {
    UntrainedPolicy::Unpenalized.resolve(character, SkillTaxonomy::standard(), skill)
}

/// Subtract `dice` whole dice from a code, floored at 1D.
pub fn apply_penalty(code: DiceCode, dice: u32) -> DiceCode {
    UntrainedPolicy::Penalized { dice }.apply(code)
}

/// Where a roll target's dice code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollTargetKind {
    /// A trained skill on the sheet.
    Skill,
    /// One of the six attributes.
    Attribute,
    /// A known skill the character lacks, rolled from its attribute.
    Untrained,
}

/// A resolved skill or attribute, ready to roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollTarget {
    /// Display label, e.g. "Space Transports skill".
    pub label: String,
    /// The code to roll.
    pub code: DiceCode,
    /// How the code was found.
    pub kind: RollTargetKind,
}

/// Resolve a skill or attribute name against a character.
///
/// Trained skills are checked first, then attributes (by name or alias),
/// then untrained skills through `policy`.
pub fn find_roll_target(
    character: &Character,
    taxonomy: &SkillTaxonomy,
    name: &str,
    policy: UntrainedPolicy,
) -> Option<RollTarget> {
    let skill = taxonomy.normalize_skill(name);

    if let Some(code) = character.skill(&skill) {
        return Some(RollTarget {
            label: format!("{} skill", title_case(&skill)),
            code,
            kind: RollTargetKind::Skill,
        });
    }

    if let Some(attribute) = Attribute::parse(name.trim()) {
        return Some(RollTarget {
            label: format!("{} attribute", attribute.label()),
            code: character.attribute(attribute),
            kind: RollTargetKind::Attribute,
        });
    }

    let code = policy.resolve(character, taxonomy, &skill)?;
    tracing::debug!(skill = %skill, %code, ?policy, "rolling untrained skill");
    Some(RollTarget {
        label: format!("{} (untrained)", title_case(&skill)),
        code,
        kind: RollTargetKind::Untrained,
    })
}

/// "space_transports" -> "Space Transports".
fn title_case(skill: &str) -> String {
    skill
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

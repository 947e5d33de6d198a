//! Advisory checks on a parsed character.

use weg_core::{Attribute, DiceCode};

use crate::character::{Character, UNKNOWN};
use crate::taxonomy::SkillTaxonomy;

/// A non-fatal problem found on a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetWarning {
    /// The name is empty or the "Unknown" fallback.
    NameMissing,
    /// An attribute has no entry in the map.
    MissingAttribute(Attribute),
    /// A skill key that the taxonomy does not recognize.
    UnknownSkill(String),
    /// A stored code that does not re-parse in canonical form.
    InvalidCode {
        /// Attribute or skill name.
        field: String,
        /// The code as rendered.
        code: String,
    },
}

impl std::fmt::Display for SheetWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameMissing => write!(f, "Character name is missing or set to '{UNKNOWN}'"),
            Self::MissingAttribute(a) => write!(f, "Missing attribute: {a}"),
            Self::UnknownSkill(s) => write!(f, "Unrecognized skill: {s}"),
            Self::InvalidCode { field, code } => {
                write!(f, "Invalid dice code for {field}: {code}")
            }
        }
    }
}

/// Check a character against the standard taxonomy.
pub fn validate(character: &Character) -> Vec<SheetWarning> {
    validate_with(character, SkillTaxonomy::standard())
}

/// Check a character against `taxonomy`.
pub fn validate_with(character: &Character, taxonomy: &SkillTaxonomy) -> Vec<SheetWarning> {
    let mut warnings = Vec::new();

    if character.name.trim().is_empty() || character.name == UNKNOWN {
        warnings.push(SheetWarning::NameMissing);
    }

    for attribute in Attribute::ALL {
        match character.attributes.get(&attribute) {
            None => warnings.push(SheetWarning::MissingAttribute(attribute)),
            Some(code) => check_code(attribute.name(), *code, &mut warnings),
        }
    }

    for (skill, code) in &character.skills {
        if !taxonomy.is_recognized(skill) {
            warnings.push(SheetWarning::UnknownSkill(skill.clone()));
        }
        check_code(skill, *code, &mut warnings);
    }

    warnings
}

fn check_code(field: &str, code: DiceCode, warnings: &mut Vec<SheetWarning>) {
    let text = code.to_string();
    if text.parse::<DiceCode>().ok() != Some(code) {
        warnings.push(SheetWarning::InvalidCode {
            field: field.to_string(),
            code: text,
        });
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::format::FormatHint;
    use crate::parser::SheetParser;

    #[test]
    fn clean_character_has_no_warnings() {
        let mut c = Character::new("Lando Calrissian");
        c.skills.insert("con".to_string(), DiceCode::new(6, 1));
        assert!(validate(&c).is_empty());
    }

    #[test]
    fn unknown_name_is_flagged() {
        let c = Character::new(UNKNOWN);
        assert_eq!(validate(&c), vec![SheetWarning::NameMissing]);
        let c = Character::new("   ");
        assert_eq!(validate(&c), vec![SheetWarning::NameMissing]);
    }

    #[test]
    fn missing_attribute_is_flagged() {
        let mut c = Character::new("Lobot");
        c.attributes.remove(&Attribute::Strength);
        let warnings = validate(&c);
        assert_eq!(warnings, vec![SheetWarning::MissingAttribute(Attribute::Strength)]);
        assert_eq!(warnings[0].to_string(), "Missing attribute: strength");
    }

    #[test]
    fn unknown_skill_is_flagged() {
        let mut c = Character::new("Dengar");
        c.skills.insert("pazaak".to_string(), DiceCode::new(3, 0));
        assert_eq!(
            validate(&c),
            vec![SheetWarning::UnknownSkill("pazaak".to_string())]
        );
    }

    #[test]
    fn custom_taxonomy() {
        let mut c = Character::new("IG-88");
        c.skills.insert("blaster".to_string(), DiceCode::new(6, 0));
        let taxonomy = SkillTaxonomy::new().with_skills(Attribute::Knowledge, &["languages"]);
        assert_eq!(
            validate_with(&c, &taxonomy),
            vec![SheetWarning::UnknownSkill("blaster".to_string())]
        );
    }

    #[test]
    fn warning_messages() {
        assert_eq!(
            SheetWarning::NameMissing.to_string(),
            "Character name is missing or set to 'Unknown'"
        );
        let w = SheetWarning::InvalidCode {
            field: "dexterity".to_string(),
            code: "lots".to_string(),
        };
        assert_eq!(w.to_string(), "Invalid dice code for dexterity: lots");
    }

    proptest! {
        #[test]
        fn parsed_text_never_breaks_invariants(text in "\\PC{0,300}") {
            if let Ok(parsed) = SheetParser::default().parse(&text, FormatHint::Text) {
                for warning in validate(&parsed.character) {
                    let structural = matches!(
                        warning,
                        SheetWarning::MissingAttribute(_) | SheetWarning::InvalidCode { .. }
                    );
                    prop_assert!(!structural, "{warning}");
                }
            }
        }

        #[test]
        fn parsed_csv_never_breaks_invariants(
            cells in proptest::collection::vec("[A-Za-z0-9+ ]{0,8}", 1..8),
        ) {
            let csv = format!("Dexterity,Blaster,Strength\n{}", cells.join(","));
            if let Ok(parsed) = SheetParser::default().parse(&csv, FormatHint::Csv) {
                prop_assert_eq!(parsed.character.attributes.len(), 6);
                let warnings = validate(&parsed.character);
                prop_assert!(warnings.iter().all(|w| matches!(w, SheetWarning::NameMissing)));
            }
        }
    }
}

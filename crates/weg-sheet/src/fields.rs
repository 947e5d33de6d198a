//! Field resolution shared by the JSON and CSV strategies.
//!
//! Each logical field has an ordered list of candidate keys. The first key
//! holding a non-empty value wins; when none does, the field falls back to
//! its documented default and the fallback is recorded.

use std::collections::BTreeMap;

use weg_core::{Attribute, DiceCode};

use crate::character::{CharacterDefaults, UNKNOWN};
use crate::normalize::{parse_flag, split_items, try_normalize_dice_code};
use crate::parser::{DefaultReason, DefaultedField};
use crate::taxonomy::SkillTaxonomy;

pub(crate) const NAME_KEYS: &[&str] = &["name", "Name", "character_name", "Character Name"];
pub(crate) const TEMPLATE_KEYS: &[&str] = &[
    "template",
    "Template",
    "character_template",
    "Character Template",
];
pub(crate) const FORCE_POINT_KEYS: &[&str] =
    &["force_points", "forcePoints", "Force Points", "Force_Points"];
pub(crate) const CHARACTER_POINT_KEYS: &[&str] = &[
    "character_points",
    "characterPoints",
    "Character Points",
    "Character_Points",
];
pub(crate) const DARK_SIDE_POINT_KEYS: &[&str] = &[
    "dark_side_points",
    "darkSidePoints",
    "Dark Side Points",
    "Dark_Side_Points",
];
pub(crate) const CREDIT_KEYS: &[&str] = &["credits", "Credits", "money"];
pub(crate) const FORCE_SENSITIVE_KEYS: &[&str] = &[
    "force_sensitive",
    "forceSensitive",
    "Force Sensitive",
    "Force_Sensitive",
];
pub(crate) const EQUIPMENT_KEYS: &[&str] = &["equipment", "Equipment"];

/// Candidate keys for an attribute, in priority order.
pub(crate) fn attribute_keys(attribute: Attribute) -> [String; 7] {
    let name = attribute.name();
    let alias = attribute.alias();
    [
        name.to_string(),
        attribute.label().to_string(),
        name.to_uppercase(),
        alias.to_string(),
        capitalize(alias),
        alias.to_uppercase(),
        format!("{} Dice", attribute.label()),
    ]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A non-empty raw value read from a sheet.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Field<'a> {
    Text(&'a str),
    Number(f64),
    Flag(bool),
    Items(Vec<String>),
}

impl Field<'_> {
    /// Render the value for diagnostics.
    fn describe(&self) -> String {
        match self {
            Self::Text(s) => (*s).to_string(),
            Self::Number(n) => n.to_string(),
            Self::Flag(b) => b.to_string(),
            Self::Items(items) => format!("[{}]", items.join(", ")),
        }
    }

    /// Integral, non-negative numbers as `u32`.
    fn as_count(&self) -> Option<u32> {
        match self {
            Self::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX) => {
                Some(*n as u32)
            }
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Something that can be probed by key for raw values.
pub(crate) trait FieldSource {
    /// The value under `key`, or `None` if absent or empty.
    fn field(&self, key: &str) -> Option<Field<'_>>;

    /// The first non-empty value among `keys`.
    fn first<'k, K>(&self, keys: &'k [K]) -> Option<(&'k str, Field<'_>)>
    where
        K: AsRef<str>,
    {
        keys.iter()
            .find_map(|k| self.field(k.as_ref()).map(|f| (k.as_ref(), f)))
    }
}

/// Resolves fields against their defaults, recording every fallback.
#[derive(Debug)]
pub(crate) struct Resolver<'a> {
    defaults: &'a CharacterDefaults,
    taxonomy: &'a SkillTaxonomy,
    pub(crate) defaulted: Vec<DefaultedField>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(defaults: &'a CharacterDefaults, taxonomy: &'a SkillTaxonomy) -> Self {
        Self {
            defaults,
            taxonomy,
            defaulted: Vec::new(),
        }
    }

    pub(crate) fn defaults(&self) -> &CharacterDefaults {
        self.defaults
    }

    pub(crate) fn taxonomy(&self) -> &SkillTaxonomy {
        self.taxonomy
    }

    /// Record that `field` fell back to `value`.
    pub(crate) fn note(&mut self, field: &str, reason: DefaultReason, value: impl ToString) {
        tracing::debug!(field, ?reason, "field defaulted");
        self.defaulted.push(DefaultedField {
            field: field.to_string(),
            reason,
            value: value.to_string(),
        });
    }

    /// A text field such as name or template, defaulting to "Unknown".
    pub(crate) fn label(&mut self, src: &impl FieldSource, keys: &[&str], field: &str) -> String {
        match src.first(keys) {
            Some((_, Field::Text(s))) => s.trim().to_string(),
            Some((_, Field::Number(n))) => n.to_string(),
            Some((_, other)) => {
                self.note(field, DefaultReason::Unreadable(other.describe()), UNKNOWN);
                UNKNOWN.to_string()
            }
            None => {
                self.note(field, DefaultReason::Missing, UNKNOWN);
                UNKNOWN.to_string()
            }
        }
    }

    /// Normalize a dice value, defaulting to `2D`.
    pub(crate) fn dice(&mut self, field: &str, value: &Field<'_>) -> DiceCode {
        let parsed = match value {
            Field::Text(s) => try_normalize_dice_code(s),
            Field::Number(n) if n.fract() == 0.0 && *n >= 0.0 => {
                try_normalize_dice_code(&format!("{n}"))
            }
            _ => None,
        };
        parsed.unwrap_or_else(|| {
            tracing::warn!(field, value = %value.describe(), "unreadable dice code");
            self.note(
                field,
                DefaultReason::Unreadable(value.describe()),
                DiceCode::DEFAULT,
            );
            DiceCode::DEFAULT
        })
    }

    /// All six attributes, each probed over its candidate keys.
    pub(crate) fn attributes(&mut self, src: &impl FieldSource) -> BTreeMap<Attribute, DiceCode> {
        Attribute::ALL
            .into_iter()
            .map(|attribute| {
                let keys = attribute_keys(attribute);
                let code = match src.first(&keys[..]) {
                    Some((_, value)) => self.dice(attribute.name(), &value),
                    None => {
                        self.note(attribute.name(), DefaultReason::Missing, DiceCode::DEFAULT);
                        DiceCode::DEFAULT
                    }
                };
                (attribute, code)
            })
            .collect()
    }

    /// Skills from `(key, value)` pairs. Keys outside the taxonomy are dropped.
    pub(crate) fn skills<'v>(
        &mut self,
        entries: impl IntoIterator<Item = (&'v str, Field<'v>)>,
    ) -> BTreeMap<String, DiceCode> {
        let mut skills = BTreeMap::new();
        for (key, value) in entries {
            let name = self.taxonomy.normalize_skill(key);
            if !self.taxonomy.is_recognized(&name) {
                continue;
            }
            let code = self.dice(&name, &value);
            skills.insert(name, code);
        }
        skills
    }

    /// A non-negative count, defaulting on missing or unreadable values.
    pub(crate) fn count(
        &mut self,
        src: &impl FieldSource,
        keys: &[&str],
        field: &str,
        default: u32,
    ) -> u32 {
        match src.first(keys) {
            Some((_, value)) => value.as_count().unwrap_or_else(|| {
                self.note(field, DefaultReason::Unreadable(value.describe()), default);
                default
            }),
            None => {
                self.note(field, DefaultReason::Missing, default);
                default
            }
        }
    }

    /// A yes/no flag. Missing means false.
    pub(crate) fn flag(&self, src: &impl FieldSource, keys: &[&str]) -> bool {
        match src.first(keys) {
            Some((_, Field::Flag(b))) => b,
            Some((_, Field::Number(n))) => n != 0.0,
            Some((_, Field::Text(s))) => parse_flag(s),
            Some((_, Field::Items(_))) | None => false,
        }
    }

    /// A list of items given either as a list or a comma-separated string.
    pub(crate) fn items(&self, src: &impl FieldSource, keys: &[&str]) -> Vec<String> {
        match src.first(keys) {
            Some((_, Field::Items(items))) => items,
            Some((_, Field::Text(s))) => split_items(s),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct MapSource(HashMap<&'static str, &'static str>);

    impl FieldSource for MapSource {
        fn field(&self, key: &str) -> Option<Field<'_>> {
            self.0
                .get(key)
                .filter(|v| !v.trim().is_empty())
                .map(|v| Field::Text(*v))
        }
    }

    fn source(pairs: &[(&'static str, &'static str)]) -> MapSource {
        MapSource(pairs.iter().copied().collect())
    }

    #[test]
    fn attribute_key_order() {
        let keys = attribute_keys(Attribute::Dexterity);
        assert_eq!(
            keys,
            ["dexterity", "Dexterity", "DEXTERITY", "dex", "Dex", "DEX", "Dexterity Dice"]
                .map(String::from)
        );
    }

    #[test]
    fn first_key_wins() {
        let src = source(&[("DEX", "4D"), ("dexterity", "3D+1")]);
        let defaults = CharacterDefaults::default();
        let mut r = Resolver::new(&defaults, SkillTaxonomy::standard());
        let attrs = r.attributes(&src);
        assert_eq!(attrs[&Attribute::Dexterity], DiceCode::new(3, 1));
    }

    #[test]
    fn empty_values_fall_through() {
        let src = source(&[("Dexterity", "  "), ("dex", "4D")]);
        let defaults = CharacterDefaults::default();
        let mut r = Resolver::new(&defaults, SkillTaxonomy::standard());
        let attrs = r.attributes(&src);
        assert_eq!(attrs[&Attribute::Dexterity], DiceCode::new(4, 0));
    }

    #[test]
    fn missing_attributes_are_defaulted_and_recorded() {
        let src = source(&[("Strength", "3D")]);
        let defaults = CharacterDefaults::default();
        let mut r = Resolver::new(&defaults, SkillTaxonomy::standard());
        let attrs = r.attributes(&src);
        assert_eq!(attrs.len(), 6);
        assert_eq!(attrs[&Attribute::Technical], DiceCode::DEFAULT);
        assert_eq!(r.defaulted.len(), 5);
        assert!(r.defaulted.iter().all(|d| d.reason == DefaultReason::Missing));
    }

    #[test]
    fn counts_coerce_to_defaults() {
        let src = source(&[("forcePoints", "3"), ("Credits", "lots")]);
        let defaults = CharacterDefaults::default();
        let mut r = Resolver::new(&defaults, SkillTaxonomy::standard());
        assert_eq!(r.count(&src, FORCE_POINT_KEYS, "force_points", 1), 3);
        assert_eq!(r.count(&src, CREDIT_KEYS, "credits", 1000), 1000);
        assert_eq!(r.count(&src, DARK_SIDE_POINT_KEYS, "dark_side_points", 0), 0);
        assert_eq!(
            r.defaulted[0].reason,
            DefaultReason::Unreadable("lots".to_string())
        );
    }

    #[test]
    fn negative_counts_are_rejected() {
        let src = source(&[("credits", "-50")]);
        let defaults = CharacterDefaults::default();
        let mut r = Resolver::new(&defaults, SkillTaxonomy::standard());
        assert_eq!(r.count(&src, CREDIT_KEYS, "credits", 1000), 1000);
    }

    #[test]
    fn numbers_as_counts() {
        assert_eq!(Field::Number(4.0).as_count(), Some(4));
        assert_eq!(Field::Number(4.5).as_count(), None);
        assert_eq!(Field::Number(-1.0).as_count(), None);
        assert_eq!(Field::Flag(true).as_count(), None);
    }

    #[test]
    fn skills_drop_unknown_keys() {
        let defaults = CharacterDefaults::default();
        let mut r = Resolver::new(&defaults, SkillTaxonomy::standard());
        let skills = r.skills([
            ("Blaster", Field::Text("5D")),
            ("Lightsabre", Field::Text("4D+1")),
            ("Underwater Basketry", Field::Text("3D")),
        ]);
        assert_eq!(skills.len(), 2);
        assert_eq!(skills["blaster"], DiceCode::new(5, 0));
        assert_eq!(skills["lightsaber"], DiceCode::new(4, 1));
    }

    #[test]
    fn flags_and_items() {
        let src = source(&[("Force Sensitive", "Yes"), ("Equipment", "Blaster, Comlink")]);
        let defaults = CharacterDefaults::default();
        let r = Resolver::new(&defaults, SkillTaxonomy::standard());
        assert!(r.flag(&src, FORCE_SENSITIVE_KEYS));
        assert_eq!(r.items(&src, EQUIPMENT_KEYS), vec!["Blaster", "Comlink"]);
    }
}

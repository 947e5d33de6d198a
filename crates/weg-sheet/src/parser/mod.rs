//! Sheet parsing: format selection and the three strategies.
//!
//! Every strategy converges on the same normalization routines, so a sheet
//! reads the same whether it arrives as JSON, CSV or free text.

mod csv;
mod json;
mod text;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::config::ParserConfig;
use crate::error::{ParseError, SheetResult};
use crate::fields::{
    CHARACTER_POINT_KEYS, CREDIT_KEYS, DARK_SIDE_POINT_KEYS, EQUIPMENT_KEYS, FORCE_POINT_KEYS,
    FORCE_SENSITIVE_KEYS, Field, FieldSource, NAME_KEYS, Resolver, TEMPLATE_KEYS,
};
use crate::format::FormatHint;
use crate::taxonomy::SkillTaxonomy;

/// Why a field fell back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultReason {
    /// The sheet has no value for the field.
    Missing,
    /// The sheet has a value that could not be read.
    Unreadable(String),
}

/// A field that was filled with its default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultedField {
    /// Field name (e.g. "dexterity", "credits").
    pub field: String,
    /// Why the default was used.
    pub reason: DefaultReason,
    /// The default that was stored.
    pub value: String,
}

impl std::fmt::Display for DefaultedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            DefaultReason::Missing => {
                write!(f, "{} missing, defaulted to {}", self.field, self.value)
            }
            DefaultReason::Unreadable(raw) => write!(
                f,
                "{} value '{}' unreadable, defaulted to {}",
                self.field, raw, self.value
            ),
        }
    }
}

/// A successfully parsed sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSheet {
    /// The canonical character.
    pub character: Character,
    /// Fields that fell back to defaults, in resolution order.
    pub defaulted: Vec<DefaultedField>,
    /// The strategy that was used.
    pub format: FormatHint,
}

/// Parses character sheets against a skill taxonomy.
#[derive(Debug, Clone)]
pub struct SheetParser<'t> {
    taxonomy: &'t SkillTaxonomy,
    config: ParserConfig,
}

impl Default for SheetParser<'static> {
    fn default() -> Self {
        Self::new(SkillTaxonomy::standard())
    }
}

impl<'t> SheetParser<'t> {
    /// Create a parser over the given taxonomy with default configuration.
    pub fn new(taxonomy: &'t SkillTaxonomy) -> Self {
        Self {
            taxonomy,
            config: ParserConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// The taxonomy skills are checked against.
    pub fn taxonomy(&self) -> &'t SkillTaxonomy {
        self.taxonomy
    }

    /// Parse raw bytes, e.g. an uploaded attachment.
    pub fn parse_bytes(&self, content: &[u8], hint: FormatHint) -> SheetResult<ParsedSheet> {
        self.check_size(content.len())?;
        let text = std::str::from_utf8(content).map_err(|_| ParseError::InvalidUtf8)?;
        self.parse(text, hint)
    }

    /// Parse sheet text with the given format hint.
    pub fn parse(&self, content: &str, hint: FormatHint) -> SheetResult<ParsedSheet> {
        self.check_size(content.len())?;
        let content = content.trim_start_matches('\u{feff}');
        if content.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let format = hint.resolve(content);
        tracing::debug!(%hint, %format, bytes = content.len(), "parsing character sheet");

        let mut resolver = Resolver::new(&self.config.defaults, self.taxonomy);
        let character = match format {
            FormatHint::Json => json::parse(content, &mut resolver)?,
            FormatHint::Csv => csv::parse(content, &mut resolver)?,
            FormatHint::Text | FormatHint::Auto => text::parse(content, &mut resolver),
        };

        Ok(ParsedSheet {
            character,
            defaulted: resolver.defaulted,
            format,
        })
    }

    /// Parse a file's contents, picking the format from its name.
    pub fn parse_file(&self, content: &str, filename: &str) -> SheetResult<ParsedSheet> {
        self.parse(content, FormatHint::from_filename(filename))
    }

    fn check_size(&self, size: usize) -> SheetResult<()> {
        match self.config.max_input_bytes {
            Some(limit) if size > limit => Err(ParseError::TooLarge { size, limit }),
            _ => Ok(()),
        }
    }
}

/// Parse sheet text with the standard taxonomy and default configuration.
pub fn parse(content: &str, hint: FormatHint) -> SheetResult<Character> {
    SheetParser::default()
        .parse(content, hint)
        .map(|parsed| parsed.character)
}

/// Build a character from key-probed sources.
///
/// `fields` holds the top-level fields, `attributes` the attribute values
/// and `skills` every candidate skill entry. For JSON these are separate
/// objects; for CSV all three are the same row.
pub(crate) fn build_character<'v>(
    resolver: &mut Resolver<'_>,
    fields: &impl FieldSource,
    attributes: &impl FieldSource,
    skills: impl IntoIterator<Item = (&'v str, Field<'v>)>,
) -> Character {
    let defaults = *resolver.defaults();

    let name = resolver.label(fields, NAME_KEYS, "name");
    let template = resolver.label(fields, TEMPLATE_KEYS, "template");
    let attributes = resolver.attributes(attributes);
    let skills = resolver.skills(skills);

    let force_points =
        resolver.count(fields, FORCE_POINT_KEYS, "force_points", defaults.force_points);
    let character_points = resolver.count(
        fields,
        CHARACTER_POINT_KEYS,
        "character_points",
        defaults.character_points,
    );
    let dark_side_points = resolver.count(fields, DARK_SIDE_POINT_KEYS, "dark_side_points", 0);
    let credits = resolver.count(fields, CREDIT_KEYS, "credits", defaults.credits);

    Character {
        name,
        template,
        attributes,
        skills,
        force_points,
        character_points,
        dark_side_points,
        force_sensitive: resolver.flag(fields, FORCE_SENSITIVE_KEYS),
        equipment: resolver.items(fields, EQUIPMENT_KEYS),
        credits,
    }
}

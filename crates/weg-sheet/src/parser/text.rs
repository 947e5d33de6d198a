//! Free-text sheets, read with label patterns.
//!
//! Text never fails to parse: anything not found falls back to its default.
//! Force sensitivity is a plain substring check and will also fire on
//! narrative text such as "was never force sensitive".

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use weg_core::{Attribute, DiceCode};

use crate::character::{Character, UNKNOWN};
use crate::fields::{Field, Resolver};
use crate::parser::DefaultReason;

const DICE: &str = r"(\d+\s*D(?:\s*\+\s*\d+)*)";

static NAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:character[ \t]+name|name|character)\b[ \t]*[:=\-][ \t]*(\S.*)")
});
static TEMPLATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\btemplate\b[ \t]*:?[ \t]*([^\s:].*)"));
static ATTRIBUTES: LazyLock<Vec<(Attribute, Regex)>> = LazyLock::new(|| {
    Attribute::ALL
        .into_iter()
        .map(|a| {
            let pattern = format!(
                r"(?i)\b(?:{}|{})\b[ \t]*:?[ \t]*{DICE}",
                a.name(),
                a.alias()
            );
            (a, compile(&pattern))
        })
        .collect()
});
static SKILL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)([A-Za-z][\w'-]*(?:[ \t]+[A-Za-z][\w'-]*)*)[ \t]*:?[ \t]*(\d+D(?:\+\d+)*)")
});
static FORCE_POINTS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bforce[ \t]+points?[ \t]*:?[ \t]*(\d+)"));
static CHARACTER_POINTS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bcharacter[ \t]+points?[ \t]*:?[ \t]*(\d+)"));
static DARK_SIDE_POINTS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bdark[ \t]+side[ \t]+points?[ \t]*:?[ \t]*(\d+)"));
static CREDITS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bcredits?[ \t]*:?[ \t]*(\d+)"));
static FORCE_SENSITIVE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)force\s+sensitive"));
static EQUIPMENT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)\bequipment\b[ \t]*:?[ \t]*(.*?)(?:\n[ \t]*\r?\n|\z)"));

// Patterns are literals covered by tests.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("sheet pattern is valid")
}

pub(super) fn parse(text: &str, resolver: &mut Resolver<'_>) -> Character {
    let defaults = *resolver.defaults();

    let name = capture_label(&NAME, text, "name", resolver);
    let template = capture_label(&TEMPLATE, text, "template", resolver);

    let attributes: BTreeMap<Attribute, DiceCode> = ATTRIBUTES
        .iter()
        .map(|(attribute, re)| {
            let code = match re.captures(text).and_then(|c| c.get(1)) {
                Some(m) => resolver.dice(attribute.name(), &Field::Text(m.as_str())),
                None => {
                    resolver.note(attribute.name(), DefaultReason::Missing, DiceCode::DEFAULT);
                    DiceCode::DEFAULT
                }
            };
            (*attribute, code)
        })
        .collect();

    let skills = scan_skills(text, resolver);

    let force_points = capture_count(
        &FORCE_POINTS,
        text,
        "force_points",
        defaults.force_points,
        resolver,
    );
    let character_points = capture_count(
        &CHARACTER_POINTS,
        text,
        "character_points",
        defaults.character_points,
        resolver,
    );
    let dark_side_points =
        capture_count(&DARK_SIDE_POINTS, text, "dark_side_points", 0, resolver);
    let credits = capture_count(&CREDITS, text, "credits", defaults.credits, resolver);

    Character {
        name,
        template,
        attributes,
        skills,
        force_points,
        character_points,
        dark_side_points,
        force_sensitive: FORCE_SENSITIVE.is_match(text),
        equipment: capture_equipment(text),
        credits,
    }
}

fn capture_label(re: &Regex, text: &str, field: &str, resolver: &mut Resolver<'_>) -> String {
    let value = re
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty());
    match value {
        Some(v) => v.to_string(),
        None => {
            resolver.note(field, DefaultReason::Missing, UNKNOWN);
            UNKNOWN.to_string()
        }
    }
}

fn capture_count(
    re: &Regex,
    text: &str,
    field: &str,
    default: u32,
    resolver: &mut Resolver<'_>,
) -> u32 {
    let Some(raw) = re.captures(text).and_then(|c| c.get(1)) else {
        resolver.note(field, DefaultReason::Missing, default);
        return default;
    };
    raw.as_str().parse().unwrap_or_else(|_| {
        resolver.note(
            field,
            DefaultReason::Unreadable(raw.as_str().to_string()),
            default,
        );
        default
    })
}

/// Scan for `word(s) dice-code` pairs and keep those naming a known skill.
///
/// The whole capture must name the skill; "Heavy Blaster 5D+1" is a weapon
/// line and is dropped.
fn scan_skills(text: &str, resolver: &mut Resolver<'_>) -> BTreeMap<String, DiceCode> {
    let mut skills = BTreeMap::new();
    for caps in SKILL.captures_iter(text) {
        let (Some(label), Some(code)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let name = resolver.taxonomy().normalize_skill(label.as_str());
        if !resolver.taxonomy().is_recognized(&name) {
            continue;
        }
        let code = resolver.dice(&name, &Field::Text(code.as_str()));
        skills.insert(name, code);
    }
    skills
}

fn capture_equipment(text: &str) -> Vec<String> {
    let Some(block) = EQUIPMENT.captures(text).and_then(|c| c.get(1)) else {
        return Vec::new();
    };
    block
        .as_str()
        .split([',', '\n'])
        .map(|item| item.trim().trim_start_matches(['-', '*']).trim())
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

//! JSON sheets.
//!
//! Attributes live under `attributes` (or `stats`) and skills under
//! `skills`; everything else is a top-level key.

use serde_json::{Map, Value};

use crate::character::Character;
use crate::error::{ParseError, SheetResult};
use crate::fields::{Field, FieldSource, Resolver};

use super::build_character;

impl FieldSource for Map<String, Value> {
    fn field(&self, key: &str) -> Option<Field<'_>> {
        json_field(self.get(key)?)
    }
}

fn json_field(value: &Value) -> Option<Field<'_>> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(Field::Text(s)),
        Value::Number(n) => n.as_f64().map(Field::Number),
        Value::Bool(b) => Some(Field::Flag(*b)),
        Value::Array(items) => Some(Field::Items(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect(),
        )),
        _ => None,
    }
}

pub(super) fn parse(content: &str, resolver: &mut Resolver<'_>) -> SheetResult<Character> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Object(data) = value else {
        return Err(ParseError::NotAnObject);
    };

    let empty = Map::new();
    let attributes = ["attributes", "stats"]
        .iter()
        .find_map(|key| data.get(*key).and_then(Value::as_object))
        .unwrap_or(&empty);
    let skills = data
        .get("skills")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let skill_entries = skills
        .iter()
        .filter_map(|(key, value)| json_field(value).map(|field| (key.as_str(), field)));

    Ok(build_character(resolver, &data, attributes, skill_entries))
}

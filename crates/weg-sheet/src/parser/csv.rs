//! CSV sheets: a header row and one data row.
//!
//! Attributes, skills and every other field are columns of the same row.

use crate::character::Character;
use crate::error::{ParseError, SheetResult};
use crate::fields::{Field, FieldSource, Resolver};
use crate::format::csv_delimiter;

use super::build_character;

/// One CSV data row paired with its (trimmed) headers.
struct Row {
    cells: Vec<(String, String)>,
}

impl FieldSource for Row {
    fn field(&self, key: &str) -> Option<Field<'_>> {
        self.cells
            .iter()
            .find(|(header, _)| header == key)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map(Field::Text)
    }
}

pub(super) fn parse(content: &str, resolver: &mut Resolver<'_>) -> SheetResult<Character> {
    let delimiter = csv_delimiter(content);
    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let record = reader.records().next().ok_or(ParseError::NoRows)??;

    let row = Row {
        cells: headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.trim().to_string(), v.to_string()))
            .collect(),
    };
    tracing::debug!(
        delimiter = %char::from(delimiter),
        columns = row.cells.len(),
        "read CSV sheet row"
    );

    let skill_entries = row
        .cells
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(header, value)| (header.as_str(), Field::Text(value.trim())));

    Ok(build_character(resolver, &row, &row, skill_entries))
}

//! Sheet format selection.

use serde::{Deserialize, Serialize};

/// Which parsing strategy to use for a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatHint {
    /// A JSON object.
    Json,
    /// A CSV header row plus one data row.
    Csv,
    /// Free-form text.
    Text,
    /// Sniff the content.
    #[default]
    Auto,
}

impl FormatHint {
    /// Pick a format from a file name's extension.
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".json") {
            Self::Json
        } else if lower.ends_with(".csv") {
            Self::Csv
        } else if lower.ends_with(".txt") || lower.ends_with(".text") {
            Self::Text
        } else {
            Self::Auto
        }
    }

    /// Parse a user-supplied format name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "text" | "txt" => Some(Self::Text),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// Resolve `Auto` by sniffing the content; other hints are returned as-is.
    pub fn resolve(self, content: &str) -> Self {
        match self {
            Self::Auto => sniff(content),
            other => other,
        }
    }
}

impl std::fmt::Display for FormatHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Text => write!(f, "text"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Guess the format of sheet content.
///
/// Braces at both ends mean JSON; a comma plus a newline means CSV;
/// everything else is free text.
pub fn sniff(content: &str) -> FormatHint {
    let trimmed = content.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        FormatHint::Json
    } else if trimmed.contains(',') && trimmed.contains('\n') {
        FormatHint::Csv
    } else {
        FormatHint::Text
    }
}

/// The CSV delimiter for raw content: `;` when semicolons outnumber commas.
pub fn csv_delimiter(content: &str) -> u8 {
    let semicolons = content.matches(';').count();
    let commas = content.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_filename() {
        assert_eq!(FormatHint::from_filename("han.JSON"), FormatHint::Json);
        assert_eq!(FormatHint::from_filename("sheet.csv"), FormatHint::Csv);
        assert_eq!(FormatHint::from_filename("notes.txt"), FormatHint::Text);
        assert_eq!(FormatHint::from_filename("notes.text"), FormatHint::Text);
        assert_eq!(FormatHint::from_filename("upload.bin"), FormatHint::Auto);
    }

    #[test]
    fn sniff_json() {
        assert_eq!(sniff("  {\"name\": \"Han\"}\n"), FormatHint::Json);
    }

    #[test]
    fn sniff_csv_needs_comma_and_newline() {
        assert_eq!(sniff("Name,Template\nHan,Smuggler"), FormatHint::Csv);
        assert_eq!(sniff("Name: Han, the smuggler"), FormatHint::Text);
    }

    #[test]
    fn sniff_text() {
        assert_eq!(sniff("Name: Leia\nTemplate: Senator"), FormatHint::Text);
    }

    #[test]
    fn resolve_keeps_explicit_hint() {
        assert_eq!(FormatHint::Text.resolve("{}"), FormatHint::Text);
        assert_eq!(FormatHint::Auto.resolve("{}"), FormatHint::Json);
    }

    #[test]
    fn delimiter_detection() {
        assert_eq!(csv_delimiter("a;b;c\n1;2,5;3"), b';');
        assert_eq!(csv_delimiter("a,b\n1;2"), b',');
        assert_eq!(csv_delimiter("a;b\n1,2"), b',');
    }

    #[test]
    fn parse_names() {
        assert_eq!(FormatHint::parse("JSON"), Some(FormatHint::Json));
        assert_eq!(FormatHint::parse("txt"), Some(FormatHint::Text));
        assert_eq!(FormatHint::parse("xml"), None);
        assert_eq!(FormatHint::Csv.to_string(), "csv");
    }
}

pub mod damage;
pub mod difficulties;
pub mod force;
pub mod opposed;
pub mod parse;
pub mod roll;
pub mod skill;

use std::path::Path;

use colored::Colorize;
use weg_dice::{DifficultyOutcome, RollResult};
use weg_sheet::{FormatHint, ParsedSheet};

use crate::config::Settings;

/// Read and parse a sheet, picking the format from `format` or the file name.
fn load_sheet(settings: &Settings, path: &Path, format: Option<&str>) -> Result<ParsedSheet, String> {
    let hint = match format {
        Some(name) => FormatHint::parse(name).ok_or_else(|| format!("unknown format: {name}"))?,
        None => FormatHint::from_filename(&path.to_string_lossy()),
    };
    tracing::debug!(path = %path.display(), %hint, "loading sheet");
    let bytes = std::fs::read(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    settings
        .parser()
        .parse_bytes(&bytes, hint)
        .map_err(|e| format!("{}: {e}", path.display()))
}

/// Fail with the roll's error message if it could not be made.
fn ensure_rolled(result: &RollResult) -> Result<(), String> {
    match &result.error {
        Some(error) => Err(error.clone()),
        None => Ok(()),
    }
}

/// Print one roll: breakdown, total, difficulty and complications.
fn print_roll(label: &str, result: &RollResult) {
    println!("  {}  {}", label.bold(), result.breakdown);
    println!("  Total: {}", result.total.to_string().bold());
    if let Some(outcome) = &result.difficulty {
        print_difficulty(outcome);
    }
    for note in &result.complications {
        println!("  {} {}", "!".yellow().bold(), note.yellow());
    }
}

fn print_difficulty(outcome: &DifficultyOutcome) {
    let (Some(target), Some(success), Some(margin)) = (outcome.target, outcome.success, outcome.margin)
    else {
        let error = outcome.error.as_deref().unwrap_or("unknown difficulty");
        println!("  {} {}", "Difficulty:".dimmed(), error.yellow());
        return;
    };
    let verdict = if success {
        "success".green().bold()
    } else {
        "failure".red().bold()
    };
    println!(
        "  {} {} ({target}): {verdict}, margin {margin:+}",
        "Difficulty:".dimmed(),
        outcome.name
    );
}

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use weg_core::Attribute;
use weg_sheet::{Character, ParsedSheet, SkillTaxonomy, validate_with};

use crate::config::Settings;

pub fn run(settings: &Settings, file: &Path, format: Option<&str>, json: bool) -> Result<(), String> {
    let parsed = super::load_sheet(settings, file, format)?;
    let warnings: Vec<String> = validate_with(&parsed.character, SkillTaxonomy::standard())
        .iter()
        .map(ToString::to_string)
        .collect();

    if json {
        return print_json(&parsed, &warnings);
    }

    print_character(&parsed.character, SkillTaxonomy::standard());

    if !parsed.defaulted.is_empty() {
        println!();
        println!("  {}", "Defaults:".dimmed());
        for field in &parsed.defaulted {
            println!("    {}", field.to_string().dimmed());
        }
    }
    if !warnings.is_empty() {
        println!();
        for warning in &warnings {
            println!("  {} {}", "warning:".yellow().bold(), warning);
        }
    }
    println!();
    println!("  {}", format!("parsed as {}", parsed.format).dimmed());
    Ok(())
}

fn print_json(parsed: &ParsedSheet, warnings: &[String]) -> Result<(), String> {
    let defaulted: Vec<String> = parsed.defaulted.iter().map(ToString::to_string).collect();
    let doc = serde_json::json!({
        "character": parsed.character,
        "format": parsed.format,
        "defaulted": defaulted,
        "warnings": warnings,
    });
    let out = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}

fn print_character(character: &Character, taxonomy: &SkillTaxonomy) {
    println!("  {}", character.name.bold().underline());
    println!("  {}", character.template.dimmed());
    if character.force_sensitive {
        println!("  {}", "Force sensitive".italic());
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attribute", "Code", "Skills"]);
    for attribute in Attribute::ALL {
        let skills: Vec<String> = character
            .skills
            .iter()
            .filter(|(name, _)| taxonomy.attribute_for_skill(name) == Some(attribute))
            .map(|(name, code)| format!("{name} {code}"))
            .collect();
        table.add_row(vec![
            attribute.label().to_string(),
            character.attribute(attribute).to_string(),
            skills.join(", "),
        ]);
    }

    let other: Vec<String> = character
        .skills
        .iter()
        .filter(|(name, _)| taxonomy.attribute_for_skill(name).is_none())
        .map(|(name, code)| format!("{name} {code}"))
        .collect();
    if !other.is_empty() {
        table.add_row(vec!["Other".to_string(), String::new(), other.join(", ")]);
    }
    println!("{table}");
    println!();

    println!(
        "  Force Points: {}  Character Points: {}  Dark Side Points: {}",
        character.force_points, character.character_points, character.dark_side_points
    );
    println!("  Credits: {}", character.credits);
    if !character.equipment.is_empty() {
        println!("  Equipment: {}", character.equipment.join(", "));
    }
}

use std::path::Path;

use colored::Colorize;
use weg_sheet::{RollTargetKind, SkillTaxonomy, UntrainedPolicy, find_roll_target};

use crate::config::Settings;

pub fn run(
    settings: &Settings,
    sheet: &Path,
    name: &str,
    difficulty: Option<&str>,
    modifier: i32,
    penalize_untrained: bool,
) -> Result<(), String> {
    let parsed = super::load_sheet(settings, sheet, None)?;
    let character = &parsed.character;
    let policy = if penalize_untrained {
        UntrainedPolicy::HOUSE_RULE
    } else {
        UntrainedPolicy::default()
    };

    let target = find_roll_target(character, SkillTaxonomy::standard(), name, policy)
        .ok_or_else(|| format!("{} has no skill or attribute named '{name}'", character.name))?;

    let code = target.code.to_string();
    let mut rng = settings.rng();
    let result = settings.roller().roll(&mut rng, &code, modifier, difficulty);
    super::ensure_rolled(&result)?;

    println!("  {} rolls {}", character.name.bold(), target.label);
    if target.kind == RollTargetKind::Untrained {
        println!("  {}", "untrained, rolled from the governing attribute".dimmed());
    }
    super::print_roll(&code, &result);
    Ok(())
}

use comfy_table::{ContentArrangement, Table};
use weg_dice::{DifficultyOutcome, RollResult};

use crate::config::Settings;

pub fn run(
    settings: &Settings,
    code: &str,
    modifier: i32,
    difficulty: Option<&str>,
    count: usize,
) -> Result<(), String> {
    let roller = settings.roller();
    let mut rng = settings.rng();

    if count <= 1 {
        let result = roller.roll(&mut rng, code, modifier, difficulty);
        super::ensure_rolled(&result)?;
        super::print_roll(code, &result);
        return Ok(());
    }

    let results: Vec<RollResult> = (0..count)
        .map(|_| roller.roll(&mut rng, code, modifier, difficulty))
        .collect();
    if let Some(first) = results.first() {
        super::ensure_rolled(first)?;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Breakdown", "Total", "Difficulty", "Complications"]);
    for (i, result) in results.iter().enumerate() {
        let complications = if result.complications.is_empty() {
            "—".to_string()
        } else {
            result.complications.join("; ")
        };
        table.add_row(vec![
            (i + 1).to_string(),
            result.breakdown.clone(),
            result.total.to_string(),
            outcome_cell(result.difficulty.as_ref()),
            complications,
        ]);
    }
    println!("{table}");
    println!();

    let sum: i64 = results.iter().map(|r| i64::from(r.total)).sum();
    println!("  {count} rolls of {code}, sum {sum}");
    match results.first().and_then(|r| r.difficulty.as_ref()) {
        Some(DifficultyOutcome {
            name,
            target: Some(target),
            ..
        }) => {
            let passed = results.iter().filter(|r| r.success() == Some(true)).count();
            println!("  {name} ({target}): {passed} of {count} succeeded");
        }
        Some(DifficultyOutcome {
            error: Some(error), ..
        }) => println!("  {error}"),
        _ => {}
    }
    Ok(())
}

fn outcome_cell(outcome: Option<&DifficultyOutcome>) -> String {
    let Some(outcome) = outcome else {
        return "—".to_string();
    };
    match (outcome.success, outcome.margin) {
        (Some(true), Some(margin)) => format!("success {margin:+}"),
        (Some(false), Some(margin)) => format!("failure {margin:+}"),
        _ => outcome.error.clone().unwrap_or_else(|| outcome.name.clone()),
    }
}

use colored::Colorize;
use weg_dice::Winner;

use crate::config::Settings;

pub fn run(
    settings: &Settings,
    first: &str,
    second: &str,
    first_modifier: i32,
    second_modifier: i32,
) -> Result<(), String> {
    let mut rng = settings.rng();
    let contest = settings
        .roller()
        .roll_opposed(&mut rng, first, second, first_modifier, second_modifier);
    super::ensure_rolled(&contest.first)?;
    super::ensure_rolled(&contest.second)?;

    super::print_roll(first, &contest.first);
    println!();
    super::print_roll(second, &contest.second);
    println!();

    match contest.winner {
        Winner::Tie => println!("  {}", "Tie".bold()),
        winner => {
            let code = if winner == Winner::First { first } else { second };
            println!(
                "  {} {} ({code}) by {}",
                "Winner:".bold(),
                winner.number(),
                contest.margin
            );
        }
    }
    Ok(())
}

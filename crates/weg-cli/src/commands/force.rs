use colored::Colorize;

use crate::config::Settings;

pub fn run(settings: &Settings, code: &str, difficulty: &str, temptation: bool) -> Result<(), String> {
    let mut rng = settings.rng();
    let power = settings
        .roller()
        .roll_force_power(&mut rng, code, difficulty, temptation);
    super::ensure_rolled(&power.roll)?;

    super::print_roll(code, &power.roll);
    if power.dark_side_temptation {
        println!("  {}", "Dark Side temptation rule in effect".dimmed());
    }
    Ok(())
}

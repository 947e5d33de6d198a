use colored::Colorize;

use crate::config::Settings;

pub fn run(settings: &Settings, code: &str, armor: i32) -> Result<(), String> {
    let mut rng = settings.rng();
    let damage = settings.roller().roll_damage(&mut rng, code, armor);
    super::ensure_rolled(&damage.roll)?;

    super::print_roll(code, &damage.roll);
    println!(
        "  {} {} raw, {} absorbed by armor {}",
        "Damage:".bold(),
        damage.raw_damage,
        damage.damage_absorbed,
        damage.armor_value
    );
    println!("  {} {}", "Final:".bold(), damage.final_damage.to_string().bold());
    Ok(())
}

//! CLI frontend for the WEG Star Wars sheet parser and dice engine.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use config::Settings;

#[derive(Parser)]
#[command(
    name = "weg",
    about = "WEG Star Wars character sheets and D6 dice",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a character sheet and show the canonical character
    Parse {
        /// Sheet file (.json, .csv or text)
        file: PathBuf,

        /// Force a format: json, csv, text or auto
        #[arg(short, long)]
        format: Option<String>,

        /// Print the character as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll a dice code such as 4D+2
    Roll {
        /// Dice code
        code: String,

        /// Flat modifier added to the total
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        modifier: i32,

        /// Difficulty tier or target number
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Number of times to roll
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Roll two codes against each other
    Opposed {
        /// First side's dice code
        first: String,

        /// Second side's dice code
        second: String,

        /// Modifier for the first side
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        first_modifier: i32,

        /// Modifier for the second side
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        second_modifier: i32,
    },

    /// Roll damage and subtract armor
    Damage {
        /// Damage dice code
        code: String,

        /// Armor value subtracted from the damage
        #[arg(short, long, default_value_t = 0)]
        armor: i32,
    },

    /// Roll a Force power
    Force {
        /// Force skill dice code
        code: String,

        /// Difficulty tier or target number
        #[arg(short, long, default_value = "moderate")]
        difficulty: String,

        /// Note Dark Side temptation on a failed roll with a wild 1
        #[arg(long)]
        temptation: bool,
    },

    /// Roll a character's skill or attribute from a sheet
    Skill {
        /// Sheet file (.json, .csv or text)
        sheet: PathBuf,

        /// Skill or attribute name (e.g. "space transports", dex)
        name: String,

        /// Difficulty tier or target number
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Flat modifier added to the total
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        modifier: i32,

        /// Take one die off untrained skills
        #[arg(long)]
        penalize_untrained: bool,
    },

    /// List difficulty tiers and their target numbers
    Difficulties,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let settings = cli.settings;

    let result = match cli.command {
        Commands::Parse { file, format, json } => {
            commands::parse::run(&settings, &file, format.as_deref(), json)
        }
        Commands::Roll {
            code,
            modifier,
            difficulty,
            count,
        } => commands::roll::run(&settings, &code, modifier, difficulty.as_deref(), count),
        Commands::Opposed {
            first,
            second,
            first_modifier,
            second_modifier,
        } => commands::opposed::run(&settings, &first, &second, first_modifier, second_modifier),
        Commands::Damage { code, armor } => commands::damage::run(&settings, &code, armor),
        Commands::Force {
            code,
            difficulty,
            temptation,
        } => commands::force::run(&settings, &code, &difficulty, temptation),
        Commands::Skill {
            sheet,
            name,
            difficulty,
            modifier,
            penalize_untrained,
        } => commands::skill::run(
            &settings,
            &sheet,
            &name,
            difficulty.as_deref(),
            modifier,
            penalize_untrained,
        ),
        Commands::Difficulties => {
            commands::difficulties::run();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! Settings shared by every command, from flags or the environment.

use clap::{ArgAction, Args};
use rand::SeedableRng;
use rand::rngs::StdRng;
use weg_dice::{DiceRoller, RollerConfig};
use weg_sheet::{DEFAULT_MAX_INPUT_BYTES, ParserConfig, SheetParser};

/// Dice limit applied unless overridden.
pub const DEFAULT_MAX_DICE: u32 = 20;

#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Roll one die of each roll as the exploding wild die
    #[arg(
        long,
        global = true,
        env = "WEG_USE_WILD_DIE",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub wild_die: bool,

    /// Maximum dice in a single roll (0 = unlimited)
    #[arg(long, global = true, env = "WEG_MAX_DICE", default_value_t = DEFAULT_MAX_DICE)]
    pub max_dice: u32,

    /// Maximum character sheet size in bytes
    #[arg(
        long,
        global = true,
        env = "WEG_MAX_FILE_SIZE",
        default_value_t = DEFAULT_MAX_INPUT_BYTES
    )]
    pub max_file_size: usize,

    /// RNG seed for reproducible rolls
    #[arg(long, global = true, env = "WEG_SEED")]
    pub seed: Option<u64>,
}

impl Settings {
    pub fn roller(&self) -> DiceRoller {
        let limit = (self.max_dice > 0).then_some(self.max_dice);
        DiceRoller::new(
            RollerConfig::default()
                .with_wild_die(self.wild_die)
                .with_max_dice(limit),
        )
    }

    pub fn parser(&self) -> SheetParser<'static> {
        SheetParser::default()
            .with_config(ParserConfig::default().with_max_input_bytes(Some(self.max_file_size)))
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

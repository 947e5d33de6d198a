//! Configuration for a dice roller.

/// Dice limit of a default roller.
pub const DEFAULT_MAX_DICE: u32 = 100;

/// Configuration for a [`DiceRoller`](crate::DiceRoller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollerConfig {
    /// Resolve one die of every roll as the exploding wild die.
    pub use_wild_die: bool,
    /// Reject codes with more dice than this (`None` = unlimited).
    pub max_dice: Option<u32>,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            use_wild_die: true,
            max_dice: Some(DEFAULT_MAX_DICE),
        }
    }
}

impl RollerConfig {
    /// Enable or disable the wild die.
    pub fn with_wild_die(mut self, enabled: bool) -> Self {
        self.use_wild_die = enabled;
        self
    }

    /// Set the dice limit; `None` lifts it.
    pub fn with_max_dice(mut self, limit: Option<u32>) -> Self {
        self.max_dice = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RollerConfig::default();
        assert!(cfg.use_wild_die);
        assert_eq!(cfg.max_dice, Some(DEFAULT_MAX_DICE));
    }

    #[test]
    fn limit_can_be_lifted() {
        assert_eq!(RollerConfig::default().with_max_dice(None).max_dice, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = RollerConfig::default()
            .with_wild_die(false)
            .with_max_dice(Some(20));
        assert!(!cfg.use_wild_die);
        assert_eq!(cfg.max_dice, Some(20));
    }
}

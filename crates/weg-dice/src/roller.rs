//! The dice roller and the rolls built on it.

use serde::{Deserialize, Serialize};

use crate::config::RollerConfig;
use crate::dice::wild::COMPLICATION;
use crate::dice::{DieSource, RollResult, RollSpec, WildDie, format_breakdown};
use crate::difficulty::check_difficulty;
use crate::error::{DiceError, DiceResult};

/// Note added to a failed Force power roll whose wild die showed 1.
pub const DARK_SIDE_TEMPTATION: &str =
    "Dark Side temptation - gain a Dark Side Point for easier success";

/// Rolls WEG dice codes.
///
/// The roller holds only configuration; faces come from the [`DieSource`]
/// passed to each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceRoller {
    config: RollerConfig,
}

impl DiceRoller {
    /// Create a roller with the given configuration.
    pub fn new(config: RollerConfig) -> Self {
        Self { config }
    }

    /// The roller's configuration.
    pub fn config(&self) -> &RollerConfig {
        &self.config
    }

    /// Roll a dice code, add `modifier`, and check against `difficulty`.
    ///
    /// Never fails: a bad code or an over-limit dice count produces a result
    /// with [`RollResult::error`] set.
    pub fn roll<S: DieSource + ?Sized>(
        &self,
        source: &mut S,
        code: &str,
        modifier: i32,
        difficulty: Option<&str>,
    ) -> RollResult {
        match self.try_roll(source, code, modifier, difficulty) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(code, error = %e, "roll rejected");
                RollResult::failed(code, e)
            }
        }
    }

    fn try_roll<S: DieSource + ?Sized>(
        &self,
        source: &mut S,
        code: &str,
        modifier: i32,
        difficulty: Option<&str>,
    ) -> DiceResult<RollResult> {
        let spec = RollSpec::parse(code)?;
        match self.config.max_dice {
            Some(limit) if spec.dice > limit => {
                return Err(DiceError::TooManyDice {
                    dice: spec.dice,
                    limit,
                });
            }
            _ => {}
        }
        let bonus = spec.bonus.saturating_add(modifier);

        let mut result = RollResult {
            dice_code: code.to_string(),
            bonus,
            ..RollResult::default()
        };

        if spec.dice > 0 {
            let ordinary = if self.config.use_wild_die {
                spec.dice - 1
            } else {
                spec.dice
            };
            result.individual_dice = (0..ordinary).map(|_| source.roll_d6()).collect();

            if self.config.use_wild_die {
                let wild = WildDie::roll(source);
                if wild.is_complication() {
                    result.complications.push(COMPLICATION.to_string());
                }
                result.individual_dice.push(wild.subtotal);
                result.wild_die_result = Some(wild.subtotal);
                result.wild_die_exploded = wild.exploded;
                result.wild_die_faces = wild.faces;
            }
        }

        let dice_total: i64 = result.individual_dice.iter().map(|&d| i64::from(d)).sum();
        let total = dice_total + i64::from(bonus);
        result.total = i32::try_from(total).unwrap_or(if total < 0 { i32::MIN } else { i32::MAX });
        result.breakdown = format_breakdown(
            &result.individual_dice,
            bonus,
            result.wild_die_result,
            result.wild_die_exploded,
        );
        result.difficulty = difficulty.map(|d| check_difficulty(result.total, d));

        tracing::debug!(
            code,
            total = result.total,
            exploded = result.wild_die_exploded,
            "rolled dice"
        );
        Ok(result)
    }

    /// Roll the same code `count` times.
    pub fn roll_multiple<S: DieSource + ?Sized>(
        &self,
        source: &mut S,
        code: &str,
        count: usize,
        modifier: i32,
    ) -> Vec<RollResult> {
        (0..count)
            .map(|_| self.roll(source, code, modifier, None))
            .collect()
    }

    /// Roll two codes against each other; the strictly higher total wins.
    pub fn roll_opposed<S: DieSource + ?Sized>(
        &self,
        source: &mut S,
        first: &str,
        second: &str,
        first_modifier: i32,
        second_modifier: i32,
    ) -> OpposedRoll {
        let first = self.roll(source, first, first_modifier, None);
        let second = self.roll(source, second, second_modifier, None);
        OpposedRoll::new(first, second)
    }

    /// Roll damage and subtract armor, never going below 0.
    ///
    /// Negative armor counts as no armor.
    pub fn roll_damage<S: DieSource + ?Sized>(
        &self,
        source: &mut S,
        code: &str,
        armor: i32,
    ) -> DamageRoll {
        let armor = armor.max(0);
        let roll = self.roll(source, code, 0, None);
        let raw_damage = roll.total;
        let final_damage = raw_damage.saturating_sub(armor).max(0);
        DamageRoll {
            raw_damage,
            armor_value: armor,
            final_damage,
            damage_absorbed: raw_damage.max(0) - final_damage,
            roll,
        }
    }

    /// Roll a Force power against `difficulty`.
    ///
    /// With `temptation` on, a failed roll whose wild die showed 1 gains a
    /// Dark Side temptation note.
    pub fn roll_force_power<S: DieSource + ?Sized>(
        &self,
        source: &mut S,
        code: &str,
        difficulty: &str,
        temptation: bool,
    ) -> ForcePowerRoll {
        let mut roll = self.roll(source, code, 0, Some(difficulty));
        if temptation && roll.wild_die_result == Some(1) && roll.success() == Some(false) {
            roll.complications.push(DARK_SIDE_TEMPTATION.to_string());
        }
        ForcePowerRoll {
            roll,
            dark_side_temptation: temptation,
        }
    }
}

/// Which side won an opposed roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// The first roll was higher.
    First,
    /// The second roll was higher.
    Second,
    /// Equal totals.
    Tie,
}

impl Winner {
    /// 1 for the first roll, 2 for the second, 0 for a tie.
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Tie => 0,
        }
    }
}

/// Two rolls resolved against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpposedRoll {
    /// The first roll.
    pub first: RollResult,
    /// The second roll.
    pub second: RollResult,
    /// Who won.
    pub winner: Winner,
    /// Difference between the totals (0 on a tie).
    pub margin: u32,
}

impl OpposedRoll {
    /// Resolve two finished rolls.
    pub fn new(first: RollResult, second: RollResult) -> Self {
        let winner = match first.total.cmp(&second.total) {
            std::cmp::Ordering::Greater => Winner::First,
            std::cmp::Ordering::Less => Winner::Second,
            std::cmp::Ordering::Equal => Winner::Tie,
        };
        let margin = first.total.abs_diff(second.total);
        Self {
            first,
            second,
            winner,
            margin,
        }
    }

    /// True on equal totals.
    pub fn is_tie(&self) -> bool {
        self.winner == Winner::Tie
    }
}

/// A damage roll after armor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Damage before armor.
    pub raw_damage: i32,
    /// Armor subtracted.
    pub armor_value: i32,
    /// Damage after armor, at least 0.
    pub final_damage: i32,
    /// How much the armor stopped.
    pub damage_absorbed: i32,
    /// The underlying roll.
    pub roll: RollResult,
}

/// A Force power roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcePowerRoll {
    /// The underlying roll, including any temptation note.
    pub roll: RollResult,
    /// Whether the Dark Side temptation rule was in effect.
    pub dark_side_temptation: bool,
}

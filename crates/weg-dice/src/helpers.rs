//! Shortcuts for common WEG rolls.

use crate::dice::{DieSource, RollResult};
use crate::difficulty::Difficulty;
use crate::roller::{DiceRoller, ForcePowerRoll, OpposedRoll};

/// Difficulty used when a helper is not given one.
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Moderate;

/// A lightsaber attack, opposed by a dodge or against a fixed difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightsaberAttack {
    /// Attack rolled against the defender's dodge.
    Opposed(OpposedRoll),
    /// Attack rolled against Moderate difficulty.
    Unopposed(RollResult),
}

/// Common rolls over a roller and a die source.
#[derive(Debug)]
pub struct RollHelper<'a, S: ?Sized> {
    roller: &'a DiceRoller,
    source: &'a mut S,
}

impl<'a, S: DieSource + ?Sized> RollHelper<'a, S> {
    /// Create a helper.
    pub fn new(roller: &'a DiceRoller, source: &'a mut S) -> Self {
        Self { roller, source }
    }

    /// A skill roll against a difficulty.
    pub fn skill_roll(&mut self, code: &str, difficulty: &str, modifier: i32) -> RollResult {
        self.roller.roll(&mut *self.source, code, modifier, Some(difficulty))
    }

    /// An attribute roll against a difficulty.
    pub fn attribute_roll(&mut self, code: &str, difficulty: &str, modifier: i32) -> RollResult {
        self.roller.roll(&mut *self.source, code, modifier, Some(difficulty))
    }

    /// A blaster shot at Moderate difficulty with range and cover modifiers.
    pub fn blaster_attack(&mut self, code: &str, range_modifier: i32, cover_modifier: i32) -> RollResult {
        self.roller.roll(
            &mut *self.source,
            code,
            range_modifier.saturating_add(cover_modifier),
            Some(DEFAULT_DIFFICULTY.key()),
        )
    }

    /// A lightsaber attack, opposed by `opponent_dodge` when given.
    pub fn lightsaber_attack(&mut self, code: &str, opponent_dodge: Option<&str>) -> LightsaberAttack {
        match opponent_dodge {
            Some(dodge) => {
                LightsaberAttack::Opposed(self.roller.roll_opposed(&mut *self.source, code, dodge, 0, 0))
            }
            None => LightsaberAttack::Unopposed(self.roller.roll(
                &mut *self.source,
                code,
                0,
                Some(DEFAULT_DIFFICULTY.key()),
            )),
        }
    }

    /// A starship maneuver against a difficulty.
    pub fn starship_piloting(&mut self, code: &str, difficulty: &str) -> RollResult {
        self.roller.roll(&mut *self.source, code, 0, Some(difficulty))
    }

    /// A Force power rolled with the first usable of control, sense and
    /// alter, with the Dark Side temptation rule on.
    ///
    /// A code is usable when it is non-empty and not `0D`. With none usable
    /// the power is rolled at 1D without the temptation rule.
    pub fn force_power_roll(
        &mut self,
        control: &str,
        sense: &str,
        alter: &str,
        difficulty: &str,
    ) -> ForcePowerRoll {
        let usable = [control, sense, alter]
            .into_iter()
            .map(str::trim)
            .find(|code| !code.is_empty() && !code.eq_ignore_ascii_case("0D"));
        match usable {
            Some(code) => self
                .roller
                .roll_force_power(&mut *self.source, code, difficulty, true),
            None => ForcePowerRoll {
                roll: self.roller.roll(&mut *self.source, "1D", 0, Some(difficulty)),
                dark_side_temptation: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::SequenceDice;

    #[test]
    fn skill_roll_checks_difficulty() {
        let roller = DiceRoller::default();
        let mut dice = SequenceDice::new([4, 4, 4]);
        let mut helper = RollHelper::new(&roller, &mut dice);
        let r = helper.skill_roll("3D", "difficult", 2);
        assert_eq!(r.total, 14);
        assert_eq!(r.success(), Some(false));
    }

    #[test]
    fn attribute_roll() {
        let roller = DiceRoller::default();
        let mut dice = SequenceDice::new([5]);
        let r = RollHelper::new(&roller, &mut dice).attribute_roll("2D", "moderate", 0);
        assert_eq!(r.total, 10);
        assert_eq!(r.success(), Some(true));
    }

    #[test]
    fn blaster_attack_sums_modifiers() {
        let roller = DiceRoller::default();
        let mut dice = SequenceDice::new([3]);
        let r = RollHelper::new(&roller, &mut dice).blaster_attack("4D", -1, 2);
        assert_eq!(r.bonus, 1);
        assert_eq!(r.total, 13);
        assert_eq!(r.difficulty.unwrap().name, "Moderate");
    }

    #[test]
    fn lightsaber_opposed_by_dodge() {
        let roller = DiceRoller::default();
        let mut dice = SequenceDice::new([5, 5, 2, 2]);
        let attack = RollHelper::new(&roller, &mut dice).lightsaber_attack("2D", Some("2D"));
        match attack {
            LightsaberAttack::Opposed(o) => {
                assert_eq!(o.first.total, 10);
                assert_eq!(o.second.total, 4);
                assert_eq!(o.winner.number(), 1);
            }
            LightsaberAttack::Unopposed(_) => panic!("expected an opposed roll"),
        }
    }

    #[test]
    fn lightsaber_unopposed() {
        let roller = DiceRoller::default();
        let mut dice = SequenceDice::new([4]);
        let attack = RollHelper::new(&roller, &mut dice).lightsaber_attack("3D", None);
        assert!(matches!(attack, LightsaberAttack::Unopposed(r) if r.total == 12));
    }

    #[test]
    fn starship_piloting() {
        let roller = DiceRoller::default();
        let mut dice = SequenceDice::new([6, 3]);
        let r = RollHelper::new(&roller, &mut dice).starship_piloting("1D", "easy");
        assert_eq!(r.total, 9);
        assert!(r.wild_die_exploded);
    }

    #[test]
    fn force_power_uses_first_usable_code() {
        let roller = DiceRoller::default();
        let mut dice = SequenceDice::new([3]);
        let power = RollHelper::new(&roller, &mut dice).force_power_roll("0D", "", "3D+1", "easy");
        assert_eq!(power.roll.dice_code, "3D+1");
        assert_eq!(power.roll.total, 10);
        assert!(power.dark_side_temptation);
    }

    #[test]
    fn force_power_falls_back_to_one_die() {
        let roller = DiceRoller::default();
        let mut dice = SequenceDice::new([4]);
        let power = RollHelper::new(&roller, &mut dice).force_power_roll("0D", " ", "0d", "easy");
        assert_eq!(power.roll.dice_code, "1D");
        assert!(!power.dark_side_temptation);
    }
}

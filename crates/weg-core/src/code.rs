//! Canonical WEG dice codes.
//!
//! A dice code `ND+M` means "roll N six-sided dice, sum them, add M pips".
//! Three pips make one die, so `3D+3` and `4D` have the same number of
//! pips but are distinct codes.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Pips per die.
pub const PIPS_PER_DIE: u32 = 3;

/// A canonical dice code: `N"D"` or `N"D+"M` with N ≥ 0 and M ≥ 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiceCode {
    /// Number of six-sided dice.
    pub dice: u32,
    /// Flat bonus added to the sum.
    pub pips: u32,
}

impl DiceCode {
    /// The default code used whenever a sheet value is missing or unreadable.
    pub const DEFAULT: Self = Self::new(2, 0);

    /// Create a dice code.
    pub const fn new(dice: u32, pips: u32) -> Self {
        Self { dice, pips }
    }

    /// Total value of the code expressed in pips.
    pub fn total_pips(self) -> u32 {
        self.dice
            .saturating_mul(PIPS_PER_DIE)
            .saturating_add(self.pips)
    }

    /// Subtract whole dice, floored at `1D`.
    ///
    /// The remaining pips are redistributed so the bonus is always below
    /// one die (`3D+4` minus 1D becomes `3D+1`).
    pub fn with_penalty(self, penalty_dice: u32) -> Self {
        let total = self
            .total_pips()
            .saturating_sub(penalty_dice.saturating_mul(PIPS_PER_DIE));
        if total <= PIPS_PER_DIE {
            return Self::new(1, 0);
        }
        Self::new(total / PIPS_PER_DIE, total % PIPS_PER_DIE)
    }
}

impl Default for DiceCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for DiceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.pips > 0 {
            write!(f, "{}D+{}", self.dice, self.pips)
        } else {
            write!(f, "{}D", self.dice)
        }
    }
}

impl std::str::FromStr for DiceCode {
    type Err = CoreError;

    /// Parse the strict canonical grammar `^\d+D(\+\d+)?$`.
    ///
    /// Lowercase `d` is accepted; whitespace and every other variant are
    /// rejected.
    fn from_str(s: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidDiceCode(s.to_string());

        let upper = s.to_ascii_uppercase();
        let (dice_part, bonus_part) = upper.split_once('D').ok_or_else(invalid)?;
        let dice = parse_digits(dice_part).ok_or_else(invalid)?;

        let pips = if bonus_part.is_empty() {
            0
        } else {
            let digits = bonus_part.strip_prefix('+').ok_or_else(invalid)?;
            parse_digits(digits).ok_or_else(invalid)?
        };

        Ok(Self { dice, pips })
    }
}

impl TryFrom<String> for DiceCode {
    type Error = CoreError;

    fn try_from(s: String) -> CoreResult<Self> {
        s.parse()
    }
}

impl From<DiceCode> for String {
    fn from(code: DiceCode) -> Self {
        code.to_string()
    }
}

/// Parse a non-empty run of ASCII digits.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

//! The dice-code grammar accepted by the roller.
//!
//! Canonical codes are `ND` and `ND+M`. The roller also accepts chained
//! bonuses (`3D+1+2`), a negative bonus (`3D-1`) and a bare dice count
//! (`4`). Case and whitespace are ignored.

use serde::{Deserialize, Serialize};
use weg_core::DiceCode;

use crate::error::{DiceError, DiceResult};

/// A parsed dice code: dice to roll plus a signed flat bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSpec {
    /// Number of d6 to roll.
    pub dice: u32,
    /// Flat bonus added to the dice total.
    pub bonus: i32,
}

impl RollSpec {
    /// Create a spec.
    pub fn new(dice: u32, bonus: i32) -> Self {
        Self { dice, bonus }
    }

    /// Parse a dice code.
    ///
    /// An empty code means no dice and no bonus.
    pub fn parse(code: &str) -> DiceResult<Self> {
        let cleaned: String = code
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        if cleaned.is_empty() {
            return Ok(Self::new(0, 0));
        }
        let invalid = || DiceError::InvalidCode(code.trim().to_string());

        let Some((dice, rest)) = cleaned.split_once('D') else {
            return number(&cleaned).map(|dice| Self::new(dice, 0)).ok_or_else(invalid);
        };
        let dice = number(dice).ok_or_else(invalid)?;

        let bonus = if rest.is_empty() {
            0
        } else if let Some(penalty) = rest.strip_prefix('-') {
            let penalty = i32::try_from(number(penalty).ok_or_else(invalid)?)
                .map_err(|_| invalid())?;
            -penalty
        } else if let Some(bonuses) = rest.strip_prefix('+') {
            bonuses
                .split('+')
                .map(number)
                .try_fold(0i32, |acc, b| acc.checked_add(i32::try_from(b?).ok()?))
                .ok_or_else(invalid)?
        } else {
            return Err(invalid());
        };

        Ok(Self::new(dice, bonus))
    }
}

fn number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl From<DiceCode> for RollSpec {
    fn from(code: DiceCode) -> Self {
        Self::new(code.dice, i32::try_from(code.pips).unwrap_or(i32::MAX))
    }
}

impl std::str::FromStr for RollSpec {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RollSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bonus {
            0 => write!(f, "{}D", self.dice),
            b if b > 0 => write!(f, "{}D+{b}", self.dice),
            b => write!(f, "{}D{b}", self.dice),
        }
    }
}

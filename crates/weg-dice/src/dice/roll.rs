//! Roll results and their breakdown text.

use serde::{Deserialize, Serialize};

use crate::difficulty::DifficultyOutcome;

/// The result of one roll.
///
/// A roll never fails outright: a bad code yields a result with `total` 0,
/// no dice, and [`error`](Self::error) set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RollResult {
    /// The code as given by the caller.
    pub dice_code: String,
    /// Dice total plus bonus plus modifier.
    pub total: i32,
    /// Ordinary dice, followed by the wild-die subtotal when a wild die was
    /// rolled.
    pub individual_dice: Vec<u32>,
    /// Code bonus plus modifier.
    pub bonus: i32,
    /// Human-readable breakdown, e.g. `[3 + 4] Wild: 5 +2 = **14**`.
    pub breakdown: String,
    /// The wild-die subtotal, if a wild die was rolled.
    pub wild_die_result: Option<u32>,
    /// Every face the wild die showed.
    pub wild_die_faces: Vec<u32>,
    /// True if the wild die rolled at least one 6.
    pub wild_die_exploded: bool,
    /// Complication notes, in the order they arose.
    pub complications: Vec<String>,
    /// Comparison against the requested difficulty, if any.
    pub difficulty: Option<DifficultyOutcome>,
    /// Why the roll could not be made.
    pub error: Option<String>,
}

impl RollResult {
    /// A result for a roll that could not be made.
    pub fn failed(dice_code: &str, cause: impl std::fmt::Display) -> Self {
        Self {
            dice_code: dice_code.to_string(),
            breakdown: format!("Error: {cause}"),
            error: Some(format!("Error rolling dice: {cause}")),
            ..Self::default()
        }
    }

    /// Whether the difficulty check succeeded; `None` without a check.
    pub fn success(&self) -> Option<bool> {
        self.difficulty.as_ref().and_then(|d| d.success)
    }

    /// True if the roll could not be made.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The ordinary dice, without the wild-die subtotal.
    pub fn ordinary_dice(&self) -> &[u32] {
        match (self.wild_die_result, self.individual_dice.split_last()) {
            (Some(_), Some((_, ordinary))) => ordinary,
            _ => &self.individual_dice,
        }
    }

    /// Rebuild the breakdown from the stored dice.
    pub fn format_breakdown(&self) -> String {
        format_breakdown(
            &self.individual_dice,
            self.bonus,
            self.wild_die_result,
            self.wild_die_exploded,
        )
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.dice_code, self.breakdown)
    }
}

/// Format a roll breakdown.
///
/// When `wild_die_result` is set, the last entry of `dice` is shown as the
/// wild die and emphasized if it exploded. A nonzero bonus carries an
/// explicit sign. Without dice the breakdown is `No dice +B`, `No dice -B`
/// or `0`.
pub fn format_breakdown(
    dice: &[u32],
    bonus: i32,
    wild_die_result: Option<u32>,
    wild_die_exploded: bool,
) -> String {
    if dice.is_empty() {
        return match bonus {
            0 => "0".to_string(),
            b => format!("No dice {}", signed(b)),
        };
    }

    let (ordinary, wild) = match (wild_die_result, dice.split_last()) {
        (Some(_), Some((last, rest))) => (rest, Some(*last)),
        _ => (dice, None),
    };

    let mut parts = Vec::new();
    if !ordinary.is_empty() {
        let faces: Vec<String> = ordinary.iter().map(u32::to_string).collect();
        parts.push(format!("[{}]", faces.join(" + ")));
    }
    if let Some(wild) = wild {
        if wild_die_exploded {
            parts.push(format!("Wild: **{wild}**"));
        } else {
            parts.push(format!("Wild: {wild}"));
        }
    }
    if bonus != 0 {
        parts.push(signed(bonus));
    }

    let sum: i64 = dice.iter().map(|&d| i64::from(d)).sum();
    let total = sum + i64::from(bonus);
    format!("{} = **{total}**", parts.join(" "))
}

fn signed(n: i32) -> String {
    if n > 0 { format!("+{n}") } else { n.to_string() }
}

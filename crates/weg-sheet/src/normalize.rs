//! Lossy normalization of sheet values.
//!
//! Normalizers never fail. A malformed field degrades to a default so a
//! single bad cell cannot abort a whole sheet import.

use weg_core::DiceCode;

/// Normalize a free-form dice code to canonical form.
///
/// Input is uppercased and stripped of whitespace, then:
/// - `ND` and `ND+M` pass through,
/// - `ND+M1+M2+...` sums the bonuses,
/// - a bare integer `N` becomes `ND`,
/// - `N+M` becomes `ND+M`,
/// - anything else becomes [`DiceCode::DEFAULT`].
pub fn normalize_dice_code(raw: &str) -> DiceCode {
    try_normalize_dice_code(raw).unwrap_or_else(|| {
        tracing::debug!(raw, "unreadable dice code, using default");
        DiceCode::DEFAULT
    })
}

/// Like [`normalize_dice_code`] but reports unreadable input as `None`.
pub fn try_normalize_dice_code(raw: &str) -> Option<DiceCode> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();

    let (dice_part, bonus_parts) = match cleaned.split_once('D') {
        Some((dice, rest)) => {
            if rest.is_empty() {
                (dice, None)
            } else {
                (dice, Some(rest.strip_prefix('+')?))
            }
        }
        // `N` or `N+M` without a die marker
        None => match cleaned.split_once('+') {
            Some((dice, bonus)) if !bonus.contains('+') => (dice, Some(bonus)),
            Some(_) => return None,
            None => (cleaned.as_str(), None),
        },
    };

    let dice = digits(dice_part)?;
    let pips = match bonus_parts {
        None => 0,
        Some(parts) => parts
            .split('+')
            .map(digits)
            .try_fold(0u32, |acc, p| acc.checked_add(p?))?,
    };

    Some(DiceCode::new(dice, pips))
}

/// Lowercase, trim, and collapse runs of whitespace, hyphens and
/// underscores into a single underscore.
pub fn collapse_separators(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for c in raw.trim().chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            pending_sep = true;
            continue;
        }
        if pending_sep {
            out.push('_');
            pending_sep = false;
        }
        out.extend(c.to_lowercase());
    }
    if pending_sep {
        out.push('_');
    }
    out
}

/// Interpret a text flag: `yes`, `true`, `1` and `y` are true.
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "yes" | "true" | "1" | "y"
    )
}

/// Split a comma-separated list, trimming items and dropping empties.
pub fn split_items(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

//! Difficulty tiers and checks.
//!
//! A difficulty is either a named tier or a literal target number. A check
//! succeeds when the total meets or beats the target.

use serde::{Deserialize, Serialize};

/// The standard WEG difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Target 1.
    VeryEasy,
    /// Target 5.
    Easy,
    /// Target 10.
    Moderate,
    /// Target 15.
    Difficult,
    /// Target 20.
    VeryDifficult,
    /// Target 25.
    Heroic,
    /// Target 30.
    Legendary,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Self; 7] = [
        Self::VeryEasy,
        Self::Easy,
        Self::Moderate,
        Self::Difficult,
        Self::VeryDifficult,
        Self::Heroic,
        Self::Legendary,
    ];

    /// The target number to meet or beat.
    pub fn target(self) -> i32 {
        match self {
            Self::VeryEasy => 1,
            Self::Easy => 5,
            Self::Moderate => 10,
            Self::Difficult => 15,
            Self::VeryDifficult => 20,
            Self::Heroic => 25,
            Self::Legendary => 30,
        }
    }

    /// Lookup key, e.g. `very_difficult`.
    pub fn key(self) -> &'static str {
        match self {
            Self::VeryEasy => "very_easy",
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Difficult => "difficult",
            Self::VeryDifficult => "very_difficult",
            Self::Heroic => "heroic",
            Self::Legendary => "legendary",
        }
    }

    /// Display name, e.g. `Very Difficult`.
    pub fn name(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
            Self::Heroic => "Heroic",
            Self::Legendary => "Legendary",
        }
    }

    /// Parse a tier name, ignoring case and treating spaces, hyphens and
    /// underscores alike.
    pub fn parse(s: &str) -> Option<Self> {
        let key = s
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The outcome of comparing a total against a difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyOutcome {
    /// Tier name, `Target N`, or the unrecognized input.
    pub name: String,
    /// Target number, absent for an unrecognized difficulty.
    pub target: Option<i32>,
    /// Whether the total met the target.
    pub success: Option<bool>,
    /// Total minus target.
    pub margin: Option<i32>,
    /// Set when the difficulty was not recognized.
    pub error: Option<String>,
}

impl DifficultyOutcome {
    fn against(name: String, total: i32, target: i32) -> Self {
        Self {
            name,
            target: Some(target),
            success: Some(total >= target),
            margin: Some(total.saturating_sub(target)),
            error: None,
        }
    }
}

/// Compare `total` against a tier name or a literal target number.
///
/// An unrecognized difficulty yields an outcome with no target, success or
/// margin and an error note.
pub fn check_difficulty(total: i32, difficulty: &str) -> DifficultyOutcome {
    if let Some(tier) = Difficulty::parse(difficulty) {
        return DifficultyOutcome::against(tier.name().to_string(), total, tier.target());
    }
    if let Ok(target) = difficulty.trim().parse::<i32>() {
        return DifficultyOutcome::against(format!("Target {target}"), total, target);
    }
    tracing::debug!(difficulty, "unknown difficulty");
    DifficultyOutcome {
        name: difficulty.to_string(),
        target: None,
        success: None,
        margin: None,
        error: Some(format!("Unknown difficulty: {difficulty}")),
    }
}

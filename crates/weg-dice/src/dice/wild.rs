//! The wild die.
//!
//! One die of every roll is resolved separately: a 6 explodes and is rolled
//! again with the faces summed, a 1 stops with a complication, and any other
//! face stops normally. Repeated sixes are bounded only by the die source.

use serde::{Deserialize, Serialize};

use super::DieSource;

/// Complication note for a wild die showing 1.
pub const COMPLICATION: &str = "Wild die complication (rolled 1)";

/// Where the wild die's resolution stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WildDieState {
    /// Still rolling (the last face was a 6, or nothing rolled yet).
    Rolling,
    /// Stopped on a 2 to 5.
    StoppedNormal,
    /// Stopped on a 1.
    StoppedComplication,
}

impl WildDieState {
    /// The state after rolling `face`.
    pub fn after(face: u32) -> Self {
        match face {
            1 => Self::StoppedComplication,
            6 => Self::Rolling,
            _ => Self::StoppedNormal,
        }
    }
}

/// A resolved wild die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildDie {
    /// Sum of every face rolled.
    pub subtotal: u32,
    /// Every face, in order.
    pub faces: Vec<u32>,
    /// True if at least one 6 was rolled.
    pub exploded: bool,
    /// How the die stopped.
    pub state: WildDieState,
}

impl WildDie {
    /// Roll the wild die to completion.
    pub fn roll<S: DieSource + ?Sized>(source: &mut S) -> Self {
        let mut die = Self {
            subtotal: 0,
            faces: Vec::new(),
            exploded: false,
            state: WildDieState::Rolling,
        };
        while die.state == WildDieState::Rolling {
            let face = source.roll_d6();
            die.subtotal = die.subtotal.saturating_add(face);
            die.faces.push(face);
            die.state = WildDieState::after(face);
            if die.state == WildDieState::Rolling {
                die.exploded = true;
            }
        }
        die
    }

    /// True if the die stopped on a 1.
    pub fn is_complication(&self) -> bool {
        self.state == WildDieState::StoppedComplication
    }
}

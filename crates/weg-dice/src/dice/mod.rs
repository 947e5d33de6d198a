//! Dice codes, die sources, the wild die and roll results.
//!
//! Every die is a d6. A [`DieSource`] supplies faces so rolls can be driven
//! by a seeded [`StdRng`] in play and by a scripted [`SequenceDice`] in tests.

pub mod roll;
pub mod spec;
pub mod wild;

pub use roll::{RollResult, format_breakdown};
pub use spec::RollSpec;
pub use wild::{WildDie, WildDieState};

use rand::Rng;
use rand::rngs::StdRng;

/// A source of d6 faces.
pub trait DieSource {
    /// Roll one six-sided die, returning a face in `1..=6`.
    fn roll_d6(&mut self) -> u32;
}

impl DieSource for StdRng {
    fn roll_d6(&mut self) -> u32 {
        self.random_range(1..=6)
    }
}

/// A scripted die source that cycles through fixed faces.
///
/// An empty script rolls 1 forever.
#[derive(Debug, Clone, Default)]
pub struct SequenceDice {
    faces: Vec<u32>,
    next: usize,
}

impl SequenceDice {
    /// Create a source that yields `faces` in order, then starts over.
    pub fn new(faces: impl Into<Vec<u32>>) -> Self {
        Self {
            faces: faces.into(),
            next: 0,
        }
    }

    /// How many faces have been rolled so far.
    pub fn rolled(&self) -> usize {
        self.next
    }
}

impl DieSource for SequenceDice {
    fn roll_d6(&mut self) -> u32 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn sequence_cycles() {
        let mut dice = SequenceDice::new([2, 5]);
        let faces: Vec<u32> = (0..5).map(|_| dice.roll_d6()).collect();
        assert_eq!(faces, vec![2, 5, 2, 5, 2]);
        assert_eq!(dice.rolled(), 5);
    }

    #[test]
    fn empty_sequence_rolls_ones() {
        let mut dice = SequenceDice::default();
        assert_eq!(dice.roll_d6(), 1);
        assert_eq!(dice.roll_d6(), 1);
    }

    #[test]
    fn rng_faces_are_d6() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!((1..=6).contains(&rng.roll_d6()));
        }
    }

    #[test]
    fn rng_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        let a: Vec<u32> = (0..10).map(|_| rng1.roll_d6()).collect();
        let b: Vec<u32> = (0..10).map(|_| rng2.roll_d6()).collect();
        assert_eq!(a, b);
    }
}

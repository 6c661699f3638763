//! Hand gestures and the beats relation.
//!
//! ## Hand
//!
//! Exactly three variants forming a cycle: Rock beats Scissors, Scissors
//! beats Paper, Paper beats Rock. The relation is a total function over the
//! closed enumeration, so the compiler verifies there is no fourth gesture
//! and no hand that beats itself or two others.

use serde::{Deserialize, Serialize};

/// A playable hand gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    /// All hands in a fixed order, for iteration and uniform random choice.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// Check whether this hand beats the other.
    ///
    /// ```
    /// use rps_engine::Hand;
    ///
    /// assert!(Hand::Rock.beats(Hand::Scissors));
    /// assert!(!Hand::Scissors.beats(Hand::Rock));
    /// assert!(!Hand::Paper.beats(Hand::Paper));
    /// ```
    #[must_use]
    pub const fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors)
                | (Hand::Scissors, Hand::Paper)
                | (Hand::Paper, Hand::Rock)
        )
    }

    /// The hand this hand beats.
    #[must_use]
    pub const fn prey(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Scissors => Hand::Paper,
            Hand::Paper => Hand::Rock,
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Hand::Rock => "Rock",
            Hand::Paper => "Paper",
            Hand::Scissors => "Scissors",
        };
        write!(f, "{}", name)
    }
}

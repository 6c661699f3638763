//! Round outcome determination.

use serde::{Deserialize, Serialize};

use super::hand::Hand;

/// Result of comparing the player's hand against the opponent's.
///
/// Produced fresh each round; never persisted beyond the round record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Draw,
    PlayerWins,
    OpponentWins,
}

impl RoundOutcome {
    /// Determine the outcome of one round.
    ///
    /// Equal hands draw; otherwise the player wins exactly when their hand
    /// beats the opponent's. The 3x3 table is fully determined by this rule.
    ///
    /// ```
    /// use rps_engine::{Hand, RoundOutcome};
    ///
    /// assert_eq!(RoundOutcome::of(Hand::Rock, Hand::Scissors), RoundOutcome::PlayerWins);
    /// assert_eq!(RoundOutcome::of(Hand::Rock, Hand::Paper), RoundOutcome::OpponentWins);
    /// assert_eq!(RoundOutcome::of(Hand::Rock, Hand::Rock), RoundOutcome::Draw);
    /// ```
    #[must_use]
    pub const fn of(player: Hand, opponent: Hand) -> RoundOutcome {
        if player as u8 == opponent as u8 {
            RoundOutcome::Draw
        } else if player.beats(opponent) {
            RoundOutcome::PlayerWins
        } else {
            RoundOutcome::OpponentWins
        }
    }

    /// The same outcome seen from the opposite seat.
    #[must_use]
    pub const fn inverted(self) -> RoundOutcome {
        match self {
            RoundOutcome::Draw => RoundOutcome::Draw,
            RoundOutcome::PlayerWins => RoundOutcome::OpponentWins,
            RoundOutcome::OpponentWins => RoundOutcome::PlayerWins,
        }
    }

    /// Check whether this round was decisive.
    #[must_use]
    pub const fn is_decisive(self) -> bool {
        !matches!(self, RoundOutcome::Draw)
    }
}

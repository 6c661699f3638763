//! The boundary contract with the presentation layer.
//!
//! The engine reports each round and the final verdict as plain data plus
//! ready-made display strings; whatever UI layer is embedding the engine
//! decides how to render and animate them. Nothing here touches I/O.

use crate::core::{Hand, Nickname, RoundOutcome, Score, Side};
use crate::engine::state::MatchPhase;

/// Display label for the random opponent.
pub const OPPONENT_NAME: &str = "CPU";

/// Everything the presentation layer needs to show one round's result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number, starting at 1.
    pub round: u32,
    pub player_hand: Hand,
    pub opponent_hand: Hand,
    pub outcome: RoundOutcome,
    /// Score after this round.
    pub score: Score,
    /// Phase after this round; `Finished` means this was the deciding round.
    pub phase: MatchPhase,
    pub(crate) nickname: Nickname,
}

impl RoundReport {
    /// Check whether this round decided the match.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.phase == MatchPhase::Finished
    }

    /// Text for the round-result popup.
    #[must_use]
    pub fn banner(&self) -> String {
        match self.outcome {
            RoundOutcome::Draw => "This round ends in a draw!".to_string(),
            RoundOutcome::PlayerWins => {
                format!("The winner of this round is {}", self.nickname)
            }
            RoundOutcome::OpponentWins => {
                format!("The winner of this round is {}", OPPONENT_NAME)
            }
        }
    }
}

/// The decided result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchVerdict {
    pub winner: Side,
    pub score: Score,
    pub(crate) nickname: Nickname,
}

impl MatchVerdict {
    /// Text for the end-of-match screen.
    #[must_use]
    pub fn message(&self) -> String {
        match self.winner {
            Side::Player => format!("Congratulations {}, you won!", self.nickname),
            Side::Opponent => format!(
                "Good game {}, but this time {} wins",
                self.nickname, OPPONENT_NAME
            ),
        }
    }
}

//! Score accumulation.
//!
//! ## Score
//!
//! A pair of non-negative counters, one per seat. Scores only ever grow
//! during a match and are reset as a whole at restart; the state machine in
//! `engine::state` guarantees no increment happens after termination.

use serde::{Deserialize, Serialize};

use super::outcome::RoundOutcome;

/// Which seat a value refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

/// Points accumulated by each seat over a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    /// Both seats at zero.
    pub const ZERO: Score = Score {
        player: 0,
        opponent: 0,
    };

    /// Create a score with the given points per seat.
    #[must_use]
    pub const fn new(player: u32, opponent: u32) -> Self {
        Self { player, opponent }
    }

    /// Apply a round outcome, crediting the winning seat with one point.
    ///
    /// Pure: returns the updated score. A draw leaves the score unchanged.
    #[must_use]
    pub const fn apply(self, outcome: RoundOutcome) -> Score {
        match outcome {
            RoundOutcome::Draw => self,
            RoundOutcome::PlayerWins => Score {
                player: self.player + 1,
                opponent: self.opponent,
            },
            RoundOutcome::OpponentWins => Score {
                player: self.player,
                opponent: self.opponent + 1,
            },
        }
    }

    /// Check whether either seat has reached the win threshold.
    #[must_use]
    pub const fn reaches(self, threshold: u32) -> bool {
        self.player >= threshold || self.opponent >= threshold
    }

    /// The seat currently ahead, or `None` when tied.
    #[must_use]
    pub const fn leader(self) -> Option<Side> {
        if self.player > self.opponent {
            Some(Side::Player)
        } else if self.opponent > self.player {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.player, self.opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_player_win() {
        let score = Score::ZERO.apply(RoundOutcome::PlayerWins);
        assert_eq!(score, Score::new(1, 0));
        assert!(!score.reaches(3));
    }

    #[test]
    fn test_apply_opponent_win() {
        let score = Score::ZERO.apply(RoundOutcome::OpponentWins);
        assert_eq!(score, Score::new(0, 1));
    }

    #[test]
    fn test_draw_leaves_score_unchanged() {
        let score = Score::new(2, 1);
        assert_eq!(score.apply(RoundOutcome::Draw), score);
    }

    #[test]
    fn test_reaches_threshold_from_tie() {
        let score = Score::new(2, 2).apply(RoundOutcome::PlayerWins);
        assert_eq!(score, Score::new(3, 2));
        assert!(score.reaches(3));
    }

    #[test]
    fn test_reaches_is_max_comparison() {
        for player in 0..5u32 {
            for opponent in 0..5u32 {
                let score = Score::new(player, opponent);
                assert_eq!(score.reaches(3), player.max(opponent) >= 3);
            }
        }
    }

    #[test]
    fn test_leader() {
        assert_eq!(Score::new(2, 1).leader(), Some(Side::Player));
        assert_eq!(Score::new(0, 3).leader(), Some(Side::Opponent));
        assert_eq!(Score::new(2, 2).leader(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Score::new(3, 1)), "3-1");
    }

    #[test]
    fn test_serialization() {
        let score = Score::new(2, 3);
        let json = serde_json::to_string(&score).unwrap();
        let deserialized: Score = serde_json::from_str(&json).unwrap();
        assert_eq!(score, deserialized);
    }
}

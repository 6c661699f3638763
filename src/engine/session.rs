//! Presentation-side reentrancy guard.
//!
//! Round results are presented asynchronously (popup, animation), and the
//! engine must not evaluate a new round until the previous round's
//! presentation sequence has resolved. That ordering is the caller's
//! responsibility, not the match state machine's; [`MatchSession`] is the
//! reference implementation of that guard for UI layers that want it
//! ready-made.

use crate::core::Hand;
use crate::engine::report::RoundReport;
use crate::engine::state::{Match, MatchError, MatchPhase, RoundRecord};

/// A [`Match`] plus the in-between-rounds gate.
///
/// After a non-final round, further plays are rejected until the
/// presentation layer calls [`acknowledge`](MatchSession::acknowledge)
/// (the "continue" action). The deciding round needs no acknowledgment:
/// the end screen only offers a restart.
#[derive(Clone, Debug)]
pub struct MatchSession {
    game: Match,
    round_pending: bool,
}

impl MatchSession {
    /// Wrap a match in a session guard.
    #[must_use]
    pub fn new(game: Match) -> Self {
        Self {
            game,
            round_pending: false,
        }
    }

    /// The underlying match, for reading score, phase, and history.
    #[must_use]
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Check whether a round result is still being presented.
    #[must_use]
    pub fn round_pending(&self) -> bool {
        self.round_pending
    }

    /// Submit the player's name and begin play.
    pub fn start(&mut self, raw_name: &str) -> Result<(), MatchError> {
        self.game.start(raw_name).map(|_| ())
    }

    /// Play one round, unless the previous round is still on screen.
    pub fn play_round(&mut self, player_hand: Hand) -> Result<RoundReport, MatchError> {
        if self.round_pending {
            return Err(MatchError::RoundPending);
        }

        let report = self.game.play_round(player_hand)?;
        if report.phase == MatchPhase::InProgress {
            self.round_pending = true;
        }
        Ok(report)
    }

    /// The presentation sequence for the last round has resolved.
    pub fn acknowledge(&mut self) {
        self.round_pending = false;
    }

    /// Restart from the end screen.
    pub fn reset(&mut self) -> Result<(), MatchError> {
        self.game.reset()?;
        self.round_pending = false;
        Ok(())
    }

    /// Rounds played so far, oldest first.
    pub fn rounds(&self) -> impl Iterator<Item = &RoundRecord> {
        self.game.rounds().iter()
    }
}

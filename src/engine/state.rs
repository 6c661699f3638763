//! The match state machine.
//!
//! ## Phases
//!
//! A match moves through three phases:
//!
//! ```text
//! NotStarted --start--> InProgress --play_round (threshold hit)--> Finished
//!      ^                    |  ^                                      |
//!      |                    +--+ play_round (threshold unreached)     |
//!      +------------------------------reset---------------------------+
//! ```
//!
//! No other transitions exist. Calls made in the wrong phase return
//! [`MatchError`] and leave the state untouched; in particular no score
//! increment can happen after termination.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Hand, MatchRng, Nickname, NicknameError, RoundOutcome, Score};
use crate::engine::config::MatchConfig;
use crate::engine::report::{MatchVerdict, RoundReport};

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    NotStarted,
    InProgress,
    Finished,
}

/// One completed round, kept in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    pub number: u32,
    pub player_hand: Hand,
    pub opponent_hand: Hand,
    pub outcome: RoundOutcome,
    /// Score after this round was credited.
    pub score_after: Score,
}

/// A call made in the wrong phase, or invalid input blocking a transition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// `start` on a match that already left the not-started phase.
    #[error("match has already started")]
    AlreadyStarted,

    /// `play_round` before a nickname was submitted.
    #[error("match has not started yet")]
    NotStarted,

    /// `play_round` after a seat reached the win threshold.
    #[error("match is already over")]
    AlreadyFinished,

    /// `reset` on a match that has not finished.
    #[error("match has not finished")]
    NotFinished,

    /// Invalid nickname blocked the start transition. Retryable.
    #[error(transparent)]
    Nickname(#[from] NicknameError),

    /// A round was played before the previous round's presentation resolved.
    #[error("previous round has not been acknowledged")]
    RoundPending,
}

/// A single match from name entry to a decided winner.
///
/// Caller-owned: the UI layer creates one `Match`, drives it through discrete
/// event calls, and reads reports back. There is no global state.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    phase: MatchPhase,
    nickname: Option<Nickname>,
    score: Score,
    rounds: Vector<RoundRecord>,
    rng: MatchRng,
}

impl Match {
    /// Create a match with the default configuration.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(MatchConfig::default(), seed)
    }

    /// Create a match with an explicit configuration.
    #[must_use]
    pub fn with_config(config: MatchConfig, seed: u64) -> Self {
        Self {
            config,
            phase: MatchPhase::NotStarted,
            nickname: None,
            score: Score::ZERO,
            rounds: Vector::new(),
            rng: MatchRng::new(seed),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// The player's nickname, once the match has started.
    #[must_use]
    pub fn nickname(&self) -> Option<&Nickname> {
        self.nickname.as_ref()
    }

    /// Rounds played so far, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &Vector<RoundRecord> {
        &self.rounds
    }

    /// Check whether a seat has reached the win threshold.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::Finished
    }

    /// The decided result, once the match has finished.
    #[must_use]
    pub fn verdict(&self) -> Option<MatchVerdict> {
        if self.phase != MatchPhase::Finished {
            return None;
        }
        // Scores move one point at a time, so the finished match has a
        // strict leader.
        let winner = self
            .score
            .leader()
            .expect("finished match cannot be tied");
        Some(MatchVerdict {
            winner,
            score: self.score,
            nickname: self
                .nickname
                .clone()
                .expect("finished match always has a nickname"),
        })
    }

    // === Transitions ===

    /// Start the match: validate the submitted name and enter play.
    ///
    /// Only legal from `NotStarted`. A validation failure blocks the
    /// transition and is retryable with a new submission.
    pub fn start(&mut self, raw_name: &str) -> Result<&Nickname, MatchError> {
        if self.phase != MatchPhase::NotStarted {
            return Err(MatchError::AlreadyStarted);
        }

        let nickname = Nickname::parse(raw_name)?;
        log::debug!("match started by {}", nickname);

        self.nickname = Some(nickname);
        self.phase = MatchPhase::InProgress;
        Ok(self.nickname.as_ref().expect("nickname was just set"))
    }

    /// Play one round against a freshly drawn opponent hand.
    ///
    /// Credits the winning seat, records the round, and finishes the match
    /// the moment either seat reaches the win threshold. Only legal from
    /// `InProgress`.
    pub fn play_round(&mut self, player_hand: Hand) -> Result<RoundReport, MatchError> {
        let nickname = match self.phase {
            MatchPhase::NotStarted => return Err(MatchError::NotStarted),
            MatchPhase::Finished => return Err(MatchError::AlreadyFinished),
            MatchPhase::InProgress => self
                .nickname
                .clone()
                .expect("in-progress match always has a nickname"),
        };

        let opponent_hand = self.rng.choose_hand();
        let outcome = RoundOutcome::of(player_hand, opponent_hand);
        self.score = self.score.apply(outcome);

        let number = self.rounds.len() as u32 + 1;
        self.rounds.push_back(RoundRecord {
            number,
            player_hand,
            opponent_hand,
            outcome,
            score_after: self.score,
        });

        log::debug!(
            "round {}: {} vs {} -> {:?}, score {}",
            number,
            player_hand,
            opponent_hand,
            outcome,
            self.score
        );

        if self.score.reaches(self.config.win_threshold) {
            self.phase = MatchPhase::Finished;
            log::info!("match over after {} rounds, final score {}", number, self.score);
        }

        Ok(RoundReport {
            round: number,
            player_hand,
            opponent_hand,
            outcome,
            score: self.score,
            phase: self.phase,
            nickname,
        })
    }

    /// Restart: back to name entry with score and history cleared.
    ///
    /// Only legal from `Finished`. The RNG is forked so a rematch does not
    /// replay the previous opponent hands.
    pub fn reset(&mut self) -> Result<(), MatchError> {
        if self.phase != MatchPhase::Finished {
            return Err(MatchError::NotFinished);
        }

        log::debug!("match reset");
        self.phase = MatchPhase::NotStarted;
        self.nickname = None;
        self.score = Score::ZERO;
        self.rounds = Vector::new();
        self.rng = self.rng.fork();
        Ok(())
    }
}

//! # rps-engine
//!
//! Match logic for a rock-paper-scissors game against a random opponent.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, animation, or input handling.
//!    The UI layer drives the engine through discrete calls and reads back
//!    reports with ready-made display strings.
//!
//! 2. **Explicit Match Object**: All state lives in a caller-owned [`Match`].
//!    No module-level globals, no singletons.
//!
//! 3. **Unrepresentable Invalid States**: Hands and outcomes are closed
//!    enumerations; the beats relation is a total function checked
//!    exhaustively at compile time.
//!
//! ## Architecture
//!
//! - **State Machine**: A match moves `NotStarted -> InProgress -> Finished`
//!   and back to `NotStarted` only via an explicit reset. Out-of-phase calls
//!   are rejected with [`MatchError`], never silently ignored.
//!
//! - **Deterministic RNG**: Opponent hands come from a seeded ChaCha8 stream,
//!   so a match replays identically under the same seed.
//!
//! ## Modules
//!
//! - `core`: Hands, outcomes, scores, nicknames, RNG
//! - `engine`: Match configuration, state machine, reports, session guard

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Hand, MatchRng, Nickname, NicknameError, RoundOutcome, Score, Side,
};

pub use crate::engine::{
    Match, MatchBuilder, MatchConfig, MatchError, MatchPhase, MatchSession,
    MatchVerdict, RoundRecord, RoundReport, DEFAULT_WIN_THRESHOLD, OPPONENT_NAME,
};

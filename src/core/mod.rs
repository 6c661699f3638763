//! Core game types: hands, outcomes, scores, nicknames, RNG.
//!
//! Everything in this module is pure data and pure functions; the match
//! state machine in `engine` composes these into transitions.

pub mod hand;
pub mod nickname;
pub mod outcome;
pub mod rng;
pub mod score;

pub use hand::Hand;
pub use nickname::{Nickname, NicknameError};
pub use outcome::RoundOutcome;
pub use rng::MatchRng;
pub use score::{Score, Side};

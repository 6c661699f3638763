//! Match state machine, configuration, reports, and the session guard.

pub mod config;
pub mod report;
pub mod session;
pub mod state;

pub use config::{MatchBuilder, MatchConfig, DEFAULT_WIN_THRESHOLD};
pub use report::{MatchVerdict, RoundReport, OPPONENT_NAME};
pub use session::MatchSession;
pub use state::{Match, MatchError, MatchPhase, RoundRecord};

//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::engine::state::Match;

/// Points a seat must reach to take the match.
pub const DEFAULT_WIN_THRESHOLD: u32 = 3;

/// Fixed parameters of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// First seat to reach this many points wins.
    pub win_threshold: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
        }
    }
}

/// Builder for creating a [`Match`].
///
/// ```
/// use rps_engine::MatchBuilder;
///
/// let game = MatchBuilder::new().win_threshold(5).build(42);
/// assert_eq!(game.config().win_threshold, 5);
/// ```
pub struct MatchBuilder {
    win_threshold: u32,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
        }
    }
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn win_threshold(mut self, threshold: u32) -> Self {
        assert!(threshold > 0, "Win threshold must be at least 1");
        self.win_threshold = threshold;
        self
    }

    /// Build a match in the not-started phase.
    pub fn build(self, seed: u64) -> Match {
        Match::with_config(
            MatchConfig {
                win_threshold: self.win_threshold,
            },
            seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let config = MatchConfig::default();
        assert_eq!(config.win_threshold, 3);
    }

    #[test]
    fn test_builder_custom_threshold() {
        let game = MatchBuilder::new().win_threshold(5).build(42);
        assert_eq!(game.config().win_threshold, 5);
    }

    #[test]
    #[should_panic(expected = "Win threshold must be at least 1")]
    fn test_builder_zero_threshold() {
        let _ = MatchBuilder::new().win_threshold(0);
    }
}

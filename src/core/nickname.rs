//! Player nicknames.
//!
//! A nickname is validated once at match start and stays immutable for the
//! rest of the match. Validation failure is the only recoverable error in
//! the engine: the UI re-prompts and the player submits again.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Nickname validation failure. Recoverable by re-submitting.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NicknameError {
    /// Empty or whitespace-only input.
    #[error("please enter a nickname")]
    Empty,
}

/// A validated, non-empty player display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nickname(String);

impl Nickname {
    /// Validate raw user input into a nickname.
    ///
    /// Surrounding whitespace is trimmed; empty or whitespace-only input is
    /// rejected.
    ///
    /// ```
    /// use rps_engine::{Nickname, NicknameError};
    ///
    /// assert_eq!(Nickname::parse("  Ada ").unwrap().as_str(), "Ada");
    /// assert_eq!(Nickname::parse("   "), Err(NicknameError::Empty));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, NicknameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NicknameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the validated name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Nickname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

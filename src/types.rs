//! Core types for password-roast

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PasswordRoastError;

/// Assessed strength of an existing password, always within 1..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(1);
    pub const MAX: Score = Score(10);

    /// Clamp a raw accumulated score into the valid range
    pub fn clamped(raw: i32) -> Self {
        Self(raw.clamp(Self::MIN.0 as i32, Self::MAX.0 as i32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Requested target tier for password generation.
///
/// Shares the 1-10 range with [`Score`] but is a separate scale: any integer is
/// accepted and unknown tiers fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrengthLevel(i64);

impl StrengthLevel {
    pub fn new(level: i64) -> Self {
        Self(level)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl FromStr for StrengthLevel {
    type Err = PasswordRoastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed.parse::<i64>().map(Self).map_err(|_| {
            PasswordRoastError::parse(
                "Strength level must be a whole number",
                Some(trimmed.to_string()),
            )
        })
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Effective alphabet size of a password: the summed sizes of the character
/// classes it draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharPool(u32);

impl CharPool {
    pub const EMPTY: CharPool = CharPool(0);

    pub(crate) fn add(&mut self, size: u32) {
        self.0 += size;
    }

    pub fn size(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for CharPool {
    fn from(size: u32) -> Self {
        Self(size)
    }
}

impl std::fmt::Display for CharPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps() {
        assert_eq!(Score::clamped(-3), Score::MIN);
        assert_eq!(Score::clamped(0).value(), 1);
        assert_eq!(Score::clamped(7).value(), 7);
        assert_eq!(Score::clamped(18), Score::MAX);
    }

    #[test]
    fn test_strength_level_parse() {
        assert_eq!(" 7 ".parse::<StrengthLevel>().unwrap().value(), 7);
        assert_eq!("-2".parse::<StrengthLevel>().unwrap().value(), -2);
        let err = "seven".parse::<StrengthLevel>().unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::clamped(4).to_string(), "4/10");
        assert_eq!(CharPool::from(62).to_string(), "62");
    }
}

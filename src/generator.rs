//! Random password generation by strength level

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::Rng;
use serde::Serialize;

use crate::charset::CharClass;
use crate::strength::score_password;
use crate::types::{Score, StrengthLevel};

/// Password length for each known strength level
const LENGTH_TABLE: &[(i64, usize)] = &[
    (1, 6),
    (2, 8),
    (3, 10),
    (4, 12),
    (5, 14),
    (6, 16),
    (7, 18),
    (8, 20),
    (9, 22),
    (10, 24),
];

/// Levels with an entry in the length table
const LEVEL_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Length used for levels outside the table
pub const DEFAULT_LENGTH: usize = 12;

/// Lowest level that mixes in special symbols
pub const SYMBOLS_FROM_LEVEL: i64 = 5;

/// Length and alphabet a level maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub length: usize,
    pub charset: Vec<char>,
}

impl GenerationPlan {
    pub fn for_level(level: StrengthLevel) -> Self {
        let length = LENGTH_TABLE
            .iter()
            .find(|(l, _)| *l == level.value())
            .map_or(DEFAULT_LENGTH, |(_, length)| *length);

        let mut classes = vec![CharClass::Lowercase, CharClass::Uppercase, CharClass::Digit];
        if level.value() >= SYMBOLS_FROM_LEVEL {
            classes.push(CharClass::Special);
        }
        let charset = classes.iter().flat_map(|class| class.chars().chars()).collect();

        Self { length, charset }
    }
}

/// A generated password together with its own assessment
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub level: StrengthLevel,
    pub assessed: Score,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedPassword {
    /// Whether the assessed score reached the requested level.
    ///
    /// Levels outside the length table have no target and always pass.
    pub fn meets_level(&self) -> bool {
        if !LEVEL_RANGE.contains(&self.level.value()) {
            return true;
        }
        i64::from(self.assessed.value()) >= self.level.value()
    }
}

/// Draw a password for `level` from the given random source.
///
/// Characters are picked independently and uniformly, so repeats are allowed.
pub fn generate_password_with<R: Rng + ?Sized>(level: StrengthLevel, rng: &mut R) -> String {
    let plan = GenerationPlan::for_level(level);
    // the plan always holds at least letters and digits
    (0..plan.length)
        .map(|_| plan.charset[rng.gen_range(0..plan.charset.len())])
        .collect()
}

/// Draw a password for `level` from the operating system CSPRNG
pub fn generate_password(level: StrengthLevel) -> String {
    generate_password_with(level, &mut OsRng)
}

/// Generate and re-score a password so callers can tell whether it reached
/// the requested level
pub fn generate_assessed<R: Rng + ?Sized>(level: StrengthLevel, rng: &mut R) -> GeneratedPassword {
    let password = generate_password_with(level, rng);
    let (assessed, _) = score_password(&password);

    tracing::info!(
        level = level.value(),
        length = password.chars().count(),
        assessed = assessed.value(),
        "Generated password"
    );

    GeneratedPassword {
        password,
        level,
        assessed,
        generated_at: Utc::now(),
    }
}

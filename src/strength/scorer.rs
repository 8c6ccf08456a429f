//! Heuristic password strength scoring

use serde::Serialize;

use super::common::is_common;
use crate::charset::classify;
use crate::types::{CharPool, Score};

/// (minimum length, bonus); every threshold met adds its bonus
const LENGTH_BONUSES: &[(usize, i32)] = &[(8, 2), (12, 3), (16, 2)];

/// (minimum pool size, bonus); cumulative like the length table
const VARIETY_BONUSES: &[(u32, i32)] = &[(36, 2), (62, 3), (92, 3)];

const WEAK_PENALTY: i32 = 5;

/// How a score was put together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthBreakdown {
    pub length: usize,
    pub char_pool: CharPool,
    pub length_bonus: i32,
    pub variety_bonus: i32,
    pub penalized: bool,
    pub score: Score,
}

impl StrengthBreakdown {
    /// Score before clamping
    pub fn raw(&self) -> i32 {
        let raw = self.length_bonus + self.variety_bonus;
        if self.penalized {
            raw - WEAK_PENALTY
        } else {
            raw
        }
    }
}

/// Letters only, at least one of them. The empty string is not "all letters".
fn is_all_letters(password: &str) -> bool {
    !password.is_empty() && password.chars().all(|c| c.is_ascii_alphabetic())
}

/// Score a password and report every component of the score
pub fn analyze(password: &str) -> StrengthBreakdown {
    let char_pool = classify(password);
    let length = password.chars().count();

    let length_bonus: i32 = LENGTH_BONUSES
        .iter()
        .filter(|(min, _)| length >= *min)
        .map(|(_, bonus)| bonus)
        .sum();

    let variety_bonus: i32 = VARIETY_BONUSES
        .iter()
        .filter(|(min, _)| char_pool.size() >= *min)
        .map(|(_, bonus)| bonus)
        .sum();

    let penalized = is_common(password) || is_all_letters(password);

    let mut breakdown = StrengthBreakdown {
        length,
        char_pool,
        length_bonus,
        variety_bonus,
        penalized,
        score: Score::MIN,
    };
    breakdown.score = Score::clamped(breakdown.raw());

    tracing::debug!(
        length,
        pool = char_pool.size(),
        length_bonus,
        variety_bonus,
        penalized,
        score = breakdown.score.value(),
        "Scored password"
    );

    breakdown
}

/// Score a password on the 1-10 scale and return its character pool
pub fn score_password(password: &str) -> (Score, CharPool) {
    let breakdown = analyze(password);
    (breakdown.score, breakdown.char_pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(password: &str) -> u8 {
        score_password(password).0.value()
    }

    #[test]
    fn test_troubadour_scenario() {
        let breakdown = analyze("Tr0ub4dor&3");
        assert_eq!(breakdown.char_pool.size(), 92);
        assert_eq!(breakdown.length, 11);
        assert_eq!(breakdown.length_bonus, 2);
        assert_eq!(breakdown.variety_bonus, 8);
        assert!(!breakdown.penalized);
        assert_eq!(breakdown.score.value(), 10);
    }

    #[test]
    fn test_length_bonuses_accumulate() {
        // 16 digits: 2 + 3 + 2 from length, pool 10 adds nothing
        assert_eq!(analyze("1234567890123456").length_bonus, 7);
        assert_eq!(score("1234567890123456"), 7);
        assert_eq!(score("12345670"), 2);
        assert_eq!(score("123456701234"), 5);
    }

    #[test]
    fn test_variety_thresholds() {
        // lower + digit = 36
        assert_eq!(analyze("abc1").variety_bonus, 2);
        // lower + upper + digit = 62
        assert_eq!(analyze("aB1").variety_bonus, 5);
        // lower + special = 56
        assert_eq!(analyze("a!").variety_bonus, 2);
    }

    #[test]
    fn test_common_passwords_penalized() {
        // "password": +2 length, all letters and common -> 2 - 5 clamps to 1
        assert_eq!(score("password"), 1);
        assert_eq!(score("123456"), 1);
        assert_eq!(score("QWERTY"), 1);
        // 9 digits: +2 length, pool 10 -> 2 - 5 -> 1
        assert_eq!(score("123456789"), 1);
        assert!(analyze("abc123").penalized);
    }

    #[test]
    fn test_all_letters_penalized() {
        let breakdown = analyze("CorrectHorseBatteryStaple");
        // length 25 -> 7, pool 52 -> 2, minus 5
        assert!(breakdown.penalized);
        assert_eq!(breakdown.raw(), 4);
        assert_eq!(breakdown.score.value(), 4);
    }

    #[test]
    fn test_empty_password() {
        let breakdown = analyze("");
        assert_eq!(breakdown.char_pool.size(), 0);
        assert!(!breakdown.penalized);
        assert_eq!(breakdown.raw(), 0);
        assert_eq!(breakdown.score, Score::MIN);
    }

    #[test]
    fn test_non_ascii_in_range() {
        for password in ["密码密码密码密码", "émile", "🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀", "Ünïcödé!9"] {
            let s = score(password);
            assert!((1..=10).contains(&s), "{password} scored {s}");
        }
        // non-ASCII letters are not "all letters"
        assert!(!analyze("émile").penalized);
    }

    #[test]
    fn test_deterministic() {
        let long = "x".repeat(300);
        for password in ["", "hunter2", "Tr0ub4dor&3", long.as_str()] {
            assert_eq!(score_password(password), score_password(password));
        }
    }
}

//! Combined password assessment

use serde::Serialize;

use crate::crack::{estimate_crack_time, CrackEstimate};
use crate::strength::{analyze, StrengthBreakdown};
use crate::types::{CharPool, Score};

/// Everything the tester reports about one password. The password itself is
/// not part of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordReport {
    pub score: Score,
    pub char_pool: CharPool,
    pub length: usize,
    pub breakdown: StrengthBreakdown,
    pub crack_times: CrackEstimate,
}

/// Score a password and estimate its crack times
pub fn assess(password: &str) -> PasswordReport {
    let breakdown = analyze(password);
    let crack_times = estimate_crack_time(breakdown.length, breakdown.char_pool);

    PasswordReport {
        score: breakdown.score,
        char_pool: breakdown.char_pool,
        length: breakdown.length,
        breakdown,
        crack_times,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess_uses_character_length() {
        let report = assess("ñññ");
        assert_eq!(report.length, 3);
        assert_eq!(report.char_pool.size(), 0);
        assert_eq!(report.crack_times.get("Basic GPU (100M/s)"), Some("instant"));
    }

    #[test]
    fn test_report_json_shape() {
        let report = assess("Tr0ub4dor&3");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 10);
        assert_eq!(json["char_pool"], 92);
        assert_eq!(json["length"], 11);
        assert_eq!(json["crack_times"].as_array().unwrap().len(), 3);
        assert_eq!(json["crack_times"][0]["attack"], "Basic GPU (100M/s)");
        // 92^11 / 1e14 is roughly 4e7 seconds
        assert!(json["crack_times"][0]["formatted"].as_str().unwrap().ends_with("centuries"));
        assert!(json["crack_times"][2]["formatted"].as_str().unwrap().ends_with("years"));
    }
}

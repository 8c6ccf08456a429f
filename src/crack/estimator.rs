//! Brute-force crack time estimation

use serde::Serialize;

use super::duration::CrackDuration;
use crate::types::CharPool;

/// A class of attacker and its guessing rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttackProfile {
    pub name: &'static str,
    pub attempts_per_second: f64,
}

/// Known attack rates, slowest first
pub const ATTACK_PROFILES: &[AttackProfile] = &[
    AttackProfile {
        name: "Basic GPU (100M/s)",
        attempts_per_second: 1e8,
    },
    AttackProfile {
        name: "Advanced GPU (10B/s)",
        attempts_per_second: 1e10,
    },
    AttackProfile {
        name: "Supercomputer (100T/s)",
        attempts_per_second: 1e14,
    },
];

/// Crack time against a single attack profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttackEstimate {
    pub attack: &'static str,
    pub attempts_per_second: f64,
    /// `None` when the keyspace is empty; JSON renders infinity as null too
    pub seconds: Option<f64>,
    pub formatted: String,
    #[serde(skip)]
    pub duration: CrackDuration,
}

/// Crack times for every attack profile, in profile order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CrackEstimate(Vec<AttackEstimate>);

impl CrackEstimate {
    /// Formatted duration for the named attack
    pub fn get(&self, attack: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|estimate| estimate.attack == attack)
            .map(|estimate| estimate.formatted.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttackEstimate> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a CrackEstimate {
    type Item = &'a AttackEstimate;
    type IntoIter = std::slice::Iter<'a, AttackEstimate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Number of candidates of `length` characters drawn from `char_pool`.
///
/// Computed in floating point so long passwords saturate to infinity instead
/// of overflowing. `None` for an empty pool.
pub fn keyspace(length: usize, char_pool: CharPool) -> Option<f64> {
    if char_pool.is_empty() {
        return None;
    }
    Some(f64::from(char_pool.size()).powf(length as f64))
}

/// Estimate how long each attack profile needs to exhaust the keyspace
pub fn estimate_crack_time(length: usize, char_pool: CharPool) -> CrackEstimate {
    let total = keyspace(length, char_pool);

    tracing::debug!(
        length,
        pool = char_pool.size(),
        keyspace = total.unwrap_or(0.0),
        "Estimating crack time"
    );

    let estimates = ATTACK_PROFILES
        .iter()
        .map(|profile| {
            let duration = match total {
                Some(total) => CrackDuration::Finite(total / profile.attempts_per_second),
                None => CrackDuration::Instant,
            };
            AttackEstimate {
                attack: profile.name,
                attempts_per_second: profile.attempts_per_second,
                seconds: total.map(|_| duration.seconds()),
                formatted: duration.to_string(),
                duration,
            }
        })
        .collect();

    CrackEstimate(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(length: usize, pool: u32) -> Vec<f64> {
        estimate_crack_time(length, CharPool::from(pool))
            .iter()
            .map(|e| e.duration.seconds())
            .collect()
    }

    #[test]
    fn test_profiles_in_order() {
        let estimate = estimate_crack_time(8, CharPool::from(62));
        let names: Vec<_> = estimate.iter().map(|e| e.attack).collect();
        assert_eq!(
            names,
            vec!["Basic GPU (100M/s)", "Advanced GPU (10B/s)", "Supercomputer (100T/s)"]
        );
    }

    #[test]
    fn test_known_values() {
        // 10^8 candidates at 1e8/s is exactly one second
        let estimate = estimate_crack_time(8, CharPool::from(10));
        assert_eq!(estimate.get("Basic GPU (100M/s)"), Some("1.00 seconds"));
        assert_eq!(estimate.get("Advanced GPU (10B/s)"), Some("0.01 seconds"));
        assert_eq!(estimate.get("Supercomputer (100T/s)"), Some("0.00 seconds"));
        assert_eq!(estimate.get("Quantum computer"), None);
    }

    #[test]
    fn test_empty_pool_is_instant() {
        for length in [0, 5] {
            let estimate = estimate_crack_time(length, CharPool::EMPTY);
            assert_eq!(estimate.len(), 3);
            for entry in &estimate {
                assert_eq!(entry.formatted, "instant");
                assert_eq!(entry.seconds, None);
            }
        }
    }

    #[test]
    fn test_zero_length_with_pool() {
        // a single candidate
        assert_eq!(keyspace(0, CharPool::from(26)), Some(1.0));
    }

    #[test]
    fn test_huge_keyspace_formats_as_infinite_centuries() {
        let estimate = estimate_crack_time(400, CharPool::from(92));
        for entry in &estimate {
            assert_eq!(entry.formatted, "inf centuries");
        }
    }

    #[test]
    fn test_monotonic_in_length() {
        for pool in [10, 26, 36, 62, 92] {
            let mut previous = seconds(0, pool);
            for length in 1..=300 {
                let current = seconds(length, pool);
                for (before, after) in previous.iter().zip(&current) {
                    assert!(after >= before, "pool {pool} length {length}");
                }
                previous = current;
            }
        }
    }

    #[test]
    fn test_monotonic_in_pool() {
        let pools = [0, 10, 26, 30, 36, 40, 52, 56, 62, 66, 72, 82, 92];
        for length in [0, 1, 8, 16, 64, 200] {
            for pair in pools.windows(2) {
                let smaller = seconds(length, pair[0]);
                let larger = seconds(length, pair[1]);
                for (a, b) in smaller.iter().zip(&larger) {
                    assert!(b >= a, "length {length} pools {pair:?}");
                }
            }
        }
    }
}

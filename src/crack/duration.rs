//! Human-readable rendering of crack durations

use serde::Serialize;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
/// Julian year, 365.25 days
const YEAR: f64 = 31_557_600.0;
const CENTURY: f64 = YEAR * 100.0;

/// Display unit for a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
    Centuries,
}

impl TimeUnit {
    /// Coarsest unit in which `seconds` stays readable. No rounding: a value
    /// just below a threshold keeps the finer unit.
    pub fn for_seconds(seconds: f64) -> Self {
        if seconds < MINUTE {
            TimeUnit::Seconds
        } else if seconds < HOUR {
            TimeUnit::Minutes
        } else if seconds < DAY {
            TimeUnit::Hours
        } else if seconds < YEAR {
            TimeUnit::Days
        } else if seconds < CENTURY {
            TimeUnit::Years
        } else {
            TimeUnit::Centuries
        }
    }

    pub fn seconds_per_unit(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => MINUTE,
            TimeUnit::Hours => HOUR,
            TimeUnit::Days => DAY,
            TimeUnit::Years => YEAR,
            TimeUnit::Centuries => CENTURY,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Seconds => write!(f, "seconds"),
            TimeUnit::Minutes => write!(f, "minutes"),
            TimeUnit::Hours => write!(f, "hours"),
            TimeUnit::Days => write!(f, "days"),
            TimeUnit::Years => write!(f, "years"),
            TimeUnit::Centuries => write!(f, "centuries"),
        }
    }
}

/// Time needed to exhaust a keyspace
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrackDuration {
    /// Nothing to search: the password uses no recognised character class
    Instant,
    /// Seconds to try every candidate; may be infinite for huge keyspaces
    Finite(f64),
}

impl CrackDuration {
    /// Seconds as a plain number, `0.0` for [`CrackDuration::Instant`]
    pub fn seconds(&self) -> f64 {
        match self {
            CrackDuration::Instant => 0.0,
            CrackDuration::Finite(seconds) => *seconds,
        }
    }

    /// Value scaled to its display unit
    pub fn scaled(&self) -> Option<(f64, TimeUnit)> {
        match self {
            CrackDuration::Instant => None,
            CrackDuration::Finite(seconds) => {
                let unit = TimeUnit::for_seconds(*seconds);
                Some((seconds / unit.seconds_per_unit(), unit))
            }
        }
    }
}

impl std::fmt::Display for CrackDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.scaled() {
            None => write!(f, "instant"),
            // f64 infinity renders as "inf"
            Some((value, unit)) => write!(f, "{:.2} {}", value, unit),
        }
    }
}

/// Format a number of seconds, e.g. `4000.0` -> `"1.11 hours"`
pub fn format_duration(seconds: f64) -> String {
    CrackDuration::Finite(seconds).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_selection() {
        assert_eq!(format_duration(45.0), "45.00 seconds");
        assert_eq!(format_duration(4000.0), "1.11 hours");
        assert_eq!(format_duration(40_000_000.0), "1.27 years");
        assert_eq!(format_duration(120.0), "2.00 minutes");
        assert_eq!(format_duration(172_800.0), "2.00 days");
    }

    #[test]
    fn test_no_carry_between_tiers() {
        assert_eq!(TimeUnit::for_seconds(59.999), TimeUnit::Seconds);
        assert_eq!(format_duration(59.999), "60.00 seconds");
        assert_eq!(TimeUnit::for_seconds(60.0), TimeUnit::Minutes);
        assert_eq!(TimeUnit::for_seconds(YEAR - 1.0), TimeUnit::Days);
        assert_eq!(TimeUnit::for_seconds(CENTURY), TimeUnit::Centuries);
    }

    #[test]
    fn test_centuries_and_infinity() {
        assert_eq!(format_duration(CENTURY * 3.0), "3.00 centuries");
        // a century is 100 years, not 1000
        assert_eq!(format_duration(1e10), "3.17 centuries");
        assert_eq!(format_duration(f64::INFINITY), "inf centuries");
    }

    #[test]
    fn test_instant() {
        assert_eq!(CrackDuration::Instant.to_string(), "instant");
        assert_eq!(CrackDuration::Instant.seconds(), 0.0);
        assert!(CrackDuration::Instant.scaled().is_none());
    }
}

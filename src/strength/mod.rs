//! Password strength scoring
//!
//! Scores are built from cumulative length and character-variety bonuses,
//! minus a flat penalty for well-known or letters-only passwords.

mod common;
mod scorer;

pub use common::{is_common, COMMON_PASSWORDS};
pub use scorer::{analyze, score_password, StrengthBreakdown};

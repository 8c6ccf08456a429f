//! Brute-force crack time estimation
//!
//! The keyspace is `pool ^ length`; each attack profile divides it by a fixed
//! guessing rate and the result is rendered in the coarsest readable unit.

mod duration;
mod estimator;

pub use duration::{format_duration, CrackDuration, TimeUnit};
pub use estimator::{
    estimate_crack_time, keyspace, AttackEstimate, AttackProfile, CrackEstimate, ATTACK_PROFILES,
};

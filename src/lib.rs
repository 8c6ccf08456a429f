//! Password Roast - password strength testing with a bad attitude
//!
//! Scores passwords on a 1-10 scale, estimates how long a brute-force attack
//! would take, generates new passwords by strength level and has something
//! rude to say about every result.

pub mod charset;
pub mod config;
pub mod crack;
pub mod error;
pub mod generator;
pub mod input;
pub mod remarks;
pub mod report;
pub mod strength;
pub mod types;

// Re-export commonly used types
pub use config::RoastConfig;
pub use error::{PasswordRoastError, Result};
pub use types::{CharPool, Score, StrengthLevel};

// Re-export main functionality
pub use crack::{estimate_crack_time, CrackEstimate};
pub use generator::{generate_assessed, generate_password, generate_password_with, GeneratedPassword};
pub use remarks::{pick_remark, RemarkBook};
pub use report::{assess, PasswordReport};
pub use strength::score_password;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library: load `.env`, read configuration and install the
/// stderr log subscriber
pub fn init() -> Result<RoastConfig> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let config = RoastConfig::from_env();
    let filter = config.env_filter()?;

    // A subscriber may already be installed (tests, embedding applications)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    Ok(config)
}

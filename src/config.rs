//! Environment-driven configuration

use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::error::{PasswordRoastError, Result};
use crate::remarks::RemarkBook;

/// Directory holding `Level_<score>_Insults.txt` files
pub const REMARKS_DIR_VAR: &str = "PASSWORD_ROAST_REMARKS_DIR";
/// Log filter directive, e.g. `debug` or `password_roast=trace`
pub const LOG_VAR: &str = "PASSWORD_ROAST_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoastConfig {
    pub remarks_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for RoastConfig {
    fn default() -> Self {
        Self {
            remarks_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RoastConfig {
    /// Read configuration from the process environment.
    ///
    /// The log filter comes from `PASSWORD_ROAST_LOG`, then `RUST_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            remarks_dir: get(REMARKS_DIR_VAR).map(PathBuf::from),
            log_filter: get(LOG_VAR)
                .or_else(|| get("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Parse the log filter
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            PasswordRoastError::config(format!("Invalid log filter '{}': {}", self.log_filter, e))
        })
    }

    /// Built-in remarks, overlaid with the configured remark directory.
    ///
    /// An unreadable directory is logged and skipped.
    pub fn load_remarks(&self) -> RemarkBook {
        let mut book = RemarkBook::builtin();
        if let Some(dir) = &self.remarks_dir {
            match RemarkBook::load_dir(dir) {
                Ok(custom) => {
                    tracing::info!(dir = %dir.display(), scores = custom.scores().count(), "Loaded custom remarks");
                    book.merge(custom);
                }
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), error = %e, "Failed to load remarks, using built-in ones");
                }
            }
        }
        book
    }
}

//! Error handling for password-roast

use thiserror::Error;

/// Main error type for password-roast
#[derive(Error, Debug, Clone)]
pub enum PasswordRoastError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Prompt error: {message}")]
    Prompt { message: String, cancelled: bool },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl PasswordRoastError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>, cancelled: bool) -> Self {
        Self::Prompt {
            message: message.into(),
            cancelled,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Whether the user backed out of a prompt (Esc / Ctrl-C)
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Prompt { cancelled: true, .. })
    }

    /// Whether the menu can recover by asking again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or environment", message)
            }
            Self::Parse { message, content } => {
                let got = content.as_ref().map_or(String::new(), |c| format!(" (got '{}')", c));
                format!("❌ {}{}\n💡 Type a whole number, for example 7", message, got)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Prompt { message, .. } => {
                format!("❌ Could not read input: {}\n💡 Run in an interactive terminal or use a subcommand", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

/// Convert from common error types
impl From<std::io::Error> for PasswordRoastError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for PasswordRoastError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON encoding failed: {}", err))
    }
}

impl From<inquire::InquireError> for PasswordRoastError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled | inquire::InquireError::OperationInterrupted => {
                Self::prompt("operation cancelled", true)
            }
            other => Self::prompt(other.to_string(), false),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PasswordRoastError>;

//! Error types for rptodo

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Outcome code returned by every storage and service operation.
///
/// Storage backends never fail across their contract; they report one of
/// these codes alongside a best-effort collection instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCode {
    #[default]
    Success,
    /// The config directory could not be created
    DirError,
    /// The config file could not be created
    FileError,
    DbReadError,
    DbWriteError,
    /// Stored data exists but does not parse
    DecodeError,
    /// A to-do identifier outside `[1, len]`
    IdError,
}

impl ErrorCode {
    pub fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Stable numeric value of this code
    pub fn value(&self) -> i32 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::DirError => 1,
            ErrorCode::FileError => 2,
            ErrorCode::DbReadError => 3,
            ErrorCode::DbWriteError => 4,
            ErrorCode::DecodeError => 5,
            ErrorCode::IdError => 6,
        }
    }

    /// Human-readable description used by the adapters
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "success",
            ErrorCode::DirError => "config directory error",
            ErrorCode::FileError => "config file error",
            ErrorCode::DbReadError => "database read error",
            ErrorCode::DbWriteError => "database write error",
            ErrorCode::DecodeError => "invalid JSON in database",
            ErrorCode::IdError => "to-do id error",
        }
    }

    /// Convert into a `Result`, tagging failures with the attempted action
    pub fn into_result(self, action: &'static str) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(TodoError::Operation { action, code: self })
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Main error type for the rptodo adapters
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{action} failed with \"{code}\"")]
    Operation {
        action: &'static str,
        code: ErrorCode,
    },

    #[error("Config file not found: {0}")]
    NotInitialized(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feature not enabled: {0}")]
    FeatureNotEnabled(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TodoError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TodoError::Operation { code, .. } => code.value(),
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TodoError::NotInitialized(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'rptodo init' to create the config and database\n\
                    • Set RPTODO_CONFIG_DIR to the directory holding config.toml",
                    path.display()
                )
            }
            TodoError::Operation {
                code: ErrorCode::IdError,
                ..
            } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Run 'rptodo list' to see current to-do ids\n\
                    • Ids shift down after a to-do is removed",
                    self
                )
            }
            TodoError::Operation {
                code: ErrorCode::DecodeError,
                ..
            } => {
                format!(
                    "{}\n\n\
                    The database file exists but is not a valid to-do list.\n\
                    Fix or remove it, then run 'rptodo init' again.",
                    self
                )
            }
            TodoError::FeatureNotEnabled(feature) => {
                format!(
                    "{}\n\n\
                    Rebuild with: cargo install rptodo --features {}",
                    self, feature
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TodoError
pub type Result<T> = std::result::Result<T, TodoError>;

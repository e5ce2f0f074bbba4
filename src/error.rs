use thiserror::Error;
use tracing::{error, warn};

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,    // Blue - informational
    Warning, // Yellow - recoverable, retry with corrected input
    Error,   // Red - operation failed
}

/// Domain-specific errors for the theme studio
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Unknown theme preset: {0}")]
    UnknownPreset(String),

    #[error("Custom theme not found: {0}")]
    ThemeNotFound(String),

    #[error("Theme name must not be empty")]
    MissingThemeName,

    #[error("Theme '{name}' could not be saved")]
    SaveFailed { name: String },

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("Export to '{filename}' failed: {source}")]
    Download {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownPreset(_) => ErrorSeverity::Warning,
            Self::ThemeNotFound(_) => ErrorSeverity::Info,
            Self::MissingThemeName => ErrorSeverity::Warning,
            Self::SaveFailed { .. } => ErrorSeverity::Error,
            Self::Import(_) => ErrorSeverity::Warning,
            Self::Download { .. } => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownPreset(id) => format!("No preset named '{}'", id),
            Self::ThemeNotFound(id) => format!("Theme {} no longer exists", id),
            Self::MissingThemeName => "Please enter a theme name".to_string(),
            Self::SaveFailed { name } => {
                format!("Could not save '{}'. Storage may be full or disabled", name)
            }
            // Import messages are already written for the user
            Self::Import(e) => e.to_string(),
            Self::Download { filename, .. } => format!("Could not write {}", filename),
        }
    }
}

/// Reasons a pasted theme JSON is rejected, checked in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Invalid theme format: missing or invalid 'colors' object")]
    InvalidFormat,

    #[error("Missing required color keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),
}

/// Failures of the underlying key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage is unavailable")]
    Unavailable,

    #[error("Storage quota exceeded writing '{key}' ({bytes} bytes, limit {limit})")]
    QuotaExceeded {
        key: String,
        bytes: usize,
        limit: usize,
    },

    #[error("Storage I/O failed for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ThemeError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use theme_studio::error::ResultExt;
///
/// // Log and continue if the store rejects the write
/// store.set(KEY, &json).log_err();
///
/// // Log as warning for expected failures
/// let raw = store.get(KEY).warn_on_err().flatten();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

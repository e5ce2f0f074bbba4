//! Structured JSONL logging to a file plus human-readable stderr output.
//!
//! - **JSONL to file** (`<log dir>/theme-studio.jsonl`) for tooling
//! - **Compact to stderr** for people
//!
//! # Usage
//!
//! ```rust,ignore
//! use theme_studio::logging;
//!
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init(&config.get_log_dir());
//!
//! tracing::info!(event_type = "theme_event", theme_id = "custom-1", "Theme saved");
//! ```
//!
//! # JSONL Output Format
//!
//! ```json
//! {"timestamp":"2026-01-05T10:30:45.123Z","level":"INFO","target":"theme_studio::store::themes","fields":{"message":"Saved custom theme","theme_count":2}}
//! ```

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "theme-studio.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Path of the JSONL log inside `log_dir`
pub fn log_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

fn open_log_file(log_dir: &Path) -> io::Result<File> {
    fs::create_dir_all(log_dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(log_dir))
}

/// Initialize the dual-output logging system.
///
/// When the log file cannot be opened only stderr logging is installed.
/// Returns a guard that MUST be kept alive for the duration of the program.
pub fn init(log_dir: &Path) -> LoggingGuard {
    let log_path = log_path(log_dir);

    let (json_layer, file_guard) = match open_log_file(log_dir) {
        Ok(file) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("[LOGGING] Failed to open {}: {}", log_path.display(), e);
            (None, None)
        }
    };

    // Default to info, allow override via RUST_LOG
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(stderr_layer)
        .try_init()
    {
        eprintln!("[LOGGING] Subscriber already installed: {}", e);
    }

    tracing::debug!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

// =============================================================================
// STRUCTURED LOGGING HELPERS
// =============================================================================

/// Log a theme lifecycle event (saved, imported, exported, cleared)
pub fn log_theme_event(action: &str, theme: &str, success: bool) {
    if success {
        tracing::info!(
            event_type = "theme_event",
            action = action,
            theme = theme,
            success = true,
            "Theme {} {}", action, theme
        );
    } else {
        tracing::warn!(
            event_type = "theme_event",
            action = action,
            theme = theme,
            success = false,
            "Theme {} failed for {}", action, theme
        );
    }
}

/// Log how long an operation took, warning above `threshold_ms`
pub fn log_perf(operation: &str, duration_ms: u64, threshold_ms: u64) {
    let is_slow = duration_ms > threshold_ms;
    if is_slow {
        tracing::warn!(
            event_type = "performance",
            operation = operation,
            duration_ms = duration_ms,
            threshold_ms = threshold_ms,
            is_slow = true,
            "Slow operation: {} took {}ms (threshold: {}ms)", operation, duration_ms, threshold_ms
        );
    } else {
        tracing::debug!(
            event_type = "performance",
            operation = operation,
            duration_ms = duration_ms,
            threshold_ms = threshold_ms,
            is_slow = false,
            "Operation {} completed in {}ms", operation, duration_ms
        );
    }
}

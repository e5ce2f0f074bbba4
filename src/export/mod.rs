//! Export module - Serialize design tokens and hand them to a download sink
//!
//! This module provides functionality for:
//! - Serializing a TokenModel to CSS, SCSS, Tailwind config text and JSON
//! - Choosing default filenames and MIME types per format
//! - Delivering the result through an injected [`DownloadSink`]
//!
//! The sink is the only side effect; serializers are pure and can be tested
//! without a browser or file system.

mod formats;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info, instrument, warn};

use crate::error::ThemeError;
use crate::tokens::TokenModel;

pub use formats::{
    export_as_css, export_as_json, export_as_scss, export_as_tailwind, DEFAULT_LINE_HEIGHT,
};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Css,
    Tailwind,
    Scss,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::Tailwind,
        ExportFormat::Scss,
        ExportFormat::Json,
    ];

    /// Filename used when the caller does not pick one
    pub fn default_filename(self) -> &'static str {
        match self {
            Self::Css => "design-tokens.css",
            Self::Tailwind => "tailwind.config.js",
            Self::Scss => "design-tokens.scss",
            Self::Json => "design-tokens.json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Css => "text/css",
            Self::Tailwind => "application/javascript",
            Self::Scss => "text/x-scss",
            Self::Json => "application/json",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "js",
            Self::Scss => "scss",
            Self::Json => "json",
        }
    }

    /// Run the serializer for this format
    pub fn render(self, tokens: &TokenModel) -> String {
        match self {
            Self::Css => export_as_css(tokens),
            Self::Tailwind => export_as_tailwind(tokens),
            Self::Scss => export_as_scss(tokens),
            Self::Json => export_as_json(tokens),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css => write!(f, "css"),
            Self::Tailwind => write!(f, "tailwind"),
            Self::Scss => write!(f, "scss"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "tailwind" | "js" => Ok(Self::Tailwind),
            "scss" => Ok(Self::Scss),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown export format '{}' (expected css, tailwind, scss or json)",
                other
            )),
        }
    }
}

/// Receiver for exported files (a browser download, a directory, a test buffer)
pub trait DownloadSink {
    fn deliver(&self, content: &str, filename: &str, mime_type: &str) -> io::Result<()>;
}

impl<F> DownloadSink for F
where
    F: Fn(&str, &str, &str) -> io::Result<()>,
{
    fn deliver(&self, content: &str, filename: &str, mime_type: &str) -> io::Result<()> {
        self(content, filename, mime_type)
    }
}

/// Sink that writes each export into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `filename` lands. Directory components are stripped so a theme
    /// name can never write outside the export directory.
    pub fn path_for(&self, filename: &str) -> io::Result<PathBuf> {
        let name = Path::new(filename).file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a file name: '{}'", filename),
            )
        })?;
        Ok(self.dir.join(name))
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, content: &str, filename: &str, mime_type: &str) -> io::Result<()> {
        let path = self.path_for(filename)?;
        fs::create_dir_all(&self.dir)?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &path)?;

        debug!(
            path = %path.display(),
            mime_type = mime_type,
            bytes = content.len(),
            "Wrote export file"
        );
        Ok(())
    }
}

/// Build `<lower-cased-hyphenated-name>.<ext>` for a theme export
pub fn filename_for(theme_name: &str, format: ExportFormat) -> String {
    let stem = theme_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    let stem = if stem.is_empty() { "theme".to_string() } else { stem };
    format!("{}.{}", stem, format.extension())
}

/// Serialize `tokens` in `format` and deliver it to `sink`.
///
/// Returns the filename that was used.
#[instrument(name = "export_and_download", skip(tokens, sink))]
pub fn export_and_download(
    tokens: &TokenModel,
    format: ExportFormat,
    filename: Option<&str>,
    sink: &dyn DownloadSink,
) -> Result<String, ThemeError> {
    let filename = filename.unwrap_or(format.default_filename()).to_string();
    let content = format.render(tokens);

    match sink.deliver(&content, &filename, format.mime_type()) {
        Ok(()) => {
            info!(
                format = %format,
                filename = %filename,
                bytes = content.len(),
                "Exported design tokens"
            );
            Ok(filename)
        }
        Err(source) => {
            warn!(format = %format, filename = %filename, error = %source, "Export failed");
            Err(ThemeError::Download { filename, source })
        }
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;

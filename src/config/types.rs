//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::color::WcagLevel;

// ============================================
// EXPORT CONFIG
// ============================================

/// Settings for `theme-studio export`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// Format used when none is given on the command line (default: "css")
    #[serde(default = "default_export_format")]
    pub default_format: String,
    /// Keep the typography section when exporting a token file (default: true)
    #[serde(default = "default_include_typography")]
    pub include_typography: bool,
}

fn default_export_format() -> String {
    DEFAULT_EXPORT_FORMAT.to_string()
}
fn default_include_typography() -> bool {
    DEFAULT_INCLUDE_TYPOGRAPHY
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            default_format: DEFAULT_EXPORT_FORMAT.to_string(),
            include_typography: DEFAULT_INCLUDE_TYPOGRAPHY,
        }
    }
}

// ============================================
// MAIN CONFIG
// ============================================

/// User configuration read from `~/.theme-studio/config.json`.
/// Every field is optional; getters supply defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding persisted themes, favorites and the active theme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<String>,
    /// Directory exports are written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,
    /// Directory for JSONL logs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,
    /// Theme id restored by clear-cache (default: "default")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_theme_id: Option<String>,
    /// WCAG level used for contrast validation (default: AA)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast_level: Option<WcagLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

/// `~/.theme-studio/<sub>`, or `./.theme-studio/<sub>` without a home directory
fn app_subdir(sub: &str) -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_APP_DIR)
        .join(sub)
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

impl Config {
    /// Returns the storage directory with `~` expanded
    pub fn get_storage_dir(&self) -> PathBuf {
        self.storage_dir
            .as_deref()
            .map(expand)
            .unwrap_or_else(|| app_subdir(DEFAULT_STORAGE_SUBDIR))
    }

    /// Returns the export directory with `~` expanded
    pub fn get_export_dir(&self) -> PathBuf {
        self.export_dir
            .as_deref()
            .map(expand)
            .unwrap_or_else(|| app_subdir(DEFAULT_EXPORT_SUBDIR))
    }

    /// Returns the log directory with `~` expanded
    pub fn get_log_dir(&self) -> PathBuf {
        self.log_dir
            .as_deref()
            .map(expand)
            .unwrap_or_else(|| app_subdir(DEFAULT_LOG_SUBDIR))
    }

    pub fn get_default_theme_id(&self) -> String {
        self.default_theme_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_THEME_ID.to_string())
    }

    pub fn get_contrast_level(&self) -> WcagLevel {
        self.contrast_level.unwrap_or_default()
    }

    pub fn get_export(&self) -> ExportConfig {
        self.export.clone().unwrap_or_default()
    }
}

//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Location of the user config file
pub const CONFIG_PATH: &str = "~/.theme-studio/config.json";

/// Directories under the home directory
pub const DEFAULT_APP_DIR: &str = ".theme-studio";
pub const DEFAULT_STORAGE_SUBDIR: &str = "storage";
pub const DEFAULT_EXPORT_SUBDIR: &str = "exports";
pub const DEFAULT_LOG_SUBDIR: &str = "logs";

/// Theme restored when the cache is cleared
pub const DEFAULT_THEME_ID: &str = crate::tokens::DEFAULT_PRESET_ID;

/// Export settings
pub const DEFAULT_EXPORT_FORMAT: &str = "css";
pub const DEFAULT_INCLUDE_TYPOGRAPHY: bool = true;

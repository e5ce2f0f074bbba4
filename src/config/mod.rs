//! Configuration module - Application settings
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.theme-studio/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, ExportConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{CONFIG_PATH, DEFAULT_THEME_ID};
pub use loader::{load_config, load_config_from};
pub use types::{Config, ExportConfig};

#[cfg(test)]
pub use defaults::{DEFAULT_EXPORT_FORMAT, DEFAULT_INCLUDE_TYPOGRAPHY};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

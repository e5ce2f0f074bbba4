//! Token module - Design token model, custom themes and presets
//!
//! # Module Structure
//!
//! - `types` - TokenModel, Typography, CustomTheme and the required key list
//! - `presets` - Built-in color presets for the customizer

pub mod presets;
mod types;

pub use presets::{default_preset, find_preset, presets, ThemePreset, DEFAULT_PRESET_ID};
pub use types::{
    generate_theme_id, CustomTheme, CustomThemePatch, TokenMap, TokenModel, Typography,
    REQUIRED_COLOR_KEYS,
};

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;

//! Color module - Conversions and contrast checks for theme colors
//!
//! Theme colors arrive in two encodings:
//! - Hex: `#3B82F6` (leading `#` optional)
//! - HSL triplet: `221.2 83.2% 53.3%` (the form CSS variables store)
//!
//! # Module Structure
//!
//! - `convert` - Hex/HSL/RGB conversion and the light/dark text heuristic
//! - `contrast` - WCAG relative luminance, contrast ratio and pair validation

pub mod contrast;
pub mod convert;

pub use contrast::{
    contrast_ratio, validate_contrast, validate_pairs, ContrastCheck, WcagLevel, CONTRAST_PAIRS,
};
pub use convert::{
    get_contrast_color, hex_to_hsl, hsl_to_hex, hsl_to_rgb, is_valid_hex, parse_color_rgb,
    parse_hex_rgb, parse_hsl_string, to_hex, to_hsl,
};

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;

//! WCAG contrast validation
//!
//! Implements the WCAG 2.x relative-luminance contrast ratio. This is kept
//! separate from [`super::convert::get_contrast_color`], which is only a
//! quick light/dark text heuristic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::convert::parse_color_rgb;

/// Ratio used when a color cannot be parsed: "no contrast", which fails every level
pub const UNPARSABLE_CONTRAST_RATIO: f64 = 1.0;

/// The background/foreground token pairs checked on every edit
pub const CONTRAST_PAIRS: [(&str, &str); 8] = [
    ("--background", "--foreground"),
    ("--card", "--card-foreground"),
    ("--popover", "--popover-foreground"),
    ("--primary", "--primary-foreground"),
    ("--secondary", "--secondary-foreground"),
    ("--muted", "--muted-foreground"),
    ("--accent", "--accent-foreground"),
    ("--destructive", "--destructive-foreground"),
];

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WcagLevel {
    #[default]
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level
    pub fn threshold(self, is_large_text: bool) -> f64 {
        match (self, is_large_text) {
            (WcagLevel::Aa, false) => 4.5,
            (WcagLevel::Aa, true) => 3.0,
            (WcagLevel::Aaa, false) => 7.0,
            (WcagLevel::Aaa, true) => 4.5,
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aa => write!(f, "AA"),
            Self::Aaa => write!(f, "AAA"),
        }
    }
}

impl FromStr for WcagLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(Self::Aa),
            "AAA" => Ok(Self::Aaa),
            other => Err(format!("unknown WCAG level '{}' (expected AA or AAA)", other)),
        }
    }
}

/// Compute WCAG relative luminance for an sRGB color.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    let to_linear = |c: u8| -> f64 {
        let s = c as f64 / 255.0;
        if s <= 0.04045 {
            s / 12.92
        } else {
            ((s + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * to_linear(r) + 0.7152 * to_linear(g) + 0.0722 * to_linear(b)
}

fn ratio_between(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(a.0, a.1, a.2);
    let l2 = relative_luminance(b.0, b.1, b.2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colors given as hex or HSL strings.
///
/// Returns [`UNPARSABLE_CONTRAST_RATIO`] if either color cannot be parsed.
pub fn contrast_ratio(background: &str, foreground: &str) -> f64 {
    match (parse_color_rgb(background), parse_color_rgb(foreground)) {
        (Some(bg), Some(fg)) => ratio_between(bg, fg),
        _ => {
            debug!(
                background = background,
                foreground = foreground,
                "Unparsable color in contrast check, using default ratio"
            );
            UNPARSABLE_CONTRAST_RATIO
        }
    }
}

/// Check whether a background/foreground pair meets a WCAG level.
pub fn validate_contrast(
    background: &str,
    foreground: &str,
    level: WcagLevel,
    is_large_text: bool,
) -> bool {
    contrast_ratio(background, foreground) >= level.threshold(is_large_text)
}

/// Result of checking one background/foreground pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastCheck {
    pub background: &'static str,
    pub foreground: &'static str,
    pub ratio: f64,
    pub passes: bool,
}

impl ContrastCheck {
    /// Short name of the pair ("primary" for `--primary`/`--primary-foreground`)
    pub fn label(&self) -> &'static str {
        self.background.trim_start_matches("--")
    }
}

/// Check every pair in [`CONTRAST_PAIRS`] as normal-size text.
///
/// Pairs with a missing color are skipped, not reported as failures.
pub fn validate_pairs(colors: &IndexMap<String, String>, level: WcagLevel) -> Vec<ContrastCheck> {
    CONTRAST_PAIRS
        .iter()
        .filter_map(|&(background, foreground)| {
            let bg = colors.get(background)?;
            let fg = colors.get(foreground)?;
            let ratio = contrast_ratio(bg, fg);
            Some(ContrastCheck {
                background,
                foreground,
                ratio,
                passes: ratio >= level.threshold(false),
            })
        })
        .collect()
}

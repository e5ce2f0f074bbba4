//! Built-in color presets
//!
//! All presets use HSL triplets and define every key in
//! [`REQUIRED_COLOR_KEYS`](super::types::REQUIRED_COLOR_KEYS).

use super::types::TokenMap;

/// Preset the customizer starts from
pub const DEFAULT_PRESET_ID: &str = "default";

/// A named, read-only color set
#[derive(Debug, Clone, Copy)]
pub struct ThemePreset {
    pub id: &'static str,
    pub name: &'static str,
    base: &'static [(&'static str, &'static str)],
    overrides: &'static [(&'static str, &'static str)],
}

impl ThemePreset {
    /// Materialize the preset's colors in canonical key order
    pub fn colors(&self) -> TokenMap {
        let mut colors: TokenMap = self
            .base
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (key, value) in self.overrides {
            colors.insert(key.to_string(), value.to_string());
        }
        colors
    }
}

const LIGHT: &[(&str, &str)] = &[
    ("--background", "0 0% 100%"),
    ("--foreground", "222.2 84% 4.9%"),
    ("--card", "0 0% 100%"),
    ("--card-foreground", "222.2 84% 4.9%"),
    ("--popover", "0 0% 100%"),
    ("--popover-foreground", "222.2 84% 4.9%"),
    ("--primary", "222.2 47.4% 11.2%"),
    ("--primary-foreground", "210 40% 98%"),
    ("--secondary", "210 40% 96.1%"),
    ("--secondary-foreground", "222.2 47.4% 11.2%"),
    ("--muted", "210 40% 96.1%"),
    ("--muted-foreground", "215.4 16.3% 46.9%"),
    ("--accent", "210 40% 96.1%"),
    ("--accent-foreground", "222.2 47.4% 11.2%"),
    ("--destructive", "0 84.2% 60.2%"),
    ("--destructive-foreground", "210 40% 98%"),
    ("--border", "214.3 31.8% 91.4%"),
    ("--input", "214.3 31.8% 91.4%"),
    ("--ring", "222.2 84% 4.9%"),
];

const DARK: &[(&str, &str)] = &[
    ("--background", "222.2 84% 4.9%"),
    ("--foreground", "210 40% 98%"),
    ("--card", "222.2 84% 4.9%"),
    ("--card-foreground", "210 40% 98%"),
    ("--popover", "222.2 84% 4.9%"),
    ("--popover-foreground", "210 40% 98%"),
    ("--primary", "210 40% 98%"),
    ("--primary-foreground", "222.2 47.4% 11.2%"),
    ("--secondary", "217.2 32.6% 17.5%"),
    ("--secondary-foreground", "210 40% 98%"),
    ("--muted", "217.2 32.6% 17.5%"),
    ("--muted-foreground", "215 20.2% 65.1%"),
    ("--accent", "217.2 32.6% 17.5%"),
    ("--accent-foreground", "210 40% 98%"),
    ("--destructive", "0 62.8% 30.6%"),
    ("--destructive-foreground", "210 40% 98%"),
    ("--border", "217.2 32.6% 17.5%"),
    ("--input", "217.2 32.6% 17.5%"),
    ("--ring", "212.7 26.8% 83.9%"),
];

const PRESETS: &[ThemePreset] = &[
    ThemePreset {
        id: DEFAULT_PRESET_ID,
        name: "Default",
        base: LIGHT,
        overrides: &[],
    },
    ThemePreset {
        id: "dark",
        name: "Dark",
        base: DARK,
        overrides: &[],
    },
    ThemePreset {
        id: "blue",
        name: "Blue",
        base: LIGHT,
        overrides: &[
            ("--primary", "221.2 83.2% 53.3%"),
            ("--primary-foreground", "210 40% 98%"),
            ("--ring", "221.2 83.2% 53.3%"),
        ],
    },
    ThemePreset {
        id: "green",
        name: "Green",
        base: LIGHT,
        overrides: &[
            ("--primary", "142.1 76.2% 36.3%"),
            ("--primary-foreground", "355.7 100% 97.3%"),
            ("--ring", "142.1 76.2% 36.3%"),
        ],
    },
    ThemePreset {
        id: "rose",
        name: "Rose",
        base: LIGHT,
        overrides: &[
            ("--primary", "346.8 77.2% 49.8%"),
            ("--primary-foreground", "355.7 100% 97.3%"),
            ("--ring", "346.8 77.2% 49.8%"),
        ],
    },
];

/// All built-in presets, default first
pub fn presets() -> &'static [ThemePreset] {
    PRESETS
}

/// Look up a preset by id
pub fn find_preset(id: &str) -> Option<&'static ThemePreset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

/// The preset the customizer starts from
pub fn default_preset() -> &'static ThemePreset {
    &PRESETS[0]
}

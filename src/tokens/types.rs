//! Token model type definitions
//!
//! Contains the struct definitions shared by the serializers, the store and
//! the customizer:
//! - TokenModel, Typography
//! - CustomTheme, CustomThemePatch
//! - REQUIRED_COLOR_KEYS

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered name -> value mapping used by every token section
pub type TokenMap = IndexMap<String, String>;

/// CSS variables every importable theme must define.
///
/// Versioned separately from [`TokenModel`]: adding a key here changes what
/// imports accept without touching the token shape.
pub const REQUIRED_COLOR_KEYS: [&str; 19] = [
    "--background",
    "--foreground",
    "--card",
    "--card-foreground",
    "--popover",
    "--popover-foreground",
    "--primary",
    "--primary-foreground",
    "--secondary",
    "--secondary-foreground",
    "--muted",
    "--muted-foreground",
    "--accent",
    "--accent-foreground",
    "--destructive",
    "--destructive-foreground",
    "--border",
    "--input",
    "--ring",
];

/// Typography tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Primary font stack, e.g. `"Inter, system-ui"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// name -> CSS length (`"base": "1rem"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_sizes: Option<TokenMap>,
    /// name -> numeric weight (`"bold": "700"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weights: Option<TokenMap>,
    /// name -> unitless ratio (`"base": "1.5"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_heights: Option<TokenMap>,
}

/// A complete set of design tokens. Every section is optional; serializers
/// skip the ones that are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenModel {
    /// name -> color (hex `#3B82F6` or HSL triplet `221.2 83.2% 53.3%`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<TokenMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    /// name -> CSS length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<TokenMap>,
    /// name -> `box-shadow` value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<TokenMap>,
    /// name -> CSS length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<TokenMap>,
    /// name -> `background-image` gradient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradients: Option<TokenMap>,
}

impl TokenModel {
    /// Token model with only a colors section
    pub fn with_colors(colors: TokenMap) -> Self {
        TokenModel {
            colors: Some(colors),
            ..Default::default()
        }
    }

    /// Look up a color token
    pub fn color(&self, key: &str) -> Option<&str> {
        self.colors.as_ref()?.get(key).map(String::as_str)
    }

    /// Set one color token, creating the colors section if needed.
    /// Existing keys keep their position.
    pub fn set_color(&mut self, key: &str, value: &str) {
        self.colors
            .get_or_insert_with(TokenMap::new)
            .insert(key.to_string(), value.to_string());
    }

    /// Required keys absent from the colors section, in canonical order
    pub fn missing_required_colors(&self) -> Vec<&'static str> {
        REQUIRED_COLOR_KEYS
            .iter()
            .copied()
            .filter(|key| self.color(key).is_none())
            .collect()
    }
}

/// A user-created theme as persisted by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTheme {
    /// `custom-<unix millis>-<random>`
    pub id: String,
    /// Display name; not required to be unique
    pub name: String,
    pub colors: TokenMap,
}

impl CustomTheme {
    /// Create a theme with a freshly generated id
    pub fn new(name: impl Into<String>, colors: TokenMap) -> Self {
        CustomTheme {
            id: generate_theme_id(),
            name: name.into(),
            colors,
        }
    }

    /// Creation time encoded in a generated id
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let millis = self
            .id
            .strip_prefix("custom-")?
            .split('-')
            .next()?
            .parse::<i64>()
            .ok()?;
        chrono::DateTime::from_timestamp_millis(millis)
    }

    /// Merge a patch into this theme; present fields replace stored ones
    pub fn apply(&mut self, patch: CustomThemePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(colors) = patch.colors {
            self.colors = colors;
        }
    }
}

/// Partial update for a stored [`CustomTheme`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomThemePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<TokenMap>,
}

/// Generate a custom theme id from the current time plus a short random suffix
pub fn generate_theme_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("custom-{}-{}", millis, &suffix[..8])
}

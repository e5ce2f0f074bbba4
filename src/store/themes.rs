//! Custom themes, favorites and the active theme id on top of a [`ThemeStore`]

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::backend::ThemeStore;
use crate::error::ResultExt;
use crate::tokens::{CustomTheme, CustomThemePatch, DEFAULT_PRESET_ID};

/// JSON array of [`CustomTheme`]
pub const CUSTOM_THEMES_KEY: &str = "custom-themes";
/// JSON array of theme ids
pub const FAVORITES_KEY: &str = "favorite-themes";
/// Plain theme id string
pub const ACTIVE_THEME_KEY: &str = "active-theme";

/// Persistent collection of user themes.
///
/// Every read goes to the backend, so two handles over the same backend see
/// each other's writes. Storage failures are logged and degrade to empty
/// reads or `false` from mutating calls.
#[derive(Clone)]
pub struct CustomThemeStore {
    backend: Arc<dyn ThemeStore>,
    default_theme_id: String,
}

impl CustomThemeStore {
    pub fn new(backend: Arc<dyn ThemeStore>) -> Self {
        CustomThemeStore {
            backend,
            default_theme_id: DEFAULT_PRESET_ID.to_string(),
        }
    }

    /// Theme id restored by [`clear_theme_cache`](Self::clear_theme_cache)
    pub fn with_default_theme(mut self, id: impl Into<String>) -> Self {
        self.default_theme_id = id.into();
        self
    }

    pub fn default_theme_id(&self) -> &str {
        &self.default_theme_id
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.backend.get(key).log_err().flatten() else {
            return Vec::new();
        };
        let items: Option<Vec<T>> = serde_json::from_str(&raw).warn_on_err();
        if items.is_none() {
            debug!(key = key, "Stored value is corrupt, treating as empty");
        }
        items.unwrap_or_default()
    }

    fn write_list<T: Serialize>(&self, key: &str, items: &[T]) -> bool {
        let Some(json) = serde_json::to_string(items).log_err() else {
            return false;
        };
        self.backend.set(key, &json).log_err().is_some()
    }

    /// All saved themes in insertion order
    pub fn get_custom_themes(&self) -> Vec<CustomTheme> {
        self.read_list(CUSTOM_THEMES_KEY)
    }

    pub fn get_custom_theme(&self, id: &str) -> Option<CustomTheme> {
        self.get_custom_themes().into_iter().find(|t| t.id == id)
    }

    /// Append a theme. Returns whether the write was persisted.
    #[instrument(name = "add_custom_theme", skip(self, theme), fields(id = %theme.id, theme_name = %theme.name))]
    pub fn add_custom_theme(&self, theme: CustomTheme) -> bool {
        let mut themes = self.get_custom_themes();
        themes.push(theme);
        let saved = self.write_list(CUSTOM_THEMES_KEY, &themes);
        if saved {
            info!(theme_count = themes.len(), "Saved custom theme");
        }
        saved
    }

    /// Merge `patch` into the theme with `id`.
    ///
    /// Returns `false` without writing when no theme has that id.
    #[instrument(name = "update_custom_theme", skip(self, patch))]
    pub fn update_custom_theme(&self, id: &str, patch: CustomThemePatch) -> bool {
        let mut themes = self.get_custom_themes();
        let Some(theme) = themes.iter_mut().find(|t| t.id == id) else {
            debug!("No custom theme with this id, nothing to update");
            return false;
        };
        theme.apply(patch);
        self.write_list(CUSTOM_THEMES_KEY, &themes)
    }

    /// Remove all custom themes and favorites and reset the active theme.
    /// Safe to call repeatedly.
    #[instrument(name = "clear_theme_cache", skip(self))]
    pub fn clear_theme_cache(&self) -> bool {
        let themes = self.backend.remove(CUSTOM_THEMES_KEY).log_err().is_some();
        let favorites = self.backend.remove(FAVORITES_KEY).log_err().is_some();
        let active = self.set_active_theme(&self.default_theme_id);
        let cleared = themes && favorites && active;
        info!(cleared, "Cleared theme cache");
        cleared
    }

    /// Bytes held by the themes and favorites values, 0 if unreadable
    pub fn get_theme_cache_size(&self) -> usize {
        let mut total = 0;
        for key in [CUSTOM_THEMES_KEY, FAVORITES_KEY] {
            match self.backend.get(key) {
                Ok(value) => total += value.map_or(0, |v| v.len()),
                Err(e) => {
                    warn!(key = key, error = %e, "Could not measure theme cache");
                    return 0;
                }
            }
        }
        total
    }

    pub fn get_favorites(&self) -> Vec<String> {
        self.read_list(FAVORITES_KEY)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.get_favorites().iter().any(|f| f == id)
    }

    /// Flip the favorite flag of `id`. Returns the new state.
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let mut favorites = self.get_favorites();
        let now_favorite = match favorites.iter().position(|f| f == id) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(id.to_string());
                true
            }
        };
        if !self.write_list(FAVORITES_KEY, &favorites) {
            return !now_favorite;
        }
        debug!(id = id, favorite = now_favorite, "Toggled favorite");
        now_favorite
    }

    /// Active theme id, the default theme when unset or unreadable
    pub fn active_theme(&self) -> String {
        self.backend
            .get(ACTIVE_THEME_KEY)
            .log_err()
            .flatten()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| self.default_theme_id.clone())
    }

    pub fn set_active_theme(&self, id: &str) -> bool {
        self.backend.set(ACTIVE_THEME_KEY, id).log_err().is_some()
    }
}

/// Human readable byte count: `0 Bytes`, `512 Bytes`, `1.5 KB`, `2 MB`
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", text, UNITS[unit])
}

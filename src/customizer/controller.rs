//! The customizer state: a draft token model, its live contrast results and
//! the save / import / export actions that act on it.

use tracing::{debug, info, instrument, warn};

use super::import::parse_theme_import;
use super::notifier::{Notifier, Toast, ToastVariant, TracingNotifier};
use crate::color::{validate_pairs, ContrastCheck, WcagLevel};
use crate::error::{Result, ThemeError};
use crate::export::{export_and_download, filename_for, DownloadSink, ExportFormat};
use crate::store::CustomThemeStore;
use crate::tokens::{
    default_preset, find_preset, CustomTheme, CustomThemePatch, TokenMap, TokenModel,
};

/// Name given to a fresh draft
pub const DEFAULT_THEME_NAME: &str = "Custom Theme";

/// Result of a successful save
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub theme: CustomTheme,
    /// Pairs that failed contrast validation. Advisory only.
    pub warnings: Vec<ContrastCheck>,
}

pub struct ThemeCustomizer {
    store: CustomThemeStore,
    draft: TokenModel,
    theme_name: String,
    preset_id: Option<String>,
    level: WcagLevel,
    validation: Vec<ContrastCheck>,
    import_error: Option<String>,
    notifier: Box<dyn Notifier>,
}

impl ThemeCustomizer {
    /// Start editing from the default preset
    pub fn new(store: CustomThemeStore) -> Self {
        let preset = default_preset();
        let mut customizer = ThemeCustomizer {
            store,
            draft: TokenModel::with_colors(preset.colors()),
            theme_name: DEFAULT_THEME_NAME.to_string(),
            preset_id: Some(preset.id.to_string()),
            level: WcagLevel::default(),
            validation: Vec::new(),
            import_error: None,
            notifier: Box::new(TracingNotifier),
        };
        customizer.revalidate();
        customizer
    }

    pub fn with_level(mut self, level: WcagLevel) -> Self {
        self.level = level;
        self.revalidate();
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn store(&self) -> &CustomThemeStore {
        &self.store
    }

    pub fn draft(&self) -> &TokenModel {
        &self.draft
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn set_theme_name(&mut self, name: impl Into<String>) {
        self.theme_name = name.into();
    }

    /// Preset the draft colors came from; `None` once a saved or imported
    /// theme replaced them
    pub fn preset_id(&self) -> Option<&str> {
        self.preset_id.as_deref()
    }

    pub fn level(&self) -> WcagLevel {
        self.level
    }

    /// Message of the last failed import, cleared by a successful one
    pub fn import_error(&self) -> Option<&str> {
        self.import_error.as_deref()
    }

    /// Latest contrast results, one per pair present in the draft
    pub fn validation(&self) -> &[ContrastCheck] {
        &self.validation
    }

    pub fn failing_pairs(&self) -> Vec<&ContrastCheck> {
        self.validation.iter().filter(|check| !check.passes).collect()
    }

    fn revalidate(&mut self) {
        self.validation = match &self.draft.colors {
            Some(colors) => validate_pairs(colors, self.level),
            None => Vec::new(),
        };
    }

    fn replace_colors(&mut self, colors: TokenMap) {
        self.draft.colors = Some(colors);
        self.revalidate();
    }

    /// Replace the draft colors with a built-in preset. Other token sections
    /// are kept.
    pub fn load_preset(&mut self, preset_id: &str) -> Result<()> {
        let preset =
            find_preset(preset_id).ok_or_else(|| ThemeError::UnknownPreset(preset_id.to_string()))?;
        self.replace_colors(preset.colors());
        self.preset_id = Some(preset.id.to_string());
        debug!(preset = preset.id, "Loaded preset");
        Ok(())
    }

    /// Replace the whole draft, e.g. with a token file read from disk
    pub fn load_tokens(&mut self, tokens: TokenModel) {
        self.draft = tokens;
        self.preset_id = None;
        self.revalidate();
    }

    /// Set one color and re-check every contrast pair
    pub fn edit_color(&mut self, key: &str, value: &str) {
        self.draft.set_color(key, value);
        self.revalidate();
    }

    /// Persist the draft as a new custom theme.
    ///
    /// Failing contrast pairs never block a save; they come back as warnings.
    #[instrument(name = "customizer_save", skip(self))]
    pub fn save(&mut self, name: &str) -> Result<SaveOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.report(ThemeError::MissingThemeName));
        }

        let theme = CustomTheme::new(name, self.draft.colors.clone().unwrap_or_default());
        if !self.store.add_custom_theme(theme.clone()) {
            return Err(self.report(ThemeError::SaveFailed {
                name: name.to_string(),
            }));
        }
        self.theme_name = name.to_string();

        let warnings: Vec<ContrastCheck> = self.failing_pairs().into_iter().cloned().collect();
        if warnings.is_empty() {
            self.notifier
                .notify(Toast::success("Theme saved", format!("'{}' was saved", name)));
        } else {
            let labels: Vec<&str> = warnings.iter().map(ContrastCheck::label).collect();
            warn!(id = %theme.id, failing = ?labels, "Saved theme with contrast warnings");
            self.notifier.notify(Toast::warning(
                "Theme saved with contrast warnings",
                format!("Low contrast: {}", labels.join(", ")),
            ));
        }

        info!(id = %theme.id, name = %theme.name, "Saved custom theme");
        Ok(SaveOutcome { theme, warnings })
    }

    /// Write the draft name and colors over an existing saved theme
    #[instrument(name = "customizer_update", skip(self))]
    pub fn update(&mut self, id: &str) -> Result<()> {
        if self.store.get_custom_theme(id).is_none() {
            return Err(self.report(ThemeError::ThemeNotFound(id.to_string())));
        }
        let patch = CustomThemePatch {
            name: Some(self.theme_name.clone()),
            colors: self.draft.colors.clone(),
        };
        if !self.store.update_custom_theme(id, patch) {
            return Err(self.report(ThemeError::SaveFailed {
                name: self.theme_name.clone(),
            }));
        }
        self.notifier.notify(Toast::success(
            "Theme updated",
            format!("'{}' was updated", self.theme_name),
        ));
        Ok(())
    }

    /// Load a saved theme into the draft and make it the active theme
    pub fn load_custom_theme(&mut self, id: &str) -> Result<()> {
        self.open_custom_theme(id)?;
        self.store.set_active_theme(id);
        debug!(id = id, "Activated custom theme");
        Ok(())
    }

    /// Load a saved theme into the draft. The active theme is left as is.
    pub fn open_custom_theme(&mut self, id: &str) -> Result<()> {
        let theme = self
            .store
            .get_custom_theme(id)
            .ok_or_else(|| ThemeError::ThemeNotFound(id.to_string()))?;
        self.replace_colors(theme.colors);
        self.theme_name = theme.name;
        self.preset_id = None;
        debug!(id = id, "Loaded custom theme");
        Ok(())
    }

    /// Export the draft, naming the file after the theme
    pub fn export(&self, format: ExportFormat, sink: &dyn DownloadSink) -> Result<String> {
        let filename = filename_for(&self.theme_name, format);
        export_and_download(&self.draft, format, Some(&filename), sink)
            .map_err(|e| self.report(e))
    }

    pub fn export_json(&self, sink: &dyn DownloadSink) -> Result<String> {
        self.export(ExportFormat::Json, sink)
    }

    pub fn export_css(&self, sink: &dyn DownloadSink) -> Result<String> {
        self.export(ExportFormat::Css, sink)
    }

    pub fn export_scss(&self, sink: &dyn DownloadSink) -> Result<String> {
        self.export(ExportFormat::Scss, sink)
    }

    pub fn export_tailwind(&self, sink: &dyn DownloadSink) -> Result<String> {
        self.export(ExportFormat::Tailwind, sink)
    }

    /// Replace the draft colors (and name, if given) from pasted JSON.
    ///
    /// On failure the draft is untouched and the message is kept in
    /// [`import_error`](Self::import_error).
    #[instrument(name = "customizer_import", skip(self, json_text), fields(bytes = json_text.len()))]
    pub fn import(&mut self, json_text: &str) -> Result<()> {
        match parse_theme_import(json_text) {
            Ok(import) => {
                self.replace_colors(import.colors);
                if let Some(name) = import.name {
                    self.theme_name = name;
                }
                self.preset_id = None;
                self.import_error = None;
                self.notifier.notify(Toast::success(
                    "Theme imported",
                    format!("'{}' is ready to edit", self.theme_name),
                ));
                Ok(())
            }
            Err(e) => {
                self.import_error = Some(e.to_string());
                Err(self.report(e.into()))
            }
        }
    }

    /// Clear every saved theme and favorite and reset the active theme
    pub fn clear_cache(&self) -> bool {
        let cleared = self.store.clear_theme_cache();
        if cleared {
            self.notifier
                .notify(Toast::success("Cache cleared", "Saved themes were removed"));
        } else {
            self.notifier.notify(Toast::new(
                ToastVariant::Error,
                "Cache not cleared",
                "Storage is unavailable",
            ));
        }
        cleared
    }

    fn report(&self, error: ThemeError) -> ThemeError {
        warn!(error = %error, "Customizer action failed");
        self.notifier.notify(Toast::new(
            ToastVariant::from_severity(error.severity()),
            "Theme error",
            error.user_message(),
        ));
        error
    }
}

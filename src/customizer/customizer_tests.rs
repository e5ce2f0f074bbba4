use super::*;
use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::color::WcagLevel;
use crate::error::{ImportError, ThemeError};
use crate::export::{export_as_css, ExportFormat};
use crate::store::{CustomThemeStore, MemoryStore, ThemeStore};
use crate::tokens::{find_preset, DEFAULT_PRESET_ID, REQUIRED_COLOR_KEYS};

fn customizer() -> (Arc<MemoryStore>, ThemeCustomizer) {
    let backend = Arc::new(MemoryStore::new());
    let customizer = ThemeCustomizer::new(CustomThemeStore::new(backend.clone()));
    (backend, customizer)
}

fn full_import_json(name: Option<&str>) -> String {
    let colors: serde_json::Map<String, serde_json::Value> = find_preset("rose")
        .unwrap()
        .colors()
        .into_iter()
        .map(|(k, v)| (k, serde_json::Value::String(v)))
        .collect();
    let mut root = serde_json::Map::new();
    if let Some(name) = name {
        root.insert("name".to_string(), name.into());
    }
    root.insert("colors".to_string(), colors.into());
    serde_json::Value::Object(root).to_string()
}

// ========================================================================
// Presets and edits
// ========================================================================

#[test]
fn test_starts_from_default_preset() {
    let (_, customizer) = customizer();
    assert_eq!(customizer.preset_id(), Some("default"));
    assert_eq!(customizer.theme_name(), DEFAULT_THEME_NAME);
    assert_eq!(customizer.validation().len(), 8);

    let failing: Vec<&str> = customizer.failing_pairs().iter().map(|c| c.label()).collect();
    assert_eq!(failing, vec!["muted", "destructive"]);
}

#[test]
fn test_load_preset_replaces_only_colors() {
    let (_, mut customizer) = customizer();
    let mut spacing = crate::tokens::TokenMap::new();
    spacing.insert("md".to_string(), "1rem".to_string());
    let mut tokens = customizer.draft().clone();
    tokens.spacing = Some(spacing.clone());
    customizer.load_tokens(tokens);
    assert_eq!(customizer.preset_id(), None);

    customizer.load_preset("dark").unwrap();

    assert_eq!(customizer.preset_id(), Some("dark"));
    assert_eq!(customizer.draft().color("--background"), Some("222.2 84% 4.9%"));
    assert_eq!(customizer.draft().spacing, Some(spacing));
}

#[test]
fn test_load_unknown_preset_is_rejected() {
    let (_, mut customizer) = customizer();
    let before = customizer.draft().clone();
    let err = customizer.load_preset("neon").unwrap_err();
    assert!(matches!(err, ThemeError::UnknownPreset(id) if id == "neon"));
    assert_eq!(customizer.draft(), &before);
}

#[test]
fn test_edit_color_revalidates() {
    let (_, mut customizer) = customizer();
    customizer.edit_color("--muted-foreground", "0 0% 0%");
    let failing: Vec<&str> = customizer.failing_pairs().iter().map(|c| c.label()).collect();
    assert_eq!(failing, vec!["destructive"]);
}

#[test]
fn test_aaa_level_is_stricter() {
    let (backend, _) = customizer();
    let strict = ThemeCustomizer::new(CustomThemeStore::new(backend)).with_level(WcagLevel::Aaa);
    assert_eq!(strict.level(), WcagLevel::Aaa);
    assert!(strict.failing_pairs().len() >= 2);
}

// ========================================================================
// Save
// ========================================================================

#[test]
fn test_low_contrast_theme_still_saves() {
    let (_, mut customizer) = customizer();
    customizer.edit_color("--primary", "0 0% 0%");
    customizer.edit_color("--primary-foreground", "0 0% 10%");

    let primary = customizer
        .validation()
        .iter()
        .find(|c| c.background == "--primary")
        .unwrap();
    assert!(!primary.passes);
    assert!(primary.ratio < 1.5, "ratio was {}", primary.ratio);

    let outcome = customizer.save("Low Contrast Theme").unwrap();
    assert!(outcome.warnings.iter().any(|c| c.background == "--primary"));

    let themes = customizer.store().get_custom_themes();
    assert_eq!(themes.len(), 1);
    assert_eq!(themes[0].name, "Low Contrast Theme");
    assert_eq!(themes[0], outcome.theme);
    assert_eq!(themes[0].colors["--primary"], "0 0% 0%");
}

#[test]
fn test_save_requires_a_name() {
    let (_, mut customizer) = customizer();
    assert!(matches!(
        customizer.save("   "),
        Err(ThemeError::MissingThemeName)
    ));
    assert!(customizer.store().get_custom_themes().is_empty());
}

#[test]
fn test_save_failure_is_reported() {
    let (backend, customizer) = customizer();
    let notifier = RecordingNotifier::new();
    let mut customizer = customizer.with_notifier(notifier.clone());
    backend.set_available(false);

    let err = customizer.save("Ocean").unwrap_err();
    assert!(matches!(err, ThemeError::SaveFailed { ref name } if name == "Ocean"));

    let toasts = notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].variant, ToastVariant::Error);
}

#[test]
fn test_save_notifies_contrast_warnings() {
    let (_, customizer) = customizer();
    let notifier = RecordingNotifier::new();
    let mut customizer = customizer.with_notifier(notifier.clone());

    customizer.save("Default Copy").unwrap();

    let toasts = notifier.toasts();
    assert_eq!(toasts[0].variant, ToastVariant::Warning);
    assert!(toasts[0].message.contains("muted"));
}

#[test]
fn test_update_and_load_saved_theme() {
    let (_, mut customizer) = customizer();
    let id = customizer.save("Ocean").unwrap().theme.id;

    customizer.set_theme_name("Deep Ocean");
    customizer.edit_color("--primary", "200 80% 30%");
    customizer.update(&id).unwrap();

    customizer.load_preset("green").unwrap();
    customizer.set_theme_name("Scratch");
    customizer.load_custom_theme(&id).unwrap();

    assert_eq!(customizer.theme_name(), "Deep Ocean");
    assert_eq!(customizer.draft().color("--primary"), Some("200 80% 30%"));
    assert_eq!(customizer.preset_id(), None);
    assert_eq!(customizer.store().active_theme(), id);
}

#[test]
fn test_open_saved_theme_keeps_active_theme() {
    let (_, mut customizer) = customizer();
    let id = customizer.save("Ocean").unwrap().theme.id;
    customizer.load_preset("green").unwrap();

    customizer.open_custom_theme(&id).unwrap();

    assert_eq!(customizer.theme_name(), "Ocean");
    assert_eq!(customizer.preset_id(), None);
    assert_eq!(customizer.store().active_theme(), DEFAULT_PRESET_ID);
    assert!(matches!(
        customizer.open_custom_theme("custom-0-00000000"),
        Err(ThemeError::ThemeNotFound(_))
    ));
}

#[test]
fn test_update_unknown_theme() {
    let (_, mut customizer) = customizer();
    assert!(matches!(
        customizer.update("custom-0-00000000"),
        Err(ThemeError::ThemeNotFound(_))
    ));
    assert!(matches!(
        customizer.load_custom_theme("custom-0-00000000"),
        Err(ThemeError::ThemeNotFound(_))
    ));
}

#[test]
fn test_two_customizers_share_one_store() {
    let backend: Arc<dyn ThemeStore> = Arc::new(MemoryStore::new());
    let mut first = ThemeCustomizer::new(CustomThemeStore::new(backend.clone()));
    let mut second = ThemeCustomizer::new(CustomThemeStore::new(backend));

    first.save("From First").unwrap();
    second.save("From Second").unwrap();

    let names: Vec<String> = first
        .store()
        .get_custom_themes()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["From First", "From Second"]);
}

// ========================================================================
// Import
// ========================================================================

#[test]
fn test_import_rejects_invalid_json() {
    let (_, mut customizer) = customizer();
    let before = customizer.draft().clone();

    let err = customizer.import("not json").unwrap_err();
    assert_eq!(err.to_string(), "Invalid JSON format");
    assert_eq!(customizer.import_error(), Some("Invalid JSON format"));
    assert_eq!(customizer.draft(), &before);
}

#[test]
fn test_import_rejects_missing_colors_object() {
    for text in [r#"{"name":"x"}"#, r#"{"colors":"red"}"#, r#"{"colors":[]}"#, "[]"] {
        assert_eq!(
            parse_theme_import(text),
            Err(ImportError::InvalidFormat),
            "input {}",
            text
        );
    }

    let (_, mut customizer) = customizer();
    customizer.import(r#"{"name":"x"}"#).unwrap_err();
    assert_eq!(
        customizer.import_error(),
        Some("Invalid theme format: missing or invalid 'colors' object")
    );
}

#[test]
fn test_import_enumerates_missing_keys() {
    let (_, mut customizer) = customizer();
    let before = customizer.draft().clone();

    let err = customizer
        .import(r#"{"colors":{"--background":"0 0% 100%"}}"#)
        .unwrap_err();

    let expected: Vec<String> = REQUIRED_COLOR_KEYS[1..]
        .iter()
        .map(|k| k.to_string())
        .collect();
    match err {
        ThemeError::Import(ImportError::MissingKeys(missing)) => assert_eq!(missing, expected),
        other => panic!("unexpected error: {:?}", other),
    }

    let message = customizer.import_error().unwrap();
    assert!(message.starts_with("Missing required color keys: --foreground, --card,"));
    assert!(message.ends_with("--input, --ring"));
    assert!(!message.contains("--background"));
    assert_eq!(customizer.draft(), &before);
}

#[test]
fn test_import_success_replaces_colors_and_name() {
    let (_, mut customizer) = customizer();
    customizer.import("nope").unwrap_err();

    customizer.import(&full_import_json(Some("Imported Rose"))).unwrap();

    assert_eq!(customizer.import_error(), None);
    assert_eq!(customizer.theme_name(), "Imported Rose");
    assert_eq!(customizer.draft().color("--primary"), Some("346.8 77.2% 49.8%"));
    assert_eq!(customizer.validation().len(), 8);
}

#[test]
fn test_import_without_name_keeps_current_name() {
    let (_, mut customizer) = customizer();
    customizer.set_theme_name("Mine");
    customizer.import(&full_import_json(None)).unwrap();
    assert_eq!(customizer.theme_name(), "Mine");
}

// ========================================================================
// Export and cache
// ========================================================================

#[test]
fn test_export_names_file_after_theme() {
    let (_, mut customizer) = customizer();
    customizer.set_theme_name("Ocean Breeze");

    let delivered = Mutex::new(Vec::new());
    let sink = |content: &str, filename: &str, mime_type: &str| -> io::Result<()> {
        delivered
            .lock()
            .push((content.to_string(), filename.to_string(), mime_type.to_string()));
        Ok(())
    };

    assert_eq!(customizer.export_css(&sink).unwrap(), "ocean-breeze.css");
    assert_eq!(customizer.export_json(&sink).unwrap(), "ocean-breeze.json");
    assert_eq!(customizer.export_scss(&sink).unwrap(), "ocean-breeze.scss");
    assert_eq!(customizer.export_tailwind(&sink).unwrap(), "ocean-breeze.js");

    let delivered = delivered.into_inner();
    assert_eq!(delivered.len(), 4);
    assert_eq!(delivered[0].0, export_as_css(customizer.draft()));
    assert_eq!(delivered[3].2, ExportFormat::Tailwind.mime_type());
}

#[test]
fn test_clear_cache_resets_store() {
    let (_, mut customizer) = customizer();
    let id = customizer.save("Ocean").unwrap().theme.id;
    customizer.store().toggle_favorite(&id);
    customizer.load_custom_theme(&id).unwrap();

    assert!(customizer.clear_cache());
    assert!(customizer.store().get_custom_themes().is_empty());
    assert!(customizer.store().get_favorites().is_empty());
    assert_eq!(customizer.store().get_theme_cache_size(), 0);
    assert_eq!(customizer.store().active_theme(), "default");
}

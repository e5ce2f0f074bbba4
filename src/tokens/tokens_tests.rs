use super::*;

#[test]
fn test_required_keys_are_unique() {
    let mut keys: Vec<&str> = REQUIRED_COLOR_KEYS.to_vec();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), REQUIRED_COLOR_KEYS.len());
    assert!(REQUIRED_COLOR_KEYS.iter().all(|k| k.starts_with("--")));
}

#[test]
fn test_every_preset_defines_all_required_keys() {
    for preset in presets() {
        let model = TokenModel::with_colors(preset.colors());
        assert!(
            model.missing_required_colors().is_empty(),
            "preset {} is missing {:?}",
            preset.id,
            model.missing_required_colors()
        );
    }
}

#[test]
fn test_preset_overrides_keep_key_order() {
    let blue = find_preset("blue").unwrap().colors();
    let keys: Vec<&str> = blue.keys().map(String::as_str).collect();
    assert_eq!(keys, REQUIRED_COLOR_KEYS.to_vec());
    assert_eq!(blue["--primary"], "221.2 83.2% 53.3%");
    assert_eq!(blue["--background"], "0 0% 100%");
}

#[test]
fn test_default_preset() {
    assert_eq!(default_preset().id, DEFAULT_PRESET_ID);
    assert!(find_preset("does-not-exist").is_none());
}

#[test]
fn test_empty_model_serializes_to_empty_object() {
    let json = serde_json::to_string(&TokenModel::default()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn test_model_uses_camel_case_and_keeps_order() {
    let json = r##"{
        "colors": {"zeta": "#000000", "alpha": "#FFFFFF"},
        "typography": {"fontFamily": "Inter", "fontSizes": {"sm": "0.875rem"}},
        "borderRadius": {"lg": "0.5rem"}
    }"##;
    let model: TokenModel = serde_json::from_str(json).unwrap();

    let colors = model.colors.as_ref().unwrap();
    let keys: Vec<&str> = colors.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
    assert_eq!(
        model.typography.as_ref().unwrap().font_family.as_deref(),
        Some("Inter")
    );
    assert_eq!(model.border_radius.as_ref().unwrap()["lg"], "0.5rem");
    assert!(model.spacing.is_none());

    let out = serde_json::to_string(&model).unwrap();
    assert!(out.contains("\"borderRadius\""));
    assert!(out.contains("\"fontFamily\""));
    assert!(!out.contains("spacing"));
}

#[test]
fn test_set_color_creates_section_and_preserves_position() {
    let mut model = TokenModel::default();
    model.set_color("--primary", "0 0% 0%");
    model.set_color("--ring", "0 0% 50%");
    model.set_color("--primary", "0 0% 10%");

    let colors = model.colors.as_ref().unwrap();
    let keys: Vec<&str> = colors.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["--primary", "--ring"]);
    assert_eq!(model.color("--primary"), Some("0 0% 10%"));
}

#[test]
fn test_missing_required_colors_in_canonical_order() {
    let mut model = TokenModel::default();
    model.set_color("--background", "0 0% 100%");
    let missing = model.missing_required_colors();
    assert_eq!(missing.len(), REQUIRED_COLOR_KEYS.len() - 1);
    assert_eq!(missing[0], "--foreground");
    assert_eq!(missing.last(), Some(&"--ring"));
}

#[test]
fn test_generated_ids_are_prefixed_and_distinct() {
    let a = generate_theme_id();
    let b = generate_theme_id();
    assert!(a.starts_with("custom-"));
    assert_ne!(a, b);
}

#[test]
fn test_created_at_reads_id_timestamp() {
    let theme = CustomTheme {
        id: "custom-1700000000000-0a1b2c3d".to_string(),
        name: "Mono".to_string(),
        colors: TokenMap::new(),
    };
    assert_eq!(
        theme.created_at().map(|t| t.timestamp_millis()),
        Some(1_700_000_000_000)
    );

    let imported = CustomTheme {
        id: "legacy".to_string(),
        ..theme
    };
    assert_eq!(imported.created_at(), None);
    assert!(CustomTheme::new("Fresh", TokenMap::new()).created_at().is_some());
}

#[test]
fn test_custom_theme_patch_merges_present_fields() {
    let mut colors = TokenMap::new();
    colors.insert("--primary".to_string(), "0 0% 0%".to_string());
    let mut theme = CustomTheme::new("Ocean", colors);
    let id = theme.id.clone();

    theme.apply(CustomThemePatch {
        name: Some("Deep Ocean".to_string()),
        colors: None,
    });

    assert_eq!(theme.id, id);
    assert_eq!(theme.name, "Deep Ocean");
    assert_eq!(theme.colors["--primary"], "0 0% 0%");
}

#[test]
fn test_custom_theme_wire_shape() {
    let theme = CustomTheme {
        id: "custom-1".to_string(),
        name: "Mono".to_string(),
        colors: TokenMap::new(),
    };
    assert_eq!(
        serde_json::to_string(&theme).unwrap(),
        r#"{"id":"custom-1","name":"Mono","colors":{}}"#
    );
}

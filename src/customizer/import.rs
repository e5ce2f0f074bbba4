//! Parsing of pasted theme JSON

use serde::Deserialize;
use serde_json::Value;

use crate::error::ImportError;
use crate::tokens::{TokenMap, REQUIRED_COLOR_KEYS};

/// A theme accepted by import. Extra top-level fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeImport {
    #[serde(default)]
    pub name: Option<String>,
    pub colors: TokenMap,
}

/// Parse and validate pasted theme JSON.
///
/// Checks run in a fixed order: syntax, then the `colors` object, then the
/// required keys. Missing keys are reported in canonical order.
pub fn parse_theme_import(text: &str) -> Result<ThemeImport, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(|_| ImportError::InvalidJson)?;

    if !matches!(value.get("colors"), Some(Value::Object(_))) {
        return Err(ImportError::InvalidFormat);
    }
    let import: ThemeImport =
        serde_json::from_value(value).map_err(|_| ImportError::InvalidFormat)?;

    let missing: Vec<String> = REQUIRED_COLOR_KEYS
        .iter()
        .filter(|key| !import.colors.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingKeys(missing));
    }

    Ok(import)
}

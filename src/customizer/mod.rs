//! Customizer module - Editing, validating and persisting a theme draft
//!
//! # Module Structure
//!
//! - `controller` - ThemeCustomizer: presets, edits, save, import, export
//! - `import` - Schema-checked parsing of pasted theme JSON
//! - `notifier` - Toast sink the controller reports to

mod controller;
mod import;
mod notifier;

pub use controller::{SaveOutcome, ThemeCustomizer, DEFAULT_THEME_NAME};
pub use import::{parse_theme_import, ThemeImport};
pub use notifier::{Notifier, RecordingNotifier, Toast, ToastVariant, TracingNotifier};

#[cfg(test)]
#[path = "customizer_tests.rs"]
mod tests;

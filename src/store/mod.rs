//! Store module - Persistence for user themes
//!
//! # Module Structure
//!
//! - `backend` - ThemeStore trait with in-memory and file implementations
//! - `themes` - CustomThemeStore: themes, favorites, active theme, cache size

mod backend;
mod themes;

pub use backend::{FileStore, MemoryStore, ThemeStore};
pub use themes::{
    format_bytes, CustomThemeStore, ACTIVE_THEME_KEY, CUSTOM_THEMES_KEY, FAVORITES_KEY,
};

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

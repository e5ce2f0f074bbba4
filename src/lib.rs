//! Theme Studio - Design token export and validation
//!
//! This library provides the core of a theme customizer: color conversion,
//! a design token model, serializers for CSS/SCSS/Tailwind/JSON, WCAG
//! contrast validation and persistence of user themes.

pub mod color;
pub mod config;
pub mod customizer;
pub mod error;
pub mod export;
pub mod logging;
pub mod store;
pub mod tokens;

//! theme-studio - Command line front end for the theme customizer
//!
//! Provides:
//! - Export of presets, saved themes or token files to CSS/SCSS/Tailwind/JSON
//! - Color conversion and WCAG contrast checks
//! - Import, listing, favorites and cache maintenance for saved themes

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use theme_studio::color::{
    contrast_ratio, get_contrast_color, parse_color_rgb, to_hex, to_hsl, validate_contrast,
    WcagLevel,
};
use theme_studio::config::{self, Config};
use theme_studio::customizer::ThemeCustomizer;
use theme_studio::export::{export_and_download, DirectorySink, ExportFormat};
use theme_studio::logging;
use theme_studio::store::{format_bytes, CustomThemeStore, FileStore};
use theme_studio::tokens::{find_preset, presets, TokenModel};

/// Export, convert and validate design tokens
#[derive(Parser, Debug)]
#[command(name = "theme-studio")]
#[command(about = "Export, convert and validate design tokens")]
#[command(version)]
struct Args {
    /// Config file (default: ~/.theme-studio/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a preset, a saved theme or a token file
    Export {
        /// css, tailwind, scss or json (default from config)
        #[arg(short, long)]
        format: Option<ExportFormat>,
        /// Preset or saved theme id (default: the active theme)
        #[arg(short, long)]
        theme: Option<String>,
        /// Token model JSON file to export instead of a theme
        #[arg(long, conflicts_with = "theme")]
        tokens: Option<PathBuf>,
        /// Output directory (default from config)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Output file name (default: derived from the theme name)
        #[arg(long)]
        filename: Option<String>,
    },
    /// Show a color as hex, HSL and rgb()
    Convert {
        /// `#RRGGBB` or `H S% L%`
        color: String,
    },
    /// Contrast ratio between two colors
    Contrast {
        background: String,
        foreground: String,
        /// AA or AAA (default from config)
        #[arg(short, long)]
        level: Option<WcagLevel>,
        /// Use the large-text threshold
        #[arg(long)]
        large: bool,
    },
    /// Check every background/foreground pair of a theme
    Validate {
        /// Preset or saved theme id (default: the active theme)
        theme: Option<String>,
        /// AA or AAA (default from config)
        #[arg(short, long)]
        level: Option<WcagLevel>,
    },
    /// Import a theme JSON file and save it as a custom theme
    Import {
        file: PathBuf,
        /// Name to save under (default: the name in the file)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List saved themes
    Themes,
    /// Toggle a theme as favorite
    Favorite { id: String },
    /// List built-in presets
    Presets,
    /// Show how much storage saved themes use
    CacheSize,
    /// Delete all saved themes and favorites
    ClearCache,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let _guard = logging::init(&config.get_log_dir());
    debug!(command = ?args.command, "Starting theme-studio");

    run(args.command, &config)
}

fn open_store(config: &Config) -> CustomThemeStore {
    let backend = Arc::new(FileStore::new(config.get_storage_dir()));
    CustomThemeStore::new(backend).with_default_theme(config.get_default_theme_id())
}

fn open_customizer(config: &Config, level: Option<WcagLevel>) -> ThemeCustomizer {
    ThemeCustomizer::new(open_store(config))
        .with_level(level.unwrap_or_else(|| config.get_contrast_level()))
}

/// Load a preset or saved theme into the draft, naming it after the theme.
/// The persisted active theme is not changed.
fn load_theme(customizer: &mut ThemeCustomizer, id: &str) -> Result<()> {
    match find_preset(id) {
        Some(preset) => {
            customizer.load_preset(preset.id)?;
            customizer.set_theme_name(preset.name);
        }
        None => customizer.open_custom_theme(id)?,
    }
    Ok(())
}

fn load_token_file(customizer: &mut ThemeCustomizer, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read token file: {}", path.display()))?;
    let tokens: TokenModel = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse token file: {}", path.display()))?;
    customizer.load_tokens(tokens);
    if let Some(stem) = path.file_stem() {
        customizer.set_theme_name(stem.to_string_lossy());
    }
    Ok(())
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Export {
            format,
            theme,
            tokens,
            out,
            filename,
        } => {
            let export_config = config.get_export();
            let format = match format {
                Some(format) => format,
                None => export_config
                    .default_format
                    .parse::<ExportFormat>()
                    .map_err(anyhow::Error::msg)
                    .context("Invalid export.defaultFormat in config")?,
            };

            let mut customizer = open_customizer(config, None);
            match (tokens, theme) {
                (Some(path), _) => load_token_file(&mut customizer, &path)?,
                (None, Some(id)) => load_theme(&mut customizer, &id)?,
                (None, None) => {
                    let active = customizer.store().active_theme();
                    load_theme(&mut customizer, &active)?;
                }
            }
            if !export_config.include_typography && customizer.draft().typography.is_some() {
                let mut draft = customizer.draft().clone();
                draft.typography = None;
                customizer.load_tokens(draft);
            }

            let sink = DirectorySink::new(out.unwrap_or_else(|| config.get_export_dir()));
            let started = Instant::now();
            let used = match filename {
                Some(name) => export_and_download(customizer.draft(), format, Some(&name), &sink)?,
                None => customizer.export(format, &sink)?,
            };
            logging::log_perf("export", started.elapsed().as_millis() as u64, 250);
            logging::log_theme_event("exported", customizer.theme_name(), true);

            println!("{}", sink.dir().join(used).display());
        }

        Command::Convert { color } => {
            let (Some(hex), Some(hsl), Some((r, g, b))) =
                (to_hex(&color), to_hsl(&color), parse_color_rgb(&color))
            else {
                bail!("'{}' is not a hex (#RRGGBB) or HSL (H S% L%) color", color);
            };
            println!("hex:  {}", hex);
            println!("hsl:  {}", hsl);
            println!("rgb:  rgb({}, {}, {})", r, g, b);
            println!("text: {}", get_contrast_color(&hex));
        }

        Command::Contrast {
            background,
            foreground,
            level,
            large,
        } => {
            for color in [&background, &foreground] {
                if parse_color_rgb(color).is_none() {
                    bail!("'{}' is not a hex or HSL color", color);
                }
            }
            let level = level.unwrap_or_else(|| config.get_contrast_level());
            let ratio = contrast_ratio(&background, &foreground);
            let passes = validate_contrast(&background, &foreground, level, large);
            println!(
                "{:.2}:1 {} {} (needs {}:1)",
                ratio,
                if passes { "passes" } else { "fails" },
                level,
                level.threshold(large)
            );
        }

        Command::Validate { theme, level } => {
            let mut customizer = open_customizer(config, level);
            let id = theme.unwrap_or_else(|| customizer.store().active_theme());
            load_theme(&mut customizer, &id)?;

            println!("{} ({})", customizer.theme_name(), customizer.level());
            for check in customizer.validation() {
                println!(
                    "  {:<12} {:>6.2}:1  {}",
                    check.label(),
                    check.ratio,
                    if check.passes { "pass" } else { "FAIL" }
                );
            }
        }

        Command::Import { file, name } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read theme file: {}", file.display()))?;

            let mut customizer = open_customizer(config, None);
            customizer.import(&text)?;
            let name = name.unwrap_or_else(|| customizer.theme_name().to_string());
            let outcome = customizer.save(&name)?;
            logging::log_theme_event("imported", &outcome.theme.id, true);

            println!("Saved '{}' as {}", outcome.theme.name, outcome.theme.id);
            for warning in &outcome.warnings {
                println!("  low contrast: {} ({:.2}:1)", warning.label(), warning.ratio);
            }
        }

        Command::Themes => {
            let store = open_store(config);
            let active = store.active_theme();
            let favorites = store.get_favorites();
            let themes = store.get_custom_themes();
            if themes.is_empty() {
                println!("No saved themes");
            }
            for theme in themes {
                let created = theme
                    .created_at()
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                println!(
                    "{} {} {:<32} {:<16} {}",
                    if theme.id == active { "*" } else { " " },
                    if favorites.contains(&theme.id) { "+" } else { " " },
                    theme.id,
                    created,
                    theme.name
                );
            }
        }

        Command::Favorite { id } => {
            let favorite = open_store(config).toggle_favorite(&id);
            println!(
                "{} {}",
                id,
                if favorite { "added to favorites" } else { "removed from favorites" }
            );
        }

        Command::Presets => {
            for preset in presets() {
                println!("{:<10} {}", preset.id, preset.name);
            }
        }

        Command::CacheSize => {
            println!("{}", format_bytes(open_store(config).get_theme_cache_size()));
        }

        Command::ClearCache => {
            let customizer = open_customizer(config, None);
            if !customizer.clear_cache() {
                bail!("Theme cache could not be cleared");
            }
            info!("Theme cache cleared");
            println!("Theme cache cleared");
        }
    }

    Ok(())
}

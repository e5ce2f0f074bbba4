//! Token serializers: CSS custom properties, SCSS variables, Tailwind config
//! text and JSON.
//!
//! Output grammar is consumed by hand-written tooling, so whitespace and
//! naming must stay exactly as produced here.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::error;

use crate::tokens::{TokenMap, TokenModel};

/// Line height used for Tailwind font sizes without a matching line height
pub const DEFAULT_LINE_HEIGHT: &str = "1.5";

/// One commented block of variables. Names carry no `--` / `$` prefix.
struct VariableSection<'a> {
    title: &'static str,
    entries: Vec<(String, &'a str)>,
}

fn prefixed<'a>(prefix: &str, map: &'a TokenMap) -> impl Iterator<Item = (String, &'a str)> + 'a {
    let prefix = prefix.to_string();
    map.iter()
        .map(move |(key, value)| (format!("{}-{}", prefix, key), value.as_str()))
}

/// Flatten the model into the section/ordering shared by CSS and SCSS
fn variable_sections(tokens: &TokenModel) -> Vec<VariableSection<'_>> {
    let mut sections = Vec::new();

    if let Some(colors) = &tokens.colors {
        sections.push(VariableSection {
            title: "Colors",
            entries: prefixed("color", colors).collect(),
        });
    }

    if let Some(typography) = &tokens.typography {
        let mut entries = Vec::new();
        if let Some(family) = &typography.font_family {
            entries.push(("font-family".to_string(), family.as_str()));
        }
        if let Some(sizes) = &typography.font_sizes {
            entries.extend(prefixed("font-size", sizes));
        }
        if let Some(weights) = &typography.font_weights {
            entries.extend(prefixed("font-weight", weights));
        }
        if let Some(line_heights) = &typography.line_heights {
            entries.extend(prefixed("line-height", line_heights));
        }
        sections.push(VariableSection {
            title: "Typography",
            entries,
        });
    }

    let simple: [(&'static str, &'static str, &Option<TokenMap>); 4] = [
        ("Spacing", "spacing", &tokens.spacing),
        ("Shadows", "shadow", &tokens.shadows),
        ("Border Radius", "radius", &tokens.border_radius),
        ("Gradients", "gradient", &tokens.gradients),
    ];
    for (title, prefix, map) in simple {
        if let Some(map) = map {
            sections.push(VariableSection {
                title,
                entries: prefixed(prefix, map).collect(),
            });
        }
    }

    sections
}

/// Serialize tokens as CSS custom properties in a single `:root` block.
pub fn export_as_css(tokens: &TokenModel) -> String {
    let mut css = String::from(":root {\n");
    for section in variable_sections(tokens) {
        css.push_str(&format!("  /* {} */\n", section.title));
        for (name, value) in section.entries {
            css.push_str(&format!("  --{}: {};\n", name, value));
        }
        css.push('\n');
    }
    css.push_str("}\n");
    css
}

/// Serialize tokens as SCSS variables with `//` section comments.
pub fn export_as_scss(tokens: &TokenModel) -> String {
    let mut scss = String::new();
    for section in variable_sections(tokens) {
        scss.push_str(&format!("// {}\n", section.title));
        for (name, value) in section.entries {
            scss.push_str(&format!("${}: {};\n", name, value));
        }
        scss.push('\n');
    }
    scss
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LineHeight<'a> {
    line_height: &'a str,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct TailwindExtend<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    colors: Option<&'a TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_family: Option<IndexMap<&'static str, [&'a str; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<IndexMap<&'a str, (&'a str, LineHeight<'a>)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_weight: Option<&'a TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spacing: Option<&'a TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    box_shadow: Option<&'a TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_radius: Option<&'a TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_image: Option<&'a TokenMap>,
}

#[derive(Serialize)]
struct TailwindTheme<'a> {
    extend: TailwindExtend<'a>,
}

#[derive(Serialize)]
struct TailwindConfig<'a> {
    theme: TailwindTheme<'a>,
}

fn tailwind_extend(tokens: &TokenModel) -> TailwindExtend<'_> {
    let typography = tokens.typography.as_ref();
    let line_heights = typography.and_then(|t| t.line_heights.as_ref());

    let font_family = typography
        .and_then(|t| t.font_family.as_deref())
        .map(|family| IndexMap::from([("sans", [family, "sans-serif"])]));

    let font_size = typography.and_then(|t| t.font_sizes.as_ref()).map(|sizes| {
        sizes
            .iter()
            .map(|(key, size)| {
                let line_height = line_heights
                    .and_then(|lh| lh.get(key))
                    .map(String::as_str)
                    .unwrap_or(DEFAULT_LINE_HEIGHT);
                (key.as_str(), (size.as_str(), LineHeight { line_height }))
            })
            .collect()
    });

    TailwindExtend {
        colors: tokens.colors.as_ref(),
        font_family,
        font_size,
        font_weight: typography.and_then(|t| t.font_weights.as_ref()),
        spacing: tokens.spacing.as_ref(),
        box_shadow: tokens.shadows.as_ref(),
        border_radius: tokens.border_radius.as_ref(),
        background_image: tokens.gradients.as_ref(),
    }
}

/// Serialize tokens as a Tailwind config module.
///
/// The object is emitted as pretty-printed JSON after `module.exports = `,
/// which is valid JavaScript though not how hand-written configs look.
pub fn export_as_tailwind(tokens: &TokenModel) -> String {
    let config = TailwindConfig {
        theme: TailwindTheme {
            extend: tailwind_extend(tokens),
        },
    };
    format!("module.exports = {};", to_pretty_json(&config))
}

/// Serialize the token model as 2-space indented JSON, keys in insertion order.
pub fn export_as_json(tokens: &TokenModel) -> String {
    to_pretty_json(tokens)
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // Only string-keyed maps are serialized, so this is unreachable in practice
        error!(error = %e, "Failed to serialize tokens");
        String::from("{}")
    })
}

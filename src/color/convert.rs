//! Hex / HSL / RGB conversion
//!
//! Conversions return `None` for malformed input instead of producing
//! garbage strings. Callers that accept user input should check
//! [`is_valid_hex`] first.

use regex::Regex;
use std::sync::OnceLock;

/// Black text, chosen for light backgrounds
pub const BLACK: &str = "#000000";
/// White text, chosen for dark backgrounds (and for unparsable input)
pub const WHITE: &str = "#FFFFFF";

fn hex_regex() -> &'static Regex {
    static HEX_RE: OnceLock<Regex> = OnceLock::new();
    HEX_RE.get_or_init(|| Regex::new(r"^#?[0-9A-Fa-f]{6}$").expect("hex color regex is valid"))
}

fn hsl_regex() -> &'static Regex {
    static HSL_RE: OnceLock<Regex> = OnceLock::new();
    HSL_RE.get_or_init(|| {
        // "221.2 83.2% 53.3%", "0 0 100", "hsl(210, 40%, 98%)"
        Regex::new(
            r"^\s*(?:hsl\(\s*)?(-?\d+(?:\.\d+)?)(?:\s*,\s*|\s+)(\d+(?:\.\d+)?)%?(?:\s*,\s*|\s+)(\d+(?:\.\d+)?)%?\s*\)?\s*$",
        )
        .expect("hsl triplet regex is valid")
    })
}

/// True iff the string is exactly six hex digits, optionally prefixed by `#`.
///
/// Three-digit shorthand (`#FFF`) is rejected.
pub fn is_valid_hex(hex: &str) -> bool {
    hex_regex().is_match(hex)
}

/// Parse a 6-digit hex color into its RGB bytes
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    if !is_valid_hex(hex) {
        return None;
    }
    let value = u32::from_str_radix(hex.trim_start_matches('#'), 16).ok()?;
    Some((
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

/// RGB bytes to HSL, all components in `[0, 1]` (hue as a fraction of a turn)
fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// Convert a hex color to an HSL triplet string (`"217 91% 60%"`).
///
/// Hue is rounded to whole degrees, saturation and lightness to whole
/// percents, so the conversion loses precision. Returns `None` for anything
/// [`is_valid_hex`] rejects.
pub fn hex_to_hsl(hex: &str) -> Option<String> {
    let (r, g, b) = parse_hex_rgb(hex)?;
    let (h, s, l) = rgb_to_hsl(r, g, b);
    Some(format!(
        "{} {}% {}%",
        (h * 360.0).round() as i64,
        (s * 100.0).round() as i64,
        (l * 100.0).round() as i64
    ))
}

/// Split a space-separated triplet into numbers, tolerating a trailing `%`
fn split_hsl(hsl: &str) -> Option<(f64, f64, f64)> {
    let mut parts = hsl
        .split_whitespace()
        .map(|part| {
            part.trim_end_matches('%')
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
        });

    let h = parts.next()??;
    let s = parts.next()??;
    let l = parts.next()??;
    if parts.next().is_some() {
        return None;
    }
    Some((h, s, l))
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// HSL fractions (`h`, `s`, `l` in `[0, 1]`) to RGB fractions
fn hsl_to_rgb_channels(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

fn hsl_components_to_hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = hsl_to_rgb_channels(h / 360.0, s / 100.0, l / 100.0);
    format!("#{:02X}{:02X}{:02X}", to_byte(r), to_byte(g), to_byte(b))
}

/// Convert an HSL triplet string to uppercase `#RRGGBB`.
pub fn hsl_to_hex(hsl: &str) -> Option<String> {
    let (h, s, l) = split_hsl(hsl)?;
    Some(hsl_components_to_hex(h.rem_euclid(360.0), s, l))
}

/// Convert an HSL triplet string to a CSS `rgb(r, g, b)` string.
///
/// Uses the chroma / intermediate / match decomposition, picking the channel
/// layout by the 60° sextant the hue falls in.
pub fn hsl_to_rgb(hsl: &str) -> Option<String> {
    let (h, s, l) = split_hsl(hsl)?;
    let h = h.rem_euclid(360.0);
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Some(format!(
        "rgb({}, {}, {})",
        to_byte(r + m),
        to_byte(g + m),
        to_byte(b + m)
    ))
}

/// Parse an HSL string into `(h, s, l)` with `h` in degrees and `s`/`l` in
/// percent.
///
/// Accepts `"221.2 83.2% 53.3%"`, `"0 0 100"` and `"hsl(210, 40%, 98%)"`.
/// Returns `None` for anything else; callers substitute their own default.
pub fn parse_hsl_string(hsl: &str) -> Option<(f64, f64, f64)> {
    let caps = hsl_regex().captures(hsl)?;
    let h = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let s = caps.get(2)?.as_str().parse::<f64>().ok()?;
    let l = caps.get(3)?.as_str().parse::<f64>().ok()?;
    Some((h, s, l))
}

/// Parse a color in either encoding (hex or HSL triplet) to RGB bytes
pub fn parse_color_rgb(value: &str) -> Option<(u8, u8, u8)> {
    if let Some(rgb) = parse_hex_rgb(value.trim()) {
        return Some(rgb);
    }
    let (h, s, l) = parse_hsl_string(value)?;
    let (r, g, b) = hsl_to_rgb_channels(h.rem_euclid(360.0) / 360.0, s / 100.0, l / 100.0);
    Some((to_byte(r), to_byte(g), to_byte(b)))
}

/// Normalize a color in either encoding to uppercase `#RRGGBB`
pub fn to_hex(value: &str) -> Option<String> {
    let value = value.trim();
    if let Some((r, g, b)) = parse_hex_rgb(value) {
        return Some(format!("#{:02X}{:02X}{:02X}", r, g, b));
    }
    let (h, s, l) = parse_hsl_string(value)?;
    Some(hsl_components_to_hex(h.rem_euclid(360.0), s, l))
}

/// Normalize a color in either encoding to an HSL triplet (`"H S% L%"`).
///
/// HSL input keeps its decimals; hex input is rounded like [`hex_to_hsl`].
pub fn to_hsl(value: &str) -> Option<String> {
    let value = value.trim();
    if is_valid_hex(value) {
        return hex_to_hsl(value);
    }
    let (h, s, l) = parse_hsl_string(value)?;
    Some(format!("{} {}% {}%", h, s, l))
}

/// Pick black or white text for a hex background.
///
/// A cheap perceived-brightness heuristic (`0.299R + 0.587G + 0.114B`), not
/// a WCAG computation; see [`super::contrast`] for accessibility checks.
/// Unparsable input yields white.
pub fn get_contrast_color(hex: &str) -> &'static str {
    let Some((r, g, b)) = parse_hex_rgb(hex) else {
        return WHITE;
    };
    let luminance =
        0.299 * (r as f64 / 255.0) + 0.587 * (g as f64 / 255.0) + 0.114 * (b as f64 / 255.0);
    if luminance > 0.5 {
        BLACK
    } else {
        WHITE
    }
}

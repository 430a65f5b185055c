//! Hex color parsing for config strings.

use phosphor_common::Color;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: #RGB or #RRGGBB.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Parse a `#RGB` or `#RRGGBB` string into an opaque color.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let caps = HEX_RE.captures(s)?;
    let hex = &caps[1];
    if hex.len() == 3 {
        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
        return Some(Color::from_rgba(
            digit(0)? * 17,
            digit(1)? * 17,
            digit(2)? * 17,
            255,
        ));
    }
    Color::from_hex(hex)
}

/// Parse a config color, falling back when the string is malformed.
pub fn color_or(s: &str, fallback: Color) -> Color {
    parse_hex_color(s).unwrap_or(fallback)
}

//! Style token resolution: color names, `rgb()` forms, hex forms, opacity,
//! and font aliases.
//!
//! Deck authors supply arbitrary string tokens, so resolution never fails;
//! unknown tokens map to a documented default instead.

use eframe::egui::{Color32, FontFamily};

/// Fallback for tokens that resolve to nothing.
const DEFAULT_COLOR: Color32 = Color32::from_rgb(128, 128, 128);

/// SVG color names recognized in deck markup.
const NAMED: &[(&str, Color32)] = &[
    ("aliceblue", Color32::from_rgb(240, 248, 255)),
    ("aqua", Color32::from_rgb(0, 255, 255)),
    ("beige", Color32::from_rgb(245, 245, 220)),
    ("black", Color32::from_rgb(0, 0, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("brown", Color32::from_rgb(165, 42, 42)),
    ("chartreuse", Color32::from_rgb(127, 255, 0)),
    ("coral", Color32::from_rgb(255, 127, 80)),
    ("cornflowerblue", Color32::from_rgb(100, 149, 237)),
    ("crimson", Color32::from_rgb(220, 20, 60)),
    ("cyan", Color32::from_rgb(0, 255, 255)),
    ("darkblue", Color32::from_rgb(0, 0, 139)),
    ("darkgray", Color32::from_rgb(169, 169, 169)),
    ("darkgreen", Color32::from_rgb(0, 100, 0)),
    ("darkorange", Color32::from_rgb(255, 140, 0)),
    ("darkred", Color32::from_rgb(139, 0, 0)),
    ("dodgerblue", Color32::from_rgb(30, 144, 255)),
    ("firebrick", Color32::from_rgb(178, 34, 34)),
    ("forestgreen", Color32::from_rgb(34, 139, 34)),
    ("fuchsia", Color32::from_rgb(255, 0, 255)),
    ("gainsboro", Color32::from_rgb(220, 220, 220)),
    ("gold", Color32::from_rgb(255, 215, 0)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("grey", Color32::from_rgb(128, 128, 128)),
    ("hotpink", Color32::from_rgb(255, 105, 180)),
    ("indigo", Color32::from_rgb(75, 0, 130)),
    ("ivory", Color32::from_rgb(255, 255, 240)),
    ("khaki", Color32::from_rgb(240, 230, 140)),
    ("lavender", Color32::from_rgb(230, 230, 250)),
    ("lightblue", Color32::from_rgb(173, 216, 230)),
    ("lightgray", Color32::from_rgb(211, 211, 211)),
    ("lightgreen", Color32::from_rgb(144, 238, 144)),
    ("lightyellow", Color32::from_rgb(255, 255, 224)),
    ("lime", Color32::from_rgb(0, 255, 0)),
    ("linen", Color32::from_rgb(250, 240, 230)),
    ("magenta", Color32::from_rgb(255, 0, 255)),
    ("maroon", Color32::from_rgb(128, 0, 0)),
    ("midnightblue", Color32::from_rgb(25, 25, 112)),
    ("navy", Color32::from_rgb(0, 0, 128)),
    ("olive", Color32::from_rgb(128, 128, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("orchid", Color32::from_rgb(218, 112, 214)),
    ("pink", Color32::from_rgb(255, 192, 203)),
    ("plum", Color32::from_rgb(221, 160, 221)),
    ("purple", Color32::from_rgb(128, 0, 128)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("royalblue", Color32::from_rgb(65, 105, 225)),
    ("salmon", Color32::from_rgb(250, 128, 114)),
    ("seagreen", Color32::from_rgb(46, 139, 87)),
    ("sienna", Color32::from_rgb(160, 82, 45)),
    ("silver", Color32::from_rgb(192, 192, 192)),
    ("skyblue", Color32::from_rgb(135, 206, 235)),
    ("slategray", Color32::from_rgb(112, 128, 144)),
    ("steelblue", Color32::from_rgb(70, 130, 180)),
    ("tan", Color32::from_rgb(210, 180, 140)),
    ("teal", Color32::from_rgb(0, 128, 128)),
    ("tomato", Color32::from_rgb(255, 99, 71)),
    ("turquoise", Color32::from_rgb(64, 224, 208)),
    ("violet", Color32::from_rgb(238, 130, 238)),
    ("wheat", Color32::from_rgb(245, 222, 179)),
    ("white", Color32::from_rgb(255, 255, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
];

/// Resolve a color token to a renderable color.
///
/// Accepts `rgb(r,g,b)`, `rgb(r,g,b,a)`, `#rrggbb`, `#rrggbbaa`, and SVG
/// color names. Anything else resolves to mid-gray.
pub fn lookup(token: &str) -> Color32 {
    let token = token.trim();
    if let Some(inner) = token.strip_prefix("rgb(").and_then(|t| t.strip_suffix(')')) {
        return parse_rgb(inner).unwrap_or(DEFAULT_COLOR);
    }
    if let Some(hex) = token.strip_prefix('#') {
        return parse_hex(hex).unwrap_or(DEFAULT_COLOR);
    }
    let lower = token.to_ascii_lowercase();
    NAMED
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, c)| *c)
        .unwrap_or(DEFAULT_COLOR)
}

fn parse_rgb(inner: &str) -> Option<Color32> {
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [r, g, b] => Some(Color32::from_rgb(
            r.parse().ok()?,
            g.parse().ok()?,
            b.parse().ok()?,
        )),
        [r, g, b, a] => Some(Color32::from_rgba_unmultiplied(
            r.parse().ok()?,
            g.parse().ok()?,
            b.parse().ok()?,
            a.parse().ok()?,
        )),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color32> {
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)?,
        )),
        _ => None,
    }
}

/// Convert a 0-100 opacity to an alpha value, truncated toward zero.
/// Values at or below zero mean fully opaque.
pub fn set_opacity(v: f32) -> u8 {
    if v > 0.0 {
        (255.0 * (v / 100.0)) as u8
    } else {
        255
    }
}

/// Replace a color's alpha channel.
pub fn with_alpha(c: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha)
}

/// Map a font alias to an egui font family. A pure mapping; no font data
/// is loaded here.
pub fn font_family(token: &str) -> FontFamily {
    match token {
        "mono" => FontFamily::Monospace,
        _ => FontFamily::Proportional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_lookup() {
        assert_eq!(lookup("white"), Color32::from_rgb(255, 255, 255));
        assert_eq!(lookup("black"), Color32::from_rgb(0, 0, 0));
        assert_eq!(lookup("SteelBlue"), Color32::from_rgb(70, 130, 180));
    }

    #[test]
    fn test_rgb_forms() {
        assert_eq!(lookup("rgb(127,127,127)"), Color32::from_rgb(127, 127, 127));
        assert_eq!(lookup("rgb(240, 240, 240)"), Color32::from_rgb(240, 240, 240));
        assert_eq!(
            lookup("rgb(10,20,30,40)"),
            Color32::from_rgba_unmultiplied(10, 20, 30, 40)
        );
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(lookup("#ff8000"), Color32::from_rgb(255, 128, 0));
        assert_eq!(
            lookup("#ff800080"),
            Color32::from_rgba_unmultiplied(255, 128, 0, 128)
        );
    }

    #[test]
    fn test_unknown_is_default() {
        assert_eq!(lookup("no-such-color"), DEFAULT_COLOR);
        assert_eq!(lookup("rgb(oops)"), DEFAULT_COLOR);
        assert_eq!(lookup("#zzz"), DEFAULT_COLOR);
        assert_eq!(lookup(""), DEFAULT_COLOR);
    }

    #[test]
    fn test_set_opacity() {
        assert_eq!(set_opacity(0.0), 255);
        assert_eq!(set_opacity(100.0), 255);
        // truncated, not rounded
        assert_eq!(set_opacity(50.0), 127);
        assert_eq!(set_opacity(-5.0), 255);
    }

    #[test]
    fn test_font_family() {
        assert_eq!(font_family("mono"), FontFamily::Monospace);
        assert_eq!(font_family("sans"), FontFamily::Proportional);
        assert_eq!(font_family("serif"), FontFamily::Proportional);
        assert_eq!(font_family(""), FontFamily::Proportional);
    }
}

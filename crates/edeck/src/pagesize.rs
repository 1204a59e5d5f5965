//! Page-size resolution and percent-coordinate conversion.
//!
//! Deck markup positions everything in 0-100 percent units against a page
//! whose physical size is chosen at startup, either from a named preset or
//! a `WxH` literal in points.

const MM2PT: f32 = 2.83464;

/// Page dimensions; `unit` converts the stored values to points.
struct PageDimen {
    width: f32,
    height: f32,
    unit: f32,
}

/// Named page presets. A-series sizes are stored in millimeters.
const PAGE_MAP: &[(&str, PageDimen)] = &[
    ("Letter", PageDimen { width: 792.0, height: 612.0, unit: 1.0 }),
    ("Legal", PageDimen { width: 1008.0, height: 612.0, unit: 1.0 }),
    ("Tabloid", PageDimen { width: 1224.0, height: 792.0, unit: 1.0 }),
    ("ArchA", PageDimen { width: 864.0, height: 648.0, unit: 1.0 }),
    ("Widescreen", PageDimen { width: 1152.0, height: 648.0, unit: 1.0 }),
    ("4R", PageDimen { width: 432.0, height: 288.0, unit: 1.0 }),
    ("Index", PageDimen { width: 360.0, height: 216.0, unit: 1.0 }),
    ("A2", PageDimen { width: 420.0, height: 594.0, unit: MM2PT }),
    ("A3", PageDimen { width: 420.0, height: 297.0, unit: MM2PT }),
    ("A4", PageDimen { width: 297.0, height: 210.0, unit: MM2PT }),
    ("A5", PageDimen { width: 210.0, height: 148.0, unit: MM2PT }),
];

/// Parse a `WxH` literal. Any run of non-digit characters separates the two
/// fields; anything that does not produce exactly two numeric fields is not
/// a literal.
fn parse_literal(s: &str) -> Option<(f32, f32)> {
    let fields: Vec<&str> = s.split(|c: char| !c.is_ascii_digit()).filter(|f| !f.is_empty()).collect();
    if fields.len() != 2 {
        return None;
    }
    let width = fields[0].parse::<f32>().ok()?;
    let height = fields[1].parse::<f32>().ok()?;
    Some((width, height))
}

/// Resolve a page-size token to (width, height) in points.
///
/// Literals win over presets; an unknown token falls back to Letter.
pub fn pagedim(s: &str) -> (f32, f32) {
    if let Some((w, h)) = parse_literal(s) {
        if w > 0.0 && h > 0.0 {
            return (w, h);
        }
    }
    let p = PAGE_MAP
        .iter()
        .find(|(name, _)| *name == s)
        .map(|(_, p)| p)
        .unwrap_or_else(|| &PAGE_MAP[0].1);
    (p.width * p.unit, p.height * p.unit)
}

/// Convert a percentage to canvas measure.
pub fn pct(p: f32, m: f32) -> f32 {
    (p / 100.0) * m
}

/// Convert degrees to radians.
pub fn radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_any_separator() {
        assert_eq!(pagedim("612x792"), (612.0, 792.0));
        assert_eq!(pagedim("612,792"), (612.0, 792.0));
        assert_eq!(pagedim("612 792"), (612.0, 792.0));
        assert_eq!(pagedim("612--792"), (612.0, 792.0));
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(pagedim("Letter"), (792.0, 612.0));
        assert_eq!(pagedim("Widescreen"), (1152.0, 648.0));
        let (w, h) = pagedim("A4");
        assert!((w - 297.0 * MM2PT).abs() < 1e-3);
        assert!((h - 210.0 * MM2PT).abs() < 1e-3);
    }

    #[test]
    fn test_unknown_falls_back_to_letter() {
        assert_eq!(pagedim("bogus"), pagedim("Letter"));
        // Presets are case-sensitive
        assert_eq!(pagedim("letter"), pagedim("Letter"));
    }

    #[test]
    fn test_three_fields_is_not_a_literal() {
        // "612.5x792" splits into three digit runs and falls through
        assert_eq!(pagedim("612.5x792"), pagedim("Letter"));
    }

    #[test]
    fn test_zero_literal_falls_through() {
        assert_eq!(pagedim("0x0"), pagedim("Letter"));
    }

    #[test]
    fn test_pct_exact() {
        assert_eq!(pct(50.0, 1000.0), 500.0);
        assert_eq!(pct(0.0, 1000.0), 0.0);
        assert_eq!(pct(100.0, 768.0), 768.0);
        assert_eq!(pct(120.0, 100.0), 120.0);
    }

    #[test]
    fn test_radians() {
        assert!((radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(radians(0.0), 0.0);
    }
}

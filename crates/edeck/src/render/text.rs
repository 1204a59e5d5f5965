//! Text and list layout.
//!
//! A text element renders along one of three paths selected by its type
//! tag: `code` (monospace over an auto-sized panel), `block` (wrapped at a
//! given width), or plain (split on newlines, one run per line). Lists are
//! plain runs with a leading marker and a larger vertical advance.

use eframe::egui::FontFamily;

use super::RenderError;
use crate::canvas::{Anchor, Canvas};
use crate::color::{font_family, lookup, set_opacity, with_alpha};
use crate::deck::{List, Text};

/// Default line-spacing factor for text and lists.
const LINE_SPACING: f32 = 1.8;

/// Code panels fill light gray regardless of slide colors.
const CODE_PANEL_COLOR: &str = "rgb(240,240,240)";

/// Map an alignment token to a horizontal anchor. Unrecognized tokens are
/// left-aligned, not an error.
pub fn align_from_token(token: &str) -> Anchor {
    match token {
        "center" | "middle" | "mid" | "c" => Anchor::Center,
        "right" | "end" | "e" => Anchor::Right,
        _ => Anchor::Left,
    }
}

/// Read an included text file, expanding tabs to four spaces.
fn include_file(path: &str) -> Result<String, RenderError> {
    std::fs::read_to_string(path)
        .map(|s| s.replace('\t', "    "))
        .map_err(|e| RenderError::TextFile {
            path: path.to_string(),
            source: e,
        })
}

pub fn draw_text(canvas: &mut Canvas, t: &Text, fg: &str) -> Result<(), RenderError> {
    let token = if t.color.is_empty() { fg } else { &t.color };
    let color = with_alpha(lookup(token), set_opacity(t.opacity));
    let data = if t.file.is_empty() {
        t.tdata.clone()
    } else {
        include_file(&t.file)?
    };
    let lp = if t.lp == 0.0 { LINE_SPACING } else { t.lp };
    let spacing = lp * 1.2;
    let fs = t.sp;
    let anchor = align_from_token(&t.align);

    if t.rotation > 0.0 {
        canvas.begin_rotation(t.xp, t.yp, t.rotation);
    }

    let family = if t.ttype == "code" {
        // code is always monospace, over a panel sized to the line count
        let line_count = data.split('\n').count() as f32;
        let panel_h = line_count * spacing * fs;
        let bx = t.xp + t.wp / 2.0;
        let by = (t.yp - panel_h / 2.0) + spacing * fs;
        canvas.center_rect(bx, by, t.wp + fs, panel_h + fs, lookup(CODE_PANEL_COLOR));
        FontFamily::Monospace
    } else if t.font.is_empty() {
        font_family("sans")
    } else {
        font_family(&t.font)
    };

    if t.ttype == "block" {
        canvas.text_wrap(t.xp, t.yp, fs, t.wp, &data, color, family);
    } else {
        let mut y = t.yp;
        for line in data.split('\n') {
            canvas.text(t.xp, y, fs, line, color, family.clone(), anchor);
            y -= spacing * fs;
        }
    }

    if t.rotation > 0.0 {
        canvas.end_rotation();
    }
    Ok(())
}

pub fn draw_list(canvas: &mut Canvas, l: &List, fg: &str) -> Result<(), RenderError> {
    let family = if l.font.is_empty() {
        font_family("sans")
    } else {
        font_family(&l.font)
    };
    let base = if l.color.is_empty() { fg } else { &l.color };
    let alpha = set_opacity(l.opacity);
    let lp = if l.lp == 0.0 { LINE_SPACING } else { l.lp };
    let advance = lp * l.sp * 1.4;
    let anchor = align_from_token(&l.align);
    let fs = l.sp;

    if l.rotation > 0.0 {
        canvas.begin_rotation(l.xp, l.yp, l.rotation);
    }

    let mut y = l.yp;
    for (i, item) in l.items.iter().enumerate() {
        // an item override colors that item only
        let token = if item.color.is_empty() {
            base
        } else {
            &item.color
        };
        let color = with_alpha(lookup(token), alpha);
        match l.ltype.as_str() {
            "number" => {
                let numbered = format!("{}. {}", i + 1, item.text);
                canvas.text(l.xp, y, fs, &numbered, color, family.clone(), anchor);
            }
            "bullet" => {
                canvas.circle(l.xp, y + fs / 3.0, fs / 4.0, color);
                canvas.text(l.xp + fs, y, fs, &item.text, color, family.clone(), anchor);
            }
            _ => {
                canvas.text(l.xp, y, fs, &item.text, color, family.clone(), anchor);
            }
        }
        y -= advance;
    }

    if l.rotation > 0.0 {
        canvas.end_rotation();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_center_aliases() {
        assert_eq!(align_from_token("center"), Anchor::Center);
        assert_eq!(align_from_token("middle"), Anchor::Center);
        assert_eq!(align_from_token("mid"), Anchor::Center);
        assert_eq!(align_from_token("c"), Anchor::Center);
    }

    #[test]
    fn test_align_right_aliases() {
        assert_eq!(align_from_token("right"), Anchor::Right);
        assert_eq!(align_from_token("end"), Anchor::Right);
        assert_eq!(align_from_token("e"), Anchor::Right);
    }

    #[test]
    fn test_align_unknown_is_left() {
        assert_eq!(align_from_token(""), Anchor::Left);
        assert_eq!(align_from_token("left"), Anchor::Left);
        assert_eq!(align_from_token("justify"), Anchor::Left);
        // tokens are case-sensitive, like the rest of the markup
        assert_eq!(align_from_token("Center"), Anchor::Left);
    }

    #[test]
    fn test_include_file_missing_is_error() {
        assert!(include_file("/no/such/file.txt").is_err());
    }
}

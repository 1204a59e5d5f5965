//! Image placement.
//!
//! Bitmaps anchor at a percent position. A zero height with a nonzero
//! width switches the width field to percent-of-canvas and infers the
//! height from the bitmap's intrinsic aspect ratio; a bitmap that cannot
//! be decoded keeps its zero size and the slide renders without it.

use eframe::egui;

use super::RenderError;
use super::image_cache::ImageCache;
use super::text::align_from_token;
use crate::canvas::{Anchor, Canvas};
use crate::color::{font_family, lookup};
use crate::deck::Image;
use crate::pagesize::pct;

/// Captions render at a fixed size regardless of slide content.
const CAPTION_SIZE: f32 = 1.5;

pub fn draw_image(
    canvas: &mut Canvas,
    cache: &mut ImageCache,
    ctx: &egui::Context,
    im: &Image,
    fg: &str,
) -> Result<(), RenderError> {
    let mut w = im.width;
    let mut h = im.height;
    if im.height == 0.0 && im.width > 0.0 {
        let (nw, nh) = cache.intrinsic_size(ctx, &im.name);
        if nh > 0 {
            w = pct(im.width, canvas.width());
            h = w / (nw as f32 / nh as f32);
        }
    }
    let scale = if im.scale == 0.0 { 100.0 } else { im.scale };

    let texture = cache.get(ctx, &im.name).map(|c| c.texture.id());
    if let Some(id) = texture {
        canvas.image(id, im.xp, im.yp, w, h, scale);
    }

    if !im.caption.is_empty() {
        let font = if im.font.is_empty() { "sans" } else { &im.font };
        let token = if im.color.is_empty() { fg } else { &im.color };
        let align = if im.align.is_empty() {
            "center"
        } else {
            &im.align
        };
        let display_w = w * (scale / 100.0);
        let display_h = h * (scale / 100.0);
        let anchor = align_from_token(align);
        let half_w_pct = (display_w / 2.0) / canvas.width() * 100.0;
        let cx = match anchor {
            Anchor::Center => im.xp,
            Anchor::Right => im.xp + half_w_pct,
            Anchor::Left => im.xp - half_w_pct,
        };
        let cy = im.yp - (display_h / 2.0) / canvas.height() * 100.0 - CAPTION_SIZE * 2.0;
        canvas.text(
            cx,
            cy,
            CAPTION_SIZE,
            &im.caption,
            lookup(token),
            font_family(font),
            anchor,
        );
    }
    Ok(())
}

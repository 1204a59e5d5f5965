//! Slide composition.
//!
//! The compositor resolves slide-level defaults and hands each element to
//! its renderer in a fixed z-order: background, images, shapes, text,
//! lists. Element renderers return a `Result`; the compositor logs the
//! failure and moves on, so one bad element never blanks a slide.

pub mod image;
pub mod image_cache;
pub mod shapes;
pub mod text;

use eframe::egui;
use thiserror::Error;
use tracing::warn;

use crate::canvas::Canvas;
use crate::color;
use crate::deck::Deck;
use image_cache::ImageCache;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("polygon needs matching coordinate lists of at least 3 points (got {xs} x, {ys} y)")]
    PolygonCoords { xs: usize, ys: usize },
    #[error("cannot include text file {path}: {source}")]
    TextFile {
        path: String,
        source: std::io::Error,
    },
}

/// Render slide `n` of the deck onto the canvas.
pub fn show_slide(
    canvas: &mut Canvas,
    cache: &mut ImageCache,
    ctx: &egui::Context,
    deck: &Deck,
    n: usize,
) {
    let Some(slide) = deck.slides.get(n) else {
        return;
    };
    let cw = deck.canvas.width;
    let ch = deck.canvas.height;

    let bg = if slide.bg.is_empty() { "white" } else { &slide.bg };
    canvas.background(color::lookup(bg));

    let mut split = slide.gradpercent;
    if split <= 0.0 || split > 100.0 {
        split = 100.0;
    }
    if !slide.gradcolor1.is_empty() && !slide.gradcolor2.is_empty() {
        gradient(canvas, &slide.gradcolor1, &slide.gradcolor2, split);
    }

    let fg = if slide.fg.is_empty() { "black" } else { &slide.fg };

    for im in &slide.images {
        log_skip(image::draw_image(canvas, cache, ctx, im, fg), n);
    }
    for rect in &slide.rects {
        log_skip(shapes::draw_rect(canvas, rect, cw, ch), n);
    }
    for ellipse in &slide.ellipses {
        log_skip(shapes::draw_ellipse(canvas, ellipse), n);
    }
    for curve in &slide.curves {
        log_skip(shapes::draw_curve(canvas, curve), n);
    }
    for arc in &slide.arcs {
        log_skip(shapes::draw_arc(canvas, arc), n);
    }
    for line in &slide.lines {
        log_skip(shapes::draw_line(canvas, line), n);
    }
    for poly in &slide.polygons {
        log_skip(shapes::draw_polygon(canvas, poly), n);
    }
    for t in &slide.texts {
        log_skip(text::draw_text(canvas, t, fg), n);
    }
    for l in &slide.lists {
        log_skip(text::draw_list(canvas, l, fg), n);
    }
}

fn log_skip(result: Result<(), RenderError>, slide: usize) {
    if let Err(err) = result {
        warn!(slide = slide + 1, %err, "element skipped");
    }
}

/// Background gradients carry two colors and a split percent in the
/// markup, but gradient rendering is intentionally not implemented.
fn gradient(_canvas: &Canvas, _color1: &str, _color2: &str, _split: f32) {}

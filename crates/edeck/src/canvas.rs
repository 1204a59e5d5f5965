//! Percent-coordinate drawing surface.
//!
//! Wraps an [`egui::Painter`] with the deck coordinate convention: both
//! axes run 0-100, the origin is the bottom-left corner of the canvas
//! rect, and font sizes and stroke widths are percentages of the canvas
//! width. Values outside 0-100 are mapped like any other and simply land
//! off-canvas.

use eframe::egui::{self, Color32, FontFamily, FontId, Pos2, Stroke};
use eframe::egui::epaint::{EllipseShape, PathShape, PathStroke, QuadraticBezierShape, TextShape};

use crate::pagesize::pct;

/// Horizontal anchor for a glyph run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

/// An active rotation, pivoted at a canvas point. Angles are stored in
/// screen space (y down), so a positive deck rotation is negated here.
#[derive(Debug, Clone, Copy)]
struct Rotation {
    pivot: Pos2,
    angle: f32,
}

impl Rotation {
    fn apply(&self, p: Pos2) -> Pos2 {
        let (sin, cos) = self.angle.sin_cos();
        let d = p - self.pivot;
        self.pivot + egui::vec2(cos * d.x - sin * d.y, sin * d.x + cos * d.y)
    }
}

pub struct Canvas<'p> {
    painter: &'p egui::Painter,
    rect: egui::Rect,
    rotation: Option<Rotation>,
}

impl<'p> Canvas<'p> {
    pub fn new(painter: &'p egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter,
            rect,
            rotation: None,
        }
    }

    /// Canvas width in screen units.
    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    /// Canvas height in screen units.
    pub fn height(&self) -> f32 {
        self.rect.height()
    }

    fn sx(&self, xp: f32) -> f32 {
        self.rect.left() + pct(xp, self.rect.width())
    }

    fn sy(&self, yp: f32) -> f32 {
        self.rect.bottom() - pct(yp, self.rect.height())
    }

    fn sw(&self, wp: f32) -> f32 {
        pct(wp, self.rect.width())
    }

    fn sh(&self, hp: f32) -> f32 {
        pct(hp, self.rect.height())
    }

    /// Map a percent position to screen space, through the active rotation.
    fn place(&self, xp: f32, yp: f32) -> Pos2 {
        let p = egui::pos2(self.sx(xp), self.sy(yp));
        match self.rotation {
            Some(rot) => rot.apply(p),
            None => p,
        }
    }

    /// Start a rotation of `degrees` counter-clockwise about (xp, yp).
    /// Everything drawn until [`end_rotation`](Self::end_rotation) is
    /// transformed.
    pub fn begin_rotation(&mut self, xp: f32, yp: f32, degrees: f32) {
        self.rotation = Some(Rotation {
            pivot: egui::pos2(self.sx(xp), self.sy(yp)),
            angle: -crate::pagesize::radians(degrees),
        });
    }

    pub fn end_rotation(&mut self) {
        self.rotation = None;
    }

    /// Fill the whole canvas.
    pub fn background(&self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    /// Stroke a line between two percent points; `sw` is a percent of
    /// canvas width.
    pub fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32, sw: f32, color: Color32) {
        self.painter.line_segment(
            [self.place(x1, y1), self.place(x2, y2)],
            Stroke::new(self.sw(sw), color),
        );
    }

    /// Fill a rectangle centered at (xp, yp).
    pub fn center_rect(&self, xp: f32, yp: f32, wp: f32, hp: f32, color: Color32) {
        let w = self.sw(wp);
        let h = self.sh(hp);
        match self.rotation {
            None => {
                let rect = egui::Rect::from_center_size(self.place(xp, yp), egui::vec2(w, h));
                self.painter.rect_filled(rect, 0.0, color);
            }
            Some(rot) => {
                let c = egui::pos2(self.sx(xp), self.sy(yp));
                let corners = [
                    egui::pos2(c.x - w / 2.0, c.y - h / 2.0),
                    egui::pos2(c.x + w / 2.0, c.y - h / 2.0),
                    egui::pos2(c.x + w / 2.0, c.y + h / 2.0),
                    egui::pos2(c.x - w / 2.0, c.y + h / 2.0),
                ];
                let points = corners.iter().map(|p| rot.apply(*p)).collect();
                self.painter
                    .add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
            }
        }
    }

    /// Fill an ellipse centered at (xp, yp); `rx` is a percent of canvas
    /// width, `ry` of canvas height.
    pub fn ellipse(&self, xp: f32, yp: f32, rx: f32, ry: f32, color: Color32) {
        self.painter.add(egui::Shape::Ellipse(EllipseShape::filled(
            self.place(xp, yp),
            egui::vec2(self.sw(rx), self.sh(ry)),
            color,
        )));
    }

    /// Fill a circle centered at (xp, yp); the radius is a percent of
    /// canvas width.
    pub fn circle(&self, xp: f32, yp: f32, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.place(xp, yp), self.sw(radius), color);
    }

    /// Fill a polygon from parallel percent coordinate slices.
    pub fn polygon(&self, xs: &[f32], ys: &[f32], color: Color32) {
        let points: Vec<Pos2> = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| self.place(x, y))
            .collect();
        self.painter
            .add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
    }

    /// Stroke a quadratic bezier from (x1, y1) to (x3, y3) with control
    /// point (x2, y2).
    #[allow(clippy::too_many_arguments)]
    pub fn quad_curve(
        &self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
        sw: f32,
        color: Color32,
    ) {
        let shape = QuadraticBezierShape::from_points_stroke(
            [
                self.place(x1, y1),
                self.place(x2, y2),
                self.place(x3, y3),
            ],
            false,
            Color32::TRANSPARENT,
            Stroke::new(self.sw(sw), color),
        );
        self.painter.add(shape);
    }

    /// Stroke an elliptical arc centered at (xp, yp) between `a1` and `a2`
    /// radians, counter-clockwise; `rx` is a percent of canvas width, `ry`
    /// of canvas height.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &self,
        xp: f32,
        yp: f32,
        rx: f32,
        ry: f32,
        a1: f32,
        a2: f32,
        sw: f32,
        color: Color32,
    ) {
        const SEGMENTS: usize = 72;
        let c = egui::pos2(self.sx(xp), self.sy(yp));
        let rx = self.sw(rx);
        let ry = self.sh(ry);
        let points: Vec<Pos2> = (0..=SEGMENTS)
            .map(|i| {
                let t = a1 + (a2 - a1) * (i as f32 / SEGMENTS as f32);
                let p = egui::pos2(c.x + rx * t.cos(), c.y - ry * t.sin());
                match self.rotation {
                    Some(rot) => rot.apply(p),
                    None => p,
                }
            })
            .collect();
        self.painter.add(egui::Shape::Path(PathShape::line(
            points,
            PathStroke::new(self.sw(sw), color),
        )));
    }

    /// Place a single glyph run. (xp, yp) is the anchor; the run sits on
    /// top of the y coordinate. The size is a percent of canvas width.
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &self,
        xp: f32,
        yp: f32,
        size: f32,
        s: &str,
        color: Color32,
        family: FontFamily,
        anchor: Anchor,
    ) {
        let px = self.sw(size);
        let galley = self
            .painter
            .layout_no_wrap(s.to_string(), FontId::new(px, family), color);
        let mut pos = egui::pos2(self.sx(xp), self.sy(yp) - px);
        match anchor {
            Anchor::Left => {}
            Anchor::Center => pos.x -= galley.size().x / 2.0,
            Anchor::Right => pos.x -= galley.size().x,
        }
        match self.rotation {
            None => {
                self.painter.galley(pos, galley, color);
            }
            Some(rot) => {
                let shape = TextShape::new(rot.apply(pos), galley, color).with_angle(rot.angle);
                self.painter.add(shape);
            }
        }
    }

    /// Lay out text wrapped at `wp` percent of canvas width. Explicit
    /// newlines are treated as ordinary word breaks; the wrap engine owns
    /// line breaking.
    #[allow(clippy::too_many_arguments)]
    pub fn text_wrap(
        &self,
        xp: f32,
        yp: f32,
        size: f32,
        wp: f32,
        s: &str,
        color: Color32,
        family: FontFamily,
    ) {
        let px = self.sw(size);
        let flowed = s.replace('\n', " ");
        let galley = self
            .painter
            .layout(flowed, FontId::new(px, family), color, self.sw(wp));
        let pos = egui::pos2(self.sx(xp), self.sy(yp) - px);
        match self.rotation {
            None => {
                self.painter.galley(pos, galley, color);
            }
            Some(rot) => {
                let shape = TextShape::new(rot.apply(pos), galley, color).with_angle(rot.angle);
                self.painter.add(shape);
            }
        }
    }

    /// Blit a texture centered at (xp, yp). `w` and `h` are screen pixels,
    /// scaled by `scale` percent.
    pub fn image(&self, texture: egui::TextureId, xp: f32, yp: f32, w: f32, h: f32, scale: f32) {
        let size = egui::vec2(w * scale / 100.0, h * scale / 100.0);
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        let rect = egui::Rect::from_center_size(self.place(xp, yp), size);
        self.painter.image(
            texture,
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    /// Stroke a percent grid over the region (x, y)-(x+w, y+h) with lines
    /// every `interval` units.
    #[allow(clippy::too_many_arguments)]
    pub fn grid(&self, x: f32, y: f32, w: f32, h: f32, sw: f32, interval: f32, color: Color32) {
        let mut xp = x;
        while xp <= x + w {
            self.line(xp, y, xp, y + h, sw, color);
            xp += interval;
        }
        let mut yp = y;
        while yp <= y + h {
            self.line(x, yp, x + w, yp, sw, color);
            yp += interval;
        }
    }
}

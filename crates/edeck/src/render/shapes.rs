//! Geometric element rendering: rectangles, ellipses, lines, arcs,
//! beziers, and polygons, with the shared defaults for color, stroke
//! width, and opacity.

use eframe::egui::Color32;

use super::RenderError;
use crate::canvas::Canvas;
use crate::color::{lookup, set_opacity, with_alpha};
use crate::deck::{Arc, Curve, Ellipse, Line, Polygon, Rect};
use crate::pagesize::radians;

/// Geometric elements with no color token render mid-gray.
const DEFAULT_COLOR: &str = "rgb(127,127,127)";

/// Stroke width, in percent units, for curves/arcs/lines that set none.
const DEFAULT_STROKE: f32 = 0.2;

fn fill_color(token: &str, opacity: f32) -> Color32 {
    let token = if token.is_empty() { DEFAULT_COLOR } else { token };
    with_alpha(lookup(token), set_opacity(opacity))
}

fn stroke_width(sp: f32) -> f32 {
    if sp <= 0.0 { DEFAULT_STROKE } else { sp }
}

/// Height, in percent units, that keeps a shape visually square given the
/// canvas aspect ratio. Used when an element sets `hr == 100`.
pub fn aspect_height(wp: f32, cw: f32, ch: f32) -> f32 {
    wp * (cw / ch)
}

pub fn draw_rect(canvas: &Canvas, rect: &Rect, cw: f32, ch: f32) -> Result<(), RenderError> {
    let color = fill_color(&rect.color, rect.opacity);
    let hp = if rect.hr == 100.0 {
        aspect_height(rect.wp, cw, ch)
    } else {
        rect.hp
    };
    canvas.center_rect(rect.xp, rect.yp, rect.wp, hp, color);
    Ok(())
}

pub fn draw_ellipse(canvas: &Canvas, ellipse: &Ellipse) -> Result<(), RenderError> {
    let color = fill_color(&ellipse.color, ellipse.opacity);
    if ellipse.hr == 100.0 {
        canvas.circle(ellipse.xp, ellipse.yp, ellipse.wp / 2.0, color);
    } else {
        canvas.ellipse(
            ellipse.xp,
            ellipse.yp,
            ellipse.wp / 2.0,
            ellipse.hp / 2.0,
            color,
        );
    }
    Ok(())
}

pub fn draw_line(canvas: &Canvas, line: &Line) -> Result<(), RenderError> {
    let color = fill_color(&line.color, line.opacity);
    canvas.line(
        line.xp1,
        line.yp1,
        line.xp2,
        line.yp2,
        stroke_width(line.sp),
        color,
    );
    Ok(())
}

pub fn draw_curve(canvas: &Canvas, curve: &Curve) -> Result<(), RenderError> {
    let color = fill_color(&curve.color, curve.opacity);
    canvas.quad_curve(
        curve.xp1,
        curve.yp1,
        curve.xp2,
        curve.yp2,
        curve.xp3,
        curve.yp3,
        stroke_width(curve.sp),
        color,
    );
    Ok(())
}

pub fn draw_arc(canvas: &Canvas, arc: &Arc) -> Result<(), RenderError> {
    let color = fill_color(&arc.color, arc.opacity);
    canvas.arc(
        arc.xp,
        arc.yp,
        arc.wp / 2.0,
        arc.hp / 2.0,
        radians(arc.a1),
        radians(arc.a2),
        stroke_width(arc.sp),
        color,
    );
    Ok(())
}

/// Split the parallel coordinate strings of a polygon. Mismatched lengths
/// or fewer than three points reject the polygon; an individual coordinate
/// that fails to parse becomes 0.
pub fn parse_poly_coords(xc: &str, yc: &str) -> Option<(Vec<f32>, Vec<f32>)> {
    let xs: Vec<&str> = xc.split_whitespace().collect();
    let ys: Vec<&str> = yc.split_whitespace().collect();
    if xs.len() != ys.len() || xs.len() < 3 {
        return None;
    }
    let parse = |fields: &[&str]| -> Vec<f32> {
        fields
            .iter()
            .map(|f| f.parse::<f32>().unwrap_or(0.0))
            .collect()
    };
    Some((parse(&xs), parse(&ys)))
}

pub fn draw_polygon(canvas: &Canvas, poly: &Polygon) -> Result<(), RenderError> {
    let (xs, ys) =
        parse_poly_coords(&poly.xc, &poly.yc).ok_or_else(|| RenderError::PolygonCoords {
            xs: poly.xc.split_whitespace().count(),
            ys: poly.yc.split_whitespace().count(),
        })?;
    canvas.polygon(&xs, &ys, fill_color(&poly.color, poly.opacity));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_mismatched_lengths_rejected() {
        assert!(parse_poly_coords("10 20 30 40", "10 20 30").is_none());
    }

    #[test]
    fn test_polygon_too_few_points_rejected() {
        assert!(parse_poly_coords("10 20", "10 20").is_none());
    }

    #[test]
    fn test_polygon_three_points_accepted() {
        let (xs, ys) = parse_poly_coords("10 20 30", "40 50 40").unwrap();
        assert_eq!(xs, vec![10.0, 20.0, 30.0]);
        assert_eq!(ys, vec![40.0, 50.0, 40.0]);
    }

    #[test]
    fn test_polygon_bad_coordinate_defaults_to_zero() {
        let (xs, ys) = parse_poly_coords("10 oops 30", "40 50 40").unwrap();
        assert_eq!(xs, vec![10.0, 0.0, 30.0]);
        assert_eq!(ys, vec![40.0, 50.0, 40.0]);
    }

    #[test]
    fn test_aspect_height() {
        // 20% wide on a 1000x500 canvas renders 40 percent-equivalent high
        assert_eq!(aspect_height(20.0, 1000.0, 500.0), 40.0);
        assert_eq!(aspect_height(20.0, 500.0, 500.0), 20.0);
    }

    #[test]
    fn test_stroke_width_default() {
        assert_eq!(stroke_width(0.0), 0.2);
        assert_eq!(stroke_width(0.5), 0.5);
    }

    #[test]
    fn test_fill_color_defaults() {
        use eframe::egui::Color32;
        assert_eq!(fill_color("", 0.0), Color32::from_rgb(127, 127, 127));
        assert_eq!(
            fill_color("red", 50.0),
            Color32::from_rgba_unmultiplied(255, 0, 0, 127)
        );
    }
}

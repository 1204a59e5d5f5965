//! In-memory deck model.
//!
//! A deck is an ordered sequence of slides over one shared canvas size in
//! points. Every positional field is a percentage of the canvas width or
//! height; the renderer passes out-of-range values through unchanged so
//! elements can bleed off-page.

pub mod loader;

/// Canvas dimensions in points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub canvas: CanvasSize,
    pub slides: Vec<Slide>,
}

/// One slide: background/foreground defaults plus typed element lists in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    pub bg: String,
    pub fg: String,
    pub gradcolor1: String,
    pub gradcolor2: String,
    pub gradpercent: f32,
    pub rects: Vec<Rect>,
    pub ellipses: Vec<Ellipse>,
    pub curves: Vec<Curve>,
    pub arcs: Vec<Arc>,
    pub lines: Vec<Line>,
    pub polygons: Vec<Polygon>,
    pub texts: Vec<Text>,
    pub lists: Vec<List>,
    pub images: Vec<Image>,
}

/// Centered rectangle. `hr == 100` derives the height from the width and
/// the canvas aspect ratio instead of reading `hp`.
#[derive(Debug, Clone, Default)]
pub struct Rect {
    pub xp: f32,
    pub yp: f32,
    pub wp: f32,
    pub hp: f32,
    pub hr: f32,
    pub color: String,
    pub opacity: f32,
}

/// Centered ellipse; `hr == 100` degenerates to a circle of radius `wp/2`.
#[derive(Debug, Clone, Default)]
pub struct Ellipse {
    pub xp: f32,
    pub yp: f32,
    pub wp: f32,
    pub hp: f32,
    pub hr: f32,
    pub color: String,
    pub opacity: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Line {
    pub xp1: f32,
    pub yp1: f32,
    pub xp2: f32,
    pub yp2: f32,
    pub sp: f32,
    pub color: String,
    pub opacity: f32,
}

/// Quadratic bezier: endpoints (xp1, yp1) and (xp3, yp3) with control
/// point (xp2, yp2).
#[derive(Debug, Clone, Default)]
pub struct Curve {
    pub xp1: f32,
    pub yp1: f32,
    pub xp2: f32,
    pub yp2: f32,
    pub xp3: f32,
    pub yp3: f32,
    pub sp: f32,
    pub color: String,
    pub opacity: f32,
}

/// Arc spanning angles `a1..a2` in degrees.
#[derive(Debug, Clone, Default)]
pub struct Arc {
    pub xp: f32,
    pub yp: f32,
    pub wp: f32,
    pub hp: f32,
    pub a1: f32,
    pub a2: f32,
    pub sp: f32,
    pub color: String,
    pub opacity: f32,
}

/// Filled polygon from parallel whitespace-separated coordinate strings.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    pub xc: String,
    pub yc: String,
    pub color: String,
    pub opacity: f32,
}

/// A text element. `file` replaces `tdata` when set; `ttype` selects the
/// layout path (plain lines, wrapped block, or code with a panel).
#[derive(Debug, Clone, Default)]
pub struct Text {
    pub xp: f32,
    pub yp: f32,
    pub sp: f32,
    pub wp: f32,
    pub rotation: f32,
    pub lp: f32,
    pub tdata: String,
    pub file: String,
    pub font: String,
    pub align: String,
    pub ttype: String,
    pub color: String,
    pub opacity: f32,
}

#[derive(Debug, Clone, Default)]
pub struct List {
    pub xp: f32,
    pub yp: f32,
    pub sp: f32,
    #[allow(dead_code)]
    pub wp: f32,
    pub rotation: f32,
    pub lp: f32,
    pub items: Vec<ListItem>,
    pub font: String,
    pub ltype: String,
    pub align: String,
    pub color: String,
    pub opacity: f32,
}

/// One list entry; `color` overrides the list color for this item only.
#[derive(Debug, Clone, Default)]
pub struct ListItem {
    pub text: String,
    pub color: String,
}

/// A bitmap placed at a percent anchor. `width`/`height` are pixel
/// dimensions, except that `height == 0` switches `width` to a percent of
/// canvas width and infers the height from the bitmap's aspect ratio.
#[derive(Debug, Clone, Default)]
pub struct Image {
    pub name: String,
    pub xp: f32,
    pub yp: f32,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub caption: String,
    pub font: String,
    pub color: String,
    pub align: String,
}

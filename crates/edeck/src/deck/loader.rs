//! Deck markup loading.
//!
//! Deck files are a small XML dialect: a `<deck>` of `<slide>` elements,
//! each holding shape, text, list, and image elements with percent
//! attributes. Parsing is event-based; unknown elements and attributes are
//! ignored, and numeric attributes that fail to parse default to zero so a
//! sloppy deck still loads.

use std::io::Read;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

use super::{
    Arc, CanvasSize, Curve, Deck, Ellipse, Image, Line, List, ListItem, Polygon, Rect, Slide, Text,
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed deck markup: {0}")]
    Markup(#[from] quick_xml::Error),
    #[error("deck has no slides")]
    Empty,
}

/// Read a deck from a file path (`-` reads standard input) and back-fill
/// the canvas dimensions in points.
pub fn read_deck(path: &str, width: f32, height: f32) -> Result<Deck, LoadError> {
    let markup = if path == "-" {
        let mut s = String::new();
        std::io::stdin()
            .read_to_string(&mut s)
            .map_err(|e| LoadError::Io {
                path: "standard input".to_string(),
                source: e,
            })?;
        s
    } else {
        std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_string(),
            source: e,
        })?
    };
    let mut deck = parse(&markup)?;
    if deck.slides.is_empty() {
        return Err(LoadError::Empty);
    }
    deck.canvas = CanvasSize { width, height };
    Ok(deck)
}

/// Parser state while walking one deck document.
#[derive(Default)]
struct Builder {
    deck: Deck,
    slide: Option<Slide>,
    text: Option<Text>,
    list: Option<List>,
    item: Option<ListItem>,
}

/// Parse deck markup into the in-memory model.
pub fn parse(markup: &str) -> Result<Deck, LoadError> {
    let mut reader = Reader::from_str(markup);
    let mut buf = Vec::new();
    let mut b = Builder::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => b.open(e, false),
            Event::Empty(ref e) => b.open(e, true),
            Event::End(ref e) => b.close(e.name().as_ref()),
            Event::Text(ref t) => {
                let content = t
                    .unescape()
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(t.as_ref()).into_owned());
                b.content(&content);
            }
            Event::CData(ref t) => {
                let content = String::from_utf8_lossy(t.as_ref()).into_owned();
                b.content(&content);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(b.deck)
}

impl Builder {
    fn open(&mut self, e: &BytesStart, empty: bool) {
        let attrs = Attrs::read(e);
        match e.name().as_ref() {
            b"slide" => {
                self.slide = Some(Slide {
                    bg: attrs.text("bg"),
                    fg: attrs.text("fg"),
                    gradcolor1: attrs.text("gradcolor1"),
                    gradcolor2: attrs.text("gradcolor2"),
                    gradpercent: attrs.num("gradpercent"),
                    ..Slide::default()
                });
                if empty {
                    self.close(b"slide");
                }
            }
            b"rect" => {
                if let Some(s) = self.slide.as_mut() {
                    s.rects.push(Rect {
                        xp: attrs.num("xp"),
                        yp: attrs.num("yp"),
                        wp: attrs.num("wp"),
                        hp: attrs.num("hp"),
                        hr: attrs.num("hr"),
                        color: attrs.text("color"),
                        opacity: attrs.num("opacity"),
                    });
                }
            }
            b"ellipse" => {
                if let Some(s) = self.slide.as_mut() {
                    s.ellipses.push(Ellipse {
                        xp: attrs.num("xp"),
                        yp: attrs.num("yp"),
                        wp: attrs.num("wp"),
                        hp: attrs.num("hp"),
                        hr: attrs.num("hr"),
                        color: attrs.text("color"),
                        opacity: attrs.num("opacity"),
                    });
                }
            }
            b"line" => {
                if let Some(s) = self.slide.as_mut() {
                    s.lines.push(Line {
                        xp1: attrs.num("xp1"),
                        yp1: attrs.num("yp1"),
                        xp2: attrs.num("xp2"),
                        yp2: attrs.num("yp2"),
                        sp: attrs.num("sp"),
                        color: attrs.text("color"),
                        opacity: attrs.num("opacity"),
                    });
                }
            }
            b"curve" => {
                if let Some(s) = self.slide.as_mut() {
                    s.curves.push(Curve {
                        xp1: attrs.num("xp1"),
                        yp1: attrs.num("yp1"),
                        xp2: attrs.num("xp2"),
                        yp2: attrs.num("yp2"),
                        xp3: attrs.num("xp3"),
                        yp3: attrs.num("yp3"),
                        sp: attrs.num("sp"),
                        color: attrs.text("color"),
                        opacity: attrs.num("opacity"),
                    });
                }
            }
            b"arc" => {
                if let Some(s) = self.slide.as_mut() {
                    s.arcs.push(Arc {
                        xp: attrs.num("xp"),
                        yp: attrs.num("yp"),
                        wp: attrs.num("wp"),
                        hp: attrs.num("hp"),
                        a1: attrs.num("a1"),
                        a2: attrs.num("a2"),
                        sp: attrs.num("sp"),
                        color: attrs.text("color"),
                        opacity: attrs.num("opacity"),
                    });
                }
            }
            b"polygon" => {
                if let Some(s) = self.slide.as_mut() {
                    s.polygons.push(Polygon {
                        xc: attrs.text("xc"),
                        yc: attrs.text("yc"),
                        color: attrs.text("color"),
                        opacity: attrs.num("opacity"),
                    });
                }
            }
            b"image" => {
                if let Some(s) = self.slide.as_mut() {
                    s.images.push(Image {
                        name: attrs.text("name"),
                        xp: attrs.num("xp"),
                        yp: attrs.num("yp"),
                        width: attrs.num("width"),
                        height: attrs.num("height"),
                        scale: attrs.num("scale"),
                        caption: attrs.text("caption"),
                        font: attrs.text("font"),
                        color: attrs.text("color"),
                        align: attrs.text("align"),
                    });
                }
            }
            b"text" => {
                self.text = Some(Text {
                    xp: attrs.num("xp"),
                    yp: attrs.num("yp"),
                    sp: attrs.num("sp"),
                    wp: attrs.num("wp"),
                    rotation: attrs.num("rotation"),
                    lp: attrs.num("lp"),
                    file: attrs.text("file"),
                    font: attrs.text("font"),
                    align: attrs.text("align"),
                    ttype: attrs.text("type"),
                    color: attrs.text("color"),
                    opacity: attrs.num("opacity"),
                    ..Text::default()
                });
                if empty {
                    self.close(b"text");
                }
            }
            b"list" => {
                self.list = Some(List {
                    xp: attrs.num("xp"),
                    yp: attrs.num("yp"),
                    sp: attrs.num("sp"),
                    wp: attrs.num("wp"),
                    rotation: attrs.num("rotation"),
                    lp: attrs.num("lp"),
                    font: attrs.text("font"),
                    ltype: attrs.text("type"),
                    align: attrs.text("align"),
                    color: attrs.text("color"),
                    opacity: attrs.num("opacity"),
                    ..List::default()
                });
                if empty {
                    self.close(b"list");
                }
            }
            b"li" => {
                self.item = Some(ListItem {
                    text: String::new(),
                    color: attrs.text("color"),
                });
                if empty {
                    self.close(b"li");
                }
            }
            _ => {}
        }
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"slide" => {
                if let Some(s) = self.slide.take() {
                    self.deck.slides.push(s);
                }
            }
            b"text" => {
                if let (Some(s), Some(mut t)) = (self.slide.as_mut(), self.text.take()) {
                    t.tdata = t.tdata.trim_matches(['\n', '\r']).to_string();
                    s.texts.push(t);
                }
            }
            b"list" => {
                if let (Some(s), Some(l)) = (self.slide.as_mut(), self.list.take()) {
                    s.lists.push(l);
                }
            }
            b"li" => {
                if let (Some(l), Some(mut i)) = (self.list.as_mut(), self.item.take()) {
                    i.text = i.text.trim().to_string();
                    l.items.push(i);
                }
            }
            _ => {}
        }
    }

    fn content(&mut self, s: &str) {
        if let Some(i) = self.item.as_mut() {
            i.text.push_str(s);
        } else if let Some(t) = self.text.as_mut() {
            t.tdata.push_str(s);
        }
    }
}

/// Attribute bag for one element; numeric getters default to zero and
/// string getters to empty, matching the model's "unset" convention.
struct Attrs(Vec<(String, String)>);

impl Attrs {
    fn read(e: &BytesStart) -> Self {
        let mut out = Vec::new();
        for attr in e.attributes().flatten() {
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
            out.push((key, value));
        }
        Attrs(out)
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn num(&self, name: &str) -> f32 {
        self.get(name)
            .and_then(|v| v.trim().parse::<f32>().ok())
            .unwrap_or(0.0)
    }

    fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK: &str = r#"<deck>
  <slide bg="white" fg="black">
    <rect xp="50" yp="50" wp="20" hp="10" color="steelblue" opacity="50"/>
    <ellipse xp="30" yp="70" wp="10" hr="100"/>
    <line xp1="10" yp1="10" xp2="90" yp2="10" sp="0.5" color="red"/>
    <polygon xc="10 20 30" yc="40 50 40" color="green"/>
    <text xp="50" yp="80" sp="4" align="center">Main Title</text>
    <list xp="10" yp="60" sp="2" type="bullet">
      <li>first</li>
      <li color="red">second</li>
    </list>
    <image name="pic.png" xp="70" yp="30" width="30" height="0" scale="100" caption="A picture"/>
  </slide>
  <slide>
    <text xp="10" yp="50" sp="3" type="code" file="snippet.txt"></text>
  </slide>
</deck>"#;

    #[test]
    fn test_parse_slide_count_and_defaults() {
        let deck = parse(DECK).unwrap();
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].bg, "white");
        assert_eq!(deck.slides[0].fg, "black");
        // unset background/foreground stay empty for the compositor to default
        assert_eq!(deck.slides[1].bg, "");
        assert_eq!(deck.slides[1].fg, "");
    }

    #[test]
    fn test_parse_shapes() {
        let deck = parse(DECK).unwrap();
        let slide = &deck.slides[0];
        assert_eq!(slide.rects.len(), 1);
        assert_eq!(slide.rects[0].xp, 50.0);
        assert_eq!(slide.rects[0].opacity, 50.0);
        assert_eq!(slide.ellipses[0].hr, 100.0);
        assert_eq!(slide.ellipses[0].color, "");
        assert_eq!(slide.lines[0].sp, 0.5);
        assert_eq!(slide.polygons[0].xc, "10 20 30");
    }

    #[test]
    fn test_parse_text_and_list() {
        let deck = parse(DECK).unwrap();
        let slide = &deck.slides[0];
        assert_eq!(slide.texts[0].tdata, "Main Title");
        assert_eq!(slide.texts[0].align, "center");
        let list = &slide.lists[0];
        assert_eq!(list.ltype, "bullet");
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].text, "first");
        assert_eq!(list.items[0].color, "");
        assert_eq!(list.items[1].color, "red");
    }

    #[test]
    fn test_parse_image_and_file_reference() {
        let deck = parse(DECK).unwrap();
        assert_eq!(deck.slides[0].images[0].name, "pic.png");
        assert_eq!(deck.slides[0].images[0].height, 0.0);
        assert_eq!(deck.slides[1].texts[0].file, "snippet.txt");
        assert_eq!(deck.slides[1].texts[0].ttype, "code");
    }

    #[test]
    fn test_empty_slide_is_kept() {
        let deck = parse(r#"<deck><slide/><slide bg="gray"/></deck>"#).unwrap();
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[1].bg, "gray");
    }

    #[test]
    fn test_bad_numeric_attribute_defaults_to_zero() {
        let deck = parse(r#"<deck><slide><rect xp="oops" yp="5"/></slide></deck>"#).unwrap();
        assert_eq!(deck.slides[0].rects[0].xp, 0.0);
        assert_eq!(deck.slides[0].rects[0].yp, 5.0);
    }

    #[test]
    fn test_unknown_elements_are_ignored() {
        let deck = parse(r#"<deck><slide><video src="x"/></slide></deck>"#).unwrap();
        assert_eq!(deck.slides.len(), 1);
        assert!(deck.slides[0].texts.is_empty());
    }

    #[test]
    fn test_entities_unescaped() {
        let deck =
            parse(r#"<deck><slide><text xp="1" yp="1" sp="2">AT&amp;T</text></slide></deck>"#)
                .unwrap();
        assert_eq!(deck.slides[0].texts[0].tdata, "AT&T");
    }
}

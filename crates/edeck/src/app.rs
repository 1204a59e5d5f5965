//! The viewer application: window setup, per-frame input draining, and
//! slide painting.

use std::path::{Path, PathBuf};

use eframe::egui::{self, FontFamily};

use crate::canvas::{Anchor, Canvas};
use crate::color;
use crate::deck::{self, Deck};
use crate::nav::{NavEvent, NavState, PointerButton};
use crate::pagesize;
use crate::render;
use crate::render::image_cache::ImageCache;

struct ViewerApp {
    deck: Deck,
    nav: NavState,
    cache: ImageCache,
}

/// Keyboard binding table. Letter bindings accept a bare key or ctrl
/// (emacs habits); navigation keys are unmodified except shifted
/// space/enter, which reverses.
fn map_key(key: egui::Key, m: egui::Modifiers) -> Option<NavEvent> {
    use NavEvent::*;
    let plain_or_ctrl = m.is_none() || m.ctrl;
    Some(match key {
        egui::Key::A | egui::Key::Num1 if plain_or_ctrl => First,
        egui::Key::E if plain_or_ctrl => Last,
        egui::Key::B | egui::Key::P if plain_or_ctrl => Backward,
        egui::Key::F | egui::Key::N if plain_or_ctrl => Forward,
        egui::Key::Home => First,
        egui::Key::End => Last,
        egui::Key::G => ToggleGrid,
        egui::Key::Space | egui::Key::Enter => {
            if m.shift {
                Backward
            } else {
                Forward
            }
        }
        egui::Key::ArrowRight | egui::Key::ArrowDown | egui::Key::PageDown | egui::Key::K => {
            Forward
        }
        egui::Key::ArrowLeft | egui::Key::ArrowUp | egui::Key::PageUp | egui::Key::J => Backward,
        egui::Key::Escape | egui::Key::Q => Quit,
        _ => return None,
    })
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Draw the numbered diagnostic grid: translucent lines every `interval`
/// percent, with axis labels of size `ts`.
fn ngrid(canvas: &Canvas, interval: f32, ts: f32, color: egui::Color32) {
    canvas.grid(
        0.0,
        0.0,
        100.0,
        100.0,
        0.1,
        interval,
        color::with_alpha(color, 50),
    );
    let label = color::with_alpha(color, 220);
    let mut x = interval;
    while x < 100.0 {
        canvas.text(
            x,
            ts,
            ts,
            &format!("{x:.0}"),
            label,
            FontFamily::Proportional,
            Anchor::Center,
        );
        x += interval;
    }
    let mut y = interval;
    while y < 100.0 {
        canvas.text(
            ts,
            y - ts / 2.0,
            ts,
            &format!("{y:.0}"),
            label,
            FontFamily::Proportional,
            Anchor::Center,
        );
        y += interval;
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let last = self.deck.slides.len() as i64 - 1;

        // Drain this frame's input in delivery order
        let mut events: Vec<NavEvent> = Vec::new();
        ctx.input(|i| {
            for event in &i.events {
                match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => {
                        if let Some(ev) = map_key(*key, *modifiers) {
                            events.push(ev);
                        }
                    }
                    egui::Event::PointerButton {
                        button,
                        pressed: true,
                        ..
                    } => {
                        if let Some(b) = map_button(*button) {
                            events.push(self.nav.pointer_press(b));
                        }
                    }
                    _ => {}
                }
            }
        });

        for ev in events {
            if ev == NavEvent::Quit {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            } else {
                self.nav.apply(ev, last);
            }
        }
        self.nav.wrap(last);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let mut canvas = Canvas::new(ui.painter(), rect);
                let n = self.nav.index();
                render::show_slide(&mut canvas, &mut self.cache, ctx, &self.deck, n);
                if self.nav.grid {
                    let slide = &self.deck.slides[n];
                    let fg = if slide.fg.is_empty() {
                        "black"
                    } else {
                        &slide.fg
                    };
                    ngrid(&canvas, 5.0, 1.0, color::lookup(fg));
                }
            });
    }
}

/// Load the deck and enter the window loop. Blocks until the window
/// closes.
pub fn run(filename: &str, title: &str, pagesize: &str, page: usize) -> anyhow::Result<()> {
    let (width, height) = pagesize::pagedim(pagesize);
    let deck = deck::loader::read_deck(filename, width, height)?;

    let base = if filename == "-" {
        PathBuf::from(".")
    } else {
        Path::new(filename)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    };

    let nav = NavState::new(page, deck.slides.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ViewerApp {
                deck,
                nav,
                cache: ImageCache::new(base),
            }))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Key, Modifiers};

    #[test]
    fn test_letter_bindings_accept_bare_or_ctrl() {
        assert_eq!(map_key(Key::A, Modifiers::NONE), Some(NavEvent::First));
        assert_eq!(map_key(Key::A, Modifiers::CTRL), Some(NavEvent::First));
        assert_eq!(map_key(Key::Num1, Modifiers::NONE), Some(NavEvent::First));
        assert_eq!(map_key(Key::E, Modifiers::CTRL), Some(NavEvent::Last));
        assert_eq!(map_key(Key::B, Modifiers::NONE), Some(NavEvent::Backward));
        assert_eq!(map_key(Key::P, Modifiers::CTRL), Some(NavEvent::Backward));
        assert_eq!(map_key(Key::F, Modifiers::NONE), Some(NavEvent::Forward));
        assert_eq!(map_key(Key::N, Modifiers::CTRL), Some(NavEvent::Forward));
        // other modifiers disable the letter bindings
        assert_eq!(map_key(Key::E, Modifiers::ALT), None);
        assert_eq!(map_key(Key::B, Modifiers::SHIFT), None);
    }

    #[test]
    fn test_space_and_enter_reverse_with_shift() {
        assert_eq!(map_key(Key::Space, Modifiers::NONE), Some(NavEvent::Forward));
        assert_eq!(map_key(Key::Enter, Modifiers::NONE), Some(NavEvent::Forward));
        assert_eq!(
            map_key(Key::Space, Modifiers::SHIFT),
            Some(NavEvent::Backward)
        );
        assert_eq!(
            map_key(Key::Enter, Modifiers::SHIFT),
            Some(NavEvent::Backward)
        );
    }

    #[test]
    fn test_navigation_keys() {
        for key in [Key::ArrowRight, Key::ArrowDown, Key::PageDown, Key::K] {
            assert_eq!(map_key(key, Modifiers::NONE), Some(NavEvent::Forward));
        }
        for key in [Key::ArrowLeft, Key::ArrowUp, Key::PageUp, Key::J] {
            assert_eq!(map_key(key, Modifiers::NONE), Some(NavEvent::Backward));
        }
        assert_eq!(map_key(Key::Home, Modifiers::NONE), Some(NavEvent::First));
        assert_eq!(map_key(Key::End, Modifiers::NONE), Some(NavEvent::Last));
        assert_eq!(map_key(Key::G, Modifiers::NONE), Some(NavEvent::ToggleGrid));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(Key::Escape, Modifiers::NONE), Some(NavEvent::Quit));
        assert_eq!(map_key(Key::Q, Modifiers::NONE), Some(NavEvent::Quit));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        assert_eq!(map_key(Key::Z, Modifiers::NONE), None);
    }

    #[test]
    fn test_pointer_buttons() {
        assert_eq!(
            map_button(egui::PointerButton::Primary),
            Some(PointerButton::Primary)
        );
        assert_eq!(
            map_button(egui::PointerButton::Extra1),
            None
        );
    }
}

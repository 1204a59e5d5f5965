//! Bitmap cache.
//!
//! Images referenced by a deck are decoded once and uploaded as egui
//! textures. Failures are remembered so a missing or corrupt file is
//! logged once and then treated as a zero-size bitmap on every frame.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui;
use tracing::warn;

pub struct CachedImage {
    /// Intrinsic pixel dimensions.
    pub size: [usize; 2],
    pub texture: egui::TextureHandle,
}

pub struct ImageCache {
    base: PathBuf,
    entries: HashMap<String, Option<CachedImage>>,
}

impl ImageCache {
    /// Relative image paths resolve against `base`, normally the deck
    /// file's directory.
    pub fn new(base: PathBuf) -> Self {
        Self {
            base,
            entries: HashMap::new(),
        }
    }

    pub fn get(&mut self, ctx: &egui::Context, name: &str) -> Option<&CachedImage> {
        if !self.entries.contains_key(name) {
            let loaded = self.load(ctx, name);
            self.entries.insert(name.to_string(), loaded);
        }
        self.entries.get(name).and_then(|e| e.as_ref())
    }

    /// Intrinsic pixel dimensions of a bitmap; unreadable or undecodable
    /// files report (0, 0).
    pub fn intrinsic_size(&mut self, ctx: &egui::Context, name: &str) -> (u32, u32) {
        match self.get(ctx, name) {
            Some(img) => (img.size[0] as u32, img.size[1] as u32),
            None => (0, 0),
        }
    }

    fn load(&self, ctx: &egui::Context, name: &str) -> Option<CachedImage> {
        let path = if Path::new(name).is_absolute() {
            PathBuf::from(name)
        } else {
            self.base.join(name)
        };
        let bytes = match std::fs::read(&path) {
            Ok(b) => b,
            Err(err) => {
                warn!(path = %path.display(), %err, "cannot read image");
                return None;
            }
        };
        let decoded = match image::load_from_memory(&bytes) {
            Ok(i) => i,
            Err(err) => {
                warn!(path = %path.display(), %err, "cannot decode image");
                return None;
            }
        };
        let rgba = decoded.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let texture = ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR);
        Some(CachedImage { size, texture })
    }
}

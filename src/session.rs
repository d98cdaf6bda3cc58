// Session glue around the engine: which picture is selected, where snapshots go,
// and what the export file is called.
// Visual: nothing here draws; it decides *what* the engine draws and saves it to disk.

use crate::engine::GlitchEngine;
use crate::error::Error;
use crate::fx::EffectKind;
use image::{ImageFormat, RgbaImage};
use log::{error, info, warn};
use rand::Rng;
use std::path::{Path, PathBuf};

/// Pictures offered when none are given on the command line.
pub const DEFAULT_CATALOG: [&str; 3] = ["assets/bsod.jpg", "assets/google_404.png", "assets/xp_bliss.png"];

/// Decode a picture from disk into RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, Error> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| Error::ImageLoad(format!("{}: {e}", path.display())))
}

pub struct Session<R: Rng> {
    engine: GlitchEngine<R>,
    catalog: Vec<PathBuf>,
    selected: usize, // 0-based index into `catalog`
    out_dir: PathBuf,
}

impl<R: Rng> Session<R> {
    pub fn new(engine: GlitchEngine<R>, catalog: Vec<PathBuf>, out_dir: PathBuf) -> Self {
        Self { engine, catalog, selected: 0, out_dir }
    }

    pub fn engine(&self) -> &GlitchEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GlitchEngine<R> {
        &mut self.engine
    }

    /// 0-based index of the selected picture.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select catalog entry `index` and try to load it.
    /// On failure the error is logged and the engine keeps its current picture
    /// (none at start-up, so every trigger stays a no-op). Returns whether it loaded.
    pub fn select_image(&mut self, index: usize) -> bool {
        let Some(path) = self.catalog.get(index) else {
            warn!("no image #{} in a catalog of {}", index + 1, self.catalog.len());
            return false;
        };
        self.selected = index;
        match load_rgba(path) {
            Ok(img) => {
                info!("loaded {}", path.display());
                self.engine.load_image(img);
                true
            }
            Err(e) => {
                error!("failed to load image: {e}");
                false
            }
        }
    }

    pub fn trigger(&mut self) -> usize {
        self.engine.trigger()
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.engine.resize(width, height);
    }

    pub fn redraw(&mut self) {
        self.engine.redraw();
    }

    pub fn toggle(&mut self, kind: EffectKind) -> bool {
        self.engine.toggle(kind)
    }

    /// `image{N}_{tags}.png`, N 1-based, tags of the enabled categories joined by `_`.
    pub fn export_file_name(&self) -> String {
        let tags: Vec<&str> = self.engine.enabled().enabled().map(EffectKind::abbreviation).collect();
        format!("image{}_{}.png", self.selected + 1, tags.join("_"))
    }

    /// Write the current frame as PNG into the output directory.
    pub fn export(&self) -> Result<PathBuf, Error> {
        let path = self.out_dir.join(self.export_file_name());
        let frame = self
            .engine
            .buffer()
            .to_image()
            .ok_or_else(|| Error::Export("frame buffer has inconsistent size".into()))?;
        frame
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| Error::Export(format!("{}: {e}", path.display())))?;
        info!("saved {}", path.display());
        Ok(path)
    }

    /// One-line summary for the window title.
    pub fn status_line(&self) -> String {
        let tags: Vec<&str> = self.engine.enabled().enabled().map(EffectKind::label).collect();
        let effects = if tags.is_empty() { "no effects".to_string() } else { tags.join(" ") };
        if self.engine.has_image() {
            format!(
                "Image {}/{} | {} | pass {}",
                self.selected + 1,
                self.catalog.len(),
                effects,
                self.engine.passes()
            )
        } else {
            format!("No image | {effects}")
        }
    }
}

// Command-line configuration for the glitch window.

use clap::{Parser, ValueEnum};
use glitch_canvas::EffectKind;
use glitch_canvas::session::DEFAULT_CATALOG;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EffectArg {
    Horizontal,
    Vertical,
    Pixels,
    Rgb,
}

impl From<EffectArg> for EffectKind {
    fn from(arg: EffectArg) -> Self {
        match arg {
            EffectArg::Horizontal => EffectKind::Horizontal,
            EffectArg::Vertical => EffectKind::Vertical,
            EffectArg::Pixels => EffectKind::Pixels,
            EffectArg::Rgb => EffectKind::Rgb,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "glitch-canvas", about = "Click, type or scroll to wreck a picture")]
pub struct Config {
    /// Pictures to glitch; keys 1-9 switch between them.
    pub images: Vec<PathBuf>,

    /// Initial window width.
    #[arg(long, default_value_t = 1280)]
    pub width: usize,

    /// Initial window height.
    #[arg(long, default_value_t = 720)]
    pub height: usize,

    /// Seed for a reproducible session (profile and every pass).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where `S` writes PNG snapshots.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// error, warn, info, debug or trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Start with this category switched off (repeatable).
    #[arg(long = "disable", value_enum)]
    pub disable: Vec<EffectArg>,
}

impl Config {
    /// Pictures from the command line, or the built-in list.
    pub fn catalog(&self) -> Vec<PathBuf> {
        if self.images.is_empty() {
            DEFAULT_CATALOG.iter().map(PathBuf::from).collect()
        } else {
            self.images.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_stable() {
        let cfg = Config::try_parse_from(["glitch-canvas"]).expect("parse should succeed");
        assert_eq!((cfg.width, cfg.height), (1280, 720));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.out_dir, PathBuf::from("."));
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.disable.is_empty());
        assert_eq!(cfg.catalog().len(), DEFAULT_CATALOG.len());
    }

    #[test]
    fn overrides_work() {
        let cfg = Config::try_parse_from([
            "glitch-canvas",
            "a.png",
            "b.jpg",
            "--seed",
            "7",
            "--disable",
            "rgb",
            "--disable",
            "vertical",
            "--out-dir",
            "shots",
        ])
        .expect("parse should succeed");
        assert_eq!(cfg.catalog(), vec![PathBuf::from("a.png"), PathBuf::from("b.jpg")]);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.disable, vec![EffectArg::Rgb, EffectArg::Vertical]);
        assert_eq!(cfg.out_dir, PathBuf::from("shots"));
        assert_eq!(EffectKind::from(cfg.disable[0]), EffectKind::Rgb);
    }

    #[test]
    fn rejects_unknown_effect() {
        assert!(Config::try_parse_from(["glitch-canvas", "--disable", "blur"]).is_err());
    }
}

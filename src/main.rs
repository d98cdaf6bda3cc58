// What you SEE:
// • The selected picture stretched over the whole window.
// • Click, press any unbound key, or scroll: the picture gets torn, speckled, color-shifted.
// • 1-9 pick a picture, H/V/P/R toggle H-Slice/V-Slice/Pixels/RGB, C cleans, S saves a PNG.
// • Resizing the window redraws the picture clean. ESC quits.

mod config;
mod draw;

use clap::Parser;
use config::Config;
use draw::{Drawer, Input};
use glitch_canvas::logging::{init_log, parse_level};
use glitch_canvas::{Error, GlitchEngine, Session};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Error> {
    let config = Config::parse();
    init_log(parse_level(&config.log_level)?)?;

    /* --- One random source for the whole session ---
       Visual: same seed → same profile and the same sequence of tears. */
    let rng = match config.seed {
        Some(seed) => {
            info!("session seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    /* --- Window + engine sized to it --- */
    let mut drawer = Drawer::new("Glitch Canvas", config.width, config.height)?;
    let (mut width, mut height) = drawer.size();
    let mut engine = GlitchEngine::new(width, height, rng);
    for arg in &config.disable {
        engine.set_enabled((*arg).into(), false);
    }

    /* --- Session: catalog, export target; first picture loads right away --- */
    let mut session = Session::new(engine, config.catalog(), config.out_dir.clone());
    session.select_image(0);

    let mut frame: Vec<u32> = Vec::new();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Window resized? Start over from a clean picture at the new size. */
        let size = drawer.size();
        if size != (width, height) {
            (width, height) = size;
            session.resize(width, height);
        }

        /* 2) Inputs, grouped per frame (minifb only polls): keys, then clicks, then one scroll. */
        for input in drawer.poll() {
            match input {
                Input::Trigger => {
                    session.trigger();
                }
                Input::SelectImage(i) => {
                    session.select_image(i);
                }
                Input::Toggle(kind) => {
                    let on = session.toggle(kind);
                    info!("{kind} {}", if on { "on" } else { "off" });
                }
                Input::Save => {
                    if let Err(e) = session.export() {
                        error!("{e}");
                    }
                }
                Input::Clean => session.redraw(),
            }
        }

        /* 3) Present (title bar doubles as the HUD). */
        session.engine().buffer().pack_into(&mut frame);
        drawer.set_title(&format!("Glitch Canvas | {}", session.status_line()));
        drawer.present(&frame, width, height)?;
    }

    Ok(())
}

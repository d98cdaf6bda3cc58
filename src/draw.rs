// Window + input.
// Visual effects provided here:
// 1) A resizable window that shows the (possibly wrecked) picture.
// 2) Clicks, key presses and scroll ticks turned into glitch passes.
// 3) The title bar, used as a tiny HUD (image, effects, pass counter).

use glitch_canvas::EffectKind;
use glitch_canvas::Error;
use minifb::{Key, KeyRepeat, MouseButton, Window, WindowOptions};

/// One thing the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Trigger,                // click / unbound key / scroll: one glitch pass
    SelectImage(usize),     // 1..9 → 0-based catalog index
    Toggle(EffectKind),     // H V P R
    Save,                   // S
    Clean,                  // C: wipe the damage, keep the picture
}

/// Map a freshly pressed key to what it means here.
fn key_input(key: Key) -> Option<Input> {
    let input = match key {
        Key::Key1 => Input::SelectImage(0),
        Key::Key2 => Input::SelectImage(1),
        Key::Key3 => Input::SelectImage(2),
        Key::Key4 => Input::SelectImage(3),
        Key::Key5 => Input::SelectImage(4),
        Key::Key6 => Input::SelectImage(5),
        Key::Key7 => Input::SelectImage(6),
        Key::Key8 => Input::SelectImage(7),
        Key::Key9 => Input::SelectImage(8),
        Key::H => Input::Toggle(EffectKind::Horizontal),
        Key::V => Input::Toggle(EffectKind::Vertical),
        Key::P => Input::Toggle(EffectKind::Pixels),
        Key::R => Input::Toggle(EffectKind::Rgb),
        Key::S => Input::Save,
        Key::C => Input::Clean,
        Key::Escape => return None, // handled by the main loop
        _ => Input::Trigger,
    };
    Some(input)
}

pub struct Drawer {
    window: Window, // the on-screen window you see
    left_was_down: bool,
    right_was_down: bool,
    title: String,
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new black window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window, left_was_down: false, right_was_down: false, title: title.to_string() })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, pixels: &[u32], width: usize, height: usize) -> Result<(), Error> {
        if width == 0 || height == 0 {
            // Minimized: keep pumping events without a buffer.
            self.window.update();
            return Ok(());
        }
        self.window
            .update_with_buffer(pixels, width, height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Current drawable size; changes when the user resizes the window.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Only touches the OS title when the text actually changes.
    pub fn set_title(&mut self, title: &str) {
        if self.title != title {
            self.window.set_title(title);
            self.title = title.to_string();
        }
    }

    /// Everything the user did since the last frame.
    /// Mouse buttons count on the press edge only, so holding a button is one pass.
    pub fn poll(&mut self) -> Vec<Input> {
        let keys = self.window.get_keys_pressed(KeyRepeat::No);

        let left = self.window.get_mouse_down(MouseButton::Left);
        let right = self.window.get_mouse_down(MouseButton::Right);
        let clicks = usize::from(left && !self.left_was_down) + usize::from(right && !self.right_was_down);
        self.left_was_down = left;
        self.right_was_down = right;

        let scrolled = self.window.get_scroll_wheel().is_some_and(|(dx, dy)| dx != 0.0 || dy != 0.0);
        frame_inputs(keys, clicks, scrolled)
    }
}

/// minifb only polls, so one frame's events come out grouped:
/// keys first, then one trigger per click, then a single trigger for any scrolling.
fn frame_inputs(keys: Vec<Key>, clicks: usize, scrolled: bool) -> Vec<Input> {
    let mut inputs: Vec<Input> = keys.into_iter().filter_map(key_input).collect();
    inputs.extend(std::iter::repeat_n(Input::Trigger, clicks));
    if scrolled {
        inputs.push(Input::Trigger);
    }
    inputs
}

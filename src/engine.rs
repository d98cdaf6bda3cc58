// The glitch engine: owns the live buffer, the clean picture, the session profile
// and the random source, and turns one user event into one pass of damage.
// Visual: Clean = the untouched picture; Glitched = picture plus accumulated tears/specks.

use crate::fx::EffectKind;
use crate::profile::GlitchProfile;
use crate::registry::{EffectRegistry, EnabledEffects};
use crate::types::{BLACK, PixelBuffer};
use image::RgbaImage;
use log::{debug, info};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Buffer holds exactly the redrawn base picture.
    Clean,
    /// Buffer holds the base picture plus zero or more passes since the last redraw.
    Glitched,
}

pub struct GlitchEngine<R: Rng> {
    rng: R,
    profile: GlitchProfile,
    enabled: EnabledEffects,
    registry: EffectRegistry,
    buffer: PixelBuffer,
    base: Option<RgbaImage>,
    passes: u64,
    state: EngineState,
}

impl<R: Rng> GlitchEngine<R> {
    /// New engine with a freshly sampled profile and all categories on.
    /// Visual: black surface of the given size until an image is loaded.
    pub fn new(width: usize, height: usize, mut rng: R) -> Self {
        let profile = GlitchProfile::generate(&mut rng);
        Self::with_profile(width, height, profile, rng)
    }

    /// Same as `new`, with an explicit profile.
    pub fn with_profile(width: usize, height: usize, profile: GlitchProfile, rng: R) -> Self {
        info!("glitch profile: {profile}");
        let enabled = EnabledEffects::default();
        Self {
            rng,
            profile,
            enabled,
            registry: EffectRegistry::from_enabled(&enabled),
            buffer: PixelBuffer::new(width, height),
            base: None,
            passes: 0,
            state: EngineState::Clean,
        }
    }

    pub fn profile(&self) -> &GlitchProfile {
        &self.profile
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Passes applied since the last clean redraw.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn has_image(&self) -> bool {
        self.base.is_some()
    }

    pub fn enabled(&self) -> &EnabledEffects {
        &self.enabled
    }

    pub fn registry(&self) -> &EffectRegistry {
        &self.registry
    }

    /// Turn one category on/off. Takes effect from the next pass; the buffer is not touched.
    pub fn set_enabled(&mut self, kind: EffectKind, on: bool) {
        self.enabled.set_enabled(kind, on);
        self.registry = EffectRegistry::from_enabled(&self.enabled);
        debug!("{kind} {}", if on { "enabled" } else { "disabled" });
    }

    /// Flip one category; returns the new state.
    pub fn toggle(&mut self, kind: EffectKind) -> bool {
        let on = self.enabled.toggle(kind);
        self.registry = EffectRegistry::from_enabled(&self.enabled);
        debug!("{kind} {}", if on { "enabled" } else { "disabled" });
        on
    }

    /// Replace the base picture and redraw clean.
    pub fn load_image(&mut self, image: RgbaImage) {
        info!("base image {}x{}", image.width(), image.height());
        self.base = Some(image);
        self.redraw();
    }

    /// Reallocate the buffer to the new surface size and redraw clean.
    /// Visual: all glitches vanish; the picture is re-stretched to the window.
    pub fn resize(&mut self, width: usize, height: usize) {
        info!("resize {}x{} -> {width}x{height}", self.buffer.width(), self.buffer.height());
        self.buffer = PixelBuffer::new(width, height);
        self.redraw();
    }

    /// Black fill, then the base picture if there is one. Resets the pass counter.
    pub fn redraw(&mut self) {
        self.buffer.clear(BLACK);
        if let Some(base) = &self.base {
            self.buffer.draw_base_image(base);
        }
        self.passes = 0;
        self.state = EngineState::Clean;
    }

    /// One user event's worth of damage: `max_slices` primitives, each drawn
    /// uniformly from the registry. Returns how many primitives ran.
    /// Without a base picture nothing happens and the counter stays put.
    pub fn trigger(&mut self) -> usize {
        if self.base.is_none() {
            return 0;
        }
        let mut applied = 0;
        if !self.registry.is_empty() {
            for _ in 0..self.profile.max_slices {
                let pick = self.rng.random_range(0..self.registry.len());
                if let Some(kind) = self.registry.get(pick) {
                    kind.apply(&mut self.buffer, &self.profile, &mut self.rng);
                    applied += 1;
                }
            }
        }
        self.passes += 1;
        self.state = EngineState::Glitched;
        debug!("pass {} applied {applied} primitives", self.passes);
        applied
    }
}

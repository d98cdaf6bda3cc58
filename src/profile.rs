// Per-session glitch "personality": how hard each pass hits and how often the
// per-pixel effects fire. Sampled once, never changed until the session restarts.

use rand::Rng;
use std::fmt;
use std::ops::Range;

pub const MAX_SLICES_RANGE: Range<u32> = 10..20;
pub const SLICE_OFFSET_RANGE: Range<u32> = 10..70;
pub const NOISE_CHANCE_RANGE: Range<f64> = 0.002..0.012;
pub const RGB_SHIFT_CHANCE_RANGE: Range<f64> = 0.01..0.03;

/// Randomized parameters shared by every primitive in a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchProfile {
    /// Primitives applied per pass.
    pub max_slices: u32,
    /// Reserved shift magnitude; sampled and logged, not read by the slice primitives.
    pub slice_offset: u32,
    /// Per-pixel probability of a gray noise flash.
    pub noise_chance: f64,
    /// Per-pixel probability of an R→G→B rotation.
    pub rgb_shift_chance: f64,
}

impl GlitchProfile {
    /// Draw every field independently and uniformly from its range.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            max_slices: rng.random_range(MAX_SLICES_RANGE),
            slice_offset: rng.random_range(SLICE_OFFSET_RANGE),
            noise_chance: rng.random_range(NOISE_CHANCE_RANGE),
            rgb_shift_chance: rng.random_range(RGB_SHIFT_CHANCE_RANGE),
        }
    }
}

impl fmt::Display for GlitchProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slices={} offset={} noise={:.4} rgb={:.4}",
            self.max_slices, self.slice_offset, self.noise_chance, self.rgb_shift_chance
        )
    }
}

// FX: the four destructive glitch primitives, all software, all in place.
// Visual outcomes:
// - Horizontal slice: a strip of rows is torn out and pasted back shifted sideways.
// - Vertical slice: a strip of columns is torn out and pasted back shifted up/down.
// - Pixels: scattered gray specks, plus neighbouring pixels trading colors.
// - RGB: scattered pixels with their color channels rotated (false-color flecks).
// Alpha is never touched.

use crate::profile::GlitchProfile;
use crate::types::PixelBuffer;
use rand::Rng;
use std::fmt;
use std::ops::Range;

/// Height (horizontal) or width (vertical) of a torn strip, in pixels.
pub const BAND_RANGE: Range<usize> = 5..25;
/// How far a torn strip is pasted from where it came from.
pub const SHIFT_RANGE: Range<i32> = -40..40;
/// Per-pixel chance of a color swap with a nearby pixel.
pub const SWAP_CHANCE: f64 = 0.005;
/// Swap partner lies this many pixels ahead (wrapping around the buffer).
pub const SWAP_REACH: Range<usize> = 0..10;

// ----------------------------- effect categories ---------------------------------------

/// One user-toggleable category; each maps to exactly one primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Horizontal,
    Vertical,
    Pixels,
    Rgb,
}

impl EffectKind {
    /// Canonical order, used by the registry and the export file name.
    pub const ALL: [EffectKind; 4] =
        [EffectKind::Horizontal, EffectKind::Vertical, EffectKind::Pixels, EffectKind::Rgb];

    /// Short tag used in exported file names.
    pub fn abbreviation(self) -> &'static str {
        match self {
            EffectKind::Horizontal => "x",
            EffectKind::Vertical => "y",
            EffectKind::Pixels => "Pixels",
            EffectKind::Rgb => "RGB",
        }
    }

    /// Human label for the title bar and logs.
    pub fn label(self) -> &'static str {
        match self {
            EffectKind::Horizontal => "H-Slice",
            EffectKind::Vertical => "V-Slice",
            EffectKind::Pixels => "Pixels",
            EffectKind::Rgb => "RGB",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Run this category's primitive once against `fb`.
    pub fn apply<R: Rng>(self, fb: &mut PixelBuffer, profile: &GlitchProfile, rng: &mut R) {
        match self {
            EffectKind::Horizontal => horizontal_slice_shift(fb, rng),
            EffectKind::Vertical => vertical_slice_shift(fb, rng),
            EffectKind::Pixels => pixel_noise_and_swap(fb, profile, rng),
            EffectKind::Rgb => channel_shift(fb, profile, rng),
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ----------------------------- slice tears ---------------------------------------------

/// Tear a band of rows and paste it back shifted sideways.
/// Visual: a horizontal stripe jumps left or right; the uncovered edge keeps the old pixels.
pub fn horizontal_slice_shift<R: Rng>(fb: &mut PixelBuffer, rng: &mut R) {
    if fb.is_empty() { return; }
    let y = rng.random_range(0..fb.height());
    let h = rng.random_range(BAND_RANGE);
    let slice = fb.read_region(0, y, fb.width(), h);
    let offset = rng.random_range(SHIFT_RANGE) as isize;
    fb.write_region(&slice, offset, y as isize);
}

/// Tear a band of columns and paste it back shifted vertically.
/// Visual: a vertical stripe slides up or down.
pub fn vertical_slice_shift<R: Rng>(fb: &mut PixelBuffer, rng: &mut R) {
    if fb.is_empty() { return; }
    let x = rng.random_range(0..fb.width());
    let w = rng.random_range(BAND_RANGE);
    let slice = fb.read_region(x, 0, w, fb.height());
    let offset = rng.random_range(SHIFT_RANGE) as isize;
    fb.write_region(&slice, x as isize, offset);
}

// ----------------------------- per-pixel effects ---------------------------------------

/// Scatter gray noise and swap a few pixels with near neighbours.
/// Both checks run for every pixel and may fire on the same one.
/// Visual: salt-and-pepper specks plus tiny color smears along rows.
pub fn pixel_noise_and_swap<R: Rng>(fb: &mut PixelBuffer, profile: &GlitchProfile, rng: &mut R) {
    noise_and_swap(fb, profile.noise_chance, SWAP_CHANCE, rng);
}

fn noise_and_swap<R: Rng>(fb: &mut PixelBuffer, noise_chance: f64, swap_chance: f64, rng: &mut R) {
    let n = fb.len();
    let data = fb.as_bytes_mut();
    for i in 0..n {
        let p = i * 4;
        if rng.random::<f64>() < noise_chance {
            let v: u8 = rng.random_range(0..=255);
            data[p..p + 3].fill(v);
        }
        if rng.random::<f64>() < swap_chance {
            let j = (i + rng.random_range(SWAP_REACH)) % n;
            if j != i {
                let q = j * 4;
                for c in 0..3 {
                    data.swap(p + c, q + c);
                }
            }
        }
    }
}

/// Rotate R←G, G←B, B←R on a random sprinkling of pixels.
/// Three rotations of the same pixel bring it back to its original colors.
/// Visual: isolated pixels turn an odd, shifted hue.
pub fn channel_shift<R: Rng>(fb: &mut PixelBuffer, profile: &GlitchProfile, rng: &mut R) {
    for px in fb.as_bytes_mut().chunks_exact_mut(4) {
        if rng.random::<f64>() < profile.rgb_shift_chance {
            px[..3].rotate_left(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn profile(noise: f64, rgb: f64) -> GlitchProfile {
        GlitchProfile { max_slices: 1, slice_offset: 10, noise_chance: noise, rgb_shift_chance: rgb }
    }

    fn gradient(w: usize, h: usize) -> PixelBuffer {
        let mut fb = PixelBuffer::new(w, h);
        for y in 0..h {
            for x in 0..w {
                fb.set_pixel(x, y, [x as u8, y as u8, 200, 255]);
            }
        }
        fb
    }

    fn sorted_colors(fb: &PixelBuffer) -> Vec<Rgba> {
        let mut v: Vec<Rgba> = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .map(|(x, y)| fb.pixel(x, y))
            .collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn channel_shift_rotates_and_returns_after_three() {
        let mut fb = PixelBuffer::new(1, 1);
        fb.set_pixel(0, 0, [10, 20, 30, 77]);
        let always = profile(0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(1);

        channel_shift(&mut fb, &always, &mut rng);
        assert_eq!(fb.pixel(0, 0), [20, 30, 10, 77]);
        channel_shift(&mut fb, &always, &mut rng);
        assert_eq!(fb.pixel(0, 0), [30, 10, 20, 77]);
        channel_shift(&mut fb, &always, &mut rng);
        assert_eq!(fb.pixel(0, 0), [10, 20, 30, 77]);
    }

    #[test]
    fn zero_chances_leave_buffer_alone() {
        let mut fb = gradient(40, 30);
        let before = fb.clone();
        let never = profile(0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(3);
        channel_shift(&mut fb, &never, &mut rng);
        assert_eq!(fb, before);

        // Noise is off, but the fixed-rate swap still runs; it only reorders colors.
        pixel_noise_and_swap(&mut fb, &never, &mut rng);
        assert_eq!(sorted_colors(&fb), sorted_colors(&before));
    }

    #[test]
    fn full_noise_without_swaps_grays_every_pixel_and_keeps_alpha() {
        let mut fb = gradient(16, 16);
        noise_and_swap(&mut fb, 1.0, 0.0, &mut StdRng::seed_from_u64(9));
        for y in 0..16 {
            for x in 0..16 {
                let [r, g, b, a] = fb.pixel(x, y);
                assert!(r == g && g == b, "pixel ({x},{y}) not gray");
                assert_eq!(a, 255);
            }
        }
    }

    #[test]
    fn full_noise_keeps_alpha_even_with_swaps() {
        let mut fb = gradient(16, 16);
        pixel_noise_and_swap(&mut fb, &profile(1.0, 0.0), &mut StdRng::seed_from_u64(9));
        let gray = (0..16)
            .flat_map(|y| (0..16).map(move |x| (x, y)))
            .filter(|&(x, y)| {
                let [r, g, b, a] = fb.pixel(x, y);
                assert_eq!(a, 255);
                r == g && g == b
            })
            .count();
        assert!(gray > 16 * 16 * 9 / 10, "only {gray} gray pixels");
    }

    #[test]
    fn swap_moves_rgb_triplets_and_wraps_around() {
        // Triplet of pixel x is [x, x, x]; alpha is x + 100 so it can be told apart.
        let n = 20;
        let mut wrapped = false;
        for seed in 0..200 {
            let mut fb = PixelBuffer::new(n, 1);
            for x in 0..n {
                fb.set_pixel(x, 0, [x as u8, x as u8, x as u8, x as u8 + 100]);
            }
            noise_and_swap(&mut fb, 0.0, 1.0, &mut StdRng::seed_from_u64(seed));

            let mut owners: Vec<u8> = (0..n)
                .map(|x| {
                    let [r, g, b, a] = fb.pixel(x, 0);
                    assert!(r == g && g == b, "seed {seed}: triplet split at {x}");
                    assert_eq!(a, x as u8 + 100, "seed {seed}: alpha moved at {x}");
                    r
                })
                .collect();
            // Pixel 0 is only reachable from index >= 10 through the wrap-around.
            wrapped |= owners[0] >= 10;
            owners.sort_unstable();
            assert_eq!(owners, (0..n as u8).collect::<Vec<_>>(), "seed {seed}: triplets lost");
        }
        assert!(wrapped, "no swap ever wrapped past the end of the buffer");
    }

    #[test]
    fn horizontal_slice_moves_a_strip_sideways() {
        let mut fb = gradient(100, 100);
        let before = fb.clone();
        horizontal_slice_shift(&mut fb, &mut StdRng::seed_from_u64(42));

        // Every changed pixel must carry a color from the same row.
        for y in 0..100 {
            for x in 0..100 {
                let now = fb.pixel(x, y);
                if now != before.pixel(x, y) {
                    assert_eq!(now[1], y as u8, "row content crossed rows");
                }
            }
        }
    }

    #[test]
    fn vertical_slice_moves_a_strip_up_or_down() {
        let mut fb = gradient(100, 100);
        let before = fb.clone();
        vertical_slice_shift(&mut fb, &mut StdRng::seed_from_u64(42));
        for y in 0..100 {
            for x in 0..100 {
                let now = fb.pixel(x, y);
                if now != before.pixel(x, y) {
                    assert_eq!(now[0], x as u8, "column content crossed columns");
                }
            }
        }
    }

    #[test]
    fn primitives_tolerate_empty_buffers() {
        let mut fb = PixelBuffer::new(0, 0);
        let p = profile(1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(0);
        for kind in EffectKind::ALL {
            kind.apply(&mut fb, &p, &mut rng);
        }
        assert!(fb.is_empty());
    }

    #[test]
    fn abbreviations_follow_canonical_order() {
        let tags: Vec<_> = EffectKind::ALL.iter().map(|k| k.abbreviation()).collect();
        assert_eq!(tags, ["x", "y", "Pixels", "RGB"]);
    }
}

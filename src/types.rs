// Core types: the live frame the user sees and the rectangular cut-outs the
// slice primitives tear out of it.
// Visual: PixelBuffer *is* the picture in the window; Region is an invisible clipboard.

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// One RGBA sample, 8 bits per channel.
pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0, 0, 0, 255];

/// Width × height RGBA grid, row-major, 4 bytes per pixel.
/// Visual: exactly what is on screen (and what gets exported).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>, // length = width * height * 4
}

/// A block of pixels copied out of a PixelBuffer.
/// Visual: unseen until written back somewhere with `write_region`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>, // length = width * height * 4
}

impl Region {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Sample at (x, y) inside the region.
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let i = (y * self.width + x) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}

impl PixelBuffer {
    /// Allocate an opaque-black buffer.
    /// Visual: a black window until a picture is drawn.
    pub fn new(width: usize, height: usize) -> Self {
        let mut buf = Self { width, height, data: vec![0; width * height * 4] };
        buf.clear(BLACK);
        buf
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (not bytes).
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Sample at (x, y); caller keeps (x, y) in bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let i = (y * self.width + x) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Overwrite (x, y) if it is inside the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, px: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y * self.width + x) * 4;
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Fill every pixel with one color.
    pub fn clear(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Copy out the rectangle (x, y, w, h), clipped to the buffer.
    /// A rectangle that misses the buffer (or has w/h = 0) yields an empty region.
    pub fn read_region(&self, x: usize, y: usize, w: usize, h: usize) -> Region {
        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);
        let (rw, rh) = (x1 - x0, y1 - y0);

        let mut data = Vec::with_capacity(rw * rh * 4);
        for row in y0..y1 {
            let start = (row * self.width + x0) * 4;
            data.extend_from_slice(&self.data[start..start + rw * 4]);
        }
        Region { width: rw, height: rh, data }
    }

    /// Paste `region` with its top-left corner at (dx, dy).
    /// Anything that lands outside the buffer is dropped; negative offsets are fine.
    pub fn write_region(&mut self, region: &Region, dx: isize, dy: isize) {
        if region.is_empty() || self.is_empty() {
            return;
        }
        let (bw, bh) = (self.width as isize, self.height as isize);
        let (rw, rh) = (region.width as isize, region.height as isize);

        // Horizontal overlap, computed once for every row.
        let src_x0 = (-dx).max(0);
        let dst_x0 = dx.max(0);
        let cols = (rw - src_x0).min(bw - dst_x0);
        if cols <= 0 {
            return;
        }
        let (src_x0, dst_x0, cols) = (src_x0 as usize, dst_x0 as usize, cols as usize);

        for ry in 0..rh {
            let ty = dy + ry;
            if ty < 0 || ty >= bh {
                continue;
            }
            let src = (ry as usize * region.width + src_x0) * 4;
            let dst = (ty as usize * self.width + dst_x0) * 4;
            self.data[dst..dst + cols * 4].copy_from_slice(&region.data[src..src + cols * 4]);
        }
    }

    /// Stretch `image` over the whole buffer (nearest neighbour, aspect ratio ignored).
    /// Visual: the clean picture, filling the window edge to edge.
    pub fn draw_base_image(&mut self, image: &RgbaImage) {
        if self.is_empty() || image.width() == 0 || image.height() == 0 {
            return;
        }
        let scaled = imageops::resize(image, self.width as u32, self.height as u32, FilterType::Nearest);
        self.data.copy_from_slice(scaled.as_raw());
    }

    /// Pack into 0x00RRGGBB words for minifb.
    /// Visual: nothing changes until the window presents `out`.
    pub fn pack_into(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(self.data.chunks_exact(4).map(|p| {
            let r = p[0] as u32;
            let g = p[1] as u32;
            let b = p[2] as u32;
            (r << 16) | (g << 8) | b
        }));
    }

    /// Copy into an `image` buffer for encoding.
    pub fn to_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width as u32, self.height as u32, self.data.clone())
    }
}

// ── Canvas ────────────────────────────────────────────────────────────────────
//
// Software framebuffer.  Drawing calls take logical screen coordinates
// (1100×650 by default); the buffer itself can be any size, and each device
// pixel shows whatever lies under its centre in logical space.  Scaling is
// nearest-neighbour; source pixels with alpha below one half are skipped.

use image::RgbaImage;

use crate::config::{HEIGHT, WIDTH};
use crate::geometry::Rect;

pub type Rgb = [u8; 3];

const ALPHA_CUTOFF: u8 = 128;

#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    logical_w: i32,
    logical_h: i32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// A `width`×`height` buffer mapped onto the full game screen.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_logical(width, height, WIDTH, HEIGHT)
    }

    pub fn with_logical(width: u32, height: u32, logical_w: i32, logical_h: i32) -> Self {
        Self {
            width,
            height,
            logical_w: logical_w.max(1),
            logical_h: logical_h.max(1),
            pixels: vec![[0, 0, 0]; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Device pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn fill_rect(&mut self, dest: Rect, color: Rgb) {
        self.paint(dest, |_, _| Some(color));
    }

    /// Full-width horizontal band starting at logical row `y`.
    pub fn hline(&mut self, y: i32, thickness: i32, color: Rgb) {
        self.fill_rect(Rect::new(0, y, self.logical_w, thickness), color);
    }

    /// Stretch `img` over `dest`.
    pub fn blit(&mut self, img: &RgbaImage, dest: Rect) {
        let (iw, ih) = (img.width() as i64, img.height() as i64);
        if iw == 0 || ih == 0 {
            return;
        }
        let (dw, dh) = (dest.w as i64, dest.h as i64);
        self.paint(dest, |lx, ly| {
            let sx = ((lx - dest.x) as i64 * iw / dw) as u32;
            let sy = ((ly - dest.y) as i64 * ih / dh) as u32;
            let [r, g, b, a] = img.get_pixel(sx, sy).0;
            (a >= ALPHA_CUTOFF).then_some([r, g, b])
        });
    }

    /// Visit every device pixel whose centre falls inside `dest`, handing the
    /// shader its logical coordinate.
    fn paint(&mut self, dest: Rect, shader: impl Fn(i32, i32) -> Option<Rgb>) {
        if dest.w <= 0 || dest.h <= 0 || self.width == 0 || self.height == 0 {
            return;
        }
        let cols = span(dest.left(), dest.right(), self.width, self.logical_w);
        let rows = span(dest.top(), dest.bottom(), self.height, self.logical_h);
        for py in rows {
            let ly = sample(py, self.height, self.logical_h);
            for px in cols.clone() {
                let lx = sample(px, self.width, self.logical_w);
                if let Some(color) = shader(lx, ly) {
                    self.pixels[(py * self.width + px) as usize] = color;
                }
            }
        }
    }
}

/// Logical coordinate under the centre of device pixel `p`.
fn sample(p: u32, device: u32, logical: i32) -> i32 {
    ((2 * p as i64 + 1) * logical as i64 / (2 * device as i64)) as i32
}

/// Device pixels whose sample lies in `[lo, hi)`.
fn span(lo: i32, hi: i32, device: u32, logical: i32) -> std::ops::Range<u32> {
    // First p with (2p+1)·L >= 2·lo·D, i.e. p >= (2·lo·D − L) / 2L.
    let (d, l) = (device as i64, logical as i64);
    let first = |v: i64| -> i64 {
        let num = 2 * v * d - l;
        let den = 2 * l;
        // Ceiling division that also behaves for negative numerators.
        (num + den - 1).div_euclid(den)
    };
    let start = first(lo as i64).clamp(0, d) as u32;
    let end = first(hi as i64).clamp(0, d) as u32;
    start..end.max(start)
}

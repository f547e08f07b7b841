// Off-screen RGBA surface the clouds rasterize into.
// Color and alpha live in separate row-major planes; writes overwrite, they
// never blend. Blending happens once per frame in `composite_onto`.

use crate::types::{pack_rgb, unpack_rgb, Color, FrameBuffer};
use image::Rgba;

pub struct Surface {
    width: usize,
    height: usize,
    rgb: Vec<[u8; 3]>,
    alpha: Vec<u8>,
}

impl Surface {
    /// A fully transparent surface.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rgb: vec![[0; 3]; width * height],
            alpha: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Back to transparent black, keeping the allocation.
    pub fn clear(&mut self) {
        self.rgb.fill([0; 3]);
        self.alpha.fill(0);
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Overwrite the pixel at (x,y) if it is inside bounds.
    /// Returns whether anything was written.
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Color) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        let [r, g, b, a] = color.0;
        self.rgb[idx] = [r, g, b];
        self.alpha[idx] = a;
        true
    }

    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Color> {
        let idx = self.index(x, y)?;
        let [r, g, b] = self.rgb[idx];
        Some(Rgba([r, g, b, self.alpha[idx]]))
    }

    /// Alpha-blend the surface over `dst` (straight alpha).
    /// Visual: transparent pixels show the background, opaque ones replace it.
    pub fn composite_onto(&self, dst: &mut FrameBuffer) {
        debug_assert_eq!((dst.width, dst.height), (self.width, self.height));
        for ((out, rgb), &a) in dst.pixels.iter_mut().zip(&self.rgb).zip(&self.alpha) {
            if a == 0 {
                continue;
            }
            if a == 255 {
                *out = pack_rgb(rgb[0], rgb[1], rgb[2]);
                continue;
            }
            let (br, bg, bb) = unpack_rgb(*out);
            *out = pack_rgb(mix(rgb[0], br, a), mix(rgb[1], bg, a), mix(rgb[2], bb, a));
        }
    }
}

/// src·a + dst·(1−a) on 0..255 channels, rounded.
#[inline]
fn mix(src: u8, dst: u8, a: u8) -> u8 {
    let a = a as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

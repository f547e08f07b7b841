// Point clouds: the source and its lensed images.
// All positions are in pixel space.

use crate::config::Config;
use crate::surface::Surface;
use crate::types::Color;

/// A fixed shape of colored points that can be slid around the screen.
///
/// `reference` is the shape at construction time; `current` is the shape
/// after the latest `recenter`. Both always have one entry per color, and no
/// point has zero alpha.
#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    reference: Vec<(f64, f64)>,
    colors: Vec<Color>,
    current: Vec<(f64, f64)>,
}

impl PointCloud {
    /// Build a cloud from parallel positions and colors.
    /// Points with alpha == 0 are dropped here, once, and never come back.
    /// If the slices differ in length the extra entries are ignored.
    pub fn new(positions: &[(f64, f64)], colors: &[Color]) -> Self {
        let (reference, colors): (Vec<_>, Vec<_>) = positions
            .iter()
            .zip(colors)
            .filter(|(_, c)| c.0[3] > 0)
            .map(|(&p, &c)| (p, c))
            .unzip();
        Self { current: reference.clone(), reference, colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Current (displayed) positions.
    pub fn positions(&self) -> &[(f64, f64)] {
        &self.current
    }

    pub fn reference_positions(&self) -> &[(f64, f64)] {
        &self.reference
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Move the cloud so its reference origin (the world origin in pixel
    /// space) lands on pixel (cx, cy). Not cumulative: the offset is always
    /// taken from the reference shape.
    pub fn recenter(&mut self, cfg: &Config, cx: f64, cy: f64) {
        let (ox, oy) = cfg.origin();
        let (dx, dy) = (cx - ox, cy - oy);
        for (cur, &(rx, ry)) in self.current.iter_mut().zip(&self.reference) {
            *cur = (rx + dx, ry + dy);
        }
    }

    /// Stamp every point onto the surface at floor(x), floor(y).
    /// Visual: the cloud appears; later points (and later clouds) win where
    /// they overlap. Off-surface points are skipped.
    pub fn draw(&self, surface: &mut Surface) {
        for (&(x, y), &color) in self.current.iter().zip(&self.colors) {
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            surface.set_pixel(x.floor() as i64, y.floor() as i64, color);
        }
    }
}

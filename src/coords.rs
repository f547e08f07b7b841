// Conversions between the three coordinate spaces:
// polar (r, theta), Cartesian "world" (1 unit = 1 Einstein radius),
// and pixel space (origin top-left, y grows downward).
//
// Scalar forms take one point; the `*_all` forms map whole slices, which is
// what the per-frame hot path uses.

use crate::config::Config;

pub fn polar_to_cartesian(r: f64, theta: f64) -> (f64, f64) {
    (r * theta.cos(), r * theta.sin())
}

/// At the origin `atan2(0, 0)` yields 0 (or -0), which is finite and good
/// enough for the lens math downstream.
pub fn cartesian_to_polar(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), y.atan2(x))
}

pub fn cartesian_to_pixel(cfg: &Config, x: f64, y: f64) -> (f64, f64) {
    let (ox, oy) = cfg.origin();
    (x * cfg.scale + ox, oy - y * cfg.scale)
}

pub fn pixel_to_cartesian(cfg: &Config, px: f64, py: f64) -> (f64, f64) {
    let (ox, oy) = cfg.origin();
    ((px - ox) / cfg.scale, -(py - oy) / cfg.scale)
}

pub fn polar_to_pixel(cfg: &Config, r: f64, theta: f64) -> (f64, f64) {
    let (x, y) = polar_to_cartesian(r, theta);
    cartesian_to_pixel(cfg, x, y)
}

pub fn pixel_to_polar(cfg: &Config, px: f64, py: f64) -> (f64, f64) {
    let (x, y) = pixel_to_cartesian(cfg, px, py);
    cartesian_to_polar(x, y)
}

pub fn cartesian_to_pixel_all(cfg: &Config, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    points.iter().map(|&(x, y)| cartesian_to_pixel(cfg, x, y)).collect()
}

pub fn pixel_to_cartesian_all(cfg: &Config, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    points.iter().map(|&(px, py)| pixel_to_cartesian(cfg, px, py)).collect()
}

pub fn polar_to_pixel_all(cfg: &Config, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    points.iter().map(|&(r, t)| polar_to_pixel(cfg, r, t)).collect()
}

pub fn pixel_to_polar_all(cfg: &Config, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    points.iter().map(|&(px, py)| pixel_to_polar(cfg, px, py)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn world_origin_maps_to_surface_center() {
        let cfg = Config::new(1500, 900);
        assert_eq!(cartesian_to_pixel(&cfg, 0.0, 0.0), (750.0, 450.0));
    }

    #[test]
    fn pixel_y_axis_is_flipped() {
        let cfg = Config::new(300, 300);
        let (_, py) = cartesian_to_pixel(&cfg, 0.0, 1.0);
        assert_eq!(py, 50.0);
    }

    #[test]
    fn pixel_cartesian_round_trip() {
        let cfg = Config::new(1500, 900);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let px = rng.random_range(-2000.0..4000.0);
            let py = rng.random_range(-2000.0..4000.0);
            let (x, y) = pixel_to_cartesian(&cfg, px, py);
            let (bx, by) = cartesian_to_pixel(&cfg, x, y);
            assert!(approx_eq(bx, px) && approx_eq(by, py), "({px}, {py}) -> ({bx}, {by})");
        }
    }

    #[test]
    fn polar_cartesian_round_trip() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..1000 {
            let r = rng.random_range(1e-3..50.0);
            let theta = rng.random_range(-3.1..3.1);
            let (x, y) = polar_to_cartesian(r, theta);
            let (r2, t2) = cartesian_to_polar(x, y);
            assert!(approx_eq(r, r2) && approx_eq(theta, t2), "({r}, {theta}) -> ({r2}, {t2})");
        }
    }

    #[test]
    fn angle_at_origin_is_finite() {
        let (r, theta) = cartesian_to_polar(0.0, 0.0);
        assert_eq!(r, 0.0);
        assert_eq!(theta, 0.0);
    }

    #[test]
    fn composed_helpers_agree_with_the_chain() {
        let cfg = Config::new(800, 600);
        let (px, py) = polar_to_pixel(&cfg, 1.5, 0.7);
        let (r, theta) = pixel_to_polar(&cfg, px, py);
        assert!(approx_eq(r, 1.5));
        assert!(approx_eq(theta, 0.7));
    }

    #[test]
    fn slice_forms_match_scalar_forms() {
        let cfg = Config::new(640, 480);
        let pts = vec![(0.0, 0.0), (1.0, -0.5), (-2.0, 3.25)];
        let px = cartesian_to_pixel_all(&cfg, &pts);
        assert_eq!(px.len(), pts.len());
        for (p, &(x, y)) in px.iter().zip(&pts) {
            assert_eq!(*p, cartesian_to_pixel(&cfg, x, y));
        }
        let back = pixel_to_cartesian_all(&cfg, &px);
        for (b, p) in back.iter().zip(&pts) {
            assert!(approx_eq(b.0, p.0) && approx_eq(b.1, p.1));
        }
        let polar = pixel_to_polar_all(&cfg, &px);
        let again = polar_to_pixel_all(&cfg, &polar);
        for (a, p) in again.iter().zip(&px) {
            assert!(approx_eq(a.0, p.0) && approx_eq(a.1, p.1));
        }
    }
}

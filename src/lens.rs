// Point-mass lens: every source point produces two images.
// Visual: image 1 sits outside the Einstein ring on the source's side,
// image 2 sits inside the ring on the opposite side of the lens.

use crate::config::Config;
use crate::coords::{pixel_to_polar, polar_to_pixel};
use crate::object::PointCloud;

/// Roots of the lens equation for a source at radius `r` (Einstein radius = 1).
///
/// `r1 >= 1` is the major image. `r2 <= 0` is the minor image; fed back
/// through `polar_to_cartesian` with the source angle, the negative radius
/// lands it on the far side of the lens.
#[inline]
pub fn lens_roots(r: f64) -> (f64, f64) {
    let half = r / 2.0;
    let root = (half * half + 1.0).sqrt();
    (half + root, half - root)
}

/// Lens every point of `source` at its current position.
/// Both images keep the source's point order and colors one-to-one.
pub fn lens(source: &PointCloud, cfg: &Config) -> (PointCloud, PointCloud) {
    let n = source.len();
    let mut major = Vec::with_capacity(n);
    let mut minor = Vec::with_capacity(n);
    for &(px, py) in source.positions() {
        let (r, theta) = pixel_to_polar(cfg, px, py);
        let (r1, r2) = lens_roots(r);
        major.push(polar_to_pixel(cfg, r1, theta));
        minor.push(polar_to_pixel(cfg, r2, theta));
    }
    (
        PointCloud::new(&major, source.colors()),
        PointCloud::new(&minor, source.colors()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{cartesian_to_pixel, pixel_to_cartesian};
    use crate::types::Color;
    use image::Rgba;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f64 = 1e-9;
    const RED: Color = Rgba([255, 0, 0, 255]);

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn roots_satisfy_sum_and_product_identities() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let r = rng.random_range(1e-6..100.0);
            let (r1, r2) = lens_roots(r);
            assert!(r1 > 0.0 && r1 >= 1.0, "r1 = {r1}");
            assert!(r2 < 0.0, "r2 = {r2}");
            assert!(approx_eq(r1 + r2, r), "sum {} vs {r}", r1 + r2);
            assert!(approx_eq(r1 * -r2, 1.0), "product {}", r1 * -r2);
        }
    }

    #[test]
    fn roots_at_zero_sit_on_the_ring() {
        assert_eq!(lens_roots(0.0), (1.0, -1.0));
    }

    #[test]
    fn lens_preserves_length_and_colors() {
        let mut rng = StdRng::seed_from_u64(5);
        let cfg = Config::new(600, 400);
        for n in [0usize, 1, 2, 17, 250] {
            let pos: Vec<(f64, f64)> = (0..n)
                .map(|_| (rng.random_range(-100.0..700.0), rng.random_range(-100.0..500.0)))
                .collect();
            let cols: Vec<Color> = (0..n)
                .map(|_| Rgba([rng.random(), rng.random(), rng.random(), rng.random_range(1..=255)]))
                .collect();
            let source = PointCloud::new(&pos, &cols);
            let (im1, im2) = lens(&source, &cfg);
            assert_eq!(im1.len(), n);
            assert_eq!(im2.len(), n);
            assert_eq!(im1.colors(), source.colors());
            assert_eq!(im2.colors(), source.colors());
        }
    }

    #[test]
    fn source_at_lens_center_images_onto_the_ring() {
        let cfg = Config::new(900, 900);
        let (ox, oy) = cfg.origin();
        let source = PointCloud::new(&[(ox, oy)], &[RED]);
        let (im1, im2) = lens(&source, &cfg);

        let (x1, y1) = pixel_to_cartesian(&cfg, im1.positions()[0].0, im1.positions()[0].1);
        let (x2, y2) = pixel_to_cartesian(&cfg, im2.positions()[0].0, im2.positions()[0].1);
        assert!(approx_eq(x1.hypot(y1), 1.0));
        assert!(approx_eq(x2.hypot(y2), 1.0));
        // Opposite sides of the lens.
        assert!(approx_eq(x1, -x2) && approx_eq(y1, -y2));
        assert_eq!(im1.colors(), &[RED]);
        assert_eq!(im2.colors(), &[RED]);
    }

    #[test]
    fn minor_image_lands_on_the_far_side() {
        let cfg = Config::new(900, 900);
        let (px, py) = cartesian_to_pixel(&cfg, 2.0, 0.0);
        let source = PointCloud::new(&[(px, py)], &[RED]);
        let (im1, im2) = lens(&source, &cfg);

        let (x1, y1) = pixel_to_cartesian(&cfg, im1.positions()[0].0, im1.positions()[0].1);
        let (x2, y2) = pixel_to_cartesian(&cfg, im2.positions()[0].0, im2.positions()[0].1);
        let sqrt2 = 2.0_f64.sqrt();
        assert!(approx_eq(x1, 1.0 + sqrt2), "x1 = {x1}");
        assert!(y1.abs() < EPSILON);
        // r2 = 1 - sqrt(2) < 0 at theta = 0 gives a negative x.
        assert!(approx_eq(x2, 1.0 - sqrt2), "x2 = {x2}");
        assert!(x2 < 0.0);
        assert!(y2.abs() < EPSILON);
    }

    #[test]
    fn lens_follows_recentered_positions() {
        let cfg = Config::new(900, 900);
        let (ox, oy) = cfg.origin();
        let mut source = PointCloud::new(&[(ox, oy)], &[RED]);
        let target = cartesian_to_pixel(&cfg, 2.0, 0.0);
        source.recenter(&cfg, target.0, target.1);
        let (im1, _) = lens(&source, &cfg);
        let (x1, _) = pixel_to_cartesian(&cfg, im1.positions()[0].0, im1.positions()[0].1);
        assert!(approx_eq(x1, 1.0 + 2.0_f64.sqrt()));
    }
}

// Turns an image file into the source point cloud.
// Visual expectation: the picture appears centered on the lens, `2*size`
// world units wide, one point per (resized) pixel.

use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;
use log::info;

use crate::config::Config;
use crate::coords::cartesian_to_pixel_all;
use crate::error::Error;
use crate::object::PointCloud;

/// Decode `path` and sample it into a point cloud (see `source_from_image`).
pub fn load_source(
    path: impl AsRef<Path>,
    size: f64,
    max_samples: u32,
    cfg: &Config,
) -> Result<PointCloud, Error> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::EmptyImage { path: path.to_path_buf() });
    }
    Ok(source_from_image(&img, size, max_samples, cfg))
}

/// Resize `img` so its larger side is at most `max_samples`, then lay its
/// pixels on a world grid x in [-size, size], y in [size*aspect, -size*aspect]
/// (top row first, x fastest) and convert to pixel space.
pub fn source_from_image(img: &DynamicImage, size: f64, max_samples: u32, cfg: &Config) -> PointCloud {
    let (w, h) = sample_dims(img.width(), img.height(), max_samples);
    let rgba = if (w, h) == (img.width(), img.height()) {
        img.to_rgba8()
    } else {
        img.resize_exact(w, h, FilterType::CatmullRom).to_rgba8()
    };
    info!("source sampled at {w}x{h}");

    let ratio = h as f64 / w as f64;
    let xs = linspace(-size, size, w as usize);
    let ys = linspace(size * ratio, -size * ratio, h as usize);

    // 1) World grid in the same row-major order as the pixel scan.
    let grid: Vec<(f64, f64)> = ys
        .iter()
        .flat_map(|&y| xs.iter().map(move |&x| (x, y)))
        .collect();

    // 2) Pixel space + colors straight from the image.
    let positions = cartesian_to_pixel_all(cfg, &grid);
    let colors: Vec<_> = rgba.pixels().copied().collect();

    let cloud = PointCloud::new(&positions, &colors);
    info!("source has {} visible points of {}", cloud.len(), colors.len());
    cloud
}

/// Target grid size: the larger side capped at `max_samples`, aspect kept,
/// never below 1x1.
pub fn sample_dims(width: u32, height: u32, max_samples: u32) -> (u32, u32) {
    let (w, h) = (width.max(1) as u64, height.max(1) as u64);
    let cap = max_samples.max(1) as u64;
    let (nw, nh) = if w > h {
        let nw = w.min(cap);
        (nw, nw * h / w)
    } else {
        let nh = h.min(cap);
        (nh * w / h, nh)
    };
    (nw.max(1) as u32, nh.max(1) as u32)
}

/// `n` evenly spaced values from `start` to `end` inclusive; one value is
/// just `start`.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

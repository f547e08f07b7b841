// View geometry + compiled-in program settings.
// Nothing here is read from disk or the command line.

/// Window size in pixels.
pub const WIDTH: usize = 1500;
pub const HEIGHT: usize = 900;

pub const TITLE: &str = "Single point lens";

/// Source image shown (and lensed) at startup.
pub const IMAGE_PATH: &str = "images/circle.png";

/// Half-width of the source in world units (1.0 = one Einstein radius).
pub const SOURCE_SIZE: f64 = 0.3;

/// Cap on the larger image dimension after resizing; bounds points per frame.
pub const MAX_SAMPLES: u32 = 700;

pub const TARGET_FPS: usize = 60;

/// Geometry shared by every coordinate conversion and draw call.
///
/// `scale` is pixels per world unit, so the Einstein ring is `scale` pixels
/// across its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub scale: f64,
}

impl Config {
    /// Build a config whose Einstein ring takes a third of the shorter side.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let scale = width.min(height) as f64 / 3.0;
        Self { width, height, scale }
    }

    /// Pixel position of the world origin (the lens).
    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    #[must_use]
    pub fn einstein_radius_px(&self) -> f64 {
        self.scale
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Everything `main` needs to start the program.
#[derive(Debug, Clone)]
pub struct Settings {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub image_path: String,
    pub source_size: f64,
    pub max_samples: u32,
    pub target_fps: usize,
}

impl Settings {
    #[must_use]
    pub fn config(&self) -> Config {
        Config::new(self.width, self.height)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            width: WIDTH,
            height: HEIGHT,
            image_path: IMAGE_PATH.to_string(),
            source_size: SOURCE_SIZE,
            max_samples: MAX_SAMPLES,
            target_fps: TARGET_FPS,
        }
    }
}

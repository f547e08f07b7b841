// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the lensed scene.
// 2) The reference markers: Einstein ring outline and a dot on the lens.

use crate::app::{FramePresenter, InputSource, InputState};
use crate::error::Error;
use crate::surface::Surface;
use crate::types::{Color, FrameBuffer};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window of the given size, capped at `fps` updates per second.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        log::info!("window opened ({width}x{height})");
        Ok(Self { window })
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we’ll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    pub fn mouse_pos(&self) -> Option<(f64, f64)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x as f64, y as f64))
    }

    /// Visual: while true, the source follows the cursor.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }
}

impl InputSource for Drawer {
    // minifb drains its event queue inside `update_with_buffer`, so polling
    // here only reads the latest state.
    fn poll(&mut self) -> InputState {
        InputState {
            quit: !self.is_open() || self.esc_pressed(),
            pointer_down: self.left_mouse_down(),
            pointer: self.mouse_pos(),
        }
    }
}

impl FramePresenter for Drawer {
    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}

impl Drop for Drawer {
    fn drop(&mut self) {
        log::info!("window closed");
    }
}

/* ---------- Software drawing: reference markers ---------- */

/// Outline of a circle `thickness` pixels wide, inner edge at `radius - thickness`.
/// Visual: a thin ring centered on (cx,cy).
pub fn draw_ring(surface: &mut Surface, cx: f64, cy: f64, radius: f64, thickness: f64, color: Color) {
    let inner = (radius - thickness).max(0.0);
    fill_where(surface, cx, cy, radius, color, |d2| d2 > inner * inner);
}

/// Filled circle.
/// Visual: a solid dot centered on (cx,cy).
pub fn draw_disc(surface: &mut Surface, cx: f64, cy: f64, radius: f64, color: Color) {
    fill_where(surface, cx, cy, radius, color, |_| true);
}

// Scan the bounding box and set every pixel whose center lies within
// `radius` of (cx,cy) and passes `keep`.
fn fill_where(
    surface: &mut Surface,
    cx: f64,
    cy: f64,
    radius: f64,
    color: Color,
    keep: impl Fn(f64) -> bool,
) {
    if radius <= 0.0 {
        return;
    }
    let r2 = radius * radius;
    let x0 = (cx - radius).floor().max(0.0) as i64;
    let y0 = (cy - radius).floor().max(0.0) as i64;
    let x1 = ((cx + radius).ceil() as i64).min(surface.width() as i64 - 1);
    let y1 = ((cy + radius).ceil() as i64).min(surface.height() as i64 - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            let d2 = dx * dx + dy * dy;
            if d2 <= r2 && keep(d2) {
                surface.set_pixel(x, y, color);
            }
        }
    }
}

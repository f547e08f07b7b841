// The render loop, written against two small seams so it runs headless:
// `InputSource` (what the user is doing) and `FramePresenter` (where frames go).
//
// One iteration = one frame:
//   poll -> maybe recenter -> clear -> lens -> draw source, im1, im2
//   -> markers -> composite over black -> present.

use std::time::{Duration, Instant};

use image::Rgba;
use log::{debug, trace};

use crate::config::Config;
use crate::draw::{draw_disc, draw_ring};
use crate::error::Error;
use crate::lens::lens;
use crate::object::PointCloud;
use crate::surface::Surface;
use crate::types::{Color, FrameBuffer};

const MARKER_COLOR: Color = Rgba([255, 255, 255, 255]);
const RING_THICKNESS: f64 = 2.0;
const DOT_RADIUS: f64 = 3.0;
const BACKGROUND: u32 = 0x00_00_00_00;

/// Snapshot of the user's input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Window closed or quit key pressed.
    pub quit: bool,
    /// Primary pointer button held.
    pub pointer_down: bool,
    /// Pointer position in pixel space, if the pointer is over the window.
    pub pointer: Option<(f64, f64)>,
}

pub trait InputSource {
    /// Drain pending events and report the current input state.
    fn poll(&mut self) -> InputState;
}

pub trait FramePresenter {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Owns the source cloud and the per-frame buffers.
pub struct Simulation {
    config: Config,
    source: PointCloud,
    surface: Surface,
    screen: FrameBuffer,
    state: LoopState,
}

impl Simulation {
    pub fn new(config: Config, source: PointCloud) -> Self {
        Self {
            surface: Surface::new(config.width, config.height),
            screen: FrameBuffer::new(config.width, config.height, BACKGROUND),
            config,
            source,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn source(&self) -> &PointCloud {
        &self.source
    }

    /// The RGBA surface as of the last `render`.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The composited frame as of the last `render`.
    pub fn frame(&self) -> &FrameBuffer {
        &self.screen
    }

    /// Apply one frame's input. Quit is terminal; a held button drags the
    /// source to the pointer.
    pub fn handle_input(&mut self, input: &InputState) {
        if input.quit {
            self.state = LoopState::Stopped;
            return;
        }
        if input.pointer_down {
            if let Some((x, y)) = input.pointer {
                trace!("recenter source at ({x:.1}, {y:.1})");
                self.source.recenter(&self.config, x, y);
            }
        }
    }

    /// Rebuild the frame from the current source position.
    pub fn render(&mut self) -> &FrameBuffer {
        self.surface.clear();

        let (im1, im2) = lens(&self.source, &self.config);
        // Source first so both images cover it where they overlap.
        self.source.draw(&mut self.surface);
        im1.draw(&mut self.surface);
        im2.draw(&mut self.surface);

        let (ox, oy) = self.config.origin();
        draw_ring(
            &mut self.surface,
            ox,
            oy,
            self.config.einstein_radius_px(),
            RING_THICKNESS,
            MARKER_COLOR,
        );
        draw_disc(&mut self.surface, ox, oy, DOT_RADIUS, MARKER_COLOR);

        self.screen.pixels.fill(BACKGROUND);
        self.surface.composite_onto(&mut self.screen);
        &self.screen
    }

    /// One loop iteration. Returns the state after it.
    pub fn step<H: InputSource + FramePresenter>(&mut self, host: &mut H) -> Result<LoopState, Error> {
        if self.state == LoopState::Stopped {
            return Ok(self.state);
        }
        let input = host.poll();
        self.handle_input(&input);
        if self.state == LoopState::Stopped {
            debug!("quit requested");
            return Ok(self.state);
        }
        self.render();
        host.present(&self.screen)?;
        Ok(self.state)
    }

    /// Step until quit, logging frame rate once per second.
    pub fn run<H: InputSource + FramePresenter>(&mut self, host: &mut H) -> Result<(), Error> {
        let mut last_fps_time = Instant::now();
        let mut frames_this_second: u32 = 0;

        while self.step(host)? == LoopState::Running {
            frames_this_second += 1;
            let now = Instant::now();
            let elapsed = now.duration_since(last_fps_time);
            if elapsed >= Duration::from_secs(1) {
                debug!("FPS: {:.1}", frames_this_second as f32 / elapsed.as_secs_f32());
                frames_this_second = 0;
                last_fps_time = now;
            }
        }
        Ok(())
    }
}

//! Interactive point-mass gravitational lensing.
//!
//! A source image is sampled into a point cloud, lensed into its two images
//! every frame, and rasterized into a window. The window and input live
//! behind the [`app::InputSource`] and [`app::FramePresenter`] seams so the
//! whole frame pipeline also runs headless.
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | View geometry and compiled-in settings |
//! | [`coords`] | Polar / world / pixel conversions |
//! | [`object`] | Point clouds: construction, recentering, rasterization |
//! | [`lens`] | The point-lens transform |
//! | [`scene`] | Image file to source cloud |
//! | [`surface`] | RGBA draw target and compositing |
//! | [`draw`] | minifb window and marker drawing |
//! | [`app`] | The render loop |

pub mod app;
pub mod config;
pub mod coords;
pub mod draw;
pub mod error;
pub mod lens;
pub mod object;
pub mod scene;
pub mod surface;
pub mod types;

// One error type for the whole crate.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// The source image could not be read or decoded.
    #[error("Image load error ({}): {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The source image decoded fine but has no pixels to sample.
    #[error("Image load error ({}): image has zero width or height", path.display())]
    EmptyImage { path: PathBuf },
}

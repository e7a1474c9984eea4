//! Seams between the measurement loop and a concrete camera/window backend.

use std::path::Path;
use std::time::Duration;

use crate::{InputEvent, Overlay};

/// Errors produced by capture backends and the measurement loop.
#[derive(thiserror::Error, Debug)]
pub enum CaptureError {
    #[error("failed to open camera {index}")]
    CameraOpen { index: i32 },

    #[error("frame missed")]
    FrameMissed,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("capture backend error: {0}")]
    Backend(String),

    #[cfg(feature = "opencv")]
    #[error(transparent)]
    OpenCv(#[from] opencv::Error),
}

/// A stream of frames with a fixed size.
pub trait FrameSource {
    type Frame;

    /// Frame `(width, height)` in pixels, queried once at startup.
    fn frame_size(&self) -> Result<(f64, f64), CaptureError>;

    /// Grab the next frame. The loop counts any error here as a missed frame
    /// and keeps running.
    fn read_frame(&mut self) -> Result<Self::Frame, CaptureError>;

    fn release(&mut self) -> Result<(), CaptureError> {
        Ok(())
    }
}

/// Window side of the loop: shows frames and reports user input.
pub trait Viewer {
    type Frame;

    /// Draw `overlay` onto `frame` and display it.
    fn show(&mut self, frame: &mut Self::Frame, overlay: &Overlay) -> Result<(), CaptureError>;

    /// Wait at most `timeout` for input and return the events in arrival order.
    fn poll_events(&mut self, timeout: Duration) -> Result<Vec<InputEvent>, CaptureError>;

    fn save_frame(&mut self, frame: &Self::Frame, path: &Path) -> Result<(), CaptureError>;

    fn close(&mut self) -> Result<(), CaptureError> {
        Ok(())
    }
}

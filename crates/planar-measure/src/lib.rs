//! Measure planar distances by clicking points on a live camera feed.
//!
//! This crate provides:
//! - re-exports of the geometric core (`planar-measure-core`)
//! - the single-threaded [`CaptureLoop`] that owns the measurement session,
//!   draws the clicked path and prints a report whenever the path changes
//! - (feature `opencv`) a camera + HighGUI window backend
//! - (feature `cli`) argument parsing for the `planar-measure` binary
//!
//! ## Quickstart
//!
//! ```no_run
//! # #[cfg(feature = "opencv")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use planar_measure::{backend, MeasureConfig};
//!
//! let config = MeasureConfig {
//!     camera_index: 0,
//!     depth: 1.04,
//!     ..MeasureConfig::default()
//! };
//! let summary = backend::run_camera(&config)?;
//! println!("printed {} reports", summary.reports);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "opencv"))]
//! # fn main() {}
//! ```
//!
//! ## API map
//! - `planar_measure::core`: projection, session and perimeter report.
//! - [`FrameSource`] / [`Viewer`]: seams implemented by capture backends.
//! - [`InputEvent`]: the closed set of user inputs the loop reacts to.
//! - [`Overlay`]: per-frame drawing instructions.

pub use planar_measure_core as core;

pub use planar_measure_core::{
    compute_report, PixelPoint, Projector, Report, Segment, Session, WorldPoint,
};

mod capture;
mod capture_loop;
mod config;
pub mod events;
pub mod overlay;

pub use capture::{CaptureError, FrameSource, Viewer};
pub use capture_loop::{CaptureLoop, RunSummary};
pub use config::{MeasureConfig, DEFAULT_FOCAL_LENGTH_PX};
pub use events::{InputEvent, MouseAction, MouseInput};
pub use overlay::Overlay;

#[cfg(feature = "opencv")]
pub mod backend;

#[cfg(feature = "cli")]
pub mod cli;

//! Core geometry for click-based planar measurement.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any camera, window system or image type: pixel coordinates go
//! in, metric segment lengths come out.
//!
//! ## Quickstart
//!
//! ```
//! use planar_measure_core::{compute_report, PixelPoint, Projector, Session};
//!
//! let projector = Projector::new(640.0, 480.0, 970.0, 1.04);
//! let mut session = Session::new();
//! session.append(PixelPoint::new(320, 240));
//! session.append(PixelPoint::new(420, 240));
//!
//! let report = compute_report(session.snapshot(), &projector);
//! assert_eq!(report.segments.len(), 1);
//! println!("{report}");
//! ```
//!
//! Pipeline:
//! 1. [`Projector`] maps each clicked pixel onto the plane at depth `Z`.
//! 2. [`Session`] keeps the clicks in selection order and flags mutations.
//! 3. [`compute_report`] measures consecutive segments, ranks them and sums
//!    the open perimeter.

mod logger;
mod perimeter;
mod projector;
mod session;

pub use perimeter::{compute_report, Report, Segment};
pub use projector::{project, PixelPoint, Projector, WorldPoint};
pub use session::Session;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;

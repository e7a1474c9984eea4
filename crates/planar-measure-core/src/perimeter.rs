//! Segment lengths, ascending ranking and open-perimeter total.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{PixelPoint, Projector, WorldPoint};

/// Straight segment between two consecutive session points `P(start)P(end)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    /// Metric length, in the unit of the projector depth.
    pub length: f64,
}

/// Measurement report for one session state.
///
/// `segments` lists the segments in selection order, `ascending` holds the
/// same segments stably sorted by length. `total` is the open polyline length:
/// the path is never closed implicitly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub num_points: usize,
    pub segments: Vec<Segment>,
    pub ascending: Vec<Segment>,
    pub total: f64,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn shortest(&self) -> Option<&Segment> {
        self.ascending.first()
    }

    pub fn longest(&self) -> Option<&Segment> {
        self.ascending.last()
    }
}

#[inline]
fn segment_length(a: WorldPoint, b: WorldPoint) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    (dx * dx + dy * dy).sqrt()
}

/// Project `session` and measure every consecutive pair.
///
/// Sessions with fewer than two points produce an empty report with a zero
/// total.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(session, projector), fields(points = session.len()))
)]
pub fn compute_report(session: &[PixelPoint], projector: &Projector) -> Report {
    let world: Vec<WorldPoint> = session.iter().map(|&p| projector.project(p)).collect();

    let segments: Vec<Segment> = world
        .windows(2)
        .enumerate()
        .map(|(i, w)| Segment {
            start: i,
            end: i + 1,
            length: segment_length(w[0], w[1]),
        })
        .collect();

    // Folded from +0.0: an empty `sum()` of floats yields -0.0.
    let total = segments.iter().fold(0.0, |acc, s| acc + s.length);

    // `sort_by` is stable: equal lengths keep their selection order.
    let mut ascending = segments.clone();
    ascending.sort_by(|a, b| a.length.total_cmp(&b.length));

    log::debug!(
        "measured {} segments over {} points, total {:.6}",
        segments.len(),
        session.len(),
        total
    );

    Report {
        num_points: session.len(),
        segments,
        ascending,
        total,
    }
}

fn write_segment(f: &mut fmt::Formatter<'_>, s: &Segment) -> fmt::Result {
    writeln!(
        f,
        "- DISTANCE OF LINE SEGMENT (P({})P({})): {}",
        s.start, s.end, s.length
    )
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "LINE SEGMENTS SELECTION ORDER")?;
        for s in &self.segments {
            write_segment(f, s)?;
        }

        writeln!(f)?;
        writeln!(f, "LINE SEGMENTS ASCENDING ORDER")?;
        for s in &self.ascending {
            write_segment(f, s)?;
        }

        writeln!(f)?;
        match self.num_points {
            0 => writeln!(f, "TOTAL PERIMETER: {}", self.total)?,
            n => writeln!(f, "TOTAL PERIMETER (P(0)P({})): {}", n - 1, self.total)?,
        }
        writeln!(f)
    }
}

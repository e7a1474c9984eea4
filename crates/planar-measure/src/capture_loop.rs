//! Single-threaded measurement loop.
//!
//! Each iteration grabs a frame, draws the current path on it, prints a new
//! report if the session changed and then handles pending input. A missed
//! frame is logged and skipped; only a failure to write the report aborts the
//! loop. A run of failed reads warns on the first miss and then only at
//! powers of two, so an unplugged camera does not flood stderr.

use std::io::Write;

use log::{debug, info, warn};
use planar_measure_core::{compute_report, Projector, Report, Session};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::capture::{CaptureError, FrameSource, Viewer};
use crate::events::{QUIT_KEY, SAVE_FRAME_KEY};
use crate::{InputEvent, MeasureConfig, Overlay};

/// Counters collected over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames: usize,
    pub missed_frames: usize,
    pub reports: usize,
}

pub struct CaptureLoop<S, V, W>
where
    S: FrameSource,
    V: Viewer<Frame = S::Frame>,
    W: Write,
{
    source: S,
    viewer: V,
    out: W,
    config: MeasureConfig,
    projector: Projector,
    session: Session,
    frame: Option<S::Frame>,
    last_report: Option<Report>,
    stop: bool,
    summary: RunSummary,
    missed_streak: usize,
}

impl<S, V, W> CaptureLoop<S, V, W>
where
    S: FrameSource,
    V: Viewer<Frame = S::Frame>,
    W: Write,
{
    /// Read the frame size from `source` and prepare an empty session.
    pub fn new(source: S, viewer: V, out: W, config: MeasureConfig) -> Result<Self, CaptureError> {
        let (width, height) = source.frame_size()?;
        info!("image measurements: height: {height}, width: {width}");
        let projector = config.projector(width, height);
        Ok(Self {
            source,
            viewer,
            out,
            config,
            projector,
            session: Session::new(),
            frame: None,
            last_report: None,
            stop: false,
            summary: RunSummary::default(),
            missed_streak: 0,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn is_stopped(&self) -> bool {
        self.stop
    }

    /// Consecutive failed reads up to the latest iteration.
    pub fn missed_streak(&self) -> usize {
        self.missed_streak
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run iterations until a quit event arrives, then release the backend.
    #[cfg_attr(feature = "tracing", instrument(level = "info", skip(self)))]
    pub fn run(&mut self) -> Result<RunSummary, CaptureError> {
        info!(
            "click to add points, hold ctrl and move to reset, \
             '{SAVE_FRAME_KEY}' saves the frame, '{QUIT_KEY}' quits"
        );

        let mut result = Ok(());
        while !self.stop {
            if let Err(err) = self.step() {
                result = Err(err);
                break;
            }
        }

        let released = self.source.release();
        let closed = self.viewer.close();
        result?;
        released?;
        closed?;

        info!(
            "stopped after {} frames ({} missed), {} reports",
            self.summary.frames, self.summary.missed_frames, self.summary.reports
        );
        Ok(self.summary)
    }

    /// One loop iteration.
    pub fn step(&mut self) -> Result<(), CaptureError> {
        let fresh = match self.source.read_frame() {
            Ok(frame) => {
                if self.missed_streak > 1 {
                    info!("frames resumed after {} misses", self.missed_streak);
                }
                self.missed_streak = 0;
                self.frame = Some(frame);
                self.summary.frames += 1;
                true
            }
            Err(err) => {
                self.record_miss(&err);
                false
            }
        };

        if fresh {
            if let Some(frame) = self.frame.as_mut() {
                let overlay = Overlay::from_points(self.session.snapshot());
                if let Err(err) = self.viewer.show(frame, &overlay) {
                    warn!("failed to display frame: {err}");
                }
            }
        }

        if self.session.take_changed() {
            self.emit_report()?;
        }

        let events = match self.viewer.poll_events(self.config.poll_timeout) {
            Ok(events) => events,
            Err(err) => {
                warn!("failed to poll input: {err}");
                Vec::new()
            }
        };
        for event in events {
            self.handle_event(event);
        }
        Ok(())
    }

    /// Apply one input event to the loop state.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press(p) => {
                info!("pixel clicked (x,y): ({}, {})", p.x, p.y);
                self.session.append(p);
            }
            InputEvent::Reset => {
                if !self.session.is_empty() {
                    info!("session cleared");
                }
                self.session.clear();
            }
            InputEvent::SaveFrame => self.save_frame(),
            InputEvent::Quit => self.stop = true,
            InputEvent::Other => {}
        }
    }

    fn record_miss(&mut self, err: &CaptureError) {
        self.missed_streak += 1;
        self.summary.missed_frames += 1;
        let streak = self.missed_streak;
        if streak.is_power_of_two() {
            match streak {
                1 => warn!("{err}"),
                n => warn!("{err} ({n} in a row)"),
            }
        } else {
            debug!("{err} ({streak} in a row)");
        }
    }

    fn save_frame(&mut self) {
        let path = &self.config.snapshot_path;
        let Some(frame) = self.frame.as_ref() else {
            warn!("no frame captured yet, nothing saved");
            return;
        };
        match self.viewer.save_frame(frame, path) {
            Ok(()) => info!("saved frame to {}", path.display()),
            Err(err) => warn!("failed to save frame to {}: {err}", path.display()),
        }
    }

    fn emit_report(&mut self) -> Result<(), CaptureError> {
        let report = compute_report(self.session.snapshot(), &self.projector);
        write!(self.out, "{report}")?;
        self.out.flush()?;
        self.summary.reports += 1;
        self.last_report = Some(report);
        Ok(())
    }
}

//! OpenCV camera and HighGUI window backend.

use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use log::{debug, info};
use opencv::core::{Mat, Point, Scalar, Vector};
use opencv::prelude::*;
use opencv::{highgui, imgcodecs, imgproc, videoio};
use planar_measure_core::PixelPoint;

use crate::capture::{CaptureError, FrameSource, Viewer};
use crate::events::{MouseAction, MouseInput};
use crate::overlay::Color;
use crate::{CaptureLoop, InputEvent, MeasureConfig, Overlay, RunSummary};

/// Live camera opened through `videoio`.
pub struct OpenCvCamera {
    capture: videoio::VideoCapture,
    index: i32,
}

impl OpenCvCamera {
    pub fn open(index: i32) -> Result<Self, CaptureError> {
        let capture = videoio::VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(CaptureError::CameraOpen { index });
        }
        info!("opened camera {index}");
        Ok(Self { capture, index })
    }
}

impl FrameSource for OpenCvCamera {
    type Frame = Mat;

    fn frame_size(&self) -> Result<(f64, f64), CaptureError> {
        let width = self.capture.get(videoio::CAP_PROP_FRAME_WIDTH)?;
        let height = self.capture.get(videoio::CAP_PROP_FRAME_HEIGHT)?;
        Ok((width, height))
    }

    fn read_frame(&mut self) -> Result<Mat, CaptureError> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Err(CaptureError::FrameMissed);
        }
        Ok(frame)
    }

    fn release(&mut self) -> Result<(), CaptureError> {
        self.capture.release()?;
        debug!("released camera {}", self.index);
        Ok(())
    }
}

/// HighGUI window; mouse callbacks are forwarded over a channel and drained
/// by [`Viewer::poll_events`] on the loop thread.
pub struct HighGuiViewer {
    window: String,
    events: mpsc::Receiver<InputEvent>,
}

impl HighGuiViewer {
    pub fn open(title: &str) -> Result<Self, CaptureError> {
        highgui::named_window(title, highgui::WINDOW_NORMAL)?;
        let (tx, rx) = mpsc::channel();
        highgui::set_mouse_callback(
            title,
            Some(Box::new(move |event: i32, x: i32, y: i32, flags: i32| {
                let input = decode_mouse(event, x, y, flags);
                let _ = tx.send(InputEvent::from_mouse(input));
            })),
        )?;
        Ok(Self {
            window: title.to_string(),
            events: rx,
        })
    }
}

fn decode_mouse(event: i32, x: i32, y: i32, flags: i32) -> MouseInput {
    let action = match event {
        highgui::EVENT_LBUTTONDOWN => MouseAction::LeftDown,
        highgui::EVENT_LBUTTONDBLCLK => MouseAction::LeftDoubleClick,
        highgui::EVENT_RBUTTONDOWN => MouseAction::RightDown,
        highgui::EVENT_MBUTTONDOWN => MouseAction::MiddleDown,
        highgui::EVENT_MOUSEWHEEL => MouseAction::Wheel {
            delta: highgui::get_mouse_wheel_delta(flags).unwrap_or(flags),
        },
        highgui::EVENT_MOUSEMOVE => MouseAction::Move,
        _ => MouseAction::Other,
    };
    MouseInput {
        action,
        position: PixelPoint::new(x, y),
        ctrl_only: flags == highgui::EVENT_FLAG_CTRLKEY,
    }
}

#[inline]
fn cv_point(p: PixelPoint) -> Point {
    Point::new(p.x, p.y)
}

#[inline]
fn cv_color(c: Color) -> Scalar {
    Scalar::new(c.b as f64, c.g as f64, c.r as f64, 0.0)
}

impl Viewer for HighGuiViewer {
    type Frame = Mat;

    fn show(&mut self, frame: &mut Mat, overlay: &Overlay) -> Result<(), CaptureError> {
        for line in &overlay.lines {
            imgproc::line(
                &mut *frame,
                cv_point(line.from),
                cv_point(line.to),
                cv_color(line.color),
                line.thickness,
                imgproc::LINE_8,
                0,
            )?;
        }
        for circle in &overlay.circles {
            imgproc::circle(
                &mut *frame,
                cv_point(circle.center),
                circle.radius,
                cv_color(circle.color),
                circle.thickness,
                imgproc::LINE_8,
                0,
            )?;
        }
        highgui::imshow(&self.window, &*frame)?;
        Ok(())
    }

    fn poll_events(&mut self, timeout: Duration) -> Result<Vec<InputEvent>, CaptureError> {
        let delay = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX).max(1);
        // Mouse callbacks run inside `wait_key`.
        let key = highgui::wait_key(delay)?;
        let mut events: Vec<InputEvent> = self.events.try_iter().collect();
        events.extend(InputEvent::from_key(key));
        Ok(events)
    }

    fn save_frame(&mut self, frame: &Mat, path: &Path) -> Result<(), CaptureError> {
        let name = path.to_str().ok_or_else(|| {
            CaptureError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("non UTF-8 snapshot path {}", path.display()),
            ))
        })?;
        if !imgcodecs::imwrite(name, frame, &Vector::new())? {
            return Err(CaptureError::Backend(format!("imwrite refused {name}")));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), CaptureError> {
        highgui::destroy_all_windows()?;
        Ok(())
    }
}

/// Open the configured camera and window and measure until the user quits.
///
/// Reports are written to stdout.
pub fn run_camera(config: &MeasureConfig) -> Result<RunSummary, CaptureError> {
    let camera = OpenCvCamera::open(config.camera_index)?;
    let viewer = HighGuiViewer::open(&config.window_title)?;
    let stdout = io::stdout().lock();
    let mut measure = CaptureLoop::new(camera, viewer, stdout, config.clone())?;
    measure.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_highgui_mouse_events() {
        let press = decode_mouse(highgui::EVENT_LBUTTONDOWN, 4, 5, 0);
        assert_eq!(press.action, MouseAction::LeftDown);
        assert_eq!(press.position, PixelPoint::new(4, 5));

        let reset = decode_mouse(highgui::EVENT_MOUSEMOVE, 0, 0, highgui::EVENT_FLAG_CTRLKEY);
        assert!(reset.ctrl_only);
        assert_eq!(InputEvent::from_mouse(reset), InputEvent::Reset);

        let drag = decode_mouse(
            highgui::EVENT_MOUSEMOVE,
            0,
            0,
            highgui::EVENT_FLAG_CTRLKEY | highgui::EVENT_FLAG_LBUTTON,
        );
        assert!(!drag.ctrl_only);
    }

    #[test]
    fn colors_are_converted_to_bgr() {
        let s = cv_color(Color::GREEN);
        assert_eq!((s.0[0], s.0[1], s.0[2]), (0.0, 255.0, 0.0));
        let red = cv_color(Color { r: 255, g: 0, b: 0 });
        assert_eq!(red.0[2], 255.0);
    }
}

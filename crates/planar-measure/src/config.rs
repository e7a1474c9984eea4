use std::path::PathBuf;
use std::time::Duration;

use planar_measure_core::Projector;
use serde::{Deserialize, Serialize};

/// Focal length of the reference webcam, estimated on site, in pixels.
pub const DEFAULT_FOCAL_LENGTH_PX: f64 = 970.0;

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("current_frame.png")
}

fn default_window_title() -> String {
    "Current frame".to_string()
}

/// Runtime settings for one measurement run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasureConfig {
    /// Camera device selector.
    pub camera_index: i32,
    /// Distance from the camera to the measured plane.
    pub depth: f64,
    /// Focal length in pixels. Must be positive.
    pub focal_length: f64,
    /// Where the still-frame snapshot is written.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Upper bound on how long one event poll may block.
    pub poll_timeout: Duration,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            camera_index: 1,
            depth: 1.0,
            focal_length: DEFAULT_FOCAL_LENGTH_PX,
            snapshot_path: default_snapshot_path(),
            window_title: default_window_title(),
            poll_timeout: Duration::from_millis(1),
        }
    }
}

impl MeasureConfig {
    /// Build the projector for a stream of the given frame size.
    pub fn projector(&self, image_width: f64, image_height: f64) -> Projector {
        Projector::new(image_width, image_height, self.focal_length, self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_reference_setup() {
        let cfg = MeasureConfig::default();
        assert_eq!(cfg.camera_index, 1);
        assert_eq!(cfg.depth, 1.0);
        assert_eq!(cfg.focal_length, 970.0);
        assert_eq!(cfg.snapshot_path, PathBuf::from("current_frame.png"));
        assert_eq!(cfg.poll_timeout, Duration::from_millis(1));
    }

    #[test]
    fn projector_uses_frame_size_and_constants() {
        let cfg = MeasureConfig {
            depth: 1.04,
            ..MeasureConfig::default()
        };
        let p = cfg.projector(640.0, 480.0);
        assert_eq!(p, Projector::new(640.0, 480.0, 970.0, 1.04));
    }
}

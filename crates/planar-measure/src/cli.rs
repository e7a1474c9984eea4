//! Command-line interface of the `planar-measure` binary.
//!
//! Only the camera index and the plane depth are user-supplied; the focal
//! length and snapshot path come from [`MeasureConfig::default`]. Log
//! verbosity is read from `RUST_LOG` (a single level name, default `info`).

use clap::Parser;
use log::LevelFilter;

use crate::capture::CaptureError;
use crate::config::MeasureConfig;

/// Environment variable holding the log level of the stderr logger.
pub const LOG_LEVEL_ENV: &str = "RUST_LOG";

/// Errors surfaced by the binary.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("camera support is not compiled in; rebuild with `--features opencv`")]
    BackendUnavailable,

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Obtain real-world distances between points clicked on a live camera view.
#[derive(Parser, Debug, Clone)]
#[command(name = "planar-measure", version, about, long_about = None)]
pub struct Cli {
    /// Index value for the camera.
    #[arg(long = "cam_index", default_value_t = 1)]
    pub cam_index: i32,

    /// Measured distance to the plane along the z-axis, in meters.
    #[arg(long = "Z", default_value_t = 1.0)]
    pub z: f64,
}

impl Cli {
    pub fn to_config(&self) -> MeasureConfig {
        MeasureConfig {
            camera_index: self.cam_index,
            depth: self.z,
            ..MeasureConfig::default()
        }
    }
}

/// Parse a log level name; unset or unrecognised values fall back to `info`.
pub fn log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_invocation() {
        let cli = Cli::try_parse_from(["planar-measure"]).expect("parse");
        assert_eq!(cli.cam_index, 1);
        assert_eq!(cli.z, 1.0);
        assert_eq!(cli.to_config(), MeasureConfig::default());
    }

    #[test]
    fn parses_camera_and_depth() {
        let cli = Cli::try_parse_from(["planar-measure", "--cam_index", "0", "--Z", "1.04"])
            .expect("parse");
        let cfg = cli.to_config();
        assert_eq!(cfg.camera_index, 0);
        assert_eq!(cfg.depth, 1.04);
        assert_eq!(cfg.focal_length, 970.0);
    }

    #[test]
    fn only_reference_flags_are_accepted() {
        for extra in ["--focal-length", "--snapshot", "--log-level"] {
            assert!(
                Cli::try_parse_from(["planar-measure", extra, "1"]).is_err(),
                "accepted {extra}"
            );
        }
    }

    #[test]
    fn log_level_falls_back_to_info() {
        assert_eq!(log_level(None), LevelFilter::Info);
        assert_eq!(log_level(Some("verbose")), LevelFilter::Info);
        assert_eq!(log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(log_level(Some(" WARN ")), LevelFilter::Warn);
    }
}

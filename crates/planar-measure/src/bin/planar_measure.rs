use std::process::ExitCode;

use clap::Parser;
use log::info;
use planar_measure::cli::{Cli, CliError};
use planar_measure::MeasureConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    #[cfg(not(feature = "tracing"))]
    {
        let level = std::env::var(planar_measure::cli::LOG_LEVEL_ENV).ok();
        planar_measure::core::init_with_level(planar_measure::cli::log_level(level.as_deref()))?;
    }

    #[cfg(feature = "tracing")]
    planar_measure::core::init_tracing(false);

    let config = cli.to_config();
    info!(
        "camera {}, depth {} m, focal length {} px",
        config.camera_index, config.depth, config.focal_length
    );
    measure(&config)
}

#[cfg(feature = "opencv")]
fn measure(config: &MeasureConfig) -> Result<(), CliError> {
    planar_measure::backend::run_camera(config)?;
    Ok(())
}

#[cfg(not(feature = "opencv"))]
fn measure(_config: &MeasureConfig) -> Result<(), CliError> {
    Err(CliError::BackendUnavailable)
}

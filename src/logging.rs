/// Logging setup using tracing
///
/// Logs go to a daily rolling file so the GUI never writes to a terminal:
/// - Linux: ~/.local/share/plantcare/logs/plantcare.log.YYYY-MM-DD
///
/// The level is controlled by the `PLANTCARE_LOG` environment variable,
/// e.g. `PLANTCARE_LOG=debug` or `PLANTCARE_LOG=plantcare=trace`.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

const LOG_ENV: &str = "PLANTCARE_LOG";
const DEFAULT_FILTER: &str = "plantcare=info,warn";

/// Initialize the global tracing subscriber
pub fn init() -> Result<()> {
    let log_dir = log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "plantcare.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!("PlantCare starting, logs in {}", log_dir.display());

    Ok(())
}

/// Directory holding the rolling log files
pub fn log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .ok_or(Error::NoDirectory { kind: "data" })?;
    Ok(base.join("plantcare").join("logs"))
}

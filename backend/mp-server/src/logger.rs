use crate::error::{Result as ServerErrorResult, ServerError};

use mp_config::LoggingConfig;

use std::fs::OpenOptions;
use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// HTTP client and server internals that are chatty at debug level
const QUIET_TARGETS: [&str; 4] = ["hyper", "hyper_util", "reqwest", "tower_http"];

/// Install the global fern logger.
///
/// Records go to `log_file` when given (with source locations), otherwise to
/// stdout, colored when the config asks for it.
pub fn initialize(config: &LoggingConfig, log_file: Option<&Path>) -> ServerErrorResult<()> {
    let level = config.level.0;

    let output = match log_file {
        Some(path) => file_output(path)?,
        None if config.colored => colored_stdout(),
        None => plain_stdout(),
    };

    QUIET_TARGETS
        .iter()
        .fold(Dispatch::new().level(level), |dispatch, target| {
            dispatch.level_for(*target, level.min(LevelFilter::Info))
        })
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logging at {:?} to {}", level, path.display()),
        None => info!("Logging at {:?} to stdout", level),
    }

    Ok(())
}

fn file_output(path: &Path) -> ServerErrorResult<Dispatch> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {} ({}:{})",
                humantime::format_rfc3339_millis(SystemTime::now()),
                record.level(),
                record.target(),
                message,
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0),
            ))
        })
        .chain(file))
}

fn colored_stdout() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::Cyan)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colors.color(record.level()),
                message,
            ))
        })
        .chain(std::io::stdout())
}

// docker logs and journald add their own coloring
fn plain_stdout() -> Dispatch {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message,
            ))
        })
        .chain(std::io::stdout())
}

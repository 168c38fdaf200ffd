use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::{Arguments, Display};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record, info};

/// Target of the per-request access lines written by [`crate::request_log`]
pub const REQUEST_TARGET: &str = "shop_server::request";

/// Install the global logger.
///
/// Output goes to `log_file` when set (plain, with source location), otherwise
/// to stdout, colored or plain. `sqlx` is capped at warn. Access lines from
/// [`REQUEST_TARGET`] carry no origin suffix since the message already names
/// the route.
pub fn initialize(
    log_level: shop_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = *log_level;

    let base_dispatch = Dispatch::new()
        .level(level_filter)
        .level_for("sqlx", level_filter.min(LevelFilter::Warn));

    let dispatch = match log_file {
        Some(ref log_path) => {
            let file = fern::log_file(log_path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;

            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{}",
                        render(now(), record.level(), message, origin(record, true).as_deref())
                    ))
                })
                .chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "{}",
                        render(
                            now(),
                            colors.color(record.level()),
                            message,
                            origin(record, false).as_deref()
                        )
                    ))
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{}",
                    render(now(), record.level(), message, origin(record, false).as_deref())
                ))
            })
            .chain(std::io::stdout()),
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    // sqlx emits tracing events
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn now() -> humantime::Rfc3339Timestamp {
    humantime::format_rfc3339_seconds(SystemTime::now())
}

/// `[timestamp - LEVEL] message [origin]`
pub(crate) fn render(
    timestamp: impl Display,
    level: impl Display,
    message: &Arguments<'_>,
    origin: Option<&str>,
) -> String {
    match origin {
        Some(origin) => format!("[{timestamp} - {level}] {message} [{origin}]"),
        None => format!("[{timestamp} - {level}] {message}"),
    }
}

/// Source file and line for file output, module target for stdout.
pub(crate) fn origin(record: &Record<'_>, file_location: bool) -> Option<String> {
    if record.target() == REQUEST_TARGET {
        return None;
    }

    if file_location {
        Some(format!(
            "{}:{}",
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0)
        ))
    } else {
        Some(record.target().to_string())
    }
}

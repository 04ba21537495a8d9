//! Logger initialization.
//!
//! Logs go to stderr so they never interleave with the report on stdout.

use std::io::Write;

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats.
///
/// The logger reads its filter from the `RUST_LOG` environment variable,
/// falling back to `warn`. An explicit `level` overrides it for this crate and
/// as the global default; with `None`, `RUST_LOG` applies as given.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every request the lookups make
/// public_ip_report --log-level debug
///
/// # Machine-readable log lines on stderr, report still on stdout
/// public_ip_report --log-level info --log-format json 2> lookup.log
/// ```
pub fn init_logger_with(
    level: Option<LevelFilter>,
    format: LogFormat,
) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    );
    apply_level(&mut builder, level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    level_emoji(level),
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init so a second initialization (tests) reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

// Dependencies stay at info or quieter unless RUST_LOG asks for more
fn apply_level(builder: &mut env_logger::Builder, level: Option<LevelFilter>) {
    if let Some(level) = level {
        builder.filter_level(level);
        builder.filter_module("reqwest", LevelFilter::Info.min(level));
        builder.filter_module("hyper", LevelFilter::Info.min(level));
        builder.filter_module("hyper_util", LevelFilter::Info.min(level));
        builder.filter_module("rustls", LevelFilter::Warn.min(level));
        builder.filter_module("public_ip_report", level);
    }
}

fn level_emoji(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "❌",
        log::Level::Warn => "⚠️",
        log::Level::Info => "✔️",
        log::Level::Debug => "🔍",
        log::Level::Trace => "🔬",
    }
}

/// Renders one JSON log line (without trailing newline).
fn json_line(ts_millis: i64, level: log::Level, target: &str, msg: &str) -> String {
    format!(
        "{{\"ts\":{},\"level\":\"{}\",\"target\":{},\"msg\":{}}}",
        ts_millis,
        level,
        serde_json::to_string(target).unwrap_or_else(|_| "\"\"".into()),
        serde_json::to_string(msg).unwrap_or_else(|_| "\"\"".into())
    )
}

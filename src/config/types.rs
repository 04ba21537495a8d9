//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, GEO_SERVICE_URL, SECONDARY_SERVICE_URL};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Parsed from the command line by the binary, or constructed directly by
/// library users. Service URLs are deliberately not part of it; see [`Endpoints`].
///
/// # Examples
///
/// ```no_run
/// use public_ip_report::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "public_ip_report",
    version,
    about = "Show your public IP address with ISP and country information"
)]
pub struct Config {
    /// Log level [default: warn, or `RUST_LOG` when set]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request deadline in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// URLs of the two lookup services.
///
/// The binary always uses [`Endpoints::default`]; tests point these at a local
/// mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Geolocation service base URL (self-lookup when requested as is)
    pub geo_url: String,
    /// Secondary IP service URL
    pub secondary_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geo_url: GEO_SERVICE_URL.to_string(),
            secondary_url: SECONDARY_SERVICE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.log_level.is_none());
        assert!(matches!(config.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_config_parse_defaults_match_default_impl() {
        let parsed = Config::try_parse_from(["public_ip_report"]).expect("no flags should parse");
        let default = Config::default();
        assert_eq!(parsed.timeout_seconds, default.timeout_seconds);
        assert!(parsed.log_level.is_none());
        assert!(default.log_level.is_none());
    }

    #[test]
    fn test_config_parse_flags() {
        let config = Config::try_parse_from([
            "public_ip_report",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--timeout-seconds",
            "3",
        ])
        .expect("flags should parse");
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(
            config.log_level.map(log::LevelFilter::from),
            Some(log::LevelFilter::Debug)
        );
        assert!(matches!(config.log_format, LogFormat::Json));
    }

    #[test]
    fn test_config_rejects_unknown_log_level() {
        let result = Config::try_parse_from(["public_ip_report", "--log-level", "loud"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_zero_timeout() {
        let result = Config::try_parse_from(["public_ip_report", "--timeout-seconds", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoints_default_uses_fixed_services() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.geo_url, "http://ip-api.com/json/");
        assert_eq!(endpoints.secondary_url, "https://api.ipmyp.ir/");
    }
}

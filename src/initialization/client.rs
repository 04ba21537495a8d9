//! HTTP client initialization.
//!
//! This module provides the function to initialize the HTTP client shared by
//! all lookups of a run.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_USER_AGENT, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the HTTP client used for every lookup.
///
/// Creates a `reqwest::Client` configured with:
/// - Whole-request timeout from `config.timeout_seconds`
/// - TCP connect timeout of `TCP_CONNECT_TIMEOUT_SECS` (never longer than the request timeout)
/// - The crate's User-Agent
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    let connect_timeout = Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS).min(timeout);
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}

//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors produced by a single lookup request.
///
/// Each call site decides which of these are fatal: the primary lookup aborts
/// the run on any of them, the secondary and enrichment lookups turn them into
/// notices.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request could not be sent (DNS, connect, TLS or timeout failure).
    #[error("{0}")]
    Network(#[source] ReqwestError),

    /// The response arrived but its body could not be read to the end.
    #[error("failed to read response body: {0}")]
    Body(#[source] ReqwestError),

    /// The body is not valid JSON for the expected shape.
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered, but with a status other than `success`.
    #[error("ip-api lookup failed (status {status:?}{})", describe_message(.message))]
    Status {
        /// Status field as reported by the service
        status: String,
        /// Optional failure reason reported alongside the status
        message: Option<String>,
    },

    /// A service URL could not be parsed or extended with an IP segment.
    #[error("invalid service URL: {0}")]
    InvalidUrl(String),
}

fn describe_message(message: &Option<String>) -> String {
    match message.as_deref() {
        Some(m) if !m.is_empty() => format!(", {}", m),
        _ => String::new(),
    }
}

/// Categories of lookup failures, used to label log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(missing_docs)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Response content errors
    ResponseDecodeError, // Body is not the expected JSON
    ServiceStatusError,  // Decoded, but status is not "success"
    // Local errors
    InvalidServiceUrl,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable label for log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::ResponseDecodeError => "Response JSON decode error",
            ErrorType::ServiceStatusError => "Service reported failure status",
            ErrorType::InvalidServiceUrl => "Invalid service URL",
        }
    }
}

//! Error categorization.
//!
//! This module maps lookup failures onto [`ErrorType`] so log lines carry a
//! stable category next to the raw error text.

use super::types::{ErrorType, LookupError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Lookups never turn HTTP status codes into errors, so only the transport
/// classification of the error is inspected.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

impl LookupError {
    /// Returns the category used when logging this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            LookupError::Network(e) | LookupError::Body(e) => categorize_reqwest_error(e),
            LookupError::Decode(_) => ErrorType::ResponseDecodeError,
            LookupError::Status { .. } => ErrorType::ServiceStatusError,
            LookupError::InvalidUrl(_) => ErrorType::InvalidServiceUrl,
        }
    }
}

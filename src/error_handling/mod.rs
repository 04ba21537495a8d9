//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and lookups
//! - Categorization of lookup failures for log output
//!
//! Lookup errors follow one taxonomy: network, body read, JSON decode,
//! service status and invalid URL. Whether an error is fatal is decided by the
//! caller, not here.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{ErrorType, InitializationError, LookupError};

//! Application configuration and constants.
//!
//! This module provides:
//! - Default values (endpoint, user agent, timeouts)
//! - HTTP header name constants
//! - Validation option types and CLI option parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{
    LogFormat, LogLevel, Opt, OutputFormat, ScopeValidation, TransportOptions, ValidateOptions,
};

//! Error handling.
//!
//! This module provides:
//! - The `ValidateError` enum and its `ErrorKind` discriminator
//! - Categorization of transport failures
//! - Helpers that shape response data for error messages
//!
//! Error kinds are:
//! - **Configuration**: the endpoint URL is malformed or uses a disallowed scheme,
//!   or the HTTP client cannot be built from the transport options
//! - **Transport**: the request never produced a response
//! - **Http**: unexpected status, or a successful response missing expected headers
//! - **Validation**: the token is rejected or fails the scope policy

mod categorization;
mod types;

// Re-export public API
pub use categorization::{body_excerpt, categorize_transport_error, describe_headers};
pub use types::{ErrorKind, InitializationError, TransportFailure, ValidateError};

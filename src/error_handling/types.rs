//! Error type definitions.
//!
//! This module defines the error returned by token validation, its kind
//! discriminator, and the errors raised while setting up the binary.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{EXIT_INVALID_TOKEN, EXIT_OTHER_ERROR};

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Broad category of a validation failure.
///
/// Callers branch on this instead of matching every `ValidateError` variant.
/// `Validation` is the only kind that means the token itself is the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// Bad endpoint URL or client options, detected before any I/O
    Configuration,
    /// The request could not be sent or completed
    Transport,
    /// Unexpected status, or a 2xx response missing expected headers
    Http,
    /// Bad token (401) or a scope policy violation
    Validation,
}

impl ErrorKind {
    /// Human-readable name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "Configuration error",
            ErrorKind::Transport => "Transport error",
            ErrorKind::Http => "HTTP error",
            ErrorKind::Validation => "Validation error",
        }
    }

    /// Process exit code the CLI reports for errors of this kind.
    ///
    /// A rejected token or a scope policy violation exits with
    /// [`EXIT_INVALID_TOKEN`]; every other failure with [`EXIT_OTHER_ERROR`].
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::Validation => EXIT_INVALID_TOKEN,
            ErrorKind::Configuration | ErrorKind::Transport | ErrorKind::Http => EXIT_OTHER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network-level cause of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportFailure {
    /// The request could not be built (invalid header value, bad URL)
    Builder,
    /// Redirect loop or too many redirects
    Redirect,
    /// Deadline exceeded
    Timeout,
    /// Sending the request failed
    Request,
    /// DNS, TCP or TLS connection failure
    Connect,
    /// Reading the response body failed
    Body,
    /// Response decoding failed
    Decode,
    /// Anything else
    Other,
}

impl TransportFailure {
    /// Human-readable name of the failure.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportFailure::Builder => "request builder error",
            TransportFailure::Redirect => "redirect error",
            TransportFailure::Timeout => "timeout",
            TransportFailure::Request => "request error",
            TransportFailure::Connect => "connection error",
            TransportFailure::Body => "body error",
            TransportFailure::Decode => "decode error",
            TransportFailure::Other => "other error",
        }
    }
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by token validation.
///
/// Every variant belongs to exactly one [`ErrorKind`]; see [`ValidateError::kind`].
#[derive(Error, Debug)]
pub enum ValidateError {
    /// The endpoint string is not a valid URL.
    #[error("Invalid URL {url} for API endpoint: {reason}")]
    InvalidEndpoint {
        /// Endpoint as supplied
        url: String,
        /// Parser message
        reason: String,
    },

    /// The endpoint URL uses a scheme other than http or https.
    #[error(
        "Invalid URL {url} for API endpoint: Only http: or https: are valid for scheme of GitHub API endpoint (got '{scheme}:')"
    )]
    UnsupportedScheme {
        /// Endpoint as supplied
        url: String,
        /// Rejected scheme, without the trailing colon
        scheme: String,
    },

    /// The HTTP client could not be built from the transport options,
    /// for example because the User-Agent is not a valid header value.
    #[error("Could not configure the HTTP client: {source}")]
    ClientConfiguration {
        /// Underlying builder error
        #[source]
        source: ReqwestError,
    },

    /// The request could not be sent or its response could not be read.
    #[error("Could not send a validation request to {url} ({failure}): {source}")]
    Transport {
        /// Resolved request URL
        url: String,
        /// Network-level cause
        failure: TransportFailure,
        /// Underlying reqwest error
        #[source]
        source: ReqwestError,
    },

    /// Non-2xx status other than 401.
    #[error("Unexpected HTTP request failure with response {status} ({status_text}) and body '{body}'")]
    UnexpectedStatus {
        /// Numeric status code
        status: u16,
        /// Canonical reason phrase
        status_text: String,
        /// Response body excerpt
        body: String,
    },

    /// The endpoint does not report token scopes.
    #[error("Response headers don't include X-OAuth-Scopes: {headers}")]
    MissingScopesHeader {
        /// Response headers rendered as JSON
        headers: String,
    },

    /// One or more rate limit headers are absent or empty.
    #[error(
        "Response headers don't include rate limit information (missing {}): {headers}",
        .missing.join(", ")
    )]
    MissingRateLimit {
        /// Names of every absent or empty header
        missing: Vec<&'static str>,
        /// Response headers rendered as JSON
        headers: String,
    },

    /// A header is present but its value cannot be used.
    #[error("Malformed {name} header value '{value}': {reason}")]
    MalformedHeader {
        /// Header name
        name: &'static str,
        /// Raw value, lossily decoded
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The API rejected the token (HTTP 401).
    #[error("Unauthorized GitHub API token. Response: '{body}', URL: {url}")]
    Unauthorized {
        /// Response body excerpt
        body: String,
        /// Resolved request URL
        url: String,
    },

    /// A required scope is not granted.
    #[error("Scope '{scope}' should be included in token scopes: {granted}")]
    MissingScope {
        /// The missing scope
        scope: String,
        /// Granted scopes, comma separated
        granted: String,
    },

    /// A forbidden scope is granted.
    #[error("Scope '{scope}' should not be included in token scopes: {granted}")]
    ForbiddenScope {
        /// The forbidden scope
        scope: String,
        /// Granted scopes, comma separated
        granted: String,
    },

    /// Granted scopes differ from the exact expected set.
    #[error("The token's scopes {granted:?} don't exactly match to the expected scopes {expected:?}")]
    ScopeMismatch {
        /// Granted scopes in server order
        granted: Vec<String>,
        /// Expected scope set
        expected: Vec<String>,
    },
}

impl ValidateError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidateError::InvalidEndpoint { .. }
            | ValidateError::UnsupportedScheme { .. }
            | ValidateError::ClientConfiguration { .. } => ErrorKind::Configuration,
            ValidateError::Transport { .. } => ErrorKind::Transport,
            ValidateError::UnexpectedStatus { .. }
            | ValidateError::MissingScopesHeader { .. }
            | ValidateError::MissingRateLimit { .. }
            | ValidateError::MalformedHeader { .. } => ErrorKind::Http,
            ValidateError::Unauthorized { .. }
            | ValidateError::MissingScope { .. }
            | ValidateError::ForbiddenScope { .. }
            | ValidateError::ScopeMismatch { .. } => ErrorKind::Validation,
        }
    }

    /// True when the token itself is invalid or fails the scope policy.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

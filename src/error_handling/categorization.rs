//! Error categorization helpers.
//!
//! Maps `reqwest` failures onto [`TransportFailure`] and shapes response data
//! (bodies, header maps) into text suitable for error messages.

use reqwest::header::HeaderMap;

use super::types::TransportFailure;
use crate::config::MAX_ERROR_BODY_CHARS;

/// Categorizes a `reqwest::Error` into a `TransportFailure`.
///
/// Only network-level failures reach this function; HTTP status handling
/// happens on the response, never through `error_for_status()`.
pub fn categorize_transport_error(error: &reqwest::Error) -> TransportFailure {
    if error.is_builder() {
        TransportFailure::Builder
    } else if error.is_redirect() {
        TransportFailure::Redirect
    } else if error.is_timeout() {
        TransportFailure::Timeout
    } else if error.is_connect() {
        TransportFailure::Connect
    } else if error.is_request() {
        TransportFailure::Request
    } else if error.is_body() {
        TransportFailure::Body
    } else if error.is_decode() {
        TransportFailure::Decode
    } else {
        TransportFailure::Other
    }
}

/// Shortens a response body for inclusion in an error message.
pub fn body_excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let excerpt: String = chars.by_ref().take(MAX_ERROR_BODY_CHARS).collect();
    if chars.next().is_some() {
        format!("{excerpt}...")
    } else {
        excerpt
    }
}

/// Renders response headers as a JSON object for diagnostics.
///
/// Repeated headers are joined with `, `. Values that are not visible ASCII are
/// rendered lossily.
pub fn describe_headers(headers: &HeaderMap) -> String {
    let mut map = serde_json::Map::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match map.get_mut(name.as_str()) {
            Some(serde_json::Value::String(existing)) => {
                existing.push_str(", ");
                existing.push_str(&value);
            }
            _ => {
                map.insert(name.as_str().to_string(), serde_json::Value::String(value));
            }
        }
    }
    serde_json::Value::Object(map).to_string()
}

//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::{TransportOptions, DEFAULT_USER_AGENT};

/// Returns the HTTP client for a validation request.
///
/// A caller-supplied `transport.client` is used as-is (cloning a
/// `reqwest::Client` shares its connection pool). Otherwise a client is built
/// with the configured or default User-Agent.
///
/// `transport.timeout` is not applied here; it is set per request so that it
/// also covers caller-supplied clients.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(transport: &TransportOptions) -> Result<reqwest::Client, reqwest::Error> {
    if let Some(client) = &transport.client {
        return Ok(client.clone());
    }

    ClientBuilder::new()
        .user_agent(
            transport
                .user_agent
                .as_deref()
                .unwrap_or(DEFAULT_USER_AGENT),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_default() {
        assert!(init_client(&TransportOptions::default()).is_ok());
    }

    #[test]
    fn test_init_client_custom_user_agent() {
        let transport = TransportOptions {
            user_agent: Some("my-ci/1.0".to_string()),
            ..Default::default()
        };
        assert!(init_client(&transport).is_ok());
    }

    #[test]
    fn test_init_client_invalid_user_agent_fails() {
        let transport = TransportOptions {
            user_agent: Some("bad\nagent".to_string()),
            ..Default::default()
        };
        let err = init_client(&transport).unwrap_err();
        assert!(err.is_builder());
    }
}

//! Token validation request handling.

use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Serialize;

use crate::config::{TransportOptions, ValidateOptions, AUTHORIZATION_SCHEME};
use crate::endpoint::resolve_endpoint;
use crate::error_handling::{body_excerpt, categorize_transport_error, ValidateError};
use crate::initialization::init_client;
use crate::rate_limit::{parse_rate_limit, RateLimit};
use crate::scopes::parse_and_validate_scopes;

/// Outcome of a successful validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Granted scopes in the order the server listed them
    pub scopes: Vec<String>,
    /// Rate limit status at the time of the request
    pub rate_limit: RateLimit,
}

/// Validates a GitHub API token.
///
/// Sends one authenticated `GET` to the resolved endpoint and checks the
/// granted scopes against `options.scope`. Nothing is retried and no partial
/// result is ever returned.
///
/// # Errors
///
/// See [`ValidateError`]; callers that only care whether the token itself is
/// bad should check [`ValidateError::is_validation`].
///
/// # Examples
///
/// ```no_run
/// use github_token_validator::{validate_github_token, ScopeValidation, ValidateOptions};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = ValidateOptions {
///     scope: Some(ScopeValidation::default().include(["public_repo"])),
///     ..Default::default()
/// };
/// let token = std::env::var("GITHUB_TOKEN")?;
/// let validated = validate_github_token(&token, &options).await?;
/// println!("{} requests left", validated.rate_limit.remaining);
/// # Ok(())
/// # }
/// ```
pub async fn validate_github_token(
    token: &str,
    options: &ValidateOptions,
) -> Result<ValidationResult, ValidateError> {
    let url = resolve_endpoint(options)?;
    let response = send_request(&url, token, &options.transport).await?;

    let status = response.status();
    debug!("Validation request to {url} returned {status}");

    if !status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let body = body_excerpt(&body);

        if status == StatusCode::UNAUTHORIZED {
            return Err(ValidateError::Unauthorized { body, url });
        }
        return Err(ValidateError::UnexpectedStatus {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        });
    }

    let headers = response.headers();
    let scopes = parse_and_validate_scopes(headers, options.scope.as_ref())?;
    let rate_limit = parse_rate_limit(headers)?;

    Ok(ValidationResult { scopes, rate_limit })
}

async fn send_request(
    url: &str,
    token: &str,
    transport: &TransportOptions,
) -> Result<reqwest::Response, ValidateError> {
    let client = init_client(transport).map_err(|source| {
        debug!("Could not build HTTP client: {source}");
        ValidateError::ClientConfiguration { source }
    })?;

    let mut request = client
        .get(url)
        .header(AUTHORIZATION, format!("{AUTHORIZATION_SCHEME} {token}"));
    if let Some(timeout) = transport.timeout {
        request = request.timeout(timeout);
    }

    debug!("Sending validation request to {url}");
    request.send().await.map_err(|e| transport_error(url, e))
}

fn transport_error(url: &str, source: reqwest::Error) -> ValidateError {
    let failure = categorize_transport_error(&source);
    debug!("Validation request to {url} failed ({failure}): {source}");
    ValidateError::Transport {
        url: url.to_string(),
        failure,
        source,
    }
}

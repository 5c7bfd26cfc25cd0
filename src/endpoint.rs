//! API endpoint resolution and validation.

use log::debug;
use url::Url;

use crate::config::{ValidateOptions, ALLOWED_SCHEMES, DEFAULT_ENDPOINT_URL, USERS_PATH_PREFIX};
use crate::error_handling::ValidateError;

/// Builds the URL the validation request is sent to.
///
/// Starts from `options.endpoint_url` (or the public GitHub API), checks that it
/// parses and uses an http/https scheme, and replaces the path with
/// `/users/{user_name}` when a non-empty user name is given. The base path is discarded
/// in that case, so an enterprise base such as `https://ghe.example.com/api/v3`
/// resolves to `https://ghe.example.com/users/{user_name}`.
///
/// # Errors
///
/// Returns `ValidateError::InvalidEndpoint` if the string is not a URL and
/// `ValidateError::UnsupportedScheme` for any scheme other than http/https.
/// No network activity happens before either check.
pub fn resolve_endpoint(options: &ValidateOptions) -> Result<String, ValidateError> {
    let base = options
        .endpoint_url
        .as_deref()
        .unwrap_or(DEFAULT_ENDPOINT_URL);

    let mut url = Url::parse(base).map_err(|e| ValidateError::InvalidEndpoint {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(ValidateError::UnsupportedScheme {
            url: base.to_string(),
            scheme: url.scheme().to_string(),
        });
    }

    if let Some(user_name) = options.user_name.as_deref().filter(|n| !n.is_empty()) {
        url.set_path(&format!("{USERS_PATH_PREFIX}{user_name}"));
    }

    debug!("Resolved API endpoint {url}");
    Ok(url.into())
}

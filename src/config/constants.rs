//! Configuration constants.
//!
//! Defaults applied when the caller leaves an option unset.

/// Base URL of the public GitHub REST API.
///
/// Used when `ValidateOptions::endpoint_url` is not supplied. Enterprise
/// deployments and mock servers override it.
pub const DEFAULT_ENDPOINT_URL: &str = "https://api.github.com";

/// Path prefix for per-user endpoints (`/users/{name}`).
pub const USERS_PATH_PREFIX: &str = "/users/";

/// URL schemes accepted for the API endpoint.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Default User-Agent string for the validation request.
///
/// GitHub rejects API requests that carry no User-Agent, so one is always sent.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("github_token_validator/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout in seconds used by the CLI.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of response body characters embedded in error messages.
///
/// Error pages from proxies can be large; the status and the start of the body
/// are enough to diagnose.
pub const MAX_ERROR_BODY_CHARS: usize = 1024;

/// Authorization scheme GitHub expects for personal-access tokens.
pub const AUTHORIZATION_SCHEME: &str = "token";

/// Exit code when the token is rejected or fails the scope policy.
pub const EXIT_INVALID_TOKEN: i32 = 1;

/// Exit code for configuration, transport and HTTP failures.
pub const EXIT_OTHER_ERROR: i32 = 2;

//! HTTP header name constants.
//!
//! Header lookups go through `reqwest::header::HeaderMap`, which matches names
//! case-insensitively, so the casing here is only cosmetic.

/// Comma-separated list of OAuth scopes granted to the token
pub const HEADER_X_OAUTH_SCOPES: &str = "X-OAuth-Scopes";

// Rate limit headers
/// Maximum number of requests permitted in the current window
pub const HEADER_X_RATELIMIT_LIMIT: &str = "X-RateLimit-Limit";
/// Requests left in the current window
pub const HEADER_X_RATELIMIT_REMAINING: &str = "X-RateLimit-Remaining";
/// Window reset time in UTC epoch seconds
pub const HEADER_X_RATELIMIT_RESET: &str = "X-RateLimit-Reset";

/// Rate limit headers, in the order they are reported when missing.
pub const RATE_LIMIT_HEADERS: &[&str] = &[
    HEADER_X_RATELIMIT_LIMIT,
    HEADER_X_RATELIMIT_REMAINING,
    HEADER_X_RATELIMIT_RESET,
];

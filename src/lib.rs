//! github_token_validator library: GitHub API token validation
//!
//! This library checks a GitHub personal-access token with a single
//! authenticated request, reporting the OAuth scopes granted to the token and
//! its API rate limit status, and optionally enforcing a scope policy.
//!
//! # Example
//!
//! ```no_run
//! use github_token_validator::{validate_github_token, ScopeValidation, ValidateOptions};
//! use tokio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ValidateOptions {
//!     scope: Some(
//!         ScopeValidation::default()
//!             .include(["public_repo", "read:user"])
//!             .exclude(["user"]),
//!     ),
//!     ..Default::default()
//! };
//!
//! match validate_github_token("ghp_xxx", &options).await {
//!     Ok(validated) => println!("scopes: {:?}", validated.scopes),
//!     Err(e) if e.is_validation() => eprintln!("bad token: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod endpoint;
pub mod error_handling;
pub mod initialization;
mod rate_limit;
mod response;
mod scopes;
mod validate;

// Re-export public API
pub use config::{ScopeValidation, TransportOptions, ValidateOptions};
pub use endpoint::resolve_endpoint;
pub use error_handling::{ErrorKind, TransportFailure, ValidateError};
pub use rate_limit::{parse_rate_limit, RateLimit};
pub use scopes::{check_scopes, parse_and_validate_scopes, parse_scopes, split_scopes};
pub use validate::{validate_github_token, ValidationResult};

//! Configuration types and CLI options.
//!
//! This module defines the option structs passed to the validator and the
//! command-line argument type used by the binary.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the validation summary printed by the CLI.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One-line human-readable summary
    Plain,
    /// The full `ValidationResult` as JSON
    Json,
}

/// Scope policy applied to the scopes granted to a token.
///
/// The three rules are independent and every rule that is set must pass.
/// They are checked in the order included, excluded, exact, and the first
/// failure is reported.
///
/// # Examples
///
/// ```
/// use github_token_validator::ScopeValidation;
///
/// let rule = ScopeValidation::default()
///     .include(["public_repo", "read:user"])
///     .exclude(["user"]);
/// assert_eq!(rule.included.map(|s| s.len()), Some(2));
/// assert!(rule.exact.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeValidation {
    /// Every scope listed must be granted
    pub included: Option<Vec<String>>,
    /// No scope listed may be granted
    pub excluded: Option<Vec<String>>,
    /// Granted scopes must equal this set (order-insensitive)
    pub exact: Option<Vec<String>>,
}

impl ScopeValidation {
    /// Sets the `included` rule.
    pub fn include<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the `excluded` rule.
    pub fn exclude<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the `exact` rule.
    pub fn exact<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exact = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// True when no rule is set.
    pub fn is_empty(&self) -> bool {
        self.included.is_none() && self.excluded.is_none() && self.exact.is_none()
    }
}

/// Transport settings for the validation request.
///
/// `client` replaces the HTTP client entirely (custom proxies, root
/// certificates, connection pools). `timeout` is a per-request deadline applied
/// on top of whatever the client already enforces.
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    /// Pre-configured HTTP client to send the request with
    pub client: Option<reqwest::Client>,
    /// Per-request deadline
    pub timeout: Option<Duration>,
    /// User-Agent for the default client (ignored when `client` is set)
    pub user_agent: Option<String>,
}

/// Options for a single token validation.
///
/// All fields default to "not set": the public GitHub API, the
/// authenticated-user endpoint, no scope policy and a default HTTP client.
///
/// # Examples
///
/// ```
/// use github_token_validator::{ScopeValidation, ValidateOptions};
///
/// let options = ValidateOptions {
///     user_name: Some("octocat".to_string()),
///     scope: Some(ScopeValidation::default().exact(["repo"])),
///     ..Default::default()
/// };
/// assert!(options.endpoint_url.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Query `/users/{user_name}` instead of the endpoint base
    pub user_name: Option<String>,
    /// Scope policy
    pub scope: Option<ScopeValidation>,
    /// HTTP transport settings
    pub transport: TransportOptions,
    /// API base URL (default: `https://api.github.com`)
    pub endpoint_url: Option<String>,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Token from the environment, require two scopes
/// GITHUB_TOKEN=ghp_xxx github_token_validator --include public_repo,read:user
///
/// # Exact scope set against a GitHub Enterprise endpoint
/// github_token_validator --token ghp_xxx --endpoint-url https://ghe.example.com/api/v3 --exact repo
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "github_token_validator",
    about = "Validates a GitHub API token's scopes and rate limit status."
)]
pub struct Opt {
    /// GitHub API token to validate
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Query the public per-user endpoint /users/<USER_NAME>
    #[arg(long)]
    pub user_name: Option<String>,

    /// API base URL (default: https://api.github.com)
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Scopes that must be granted (repeatable or comma-separated)
    #[arg(long = "include", value_delimiter = ',')]
    pub included: Vec<String>,

    /// Scopes that must not be granted (repeatable or comma-separated)
    #[arg(long = "exclude", value_delimiter = ',')]
    pub excluded: Vec<String>,

    /// Exact set of scopes the token must have (repeatable or comma-separated)
    #[arg(long = "exact", value_delimiter = ',')]
    pub exact: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Output format for the result: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,
}

impl Opt {
    /// Builds the library options from the parsed command line.
    ///
    /// Empty scope lists leave the corresponding rule unset.
    pub fn validate_options(&self) -> ValidateOptions {
        let non_empty = |v: &Vec<String>| (!v.is_empty()).then(|| v.clone());
        let scope = ScopeValidation {
            included: non_empty(&self.included),
            excluded: non_empty(&self.excluded),
            exact: non_empty(&self.exact),
        };

        ValidateOptions {
            user_name: self.user_name.clone(),
            scope: (!scope.is_empty()).then_some(scope),
            transport: TransportOptions {
                client: None,
                timeout: Some(Duration::from_secs(self.timeout_seconds)),
                user_agent: Some(self.user_agent.clone()),
            },
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}

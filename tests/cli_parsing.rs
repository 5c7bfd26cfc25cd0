//! Tests for command-line option parsing.

use clap::Parser;
use github_token_validator::config::{
    LogFormat, LogLevel, Opt, OutputFormat, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use std::time::Duration;

#[test]
fn test_defaults() {
    let opt = Opt::try_parse_from(["github_token_validator", "--token", "t"])
        .expect("token alone should be enough");

    assert_eq!(opt.token, "t");
    assert!(opt.user_name.is_none());
    assert!(opt.endpoint_url.is_none());
    assert_eq!(opt.timeout_seconds, DEFAULT_TIMEOUT_SECS);
    assert_eq!(opt.user_agent, DEFAULT_USER_AGENT);
    assert!(matches!(opt.log_level, LogLevel::Warn));
    assert!(matches!(opt.log_format, LogFormat::Plain));
    assert_eq!(opt.output, OutputFormat::Plain);
}

#[test]
fn test_all_flags() {
    let opt = Opt::try_parse_from([
        "github_token_validator",
        "--token",
        "t",
        "--user-name",
        "octocat",
        "--endpoint-url",
        "https://ghe.example.com/api/v3",
        "--exact",
        "repo,gist",
        "--timeout-seconds",
        "5",
        "--user-agent",
        "ci/1.0",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--output",
        "json",
    ])
    .expect("all flags should parse");

    assert!(matches!(opt.log_level, LogLevel::Debug));
    assert!(matches!(opt.log_format, LogFormat::Json));
    assert_eq!(opt.output, OutputFormat::Json);

    let options = opt.validate_options();
    assert_eq!(options.user_name.as_deref(), Some("octocat"));
    assert_eq!(
        options.endpoint_url.as_deref(),
        Some("https://ghe.example.com/api/v3")
    );
    let scope = options.scope.expect("exact rule should be set");
    assert_eq!(scope.exact, Some(vec!["repo".to_string(), "gist".to_string()]));
    assert!(scope.included.is_none());
    assert!(scope.excluded.is_none());
    assert_eq!(options.transport.timeout, Some(Duration::from_secs(5)));
    assert_eq!(options.transport.user_agent.as_deref(), Some("ci/1.0"));
    assert!(options.transport.client.is_none());
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Opt::try_parse_from([
        "github_token_validator",
        "--token",
        "t",
        "--log-level",
        "verbose",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_timeout_rejected() {
    let result = Opt::try_parse_from([
        "github_token_validator",
        "--token",
        "t",
        "--timeout-seconds",
        "soon",
    ]);
    assert!(result.is_err());
}

//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `github_token_validator` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use github_token_validator::config::{Opt, OutputFormat};
use github_token_validator::initialization::init_logger_with;
use github_token_validator::{validate_github_token, ValidationResult};

#[tokio::main]
async fn main() -> Result<()> {
    // Load GITHUB_TOKEN and friends from a .env file in the current directory, if any
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let options = opt.validate_options();
    match validate_github_token(&opt.token, &options).await {
        Ok(validated) => {
            print_result(&validated, &opt.output)?;
            Ok(())
        }
        Err(e) => {
            eprintln!("github_token_validator error: {e}");
            process::exit(e.exit_code());
        }
    }
}

fn print_result(validated: &ValidationResult, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(validated)
                .context("Failed to serialize validation result")?;
            println!("{json}");
        }
        OutputFormat::Plain => {
            let rate_limit = &validated.rate_limit;
            println!(
                "✅ Token is valid (scopes: {}); {}/{} requests remaining, window resets at {}",
                if validated.scopes.is_empty() {
                    "none".to_string()
                } else {
                    validated.scopes.join(", ")
                },
                rate_limit.remaining,
                rate_limit.limit,
                rate_limit.reset.to_rfc3339()
            );
            if rate_limit.is_exhausted() {
                eprintln!("⚠️ Rate limit exhausted until {}", rate_limit.reset.to_rfc3339());
            }
        }
    }
    Ok(())
}

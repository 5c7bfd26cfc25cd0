//! OAuth scope parsing and policy checks.
//!
//! GitHub reports the scopes granted to a token in the `X-OAuth-Scopes`
//! response header as a comma-separated list. This module turns that header
//! into an ordered list and checks it against a [`ScopeValidation`] policy.

use std::collections::HashSet;

use log::debug;
use reqwest::header::HeaderMap;

use crate::config::{ScopeValidation, HEADER_X_OAUTH_SCOPES};
use crate::error_handling::{describe_headers, ValidateError};
use crate::response::header_text;

/// Splits a scopes header value into scope names.
///
/// Segments are trimmed and empty ones dropped; server order is kept.
pub fn split_scopes(header: &str) -> Vec<String> {
    header
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the granted scopes from response headers.
///
/// # Errors
///
/// Returns `ValidateError::MissingScopesHeader` when the header is absent,
/// which means the endpoint does not support scope introspection (wrong
/// endpoint or token type).
pub fn parse_scopes(headers: &HeaderMap) -> Result<Vec<String>, ValidateError> {
    let header = scopes_header(headers)?;
    Ok(split_scopes(header))
}

/// Checks granted scopes against a policy.
///
/// Rules run in the order included, excluded, exact; the first violation is
/// returned. `header` is the raw header value, quoted in error messages.
///
/// # Errors
///
/// - `ValidateError::MissingScope` for the first `included` scope not granted
/// - `ValidateError::ForbiddenScope` for the first `excluded` scope granted
/// - `ValidateError::ScopeMismatch` if the granted set differs from `exact`
pub fn check_scopes(
    scopes: &[String],
    header: &str,
    rule: &ScopeValidation,
) -> Result<(), ValidateError> {
    if let Some(included) = &rule.included {
        if let Some(missing) = included.iter().find(|s| !scopes.contains(*s)) {
            return Err(ValidateError::MissingScope {
                scope: missing.clone(),
                granted: header.to_string(),
            });
        }
    }

    if let Some(excluded) = &rule.excluded {
        if let Some(forbidden) = excluded.iter().find(|s| scopes.contains(*s)) {
            return Err(ValidateError::ForbiddenScope {
                scope: forbidden.clone(),
                granted: header.to_string(),
            });
        }
    }

    if let Some(exact) = &rule.exact {
        let granted: HashSet<&str> = scopes.iter().map(String::as_str).collect();
        let wanted: HashSet<&str> = exact.iter().map(String::as_str).collect();
        if granted != wanted {
            return Err(ValidateError::ScopeMismatch {
                granted: scopes.to_vec(),
                expected: exact.clone(),
            });
        }
    }

    Ok(())
}

/// Reads the granted scopes and applies `rule` when one is given.
///
/// The returned list is always in server order, whatever the rule.
pub fn parse_and_validate_scopes(
    headers: &HeaderMap,
    rule: Option<&ScopeValidation>,
) -> Result<Vec<String>, ValidateError> {
    let header = scopes_header(headers)?;
    let scopes = split_scopes(header);
    debug!("Token scopes: {scopes:?}");

    if let Some(rule) = rule {
        check_scopes(&scopes, header, rule)?;
    }

    Ok(scopes)
}

fn scopes_header(headers: &HeaderMap) -> Result<&str, ValidateError> {
    header_text(headers, HEADER_X_OAUTH_SCOPES)?.ok_or_else(|| {
        ValidateError::MissingScopesHeader {
            headers: describe_headers(headers),
        }
    })
}

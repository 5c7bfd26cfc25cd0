//! Rate limit header parsing.

use chrono::{DateTime, Utc};
use log::debug;
use reqwest::header::HeaderMap;
use serde::Serialize;

use crate::config::{
    HEADER_X_RATELIMIT_LIMIT, HEADER_X_RATELIMIT_REMAINING, HEADER_X_RATELIMIT_RESET,
    RATE_LIMIT_HEADERS,
};
use crate::error_handling::{describe_headers, ValidateError};
use crate::response::header_text;

/// API rate limit status reported alongside a response.
///
/// `remaining <= limit` holds for well-behaved servers but is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    /// Maximum requests per window
    pub limit: u64,
    /// Requests left in the current window
    pub remaining: u64,
    /// When the current window resets
    pub reset: DateTime<Utc>,
}

impl RateLimit {
    /// True when no requests are left in the current window.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Parses the `X-RateLimit-*` headers of a response.
///
/// # Errors
///
/// - `ValidateError::MissingRateLimit` naming every header that is absent or empty
/// - `ValidateError::MalformedHeader` if a value is not a base-10 integer, or
///   the reset time is out of range
pub fn parse_rate_limit(headers: &HeaderMap) -> Result<RateLimit, ValidateError> {
    let mut values = Vec::with_capacity(RATE_LIMIT_HEADERS.len());
    let mut missing = Vec::new();
    for &name in RATE_LIMIT_HEADERS {
        match header_text(headers, name)?.map(str::trim) {
            Some(value) if !value.is_empty() => values.push(value),
            _ => missing.push(name),
        }
    }

    if !missing.is_empty() {
        return Err(ValidateError::MissingRateLimit {
            missing,
            headers: describe_headers(headers),
        });
    }

    let limit = parse_integer::<u64>(HEADER_X_RATELIMIT_LIMIT, values[0])?;
    let remaining = parse_integer::<u64>(HEADER_X_RATELIMIT_REMAINING, values[1])?;
    let reset_secs = parse_integer::<i64>(HEADER_X_RATELIMIT_RESET, values[2])?;
    let reset =
        DateTime::from_timestamp(reset_secs, 0).ok_or_else(|| ValidateError::MalformedHeader {
            name: HEADER_X_RATELIMIT_RESET,
            value: values[2].to_string(),
            reason: "timestamp out of range".to_string(),
        })?;

    let rate_limit = RateLimit {
        limit,
        remaining,
        reset,
    };
    debug!("Rate limit: {rate_limit:?}");
    Ok(rate_limit)
}

fn parse_integer<T>(name: &'static str, value: &str) -> Result<T, ValidateError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|e: std::num::ParseIntError| ValidateError::MalformedHeader {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorKind;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    fn full_headers() -> HeaderMap {
        headers(&[
            (HEADER_X_RATELIMIT_LIMIT, "5000"),
            (HEADER_X_RATELIMIT_REMAINING, "4999"),
            (HEADER_X_RATELIMIT_RESET, "1700000000"),
        ])
    }

    #[test]
    fn test_parse_rate_limit_success() {
        let rate_limit = parse_rate_limit(&full_headers()).unwrap();
        assert_eq!(rate_limit.limit, 5000);
        assert_eq!(rate_limit.remaining, 4999);
        assert_eq!(rate_limit.reset.timestamp(), 1_700_000_000);
        assert_eq!(rate_limit.reset.to_rfc3339(), "2023-11-14T22:13:20+00:00");
        assert!(!rate_limit.is_exhausted());
    }

    #[test]
    fn test_parse_rate_limit_header_names_case_insensitive() {
        let headers = headers(&[
            ("x-ratelimit-limit", "60"),
            ("X-RATELIMIT-REMAINING", "0"),
            ("x-RateLimit-reset", "0"),
        ]);
        let rate_limit = parse_rate_limit(&headers).unwrap();
        assert_eq!(rate_limit.limit, 60);
        assert!(rate_limit.is_exhausted());
        assert_eq!(rate_limit.reset.timestamp(), 0);
    }

    #[test]
    fn test_parse_rate_limit_does_not_check_remaining_against_limit() {
        let headers = headers(&[
            (HEADER_X_RATELIMIT_LIMIT, "10"),
            (HEADER_X_RATELIMIT_REMAINING, "20"),
            (HEADER_X_RATELIMIT_RESET, "1700000000"),
        ]);
        let rate_limit = parse_rate_limit(&headers).unwrap();
        assert_eq!(rate_limit.remaining, 20);
    }

    #[test]
    fn test_parse_rate_limit_missing_reset() {
        let mut headers = full_headers();
        headers.remove(HEADER_X_RATELIMIT_RESET);
        let err = parse_rate_limit(&headers).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Http);
        match &err {
            ValidateError::MissingRateLimit { missing, .. } => {
                assert_eq!(missing, &vec![HEADER_X_RATELIMIT_RESET]);
            }
            other => panic!("expected MissingRateLimit, got {other:?}"),
        }
        assert!(err.to_string().contains("X-RateLimit-Reset"));
    }

    #[test]
    fn test_parse_rate_limit_reports_every_missing_header() {
        let headers = headers(&[(HEADER_X_RATELIMIT_REMAINING, "1")]);
        match parse_rate_limit(&headers).unwrap_err() {
            ValidateError::MissingRateLimit { missing, .. } => {
                assert_eq!(
                    missing,
                    vec![HEADER_X_RATELIMIT_LIMIT, HEADER_X_RATELIMIT_RESET]
                );
            }
            other => panic!("expected MissingRateLimit, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rate_limit_empty_value_counts_as_missing() {
        let mut headers = full_headers();
        headers.insert(HEADER_X_RATELIMIT_LIMIT, HeaderValue::from_static(""));
        match parse_rate_limit(&headers).unwrap_err() {
            ValidateError::MissingRateLimit { missing, .. } => {
                assert_eq!(missing, vec![HEADER_X_RATELIMIT_LIMIT]);
            }
            other => panic!("expected MissingRateLimit, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rate_limit_rejects_non_numeric_values() {
        let mut headers = full_headers();
        headers.insert(HEADER_X_RATELIMIT_REMAINING, HeaderValue::from_static("lots"));
        let err = parse_rate_limit(&headers).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Http);
        assert!(matches!(
            err,
            ValidateError::MalformedHeader { name: HEADER_X_RATELIMIT_REMAINING, .. }
        ));
    }

    #[test]
    fn test_parse_rate_limit_rejects_negative_limit() {
        let mut headers = full_headers();
        headers.insert(HEADER_X_RATELIMIT_LIMIT, HeaderValue::from_static("-1"));
        assert!(matches!(
            parse_rate_limit(&headers).unwrap_err(),
            ValidateError::MalformedHeader { name: HEADER_X_RATELIMIT_LIMIT, .. }
        ));
    }

    #[test]
    fn test_parse_rate_limit_rejects_out_of_range_reset() {
        let mut headers = full_headers();
        headers.insert(
            HEADER_X_RATELIMIT_RESET,
            HeaderValue::from_static("9223372036854775807"),
        );
        match parse_rate_limit(&headers).unwrap_err() {
            ValidateError::MalformedHeader { name, reason, .. } => {
                assert_eq!(name, HEADER_X_RATELIMIT_RESET);
                assert!(reason.contains("out of range"));
            }
            other => panic!("expected MalformedHeader, got {other:?}"),
        }
    }
}

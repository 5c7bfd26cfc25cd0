//! Response header access.

use reqwest::header::HeaderMap;

use crate::error_handling::ValidateError;

/// Returns the value of header `name` as text, or `None` if it is absent.
///
/// Lookup is case-insensitive. When a header is repeated, the first value wins.
///
/// # Errors
///
/// Returns `ValidateError::MalformedHeader` if the value is not visible ASCII.
pub(crate) fn header_text<'a>(
    headers: &'a HeaderMap,
    name: &'static str,
) -> Result<Option<&'a str>, ValidateError> {
    let Some(value) = headers.get(name) else {
        return Ok(None);
    };
    value
        .to_str()
        .map(Some)
        .map_err(|e| ValidateError::MalformedHeader {
            name,
            value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_header_text_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("x-oauth-scopes", HeaderValue::from_static("repo"));
        assert_eq!(
            header_text(&headers, "X-OAuth-Scopes").unwrap(),
            Some("repo")
        );
        assert_eq!(
            header_text(&headers, "X-OAUTH-SCOPES").unwrap(),
            Some("repo")
        );
    }

    #[test]
    fn test_header_text_absent() {
        assert_eq!(header_text(&HeaderMap::new(), "X-OAuth-Scopes").unwrap(), None);
    }

    #[test]
    fn test_header_text_rejects_opaque_bytes() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-oauth-scopes",
            HeaderValue::from_bytes(b"repo\xff").unwrap(),
        );
        let err = header_text(&headers, "X-OAuth-Scopes").unwrap_err();
        assert!(matches!(
            err,
            ValidateError::MalformedHeader { name: "X-OAuth-Scopes", .. }
        ));
    }
}

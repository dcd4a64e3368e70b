//! Validation of user-submitted URLs.
//!
//! Only absolute `http` and `https` URLs with a host are accepted. The
//! submitted string itself is what gets stored; parsing is used purely to
//! reject malformed input.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed, got '{0}'")]
    UnsupportedScheme(String),

    #[error("URL must contain a host")]
    MissingHost,
}

/// Checks that `input` is a well-formed `http(s)` URL.
///
/// Returns the input with surrounding whitespace removed.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for blank input
/// - [`UrlValidationError::InvalidFormat`] if the URL does not parse
/// - [`UrlValidationError::UnsupportedScheme`] for `ftp:`, `javascript:`, `data:` and the like
/// - [`UrlValidationError::MissingHost`] if the URL has no host
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_http_url(" https://google.com ").unwrap(), "https://google.com");
/// assert!(validate_http_url("not-a-link").is_err());
/// ```
pub fn validate_http_url(input: &str) -> Result<&str, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        assert_eq!(
            validate_http_url("https://google.com").unwrap(),
            "https://google.com"
        );
    }

    #[test]
    fn test_accepts_http_with_path_and_query() {
        let url = "http://example.com:8080/path?q=rust&lang=en#top";
        assert_eq!(validate_http_url(url).unwrap(), url);
    }

    #[test]
    fn test_preserves_submitted_form() {
        // No normalization: case and trailing slash are kept as submitted.
        assert_eq!(
            validate_http_url("https://EXAMPLE.com/Path").unwrap(),
            "https://EXAMPLE.com/Path"
        );
        assert_eq!(
            validate_http_url("https://yandex.ru/").unwrap(),
            "https://yandex.ru/"
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            validate_http_url("  https://a.com  ").unwrap(),
            "https://a.com"
        );
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(matches!(
            validate_http_url("not-a-link"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(validate_http_url("   "), Err(UrlValidationError::Empty)));
    }

    #[test]
    fn test_rejects_other_schemes() {
        for url in [
            "ftp://example.com",
            "javascript:alert(1)",
            "mailto:a@b.com",
            "file:///etc/passwd",
        ] {
            assert!(
                matches!(
                    validate_http_url(url),
                    Err(UrlValidationError::UnsupportedScheme(_))
                ),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(validate_http_url("/just/a/path").is_err());
    }
}

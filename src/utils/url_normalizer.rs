//! URL parsing, validation and comparison utilities.
//!
//! Every other component goes through [`parse_web_url`] before treating a string
//! as an external link, so the `http`/`https` gate lives in exactly one place.

use url::Url;

/// Errors that can occur while validating a web URL.
///
/// These never reach the caller of the linking core: a failed parse means
/// "treat as no link".
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Parses a string as an absolute `http` or `https` URL.
///
/// Leading and trailing whitespace is ignored. The scheme check is
/// case-insensitive because [`Url::parse`] lowercases schemes.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input,
/// [`UrlNormalizationError::InvalidFormat`] for relative or malformed URLs,
/// [`UrlNormalizationError::UnsupportedProtocol`] for `mailto:`, `javascript:`,
/// `ftp:` and friends, and [`UrlNormalizationError::MissingHost`] when no host
/// could be extracted.
///
/// # Examples
///
/// ```ignore
/// assert!(parse_web_url("HTTPS://Example.com/a").is_ok());
/// assert!(parse_web_url("/relative/path").is_err());
/// assert!(parse_web_url("mailto:someone@example.com").is_err());
/// ```
pub fn parse_web_url(input: &str) -> Result<Url, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let url =
        Url::parse(trimmed).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlNormalizationError::MissingHost),
    }
}

/// Returns true if the string is an absolute `http`/`https` URL.
pub fn is_web_url(input: &str) -> bool {
    parse_web_url(input).is_ok()
}

/// Produces a comparison key for loop detection.
///
/// # Normalization Rules
///
/// 1. **Scheme and host**: lowercase
/// 2. **Default ports**: removed (80 for HTTP, 443 for HTTPS)
/// 3. **Fragments**: removed
/// 4. **Path**: trailing slashes trimmed, case preserved
/// 5. **Query**: preserved as-is
///
/// Returns `None` when the input is not a web URL. Two strings are the same
/// page when their keys are equal.
///
/// ```ignore
/// assert_eq!(
///     normalize_for_comparison("HTTPS://Site.Example:443/post-1/#top"),
///     normalize_for_comparison("https://site.example/post-1"),
/// );
/// ```
pub fn normalize_for_comparison(input: &str) -> Option<String> {
    let url = parse_web_url(input).ok()?;
    let host = url.host_str()?.to_ascii_lowercase();

    let mut key = format!("{}://{}", url.scheme(), host);
    if let Some(port) = url.port() {
        key.push(':');
        key.push_str(&port.to_string());
    }
    key.push_str(url.path().trim_end_matches('/'));
    if let Some(query) = url.query().filter(|q| !q.is_empty()) {
        key.push('?');
        key.push_str(query);
    }

    Some(key)
}

/// Returns true when both strings point at the same web page.
///
/// Non-web inputs never match anything, including each other.
pub fn same_page(a: &str, b: &str) -> bool {
    match (normalize_for_comparison(a), normalize_for_comparison(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

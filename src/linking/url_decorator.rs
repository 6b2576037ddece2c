//! UTM decoration of external URLs.
//!
//! Decoration is request-scoped: the stored URL is never modified, callers get
//! a new string back. Only the query is rebuilt; scheme, authority, path and
//! fragment are copied from the input as written.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, percent_encode};
use tracing::trace;

use crate::domain::entities::UtmPolicy;
use crate::utils::url_normalizer::parse_web_url;

/// RFC 3986 query encoding: everything except unreserved characters is escaped.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Ordered query parameters with "last occurrence wins" semantics.
///
/// A repeated key keeps the position of its first occurrence and the value of
/// its last one. Keys and values are kept as decoded bytes, so escapes that
/// are not UTF-8 (`%E9` from a Latin-1 form) survive a rebuild unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(Vec<u8>, Vec<u8>)>,
}

impl QueryParams {
    /// Parses a raw query string (without the leading `?`).
    ///
    /// `+` decodes to a space before percent-decoding, a key without `=` gets
    /// an empty value, and empty keys are dropped.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::default();

        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = decode_component(key);
            if key.is_empty() {
                continue;
            }
            params.set_bytes(key, decode_component(value));
        }

        params
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key.as_bytes()).is_some()
    }

    /// Decoded value of `key`, as raw bytes.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.position(key.as_bytes())
            .map(|i| self.pairs[i].1.as_slice())
    }

    /// Overwrites an existing key in place or appends a new one.
    pub fn set(&mut self, key: &str, value: &str) {
        self.set_bytes(key.as_bytes().to_vec(), value.as_bytes().to_vec());
    }

    fn set_bytes(&mut self, key: Vec<u8>, value: Vec<u8>) {
        match self.position(&key) {
            Some(i) => self.pairs[i].1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    fn position(&self, key: &[u8]) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serializes back to `k=v&k=v` with RFC 3986 escaping.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    percent_encode(k, QUERY_COMPONENT),
                    percent_encode(v, QUERY_COMPONENT)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn decode_component(raw: &str) -> Vec<u8> {
    let spaced: Vec<u8> = raw
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&spaced).collect()
}

/// A web URL split around its query, keeping the input's own spelling.
struct UrlParts<'a> {
    base: &'a str,
    query: &'a str,
    fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    fn split(url: &'a str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (url, None),
        };
        let (base, query) = rest.split_once('?').unwrap_or((rest, ""));

        Self {
            base,
            query,
            fragment,
        }
    }

    fn join(&self, query: &str) -> String {
        let mut out = String::with_capacity(self.base.len() + query.len() + 2);
        out.push_str(self.base);
        if !query.is_empty() {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

/// Merges the configured UTM parameters into `url`.
///
/// Returns `url` unchanged when tagging is disabled, when no parameter has a
/// value, or when `url` is not an absolute `http`/`https` URL. Existing query
/// parameters keep their order; new UTM parameters follow in
/// [`crate::domain::entities::UTM_PARAMS`] order. With
/// `preserve_existing`, parameters already present in the URL are left alone.
///
/// Everything outside the query is copied verbatim: host case, dot segments
/// and IDN hosts are not normalized.
///
/// # Examples
///
/// ```ignore
/// let utm = UtmPolicy {
///     enabled: true,
///     source: Some("rss".into()),
///     ..Default::default()
/// };
/// assert_eq!(
///     decorate("http://example.com/a?ref=1", &utm),
///     "http://example.com/a?ref=1&utm_source=rss"
/// );
/// ```
pub fn decorate(url: &str, policy: &UtmPolicy) -> String {
    if !policy.enabled {
        return url.to_string();
    }

    let configured = policy.configured_params();
    if configured.is_empty() {
        return url.to_string();
    }

    if let Err(e) = parse_web_url(url) {
        trace!(url, reason = %e, "Skipping UTM decoration");
        return url.to_string();
    }

    let parts = UrlParts::split(url.trim());
    let mut params = QueryParams::parse(parts.query);
    for (name, value) in configured {
        if policy.preserve_existing && params.contains(name) {
            continue;
        }
        params.set(name, value);
    }

    parts.join(&params.to_query_string())
}

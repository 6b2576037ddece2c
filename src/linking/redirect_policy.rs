//! Single-view redirect decision.
//!
//! Pure decision only. Sending the response and halting further rendering is
//! up to the caller.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::domain::entities::{LinkItem, SiteLinkPolicy};
use crate::linking::url_decorator::decorate;
use crate::utils::url_normalizer::{is_web_url, same_page};

/// Status used for every redirect. External targets are editable content, so
/// the redirect must stay temporary.
pub const REDIRECT_STATUS: u16 = 302;

/// Why a single view is served instead of redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StayReason {
    /// The caller asked to stay (e.g. `?stay=1` or preview mode).
    Bypassed,
    /// Single-view redirects are switched off site-wide.
    Disabled,
    /// The item opts out with `skip_redirect`.
    ItemOptOut,
    NoExternalUrl,
    /// The external URL is not an absolute `http`/`https` URL.
    InvalidUrl,
    /// The external URL is the item's own permalink.
    SelfRedirect,
}

impl StayReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bypassed => "bypassed",
            Self::Disabled => "disabled",
            Self::ItemOptOut => "item_opt_out",
            Self::NoExternalUrl => "no_external_url",
            Self::InvalidUrl => "invalid_url",
            Self::SelfRedirect => "self_redirect",
        }
    }
}

impl fmt::Display for StayReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`decide`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    Stay(StayReason),
    Redirect { target: String, status: u16 },
}

impl RedirectDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Redirect { target, .. } => Some(target),
            Self::Stay(_) => None,
        }
    }

    /// Short label for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Redirect { .. } => "redirect",
            Self::Stay(reason) => reason.as_str(),
        }
    }
}

/// Decides whether a single view of `item` should redirect to its external URL.
///
/// Checks run in order: bypass, site-wide switch, item opt-out, missing URL,
/// invalid URL, self-redirect. The first that applies wins. Otherwise the
/// target is the UTM-decorated external URL with status [`REDIRECT_STATUS`].
///
/// The self-redirect check compares the external URL and the permalink
/// ignoring trailing slashes and the case of scheme and host.
pub fn decide(item: &LinkItem, policy: &SiteLinkPolicy, bypass: bool) -> RedirectDecision {
    let decision = evaluate(item, policy, bypass);

    debug!(
        item_id = %item.id,
        outcome = decision.outcome(),
        "Redirect decision"
    );

    decision
}

fn evaluate(item: &LinkItem, policy: &SiteLinkPolicy, bypass: bool) -> RedirectDecision {
    if bypass {
        return RedirectDecision::Stay(StayReason::Bypassed);
    }
    if !policy.redirect_singles_enabled {
        return RedirectDecision::Stay(StayReason::Disabled);
    }
    if item.skip_redirect {
        return RedirectDecision::Stay(StayReason::ItemOptOut);
    }

    let Some(external) = item.external_url.as_deref().filter(|u| !u.trim().is_empty()) else {
        return RedirectDecision::Stay(StayReason::NoExternalUrl);
    };
    if !is_web_url(external) {
        return RedirectDecision::Stay(StayReason::InvalidUrl);
    }
    if same_page(external, &item.internal_permalink) {
        return RedirectDecision::Stay(StayReason::SelfRedirect);
    }

    RedirectDecision::Redirect {
        target: decorate(external, &policy.utm),
        status: REDIRECT_STATUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UtmPolicy;

    fn redirecting_policy() -> SiteLinkPolicy {
        SiteLinkPolicy {
            redirect_singles_enabled: true,
            ..Default::default()
        }
    }

    fn link_item(url: &str) -> LinkItem {
        LinkItem::new("42", "https://mysite.test/p/42", Some(url.to_string()))
    }

    #[test]
    fn test_redirects_to_external() {
        let decision = decide(&link_item("https://ex.com/a"), &redirecting_policy(), false);
        assert_eq!(
            decision,
            RedirectDecision::Redirect {
                target: "https://ex.com/a".to_string(),
                status: 302
            }
        );
    }

    #[test]
    fn test_end_to_end_with_utm() {
        let item = LinkItem::new(
            "42",
            "https://mysite.test/p/42",
            Some("http://example.com/article?ref=1".to_string()),
        );
        let policy = SiteLinkPolicy {
            redirect_singles_enabled: true,
            utm: UtmPolicy {
                enabled: true,
                preserve_existing: true,
                source: Some("rss".to_string()),
                medium: Some("linked-post".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            decide(&item, &policy, false),
            RedirectDecision::Redirect {
                target: "http://example.com/article?ref=1&utm_source=rss&utm_medium=linked-post"
                    .to_string(),
                status: 302
            }
        );
    }

    #[test]
    fn test_bypass_always_wins() {
        let decision = decide(&link_item("https://ex.com/a"), &redirecting_policy(), true);
        assert_eq!(decision, RedirectDecision::Stay(StayReason::Bypassed));
    }

    #[test]
    fn test_disabled_site_wide() {
        let decision = decide(&link_item("https://ex.com/a"), &SiteLinkPolicy::default(), false);
        assert_eq!(decision, RedirectDecision::Stay(StayReason::Disabled));
    }

    #[test]
    fn test_item_opt_out() {
        let item = link_item("https://ex.com/a").with_skip_redirect(true);
        let decision = decide(&item, &redirecting_policy(), false);
        assert_eq!(decision, RedirectDecision::Stay(StayReason::ItemOptOut));
    }

    #[test]
    fn test_no_external_url() {
        let item = LinkItem::new("1", "https://mysite.test/p/1", None);
        let decision = decide(&item, &redirecting_policy(), false);
        assert_eq!(decision, RedirectDecision::Stay(StayReason::NoExternalUrl));
    }

    #[test]
    fn test_scheme_gate() {
        for url in ["ftp://ex.com/f", "mailto:a@b.c", "javascript:alert(1)", "/x"] {
            let decision = decide(&link_item(url), &redirecting_policy(), false);
            assert_eq!(decision, RedirectDecision::Stay(StayReason::InvalidUrl), "{url}");
            assert!(!decision.is_redirect());
        }
    }

    #[test]
    fn test_self_redirect_trailing_slash() {
        let item = LinkItem::new(
            "1",
            "https://site.example/post-1",
            Some("https://site.example/post-1/".to_string()),
        );
        let decision = decide(&item, &redirecting_policy(), false);
        assert_eq!(decision, RedirectDecision::Stay(StayReason::SelfRedirect));
    }

    #[test]
    fn test_self_redirect_default_port() {
        let item = LinkItem::new(
            "1",
            "https://site.example/post-1",
            Some("https://site.example:443/post-1".to_string()),
        );
        let decision = decide(&item, &redirecting_policy(), false);
        assert_eq!(decision, RedirectDecision::Stay(StayReason::SelfRedirect));

        let other_port = LinkItem::new(
            "2",
            "https://site.example/post-1",
            Some("https://site.example:8443/post-1".to_string()),
        );
        assert!(decide(&other_port, &redirecting_policy(), false).is_redirect());
    }

    #[test]
    fn test_self_redirect_case_insensitive_host() {
        let item = LinkItem::new(
            "1",
            "https://site.example/post-1/",
            Some("HTTPS://SITE.EXAMPLE/post-1".to_string()),
        );
        let decision = decide(&item, &redirecting_policy(), false);
        assert_eq!(decision, RedirectDecision::Stay(StayReason::SelfRedirect));
    }

    #[test]
    fn test_decision_helpers() {
        let redirect = RedirectDecision::Redirect {
            target: "https://ex.com".to_string(),
            status: REDIRECT_STATUS,
        };
        assert!(redirect.is_redirect());
        assert_eq!(redirect.target(), Some("https://ex.com"));
        assert_eq!(redirect.outcome(), "redirect");

        let stay = RedirectDecision::Stay(StayReason::SelfRedirect);
        assert!(stay.target().is_none());
        assert_eq!(stay.outcome(), "self_redirect");
    }
}

use linkblog::domain::entities::{LinkItem, RenderContext, SiteLinkPolicy, UtmPolicy};
use linkblog::linking::{
    GlyphMarkup, RedirectDecision, StayReason, decide, decorate, glyph_renderer, resolve,
};

fn utm(preserve_existing: bool) -> UtmPolicy {
    UtmPolicy {
        enabled: true,
        preserve_existing,
        source: Some("new".to_string()),
        medium: Some("linked-post".to_string()),
        ..Default::default()
    }
}

fn redirecting_policy() -> SiteLinkPolicy {
    SiteLinkPolicy {
        redirect_singles_enabled: true,
        rewrite_permalinks_enabled: true,
        utm: utm(true),
        ..Default::default()
    }
}

#[test]
fn decoration_is_idempotent_when_preserving() {
    let policy = utm(true);
    let urls = [
        "https://x.com/a",
        "https://x.com/a?ref=1&utm_source=old",
        "http://example.com/path/?q=a+b#frag",
        "https://x.com:8443/a?list=1&list=2",
    ];

    for url in urls {
        let once = decorate(url, &policy);
        assert_eq!(decorate(&once, &policy), once, "url: {url}");
    }
}

#[test]
fn non_web_urls_are_never_decorated_or_redirected() {
    let policy = redirecting_policy();

    for url in [
        "ftp://files.example/a",
        "mailto:me@example.com",
        "javascript:alert(1)",
        "/x",
    ] {
        assert_eq!(decorate(url, &policy.utm), url);

        let item = LinkItem::new("1", "https://site.example/p/1", Some(url.to_string()));
        assert_eq!(
            decide(&item, &policy, false),
            RedirectDecision::Stay(StayReason::InvalidUrl)
        );
    }
}

#[test]
fn preserve_versus_overwrite() {
    let url = "https://x.com/a?utm_source=old";

    assert!(decorate(url, &utm(true)).contains("utm_source=old"));
    assert!(decorate(url, &utm(false)).contains("utm_source=new"));
    assert!(!decorate(url, &utm(false)).contains("utm_source=old"));
}

#[test]
fn self_redirect_is_suppressed() {
    let item = LinkItem::new(
        "1",
        "https://site.example/post-1",
        Some("https://site.example/post-1/".to_string()),
    );

    assert!(!decide(&item, &redirecting_policy(), false).is_redirect());
}

#[test]
fn bypass_always_wins() {
    let item = LinkItem::new(
        "1",
        "https://site.example/p/1",
        Some("https://elsewhere.example/story".to_string()),
    );
    let policy = redirecting_policy();

    assert!(decide(&item, &policy, false).is_redirect());
    assert_eq!(
        decide(&item, &policy, true),
        RedirectDecision::Stay(StayReason::Bypassed)
    );
}

#[test]
fn skip_rewrite_affects_listing_but_not_feed() {
    let item = LinkItem::new(
        "1",
        "https://site.example/p/1",
        Some("https://ex.com/story".to_string()),
    )
    .with_skip_rewrite(true);
    let policy = redirecting_policy();

    let listing = resolve(&item, RenderContext::Listing, &policy);
    assert_eq!(listing.title_href, item.internal_permalink);

    let feed = resolve(&item, RenderContext::Feed, &policy);
    assert_eq!(
        feed.title_href,
        decorate("https://ex.com/story", &policy.utm)
    );
}

#[test]
fn glyph_application_is_idempotent() {
    let glyph = GlyphMarkup::Text("★");
    let content = "<p>Read this.</p>";

    let once = glyph_renderer::apply(content, glyph, "https://site.example/p/1", RenderContext::Feed);
    let twice = glyph_renderer::apply(&once, glyph, "https://site.example/p/1", RenderContext::Feed);

    assert_ne!(once, content);
    assert_eq!(once, twice);
}

#[test]
fn end_to_end_redirect() {
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
            status: 302,
        }
    );
}

#![allow(dead_code)]

use std::sync::Arc;

use linkblog::domain::entities::{
    GlyphConfig, LinkItem, LinkTarget, SiteLinkPolicy, UtmPolicy,
};
use linkblog::domain::repositories::{LinkItemRepository, PolicyRepository};
use linkblog::infrastructure::memory::InMemoryLinkRepository;
use linkblog::infrastructure::policy::StaticPolicyRepository;
use linkblog::state::{AppState, SharedLinkService};

pub const BYPASS_PARAM: &str = "stay";

/// Policy with every feature switched on, as a busy link blog would run it.
pub fn full_policy() -> SiteLinkPolicy {
    SiteLinkPolicy {
        redirect_singles_enabled: true,
        rewrite_permalinks_enabled: true,
        utm: UtmPolicy {
            enabled: true,
            preserve_existing: true,
            source: Some("rss".to_string()),
            medium: Some("linked-post".to_string()),
            ..Default::default()
        },
        site_glyph: GlyphConfig {
            enabled: true,
            ..Default::default()
        },
        feed_glyph: GlyphConfig {
            enabled: true,
            text: "#".to_string(),
            ..Default::default()
        },
        glyph_direction: LinkTarget::Internal,
    }
}

/// Article link, the end-to-end example item.
pub fn article_item() -> LinkItem {
    LinkItem::new(
        "42",
        "https://mysite.test/p/42",
        Some("http://example.com/article?ref=1".to_string()),
    )
}

/// Regular post without an external URL.
pub fn plain_item() -> LinkItem {
    LinkItem::new("7", "https://mysite.test/p/7", None)
}

/// Link item whose external URL is its own permalink.
pub fn self_link_item() -> LinkItem {
    LinkItem::new(
        "9",
        "https://mysite.test/p/9",
        Some("https://MYSITE.test/p/9/".to_string()),
    )
}

/// Link item that opts out of redirects and listing rewrites.
pub fn opted_out_item() -> LinkItem {
    LinkItem::new(
        "11",
        "https://mysite.test/p/11",
        Some("https://other.example/story".to_string()),
    )
    .with_skip_redirect(true)
    .with_skip_rewrite(true)
}

pub fn default_items() -> Vec<LinkItem> {
    vec![article_item(), plain_item(), self_link_item(), opted_out_item()]
}

pub fn create_test_state(policy: SiteLinkPolicy) -> AppState {
    create_test_state_with_items(default_items(), policy)
}

pub fn create_test_state_with_items(
    items: impl IntoIterator<Item = LinkItem>,
    policy: SiteLinkPolicy,
) -> AppState {
    let item_repository: Arc<dyn LinkItemRepository> =
        Arc::new(InMemoryLinkRepository::with_items(items));
    let policy_repository: Arc<dyn PolicyRepository> =
        Arc::new(StaticPolicyRepository::new(policy));

    let link_service = Arc::new(SharedLinkService::new(item_repository, policy_repository));

    AppState::new(link_service, BYPASS_PARAM)
}

//! Link target resolution for titles and glyphs.

use serde::Serialize;
use tracing::trace;

use crate::domain::entities::{LinkItem, LinkTarget, RenderContext, SiteLinkPolicy};
use crate::linking::url_decorator::decorate;

/// Where a glyph marker links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlyphLink {
    pub href: String,
    pub target: LinkTarget,
}

impl GlyphLink {
    fn internal(item: &LinkItem) -> Self {
        Self {
            href: item.internal_permalink.clone(),
            target: LinkTarget::Internal,
        }
    }
}

/// Outcome of resolving one item in one context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Href for the item's title anchor.
    pub title_href: String,
    /// Whether `title_href` leaves the site.
    pub title_target: LinkTarget,
    /// `None` when the glyph is suppressed in this context.
    pub glyph: Option<GlyphLink>,
}

/// Resolves the title and glyph hrefs of `item` for `context`.
///
/// - **Listing**: the title points at the decorated external URL when the
///   item has one, rewrites are enabled site-wide and the item does not opt
///   out with `skip_rewrite`. The glyph follows `policy.glyph_direction`.
/// - **Single**: the title is always the permalink. The glyph is suppressed
///   unless `site_glyph.show_on_single` is set.
/// - **Feed**: the title points at the decorated external URL whenever the
///   item has one; `skip_rewrite` and the site-wide rewrite switch only
///   affect on-site listings. The glyph always returns to the permalink.
///
/// An external URL that is not an absolute `http`/`https` URL is treated as
/// absent.
pub fn resolve(item: &LinkItem, context: RenderContext, policy: &SiteLinkPolicy) -> Resolution {
    let external = item.external_web_url();

    let resolution = match context {
        RenderContext::Listing => {
            let rewrite = policy.rewrite_permalinks_enabled && !item.skip_rewrite;
            let (title_href, title_target) = match external {
                Some(url) if rewrite => (decorate(url, &policy.utm), LinkTarget::External),
                _ => (item.internal_permalink.clone(), LinkTarget::Internal),
            };

            Resolution {
                title_href,
                title_target,
                glyph: Some(site_glyph(item, external, policy)),
            }
        }
        RenderContext::Single => Resolution {
            title_href: item.internal_permalink.clone(),
            title_target: LinkTarget::Internal,
            glyph: policy
                .site_glyph
                .show_on_single
                .then(|| site_glyph(item, external, policy)),
        },
        RenderContext::Feed => {
            let (title_href, title_target) = match external {
                Some(url) => (decorate(url, &policy.utm), LinkTarget::External),
                None => (item.internal_permalink.clone(), LinkTarget::Internal),
            };

            Resolution {
                title_href,
                title_target,
                glyph: Some(GlyphLink::internal(item)),
            }
        }
    };

    trace!(
        item_id = %item.id,
        %context,
        title_href = %resolution.title_href,
        "Resolved link item"
    );

    resolution
}

fn site_glyph(item: &LinkItem, external: Option<&str>, policy: &SiteLinkPolicy) -> GlyphLink {
    match (policy.glyph_direction, external) {
        (LinkTarget::External, Some(url)) => GlyphLink {
            href: decorate(url, &policy.utm),
            target: LinkTarget::External,
        },
        _ => GlyphLink::internal(item),
    }
}

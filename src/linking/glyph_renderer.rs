//! Glyph marker rendering for titles, listings and feed content.
//!
//! The rendered fragment carries a sentinel attribute so that applying it to
//! content that already has one is a no-op.

use askama::Template;
use tracing::warn;

use crate::domain::entities::{GlyphConfig, RenderContext};

/// Attribute present on every rendered glyph.
pub const GLYPH_SENTINEL: &str = "data-linkblog-glyph";

/// Glyph display content.
///
/// The variant is chosen by the caller; the renderer never guesses whether a
/// string is markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphMarkup<'a> {
    /// Plain text, HTML-escaped on output.
    Text(&'a str),
    /// Pre-sanitized markup, inserted as-is.
    Html(&'a str),
}

impl<'a> GlyphMarkup<'a> {
    pub fn from_config(config: &'a GlyphConfig) -> Self {
        if config.is_html {
            Self::Html(&config.text)
        } else {
            Self::Text(&config.text)
        }
    }
}

#[derive(Template)]
#[template(
    source = r#"<span class="linkblog-glyph linkblog-glyph--{{ context }}" data-linkblog-glyph><a href="{{ href }}" rel="bookmark">{% if is_html %}{{ glyph|safe }}{% else %}{{ glyph }}{% endif %}</a></span>"#,
    ext = "html"
)]
struct GlyphAnchor<'a> {
    context: &'a str,
    href: &'a str,
    glyph: &'a str,
    is_html: bool,
}

/// Renders a glyph anchor pointing at `href`.
///
/// The href is always escaped. Returns an empty string if rendering fails,
/// which leaves the surrounding content untouched.
pub fn render(glyph: GlyphMarkup<'_>, href: &str, context: RenderContext) -> String {
    let (text, is_html) = match glyph {
        GlyphMarkup::Text(text) => (text, false),
        GlyphMarkup::Html(html) => (html, true),
    };

    let anchor = GlyphAnchor {
        context: context.as_str(),
        href,
        glyph: text,
        is_html,
    };

    match anchor.render() {
        Ok(html) => html,
        Err(e) => {
            warn!(error = %e, "Failed to render glyph");
            String::new()
        }
    }
}

/// Appends a glyph anchor to `content` unless one is already there.
///
/// Safe to call repeatedly on the same content.
pub fn apply(content: &str, glyph: GlyphMarkup<'_>, href: &str, context: RenderContext) -> String {
    if has_glyph(content) {
        return content.to_string();
    }

    let anchor = render(glyph, href, context);
    match (content.is_empty(), anchor.is_empty()) {
        (_, true) => content.to_string(),
        (true, false) => anchor,
        (false, false) => format!("{content} {anchor}"),
    }
}

/// Returns true if `content` already carries a rendered glyph.
pub fn has_glyph(content: &str) -> bool {
    content.contains(GLYPH_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERMALINK: &str = "https://mysite.test/p/42";

    #[test]
    fn test_render_text_glyph() {
        let html = render(GlyphMarkup::Text("★"), PERMALINK, RenderContext::Listing);

        assert!(html.contains(GLYPH_SENTINEL));
        assert!(html.contains("linkblog-glyph--listing"));
        assert!(html.contains(r#"href="https://mysite.test/p/42""#));
        assert!(html.contains(r#"rel="bookmark""#));
        assert!(html.contains(">★</a>"));
    }

    #[test]
    fn test_render_escapes_text_glyph() {
        let html = render(GlyphMarkup::Text("<b>#</b>"), PERMALINK, RenderContext::Feed);
        assert!(!html.contains("<b>"));
        assert!(html.contains("linkblog-glyph--feed"));
    }

    #[test]
    fn test_render_passes_html_glyph() {
        let html = render(
            GlyphMarkup::Html("<span class=\"icon\">#</span>"),
            PERMALINK,
            RenderContext::Listing,
        );
        assert!(html.contains("<span class=\"icon\">#</span>"));
    }

    #[test]
    fn test_render_escapes_href() {
        let html = render(
            GlyphMarkup::Text("★"),
            "https://ex.com/a?x=1&y=\"><script>",
            RenderContext::Listing,
        );
        assert!(!html.contains("<script>"));
        assert!(!html.contains("x=1&y"));
    }

    #[test]
    fn test_glyph_markup_from_config() {
        let mut config = GlyphConfig::default();
        assert_eq!(GlyphMarkup::from_config(&config), GlyphMarkup::Text("★"));

        config.is_html = true;
        config.text = "<i>∞</i>".to_string();
        assert_eq!(GlyphMarkup::from_config(&config), GlyphMarkup::Html("<i>∞</i>"));
    }

    #[test]
    fn test_apply_appends_once() {
        let glyph = GlyphMarkup::Text("★");
        let once = apply("<p>Great read.</p>", glyph, PERMALINK, RenderContext::Feed);
        let twice = apply(&once, glyph, PERMALINK, RenderContext::Feed);

        assert!(once.starts_with("<p>Great read.</p> <span"));
        assert_eq!(once, twice);
        assert_eq!(once.matches(GLYPH_SENTINEL).count(), 1);
    }

    #[test]
    fn test_apply_to_empty_content() {
        let html = apply("", GlyphMarkup::Text("★"), PERMALINK, RenderContext::Listing);
        assert!(html.starts_with("<span"));
        assert!(has_glyph(&html));
    }

    #[test]
    fn test_apply_respects_existing_sentinel() {
        let content = r#"Title <span data-linkblog-glyph>custom</span>"#;
        assert_eq!(
            apply(content, GlyphMarkup::Text("★"), PERMALINK, RenderContext::Listing),
            content
        );
    }
}

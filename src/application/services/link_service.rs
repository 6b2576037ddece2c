//! Link resolution service: repositories in, linking core decisions out.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::entities::{
    GlyphConfig, LinkItem, LinkTarget, RenderContext, SiteLinkPolicy,
};
use crate::domain::repositories::{LinkItemRepository, PolicyRepository};
use crate::error::AppError;
use crate::linking::{
    GlyphLink, GlyphMarkup, RedirectDecision, Resolution, StayReason, TransformerChain, decide,
    decorate, glyph_renderer, resolve,
};

/// One item resolved for one context, ready for a template or a feed writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedItem {
    pub id: String,
    pub context: RenderContext,
    pub title_href: String,
    pub title_target: LinkTarget,
    pub glyph: Option<GlyphLink>,
    /// Rendered glyph anchor, present only for link items with the glyph enabled.
    pub glyph_html: Option<String>,
}

/// Outcome of a single-view request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleView {
    Redirect { target: String, status: u16 },
    Stay { reason: StayReason, item: ResolvedItem },
}

/// Composes the linking core with the item store and the policy source.
///
/// Loads one policy snapshot per call and threads it through every core
/// function. External hrefs pass through the configured
/// [`TransformerChain`] after UTM decoration.
pub struct LinkService<L: LinkItemRepository + ?Sized, P: PolicyRepository + ?Sized> {
    item_repository: Arc<L>,
    policy_repository: Arc<P>,
    transformers: TransformerChain,
}

impl<L: LinkItemRepository + ?Sized, P: PolicyRepository + ?Sized> LinkService<L, P> {
    /// Creates a new link service with an empty transformer chain.
    pub fn new(item_repository: Arc<L>, policy_repository: Arc<P>) -> Self {
        Self {
            item_repository,
            policy_repository,
            transformers: TransformerChain::new(),
        }
    }

    /// Replaces the transformer chain.
    pub fn with_transformers(mut self, transformers: TransformerChain) -> Self {
        self.transformers = transformers;
        self
    }

    /// Returns the current policy snapshot.
    ///
    /// # Errors
    ///
    /// Propagates policy store errors.
    pub async fn policy(&self) -> Result<SiteLinkPolicy, AppError> {
        self.policy_repository.current().await
    }

    /// Number of items in the store.
    ///
    /// # Errors
    ///
    /// Propagates item store errors.
    pub async fn item_count(&self) -> Result<usize, AppError> {
        self.item_repository.count().await
    }

    /// Resolves one item for `context`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn resolve_item(
        &self,
        id: &str,
        context: RenderContext,
    ) -> Result<ResolvedItem, AppError> {
        let item = self.get_item(id).await?;
        let policy = self.policy().await?;

        Ok(self.resolve_with(&item, context, &policy))
    }

    /// Resolves every stored item for `context` against a single policy snapshot.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub async fn list_resolved(&self, context: RenderContext) -> Result<Vec<ResolvedItem>, AppError> {
        let items = self.item_repository.list().await?;
        let policy = self.policy().await?;

        debug!(count = items.len(), %context, "Resolving item list");

        Ok(items
            .iter()
            .map(|item| self.resolve_with(item, context, &policy))
            .collect())
    }

    /// Decides whether the single view of `id` redirects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn redirect_for(&self, id: &str, bypass: bool) -> Result<RedirectDecision, AppError> {
        let item = self.get_item(id).await?;
        let policy = self.policy().await?;

        Ok(self.decide_with(&item, &policy, bypass))
    }

    /// Serves the single view of `id`: a redirect, or the single-context
    /// resolution with the reason for staying.
    ///
    /// The item and the policy are loaded once, so the decision and the
    /// resolution always agree.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn single_view(&self, id: &str, bypass: bool) -> Result<SingleView, AppError> {
        let item = self.get_item(id).await?;
        let policy = self.policy().await?;

        Ok(match self.decide_with(&item, &policy, bypass) {
            RedirectDecision::Redirect { target, status } => SingleView::Redirect { target, status },
            RedirectDecision::Stay(reason) => SingleView::Stay {
                reason,
                item: self.resolve_with(&item, RenderContext::Single, &policy),
            },
        })
    }

    /// Applies the current UTM policy to a raw URL.
    ///
    /// # Errors
    ///
    /// Propagates policy store errors.
    pub async fn decorate_url(&self, url: &str) -> Result<String, AppError> {
        let policy = self.policy().await?;
        Ok(decorate(url, &policy.utm))
    }

    /// Appends the context's glyph to a content fragment of item `id`.
    ///
    /// Content is returned unchanged for items without a valid external URL,
    /// when the glyph is disabled or suppressed in this context, or when the
    /// content already carries a glyph.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn decorate_content(
        &self,
        id: &str,
        content: &str,
        context: RenderContext,
    ) -> Result<String, AppError> {
        let item = self.get_item(id).await?;
        let policy = self.policy().await?;

        let glyph_config = glyph_config_for(&policy, context);
        if !glyph_config.enabled || !item.has_external() {
            return Ok(content.to_string());
        }

        let resolution = self.finish(resolve(&item, context, &policy), &item, context);
        let Some(glyph) = resolution.glyph else {
            return Ok(content.to_string());
        };

        Ok(glyph_renderer::apply(
            content,
            GlyphMarkup::from_config(glyph_config),
            &glyph.href,
            context,
        ))
    }

    fn decide_with(&self, item: &LinkItem, policy: &SiteLinkPolicy, bypass: bool) -> RedirectDecision {
        let decision = match decide(item, policy, bypass) {
            RedirectDecision::Redirect { target, status } => RedirectDecision::Redirect {
                target: self.transformers.apply(target, item, RenderContext::Single),
                status,
            },
            stay => stay,
        };

        metrics::counter!(
            "linkblog_redirect_decisions_total",
            "outcome" => decision.outcome()
        )
        .increment(1);

        decision
    }

    async fn get_item(&self, id: &str) -> Result<LinkItem, AppError> {
        self.item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::item_not_found(id))
    }

    fn resolve_with(
        &self,
        item: &LinkItem,
        context: RenderContext,
        policy: &SiteLinkPolicy,
    ) -> ResolvedItem {
        let resolution = self.finish(resolve(item, context, policy), item, context);

        let glyph_config = glyph_config_for(policy, context);
        let glyph_html = resolution
            .glyph
            .as_ref()
            .filter(|_| glyph_config.enabled && item.has_external())
            .map(|glyph| {
                glyph_renderer::render(
                    GlyphMarkup::from_config(glyph_config),
                    &glyph.href,
                    context,
                )
            });

        ResolvedItem {
            id: item.id.clone(),
            context,
            title_href: resolution.title_href,
            title_target: resolution.title_target,
            glyph: resolution.glyph,
            glyph_html,
        }
    }

    /// Runs the transformer chain over every external href of a resolution.
    fn finish(&self, mut resolution: Resolution, item: &LinkItem, context: RenderContext) -> Resolution {
        if self.transformers.is_empty() {
            return resolution;
        }

        if resolution.title_target == LinkTarget::External {
            resolution.title_href = self
                .transformers
                .apply(resolution.title_href, item, context);
        }
        if let Some(glyph) = resolution.glyph.as_mut()
            && glyph.target == LinkTarget::External
        {
            glyph.href = self
                .transformers
                .apply(std::mem::take(&mut glyph.href), item, context);
        }

        resolution
    }
}

/// Feed content uses the feed glyph; listings and single views use the site glyph.
fn glyph_config_for(policy: &SiteLinkPolicy, context: RenderContext) -> &GlyphConfig {
    match context {
        RenderContext::Feed => &policy.feed_glyph,
        RenderContext::Listing | RenderContext::Single => &policy.site_glyph,
    }
}

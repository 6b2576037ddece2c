//! Ordered post-processing of external hrefs.
//!
//! A [`TransformerChain`] is composed explicitly by whoever builds the
//! [`crate::application::services::LinkService`]; there is no global registry.

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::{LinkItem, RenderContext};

/// Rewrites an external href after UTM decoration.
///
/// Implemented for any `Fn(String, &LinkItem, RenderContext) -> String`.
pub trait UrlTransformer: Send + Sync {
    fn transform(&self, url: String, item: &LinkItem, context: RenderContext) -> String;
}

impl<F> UrlTransformer for F
where
    F: Fn(String, &LinkItem, RenderContext) -> String + Send + Sync,
{
    fn transform(&self, url: String, item: &LinkItem, context: RenderContext) -> String {
        self(url, item, context)
    }
}

/// Transformers applied in registration order.
#[derive(Clone, Default)]
pub struct TransformerChain {
    transformers: Vec<Arc<dyn UrlTransformer>>,
}

impl TransformerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a transformer to the end of the chain.
    pub fn with(mut self, transformer: impl UrlTransformer + 'static) -> Self {
        self.transformers.push(Arc::new(transformer));
        self
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    pub fn apply(&self, url: String, item: &LinkItem, context: RenderContext) -> String {
        self.transformers
            .iter()
            .fold(url, |url, t| t.transform(url, item, context))
    }
}

impl fmt::Debug for TransformerChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerChain")
            .field("len", &self.transformers.len())
            .finish()
    }
}

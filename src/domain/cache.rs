//! Memoized output of the full sorted render

use super::order::PriorityOrderer;
use super::render::TagRenderer;
use super::store::TagStore;

/// Cached markup for the whole store
///
/// Never a source of truth: any store mutation must call
/// [`RenderCache::invalidate`] before the next [`RenderCache::get`].
#[derive(Debug, Clone, Default)]
pub struct RenderCache {
    valid: bool,
    sorted: bool,
    text: String,
    renders: usize,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.valid = false;
        self.text.clear();
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Number of full renders performed so far
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Cached markup, re-rendering from the store when stale
    ///
    /// Asking for a different ordering than the cached text was built
    /// with also re-renders.
    pub fn get(&mut self, store: &TagStore, sorted: bool) -> &str {
        if !self.valid || self.sorted != sorted {
            self.text = if sorted {
                TagRenderer::render_all(PriorityOrderer::order(store.entries()))
            } else {
                TagRenderer::render_all(store.entries())
            };
            self.valid = true;
            self.sorted = sorted;
            self.renders += 1;
            tracing::debug!(tags = store.len(), bytes = self.text.len(), "Rendered head tags");
        }
        &self.text
    }
}

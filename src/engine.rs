//! The style engine: token store + cache + backend behind one facade.
//!
//! Explicitly constructed at application bootstrap and passed into the
//! widget factory layer — there is no module-level global. The engine is
//! single-writer, single-thread state: every resolution is synchronous,
//! touches no I/O, and must run on the UI thread that owns the toolkit's
//! style registry.

use tracing::info;

use crate::style::backend::{StyleBackend, StyleHandle};
use crate::style::cache::{CacheStats, StyleCache};
use crate::style::resolver::{
    container, control, input, text, ContainerStyle, ControlStyle, InputStyle, ResolveError,
    TextStyle,
};
use crate::tokens::store::TokenStore;

/// One process-lifetime styling engine.
#[derive(Debug)]
pub struct StyleEngine<B> {
    tokens: TokenStore,
    cache: StyleCache,
    backend: B,
}

impl<B: StyleBackend> StyleEngine<B> {
    /// Create an engine over an already-built token store.
    pub fn new(tokens: TokenStore, backend: B) -> Self {
        info!(families = tokens.family_names().count(), "style engine ready");
        Self {
            tokens,
            cache: StyleCache::new(),
            backend,
        }
    }

    /// Create an engine with the built-in default theme.
    pub fn with_default_theme(backend: B) -> Self {
        Self::new(TokenStore::default_theme(), backend)
    }

    /// The loaded token store.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// The style backend, read-only.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Resolve a text style to a registered handle.
    pub fn resolve_text_style(&mut self, style: &TextStyle) -> Result<StyleHandle, ResolveError> {
        text::resolve(&self.tokens, &mut self.cache, &mut self.backend, style)
    }

    /// Resolve a container style to a registered handle.
    pub fn resolve_container_style(
        &mut self,
        style: &ContainerStyle,
    ) -> Result<StyleHandle, ResolveError> {
        container::resolve(&self.tokens, &mut self.cache, &mut self.backend, style)
    }

    /// Resolve an input style to a registered handle.
    pub fn resolve_input_style(&mut self, style: &InputStyle) -> Result<StyleHandle, ResolveError> {
        input::resolve(&self.tokens, &mut self.cache, &mut self.backend, style)
    }

    /// Resolve a control style to a registered handle.
    pub fn resolve_control_style(
        &mut self,
        style: &ControlStyle,
    ) -> Result<StyleHandle, ResolveError> {
        control::resolve(&self.tokens, &mut self.cache, &mut self.backend, style)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

//! Term registry - cache-backed source of auto-link terms
//!
//! Page renders can happen hundreds of times a minute, so the registry
//! reads terms through the injected cache and only falls back to the
//! content store once per TTL window.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::{TermCache, DEFAULT_TERMS_TTL};
use crate::error::Result;
use crate::store::ContentStore;

use super::LinkTerm;

/// Cache key under which the linkable term list is stored
pub const TERMS_CACHE_KEY: &str = "glossary_terms_for_linking";

/// Configuration for the term registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Cache key for the term list
    pub cache_key: String,
    /// How long a fetched term list stays cached
    pub ttl: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            cache_key: TERMS_CACHE_KEY.to_string(),
            ttl: DEFAULT_TERMS_TTL,
        }
    }
}

impl RegistryConfig {
    /// Set the cache key
    pub fn with_cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = key.into();
        self
    }

    /// Set the TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Cache-backed source of auto-link terms
///
/// Terms come back ordered for the rewriter: highest link priority
/// first, slug descending as the deterministic tie-break. An empty
/// term list is cached like any other result, so an empty glossary
/// does not turn every render into a store read.
pub struct TermRegistry {
    /// Where terms are loaded from on a cache miss
    store: Arc<dyn ContentStore>,

    /// Cache consulted before the store
    cache: Arc<dyn TermCache>,

    /// Configuration
    config: RegistryConfig,
}

impl TermRegistry {
    /// Create a registry with default configuration
    pub fn new(store: Arc<dyn ContentStore>, cache: Arc<dyn TermCache>) -> Self {
        Self::with_config(store, cache, RegistryConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(
        store: Arc<dyn ContentStore>,
        cache: Arc<dyn TermCache>,
        config: RegistryConfig,
    ) -> Self {
        Self {
            store,
            cache,
            config,
        }
    }

    /// Get the terms eligible for auto-linking, in linking order
    ///
    /// Store failures propagate to the caller; the cache never fails,
    /// it just misses.
    pub fn terms(&self) -> Result<Vec<LinkTerm>> {
        if let Some(terms) = self.cache.get(&self.config.cache_key) {
            debug!(count = terms.len(), "loaded auto-link terms from cache");
            return Ok(terms);
        }

        let mut terms = match self.store.auto_link_terms() {
            Ok(terms) => terms,
            Err(e) => {
                warn!(store = self.store.name(), error = %e, "failed to load auto-link terms");
                return Err(e);
            }
        };
        sort_for_linking(&mut terms);

        self.cache
            .set(&self.config.cache_key, &terms, Some(self.config.ttl));
        debug!(
            count = terms.len(),
            store = self.store.name(),
            "loaded auto-link terms from store"
        );
        Ok(terms)
    }

    /// Drop the cached term list so the next read hits the store
    pub fn refresh(&self) {
        self.cache.invalidate(&self.config.cache_key);
    }
}

/// Order terms for the rewriter: highest priority first, slug descending
/// as the stable tie-break
fn sort_for_linking(terms: &mut [LinkTerm]) {
    terms.sort_by(|a, b| {
        b.link_priority
            .cmp(&a.link_priority)
            .then_with(|| b.slug.cmp(&a.slug))
    });
}

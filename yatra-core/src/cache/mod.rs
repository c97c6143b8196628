//! Caching layer for auto-link terms
//!
//! The term registry hits the content store once per TTL window and
//! serves every page render in between from cache. The cache is
//! injected behind a trait so sites can swap the in-process default
//! for a shared backend.
//!
//! Features:
//! - TTL (time-to-live) support
//! - Invalidation
//! - Statistics tracking

mod term_cache;

pub use term_cache::{CacheStats, CachedTerms, InMemoryTermCache, NoopTermCache, TermCacheConfig};

use std::time::Duration;

use crate::glossary::LinkTerm;

/// Default TTL for cached auto-link terms (5 minutes)
pub const DEFAULT_TERMS_TTL: Duration = Duration::from_secs(300);

/// Cache for auto-link term lists
///
/// Implement this trait to plug in a custom cache backend. All methods
/// take `&self` to allow for interior mutability patterns. A failing
/// backend should behave like a miss, never an error.
pub trait TermCache: Send + Sync {
    /// Get the cached terms for a key, if present and unexpired
    fn get(&self, key: &str) -> Option<Vec<LinkTerm>>;

    /// Cache terms under a key, using the backend default TTL when
    /// `ttl` is `None`
    fn set(&self, key: &str, terms: &[LinkTerm], ttl: Option<Duration>);

    /// Drop the entry for a key
    fn invalidate(&self, key: &str);
}

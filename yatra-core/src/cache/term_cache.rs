//! In-process term cache
//!
//! The default [`TermCache`] backend. Entries expire by TTL and the
//! cache evicts when full, expired entries first.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};

use super::{TermCache, DEFAULT_TERMS_TTL};
use crate::glossary::LinkTerm;

/// Configuration for the in-memory term cache
#[derive(Debug, Clone)]
pub struct TermCacheConfig {
    /// Default TTL for cached term lists
    pub default_ttl: Duration,
    /// Maximum number of entries
    pub max_entries: usize,
}

impl Default for TermCacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TERMS_TTL,
            max_entries: 100,
        }
    }
}

impl TermCacheConfig {
    /// Set default TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Set max entries
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }
}

/// A cached term list
#[derive(Debug, Clone)]
pub struct CachedTerms {
    /// The cached terms
    pub terms: Vec<LinkTerm>,
    /// When this entry was cached
    pub cached_at: Instant,
    /// When this entry expires
    pub expires_at: Instant,
}

impl CachedTerms {
    /// Check if this entry has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Get time until expiration
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

/// In-memory term cache (default)
///
/// Thread-safe via RwLock. A poisoned lock degrades to cache misses
/// rather than failing the render path.
#[derive(Debug)]
pub struct InMemoryTermCache {
    /// Cached entries
    entries: RwLock<HashMap<String, CachedTerms>>,
    /// Configuration
    config: TermCacheConfig,
    /// Statistics
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl InMemoryTermCache {
    /// Create a new cache with default config
    pub fn new() -> Self {
        Self::with_config(TermCacheConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: TermCacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Clear all entries
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Get number of entries
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let entries = self.len();
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);

        CacheStats {
            entries,
            max_entries: self.config.max_entries,
            hits,
            misses,
            hit_rate: if hits + misses > 0 {
                hits as f64 / (hits + misses) as f64
            } else {
                0.0
            },
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    /// Evict expired entries
    fn evict_expired(&self, entries: &mut HashMap<String, CachedTerms>) {
        let before = entries.len();
        entries.retain(|_, v| !v.is_expired());
        let evicted = before - entries.len();
        self.evictions.fetch_add(evicted as u64, Ordering::Relaxed);
    }

    /// Evict oldest entry
    fn evict_oldest(&self, entries: &mut HashMap<String, CachedTerms>) {
        if let Some(oldest_key) = entries
            .iter()
            .min_by_key(|(_, v)| v.cached_at)
            .map(|(k, _)| k.clone())
        {
            entries.remove(&oldest_key);
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl TermCache for InMemoryTermCache {
    fn get(&self, key: &str) -> Option<Vec<LinkTerm>> {
        let entries = self.entries.read().ok()?;

        match entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.terms.clone())
            }
            _ => {
                // Expired counts as a miss
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    fn set(&self, key: &str, terms: &[LinkTerm], ttl: Option<Duration>) {
        let now = Instant::now();
        let ttl = ttl.unwrap_or(self.config.default_ttl);

        let entry = CachedTerms {
            terms: terms.to_vec(),
            cached_at: now,
            expires_at: now + ttl,
        };

        let Ok(mut entries) = self.entries.write() else {
            return;
        };

        // Check if we need to evict entries
        if entries.len() >= self.config.max_entries && !entries.contains_key(key) {
            self.evict_expired(&mut entries);

            // If still full, evict oldest
            if entries.len() >= self.config.max_entries {
                self.evict_oldest(&mut entries);
            }
        }

        entries.insert(key.to_string(), entry);
    }

    fn invalidate(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

impl Default for InMemoryTermCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Term cache that never stores anything
///
/// Useful for testing and for renders that must always see fresh terms.
#[derive(Debug, Default, Clone)]
pub struct NoopTermCache;

impl NoopTermCache {
    /// Create a no-op cache
    pub fn new() -> Self {
        Self
    }
}

impl TermCache for NoopTermCache {
    fn get(&self, _key: &str) -> Option<Vec<LinkTerm>> {
        None
    }

    fn set(&self, _key: &str, _terms: &[LinkTerm], _ttl: Option<Duration>) {}

    fn invalidate(&self, _key: &str) {}
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Current number of entries
    pub entries: usize,
    /// Maximum entries allowed
    pub max_entries: usize,
    /// Cache hits
    pub hits: u64,
    /// Cache misses
    pub misses: u64,
    /// Hit rate (0.0 - 1.0)
    pub hit_rate: f64,
    /// Total evictions
    pub evictions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn sample_terms() -> Vec<LinkTerm> {
        vec![
            LinkTerm::new("Sherpa", "sherpa"),
            LinkTerm::new("Acute Mountain Sickness", "acute-mountain-sickness")
                .with_abbreviation("AMS"),
        ]
    }

    #[test]
    fn test_basic_cache() {
        let cache = InMemoryTermCache::new();

        // Miss on empty cache
        assert!(cache.get("glossary_terms_for_linking").is_none());

        // Add entry
        cache.set("glossary_terms_for_linking", &sample_terms(), None);

        // Hit
        let terms = cache.get("glossary_terms_for_linking");
        assert!(terms.is_some());
        assert_eq!(terms.unwrap().len(), 2);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_ttl_expiration() {
        let config = TermCacheConfig::default().with_ttl(Duration::from_millis(50));
        let cache = InMemoryTermCache::with_config(config);

        cache.set("terms", &sample_terms(), None);

        // Should be cached
        assert!(cache.get("terms").is_some());

        // Wait for expiration
        thread::sleep(Duration::from_millis(60));

        // Should be expired
        assert!(cache.get("terms").is_none());
    }

    #[test]
    fn test_explicit_ttl_overrides_default() {
        let cache = InMemoryTermCache::new();

        cache.set("terms", &sample_terms(), Some(Duration::from_millis(50)));
        assert!(cache.get("terms").is_some());

        thread::sleep(Duration::from_millis(60));
        assert!(cache.get("terms").is_none());
    }

    #[test]
    fn test_invalidation() {
        let cache = InMemoryTermCache::new();

        cache.set("site-a", &sample_terms(), None);
        cache.set("site-b", &sample_terms(), None);
        assert_eq!(cache.len(), 2);

        cache.invalidate("site-a");
        assert_eq!(cache.len(), 1);
        assert!(cache.get("site-a").is_none());
        assert!(cache.get("site-b").is_some());
    }

    #[test]
    fn test_eviction_on_max_entries() {
        let config = TermCacheConfig::default().with_max_entries(3);
        let cache = InMemoryTermCache::with_config(config);

        cache.set("site-a", &sample_terms(), None);
        cache.set("site-b", &sample_terms(), None);
        cache.set("site-c", &sample_terms(), None);
        assert_eq!(cache.len(), 3);

        // Adding a 4th should trigger eviction
        cache.set("site-d", &sample_terms(), None);
        assert_eq!(cache.len(), 3);
        assert!(cache.stats().evictions > 0);
    }

    #[test]
    fn test_overwrite_same_key_does_not_evict() {
        let config = TermCacheConfig::default().with_max_entries(2);
        let cache = InMemoryTermCache::with_config(config);

        cache.set("site-a", &sample_terms(), None);
        cache.set("site-b", &sample_terms(), None);
        cache.set("site-a", &sample_terms(), None);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_noop_cache_always_misses() {
        let cache = NoopTermCache::new();
        cache.set("terms", &sample_terms(), None);
        assert!(cache.get("terms").is_none());
    }
}

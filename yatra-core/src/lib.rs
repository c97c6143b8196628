//! # Yatra Core - travel content platform
//!
//! Yatra is the content and catalog core behind a family of travel
//! sites. It provides:
//!
//! - **Catalog**: Bookable trips with pricing, itineraries, galleries and
//!   listing filters
//! - **Content**: Blog posts bound to trips and the team through a
//!   universal tag taxonomy
//! - **Glossary**: Term definitions plus automatic internal linking of
//!   term mentions in rendered article HTML
//! - **Store**: Pluggable content storage with an in-memory default and
//!   JSON seed loading
//!
//! ## Core Principle
//!
//! > Internal links are earned from content, not hand-placed.
//!
//! Trips, posts and glossary terms share one tag taxonomy, and the
//! auto-linker turns term mentions into glossary links at render time.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use yatra_core::cache::InMemoryTermCache;
//! use yatra_core::glossary::{GlossaryAutoLinker, Term, TermRegistry};
//! use yatra_core::store::InMemoryStore;
//!
//! // Build a store with one glossary term
//! let store = Arc::new(InMemoryStore::new());
//! store
//!     .insert_term(
//!         Term::new("Acute Mountain Sickness", "acute-mountain-sickness")
//!             .with_abbreviation("AMS")
//!             .with_definition("Altitude illness caused by ascending too fast."),
//!     )
//!     .unwrap();
//!
//! // Wire the registry and the auto-linker
//! let registry = TermRegistry::new(store, Arc::new(InMemoryTermCache::new()));
//! let linker = GlossaryAutoLinker::new(registry);
//!
//! // Rewrite a rendered page
//! let html = "<article><p>Watch for AMS above 3000 m.</p></article>";
//! let linked = linker.auto_link(html);
//! assert!(linked.contains("/glossary/acute-mountain-sickness/"));
//! ```

pub mod cache;
pub mod catalog;
pub mod content;
pub mod error;
pub mod glossary;
pub mod store;
pub mod taxonomy;
pub mod team;

// Re-export main types
pub use cache::{InMemoryTermCache, NoopTermCache, TermCache, DEFAULT_TERMS_TTL};
pub use catalog::{
    Difficulty, DurationBand, GalleryImage, Season, Trip, TripFilter, TripSort, TripType,
};
pub use content::{BlogCategory, BlogPost, ContentKind, PostFilter, PostStatus};
pub use error::{ErrorCategory, ErrorDetail, ErrorResponse, Result, YatraError};
pub use glossary::{
    rewrite, GlossaryAutoLinker, LinkTerm, RegistryConfig, Term, TermRegistry,
    GLOSSARY_LINK_CLASS, TERMS_CACHE_KEY,
};
pub use store::{ContentStore, InMemoryStore, SeedData, StoreCounts, TagContent};
pub use taxonomy::{Region, Tag};
pub use team::{MemberRole, TeamMember};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

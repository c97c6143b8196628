//! Pluggable content store
//!
//! This module provides the trait the glossary registry reads terms
//! through, plus the default in-memory implementation that also backs
//! the site-facing queries (listings, detail-page relations, seeds).
//! Sites with a database implement [`ContentStore`] over it.
//!
//! # Example
//!
//! ```rust
//! use yatra_core::store::{ContentStore, InMemoryStore};
//!
//! // Default in-memory store
//! let store = InMemoryStore::new();
//! assert!(store.health_check().is_ok());
//!
//! // Or use a custom backend
//! // let store = PostgresStore::connect(&dsn)?;
//! ```

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::path::Path;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::catalog::{Trip, TripFilter, TripSort};
use crate::content::{sort_for_listing, BlogCategory, BlogPost, PostFilter};
use crate::error::{Result, YatraError};
use crate::glossary::{LinkTerm, Term};
use crate::taxonomy::{Region, Tag};
use crate::team::TeamMember;

/// Content store trait used by the auto-link registry
///
/// Implement this trait to read terms from a custom backend.
/// All methods take `&self` to allow for interior mutability patterns.
pub trait ContentStore: Send + Sync {
    /// Get every term eligible for auto-linking, in no particular order
    fn auto_link_terms(&self) -> Result<Vec<LinkTerm>>;

    /// Check if the backend is healthy
    fn health_check(&self) -> Result<()>;

    /// Get backend name (for logging/debugging)
    fn name(&self) -> &'static str;
}

/// Published trips and posts carrying a given tag
#[derive(Debug, Clone)]
pub struct TagContent {
    /// Published trips with the tag
    pub trips: Vec<Trip>,
    /// Published posts with the tag
    pub posts: Vec<BlogPost>,
}

/// Record counts per collection
#[derive(Debug, Clone, Copy)]
pub struct StoreCounts {
    pub tags: usize,
    pub regions: usize,
    pub trips: usize,
    pub posts: usize,
    pub categories: usize,
    pub members: usize,
    pub terms: usize,
}

/// Bulk content for seeding a store
///
/// Collections load in dependency order (taxonomy before content), so a
/// single file can describe a whole site.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub categories: Vec<BlogCategory>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub terms: Vec<Term>,
}

/// In-memory content store (default)
///
/// Collections are keyed by slug. Records are lost on restart.
/// Thread-safe via RwLock.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tags: RwLock<HashMap<String, Tag>>,
    regions: RwLock<HashMap<String, Region>>,
    categories: RwLock<HashMap<String, BlogCategory>>,
    members: RwLock<HashMap<String, TeamMember>>,
    trips: RwLock<HashMap<String, Trip>>,
    posts: RwLock<HashMap<String, BlogPost>>,
    terms: RwLock<HashMap<String, Term>>,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from seed JSON
    pub fn from_seed_json(json: &str) -> Result<Self> {
        let seed: SeedData =
            serde_json::from_str(json).map_err(|e| YatraError::InvalidSeedData {
                reason: e.to_string(),
            })?;
        let store = Self::new();
        store.load_seed(seed)?;
        Ok(store)
    }

    /// Create a store from a seed JSON file
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| YatraError::SeedLoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_seed_json(&json)
    }

    /// Load seed data into this store
    pub fn load_seed(&self, seed: SeedData) -> Result<()> {
        for tag in seed.tags {
            self.insert_tag(tag)?;
        }
        for region in seed.regions {
            self.insert_region(region)?;
        }
        for category in seed.categories {
            self.insert_category(category)?;
        }
        for member in seed.members {
            self.insert_member(member)?;
        }
        for trip in seed.trips {
            self.insert_trip(trip)?;
        }
        for post in seed.posts {
            self.insert_post(post)?;
        }
        for term in seed.terms {
            self.insert_term(term)?;
        }
        Ok(())
    }

    /// Get record counts per collection
    pub fn counts(&self) -> Result<StoreCounts> {
        Ok(StoreCounts {
            tags: self.tags.read().map_err(|_| YatraError::StoreLocked)?.len(),
            regions: self.regions.read().map_err(|_| YatraError::StoreLocked)?.len(),
            trips: self.trips.read().map_err(|_| YatraError::StoreLocked)?.len(),
            posts: self.posts.read().map_err(|_| YatraError::StoreLocked)?.len(),
            categories: self.categories.read().map_err(|_| YatraError::StoreLocked)?.len(),
            members: self.members.read().map_err(|_| YatraError::StoreLocked)?.len(),
            terms: self.terms.read().map_err(|_| YatraError::StoreLocked)?.len(),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Inserts
    // ═══════════════════════════════════════════════════════════════════════

    /// Insert a tag
    pub fn insert_tag(&self, tag: Tag) -> Result<()> {
        tag.validate().map_err(|errors| YatraError::InvalidRecord {
            entity: "tag".to_string(),
            reason: errors.join("; "),
        })?;
        let mut tags = self.tags.write().map_err(|_| YatraError::StoreLocked)?;
        if tags.contains_key(&tag.slug) {
            return Err(YatraError::DuplicateSlug {
                entity: "tag".to_string(),
                slug: tag.slug,
            });
        }
        tags.insert(tag.slug.clone(), tag);
        Ok(())
    }

    /// Insert a region
    pub fn insert_region(&self, region: Region) -> Result<()> {
        region.validate().map_err(|errors| YatraError::InvalidRecord {
            entity: "region".to_string(),
            reason: errors.join("; "),
        })?;
        let mut regions = self.regions.write().map_err(|_| YatraError::StoreLocked)?;
        if regions.contains_key(&region.slug) {
            return Err(YatraError::DuplicateSlug {
                entity: "region".to_string(),
                slug: region.slug,
            });
        }
        regions.insert(region.slug.clone(), region);
        Ok(())
    }

    /// Insert a blog category
    pub fn insert_category(&self, category: BlogCategory) -> Result<()> {
        if category.slug.is_empty() {
            return Err(YatraError::InvalidRecord {
                entity: "category".to_string(),
                reason: "slug cannot be empty".to_string(),
            });
        }
        let mut categories = self.categories.write().map_err(|_| YatraError::StoreLocked)?;
        if categories.contains_key(&category.slug) {
            return Err(YatraError::DuplicateSlug {
                entity: "category".to_string(),
                slug: category.slug,
            });
        }
        categories.insert(category.slug.clone(), category);
        Ok(())
    }

    /// Insert a team member
    pub fn insert_member(&self, member: TeamMember) -> Result<()> {
        member.validate().map_err(|errors| YatraError::InvalidRecord {
            entity: "member".to_string(),
            reason: errors.join("; "),
        })?;
        let mut members = self.members.write().map_err(|_| YatraError::StoreLocked)?;
        if members.contains_key(&member.slug) {
            return Err(YatraError::DuplicateSlug {
                entity: "member".to_string(),
                slug: member.slug,
            });
        }
        members.insert(member.slug.clone(), member);
        Ok(())
    }

    /// Insert a trip, filling blank SEO meta fields
    pub fn insert_trip(&self, mut trip: Trip) -> Result<()> {
        trip.validate().map_err(|errors| YatraError::InvalidRecord {
            entity: "trip".to_string(),
            reason: errors.join("; "),
        })?;
        trip.apply_meta_defaults();
        let mut trips = self.trips.write().map_err(|_| YatraError::StoreLocked)?;
        if trips.contains_key(&trip.slug) {
            return Err(YatraError::DuplicateSlug {
                entity: "trip".to_string(),
                slug: trip.slug,
            });
        }
        trips.insert(trip.slug.clone(), trip);
        Ok(())
    }

    /// Insert a post, filling blank SEO meta fields and stamping
    /// `published_at` when the post arrives already published
    pub fn insert_post(&self, mut post: BlogPost) -> Result<()> {
        post.validate().map_err(|errors| YatraError::InvalidRecord {
            entity: "post".to_string(),
            reason: errors.join("; "),
        })?;
        post.apply_publish_defaults();
        let mut posts = self.posts.write().map_err(|_| YatraError::StoreLocked)?;
        if posts.contains_key(&post.slug) {
            return Err(YatraError::DuplicateSlug {
                entity: "post".to_string(),
                slug: post.slug,
            });
        }
        posts.insert(post.slug.clone(), post);
        Ok(())
    }

    /// Insert a glossary term, filling blank SEO meta fields
    pub fn insert_term(&self, mut term: Term) -> Result<()> {
        term.validate().map_err(|errors| YatraError::InvalidRecord {
            entity: "term".to_string(),
            reason: errors.join("; "),
        })?;
        term.apply_meta_defaults();
        let mut terms = self.terms.write().map_err(|_| YatraError::StoreLocked)?;
        if terms.contains_key(&term.slug) {
            return Err(YatraError::DuplicateSlug {
                entity: "term".to_string(),
                slug: term.slug,
            });
        }
        terms.insert(term.slug.clone(), term);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Single-record lookups
    // ═══════════════════════════════════════════════════════════════════════

    /// Get a tag by slug
    pub fn get_tag(&self, slug: &str) -> Result<Tag> {
        let tags = self.tags.read().map_err(|_| YatraError::StoreLocked)?;
        tags.get(slug).cloned().ok_or_else(|| YatraError::TagNotFound {
            slug: slug.to_string(),
        })
    }

    /// Get a region by slug
    pub fn get_region(&self, slug: &str) -> Result<Region> {
        let regions = self.regions.read().map_err(|_| YatraError::StoreLocked)?;
        regions
            .get(slug)
            .cloned()
            .ok_or_else(|| YatraError::RegionNotFound {
                slug: slug.to_string(),
            })
    }

    /// Get a blog category by slug
    pub fn get_category(&self, slug: &str) -> Result<BlogCategory> {
        let categories = self.categories.read().map_err(|_| YatraError::StoreLocked)?;
        categories
            .get(slug)
            .cloned()
            .ok_or_else(|| YatraError::CategoryNotFound {
                slug: slug.to_string(),
            })
    }

    /// Get a team member by slug
    pub fn get_member(&self, slug: &str) -> Result<TeamMember> {
        let members = self.members.read().map_err(|_| YatraError::StoreLocked)?;
        members
            .get(slug)
            .cloned()
            .ok_or_else(|| YatraError::MemberNotFound {
                slug: slug.to_string(),
            })
    }

    /// Get a trip by slug
    pub fn get_trip(&self, slug: &str) -> Result<Trip> {
        let trips = self.trips.read().map_err(|_| YatraError::StoreLocked)?;
        trips.get(slug).cloned().ok_or_else(|| YatraError::TripNotFound {
            slug: slug.to_string(),
        })
    }

    /// Get a post by slug
    pub fn get_post(&self, slug: &str) -> Result<BlogPost> {
        let posts = self.posts.read().map_err(|_| YatraError::StoreLocked)?;
        posts.get(slug).cloned().ok_or_else(|| YatraError::PostNotFound {
            slug: slug.to_string(),
        })
    }

    /// Get a glossary term by slug
    pub fn get_term(&self, slug: &str) -> Result<Term> {
        let terms = self.terms.read().map_err(|_| YatraError::StoreLocked)?;
        terms.get(slug).cloned().ok_or_else(|| YatraError::TermNotFound {
            slug: slug.to_string(),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Taxonomy queries
    // ═══════════════════════════════════════════════════════════════════════

    /// All tags, in display order
    pub fn tags(&self) -> Result<Vec<Tag>> {
        let tags = self.tags.read().map_err(|_| YatraError::StoreLocked)?;
        let mut all: Vec<Tag> = tags.values().cloned().collect();
        all.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(all)
    }

    /// Featured tags for landing pages
    pub fn featured_tags(&self, limit: usize) -> Result<Vec<Tag>> {
        let mut all = self.tags()?;
        all.retain(|t| t.is_featured);
        all.truncate(limit);
        Ok(all)
    }

    /// Published trips and posts carrying a tag
    pub fn tag_content(&self, slug: &str) -> Result<TagContent> {
        let tag = self.get_tag(slug)?;

        let trips = self.trips.read().map_err(|_| YatraError::StoreLocked)?;
        let mut tagged_trips: Vec<Trip> = trips
            .values()
            .filter(|t| t.is_published && t.tags.contains(&tag.slug))
            .cloned()
            .collect();
        TripSort::Featured.sort(&mut tagged_trips);

        let posts = self.posts.read().map_err(|_| YatraError::StoreLocked)?;
        let mut tagged_posts: Vec<BlogPost> = posts
            .values()
            .filter(|p| p.is_published() && p.tags.contains(&tag.slug))
            .cloned()
            .collect();
        sort_for_listing(&mut tagged_posts);

        Ok(TagContent {
            trips: tagged_trips,
            posts: tagged_posts,
        })
    }

    /// Count of published trips carrying a tag
    pub fn tag_trip_count(&self, slug: &str) -> Result<usize> {
        let trips = self.trips.read().map_err(|_| YatraError::StoreLocked)?;
        Ok(trips
            .values()
            .filter(|t| t.is_published && t.tags.iter().any(|s| s == slug))
            .count())
    }

    /// Count of published posts carrying a tag
    pub fn tag_post_count(&self, slug: &str) -> Result<usize> {
        let posts = self.posts.read().map_err(|_| YatraError::StoreLocked)?;
        Ok(posts
            .values()
            .filter(|p| p.is_published() && p.tags.iter().any(|s| s == slug))
            .count())
    }

    /// All regions, in display order
    pub fn regions(&self) -> Result<Vec<Region>> {
        let regions = self.regions.read().map_err(|_| YatraError::StoreLocked)?;
        let mut all: Vec<Region> = regions.values().cloned().collect();
        sort_regions(&mut all);
        Ok(all)
    }

    /// Top-level regions, in display order
    pub fn root_regions(&self) -> Result<Vec<Region>> {
        let mut all = self.regions()?;
        all.retain(Region::is_root);
        Ok(all)
    }

    /// Featured regions for landing pages
    pub fn featured_regions(&self, limit: usize) -> Result<Vec<Region>> {
        let mut all = self.regions()?;
        all.retain(|r| r.is_featured);
        all.truncate(limit);
        Ok(all)
    }

    /// Direct children of a region, in display order
    pub fn child_regions(&self, slug: &str) -> Result<Vec<Region>> {
        let regions = self.regions.read().map_err(|_| YatraError::StoreLocked)?;
        if !regions.contains_key(slug) {
            return Err(YatraError::RegionNotFound {
                slug: slug.to_string(),
            });
        }
        let mut children: Vec<Region> = regions
            .values()
            .filter(|r| r.parent.as_deref() == Some(slug))
            .cloned()
            .collect();
        sort_regions(&mut children);
        Ok(children)
    }

    /// Ancestor chain of a region, root first
    ///
    /// Dangling parent slugs end the chain; cycles are cut rather than
    /// looped.
    pub fn region_ancestors(&self, slug: &str) -> Result<Vec<Region>> {
        let regions = self.regions.read().map_err(|_| YatraError::StoreLocked)?;
        let region = regions.get(slug).ok_or_else(|| YatraError::RegionNotFound {
            slug: slug.to_string(),
        })?;

        let mut ancestors: Vec<Region> = vec![];
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(slug);

        let mut current = region.parent.as_deref();
        while let Some(parent_slug) = current {
            if !seen.insert(parent_slug) {
                break;
            }
            match regions.get(parent_slug) {
                Some(parent) => {
                    ancestors.insert(0, parent.clone());
                    current = parent.parent.as_deref();
                }
                None => break,
            }
        }
        Ok(ancestors)
    }

    /// All descendants of a region, nearest first
    pub fn region_descendants(&self, slug: &str) -> Result<Vec<Region>> {
        let regions = self.regions.read().map_err(|_| YatraError::StoreLocked)?;
        if !regions.contains_key(slug) {
            return Err(YatraError::RegionNotFound {
                slug: slug.to_string(),
            });
        }

        let mut descendants: Vec<Region> = vec![];
        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(slug.to_string());
        let mut queue: VecDeque<String> = VecDeque::new();
        queue.push_back(slug.to_string());

        while let Some(current) = queue.pop_front() {
            let mut children: Vec<Region> = regions
                .values()
                .filter(|r| r.parent.as_deref() == Some(current.as_str()))
                .cloned()
                .collect();
            sort_regions(&mut children);
            for child in children {
                if seen.insert(child.slug.clone()) {
                    queue.push_back(child.slug.clone());
                    descendants.push(child);
                }
            }
        }
        Ok(descendants)
    }

    /// Published trips in a region and all of its sub-regions
    pub fn region_trips(&self, slug: &str) -> Result<Vec<Trip>> {
        let mut region_slugs: HashSet<String> = HashSet::new();
        region_slugs.insert(slug.to_string());
        for descendant in self.region_descendants(slug)? {
            region_slugs.insert(descendant.slug);
        }

        let trips = self.trips.read().map_err(|_| YatraError::StoreLocked)?;
        let mut matched: Vec<Trip> = trips
            .values()
            .filter(|t| {
                t.is_published
                    && t.region
                        .as_ref()
                        .map(|r| region_slugs.contains(r))
                        .unwrap_or(false)
            })
            .cloned()
            .collect();
        TripSort::Featured.sort(&mut matched);
        Ok(matched)
    }

    /// Published posts set in a region
    pub fn region_posts(&self, slug: &str, limit: usize) -> Result<Vec<BlogPost>> {
        let posts = self.posts.read().map_err(|_| YatraError::StoreLocked)?;
        let mut matched: Vec<BlogPost> = posts
            .values()
            .filter(|p| p.is_published() && p.region.as_deref() == Some(slug))
            .cloned()
            .collect();
        sort_for_listing(&mut matched);
        matched.truncate(limit);
        Ok(matched)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Trip queries
    // ═══════════════════════════════════════════════════════════════════════

    /// All published trips, featured first then newest
    pub fn published_trips(&self) -> Result<Vec<Trip>> {
        let trips = self.trips.read().map_err(|_| YatraError::StoreLocked)?;
        let mut published: Vec<Trip> = trips.values().filter(|t| t.is_published).cloned().collect();
        TripSort::Featured.sort(&mut published);
        Ok(published)
    }

    /// Featured published trips for landing pages
    pub fn featured_trips(&self, limit: usize) -> Result<Vec<Trip>> {
        let mut published = self.published_trips()?;
        published.retain(|t| t.is_featured);
        published.truncate(limit);
        Ok(published)
    }

    /// Published trips matching a filter, in the filter's sort order
    pub fn find_trips(&self, filter: &TripFilter) -> Result<Vec<Trip>> {
        let trips = self.trips.read().map_err(|_| YatraError::StoreLocked)?;
        let mut matched: Vec<Trip> = trips
            .values()
            .filter(|t| t.is_published && filter.matches(t))
            .cloned()
            .collect();
        filter.sort.sort(&mut matched);
        Ok(matched)
    }

    /// Posts to show on a trip page
    ///
    /// Explicitly linked published posts win; when none exist, falls back
    /// to published posts sharing a tag with the trip.
    pub fn related_guides(&self, trip_slug: &str, limit: usize) -> Result<Vec<BlogPost>> {
        let trip = self.get_trip(trip_slug)?;
        let posts = self.posts.read().map_err(|_| YatraError::StoreLocked)?;

        let mut explicit: Vec<BlogPost> = posts
            .values()
            .filter(|p| p.is_published() && p.linked_trips.iter().any(|s| s == trip_slug))
            .cloned()
            .collect();
        if !explicit.is_empty() {
            sort_for_listing(&mut explicit);
            explicit.truncate(limit);
            return Ok(explicit);
        }

        let mut tagged: Vec<BlogPost> = posts
            .values()
            .filter(|p| p.is_published() && p.shares_tag_with(&trip.tags))
            .cloned()
            .collect();
        sort_for_listing(&mut tagged);
        tagged.truncate(limit);
        Ok(tagged)
    }

    /// Published trips similar to the given one
    ///
    /// Same region or shared tags; shared tags only when the trip has no
    /// region.
    pub fn similar_trips(&self, trip_slug: &str, limit: usize) -> Result<Vec<Trip>> {
        let trip = self.get_trip(trip_slug)?;
        let trips = self.trips.read().map_err(|_| YatraError::StoreLocked)?;

        let mut similar: Vec<Trip> = trips
            .values()
            .filter(|t| t.is_published && t.slug != trip.slug)
            .filter(|t| match &trip.region {
                Some(region) => {
                    t.region.as_ref() == Some(region) || t.shares_tag_with(&trip.tags)
                }
                None => t.shares_tag_with(&trip.tags),
            })
            .cloned()
            .collect();
        TripSort::Featured.sort(&mut similar);
        similar.truncate(limit);
        Ok(similar)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Post queries
    // ═══════════════════════════════════════════════════════════════════════

    /// All published posts, featured first then newest
    pub fn published_posts(&self) -> Result<Vec<BlogPost>> {
        let posts = self.posts.read().map_err(|_| YatraError::StoreLocked)?;
        let mut published: Vec<BlogPost> =
            posts.values().filter(|p| p.is_published()).cloned().collect();
        sort_for_listing(&mut published);
        Ok(published)
    }

    /// Latest published posts for landing pages
    pub fn latest_posts(&self, limit: usize) -> Result<Vec<BlogPost>> {
        let mut published = self.published_posts()?;
        published.truncate(limit);
        Ok(published)
    }

    /// Published posts matching a filter, featured first then newest
    pub fn find_posts(&self, filter: &PostFilter) -> Result<Vec<BlogPost>> {
        let posts = self.posts.read().map_err(|_| YatraError::StoreLocked)?;
        let mut matched: Vec<BlogPost> = posts
            .values()
            .filter(|p| p.is_published() && filter.matches(p))
            .cloned()
            .collect();
        sort_for_listing(&mut matched);
        Ok(matched)
    }

    /// All blog categories, by name
    // TODO: post filtering by category once category landing pages ship
    pub fn blog_categories(&self) -> Result<Vec<BlogCategory>> {
        let categories = self.categories.read().map_err(|_| YatraError::StoreLocked)?;
        let mut all: Vec<BlogCategory> = categories.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    /// Trips to recommend at the end of a post
    ///
    /// Explicitly linked published trips win, in the order the post lists
    /// them; when none exist, falls back to published trips sharing a tag.
    pub fn recommended_trips(&self, post_slug: &str, limit: usize) -> Result<Vec<Trip>> {
        let post = self.get_post(post_slug)?;
        let trips = self.trips.read().map_err(|_| YatraError::StoreLocked)?;

        let explicit: Vec<Trip> = post
            .linked_trips
            .iter()
            .filter_map(|slug| trips.get(slug))
            .filter(|t| t.is_published)
            .cloned()
            .take(limit)
            .collect();
        if !explicit.is_empty() {
            return Ok(explicit);
        }

        let mut tagged: Vec<Trip> = trips
            .values()
            .filter(|t| t.is_published && t.shares_tag_with(&post.tags))
            .cloned()
            .collect();
        TripSort::Featured.sort(&mut tagged);
        tagged.truncate(limit);
        Ok(tagged)
    }

    /// Published posts sharing a tag with the given one, excluding it
    pub fn related_posts(&self, post_slug: &str, limit: usize) -> Result<Vec<BlogPost>> {
        let post = self.get_post(post_slug)?;
        let posts = self.posts.read().map_err(|_| YatraError::StoreLocked)?;

        let mut related: Vec<BlogPost> = posts
            .values()
            .filter(|p| p.is_published() && p.slug != post.slug && p.shares_tag_with(&post.tags))
            .cloned()
            .collect();
        sort_for_listing(&mut related);
        related.truncate(limit);
        Ok(related)
    }

    /// Increment a post's view counter, returning the new count
    pub fn increment_post_views(&self, slug: &str) -> Result<u64> {
        let mut posts = self.posts.write().map_err(|_| YatraError::StoreLocked)?;
        let post = posts.get_mut(slug).ok_or_else(|| YatraError::PostNotFound {
            slug: slug.to_string(),
        })?;
        post.view_count += 1;
        Ok(post.view_count)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Team queries
    // ═══════════════════════════════════════════════════════════════════════

    /// Active team members, in display order
    pub fn team_members(&self) -> Result<Vec<TeamMember>> {
        let members = self.members.read().map_err(|_| YatraError::StoreLocked)?;
        let mut active: Vec<TeamMember> =
            members.values().filter(|m| m.is_active).cloned().collect();
        active.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(active)
    }

    /// Published posts authored by a member
    pub fn member_posts(&self, slug: &str) -> Result<Vec<BlogPost>> {
        let _member = self.get_member(slug)?;
        let posts = self.posts.read().map_err(|_| YatraError::StoreLocked)?;
        let mut authored: Vec<BlogPost> = posts
            .values()
            .filter(|p| p.is_published() && p.author.as_deref() == Some(slug))
            .cloned()
            .collect();
        sort_for_listing(&mut authored);
        Ok(authored)
    }

    /// Count of published posts authored by a member
    pub fn member_post_count(&self, slug: &str) -> Result<usize> {
        Ok(self.member_posts(slug)?.len())
    }

    /// Unique tags across a member's published posts, in display order
    pub fn member_expertise_tags(&self, slug: &str) -> Result<Vec<Tag>> {
        let authored = self.member_posts(slug)?;
        let mut slugs: HashSet<String> = HashSet::new();
        for post in &authored {
            slugs.extend(post.tags.iter().cloned());
        }

        let tags = self.tags.read().map_err(|_| YatraError::StoreLocked)?;
        let mut expertise: Vec<Tag> = slugs.iter().filter_map(|s| tags.get(s)).cloned().collect();
        expertise.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(expertise)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Glossary queries
    // ═══════════════════════════════════════════════════════════════════════

    /// All glossary terms, by name
    pub fn terms(&self) -> Result<Vec<Term>> {
        let terms = self.terms.read().map_err(|_| YatraError::StoreLocked)?;
        let mut all: Vec<Term> = terms.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    /// Terms grouped by the first letter of their name, for A-Z pages
    pub fn terms_by_letter(&self) -> Result<BTreeMap<String, Vec<Term>>> {
        let mut grouped: BTreeMap<String, Vec<Term>> = BTreeMap::new();
        for term in self.terms()? {
            let Some(first) = term.name.chars().next() else {
                continue;
            };
            let letter: String = first.to_uppercase().collect();
            grouped.entry(letter).or_default().push(term);
        }
        Ok(grouped)
    }

    /// Related glossary terms, in the order the term lists them
    pub fn related_terms(&self, slug: &str, limit: usize) -> Result<Vec<Term>> {
        let term = self.get_term(slug)?;
        let terms = self.terms.read().map_err(|_| YatraError::StoreLocked)?;
        Ok(term
            .related_terms
            .iter()
            .filter_map(|s| terms.get(s))
            .cloned()
            .take(limit)
            .collect())
    }

    /// Published trips where a term is relevant
    pub fn term_trips(&self, slug: &str, limit: usize) -> Result<Vec<Trip>> {
        let term = self.get_term(slug)?;
        let trips = self.trips.read().map_err(|_| YatraError::StoreLocked)?;
        Ok(term
            .related_trips
            .iter()
            .filter_map(|s| trips.get(s))
            .filter(|t| t.is_published)
            .cloned()
            .take(limit)
            .collect())
    }
}

impl ContentStore for InMemoryStore {
    fn auto_link_terms(&self) -> Result<Vec<LinkTerm>> {
        let terms = self.terms.read().map_err(|_| YatraError::StoreLocked)?;
        Ok(terms
            .values()
            .filter(|t| t.auto_link)
            .map(Term::to_link_term)
            .collect())
    }

    fn health_check(&self) -> Result<()> {
        // In-memory is healthy if we can acquire the lock
        let _terms = self.terms.read().map_err(|_| YatraError::StoreLocked)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

fn sort_regions(regions: &mut [Region]) {
    regions.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.name.cmp(&b.name))
    });
}

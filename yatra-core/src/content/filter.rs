//! Blog post filtering and ordering

use serde::{Deserialize, Serialize};

use super::post::{BlogPost, ContentKind};

/// Filter criteria for blog listing pages
///
/// All criteria combine with AND semantics. Filters are applied to
/// published posts only; the store handles the visibility cut.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostFilter {
    /// Match posts carrying this tag slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Match posts of this editorial category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentKind>,

    /// Match posts by this author slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Case-insensitive text search over title, excerpt and content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PostFilter {
    /// Create an empty filter that matches every post
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a tag slug
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Restrict to an editorial category
    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restrict to an author slug
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Restrict to a search phrase
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Whether the given post satisfies every criterion
    pub fn matches(&self, post: &BlogPost) -> bool {
        if let Some(tag) = &self.tag {
            if !post.tags.contains(tag) {
                return false;
            }
        }

        if let Some(kind) = &self.kind {
            if post.content_kind != *kind {
                return false;
            }
        }

        if let Some(author) = &self.author {
            if post.author.as_deref() != Some(author.as_str()) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = post.title.to_lowercase().contains(&needle)
                || post.excerpt.to_lowercase().contains(&needle)
                || post.content.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        true
    }
}

/// Order posts for listing pages: featured first, then newest by
/// publication date
pub fn sort_for_listing(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| {
        b.is_featured
            .cmp(&a.is_featured)
            .then(b.published_at.cmp(&a.published_at))
    });
}

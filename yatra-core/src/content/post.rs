//! Blog posts and categories - the marketing content layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status of a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Review,
    Published,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Draft => write!(f, "draft"),
            PostStatus::Review => write!(f, "review"),
            PostStatus::Published => write!(f, "published"),
        }
    }
}

/// Editorial category of a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Guide,
    Story,
    Tips,
    News,
    Gear,
    Culture,
    Safety,
}

impl ContentKind {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Guide => "Travel Guide",
            ContentKind::Story => "Travel Story",
            ContentKind::Tips => "Tips & Advice",
            ContentKind::News => "News & Updates",
            ContentKind::Gear => "Gear Reviews",
            ContentKind::Culture => "Culture & History",
            ContentKind::Safety => "Safety & Health",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Guide => write!(f, "guide"),
            ContentKind::Story => write!(f, "story"),
            ContentKind::Tips => write!(f, "tips"),
            ContentKind::News => write!(f, "news"),
            ContentKind::Gear => write!(f, "gear"),
            ContentKind::Culture => write!(f, "culture"),
            ContentKind::Safety => write!(f, "safety"),
        }
    }
}

/// A hierarchical blog category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogCategory {
    /// Display name
    pub name: String,

    /// URL-safe unique identifier
    pub slug: String,

    /// Slug of the parent category, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Description shown on the category page
    #[serde(default)]
    pub description: String,
}

impl BlogCategory {
    /// Create a new top-level category
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            parent: None,
            description: String::new(),
        }
    }

    /// Set the parent category slug
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// A marketing blog post
///
/// Posts share the universal tag taxonomy with trips and carry explicit
/// trip links, which together drive the "recommended trips" block at the
/// end of an article. Author attribution points at the team layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    /// Display title
    pub title: String,

    /// URL-safe unique identifier
    pub slug: String,

    /// Brief summary for listings and social sharing
    #[serde(default)]
    pub excerpt: String,

    /// Main content (HTML supported)
    #[serde(default)]
    pub content: String,

    /// Editorial category
    #[serde(default)]
    pub content_kind: ContentKind,

    /// Trip slugs to feature as recommendations in this post
    #[serde(default)]
    pub linked_trips: Vec<String>,

    /// Tag slugs for categorization (shared with trips)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Slug of the geographic region context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Slug of the blog category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Slug of the authoring team member
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Featured image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// SEO title (auto-defaults to the post title)
    #[serde(default)]
    pub meta_title: String,

    /// SEO description (auto-defaults to the excerpt)
    #[serde(default)]
    pub meta_description: String,

    /// Primary keyword for SEO optimization
    #[serde(default)]
    pub focus_keyword: String,

    /// Publication status
    #[serde(default)]
    pub status: PostStatus,

    /// Whether the post is pinned to featured slots
    #[serde(default)]
    pub is_featured: bool,

    /// Set the first time the post reaches published status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Page view counter
    #[serde(default)]
    pub view_count: u64,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new draft post with the given title and slug
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            title: title.into(),
            slug: slug.into(),
            excerpt: String::new(),
            content: String::new(),
            content_kind: ContentKind::default(),
            linked_trips: vec![],
            tags: vec![],
            region: None,
            category: None,
            author: None,
            featured_image: None,
            meta_title: String::new(),
            meta_description: String::new(),
            focus_keyword: String::new(),
            status: PostStatus::Draft,
            is_featured: false,
            published_at: None,
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the excerpt
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Set the main content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the editorial category
    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.content_kind = kind;
        self
    }

    /// Add a tag slug
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add an explicitly linked trip slug
    pub fn with_linked_trip(mut self, trip: impl Into<String>) -> Self {
        self.linked_trips.push(trip.into());
        self
    }

    /// Set the author slug
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the region slug
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Move straight to published status
    pub fn published(mut self) -> Self {
        self.status = PostStatus::Published;
        self
    }

    /// Mark as featured
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Whether this post is visible on the public site
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Estimated reading time based on word count (200 wpm, minimum 1)
    pub fn read_time_minutes(&self) -> u64 {
        let word_count = self.content.split_whitespace().count() as u64;
        (word_count / 200).max(1)
    }

    /// Whether this post shares at least one tag with the given set
    pub fn shares_tag_with(&self, tags: &[String]) -> bool {
        self.tags.iter().any(|t| tags.contains(t))
    }

    /// Canonical path for this post's detail page
    pub fn url_path(&self) -> String {
        format!("/blog/{}/", self.slug)
    }

    /// Fill SEO meta fields from content when left blank, and stamp
    /// `published_at` on first publish
    pub fn apply_publish_defaults(&mut self) {
        if self.meta_title.is_empty() {
            self.meta_title = truncate_chars(&self.title, 70);
        }
        if self.meta_description.is_empty() {
            self.meta_description = truncate_chars(&self.excerpt, 160);
        }
        if self.status == PostStatus::Published && self.published_at.is_none() {
            self.published_at = Some(Utc::now());
        }
    }

    /// Validate the post structure
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = vec![];

        if self.title.trim().is_empty() {
            errors.push("title cannot be empty".to_string());
        }

        if self.slug.is_empty() {
            errors.push("slug cannot be empty".to_string());
        } else if self.slug.contains(char::is_whitespace) || self.slug.contains('/') {
            errors.push(format!("slug '{}' contains invalid characters", self.slug));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Truncate a string to at most `max` characters on a char boundary
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

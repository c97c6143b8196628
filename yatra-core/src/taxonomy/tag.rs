//! Universal tags shared across trips, posts, and glossary terms

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A universal tag usable by every content type on the platform
///
/// Tags are the cross-cutting taxonomy: a trip, a blog post, and a glossary
/// term can all carry the same tag, and tag landing pages aggregate content
/// from all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Display name (e.g., "High Altitude")
    pub name: String,

    /// URL-safe unique identifier
    pub slug: String,

    /// Longer description shown on the tag landing page
    #[serde(default)]
    pub description: String,

    /// CSS icon class for display
    #[serde(default)]
    pub icon: String,

    /// SEO title override
    #[serde(default)]
    pub meta_title: String,

    /// SEO description override
    #[serde(default)]
    pub meta_description: String,

    /// Sort order on listing pages (lower sorts first)
    #[serde(default)]
    pub display_order: u32,

    /// Whether this tag is highlighted on landing pages
    #[serde(default)]
    pub is_featured: bool,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    /// Create a new tag with the given name and slug
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            slug: slug.into(),
            description: String::new(),
            icon: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            display_order: 0,
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon class
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the display order
    pub fn with_display_order(mut self, order: u32) -> Self {
        self.display_order = order;
        self
    }

    /// Mark as featured
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Canonical path for this tag's landing page
    pub fn url_path(&self) -> String {
        format!("/tags/{}/", self.slug)
    }

    /// Validate the tag structure
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = vec![];

        if self.name.trim().is_empty() {
            errors.push("name cannot be empty".to_string());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_builder() {
        let tag = Tag::new("High Altitude", "high-altitude")
            .with_description("Treks above 4000m")
            .with_icon("icon-mountain")
            .featured();

        assert_eq!(tag.name, "High Altitude");
        assert_eq!(tag.slug, "high-altitude");
        assert!(tag.is_featured);
        assert_eq!(tag.url_path(), "/tags/high-altitude/");
    }

    #[test]
    fn test_tag_validation() {
        assert!(Tag::new("Trekking", "trekking").validate().is_ok());

        let empty_name = Tag::new("", "trekking");
        assert!(empty_name.validate().is_err());

        let bad_slug = Tag::new("Trekking", "trek king");
        let errors = bad_slug.validate().unwrap_err();
        assert!(errors[0].contains("invalid characters"));
    }

    #[test]
    fn test_tag_deserializes_with_defaults() {
        let tag: Tag = serde_json::from_str(r#"{"name": "Gear", "slug": "gear"}"#).unwrap();
        assert_eq!(tag.display_order, 0);
        assert!(!tag.is_featured);
        assert!(tag.description.is_empty());
    }
}

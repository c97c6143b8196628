//! Geographic regions arranged as a tree

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic region (e.g., "Everest Region" under "Nepal")
///
/// Regions form a tree via `parent` slugs. Tree queries (ancestors,
/// descendants, trips-in-subtree) live on the store, which sees the whole
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Display name
    pub name: String,

    /// URL-safe unique identifier
    pub slug: String,

    /// Slug of the parent region, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Longer description shown on the region landing page
    #[serde(default)]
    pub description: String,

    /// Hero image path for the landing page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// Latitude of a representative point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude of a representative point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// SEO title override
    #[serde(default)]
    pub meta_title: String,

    /// SEO description override
    #[serde(default)]
    pub meta_description: String,

    /// Sort order on listing pages (lower sorts first)
    #[serde(default)]
    pub display_order: u32,

    /// Whether this region is highlighted on landing pages
    #[serde(default)]
    pub is_featured: bool,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Region {
    /// Create a new top-level region
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            slug: slug.into(),
            parent: None,
            description: String::new(),
            featured_image: None,
            latitude: None,
            longitude: None,
            meta_title: String::new(),
            meta_description: String::new(),
            display_order: 0,
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the parent region slug
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the representative coordinates
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Mark as featured
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Whether this region sits at the top of the tree
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Canonical path for this region's landing page
    pub fn url_path(&self) -> String {
        format!("/regions/{}/", self.slug)
    }

    /// Validate the region structure
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

        if let Some(parent) = &self.parent {
            if parent == &self.slug {
                errors.push(format!("region '{}' cannot be its own parent", self.slug));
            }
        }

        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                errors.push(format!("latitude {} out of range", lat));
            }
        }

        if let Some(lon) = self.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                errors.push(format!("longitude {} out of range", lon));
            }
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
    fn test_region_builder() {
        let region = Region::new("Everest Region", "everest-region")
            .with_parent("nepal")
            .with_coordinates(27.9881, 86.925);

        assert_eq!(region.parent.as_deref(), Some("nepal"));
        assert!(!region.is_root());
        assert_eq!(region.url_path(), "/regions/everest-region/");
    }

    #[test]
    fn test_region_validation() {
        assert!(Region::new("Nepal", "nepal").validate().is_ok());

        let self_parent = Region::new("Nepal", "nepal").with_parent("nepal");
        let errors = self_parent.validate().unwrap_err();
        assert!(errors[0].contains("own parent"));

        let bad_lat = Region::new("Nowhere", "nowhere").with_coordinates(120.0, 0.0);
        assert!(bad_lat.validate().is_err());
    }
}

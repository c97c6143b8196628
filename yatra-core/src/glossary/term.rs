//! Glossary term model and the lightweight view used for auto-linking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A glossary term
///
/// Terms power two surfaces: the browsable glossary (detail pages with
/// definitions and related content) and the auto-linker, which injects
/// anchors for term mentions into rendered articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    /// Display name, e.g. "Acute Mountain Sickness"
    pub name: String,

    /// URL-safe unique identifier
    pub slug: String,

    /// Short form, e.g. "AMS"
    #[serde(default)]
    pub abbreviation: String,

    /// Brief definition shown in tooltips and listings
    #[serde(default)]
    pub definition: String,

    /// Detailed explanation (HTML supported)
    #[serde(default)]
    pub detailed_explanation: String,

    /// Slugs of related glossary terms
    #[serde(default)]
    pub related_terms: Vec<String>,

    /// Slugs of trips where this term is relevant
    #[serde(default)]
    pub related_trips: Vec<String>,

    /// Related tag slugs
    #[serde(default)]
    pub related_tags: Vec<String>,

    /// Whether this term participates in auto-linking
    #[serde(default = "default_auto_link")]
    pub auto_link: bool,

    /// Higher priority terms are linked first
    #[serde(default = "default_link_priority")]
    pub link_priority: i32,

    /// Maximum times to link this term per page
    #[serde(default = "default_max_links")]
    pub max_links_per_page: i32,

    /// SEO title (auto-defaults from the name)
    #[serde(default)]
    pub meta_title: String,

    /// SEO description (auto-defaults from the definition)
    #[serde(default)]
    pub meta_description: String,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_auto_link() -> bool {
    true
}

fn default_link_priority() -> i32 {
    5
}

fn default_max_links() -> i32 {
    3
}

impl Term {
    /// Create a new auto-linkable term with the given name and slug
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            slug: slug.into(),
            abbreviation: String::new(),
            definition: String::new(),
            detailed_explanation: String::new(),
            related_terms: vec![],
            related_trips: vec![],
            related_tags: vec![],
            auto_link: true,
            link_priority: default_link_priority(),
            max_links_per_page: default_max_links(),
            meta_title: String::new(),
            meta_description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the abbreviation
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = abbreviation.into();
        self
    }

    /// Set the definition
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    /// Set the link priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.link_priority = priority;
        self
    }

    /// Set the per-page link cap
    pub fn with_max_links(mut self, max_links: i32) -> Self {
        self.max_links_per_page = max_links;
        self
    }

    /// Exclude this term from auto-linking
    pub fn without_auto_link(mut self) -> Self {
        self.auto_link = false;
        self
    }

    /// Add a related term slug
    pub fn with_related_term(mut self, slug: impl Into<String>) -> Self {
        self.related_terms.push(slug.into());
        self
    }

    /// Add a related trip slug
    pub fn with_related_trip(mut self, slug: impl Into<String>) -> Self {
        self.related_trips.push(slug.into());
        self
    }

    /// Display label: name with abbreviation when present,
    /// e.g. "Acute Mountain Sickness (AMS)"
    pub fn display_label(&self) -> String {
        if self.abbreviation.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.abbreviation)
        }
    }

    /// Canonical path for this term's detail page
    pub fn url_path(&self) -> String {
        format!("/glossary/{}/", self.slug)
    }

    /// Fill SEO meta fields when left blank
    pub fn apply_meta_defaults(&mut self) {
        if self.meta_title.is_empty() {
            self.meta_title = truncate_chars(&format!("{} - Trekking Glossary", self.name), 70);
        }
        if self.meta_description.is_empty() {
            self.meta_description = truncate_chars(&self.definition, 160);
        }
    }

    /// Project into the lightweight view consumed by the auto-linker
    pub fn to_link_term(&self) -> LinkTerm {
        LinkTerm {
            name: self.name.clone(),
            abbreviation: self.abbreviation.clone(),
            slug: self.slug.clone(),
            link_priority: self.link_priority,
            max_links_per_page: self.max_links_per_page,
        }
    }

    /// Validate the term structure
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

/// The fields of a term that the auto-linker needs
///
/// The rewriter treats these values as untrusted configuration: a
/// non-positive `max_links_per_page` disables the term rather than
/// causing an error mid-render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTerm {
    /// Display name matched in article text
    pub name: String,

    /// Short form also matched in article text (may be empty)
    #[serde(default)]
    pub abbreviation: String,

    /// URL-safe unique identifier, used to build the anchor href
    pub slug: String,

    /// Higher priority terms are linked first
    #[serde(default = "default_link_priority")]
    pub link_priority: i32,

    /// Maximum times to link this term per page
    #[serde(default = "default_max_links")]
    pub max_links_per_page: i32,
}

impl LinkTerm {
    /// Create a view with default linking configuration
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: String::new(),
            slug: slug.into(),
            link_priority: default_link_priority(),
            max_links_per_page: default_max_links(),
        }
    }

    /// Set the abbreviation
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = abbreviation.into();
        self
    }

    /// Set the link priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.link_priority = priority;
        self
    }

    /// Set the per-page link cap
    pub fn with_max_links(mut self, max_links: i32) -> Self {
        self.max_links_per_page = max_links;
        self
    }

    /// Canonical path for this term's detail page
    pub fn url_path(&self) -> String {
        format!("/glossary/{}/", self.slug)
    }
}

/// Truncate a string to at most `max` characters on a char boundary
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

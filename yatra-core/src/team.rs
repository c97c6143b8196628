//! Team members - the authority layer behind published content
//!
//! Every post carries an author card, so members record the experience
//! and certification data those cards display.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a team member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Guide,
    #[default]
    Author,
    Expert,
    Founder,
}

impl MemberRole {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            MemberRole::Guide => "Mountain Guide",
            MemberRole::Author => "Content Writer",
            MemberRole::Expert => "Subject Matter Expert",
            MemberRole::Founder => "Founder",
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::Guide => write!(f, "guide"),
            MemberRole::Author => write!(f, "author"),
            MemberRole::Expert => write!(f, "expert"),
            MemberRole::Founder => write!(f, "founder"),
        }
    }
}

/// An expert author or guide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    /// Full name
    pub name: String,

    /// URL-safe unique identifier
    pub slug: String,

    /// Role within the organization
    #[serde(default)]
    pub role: MemberRole,

    /// Professional title, e.g. "Senior Trek Leader"
    #[serde(default)]
    pub title: String,

    /// Full biography for the member page
    #[serde(default)]
    pub bio: String,

    /// One-liner for author cards on posts
    #[serde(default)]
    pub short_bio: String,

    /// Portrait image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    /// Certifications, e.g. "IFMGA Guide"
    #[serde(default)]
    pub certifications: Vec<String>,

    /// Social profile links keyed by platform name
    #[serde(default)]
    pub social_links: HashMap<String, String>,

    /// Years of industry experience
    #[serde(default)]
    pub years_experience: u32,

    /// Number of trips or expeditions led
    #[serde(default)]
    pub trips_led: u32,

    /// Number of successful summits
    #[serde(default)]
    pub summits: u32,

    /// Whether to show the verified-expert badge on posts
    #[serde(default)]
    pub is_verified_expert: bool,

    /// Whether the member is shown on the site
    #[serde(default = "default_is_active")]
    pub is_active: bool,

    /// SEO title
    #[serde(default)]
    pub meta_title: String,

    /// SEO description
    #[serde(default)]
    pub meta_description: String,

    /// Ordering position on the team page
    #[serde(default)]
    pub display_order: u32,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_is_active() -> bool {
    true
}

impl TeamMember {
    /// Create a new active member with the given name and slug
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            slug: slug.into(),
            role: MemberRole::default(),
            title: String::new(),
            bio: String::new(),
            short_bio: String::new(),
            photo: None,
            certifications: vec![],
            social_links: HashMap::new(),
            years_experience: 0,
            trips_led: 0,
            summits: 0,
            is_verified_expert: false,
            is_active: true,
            meta_title: String::new(),
            meta_description: String::new(),
            display_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the role
    pub fn with_role(mut self, role: MemberRole) -> Self {
        self.role = role;
        self
    }

    /// Set the professional title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the short bio
    pub fn with_short_bio(mut self, short_bio: impl Into<String>) -> Self {
        self.short_bio = short_bio.into();
        self
    }

    /// Add a certification
    pub fn with_certification(mut self, certification: impl Into<String>) -> Self {
        self.certifications.push(certification.into());
        self
    }

    /// Mark as a verified expert
    pub fn verified(mut self) -> Self {
        self.is_verified_expert = true;
        self
    }

    /// Name with role label, e.g. "Pemba Sherpa (Mountain Guide)"
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.role.label())
    }

    /// Canonical path for this member's profile page
    pub fn url_path(&self) -> String {
        format!("/team/{}/", self.slug)
    }

    /// Validate the member structure
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

//! Trip - the core product record

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Difficulty grading for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
    Extreme,
}

impl Difficulty {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Challenging => "Challenging",
            Difficulty::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Moderate => write!(f, "moderate"),
            Difficulty::Challenging => write!(f, "challenging"),
            Difficulty::Extreme => write!(f, "extreme"),
        }
    }
}

/// Product category for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Trek,
    Expedition,
    Tour,
    Climbing,
    Helicopter,
}

impl TripType {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            TripType::Trek => "Trekking",
            TripType::Expedition => "Expedition",
            TripType::Tour => "Tour",
            TripType::Climbing => "Peak Climbing",
            TripType::Helicopter => "Helicopter Tour",
        }
    }
}

impl std::fmt::Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripType::Trek => write!(f, "trek"),
            TripType::Expedition => write!(f, "expedition"),
            TripType::Tour => write!(f, "tour"),
            TripType::Climbing => write!(f, "climbing"),
            TripType::Helicopter => write!(f, "helicopter"),
        }
    }
}

/// Season a trip is best run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// A gallery image attached to a trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Image path or URL
    pub image: String,

    /// Caption shown under the image
    #[serde(default)]
    pub caption: String,

    /// Alt text for accessibility and SEO
    #[serde(default)]
    pub alt_text: String,

    /// Sort order within the gallery (lower sorts first)
    #[serde(default)]
    pub display_order: u32,
}

/// The core product - a trekking/expedition/tour package
///
/// Trips share the universal tag taxonomy with blog posts, which is what
/// powers cross-content recommendations (guides for a trip, trips for a
/// guide).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Display title
    pub title: String,

    /// URL-safe unique identifier
    pub slug: String,

    /// Short selling point (e.g., "The ultimate Himalayan adventure")
    #[serde(default)]
    pub tagline: String,

    /// Brief introduction shown at the top of the page
    #[serde(default)]
    pub overview: String,

    /// Day-by-day itinerary (HTML supported)
    #[serde(default)]
    pub detailed_itinerary: String,

    /// Key highlights and unique selling points
    #[serde(default)]
    pub highlights: String,

    /// What's included in the package
    #[serde(default)]
    pub includes: String,

    /// What's not included
    #[serde(default)]
    pub excludes: String,

    /// Important information, gear list, etc.
    #[serde(default)]
    pub essential_info: String,

    /// Tag slugs for categorization and internal linking
    #[serde(default)]
    pub tags: Vec<String>,

    /// Slug of the geographic region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Product category
    #[serde(default = "default_trip_type")]
    pub trip_type: TripType,

    /// Total duration in days
    #[serde(default = "default_duration_days")]
    pub duration_days: u32,

    /// Maximum altitude in meters
    #[serde(default)]
    pub max_altitude: u32,

    /// Difficulty grading
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,

    /// Seasons the trip is best run in
    #[serde(default)]
    pub best_seasons: Vec<Season>,

    /// Minimum group size
    #[serde(default = "default_group_size_min")]
    pub group_size_min: u32,

    /// Maximum group size
    #[serde(default = "default_group_size_max")]
    pub group_size_max: u32,

    /// Base price in USD
    #[serde(default)]
    pub price: Decimal,

    /// Sale price (absent if no discount)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<Decimal>,

    /// Main hero image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// YouTube or Vimeo embed URL
    #[serde(default)]
    pub video_url: String,

    /// Route coordinates for the map, as [longitude, latitude] pairs
    #[serde(default)]
    pub route_coordinates: Vec<[f64; 2]>,

    /// Gallery images, kept sorted by display order
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,

    /// Total flight time in minutes (helicopter trips only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_duration_minutes: Option<u32>,

    /// Landing locations (helicopter trips only)
    #[serde(default)]
    pub landing_sites: String,

    /// Maximum passengers per helicopter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helicopter_capacity: Option<u32>,

    /// Departure point
    #[serde(default = "default_departure_location")]
    pub departure_location: String,

    /// SEO title (auto-defaults to the trip title)
    #[serde(default)]
    pub meta_title: String,

    /// SEO description (auto-defaults to an overview excerpt)
    #[serde(default)]
    pub meta_description: String,

    /// Primary keyword for SEO optimization
    #[serde(default)]
    pub focus_keyword: String,

    /// Whether the trip is visible on the public site
    #[serde(default)]
    pub is_published: bool,

    /// Whether the trip shows in the homepage featured section
    #[serde(default)]
    pub is_featured: bool,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_trip_type() -> TripType {
    TripType::Trek
}

fn default_difficulty() -> Difficulty {
    Difficulty::Moderate
}

fn default_duration_days() -> u32 {
    1
}

fn default_group_size_min() -> u32 {
    1
}

fn default_group_size_max() -> u32 {
    15
}

fn default_departure_location() -> String {
    "Kathmandu".to_string()
}

impl Trip {
    /// Create a new unpublished trip with the given title and slug
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            title: title.into(),
            slug: slug.into(),
            tagline: String::new(),
            overview: String::new(),
            detailed_itinerary: String::new(),
            highlights: String::new(),
            includes: String::new(),
            excludes: String::new(),
            essential_info: String::new(),
            tags: vec![],
            region: None,
            trip_type: default_trip_type(),
            duration_days: default_duration_days(),
            max_altitude: 0,
            difficulty: default_difficulty(),
            best_seasons: vec![],
            group_size_min: default_group_size_min(),
            group_size_max: default_group_size_max(),
            price: Decimal::ZERO,
            discounted_price: None,
            featured_image: None,
            video_url: String::new(),
            route_coordinates: vec![],
            gallery: vec![],
            flight_duration_minutes: None,
            landing_sites: String::new(),
            helicopter_capacity: None,
            departure_location: default_departure_location(),
            meta_title: String::new(),
            meta_description: String::new(),
            focus_keyword: String::new(),
            is_published: false,
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the overview text
    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    /// Set the region slug
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the trip type
    pub fn with_trip_type(mut self, trip_type: TripType) -> Self {
        self.trip_type = trip_type;
        self
    }

    /// Set the difficulty grading
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the duration in days
    pub fn with_duration(mut self, days: u32) -> Self {
        self.duration_days = days;
        self
    }

    /// Set the base price
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Set the sale price
    pub fn with_discounted_price(mut self, price: Decimal) -> Self {
        self.discounted_price = Some(price);
        self
    }

    /// Add a tag slug
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Mark as published
    pub fn published(mut self) -> Self {
        self.is_published = true;
        self
    }

    /// Mark as featured
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Effective price: the sale price if set, otherwise the base price
    ///
    /// A non-positive sale price counts as no discount, not a free trip.
    pub fn current_price(&self) -> Decimal {
        match self.discounted_price {
            Some(discounted) if discounted > Decimal::ZERO => discounted,
            _ => self.price,
        }
    }

    /// Discount percentage (truncated), zero unless a real discount exists
    pub fn discount_percentage(&self) -> u32 {
        match self.discounted_price {
            Some(discounted) if discounted > Decimal::ZERO && discounted < self.price => {
                ((self.price - discounted) * Decimal::from(100) / self.price)
                    .trunc()
                    .to_u32()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Whether this trip shares at least one tag with the given set
    pub fn shares_tag_with(&self, tags: &[String]) -> bool {
        self.tags.iter().any(|t| tags.contains(t))
    }

    /// Canonical path for this trip's detail page
    pub fn url_path(&self) -> String {
        format!("/trips/{}/", self.slug)
    }

    /// Fill SEO meta fields from content when left blank
    pub fn apply_meta_defaults(&mut self) {
        if self.meta_title.is_empty() {
            self.meta_title = truncate_chars(&self.title, 70);
        }
        if self.meta_description.is_empty() {
            self.meta_description = truncate_chars(&self.overview, 160);
        }
    }

    /// Validate the trip structure
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

        if self.duration_days == 0 {
            errors.push("duration_days must be at least 1".to_string());
        }

        if self.group_size_min > self.group_size_max {
            errors.push(format!(
                "group_size_min {} exceeds group_size_max {}",
                self.group_size_min, self.group_size_max
            ));
        }

        if self.price < Decimal::ZERO {
            errors.push("price cannot be negative".to_string());
        }

        if let Some(discounted) = self.discounted_price {
            if discounted < Decimal::ZERO {
                errors.push("discounted_price cannot be negative".to_string());
            }
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

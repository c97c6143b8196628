//! Typed filtering and sorting for trip listings

use serde::{Deserialize, Serialize};

use super::trip::{Difficulty, Trip};

/// Duration buckets used by the trip listing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationBand {
    /// Up to one week (1-7 days)
    #[serde(rename = "1-7")]
    UpToWeek,
    /// One to two weeks (8-14 days)
    #[serde(rename = "8-14")]
    OneToTwoWeeks,
    /// Fifteen days or longer
    #[serde(rename = "15+")]
    TwoWeeksPlus,
}

impl DurationBand {
    /// Whether a trip of the given length falls in this band
    pub fn contains(&self, duration_days: u32) -> bool {
        match self {
            DurationBand::UpToWeek => duration_days <= 7,
            DurationBand::OneToTwoWeeks => (8..=14).contains(&duration_days),
            DurationBand::TwoWeeksPlus => duration_days >= 15,
        }
    }
}

impl std::fmt::Display for DurationBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationBand::UpToWeek => write!(f, "1-7"),
            DurationBand::OneToTwoWeeks => write!(f, "8-14"),
            DurationBand::TwoWeeksPlus => write!(f, "15+"),
        }
    }
}

/// Sort order for trip listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripSort {
    /// Featured trips first, then newest
    #[default]
    Featured,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Shortest first
    Duration,
}

impl TripSort {
    /// Sort a slice of trips in place according to this order
    pub fn sort(&self, trips: &mut [Trip]) {
        match self {
            TripSort::Featured => {
                trips.sort_by(|a, b| {
                    b.is_featured
                        .cmp(&a.is_featured)
                        .then(b.created_at.cmp(&a.created_at))
                });
            }
            TripSort::PriceLow => trips.sort_by(|a, b| a.price.cmp(&b.price)),
            TripSort::PriceHigh => trips.sort_by(|a, b| b.price.cmp(&a.price)),
            TripSort::Duration => trips.sort_by(|a, b| a.duration_days.cmp(&b.duration_days)),
        }
    }
}

/// Filter criteria for trip listings
///
/// All criteria are optional and combine with AND semantics. An empty
/// filter matches every published trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripFilter {
    /// Only trips carrying this tag slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Only trips in this region slug (exact match, no subtree)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Only trips with this difficulty grading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    /// Only trips whose length falls in this band
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationBand>,

    /// Case-insensitive search over title, overview, and tagline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Sort order for the result
    #[serde(default)]
    pub sort: TripSort,
}

impl TripFilter {
    /// Create an empty filter (matches everything, featured-first order)
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a tag slug
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Restrict to a region slug
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Restrict to a difficulty grading
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Restrict to a duration band
    pub fn with_duration(mut self, band: DurationBand) -> Self {
        self.duration = Some(band);
        self
    }

    /// Restrict to a search query
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Set the sort order
    pub fn sorted_by(mut self, sort: TripSort) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a trip satisfies every criterion in this filter
    ///
    /// Publication status is the store's concern, not the filter's.
    pub fn matches(&self, trip: &Trip) -> bool {
        if let Some(tag) = &self.tag {
            if !trip.tags.iter().any(|t| t == tag) {
                return false;
            }
        }

        if let Some(region) = &self.region {
            if trip.region.as_deref() != Some(region.as_str()) {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty {
            if trip.difficulty != difficulty {
                return false;
            }
        }

        if let Some(band) = self.duration {
            if !band.contains(trip.duration_days) {
                return false;
            }
        }

        if let Some(query) = &self.search {
            let q = query.to_lowercase();
            let hit = trip.title.to_lowercase().contains(&q)
                || trip.overview.to_lowercase().contains(&q)
                || trip.tagline.to_lowercase().contains(&q);
            if !hit {
                return false;
            }
        }

        true
    }
}

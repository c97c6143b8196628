//! Product catalog - trips and their listing filters
//!
//! A trip is the platform's sellable unit: a trekking, expedition, tour,
//! climbing, or helicopter package. Listing pages query the catalog
//! through [`TripFilter`], which mirrors the public site's filter bar
//! (tag, region, difficulty, duration band, search, sort).

mod filter;
mod trip;

pub use filter::{DurationBand, TripFilter, TripSort};
pub use trip::{Difficulty, GalleryImage, Season, Trip, TripType};

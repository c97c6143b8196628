//! Blog content - posts, categories and listing filters
//!
//! Posts share the universal tag taxonomy with the trip catalog, which
//! is what lets a guide article recommend bookable trips and lets a trip
//! page surface related reading.

mod filter;
mod post;

pub use filter::{sort_for_listing, PostFilter};
pub use post::{BlogCategory, BlogPost, ContentKind, PostStatus};

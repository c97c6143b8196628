//! Shared taxonomy - tags and regions
//!
//! The taxonomy layer is what ties the platform's content types together:
//!
//! - Tags cut across trips, blog posts, and glossary terms
//! - Regions form a geographic tree that trips and posts attach to

mod region;
mod tag;

pub use region::Region;
pub use tag::Tag;

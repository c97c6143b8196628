//! SEO glossary - term definitions and automatic internal linking
//!
//! The glossary is both a browsable content type (A-Z listings, term
//! detail pages) and the engine behind automatic internal links: the
//! [`TermRegistry`] serves cached [`LinkTerm`] views and the linker
//! rewrites rendered article HTML so term mentions point at their
//! definition pages.

mod linker;
mod registry;
mod term;

pub use linker::{rewrite, GlossaryAutoLinker, GLOSSARY_LINK_CLASS};
pub use registry::{RegistryConfig, TermRegistry, TERMS_CACHE_KEY};
pub use term::{LinkTerm, Term};

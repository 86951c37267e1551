//! Filter implementations for the course feed.
//!
//! This module contains all the concrete filters that can be composed
//! into a FilterPipeline.

pub mod mentor_ownership;
pub mod title_search;
pub mod track;

// Re-export for convenience
pub use mentor_ownership::MentorOwnershipFilter;
pub use title_search::TitleSearchFilter;
pub use track::TrackFilter;

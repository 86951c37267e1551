//! Course feed of the catalog screen.
//!
//! This crate provides:
//! - Filter trait and implementations for narrowing the video list
//! - FilterPipeline for composing filters
//! - The feed operations: visible set, search, popular/recommended split
//! - CourseFeed, which sorts once and re-filters per keystroke
//!
//! ## Architecture
//! 1. Videos are sorted by course order
//! 2. Filters keep the viewer's mentor's videos in the viewer's track
//! 3. The search box query narrows the set and feeds the suggestions
//! 4. The result is split into popular and recommended sections
//!
//! ## Example Usage
//! ```ignore
//! use feed::CourseFeed;
//!
//! let feed = CourseFeed::new(index.videos(), &viewer);
//! let sections = feed.sections("alg");
//! println!("{} popular, {} recommended", sections.popular.len(), sections.recommended.len());
//! ```

pub mod course_feed;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use course_feed::{
    apply_search, compute_visible_set, partition_popular_vs_recommended, placement,
    sort_by_order, CourseFeed, FeedPartition, FeedSections, Placement, SearchResult,
    POPULAR_LIMIT, POPULAR_STAR_THRESHOLD,
};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;

//! Core traits for the feed filters.
//!
//! This module defines the Filter trait that lets the feed stages be
//! composed into a FilterPipeline.

use catalog::{Video, Viewer};

/// A single narrowing step of the course feed.
///
/// Filters work on borrowed records: they take ownership of the vector of
/// references and hand back the retained ones, in the same order. Nothing
/// is cloned and the underlying videos are never touched.
///
/// Filters cannot fail. A viewer field a filter needs but that is unset
/// simply retains nothing.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Keep the videos this filter accepts for `viewer`, preserving order.
    fn apply<'a>(&self, videos: Vec<&'a Video>, viewer: &Viewer) -> Vec<&'a Video>;
}

//! # Catalog Crate
//!
//! Loads the learning platform's JSON exports into an in-memory index.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Video, Review, Mentor, Viewer, CatalogIndex)
//! - **parser**: Decode and range-check the JSON exports
//! - **index**: Build and validate a CatalogIndex from an export directory
//! - **detail**: Per-video summary (average rating, views, review status)
//! - **contacts**: The viewer's messaging contacts
//! - **text**: Case-insensitive matching helpers
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogIndex, VideoDetail};
//! use std::path::Path;
//!
//! let index = CatalogIndex::load_from_dir(Path::new("data/elimu"))?;
//! let viewer = index.get_viewer("learner@example.com").unwrap();
//! let detail = VideoDetail::build(&index, 12, viewer.email.as_deref());
//! ```

pub mod contacts;
pub mod detail;
pub mod error;
pub mod index;
pub mod parser;
pub mod text;
pub mod types;

// Re-export commonly used types for convenience
pub use contacts::{contact_list, Contact, ContactKind};
pub use detail::VideoDetail;
pub use error::{CatalogError, Result};
pub use types::{
    CatalogIndex, Mentor, Progress, Review, ReviewId, Video, VideoId, Viewer, SHORT_TITLE_WIDTH,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn video(title: &str, order: i32) -> Video {
        Video {
            id: 1,
            title: title.to_string(),
            order,
            category: "Math".to_string(),
            mentor_email: "m@x.com".to_string(),
            stars: 3.0,
            youtube_url: None,
            description: None,
            progresses: vec![],
        }
    }

    #[test]
    fn test_catalog_index_creation() {
        let index = CatalogIndex::new();
        assert_eq!(index.counts(), (0, 0, 0, 0));
        assert!(index.videos().is_empty());
    }

    #[test]
    fn test_empty_queries() {
        let index = CatalogIndex::new();

        assert!(index.get_video(999).is_none());
        assert!(index.get_reviews(999).is_empty());
        assert!(index.find_mentor("nobody@x.com").is_none());
        assert!(index.get_viewer("nobody@x.com").is_none());
    }

    #[test]
    fn test_course_label() {
        assert_eq!(video("Algebra", 3).course_label(), "Cours 3");
    }

    #[test]
    fn test_short_title() {
        let long = video("Introduction aux équations différentielles", 1);
        let short = long.short_title(SHORT_TITLE_WIDTH);
        assert_eq!(short.chars().count(), SHORT_TITLE_WIDTH + 3);
        assert!(short.ends_with("..."));
        assert!(short.starts_with("Introduction aux équation"));

        let fits = video("Algebra", 1);
        assert_eq!(fits.short_title(SHORT_TITLE_WIDTH), "Algebra");
    }

    #[test]
    fn test_insert_video_replaces_same_id() {
        let mut index = CatalogIndex::new();
        index.insert_video(video("First", 1));
        index.insert_video(video("Second", 2));

        assert_eq!(index.videos().len(), 1);
        assert_eq!(index.get_video(1).unwrap().title, "Second");
    }
}

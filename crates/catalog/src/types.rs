//! Core domain types for the course catalog.
//!
//! These mirror the JSON exports of the learning platform's API: videos
//! (with their embedded progress records), reviews, mentors and the
//! learner profiles that act as feed viewers.

use crate::text::{eq_ignore_case, fold_case};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a video
pub type VideoId = u32;

/// Unique identifier for a review
pub type ReviewId = u32;

/// Default width used when a title has to fit on a card
pub const SHORT_TITLE_WIDTH: usize = 25;

// =============================================================================
// Video-related Types
// =============================================================================

/// A single course video as shipped by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    /// Position of the video inside its course sequence
    pub order: i32,
    /// Free-text category, compared against a viewer's track ignoring case
    pub category: String,
    pub mentor_email: String,
    /// Rating in [0, 5]
    pub stars: f32,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// One record per tracked play
    #[serde(default)]
    pub progresses: Vec<Progress>,
}

impl Video {
    /// Number of views, derived from the progress records.
    pub fn view_count(&self) -> usize {
        self.progresses.len()
    }

    /// Label shown on cards, e.g. "Cours 3".
    pub fn course_label(&self) -> String {
        format!("Cours {}", self.order)
    }

    /// Title cut to `max_chars` characters with a trailing "..." when it
    /// does not fit.
    ///
    /// Counts `char`s, not bytes, so accented titles never split inside a
    /// code point.
    pub fn short_title(&self, max_chars: usize) -> String {
        if self.title.chars().count() <= max_chars {
            return self.title.clone();
        }
        let mut short: String = self.title.chars().take(max_chars).collect();
        short.push_str("...");
        short
    }
}

/// A learner having started a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub video_id: VideoId,
    pub mentee_email: String,
}

/// A learner's review of a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub video_id: VideoId,
    pub mentee_email: String,
    /// 1 to 5
    pub stars: u8,
    #[serde(default)]
    pub comment: String,
}

// =============================================================================
// People
// =============================================================================

/// Content owner of a set of videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub profile_url: Option<String>,
}

/// The learner looking at the catalog.
///
/// Every field may be missing in the profile. A missing `mentor_email` or
/// `track` never matches any video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mentor_email: Option<String>,
    #[serde(default)]
    pub mentor_name: Option<String>,
    #[serde(default)]
    pub track: Option<String>,
}

impl Viewer {
    /// Viewer with only the two fields the feed looks at.
    pub fn new(mentor_email: impl Into<String>, track: impl Into<String>) -> Self {
        Self {
            mentor_email: Some(mentor_email.into()),
            track: Some(track.into()),
            ..Self::default()
        }
    }
}

// =============================================================================
// CatalogIndex - in-memory view of the exports
// =============================================================================

/// Holds every loaded record plus the lookups the screens need.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    /// Videos in load order
    pub(crate) videos: Vec<Video>,
    /// Position of each video inside `videos`
    pub(crate) video_positions: HashMap<VideoId, usize>,
    /// Reviews grouped by video
    pub(crate) reviews: HashMap<VideoId, Vec<Review>>,
    pub(crate) mentors: Vec<Mentor>,
    /// Viewers keyed by lowercased email
    pub(crate) viewers: HashMap<String, Viewer>,
}

impl CatalogIndex {
    /// Creates a new, empty CatalogIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// All videos, in the order they were loaded.
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Get a video by ID
    pub fn get_video(&self, id: VideoId) -> Option<&Video> {
        self.video_positions.get(&id).map(|&pos| &self.videos[pos])
    }

    /// Get all reviews of a video, empty if it has none
    pub fn get_reviews(&self, video_id: VideoId) -> &[Review] {
        self.reviews
            .get(&video_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Find a mentor by email, ignoring case
    pub fn find_mentor(&self, email: &str) -> Option<&Mentor> {
        self.mentors
            .iter()
            .find(|mentor| eq_ignore_case(&mentor.email, email))
    }

    /// Get a viewer profile by email, ignoring case
    pub fn get_viewer(&self, email: &str) -> Option<&Viewer> {
        self.viewers.get(&fold_case(email))
    }

    /// All viewer profiles, in no particular order
    pub fn viewers(&self) -> impl Iterator<Item = &Viewer> {
        self.viewers.values()
    }

    /// Insert a video, replacing any previous one with the same id
    pub fn insert_video(&mut self, video: Video) {
        match self.video_positions.get(&video.id) {
            Some(&pos) => self.videos[pos] = video,
            None => {
                self.video_positions.insert(video.id, self.videos.len());
                self.videos.push(video);
            }
        }
    }

    /// Insert a review under its video
    pub fn insert_review(&mut self, review: Review) {
        self.reviews.entry(review.video_id).or_default().push(review);
    }

    pub fn insert_mentor(&mut self, mentor: Mentor) {
        self.mentors.push(mentor);
    }

    /// Insert a viewer, returning the profile it replaced (same email,
    /// ignoring case). Profiles without an email cannot be looked up and
    /// are skipped.
    pub fn insert_viewer(&mut self, viewer: Viewer) -> Option<Viewer> {
        let key = fold_case(viewer.email.as_deref()?);
        self.viewers.insert(key, viewer)
    }

    /// (videos, reviews, mentors, viewers)
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        let total_reviews = self.reviews.values().map(|v| v.len()).sum();
        (
            self.videos.len(),
            total_reviews,
            self.mentors.len(),
            self.viewers.len(),
        )
    }
}

//! CatalogIndex loading and validation.
//!
//! Builds the index from an export directory:
//! - parse the four JSON files in parallel
//! - insert records, rejecting duplicate video ids
//! - check that every review points at a loaded video

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info};

impl CatalogIndex {
    /// Load the catalog exports from a directory
    ///
    /// Expects `videos.json`, `reviews.json`, `mentors.json` and
    /// `users.json` side by side.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog exports from {:?}", data_dir);

        let videos_path = data_dir.join("videos.json");
        let reviews_path = data_dir.join("reviews.json");
        let mentors_path = data_dir.join("mentors.json");
        let users_path = data_dir.join("users.json");

        // Nested joins give four-way parallelism
        let ((videos, reviews), (mentors, viewers)) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_videos(&videos_path),
                    || parser::parse_reviews(&reviews_path),
                )
            },
            || {
                rayon::join(
                    || parser::parse_mentors(&mentors_path),
                    || parser::parse_viewers(&users_path),
                )
            },
        );

        let index = Self::from_records(videos?, reviews?, mentors?, viewers?)?;

        let (videos, reviews, mentors, viewers) = index.counts();
        info!(
            "Loaded {} videos, {} reviews, {} mentors, {} viewers",
            videos, reviews, mentors, viewers
        );
        Ok(index)
    }

    /// Build and validate an index from already parsed records
    pub fn from_records(
        videos: Vec<Video>,
        reviews: Vec<Review>,
        mentors: Vec<Mentor>,
        viewers: Vec<Viewer>,
    ) -> Result<Self> {
        let mut index = CatalogIndex::new();

        for video in videos {
            if index.video_positions.contains_key(&video.id) {
                return Err(CatalogError::DuplicateId {
                    entity: "video".to_string(),
                    id: video.id,
                });
            }
            index.insert_video(video);
        }

        for review in reviews {
            index.insert_review(review);
        }

        for mentor in mentors {
            index.insert_mentor(mentor);
        }

        let mut anonymous = 0usize;
        for viewer in viewers {
            if viewer.email.is_none() {
                anonymous += 1;
            }
            if let Some(replaced) = index.insert_viewer(viewer) {
                debug!(
                    "Viewer profile {:?} appears more than once, keeping the last one",
                    replaced.email.as_deref().unwrap_or_default()
                );
            }
        }
        if anonymous > 0 {
            debug!("Skipped {} viewer profiles without an email", anonymous);
        }

        index.validate()?;
        Ok(index)
    }

    /// Validate data integrity
    ///
    /// Every review must reference a loaded video.
    pub fn validate(&self) -> Result<()> {
        for (video_id, reviews) in &self.reviews {
            if !self.video_positions.contains_key(video_id) {
                return Err(CatalogError::MissingReference {
                    entity: format!("video (reviewed {} times)", reviews.len()),
                    id: *video_id,
                });
            }
        }
        Ok(())
    }
}

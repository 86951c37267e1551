//! Summary of a single video for its detail page.

use crate::text::eq_ignore_case;
use crate::types::{CatalogIndex, Mentor, Review, Video, VideoId};

/// Everything the detail page shows next to the player.
#[derive(Debug, Clone)]
pub struct VideoDetail<'a> {
    pub video: &'a Video,
    pub reviews: &'a [Review],
    /// Mean review stars, 0.0 when nobody reviewed yet
    pub average_rating: f32,
    pub view_count: usize,
    /// Whether the viewer already left a review (hides the review button)
    pub viewer_has_reviewed: bool,
    pub mentor: Option<&'a Mentor>,
}

impl<'a> VideoDetail<'a> {
    /// Build the detail for `video_id`, or `None` if no such video was loaded.
    pub fn build(
        index: &'a CatalogIndex,
        video_id: VideoId,
        viewer_email: Option<&str>,
    ) -> Option<Self> {
        let video = index.get_video(video_id)?;
        let reviews = index.get_reviews(video_id);

        let viewer_has_reviewed = viewer_email
            .map(|email| {
                reviews
                    .iter()
                    .any(|r| eq_ignore_case(&r.mentee_email, email))
            })
            .unwrap_or(false);

        Some(Self {
            video,
            reviews,
            average_rating: average_rating(reviews),
            view_count: video.view_count(),
            viewer_has_reviewed,
            mentor: index.find_mentor(&video.mentor_email),
        })
    }
}

fn average_rating(reviews: &[Review]) -> f32 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: f32 = reviews.iter().map(|r| r.stars as f32).sum();
    total / reviews.len() as f32
}

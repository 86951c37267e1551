//! Filter to keep only videos of the viewer's track.

use crate::traits::Filter;
use catalog::text::eq_ignore_case;
use catalog::{Video, Viewer};

/// Keeps videos whose `category` equals the viewer's `track`, ignoring case.
///
/// A viewer without a track matches nothing.
pub struct TrackFilter;

impl Filter for TrackFilter {
    fn name(&self) -> &str {
        "TrackFilter"
    }

    fn apply<'a>(&self, videos: Vec<&'a Video>, viewer: &Viewer) -> Vec<&'a Video> {
        let Some(track) = viewer.track.as_deref() else {
            return Vec::new();
        };

        videos
            .into_iter()
            .filter(|video| eq_ignore_case(&video.category, track))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: u32, category: &str) -> Video {
        Video {
            id,
            title: format!("Video {id}"),
            order: id as i32,
            category: category.to_string(),
            mentor_email: "m@x.com".to_string(),
            stars: 4.0,
            youtube_url: None,
            description: None,
            progresses: vec![],
        }
    }

    #[test]
    fn test_track_filter_ignores_case() {
        let videos = vec![
            video(1, "Math"),
            video(2, "MATH"),
            video(3, "Science"),
            video(4, "mathematics"),
        ];
        let viewer = Viewer::new("m@x.com", "math");

        let filtered = TrackFilter.apply(videos.iter().collect(), &viewer);

        let ids: Vec<u32> = filtered.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_viewer_without_track() {
        let videos = vec![video(1, "Math")];
        let viewer = Viewer {
            mentor_email: Some("m@x.com".to_string()),
            ..Viewer::default()
        };

        assert!(TrackFilter.apply(videos.iter().collect(), &viewer).is_empty());
    }
}

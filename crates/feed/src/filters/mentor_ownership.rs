//! Filter to keep only the viewer's mentor's videos.

use crate::traits::Filter;
use catalog::{Video, Viewer};

/// Keeps videos whose `mentor_email` equals the viewer's `mentor_email`.
///
/// ## Algorithm
/// - Exact, case-sensitive string equality
/// - A viewer without a mentor matches nothing
pub struct MentorOwnershipFilter;

impl Filter for MentorOwnershipFilter {
    fn name(&self) -> &str {
        "MentorOwnershipFilter"
    }

    fn apply<'a>(&self, videos: Vec<&'a Video>, viewer: &Viewer) -> Vec<&'a Video> {
        let Some(mentor_email) = viewer.mentor_email.as_deref() else {
            return Vec::new();
        };

        videos
            .into_iter()
            .filter(|video| video.mentor_email == mentor_email)
            .collect()
    }
}

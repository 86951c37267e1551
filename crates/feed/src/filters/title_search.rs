//! Filter for the search box.

use crate::traits::Filter;
use catalog::text::{contains_folded, fold_case};
use catalog::{Video, Viewer};

/// Keeps videos whose title contains the query, ignoring case.
///
/// A blank query (empty or whitespace only) keeps everything. The query is
/// otherwise used as typed, surrounding spaces included.
pub struct TitleSearchFilter {
    /// Lowercased query, `None` when blank
    needle: Option<String>,
}

impl TitleSearchFilter {
    pub fn new(query: &str) -> Self {
        let needle = if query.trim().is_empty() {
            None
        } else {
            Some(fold_case(query))
        };
        Self { needle }
    }

    /// Whether this filter lets every video through.
    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }
}

impl Filter for TitleSearchFilter {
    fn name(&self) -> &str {
        "TitleSearchFilter"
    }

    fn apply<'a>(&self, videos: Vec<&'a Video>, _viewer: &Viewer) -> Vec<&'a Video> {
        let Some(needle) = self.needle.as_deref() else {
            return videos;
        };

        videos
            .into_iter()
            .filter(|video| contains_folded(&video.title, needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: u32, title: &str) -> Video {
        Video {
            id,
            title: title.to_string(),
            order: id as i32,
            category: "Math".to_string(),
            mentor_email: "m@x.com".to_string(),
            stars: 4.0,
            youtube_url: None,
            description: None,
            progresses: vec![],
        }
    }

    fn titles(videos: &[&Video]) -> Vec<String> {
        videos.iter().map(|v| v.title.clone()).collect()
    }

    #[test]
    fn test_title_search_filter() {
        let videos = vec![
            video(1, "Linear Algebra"),
            video(2, "Geometry"),
            video(3, "ALGORITHMS"),
        ];

        let filter = TitleSearchFilter::new("alg");
        let filtered = filter.apply(videos.iter().collect(), &Viewer::default());

        assert_eq!(titles(&filtered), vec!["Linear Algebra", "ALGORITHMS"]);
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let videos = vec![video(1, "Linear Algebra"), video(2, "Geometry")];

        for query in ["", "   ", "\t"] {
            let filter = TitleSearchFilter::new(query);
            assert!(filter.is_blank());
            let filtered = filter.apply(videos.iter().collect(), &Viewer::default());
            assert_eq!(filtered.len(), 2);
        }
    }

    #[test]
    fn test_query_spaces_are_significant() {
        let videos = vec![video(1, "Linear Algebra"), video(2, "Algebra")];

        let filter = TitleSearchFilter::new(" algebra");
        let filtered = filter.apply(videos.iter().collect(), &Viewer::default());

        assert_eq!(titles(&filtered), vec!["Linear Algebra"]);
    }
}

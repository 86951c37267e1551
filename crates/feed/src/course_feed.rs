//! # Course feed
//!
//! Turns the raw video list into the sections of the catalog screen:
//!
//! ```text
//! sort by order -> mentor filter -> track filter -> title search -> popular / recommended
//! ```
//!
//! Every step borrows the input and returns references into it. Nothing is
//! cached between calls except inside [`CourseFeed`], which keeps the
//! track-scoped set so that typing in the search box only re-runs the last
//! two steps.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{MentorOwnershipFilter, TitleSearchFilter, TrackFilter};
use crate::traits::Filter;
use catalog::{Video, Viewer};
use tracing::debug;

/// A video must be rated strictly above this to be popular
pub const POPULAR_STAR_THRESHOLD: f32 = 3.5;

/// Maximum number of popular videos
pub const POPULAR_LIMIT: usize = 5;

/// Outcome of running the search box query over the track-scoped set.
#[derive(Debug, Clone, Default)]
pub struct SearchResult<'a> {
    /// Videos the sections are built from
    pub filtered: Vec<&'a Video>,
    /// Live dropdown entries; empty when the query is blank
    pub suggestions: Vec<&'a Video>,
}

/// The two content sections of the catalog screen.
#[derive(Debug, Clone, Default)]
pub struct FeedPartition<'a> {
    pub popular: Vec<&'a Video>,
    pub recommended: Vec<&'a Video>,
}

/// Everything the catalog screen renders for one query.
#[derive(Debug, Clone, Default)]
pub struct FeedSections<'a> {
    pub suggestions: Vec<&'a Video>,
    pub popular: Vec<&'a Video>,
    pub recommended: Vec<&'a Video>,
}

/// Which section a video goes to, and why
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Rated above the threshold and among the first qualifying videos
    Popular,
    /// Rated above the threshold but the popular section was already full
    PopularFull,
    /// Rated at or below the threshold, or not rated with a number
    BelowThreshold,
}

/// References to `videos` sorted by ascending `order`.
///
/// The sort is stable: videos sharing an `order` keep their input order.
pub fn sort_by_order(videos: &[Video]) -> Vec<&Video> {
    let mut sorted: Vec<&Video> = videos.iter().collect();
    sorted.sort_by_key(|video| video.order);
    sorted
}

/// The track-scoped set: the viewer's mentor's videos in the viewer's
/// track, by ascending `order`.
pub fn compute_visible_set<'a>(all_videos: &'a [Video], viewer: &Viewer) -> Vec<&'a Video> {
    let pipeline = FilterPipeline::new()
        .add_filter(MentorOwnershipFilter)
        .add_filter(TrackFilter);

    pipeline.apply(sort_by_order(all_videos), viewer)
}

/// Narrow the track-scoped set to the search box query.
///
/// A blank query passes everything through and suggests nothing. Otherwise
/// both the result and the suggestions are the videos whose title contains
/// the query, ignoring case, in input order.
pub fn apply_search<'a>(track_scoped: &[&'a Video], query: &str) -> SearchResult<'a> {
    let filter = TitleSearchFilter::new(query);
    if filter.is_blank() {
        return SearchResult {
            filtered: track_scoped.to_vec(),
            suggestions: Vec::new(),
        };
    }

    // The search filter ignores the viewer
    let filtered = filter.apply(track_scoped.to_vec(), &Viewer::default());
    debug!(
        "Search {:?} kept {} of {} videos",
        query,
        filtered.len(),
        track_scoped.len()
    );
    SearchResult {
        suggestions: filtered.clone(),
        filtered,
    }
}

/// Split the searched set into popular and recommended videos.
///
/// Popular holds the first [`POPULAR_LIMIT`] entries rated above
/// [`POPULAR_STAR_THRESHOLD`]; every other entry is recommended. Each entry
/// lands in exactly one section, decided by its position, so two
/// value-identical videos are still placed independently.
pub fn partition_popular_vs_recommended<'a>(filtered: &[&'a Video]) -> FeedPartition<'a> {
    let mut partition = FeedPartition::default();
    for &video in filtered {
        match placement(video, partition.popular.len()) {
            Placement::Popular => partition.popular.push(video),
            Placement::PopularFull | Placement::BelowThreshold => {
                partition.recommended.push(video)
            }
        }
    }
    partition
}

/// Where `video` goes given how many popular videos precede it.
pub fn placement(video: &Video, popular_so_far: usize) -> Placement {
    // Written as a negation so that a NaN rating is never popular
    if !(video.stars > POPULAR_STAR_THRESHOLD) {
        Placement::BelowThreshold
    } else if popular_so_far >= POPULAR_LIMIT {
        Placement::PopularFull
    } else {
        Placement::Popular
    }
}

/// Track-scoped feed of one viewer, built once per refresh of the video list.
///
/// ## Usage
/// ```ignore
/// let feed = CourseFeed::new(index.videos(), &viewer);
/// for query in ["", "a", "al", "alg"] {
///     let sections = feed.sections(query);
///     render(&sections);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CourseFeed<'a> {
    track_scoped: Vec<&'a Video>,
}

impl<'a> CourseFeed<'a> {
    /// Sort and filter `all_videos` for `viewer`.
    pub fn new(all_videos: &'a [Video], viewer: &Viewer) -> Self {
        let track_scoped = compute_visible_set(all_videos, viewer);
        debug!(
            "Built course feed: {} of {} videos visible",
            track_scoped.len(),
            all_videos.len()
        );
        Self { track_scoped }
    }

    /// The viewer's videos, by ascending `order`
    pub fn track_scoped(&self) -> &[&'a Video] {
        &self.track_scoped
    }

    /// Suggestions and sections for the current search box content.
    pub fn sections(&self, query: &str) -> FeedSections<'a> {
        let SearchResult {
            filtered,
            suggestions,
        } = apply_search(&self.track_scoped, query);
        let FeedPartition {
            popular,
            recommended,
        } = partition_popular_vs_recommended(&filtered);

        FeedSections {
            suggestions,
            popular,
            recommended,
        }
    }
}

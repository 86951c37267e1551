//! Parser for the catalog JSON exports.
//!
//! Each export is a single JSON array:
//! - videos.json: `[{ "id", "title", "order", "category", "mentor_email", "stars", "progresses": [...] }]`
//! - reviews.json: `[{ "id", "videoId", "menteeEmail", "stars", "comment" }]`
//! - mentors.json: `[{ "name", "email", "profile_url" }]`
//! - users.json: `[{ "email", "name", "mentor_email", "mentor_name", "track" }]`
//!
//! Parsing only checks shape and value ranges. Cross-record checks
//! (duplicates, dangling references) happen when the index is built.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole export file, mapping a missing file to `FileNotFound`.
fn read_export(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })
}

/// Decode a JSON array of records, tagging errors with the file name.
fn parse_array<T: DeserializeOwned>(content: &str, file: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse video records from JSON text
pub fn parse_videos_str(content: &str, file: &str) -> Result<Vec<Video>> {
    let videos: Vec<Video> = parse_array(content, file)?;
    for video in &videos {
        validate_video_stars(video)?;
        if let Some(progress) = video.progresses.iter().find(|p| p.video_id != video.id) {
            return Err(CatalogError::MissingReference {
                entity: format!("video (progress of {})", progress.mentee_email),
                id: progress.video_id,
            });
        }
    }
    Ok(videos)
}

/// Parse the videos.json file
pub fn parse_videos(path: &Path) -> Result<Vec<Video>> {
    parse_videos_str(&read_export(path)?, &file_name(path))
}

/// Parse review records from JSON text
pub fn parse_reviews_str(content: &str, file: &str) -> Result<Vec<Review>> {
    let reviews: Vec<Review> = parse_array(content, file)?;
    for review in &reviews {
        if !(1..=5).contains(&review.stars) {
            return Err(CatalogError::InvalidValue {
                field: format!("stars of review {}", review.id),
                value: review.stars.to_string(),
            });
        }
    }
    Ok(reviews)
}

/// Parse the reviews.json file
pub fn parse_reviews(path: &Path) -> Result<Vec<Review>> {
    parse_reviews_str(&read_export(path)?, &file_name(path))
}

/// Parse the mentors.json file
pub fn parse_mentors(path: &Path) -> Result<Vec<Mentor>> {
    parse_array(&read_export(path)?, &file_name(path))
}

/// Parse viewer profiles from JSON text
pub fn parse_viewers_str(content: &str, file: &str) -> Result<Vec<Viewer>> {
    parse_array(content, file)
}

/// Parse the users.json file
pub fn parse_viewers(path: &Path) -> Result<Vec<Viewer>> {
    parse_viewers_str(&read_export(path)?, &file_name(path))
}

/// Reject ratings outside [0, 5], NaN included.
fn validate_video_stars(video: &Video) -> Result<()> {
    if (0.0..=5.0).contains(&video.stars) {
        Ok(())
    } else {
        Err(CatalogError::InvalidValue {
            field: format!("stars of video {}", video.id),
            value: video.stars.to_string(),
        })
    }
}

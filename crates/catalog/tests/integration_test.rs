//! Integration tests for loading an export directory.

use catalog::{CatalogError, CatalogIndex, VideoDetail};
use std::fs;
use std::path::PathBuf;

const VIDEOS: &str = r#"[
    { "id": 1, "title": "Algebra", "order": 2, "category": "Math",
      "mentor_email": "m@x.com", "stars": 4.0,
      "progresses": [{ "videoId": 1, "menteeEmail": "learner@x.com" }] },
    { "id": 2, "title": "Geometry", "order": 1, "category": "Math",
      "mentor_email": "m@x.com", "stars": 3.0 },
    { "id": 3, "title": "Physics", "order": 3, "category": "Science",
      "mentor_email": "m@x.com", "stars": 4.2 }
]"#;

const REVIEWS: &str = r#"[
    { "id": 1, "videoId": 1, "menteeEmail": "learner@x.com", "stars": 4, "comment": "Bien" }
]"#;

const MENTORS: &str = r#"[
    { "name": "Grace", "email": "m@x.com" }
]"#;

const USERS: &str = r#"[
    { "email": "learner@x.com", "name": "Ada", "mentor_email": "m@x.com",
      "mentor_name": "Grace", "track": "math" }
]"#;

/// Write an export directory under the system temp dir.
fn write_exports(name: &str, files: &[(&str, &str)]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "catalog-test-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    for (file, content) in files {
        fs::write(dir.join(file), content).unwrap();
    }
    dir
}

#[test]
fn test_load_from_dir() {
    let dir = write_exports(
        "full",
        &[
            ("videos.json", VIDEOS),
            ("reviews.json", REVIEWS),
            ("mentors.json", MENTORS),
            ("users.json", USERS),
        ],
    );

    let index = CatalogIndex::load_from_dir(&dir).unwrap();
    assert_eq!(index.counts(), (3, 1, 1, 1));

    let viewer = index.get_viewer("LEARNER@x.com").unwrap();
    assert_eq!(viewer.track.as_deref(), Some("math"));

    let detail = VideoDetail::build(&index, 1, viewer.email.as_deref()).unwrap();
    assert_eq!(detail.view_count, 1);
    assert_eq!(detail.average_rating, 4.0);
    assert!(detail.viewer_has_reviewed);
    assert_eq!(detail.mentor.unwrap().name, "Grace");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_export_file() {
    let dir = write_exports(
        "missing",
        &[
            ("videos.json", VIDEOS),
            ("reviews.json", REVIEWS),
            ("mentors.json", MENTORS),
        ],
    );

    let err = CatalogIndex::load_from_dir(&dir).unwrap_err();
    match err {
        CatalogError::FileNotFound { path } => assert!(path.ends_with("users.json")),
        other => panic!("unexpected error: {other:?}"),
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_dangling_review() {
    let dir = write_exports(
        "dangling",
        &[
            ("videos.json", VIDEOS),
            (
                "reviews.json",
                r#"[{ "id": 5, "videoId": 77, "menteeEmail": "a@x.com", "stars": 3 }]"#,
            ),
            ("mentors.json", MENTORS),
            ("users.json", USERS),
        ],
    );

    let err = CatalogIndex::load_from_dir(&dir).unwrap_err();
    assert!(matches!(err, CatalogError::MissingReference { id: 77, .. }));

    fs::remove_dir_all(&dir).unwrap();
}

//! End-to-end checks for the annotation file pipeline: backup before
//! overwrite, temporary output cleanup, and pass-through fidelity.

use std::fs;

use tempfile::tempdir;
use tripmap_core::annotate::{self, AnnotateOptions, ImageLookup, OUTPUT_FILENAME};
use tripmap_core::Result;

struct NoImages;

impl ImageLookup for NoImages {
    fn lookup(&self, _query: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

const POI_FILE: &str = r#"[
  {
    "name": "Château de Bonaguil",
    "location": "Fumel, France",
    "lat": 44.5344,
    "lng": 1.0106,
    "category": "castle",
    "image": null
  },
  {
    "name": "Gouffre de Padirac",
    "location": "Padirac, France",
    "lat": 44.8576,
    "lng": 1.756,
    "category": "cave",
    "image": "https://img.example/padirac.jpg",
    "extra": {"rating": 4.7}
  }
]"#;

#[test]
fn mock_run_backs_up_then_replaces_the_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("poi.json");
    fs::write(&input, POI_FILE).unwrap();

    let opts = AnnotateOptions { mock: true, no_limit: false };
    let report = annotate::run(&input, &NoImages, &opts).unwrap();

    assert_eq!(report.stats.total, 2);
    assert_eq!(report.stats.skipped, 1);
    assert_eq!(report.stats.annotated, 1);
    assert!(!report.stats.limit_reached);

    // Backup holds the pre-run content.
    assert_eq!(fs::read_to_string(&report.backup_path).unwrap(), POI_FILE);
    assert!(report
        .backup_path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("poi_with_images.json.backup-"));

    // Temporary output is gone after the overwrite.
    assert!(!dir.path().join(OUTPUT_FILENAME).exists());

    // The input now carries the mock URL, and the pre-imaged record kept its
    // URL and its unmodeled fields.
    let updated: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&input).unwrap()).unwrap();
    assert_eq!(
        updated[0]["image"].as_str().unwrap(),
        "https://example.com/images/chteaudebonaguil-fumelfrance.jpg"
    );
    assert_eq!(updated[1]["image"].as_str().unwrap(), "https://img.example/padirac.jpg");
    assert_eq!(updated[1]["extra"]["rating"], serde_json::json!(4.7));
}

#[test]
fn fruitless_run_leaves_records_unchanged_but_still_rotates_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("poi.json");
    fs::write(&input, POI_FILE).unwrap();

    let report = annotate::run(&input, &NoImages, &AnnotateOptions::default()).unwrap();
    assert_eq!(report.stats.annotated, 0);
    assert_eq!(report.stats.skipped, 1);
    assert!(report.backup_path.exists());
    assert!(!dir.path().join(OUTPUT_FILENAME).exists());

    let updated: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&input).unwrap()).unwrap();
    assert!(updated[0]["image"].is_null());
}

#[test]
fn missing_input_fails_before_any_write() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("poi.json");

    let err = annotate::run(&input, &NoImages, &AnnotateOptions::default());
    assert!(err.is_err());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

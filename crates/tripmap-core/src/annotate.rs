// crates/tripmap-core/src/annotate.rs

//! # Batch Image Annotation
//!
//! Single pass over the POI record list, in order. Records that already
//! carry an image are never re-fetched; at most [`MAX_NEW_IMAGES`] records
//! receive a new one per run (unbounded under the no-limit override); a
//! failed lookup is logged and the record passes through unchanged.
//!
//! The file handling is deliberately boring: write the annotated array to a
//! temporary sibling, back up the original, copy the result over it, remove
//! the temporary file.

use crate::error::Result;
use crate::loader::{self, RawRecord};
use crate::text::mock_image_url;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Ceiling of newly annotated records per run, unless `no_limit` is set.
pub const MAX_NEW_IMAGES: usize = 5;

/// Filename the annotated array is written to before it replaces the input.
pub const OUTPUT_FILENAME: &str = "poi_with_images.json";

/// A source of representative image URLs for a search query.
///
/// `Ok(None)` means the lookup worked but found nothing; `Err` means the
/// lookup itself failed. The pipeline treats both as "leave the record
/// alone", but failures are logged as errors.
pub trait ImageLookup {
    fn lookup(&self, query: &str) -> Result<Option<String>>;
}

/// A lookup that never finds anything. Mock runs and tests use it where a
/// real client is pointless.
pub struct NoLookup;

impl ImageLookup for NoLookup {
    fn lookup(&self, _query: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Run configuration, usually taken from the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotateOptions {
    /// Generate deterministic placeholder URLs instead of calling a lookup.
    pub mock: bool,
    /// Lift the per-run annotation ceiling.
    pub no_limit: bool,
}

impl AnnotateOptions {
    /// Reads the `MOCK=true` / `NOLIMIT=true` toggles.
    pub fn from_env() -> Self {
        AnnotateOptions {
            mock: env_flag("MOCK"),
            no_limit: env_flag("NOLIMIT"),
        }
    }

    pub fn max_new_images(&self) -> Option<usize> {
        if self.no_limit {
            None
        } else {
            Some(MAX_NEW_IMAGES)
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| v == "true").unwrap_or(false)
}

/// Counters for one annotation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total: usize,
    /// Records that already had an image and were passed through.
    pub skipped: usize,
    /// Records that received a new image this run.
    pub annotated: usize,
    /// Whether the ceiling cut the run short.
    pub limit_reached: bool,
}

/// Annotates records in place. Record order is preserved; untouched records
/// keep every field exactly as loaded.
pub fn annotate_records(
    records: &mut [RawRecord],
    lookup: &dyn ImageLookup,
    opts: &AnnotateOptions,
) -> RunStats {
    let max = opts.max_new_images();
    let mut stats = RunStats { total: records.len(), ..RunStats::default() };

    for (index, record) in records.iter_mut().enumerate() {
        let name = field_str(record, "name");
        let location = field_str(record, "location");

        if record.get("image").is_some_and(|v| !v.is_null()) {
            log::info!("[{}] skipped: {name:?} already has an image", index + 1);
            stats.skipped += 1;
            continue;
        }

        if max.is_some_and(|m| stats.annotated >= m) {
            log::info!("[{}] skipped: {name:?}, annotation limit reached", index + 1);
            continue;
        }

        if opts.mock {
            let url = mock_image_url(&name, &location);
            log::info!("[{}] mock: {name:?} -> {url}", index + 1);
            record.insert("image".to_string(), Value::String(url));
            stats.annotated += 1;
            continue;
        }

        let query = format!("{name} {location}");
        match lookup.lookup(&query) {
            Ok(Some(url)) => {
                log::info!("[{}] found: {name:?} -> {url}", index + 1);
                record.insert("image".to_string(), Value::String(url));
                stats.annotated += 1;
            }
            Ok(None) => {
                log::info!("[{}] no image: {name:?}", index + 1);
            }
            Err(e) => {
                log::error!("[{}] lookup failed for {name:?}: {e}", index + 1);
            }
        }
    }

    stats.limit_reached = max.is_some_and(|m| stats.annotated >= m);
    stats
}

fn field_str(record: &RawRecord, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// What one pipeline run did and where the backup landed.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub stats: RunStats,
    pub backup_path: PathBuf,
}

/// Backup filename for a run starting at `now`: the output filename plus an
/// ISO-8601 UTC timestamp with `:` and `.` flattened to `-`.
pub fn backup_filename(now: DateTime<Utc>) -> String {
    format!("{OUTPUT_FILENAME}.backup-{}", now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Runs the whole pipeline against `input`:
/// read, annotate, write the temporary output, back up the original, replace
/// it, drop the temporary file. Nothing on disk changes if reading or
/// annotation setup fails.
pub fn run(input: &Path, lookup: &dyn ImageLookup, opts: &AnnotateOptions) -> Result<RunReport> {
    let mut records = loader::load_raw_records(input)?;
    let stats = annotate_records(&mut records, lookup, opts);

    let dir = input.parent().unwrap_or_else(|| Path::new("."));
    let output_path = dir.join(OUTPUT_FILENAME);
    let backup_path = dir.join(backup_filename(Utc::now()));

    let file = File::create(&output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;

    // Backup strictly before the original is touched.
    fs::copy(input, &backup_path)?;
    log::info!("backup created: {}", backup_path.display());

    fs::copy(&output_path, input)?;
    fs::remove_file(&output_path)?;
    log::info!("updated: {}", input.display());

    Ok(RunReport { stats, backup_path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TripError;

    struct FixedLookup(Option<String>);

    impl ImageLookup for FixedLookup {
        fn lookup(&self, _query: &str) -> Result<Option<String>> {
            Ok(self.0.clone())
        }
    }

    struct FailingLookup;

    impl ImageLookup for FailingLookup {
        fn lookup(&self, _query: &str) -> Result<Option<String>> {
            Err(TripError::NotFound("boom".to_string()))
        }
    }

    fn record(name: &str, image: Value) -> RawRecord {
        let mut r = RawRecord::new();
        r.insert("name".to_string(), Value::String(name.to_string()));
        r.insert("location".to_string(), Value::String("Lot, France".to_string()));
        r.insert("image".to_string(), image);
        r
    }

    fn imageless(n: usize) -> Vec<RawRecord> {
        (0..n).map(|i| record(&format!("poi {i}"), Value::Null)).collect()
    }

    #[test]
    fn records_with_images_are_never_refetched() {
        let mut records = vec![record("done", Value::String("https://a/b.jpg".into()))];
        let before = records.clone();
        let stats = annotate_records(&mut records, &FailingLookup, &AnnotateOptions::default());
        assert_eq!(records, before);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.annotated, 0);
    }

    #[test]
    fn quota_caps_new_annotations_at_five() {
        let mut records = imageless(8);
        let lookup = FixedLookup(Some("https://img.example/x.jpg".to_string()));
        let stats = annotate_records(&mut records, &lookup, &AnnotateOptions::default());

        assert_eq!(stats.annotated, MAX_NEW_IMAGES);
        assert!(stats.limit_reached);
        let with_images = records.iter().filter(|r| !r["image"].is_null()).count();
        assert_eq!(with_images, MAX_NEW_IMAGES);
        // The excess records are byte-for-byte untouched.
        assert!(records[5..].iter().all(|r| r["image"].is_null()));
    }

    #[test]
    fn skipped_records_do_not_consume_quota() {
        let mut records = vec![
            record("a", Value::String("https://done.jpg".into())),
            record("b", Value::String("https://done.jpg".into())),
        ];
        records.extend(imageless(5));
        let lookup = FixedLookup(Some("https://img.example/x.jpg".to_string()));
        let stats = annotate_records(&mut records, &lookup, &AnnotateOptions::default());

        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.annotated, 5);
    }

    #[test]
    fn no_limit_annotates_everything() {
        let mut records = imageless(9);
        let lookup = FixedLookup(Some("https://img.example/x.jpg".to_string()));
        let opts = AnnotateOptions { no_limit: true, ..AnnotateOptions::default() };
        let stats = annotate_records(&mut records, &lookup, &opts);

        assert_eq!(stats.annotated, 9);
        assert!(!stats.limit_reached);
    }

    #[test]
    fn lookup_failure_passes_the_record_through() {
        let mut records = imageless(3);
        let before = records.clone();
        let stats = annotate_records(&mut records, &FailingLookup, &AnnotateOptions::default());

        assert_eq!(records, before);
        assert_eq!(stats.annotated, 0);
        assert!(!stats.limit_reached);
    }

    #[test]
    fn empty_lookup_results_do_not_count_toward_quota() {
        let mut records = imageless(3);
        let stats = annotate_records(&mut records, &FixedLookup(None), &AnnotateOptions::default());
        assert_eq!(stats.annotated, 0);
        assert!(records.iter().all(|r| r["image"].is_null()));
    }

    #[test]
    fn mock_mode_uses_the_deterministic_url() {
        let mut records = vec![record("Gouffre de Padirac", Value::Null)];
        let opts = AnnotateOptions { mock: true, ..AnnotateOptions::default() };
        // Lookup must not be consulted in mock mode.
        annotate_records(&mut records, &FailingLookup, &opts);
        assert_eq!(
            records[0]["image"].as_str().unwrap(),
            "https://example.com/images/gouffredepadirac-lotfrance.jpg"
        );
    }

    #[test]
    fn unknown_fields_survive_annotation() {
        let mut r = record("x", Value::Null);
        r.insert("rating".to_string(), Value::from(4.5));
        let mut records = vec![r];
        let lookup = FixedLookup(Some("https://img.example/x.jpg".to_string()));
        annotate_records(&mut records, &lookup, &AnnotateOptions::default());
        assert_eq!(records[0]["rating"], Value::from(4.5));
    }

    #[test]
    fn backup_filename_is_iso_with_flattened_separators() {
        let now = DateTime::parse_from_rfc3339("2025-07-04T12:34:56.789Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            backup_filename(now),
            "poi_with_images.json.backup-2025-07-04T12-34-56"
        );
    }
}

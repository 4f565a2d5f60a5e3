// crates/tripmap-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O) and wholesale JSON array parsing.
//! Every dataset here is a flat array read fully into memory; there is no
//! cache layer and no incremental update.

use crate::error::{Result, TripError};
use crate::model::{Campsite, Group, Poi};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// A raw POI record for the annotation pipeline. Keeping the record as a
/// JSON map means fields this crate does not model survive a rewrite
/// untouched.
pub type RawRecord = serde_json::Map<String, Value>;

/// One campsite file together with the group its markers belong to.
#[derive(Debug, Clone)]
pub struct CampsiteSource {
    pub path: PathBuf,
    pub group: Group,
}

/// Opens a file and buffers it, mapping a missing file to a descriptive error.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)
        .map_err(|e| TripError::NotFound(format!("Dataset not found at {}: {}", path.display(), e)))?;
    Ok(Box::new(BufReader::new(file)))
}

fn load_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let reader = open_stream(path)?;
    let records = serde_json::from_reader(reader).map_err(TripError::Json)?;
    Ok(records)
}

/// Loads one campsite file wholesale.
pub fn load_campsites(path: &Path) -> Result<Vec<Campsite>> {
    load_array(path)
}

/// Loads one POI file wholesale.
pub fn load_pois(path: &Path) -> Result<Vec<Poi>> {
    load_array(path)
}

/// Loads several campsite files, keeping each file's records tagged with its
/// group.
pub fn load_campsite_sources(sources: &[CampsiteSource]) -> Result<Vec<(Group, Vec<Campsite>)>> {
    let mut out = Vec::with_capacity(sources.len());
    for source in sources {
        out.push((source.group, load_campsites(&source.path)?));
    }
    Ok(out)
}

/// Loads sibling POI files (POIs, castles, canoe spots, ...) into one list,
/// preserving per-file record order.
pub fn load_poi_sources(paths: &[PathBuf]) -> Result<Vec<Poi>> {
    let mut out = Vec::new();
    for path in paths {
        out.extend(load_pois(path)?);
    }
    Ok(out)
}

/// Loads a POI file as raw JSON maps for the annotation pipeline.
pub fn load_raw_records(path: &Path) -> Result<Vec<RawRecord>> {
    load_array(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const POI_SAMPLE: &str = r#"[
        {
            "name": "Gouffre de Padirac",
            "location": "Padirac, France",
            "lat": 44.8576,
            "lng": 1.7560,
            "category": "cave",
            "image": null,
            "rating": 4.7
        }
    ]"#;

    #[test]
    fn missing_file_is_a_not_found_error() {
        let err = load_pois(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, TripError::NotFound(_)));
    }

    #[test]
    fn raw_records_keep_unknown_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poi.json");
        let mut f = File::create(&path).unwrap();
        f.write_all(POI_SAMPLE.as_bytes()).unwrap();

        let records = load_raw_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].contains_key("rating"));
        assert!(records[0]["image"].is_null());
    }

    #[test]
    fn typed_load_parses_the_same_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poi.json");
        let mut f = File::create(&path).unwrap();
        f.write_all(POI_SAMPLE.as_bytes()).unwrap();

        let pois = load_pois(&path).unwrap();
        assert_eq!(pois[0].category, "cave");
        assert!(pois[0].image.is_none());
    }
}

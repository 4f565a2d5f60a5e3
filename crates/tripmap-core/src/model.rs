// crates/tripmap-core/src/model.rs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A WGS84 coordinate pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// A campsite record as stored in the campsite JSON files.
///
/// `percent` is the share of the total trip covered when reaching the site,
/// `detour` a human-readable description of the extra driving it costs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Campsite {
    pub name: String,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub website: String,
    pub detour: String,
    pub percent: f64,
}

impl Campsite {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// A point-of-interest record as stored in `poi.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Poi {
    pub name: String,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "nearCampsite", default)]
    pub near_campsite: Option<String>,
}

impl Poi {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Which campsite file a record came from.
///
/// `East` and `West` are the regional corridor candidates; `Visit` holds the
/// shortlisted "to visit" sites that drive the radius filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Group {
    East,
    West,
    Visit,
}

impl Group {
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::East => "east",
            Group::West => "west",
            Group::Visit => "visit",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker glyph used for a POI category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    ForwardArrow,
}

/// Presentation attributes for one POI category.
#[derive(Clone, Copy, Debug)]
pub struct CategoryStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub shape: MarkerShape,
    pub scale: u8,
}

static CATEGORY_STYLES: Lazy<BTreeMap<&'static str, CategoryStyle>> = Lazy::new(|| {
    use MarkerShape::*;
    let mut m = BTreeMap::new();
    m.insert(
        "castle",
        CategoryStyle { label: "Castles", color: "#8B4513", shape: ForwardArrow, scale: 6 },
    );
    m.insert(
        "canoe",
        CategoryStyle { label: "Canoe Locations", color: "#FFD700", shape: Circle, scale: 7 },
    );
    m.insert(
        "climbing_forest",
        CategoryStyle { label: "Climbing & Forest Parks", color: "#228B22", shape: Circle, scale: 8 },
    );
    m.insert(
        "old_city",
        CategoryStyle { label: "Historic Cities", color: "#800080", shape: Circle, scale: 8 },
    );
    m.insert(
        "cave",
        CategoryStyle { label: "Caves & Grottos", color: "#A0522D", shape: Circle, scale: 8 },
    );
    m.insert(
        "hiking_trail",
        CategoryStyle { label: "Hiking Trails", color: "#32CD32", shape: Circle, scale: 8 },
    );
    m.insert(
        "family_activity",
        CategoryStyle { label: "Family Activities", color: "#FF69B4", shape: Circle, scale: 8 },
    );
    m.insert(
        "museum",
        CategoryStyle { label: "Museums", color: "#4169E1", shape: Circle, scale: 8 },
    );
    m.insert(
        "garden",
        CategoryStyle { label: "Gardens & Parks", color: "#90EE90", shape: Circle, scale: 8 },
    );
    m
});

/// The known POI categories with their marker styling.
pub fn category_styles() -> &'static BTreeMap<&'static str, CategoryStyle> {
    &CATEGORY_STYLES
}

/// Simple aggregate statistics for a loaded data set.
#[derive(Debug, Clone, Serialize)]
pub struct DataStats {
    pub east: usize,
    pub west: usize,
    pub visit: usize,
    pub pois_by_category: BTreeMap<String, usize>,
    pub total_pois: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_table_covers_all_known_ids() {
        let styles = category_styles();
        for id in [
            "castle",
            "canoe",
            "climbing_forest",
            "old_city",
            "cave",
            "hiking_trail",
            "family_activity",
            "museum",
            "garden",
        ] {
            assert!(styles.contains_key(id), "missing style for {id}");
        }
        assert_eq!(styles.len(), 9);
    }

    #[test]
    fn poi_round_trips_near_campsite_field_name() {
        let json = r#"{
            "name": "Château de Foix",
            "location": "Foix, France",
            "lat": 42.965,
            "lng": 1.605,
            "category": "castle",
            "nearCampsite": "Camping du Lac"
        }"#;
        let poi: Poi = serde_json::from_str(json).unwrap();
        assert_eq!(poi.near_campsite.as_deref(), Some("Camping du Lac"));
        assert!(poi.image.is_none());

        let out = serde_json::to_value(&poi).unwrap();
        assert!(out.get("nearCampsite").is_some());
    }
}

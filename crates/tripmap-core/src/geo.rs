// crates/tripmap-core/src/geo.rs

use crate::model::LatLng;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers (haversine).
pub fn haversine_km(a: LatLng, b: LatLng) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Returns true if `point` lies within `max_km` of at least one reference
/// point. The threshold is inclusive: a point exactly at `max_km` counts.
pub fn within_any(point: LatLng, refs: &[LatLng], max_km: f64) -> bool {
    refs.iter().any(|r| haversine_km(point, *r) <= max_km)
}

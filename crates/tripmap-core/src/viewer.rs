// crates/tripmap-core/src/viewer.rs

//! # Viewer State
//!
//! One owned struct replaces the marker globals a map page would keep:
//! campsite markers grouped by region, POI markers keyed by category, the
//! category checkbox set, and the radius slider. Every toggle re-runs the
//! distance filter over the full marker list; with a few hundred records
//! there is nothing to index.

use crate::geo::within_any;
use crate::model::{category_styles, Campsite, DataStats, Group, LatLng, Poi};
use crate::route::{corridor_routes, RouteId, RoutePlan};
use std::collections::BTreeMap;

/// Default radius slider position in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Degrees of bounding-box padding per kilometer of radius.
const BOUNDS_PADDING_PER_KM: f64 = 0.01;

/// A campsite marker with its current visibility.
#[derive(Clone, Debug)]
pub struct CampsiteMarker {
    pub site: Campsite,
    pub group: Group,
    pub visible: bool,
}

/// A POI marker. `visible` is recomputed by [`ViewerState::apply_distance_filter`].
#[derive(Clone, Debug)]
pub struct PoiMarker {
    pub poi: Poi,
    pub visible: bool,
}

/// A radius circle around a visible to-visit campsite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: LatLng,
    pub radius_m: f64,
}

/// A latitude/longitude bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// All viewer-side state, owned in one place and passed by reference to the
/// toggle and filter operations.
pub struct ViewerState {
    routes: Vec<(RoutePlan, bool)>,
    campsites: Vec<CampsiteMarker>,
    categories: BTreeMap<String, bool>,
    radius_km: f64,
    pois: Vec<PoiMarker>,
}

impl ViewerState {
    /// Builds the viewer from loaded records. Everything starts visible, the
    /// radius starts at [`DEFAULT_RADIUS_KM`], and the filter is applied once
    /// so the POI visibility is consistent from the start.
    ///
    /// POIs with a category missing from the style table are dropped with a
    /// warning, the way the original viewer refused to place them.
    pub fn new(campsites: Vec<(Group, Vec<Campsite>)>, pois: Vec<Poi>) -> Self {
        let styles = category_styles();

        let campsites = campsites
            .into_iter()
            .flat_map(|(group, sites)| {
                sites
                    .into_iter()
                    .map(move |site| CampsiteMarker { site, group, visible: true })
            })
            .collect();

        let categories: BTreeMap<String, bool> =
            styles.keys().map(|k| (k.to_string(), true)).collect();

        let pois = pois
            .into_iter()
            .filter(|poi| {
                let known = styles.contains_key(poi.category.as_str());
                if !known {
                    log::warn!("unknown category: {} ({})", poi.category, poi.name);
                }
                known
            })
            .map(|poi| PoiMarker { poi, visible: true })
            .collect();

        let mut state = ViewerState {
            routes: corridor_routes().into_iter().map(|r| (r, true)).collect(),
            campsites,
            categories,
            radius_km: DEFAULT_RADIUS_KM,
            pois,
        };
        state.apply_distance_filter();
        state
    }

    // -------------------------------------------------------------------
    // Toggles. Each one re-applies the distance filter in full.
    // -------------------------------------------------------------------

    pub fn toggle_route(&mut self, id: RouteId, visible: bool) {
        for (plan, on) in &mut self.routes {
            if plan.id == id {
                *on = visible;
            }
        }
    }

    /// Shows or hides an entire campsite group (the east/west region
    /// checkboxes, or the whole visit list at once).
    pub fn toggle_group(&mut self, group: Group, visible: bool) {
        for marker in &mut self.campsites {
            if marker.group == group {
                marker.visible = visible;
            }
        }
        self.apply_distance_filter();
    }

    /// Shows or hides a single to-visit campsite by name.
    pub fn toggle_visit_site(&mut self, name: &str, visible: bool) {
        for marker in &mut self.campsites {
            if marker.group == Group::Visit && marker.site.name == name {
                marker.visible = visible;
            }
        }
        self.apply_distance_filter();
    }

    pub fn toggle_category(&mut self, category: &str, visible: bool) {
        if let Some(v) = self.categories.get_mut(category) {
            *v = visible;
        }
        self.apply_distance_filter();
    }

    /// The "All"/"None" buttons.
    pub fn set_all_categories(&mut self, visible: bool) {
        self.categories.values_mut().for_each(|v| *v = visible);
        self.apply_distance_filter();
    }

    pub fn set_radius_km(&mut self, radius_km: f64) {
        self.radius_km = radius_km;
        self.apply_distance_filter();
    }

    // -------------------------------------------------------------------
    // The filter
    // -------------------------------------------------------------------

    /// Recomputes POI visibility from scratch: a POI is shown iff its
    /// category checkbox is on and it lies within the radius (inclusive) of
    /// at least one currently visible campsite of any group.
    pub fn apply_distance_filter(&mut self) {
        let refs: Vec<LatLng> = self
            .campsites
            .iter()
            .filter(|m| m.visible)
            .map(|m| m.site.position())
            .collect();

        for marker in &mut self.pois {
            let category_on = self
                .categories
                .get(marker.poi.category.as_str())
                .copied()
                .unwrap_or(false);
            marker.visible =
                category_on && within_any(marker.poi.position(), &refs, self.radius_km);
        }
    }

    /// Radius circles, one per visible to-visit campsite. Suppressed entirely
    /// while no category checkbox is on, since nothing is being filtered then.
    pub fn radius_circles(&self) -> Vec<Circle> {
        if !self.categories.values().any(|v| *v) {
            return Vec::new();
        }
        self.campsites
            .iter()
            .filter(|m| m.group == Group::Visit && m.visible)
            .map(|m| Circle { center: m.site.position(), radius_m: self.radius_km * 1000.0 })
            .collect()
    }

    /// Bounding box around the visible to-visit campsites, padded so the
    /// radius circles fit. `None` when no visit site is visible.
    pub fn visit_bounds(&self) -> Option<Bounds> {
        let mut positions = self
            .campsites
            .iter()
            .filter(|m| m.group == Group::Visit && m.visible)
            .map(|m| m.site.position());

        let first = positions.next()?;
        let mut bounds = Bounds {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        for p in positions {
            bounds.south = bounds.south.min(p.lat);
            bounds.west = bounds.west.min(p.lng);
            bounds.north = bounds.north.max(p.lat);
            bounds.east = bounds.east.max(p.lng);
        }

        let padding = self.radius_km * BOUNDS_PADDING_PER_KM;
        bounds.south -= padding;
        bounds.west -= padding;
        bounds.north += padding;
        bounds.east += padding;
        Some(bounds)
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn routes(&self) -> impl Iterator<Item = (&RoutePlan, bool)> {
        self.routes.iter().map(|(plan, on)| (plan, *on))
    }

    pub fn route_visible(&self, id: RouteId) -> bool {
        self.routes
            .iter()
            .find(|(plan, _)| plan.id == id)
            .map(|(_, on)| *on)
            .unwrap_or(false)
    }

    pub fn campsites(&self) -> &[CampsiteMarker] {
        &self.campsites
    }

    pub fn pois(&self) -> &[PoiMarker] {
        &self.pois
    }

    pub fn visible_pois(&self) -> impl Iterator<Item = &Poi> {
        self.pois.iter().filter(|m| m.visible).map(|m| &m.poi)
    }

    pub fn category_on(&self, category: &str) -> bool {
        self.categories.get(category).copied().unwrap_or(false)
    }

    pub fn stats(&self) -> DataStats {
        let mut pois_by_category: BTreeMap<String, usize> = BTreeMap::new();
        for marker in &self.pois {
            *pois_by_category.entry(marker.poi.category.clone()).or_default() += 1;
        }
        DataStats {
            east: self.group_len(Group::East),
            west: self.group_len(Group::West),
            visit: self.group_len(Group::Visit),
            total_pois: self.pois.len(),
            pois_by_category,
        }
    }

    fn group_len(&self, group: Group) -> usize {
        self.campsites.iter().filter(|m| m.group == group).count()
    }
}

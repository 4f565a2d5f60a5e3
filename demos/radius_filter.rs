//! Radius filter example for tripmap-rs
//!
//! Builds a small in-memory viewer state and shows how toggles and the
//! radius slider change which POIs are visible.

use tripmap_core::model::{Campsite, Group, Poi};
use tripmap_core::ViewerState;

fn campsite(name: &str, lat: f64, lng: f64) -> Campsite {
    Campsite {
        name: name.to_string(),
        location: "Dordogne, France".to_string(),
        lat,
        lng,
        website: "https://example.org".to_string(),
        detour: "+15 min".to_string(),
        percent: 60.0,
    }
}

fn poi(name: &str, category: &str, lat: f64, lng: f64) -> Poi {
    Poi {
        name: name.to_string(),
        location: "Dordogne, France".to_string(),
        lat,
        lng,
        category: category.to_string(),
        website: None,
        image: None,
        near_campsite: None,
    }
}

fn show(viewer: &ViewerState, label: &str) {
    let names: Vec<_> = viewer.visible_pois().map(|p| p.name.as_str()).collect();
    println!("{label}: {names:?}");
}

fn main() {
    let mut viewer = ViewerState::new(
        vec![(Group::Visit, vec![campsite("Camping La Bouysse", 44.88, 1.02)])],
        vec![
            poi("Château de Beynac", "castle", 44.84, 1.15),
            poi("Gouffre de Padirac", "cave", 44.86, 1.76),
            poi("Jardins de Marqueyssac", "garden", 44.83, 1.16),
        ],
    );

    show(&viewer, "default 50 km");

    viewer.set_radius_km(10.0);
    show(&viewer, "narrowed to 10 km");

    viewer.set_radius_km(100.0);
    show(&viewer, "widened to 100 km");

    viewer.toggle_category("castle", false);
    show(&viewer, "castles unchecked");

    viewer.toggle_visit_site("Camping La Bouysse", false);
    show(&viewer, "campsite hidden (no reference points)");

    viewer.toggle_visit_site("Camping La Bouysse", true);
    println!("radius circles: {:?}", viewer.radius_circles());
    println!("visit bounds: {:?}", viewer.visit_bounds());
}

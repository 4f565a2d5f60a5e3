// crates/tripmap-core/src/route.rs

//! The two candidate driving corridors, kept as plain data. Actually asking
//! a directions service to render them is up to the host map.

/// Which corridor a route plan describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RouteId {
    East,
    West,
}

/// An intermediate stopover constraining a routing request.
#[derive(Clone, Debug)]
pub struct Waypoint {
    pub location: String,
    pub stopover: bool,
}

impl Waypoint {
    fn stop(location: &str) -> Self {
        Waypoint { location: location.to_string(), stopover: true }
    }
}

/// A full routing request plus its polyline styling.
#[derive(Clone, Debug)]
pub struct RoutePlan {
    pub id: RouteId,
    pub origin: String,
    pub destination: String,
    pub waypoints: Vec<Waypoint>,
    pub color: &'static str,
    pub weight: u32,
}

/// The two corridor candidates: east via Luxembourg and Dijon, west via
/// Beauvais and Orléans.
pub fn corridor_routes() -> Vec<RoutePlan> {
    vec![
        RoutePlan {
            id: RouteId::East,
            origin: "Utrecht, Netherlands".to_string(),
            destination: "Montirat, Tarn, France".to_string(),
            waypoints: vec![Waypoint::stop("Luxembourg City"), Waypoint::stop("Dijon, France")],
            color: "#0000ff",
            weight: 4,
        },
        RoutePlan {
            id: RouteId::West,
            origin: "Utrecht, Netherlands".to_string(),
            destination: "Montirat, Tarn, France".to_string(),
            waypoints: vec![Waypoint::stop("Beauvais, France"), Waypoint::stop("Orléans, France")],
            color: "#ff0000",
            weight: 4,
        },
    ]
}

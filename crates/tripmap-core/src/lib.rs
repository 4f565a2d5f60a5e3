// crates/tripmap-core/src/lib.rs

//! # tripmap-core
//!
//! Data layer for a trip-planning map viewer: campsite and POI records, the
//! haversine radius filter over an owned viewer state, and the batch
//! pipeline that annotates a POI file with representative image URLs.
//!
//! Map rendering and UI construction are explicitly out of scope; this crate
//! computes what a host map should show, never how.

pub mod annotate;
pub mod error;
pub mod geo;
pub mod loader;
pub mod model;
pub mod route;
#[cfg(feature = "fetch")]
pub mod search;
pub mod text;
pub mod viewer;

// Re-exports
pub use crate::annotate::{AnnotateOptions, ImageLookup, NoLookup, RunStats};
pub use crate::error::{Result, TripError};
pub use crate::model::{Campsite, DataStats, Group, LatLng, Poi};
pub use crate::viewer::ViewerState;

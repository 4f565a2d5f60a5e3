//! tripmap-cli
//! ===========
//!
//! Command-line interface for the `tripmap-core` trip-planning data set.
//!
//! This crate primarily provides a binary (`tripmap-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Basic usage:
//!
//! ```text
//! tripmap-cli --help
//! MOCK=true tripmap-cli annotate
//! tripmap-cli filter --data-dir trip --radius-km 30
//! tripmap-cli stats --data-dir trip
//! ```
//!
//! For programmatic access to the records, filter, and annotation pipeline,
//! use the `tripmap-core` crate directly.

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.

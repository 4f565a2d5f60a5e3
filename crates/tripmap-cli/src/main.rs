//! tripmap-cli — Command-line interface for tripmap-core
//!
//! This binary drives the two jobs of the trip-planning data set from your
//! terminal: the batch image-annotation pipeline over `poi.json`, and an
//! offline rendition of the map viewer's radius filter.
//!
//! Usage examples
//! --------------
//!
//! - Annotate up to five imageless POIs with mock URLs
//!   $ MOCK=true tripmap-cli annotate
//!
//! - Annotate for real, without the per-run ceiling
//!   $ NOLIMIT=true tripmap-cli annotate --credentials .google
//!
//! - Look up a single image
//!   $ tripmap-cli search "Gouffre de Padirac Padirac, France"
//!
//! - Which POIs would the viewer show within 30 km of the visit campsites?
//!   $ tripmap-cli filter --data-dir trip --radius-km 30 --hide-group east,west
//!
//! - Record counts
//!   $ tripmap-cli stats --data-dir trip
//!
//! Data layout
//! -----------
//!
//! The `filter` and `stats` commands expect the viewer's file layout under
//! `--data-dir`: `campsites/east.json`, `campsites/west.json`,
//! `campsites/visit.json`, and `poi.json`. Files that are missing are
//! skipped with a warning, the way the viewer degrades when a fetch fails.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tripmap_core::annotate::{self, AnnotateOptions, NoLookup, RunReport};
use tripmap_core::loader;
use tripmap_core::model::{category_styles, Group};
use tripmap_core::ViewerState;

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    match args.command {
        Commands::Annotate { input, mock, no_limit, credentials } => {
            run_annotate(&input, mock, no_limit, &credentials)
        }
        Commands::Search { query, credentials } => run_search(&query, &credentials),
        Commands::Filter { data_dir, radius_km, categories, hide_group, hide_visit } => {
            run_filter(&data_dir, radius_km, categories, &hide_group, &hide_visit)
        }
        Commands::Stats { data_dir } => run_stats(&data_dir),
    }
}

fn run_annotate(input: &Path, mock: bool, no_limit: bool, credentials: &Path) -> Result<()> {
    let mut opts = AnnotateOptions::from_env();
    opts.mock |= mock;
    opts.no_limit |= no_limit;

    println!("Annotating {}", input.display());
    println!(
        "Mode: {}",
        if opts.mock { "MOCK (fake URLs)" } else { "REAL (calling the image search API)" }
    );
    match opts.max_new_images() {
        Some(max) => println!("Limit: max {max} new images per run"),
        None => println!("Limit: none"),
    }

    let report = if opts.mock {
        // Mock mode never consults a lookup.
        annotate::run(input, &NoLookup, &opts)?
    } else {
        annotate_for_real(input, credentials, &opts)?
    };

    let stats = report.stats;
    println!("Processing complete!");
    println!("- Total entries: {}", stats.total);
    println!("- Skipped (already have images): {}", stats.skipped);
    println!("- Annotated: {}", stats.annotated);
    println!("- Limited by quota: {}", if stats.limit_reached { "yes" } else { "no" });
    println!("- Backup file: {}", report.backup_path.display());
    if !opts.mock {
        println!(
            "- Used {} search API calls ({} of today's 100 left)",
            stats.annotated,
            100usize.saturating_sub(stats.annotated)
        );
    }
    Ok(())
}

#[cfg(feature = "fetch")]
fn annotate_for_real(input: &Path, credentials: &Path, opts: &AnnotateOptions) -> Result<RunReport> {
    use tripmap_core::search::GoogleImageSearch;

    let lookup = GoogleImageSearch::new(load_credentials(credentials));
    Ok(annotate::run(input, &lookup, opts)?)
}

#[cfg(not(feature = "fetch"))]
fn annotate_for_real(_input: &Path, _credentials: &Path, _opts: &AnnotateOptions) -> Result<RunReport> {
    anyhow::bail!("this build has no image-search client (feature 'fetch'); use --mock")
}

#[cfg(feature = "fetch")]
fn run_search(query: &str, credentials: &Path) -> Result<()> {
    use tripmap_core::annotate::ImageLookup;
    use tripmap_core::search::GoogleImageSearch;

    let lookup = GoogleImageSearch::new(load_credentials(credentials));
    match lookup.lookup(query)? {
        Some(url) => {
            println!("{url}");
            Ok(())
        }
        None => {
            println!("No image found");
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "fetch"))]
fn run_search(_query: &str, _credentials: &Path) -> Result<()> {
    anyhow::bail!("this build has no image-search client (feature 'fetch')")
}

/// Loads credentials or exits non-zero with setup instructions, before any
/// file is touched.
#[cfg(feature = "fetch")]
fn load_credentials(path: &Path) -> tripmap_core::search::Credentials {
    use tripmap_core::search::{Credentials, SETUP_INSTRUCTIONS};

    match Credentials::from_file(path) {
        Ok(creds) => creds,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprintln!("{SETUP_INSTRUCTIONS}");
            std::process::exit(1);
        }
    }
}

fn run_filter(
    data_dir: &Path,
    radius_km: f64,
    categories: Option<Vec<String>>,
    hide_group: &[String],
    hide_visit: &[String],
) -> Result<()> {
    let mut viewer = build_viewer(data_dir);
    viewer.set_radius_km(radius_km);

    for name in hide_group {
        match parse_group(name) {
            Some(group) => viewer.toggle_group(group, false),
            None => eprintln!("Unknown group: {name}"),
        }
    }
    for name in hide_visit {
        viewer.toggle_visit_site(name, false);
    }
    if let Some(wanted) = categories {
        viewer.set_all_categories(false);
        for category in &wanted {
            viewer.toggle_category(category, true);
        }
    }

    let mut shown = 0;
    for (id, style) in category_styles() {
        if !viewer.category_on(id) {
            continue;
        }
        let pois: Vec<_> = viewer.visible_pois().filter(|p| p.category == *id).collect();
        if pois.is_empty() {
            continue;
        }
        println!("{} ({}):", style.label, pois.len());
        for poi in &pois {
            match &poi.near_campsite {
                Some(near) => println!("  - {} ({}) near {}", poi.name, poi.location, near),
                None => println!("  - {} ({})", poi.name, poi.location),
            }
        }
        shown += pois.len();
    }

    println!("Visible POIs: {shown} of {}", viewer.pois().len());
    println!(
        "Radius circles: {} at {:.0} km",
        viewer.radius_circles().len(),
        viewer.radius_km()
    );
    if let Some(b) = viewer.visit_bounds() {
        println!(
            "Visit bounds: [{:.4}, {:.4}] .. [{:.4}, {:.4}]",
            b.south, b.west, b.north, b.east
        );
    }
    Ok(())
}

fn run_stats(data_dir: &Path) -> Result<()> {
    let viewer = build_viewer(data_dir);
    let stats = viewer.stats();

    println!("Data set statistics:");
    println!("  Campsites (east): {}", stats.east);
    println!("  Campsites (west): {}", stats.west);
    println!("  Campsites (visit): {}", stats.visit);
    println!("  POIs: {}", stats.total_pois);
    for (category, count) in &stats.pois_by_category {
        println!("    {category}: {count}");
    }
    Ok(())
}

/// Loads the viewer's file layout, skipping files that fail to load the way
/// the original viewer shrugged off a failed fetch.
fn build_viewer(data_dir: &Path) -> ViewerState {
    let sources = [
        (Group::East, data_dir.join("campsites/east.json")),
        (Group::West, data_dir.join("campsites/west.json")),
        (Group::Visit, data_dir.join("campsites/visit.json")),
    ];

    let mut campsites = Vec::new();
    for (group, path) in sources {
        match loader::load_campsites(&path) {
            Ok(sites) => campsites.push((group, sites)),
            Err(e) => log::warn!("failed to load {group} campsites: {e}"),
        }
    }

    let pois = match loader::load_pois(&data_dir.join("poi.json")) {
        Ok(pois) => pois,
        Err(e) => {
            log::warn!("failed to load POIs: {e}");
            Vec::new()
        }
    };

    ViewerState::new(campsites, pois)
}

fn parse_group(name: &str) -> Option<Group> {
    match name {
        "east" => Some(Group::East),
        "west" => Some(Group::West),
        "visit" => Some(Group::Visit),
        _ => None,
    }
}

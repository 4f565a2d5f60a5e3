use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for tripmap-cli
#[derive(Debug, Parser)]
#[command(
    name = "tripmap",
    version,
    about = "CLI for the tripmap trip-planning data set: batch image annotation and radius-filter inspection"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate a POI file with representative image URLs
    Annotate {
        /// POI file to annotate in place (a timestamped backup is kept)
        #[arg(short = 'i', long = "input", default_value = "poi.json")]
        input: PathBuf,

        /// Generate deterministic mock URLs instead of calling the search API
        /// (also enabled by MOCK=true)
        #[arg(long)]
        mock: bool,

        /// Lift the 5-records-per-run annotation ceiling
        /// (also enabled by NOLIMIT=true)
        #[arg(long = "no-limit")]
        no_limit: bool,

        /// Credentials file with GOOGLE_API_KEY and SEARCH_ENGINE_ID
        #[arg(long, default_value = ".google")]
        credentials: PathBuf,
    },

    /// Look up the first image URL for a free-form query
    Search {
        /// The search query, e.g. "Gouffre de Padirac Padirac, France"
        query: String,

        /// Credentials file with GOOGLE_API_KEY and SEARCH_ENGINE_ID
        #[arg(long, default_value = ".google")]
        credentials: PathBuf,
    },

    /// Apply the radius filter and list the POIs a viewer would show
    Filter {
        /// Directory holding campsites/{east,west,visit}.json and poi.json
        #[arg(short = 'd', long = "data-dir", default_value = ".")]
        data_dir: PathBuf,

        /// Radius threshold in kilometers (inclusive)
        #[arg(long = "radius-km", default_value_t = 50.0)]
        radius_km: f64,

        /// Only these POI categories (comma-separated); default: all
        #[arg(long, value_delimiter = ',')]
        categories: Option<Vec<String>>,

        /// Campsite groups to hide: east, west, visit
        #[arg(long = "hide-group", value_delimiter = ',')]
        hide_group: Vec<String>,

        /// Individual to-visit campsites to hide, by name
        #[arg(long = "hide-visit", value_delimiter = ',')]
        hide_visit: Vec<String>,
    },

    /// Show record counts per campsite group and POI category
    Stats {
        /// Directory holding campsites/{east,west,visit}.json and poi.json
        #[arg(short = 'd', long = "data-dir", default_value = ".")]
        data_dir: PathBuf,
    },
}

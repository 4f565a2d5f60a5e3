// crates/tripmap-core/src/search.rs
#![cfg(feature = "fetch")]

//! # Image Search Client
//!
//! Blocking client for the Custom Search API, used by the annotation
//! pipeline. The free tier allows 100 queries per day, which is why the
//! pipeline caps a run at five new images by default.
//!
//! Everything short of a transport failure resolves to "no image": an error
//! field in the envelope, an empty result list, or a response that does not
//! parse at all.

use crate::annotate::ImageLookup;
use crate::error::{Result, TripError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Endpoint for the Custom Search API.
pub const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

const API_KEY_PLACEHOLDER: &str = "YOUR_GOOGLE_API_KEY";
const ENGINE_ID_PLACEHOLDER: &str = "YOUR_SEARCH_ENGINE_ID";

/// Printed when the credentials file is missing or still holds placeholders.
pub const SETUP_INSTRUCTIONS: &str = "\
Please set up your Custom Search API access:
1. Get an API key from: https://console.cloud.google.com/
2. Create a Custom Search Engine: https://cse.google.com/
3. Create a .google file with your credentials:
   GOOGLE_API_KEY=your_api_key_here
   SEARCH_ENGINE_ID=your_search_engine_id_here

The .google file should live in the directory you run from.";

/// API key and search-engine id read from the `.google` file.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub engine_id: String,
}

impl Credentials {
    /// Reads and parses a `.google` file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            TripError::MissingCredentials(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&text)
    }

    /// Parses `KEY=VALUE` lines, tolerating shell-style `export ` prefixes.
    pub fn parse(text: &str) -> Result<Self> {
        let mut api_key = None;
        let mut engine_id = None;

        for line in text.lines() {
            let line = line.strip_prefix("export ").unwrap_or(line);
            if let Some((key, value)) = line.split_once('=') {
                match key.trim() {
                    "GOOGLE_API_KEY" => api_key = Some(value.trim().to_string()),
                    "SEARCH_ENGINE_ID" => engine_id = Some(value.trim().to_string()),
                    _ => {}
                }
            }
        }

        let api_key = require(api_key, "GOOGLE_API_KEY", API_KEY_PLACEHOLDER)?;
        let engine_id = require(engine_id, "SEARCH_ENGINE_ID", ENGINE_ID_PLACEHOLDER)?;
        Ok(Credentials { api_key, engine_id })
    }
}

fn require(value: Option<String>, name: &str, placeholder: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() && v != placeholder => Ok(v),
        _ => Err(TripError::MissingCredentials(format!("{name} is not set"))),
    }
}

// -----------------------------------------------------------------------------
// Response envelope
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    error: Option<ApiError>,
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: Option<String>,
    pagemap: Option<PageMap>,
}

#[derive(Debug, Deserialize)]
struct PageMap {
    cse_image: Option<Vec<PageMapImage>>,
    cse_thumbnail: Option<Vec<PageMapImage>>,
}

#[derive(Debug, Deserialize)]
struct PageMapImage {
    src: Option<String>,
}

/// Picks the image URL out of a decoded envelope: the item link, overridden
/// by the pagemap image, overridden by the pagemap thumbnail.
fn first_image(envelope: SearchEnvelope) -> Option<String> {
    if let Some(err) = envelope.error {
        log::warn!("search API error: {}", err.message);
        return None;
    }

    let item = envelope.items?.into_iter().next()?;
    let mut url = item.link;
    if let Some(pagemap) = item.pagemap {
        if let Some(src) = pagemap.cse_image.and_then(|v| v.into_iter().next()).and_then(|i| i.src)
        {
            url = Some(src);
        }
        if let Some(src) =
            pagemap.cse_thumbnail.and_then(|v| v.into_iter().next()).and_then(|i| i.src)
        {
            url = Some(src);
        }
    }
    url
}

// -----------------------------------------------------------------------------
// Client
// -----------------------------------------------------------------------------

/// Blocking image-search client.
pub struct GoogleImageSearch {
    client: reqwest::blocking::Client,
    credentials: Credentials,
}

impl GoogleImageSearch {
    pub fn new(credentials: Credentials) -> Self {
        GoogleImageSearch { client: reqwest::blocking::Client::new(), credentials }
    }
}

impl ImageLookup for GoogleImageSearch {
    fn lookup(&self, query: &str) -> Result<Option<String>> {
        log::info!("searching images for: {query}");

        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("key", self.credentials.api_key.as_str()),
                ("cx", self.credentials.engine_id.as_str()),
                ("q", query),
                ("searchType", "image"),
                ("num", "1"),
                ("imgType", "photo"),
            ])
            .send()?;
        let body = response.text()?;

        match serde_json::from_str::<SearchEnvelope>(&body) {
            Ok(envelope) => Ok(first_image(envelope)),
            Err(e) => {
                log::warn!("unparseable search response: {e}");
                Ok(None)
            }
        }
    }
}

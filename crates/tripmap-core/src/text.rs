// crates/tripmap-core/src/text.rs

/// Strip every non-alphanumeric character and lowercase the rest.
///
/// This is the normalization used for mock image URLs; it is intentionally a
/// plain ASCII filter, accented characters are dropped rather than
/// transliterated.
///
/// # Examples
///
/// ```rust
/// use tripmap_core::text::sanitize_token;
///
/// assert_eq!(sanitize_token("Château de Foix"), "chteaudefoix");
/// assert_eq!(sanitize_token("Pont d'Arc #1"), "pontdarc1");
/// ```
pub fn sanitize_token(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Deterministic placeholder image URL for a POI, derived only from its name
/// and location.
pub fn mock_image_url(name: &str, location: &str) -> String {
    format!(
        "https://example.com/images/{}-{}.jpg",
        sanitize_token(name),
        sanitize_token(location)
    )
}

/// Stable identifier for a per-campsite toggle: every non-alphanumeric
/// character becomes a hyphen.
pub fn toggle_slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

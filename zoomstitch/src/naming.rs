//! Output naming for reconstructed photographs
//!
//! The collection identifier is the trailing path segment after
//! `resource/` in the input URL; the output filename is a normalized slug
//! of that identifier.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Prefix applied to every output filename.
pub const OUTPUT_PREFIX: &str = "slsa";

/// Errors raised while deriving names from the input URL.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NamingError {
    /// Input URL carries no recognizable resource identifier segment
    #[error("no resource identifier in URL: {0}")]
    IdentifierNotFound(String),
}

/// Pattern matching the resource identifier segment of a collection URL.
fn resource_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Pattern breakdown:
        // /resource/ - literal marker segment
        // ([^/?#]+)  - identifier (anything up to a path, query or
        //              fragment delimiter)
        // /?$        - optional trailing slash, then end of input
        Regex::new(r"/resource/([^/?#]+)/?$").unwrap()
    })
}

/// Extracts the collection identifier from a resource URL.
///
/// The identifier is the trailing path segment after `resource/`:
/// `https://host/resource/B+43122` yields `B+43122`. This is checked before
/// any network activity.
///
/// # Examples
///
/// ```
/// use zoomstitch::naming::extract_identifier;
///
/// let id = extract_identifier("https://example.org/resource/B+43122").unwrap();
/// assert_eq!(id, "B+43122");
/// ```
pub fn extract_identifier(url: &str) -> Result<&str, NamingError> {
    resource_pattern()
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| NamingError::IdentifierNotFound(url.to_string()))
}

/// Normalizes an identifier into a filename-safe slug.
///
/// Lowercases ASCII letters and collapses every run of other characters
/// into a single dash; leading and trailing dashes are dropped.
pub fn slugify(identifier: &str) -> String {
    let mut slug = String::with_capacity(identifier.len());
    for ch in identifier.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Derives the output filename for a collection identifier.
///
/// `B+43122` becomes `slsa-b-43122.jpg`.
pub fn output_filename(identifier: &str) -> String {
    format!("{}-{}.jpg", OUTPUT_PREFIX, slugify(identifier))
}

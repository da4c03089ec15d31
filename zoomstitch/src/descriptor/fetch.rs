//! Descriptor retrieval and parsing

use thiserror::Error;
use tracing::debug;

use crate::transport::{HttpClient, TransportError};

use super::types::TileDescriptor;

/// Filename of the descriptor document, relative to the collection base URL.
pub const DESCRIPTOR_FILENAME: &str = "tiles.json";

/// Errors that can occur while retrieving the tile descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Transport failure retrieving the descriptor document
    #[error("failed to fetch descriptor {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: TransportError,
    },

    /// Response body is not valid JSON or lacks the expected shape
    #[error("failed to parse descriptor {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Builds the descriptor URL for a collection base URL.
///
/// A trailing slash on the base URL is normalized away.
pub fn descriptor_url(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), DESCRIPTOR_FILENAME)
}

/// Fetches and parses the tile descriptor for a collection base URL.
pub fn fetch_descriptor<C: HttpClient>(
    client: &C,
    base_url: &str,
) -> Result<TileDescriptor, DescriptorError> {
    let url = descriptor_url(base_url);
    debug!(url = %url, "fetching tile descriptor");

    let body = client.get(&url).map_err(|source| DescriptorError::Fetch {
        url: url.clone(),
        source,
    })?;

    serde_json::from_slice(&body).map_err(|source| DescriptorError::Parse { url, source })
}

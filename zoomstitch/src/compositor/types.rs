//! Compositor errors

use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur while composing a zoom level's canvas.
///
/// Any single tile failure aborts the whole reconstruction: a missing tile
/// would leave an unrecoverable hole, so there is no partial-result mode.
#[derive(Debug, Error)]
pub enum CompositeError {
    /// A tile GET failed (network error, timeout or non-success status)
    #[error("failed to fetch tile {url}: {source}")]
    TileFetch {
        url: String,
        #[source]
        source: TransportError,
    },

    /// A tile's bytes are not a valid image
    #[error("failed to decode tile {url}: {source}")]
    TileDecode {
        url: String,
        #[source]
        source: image::ImageError,
    },
}

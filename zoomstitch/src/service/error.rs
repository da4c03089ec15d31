//! Service-level error taxonomy

use std::path::PathBuf;

use thiserror::Error;

use crate::compositor::CompositeError;
use crate::descriptor::DescriptorError;
use crate::level::LevelNotFoundError;
use crate::naming::NamingError;

/// Errors surfaced by the reconstruction pipeline.
///
/// There is no internal recovery: the first failure at any stage terminates
/// the operation and is reported with the failing URL or path.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input URL carries no resource identifier; raised before any network
    /// activity
    #[error("identifier extraction failed: {0}")]
    Naming(#[from] NamingError),

    /// Descriptor could not be fetched or parsed
    #[error("descriptor retrieval failed: {0}")]
    Descriptor(#[from] DescriptorError),

    /// Descriptor has no maximum-resolution level
    #[error("level selection failed: {0}")]
    Level(#[from] LevelNotFoundError),

    /// A tile could not be fetched or decoded
    #[error("composition failed: {0}")]
    Compose(#[from] CompositeError),

    /// Output file could not be created
    #[error("failed to create output file {}: {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Canvas could not be encoded as JPEG
    #[error("failed to encode output image {}: {source}", .path.display())]
    OutputEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

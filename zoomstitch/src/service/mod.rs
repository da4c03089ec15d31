//! High-level reconstruction facade
//!
//! Ties the pipeline together: identifier extraction, descriptor fetch,
//! level selection, canvas composition and JPEG persistence.

mod error;

pub use error::ServiceError;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, RgbImage};
use tracing::info;

use crate::compositor::TileCompositor;
use crate::descriptor::fetch_descriptor;
use crate::level::select_level;
use crate::naming;
use crate::transport::HttpClient;

/// JPEG quality used for the output artifact.
const JPEG_QUALITY: u8 = 90;

/// Configuration for the reconstruction service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory where reconstructed images are written.
    pub output_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl ServiceConfig {
    /// Creates a configuration writing into the given directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

/// Reconstructs full-resolution photographs from a deep-zoom tile server.
///
/// # Example
///
/// ```ignore
/// use zoomstitch::service::{ReconstructService, ServiceConfig};
/// use zoomstitch::transport::ReqwestClient;
///
/// let client = ReqwestClient::new()?;
/// let service = ReconstructService::new(client, ServiceConfig::default());
/// let path = service.reconstruct("https://example.org/resource/B+43122")?;
/// ```
pub struct ReconstructService<C: HttpClient> {
    http_client: C,
    config: ServiceConfig,
}

impl<C: HttpClient> ReconstructService<C> {
    /// Creates a new service using the given transport and configuration.
    pub fn new(http_client: C, config: ServiceConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Reconstructs the photograph behind a collection resource URL.
    ///
    /// Runs the linear pipeline: identifier extraction (before any network
    /// activity), descriptor fetch, maximum-resolution level selection, tile
    /// composition, JPEG encode. The output file is only created once
    /// composition has fully succeeded, so no partial image is ever
    /// persisted.
    ///
    /// Returns the path of the written image.
    pub fn reconstruct(&self, resource_url: &str) -> Result<PathBuf, ServiceError> {
        let identifier = naming::extract_identifier(resource_url)?;
        info!(identifier, url = resource_url, "reconstructing photograph");

        let descriptor = fetch_descriptor(&self.http_client, resource_url)?;
        let level = select_level(&descriptor)?;
        info!(
            level = %level.name,
            width = level.width,
            height = level.height,
            tiles = level.tiles.len(),
            "selected maximum-resolution level"
        );

        let compositor = TileCompositor::new(&self.http_client);
        let canvas = compositor.compose(level)?;

        let path = self
            .config
            .output_dir
            .join(naming::output_filename(identifier));
        save_jpeg(&canvas, &path)?;
        info!(path = %path.display(), "saved reconstructed photograph");

        Ok(path)
    }
}

/// Encodes a canvas as JPEG and writes it to `path`.
fn save_jpeg(canvas: &RgbImage, path: &Path) -> Result<(), ServiceError> {
    let file = File::create(path).map_err(|source| ServiceError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })?;

    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
    encoder
        .encode(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|source| ServiceError::OutputEncode {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockHttpClient, TransportError};

    #[test]
    fn test_invalid_url_fails_before_any_network_activity() {
        // Every request errors, so reaching the network would surface as a
        // Descriptor error instead of a Naming error
        let mock = MockHttpClient::always(Err(TransportError::Http("unreachable".to_string())));
        let service = ReconstructService::new(mock, ServiceConfig::default());

        let result = service.reconstruct("https://example.org/photos/B+43122");
        assert!(matches!(result, Err(ServiceError::Naming(_))));
    }

    #[test]
    fn test_descriptor_fetch_failure_is_surfaced() {
        let mock = MockHttpClient::always(Err(TransportError::Status {
            status: 502,
            url: "https://example.org/resource/B+43122/tiles.json".to_string(),
        }));
        let service = ReconstructService::new(mock, ServiceConfig::default());

        let result = service.reconstruct("https://example.org/resource/B+43122");
        assert!(matches!(result, Err(ServiceError::Descriptor(_))));
    }

    #[test]
    fn test_missing_max_resolution_level_is_surfaced() {
        let body = r#"{
            "levels": [
                { "name": "z1", "width": 100, "height": 100, "tiles": [] }
            ]
        }"#;
        let mock = MockHttpClient::always(Ok(body.as_bytes().to_vec()));
        let service = ReconstructService::new(mock, ServiceConfig::default());

        let result = service.reconstruct("https://example.org/resource/B+43122");
        assert!(matches!(result, Err(ServiceError::Level(_))));
    }
}

//! ZoomStitch - Full-resolution photograph reconstruction from deep-zoom
//! tile servers
//!
//! Given the public URL of a digitized photograph, ZoomStitch retrieves the
//! server's tile descriptor, selects the maximum-resolution zoom level,
//! downloads every tile of that level and composes them into a single
//! contiguous JPEG image named after the resource identifier.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```ignore
//! use zoomstitch::service::{ReconstructService, ServiceConfig};
//! use zoomstitch::transport::ReqwestClient;
//!
//! let client = ReqwestClient::new()?;
//! let service = ReconstructService::new(client, ServiceConfig::default());
//! let path = service.reconstruct("https://example.org/resource/B+43122")?;
//! ```

pub mod compositor;
pub mod descriptor;
pub mod level;
pub mod logging;
pub mod naming;
pub mod service;
pub mod transport;

/// Version of the ZoomStitch library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Tile descriptor retrieval and data model
//!
//! The remote server describes each digitized photograph with a JSON
//! document (`tiles.json`) enumerating the available zoom levels and the
//! tile grid of each level.

mod fetch;
mod types;

pub use fetch::{descriptor_url, fetch_descriptor, DescriptorError, DESCRIPTOR_FILENAME};
pub use types::{TileDescriptor, TileRef, ZoomLevel};

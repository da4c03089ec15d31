//! Zoom level selection
//!
//! The server labels its resolution tiers, and "z0" is the documented label
//! for the maximum-resolution tier. Selection is therefore a fixed-label
//! lookup, not a numeric max over levels.

use thiserror::Error;

use crate::descriptor::{TileDescriptor, ZoomLevel};

/// Label the server assigns to the maximum-resolution tier.
pub const MAX_RESOLUTION_LEVEL: &str = "z0";

/// Error raised when a descriptor carries no maximum-resolution level.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("no zoom level named {wanted:?} in descriptor (levels present: {})", .available.join(", "))]
pub struct LevelNotFoundError {
    /// Label that was looked up.
    pub wanted: String,

    /// Names of the levels the descriptor actually carries.
    pub available: Vec<String>,
}

/// Selects the maximum-resolution zoom level from a descriptor.
///
/// Scans the level collection for the [`MAX_RESOLUTION_LEVEL`] label; the
/// level's position within the collection is irrelevant. There is no
/// fallback to another level.
pub fn select_level(descriptor: &TileDescriptor) -> Result<&ZoomLevel, LevelNotFoundError> {
    descriptor
        .levels
        .iter()
        .find(|level| level.name == MAX_RESOLUTION_LEVEL)
        .ok_or_else(|| LevelNotFoundError {
            wanted: MAX_RESOLUTION_LEVEL.to_string(),
            available: descriptor
                .levels
                .iter()
                .map(|level| level.name.clone())
                .collect(),
        })
}

//! Tile download and canvas composition
//!
//! Fetches every tile of a zoom level and pastes each one into a canvas
//! sized to the level's declared dimensions.

mod compose;
mod types;

pub use compose::TileCompositor;
pub use types::CompositeError;

//! Descriptor document types

use serde::Deserialize;

/// Metadata document enumerating the zoom levels of one photograph.
///
/// Fetched from `<base>/tiles.json`. A valid document carries at least one
/// level, and level names are unique within it (a server guarantee, not
/// re-validated here).
#[derive(Debug, Clone, Deserialize)]
pub struct TileDescriptor {
    /// Available zoom levels.
    pub levels: Vec<ZoomLevel>,
}

/// One resolution tier of the deep-zoom pyramid.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoomLevel {
    /// Label distinguishing resolution tiers (e.g. "z0", "z1").
    pub name: String,

    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Tile grid covering the canvas. Order is irrelevant; the placement
    /// regions are disjoint.
    pub tiles: Vec<TileRef>,
}

/// Reference to a single tile within a level's grid.
///
/// A tile covers the canvas rectangle whose top-left corner is
/// `(x * cell_width, y * cell_height)`. The cell size is uniform across a
/// level and is not part of the descriptor; it is inferred from the first
/// decoded tile.
#[derive(Debug, Clone, Deserialize)]
pub struct TileRef {
    /// Fetch URL for the raw image bytes.
    pub url: String,

    /// Grid column index.
    pub x: u32,

    /// Grid row index.
    pub y: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_documented_shape() {
        let body = r#"{
            "levels": [
                {
                    "name": "z1",
                    "width": 512,
                    "height": 256,
                    "tiles": [
                        { "url": "https://example.org/t/z1/0-0.jpg", "x": 0, "y": 0 }
                    ]
                },
                {
                    "name": "z0",
                    "width": 1024,
                    "height": 512,
                    "tiles": [
                        { "url": "https://example.org/t/z0/0-0.jpg", "x": 0, "y": 0 },
                        { "url": "https://example.org/t/z0/1-0.jpg", "x": 1, "y": 0 }
                    ]
                }
            ]
        }"#;

        let descriptor: TileDescriptor = serde_json::from_str(body).unwrap();
        assert_eq!(descriptor.levels.len(), 2);

        let z0 = &descriptor.levels[1];
        assert_eq!(z0.name, "z0");
        assert_eq!(z0.width, 1024);
        assert_eq!(z0.height, 512);
        assert_eq!(z0.tiles.len(), 2);
        assert_eq!(z0.tiles[1].url, "https://example.org/t/z0/1-0.jpg");
        assert_eq!(z0.tiles[1].x, 1);
        assert_eq!(z0.tiles[1].y, 0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = r#"{
            "levels": [
                {
                    "name": "z0",
                    "width": 100,
                    "height": 100,
                    "tiles": [],
                    "scale": 1.0
                }
            ],
            "generator": "tiler/2.1"
        }"#;

        let descriptor: TileDescriptor = serde_json::from_str(body).unwrap();
        assert_eq!(descriptor.levels[0].name, "z0");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let body = r#"{ "levels": [ { "name": "z0", "width": 100, "tiles": [] } ] }"#;
        assert!(serde_json::from_str::<TileDescriptor>(body).is_err());
    }
}

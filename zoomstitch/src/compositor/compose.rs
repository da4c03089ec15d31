//! Canvas composition implementation

use std::io::Cursor;

use image::{imageops, ImageReader, RgbImage};
use tracing::{debug, info, warn};

use crate::descriptor::ZoomLevel;
use crate::transport::HttpClient;

use super::types::CompositeError;

/// Downloads and assembles the tiles of one zoom level into a canvas.
///
/// Tiles are fetched and placed one at a time; the canvas is exclusively
/// owned by the compositor for the duration of one composition. The first
/// decoded tile defines the uniform cell size for the whole level — the
/// descriptor does not carry tile dimensions, and the server guarantees
/// uniformity except for edge tiles, which the paste step clips. Tile
/// dimensions are not re-verified per tile; a level with genuinely
/// heterogeneous tiles has undefined placement.
///
/// # Example
///
/// ```ignore
/// use zoomstitch::compositor::TileCompositor;
/// use zoomstitch::transport::ReqwestClient;
///
/// let client = ReqwestClient::new()?;
/// let compositor = TileCompositor::new(&client);
/// let canvas = compositor.compose(&level)?;
/// ```
pub struct TileCompositor<C: HttpClient> {
    http_client: C,
}

impl<C: HttpClient> TileCompositor<C> {
    /// Creates a new compositor fetching tiles through the given transport.
    pub fn new(http_client: C) -> Self {
        Self { http_client }
    }

    /// Downloads every tile of the level and pastes it into a fresh canvas.
    ///
    /// The canvas is sized to the level's declared dimensions; tile pixels
    /// falling outside it are silently discarded (clip-on-write). The first
    /// fetch or decode failure aborts the composition.
    pub fn compose(&self, level: &ZoomLevel) -> Result<RgbImage, CompositeError> {
        info!(
            level = %level.name,
            width = level.width,
            height = level.height,
            tiles = level.tiles.len(),
            "composing canvas"
        );

        if level.tiles.is_empty() {
            warn!(level = %level.name, "level has no tiles, returning blank canvas");
        }

        let mut canvas = RgbImage::new(level.width, level.height);
        let mut cell_size: Option<(u32, u32)> = None;

        for tile in &level.tiles {
            let bytes =
                self.http_client
                    .get(&tile.url)
                    .map_err(|source| CompositeError::TileFetch {
                        url: tile.url.clone(),
                        source,
                    })?;

            let tile_image = ImageReader::new(Cursor::new(&bytes))
                .with_guessed_format()
                .map_err(|e| CompositeError::TileDecode {
                    url: tile.url.clone(),
                    source: image::ImageError::IoError(e),
                })?
                .decode()
                .map_err(|source| CompositeError::TileDecode {
                    url: tile.url.clone(),
                    source,
                })?
                .to_rgb8();

            // First tile defines the uniform cell size for the level
            let (cell_width, cell_height) =
                *cell_size.get_or_insert((tile_image.width(), tile_image.height()));

            let offset_x = i64::from(tile.x) * i64::from(cell_width);
            let offset_y = i64::from(tile.y) * i64::from(cell_height);

            debug!(
                url = %tile.url,
                x = tile.x,
                y = tile.y,
                offset_x,
                offset_y,
                "placing tile"
            );

            // replace() clips at the canvas boundary, so edge tiles may
            // extend past it without error
            imageops::replace(&mut canvas, &tile_image, offset_x, offset_y);
        }

        Ok(canvas)
    }
}

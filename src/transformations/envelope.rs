use crate::{structs::TileId, TileResult};
use geo_types::{coord, Rect};

pub const WORLD_MERC_MAX: f64 = 20037508.3427892;
pub const WORLD_MERC_MIN: f64 = WORLD_MERC_MAX * -1_f64;
pub const EXTENT: f64 = 4096.0;
pub const BUFFER: f64 = 64.0;

/// Margin that pads a tile by `BUFFER` pixels of an `EXTENT`-pixel tile.
pub const DEFAULT_MARGIN: f64 = BUFFER / EXTENT;

impl TileId {
    /// Web Mercator envelope of the tile, laid out like `ST_TileEnvelope`:
    /// row 0 sits on the northern edge of the world.
    pub fn mercator_bounds(&self) -> TileResult<Rect<f64>> {
        self.buffered_bounds(0.0)
    }

    /// Envelope grown on every side by `margin` times the tile width.
    pub fn buffered_bounds(&self, margin: f64) -> TileResult<Rect<f64>> {
        self.validate()?;

        // validated zoom is at most 29, so the shift cannot overflow
        let tile_size = (1_u64 << self.z) as f64;
        let tile_span = (WORLD_MERC_MAX - WORLD_MERC_MIN) / tile_size;
        let pad = tile_span * margin;

        let min_x = WORLD_MERC_MIN + tile_span * self.x as f64 - pad;
        let max_x = WORLD_MERC_MIN + tile_span * (self.x as f64 + 1.0) + pad;
        let max_y = WORLD_MERC_MAX - tile_span * self.y as f64 + pad;
        let min_y = WORLD_MERC_MAX - tile_span * (self.y as f64 + 1.0) - pad;

        Ok(Rect::new(
            coord! { x: min_x, y: min_y },
            coord! { x: max_x, y: max_y },
        ))
    }
}

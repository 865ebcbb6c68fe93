pub mod layout;

use crate::{structs::TileId, TileError, TileResult};

impl TileId {
    /// Packs the tile into its cache key. Tiles outside the tiling scheme or
    /// deeper than [`layout::MAX_ZOOM`] are rejected rather than truncated.
    pub fn key(&self) -> TileResult<u64> {
        self.validate()?;
        Ok(layout::pack(self.z, self.x, self.y))
    }

    /// Inverse of [`TileId::key`]. Keys that do not decode to a valid tile
    /// are rejected, so every accepted key round-trips exactly.
    pub fn from_key(key: u64) -> TileResult<TileId> {
        let (z, x, y) = layout::unpack(key);
        let tile = TileId::new(z, x, y);
        tile.validate()?;
        Ok(tile)
    }

    /// The key as a signed integer, for stores such as SQLite whose integer
    /// columns are `i64`. Valid keys never set the sign bit.
    pub fn sql_key(&self) -> TileResult<i64> {
        let key = self.key()?;
        i64::try_from(key).map_err(|_| TileError::ZoomOutOfRange {
            z: self.z,
            max: layout::MAX_ZOOM,
        })
    }

    pub fn from_sql_key(key: i64) -> TileResult<TileId> {
        let unsigned = u64::try_from(key).map_err(|_| {
            tracing::debug!(key, "negative tile key");
            TileError::NegativeKey { key }
        })?;
        TileId::from_key(unsigned)
    }
}

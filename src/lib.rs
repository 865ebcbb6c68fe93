//! Tile identifiers and the packed 64-bit keys a tile cache stores them under.
//!
//! ```
//! use mvt_tile_key::TileId;
//!
//! let tile = TileId::new(3, 5, 2);
//! let key = tile.key().unwrap();
//! assert_eq!(TileId::from_key(key).unwrap(), tile);
//! ```
pub mod config;
pub mod keys;
pub mod parse;
pub mod structs;
pub mod transformations;

pub use config::KeyConfig;
pub use keys::layout::MAX_ZOOM;
pub use parse::TilePath;
pub use structs::TileId;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    #[error("Zoom level {z} exceeds the maximum of {max}")]
    ZoomOutOfRange { z: u8, max: u8 },

    #[error("Tile coordinates ({x}, {y}) fall outside zoom level {z}")]
    CoordinatesOutOfRange { z: u8, x: u32, y: u32 },

    #[error("Tile key {key} is negative")]
    NegativeKey { key: i64 },

    #[error("Invalid tile path: {path:?}")]
    InvalidPath { path: String },
}

pub type TileResult<T> = Result<T, TileError>;

pub fn tile_id_make(z: u8, x: u32, y: u32) -> TileId {
    TileId::new(z, x, y)
}

pub fn tile_ids_equal(one: TileId, two: TileId) -> bool {
    one == two
}

/// Unique key of the tile for use in a tile cache.
pub fn tile_key(tile: TileId) -> TileResult<u64> {
    tile.key()
}

pub fn tile_id_from_key(key: u64) -> TileResult<TileId> {
    TileId::from_key(key)
}

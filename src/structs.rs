use crate::keys::layout::MAX_ZOOM;
use crate::{TileError, TileResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tile addressed by zoom level and column/row in the XYZ scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileId {
    /// Builds a tile without checking it against the tiling scheme.
    pub const fn new(z: u8, x: u32, y: u32) -> Self {
        TileId { z, x, y }
    }

    /// Number of tiles along each axis at zoom `z`, if it fits a `u64`.
    pub fn tiles_at_zoom(z: u8) -> Option<u64> {
        1_u64.checked_shl(z as u32)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> TileResult<()> {
        self.validate_up_to(MAX_ZOOM)
    }

    /// Checks `z <= max_zoom` and `x, y < 2^z`.
    pub fn validate_up_to(&self, max_zoom: u8) -> TileResult<()> {
        let max = max_zoom.min(MAX_ZOOM);
        if self.z > max {
            tracing::debug!(tile = %self, max, "zoom level beyond key range");
            return Err(TileError::ZoomOutOfRange { z: self.z, max });
        }

        let tile_size = TileId::tiles_at_zoom(self.z).unwrap_or(u64::MAX);
        if (self.x as u64 >= tile_size) | (self.y as u64 >= tile_size) {
            tracing::debug!(tile = %self, tile_size, "tile coordinates outside zoom level");
            return Err(TileError::CoordinatesOutOfRange {
                z: self.z,
                x: self.x,
                y: self.y,
            });
        }

        Ok(())
    }

    /// The tile one zoom level up that contains this one.
    pub fn parent(&self) -> Option<TileId> {
        if self.z == 0 {
            return None;
        }
        Some(TileId::new(self.z - 1, self.x >> 1, self.y >> 1))
    }

    /// The four tiles one zoom level down, in row-major order. `None` once
    /// the children would no longer fit in a key.
    pub fn children(&self) -> Option<[TileId; 4]> {
        if self.z >= MAX_ZOOM {
            return None;
        }
        let (z, x, y) = (self.z + 1, self.x << 1, self.y << 1);
        Some([
            TileId::new(z, x, y),
            TileId::new(z, x + 1, y),
            TileId::new(z, x, y + 1),
            TileId::new(z, x + 1, y + 1),
        ])
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_compares_every_field() {
        assert_eq!(TileId::new(0, 0, 0), TileId::new(0, 0, 0));
        assert_ne!(TileId::new(1, 0, 0), TileId::new(2, 0, 0));
        assert_ne!(TileId::new(4, 1, 2), TileId::new(4, 2, 1));
    }

    #[test]
    fn validation_follows_tiling_scheme() {
        assert!(TileId::new(0, 0, 0).is_valid());
        assert!(!TileId::new(0, 1, 0).is_valid());
        assert!(TileId::new(3, 7, 7).is_valid());
        assert_eq!(
            TileId::new(3, 8, 0).validate(),
            Err(TileError::CoordinatesOutOfRange { z: 3, x: 8, y: 0 })
        );
        assert_eq!(
            TileId::new(30, 0, 0).validate(),
            Err(TileError::ZoomOutOfRange { z: 30, max: MAX_ZOOM })
        );
    }

    #[test]
    fn validate_up_to_caps_at_layout_limit() {
        assert!(TileId::new(12, 0, 0).validate_up_to(14).is_ok());
        assert_eq!(
            TileId::new(15, 0, 0).validate_up_to(14),
            Err(TileError::ZoomOutOfRange { z: 15, max: 14 })
        );
        assert_eq!(
            TileId::new(30, 0, 0).validate_up_to(u8::MAX),
            Err(TileError::ZoomOutOfRange { z: 30, max: MAX_ZOOM })
        );
    }

    #[test]
    fn tiles_at_zoom_overflows_to_none() {
        assert_eq!(TileId::tiles_at_zoom(0), Some(1));
        assert_eq!(TileId::tiles_at_zoom(10), Some(1024));
        assert_eq!(TileId::tiles_at_zoom(64), None);
    }

    #[test]
    fn parent_and_children_are_inverse() {
        let tile = TileId::new(5, 17, 9);
        let children = tile.children().unwrap();
        assert_eq!(children[0], TileId::new(6, 34, 18));
        assert_eq!(children[3], TileId::new(6, 35, 19));
        for child in children {
            assert_eq!(child.parent(), Some(tile));
        }
        assert_eq!(TileId::new(0, 0, 0).parent(), None);
        assert_eq!(TileId::new(MAX_ZOOM, 0, 0).children(), None);
    }

    #[test]
    fn displays_as_path() {
        assert_eq!(TileId::new(10, 123, 456).to_string(), "10/123/456");
    }
}

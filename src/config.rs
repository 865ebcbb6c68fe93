use crate::keys::layout::MAX_ZOOM;
use crate::{structs::TileId, TileResult};
use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use std::env::var;

pub const MAX_ZOOM_VAR: &str = "TILE_KEY_MAX_ZOOM";

/// Settings for a cache that stores tiles no deeper than `max_zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyConfig {
    pub max_zoom: u8,
}

impl Default for KeyConfig {
    fn default() -> Self {
        KeyConfig { max_zoom: MAX_ZOOM }
    }
}

impl KeyConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Result<KeyConfig> {
        dotenv().ok();
        KeyConfig::from_lookup(|name| var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<KeyConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match lookup(MAX_ZOOM_VAR) {
            None => KeyConfig::default(),
            Some(raw) => {
                let max_zoom = raw
                    .trim()
                    .parse::<u8>()
                    .with_context(|| format!("{MAX_ZOOM_VAR} is not a zoom level: {raw:?}"))?;
                if max_zoom > MAX_ZOOM {
                    bail!("{MAX_ZOOM_VAR} is {max_zoom}, but keys only hold zoom levels up to {MAX_ZOOM}");
                }
                KeyConfig { max_zoom }
            }
        };

        tracing::info!(max_zoom = config.max_zoom, "loaded tile key config");
        Ok(config)
    }

    pub fn key_for(&self, tile: &TileId) -> TileResult<u64> {
        tile.validate_up_to(self.max_zoom)?;
        tile.key()
    }

    pub fn tile_for(&self, key: u64) -> TileResult<TileId> {
        let tile = TileId::from_key(key)?;
        tile.validate_up_to(self.max_zoom)?;
        Ok(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileError;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |name| {
            assert_eq!(name, MAX_ZOOM_VAR);
            value.map(str::to_string)
        }
    }

    #[test]
    fn defaults_to_layout_limit() {
        let config = KeyConfig::from_lookup(lookup(None)).unwrap();
        assert_eq!(config, KeyConfig::default());
        assert_eq!(config.max_zoom, MAX_ZOOM);
    }

    #[test]
    fn reads_max_zoom() {
        let config = KeyConfig::from_lookup(lookup(Some(" 14 "))).unwrap();
        assert_eq!(config.max_zoom, 14);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(KeyConfig::from_lookup(lookup(Some("deep"))).is_err());
        assert!(KeyConfig::from_lookup(lookup(Some("30"))).is_err());
    }

    #[test]
    fn caps_keys_at_configured_zoom() {
        let config = KeyConfig { max_zoom: 14 };
        let shallow = TileId::new(14, 100, 200);
        let deep = TileId::new(15, 100, 200);

        let key = config.key_for(&shallow).unwrap();
        assert_eq!(config.tile_for(key).unwrap(), shallow);

        assert_eq!(
            config.key_for(&deep),
            Err(TileError::ZoomOutOfRange { z: 15, max: 14 })
        );
        let deep_key = deep.key().unwrap();
        assert!(config.tile_for(deep_key).is_err());
    }
}

use crate::{structs::TileId, TileError, TileResult};
use std::str::FromStr;

/// A tile addressed by a request path such as `10/123/456.mvt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePath {
    pub tile: TileId,
    pub extension: Option<String>,
}

impl TilePath {
    pub fn parse(path: &str) -> TileResult<TilePath> {
        let trimmed = path.trim_start_matches('/');
        let (z_str, x_str, y_ext) = match trimmed.split('/').collect::<Vec<&str>>().as_slice() {
            [z_str, x_str, y_ext] => (*z_str, *x_str, *y_ext),
            _ => return Err(invalid_path(path)),
        };

        let (y_str, extension) = match y_ext.split('.').collect::<Vec<&str>>().as_slice() {
            [y_str] => (*y_str, None),
            [y_str, ext] if !ext.is_empty() => (*y_str, Some(ext.to_string())),
            _ => return Err(invalid_path(path)),
        };

        let tile = match (
            z_str.parse::<u8>(),
            x_str.parse::<u32>(),
            y_str.parse::<u32>(),
        ) {
            (Ok(z), Ok(x), Ok(y)) => TileId::new(z, x, y),
            _ => return Err(invalid_path(path)),
        };
        tile.validate()?;

        Ok(TilePath { tile, extension })
    }
}

impl FromStr for TileId {
    type Err = TileError;

    /// Parses `z/x/y`. Extensions are rejected; use [`TilePath`] for those.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = TilePath::parse(s)?;
        if path.extension.is_some() {
            return Err(invalid_path(s));
        }
        Ok(path.tile)
    }
}

fn invalid_path(path: &str) -> TileError {
    tracing::debug!(path, "unparseable tile path");
    TileError::InvalidPath {
        path: path.to_string(),
    }
}

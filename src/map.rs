//! Tile map supplied by the level loader
//!
//! The simulation never collides against tiles; the map only establishes
//! how large the renderable world is.

use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE;

/// One layer of tile ids, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub data: Vec<u32>,
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

impl TileLayer {
    /// Number of rows, derived from the data when `height` is absent
    pub fn rows(&self) -> u32 {
        if self.height > 0 {
            self.height
        } else if self.width == 0 {
            0
        } else {
            (self.data.len() as u32).div_ceil(self.width)
        }
    }

    /// Tile id at a column/row, `None` outside the layer or its data
    pub fn tile(&self, col: u32, row: u32) -> Option<u32> {
        if col >= self.width || row >= self.rows() {
            return None;
        }
        let index = (row as usize)
            .checked_mul(self.width as usize)?
            .checked_add(col as usize)?;
        self.data.get(index).copied()
    }
}

/// Immutable tile grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileMap {
    pub layers: Vec<TileLayer>,
}

impl TileMap {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and decode a map file
    pub fn load(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json).map_err(std::io::Error::other)
    }

    /// World size in pixels spanning every layer
    pub fn bounds(&self) -> (u32, u32) {
        let cols = self.layers.iter().map(|l| l.width).max().unwrap_or(0);
        let rows = self.layers.iter().map(TileLayer::rows).max().unwrap_or(0);
        (cols.saturating_mul(TILE_SIZE), rows.saturating_mul(TILE_SIZE))
    }

    pub fn tile_at(&self, layer: usize, col: u32, row: u32) -> Option<u32> {
        self.layers.get(layer)?.tile(col, row)
    }
}

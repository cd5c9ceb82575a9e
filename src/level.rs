//! JSON level description: tile layers, player spawn and pickup positions.
//!
//! ```json
//! {
//!   "columns": 3, "rows": 2, "tile_width": 32, "tile_height": 32,
//!   "layers": [ { "name": "ground", "tiles": [0, 0, 0, 1, 1, 1] } ],
//!   "spawn": { "x": 48, "y": 16 },
//!   "pickups": [ { "x": 80, "y": 16 } ]
//! }
//! ```
//!
//! Layers are matched to [`LayerKind`] by name. Layers the file omits are empty.

use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::compiler::TileGrid;
use crate::error::LevelError;
use crate::types::LayerKind;

#[derive(Debug, Deserialize, Clone)]
pub struct LevelFile {
    pub columns: u32,
    pub rows: u32,
    pub tile_width: f32,
    pub tile_height: f32,
    #[serde(default)]
    pub layers: Vec<LayerFile>,
    #[serde(default = "default_spawn")]
    pub spawn: PointFile,
    #[serde(default)]
    pub pickups: Vec<PointFile>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LayerFile {
    pub name: String,
    /// Row-major; signed so that bad data is reported instead of wrapped.
    pub tiles: Vec<i64>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct PointFile {
    pub x: f32,
    pub y: f32,
}

impl From<PointFile> for Vec2 {
    fn from(p: PointFile) -> Self {
        Vec2::new(p.x, p.y)
    }
}

fn default_spawn() -> PointFile {
    PointFile { x: 100.0, y: 100.0 }
}

/// A validated level ready to build a game from.
#[derive(Clone, Debug)]
pub struct Level {
    pub grid: TileGrid,
    pub spawn: Vec2,
    pub pickups: Vec<Vec2>,
}

impl Level {
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let file: LevelFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let level = Self::from_json_str(&raw)?;
        log::info!(
            "loaded level {}: {}x{} tiles, {} pickups",
            path.display(),
            level.grid.columns(),
            level.grid.rows(),
            level.pickups.len()
        );
        Ok(level)
    }

    pub fn from_file(file: LevelFile) -> Result<Self, LevelError> {
        let cells = TileGrid::cell_count(file.columns, file.rows)?;
        let mut layers: Vec<Vec<i64>> = vec![vec![0; cells]; LayerKind::COUNT];
        for layer in file.layers {
            match LayerKind::from_name(&layer.name) {
                Some(kind) => layers[kind.index()] = layer.tiles,
                None => log::warn!("ignoring unknown level layer {:?}", layer.name),
            }
        }

        let grid = TileGrid::from_signed(
            Vec2::new(file.tile_width, file.tile_height),
            file.columns,
            file.rows,
            layers,
        )?;
        Ok(Self {
            grid,
            spawn: file.spawn.into(),
            pickups: file.pickups.into_iter().map(Vec2::from).collect(),
        })
    }
}

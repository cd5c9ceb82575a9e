//! Load-time errors. Per-tick code never fails.

use thiserror::Error;

/// Tile grid construction and compilation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Columns or rows was zero.
    #[error("grid dimensions must be nonzero (columns={columns}, rows={rows})")]
    ZeroDimension { columns: u32, rows: u32 },

    #[error("cell size must be positive, got {width}x{height}")]
    InvalidCellSize { width: f32, height: f32 },

    /// A layer's tile array does not match `columns * rows`.
    #[error("layer {layer} has {actual} tiles, expected {expected}")]
    DimensionMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    /// A tile index below zero was supplied by the level source.
    #[error("layer {layer} tile {index} has negative index {value}")]
    NegativeTile { layer: usize, index: usize, value: i64 },

    /// More cells than a level may carry.
    #[error("grid of {columns}x{rows} cells exceeds the {limit} cell limit")]
    TooLarge { columns: u32, rows: u32, limit: usize },

    /// Compilation was requested for a layer the grid does not carry.
    #[error("layer {index} requested but grid only has {available} layers")]
    UnknownLayer { index: usize, available: usize },
}

/// Level description loading errors.
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),
}

/// Physics configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the motion resolver cannot run with.
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

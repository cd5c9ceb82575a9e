//! Tile grid → collision rectangles.
//!
//! Each layer is compiled in two passes: every column is split into vertical
//! runs of solid cells, then runs of equal height starting on the same row are
//! merged left to right. A flat platform N tiles wide becomes one rectangle
//! instead of N.

use glam::Vec2;

use crate::error::GridError;
use crate::types::*;

/// Upper bound on `columns * rows` for a single grid.
pub const MAX_CELLS: usize = 1 << 24;

/// Immutable per-layer tile indices (row-major). 0 is empty, anything else solid.
#[derive(Clone, Debug)]
pub struct TileGrid {
    cell_size: Vec2,
    columns: u32,
    rows: u32,
    layers: Vec<Vec<u32>>,
}

impl TileGrid {
    pub fn new(
        cell_size: Vec2,
        columns: u32,
        rows: u32,
        layers: Vec<Vec<u32>>,
    ) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::ZeroDimension { columns, rows });
        }
        if !(cell_size.x > 0.0 && cell_size.y > 0.0) {
            return Err(GridError::InvalidCellSize {
                width: cell_size.x,
                height: cell_size.y,
            });
        }
        let expected = Self::cell_count(columns, rows)?;
        for (layer, tiles) in layers.iter().enumerate() {
            if tiles.len() != expected {
                return Err(GridError::DimensionMismatch {
                    layer,
                    expected,
                    actual: tiles.len(),
                });
            }
        }
        Ok(Self {
            cell_size,
            columns,
            rows,
            layers,
        })
    }

    /// `columns * rows`, or `TooLarge` past [`MAX_CELLS`].
    pub fn cell_count(columns: u32, rows: u32) -> Result<usize, GridError> {
        (columns as usize)
            .checked_mul(rows as usize)
            .filter(|&n| n <= MAX_CELLS)
            .ok_or(GridError::TooLarge {
                columns,
                rows,
                limit: MAX_CELLS,
            })
    }

    /// Same as [`TileGrid::new`] but rejects negative indices from untyped sources.
    pub fn from_signed(
        cell_size: Vec2,
        columns: u32,
        rows: u32,
        layers: Vec<Vec<i64>>,
    ) -> Result<Self, GridError> {
        let mut converted = Vec::with_capacity(layers.len());
        for (layer, tiles) in layers.into_iter().enumerate() {
            let mut out = Vec::with_capacity(tiles.len());
            for (index, value) in tiles.into_iter().enumerate() {
                let tile = u32::try_from(value)
                    .map_err(|_| GridError::NegativeTile { layer, index, value })?;
                out.push(tile);
            }
            converted.push(out);
        }
        Self::new(cell_size, columns, rows, converted)
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Map size in pixels.
    pub fn pixel_extent(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 * self.cell_size.x,
            self.rows as f32 * self.cell_size.y,
        )
    }

    pub fn tile(&self, layer: usize, x: u32, y: u32) -> Option<u32> {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        self.layers
            .get(layer)
            .map(|tiles| tiles[(y * self.columns + x) as usize])
    }

    fn layer_tiles(&self, layer: usize) -> Result<&[u32], GridError> {
        self.layers
            .get(layer)
            .map(Vec::as_slice)
            .ok_or(GridError::UnknownLayer {
                index: layer,
                available: self.layers.len(),
            })
    }
}

/// Rectangle in cell units: top-left cell plus extent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct CellSpan {
    col: u32,
    row: u32,
    cols: u32,
    rows: u32,
}

impl CellSpan {
    fn to_rect(self, cell: Vec2) -> CollisionRect {
        CollisionRect::from_min_size(
            Vec2::new(self.col as f32 * cell.x, self.row as f32 * cell.y),
            Vec2::new(self.cols as f32 * cell.x, self.rows as f32 * cell.y),
        )
    }
}

/// Compile one layer of `grid` into merged rectangles.
pub fn compile(grid: &TileGrid, kind: LayerKind) -> Result<LayerGeometry, GridError> {
    let tiles = grid.layer_tiles(kind.index())?;

    let mut spans = vertical_runs(tiles, grid.columns, grid.rows);
    let candidates = spans.len();
    // Height desc, then row, then column: equal-height runs on one row end up adjacent.
    spans.sort_by(|a, b| {
        b.rows
            .cmp(&a.rows)
            .then(a.row.cmp(&b.row))
            .then(a.col.cmp(&b.col))
    });
    let merged = merge_horizontal(&spans);

    let rects: Vec<CollisionRect> = merged
        .into_iter()
        .map(|span| span.to_rect(grid.cell_size))
        .collect();
    log::debug!(
        "compiled {} layer: {} column runs -> {} rects",
        kind.name(),
        candidates,
        rects.len()
    );
    Ok(LayerGeometry { kind, rects })
}

/// Compile every colliding layer. Layers past the end of the grid stay empty.
pub fn compile_layers(grid: &TileGrid) -> Result<LayerSet, GridError> {
    let mut set = LayerSet::new();
    for kind in LayerKind::ALL.into_iter().filter(|k| k.collides()) {
        if kind.index() >= grid.layer_count() {
            log::warn!("grid has no {} layer; it will not collide", kind.name());
            continue;
        }
        set.insert(compile(grid, kind)?);
    }
    Ok(set)
}

fn vertical_runs(tiles: &[u32], columns: u32, rows: u32) -> Vec<CellSpan> {
    let mut out = Vec::new();
    for x in 0..columns {
        let mut run = 0u32;
        for y in 0..rows {
            let solid = tiles[(y * columns + x) as usize] != 0;
            if solid {
                run += 1;
            }
            if !solid || y == rows - 1 {
                if run > 0 {
                    // A run closed by the bottom row still owns that row.
                    let end = if solid { y + 1 } else { y };
                    out.push(CellSpan {
                        col: x,
                        row: end - run,
                        cols: 1,
                        rows: run,
                    });
                }
                run = 0;
            }
        }
    }
    out
}

/// Expects spans sorted by (height desc, row, column).
fn merge_horizontal(sorted: &[CellSpan]) -> Vec<CellSpan> {
    let mut out = Vec::new();
    let mut acc: Option<CellSpan> = None;
    for &span in sorted {
        if let Some(a) = acc.as_mut() {
            if a.rows == span.rows && a.row == span.row && a.col + a.cols == span.col {
                a.cols += span.cols;
                continue;
            }
        }
        if let Some(done) = acc.replace(span) {
            out.push(done);
        }
    }
    out.extend(acc);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const CELL: Vec2 = Vec2::new(16.0, 8.0);

    /// Grid with only the ground layer filled from an ASCII picture ('#' = solid).
    fn ground_grid(rows: &[&str]) -> TileGrid {
        let columns = rows[0].len() as u32;
        let tiles: Vec<u32> = rows
            .iter()
            .flat_map(|r| r.chars().map(|c| u32::from(c == '#')))
            .collect();
        let empty = vec![0; tiles.len()];
        TileGrid::new(CELL, columns, rows.len() as u32, vec![empty, tiles]).unwrap()
    }

    fn random_grid(rng: &mut StdRng, columns: u32, rows: u32, density: f64) -> TileGrid {
        let n = (columns * rows) as usize;
        let tiles: Vec<u32> = (0..n)
            .map(|_| if rng.random_bool(density) { rng.random_range(1..40) } else { 0 })
            .collect();
        TileGrid::new(CELL, columns, rows, vec![vec![0; n], tiles]).unwrap()
    }

    /// Every solid cell is covered by exactly one rect; no empty cell is covered.
    fn assert_exact_cover(grid: &TileGrid, geom: &LayerGeometry) {
        let mut covered_area = 0.0;
        for y in 0..grid.rows() {
            for x in 0..grid.columns() {
                let c = Vec2::new((x as f32 + 0.5) * CELL.x, (y as f32 + 0.5) * CELL.y);
                let hits = geom.rects.iter().filter(|r| r.contains_point(c)).count();
                let solid = grid.tile(LayerKind::Ground.index(), x, y).unwrap() != 0;
                assert_eq!(hits, usize::from(solid), "cell ({x},{y})");
            }
        }
        for r in &geom.rects {
            covered_area += r.size.x * r.size.y;
            // Boundaries land on the cell lattice.
            assert_eq!((r.left() / CELL.x).fract(), 0.0);
            assert_eq!((r.top() / CELL.y).fract(), 0.0);
        }
        let solid_cells = (0..grid.rows())
            .flat_map(|y| (0..grid.columns()).map(move |x| (x, y)))
            .filter(|&(x, y)| grid.tile(1, x, y).unwrap() != 0)
            .count();
        assert_eq!(covered_area, solid_cells as f32 * CELL.x * CELL.y);
    }

    fn assert_maximal(geom: &LayerGeometry) {
        for a in &geom.rects {
            for b in &geom.rects {
                let mergeable = a.size.y == b.size.y && a.top() == b.top() && a.right() == b.left();
                assert!(!mergeable, "{a:?} and {b:?} should have merged");
            }
        }
    }

    #[test]
    fn flat_row_becomes_one_rect() {
        let grid = ground_grid(&["##########"]);
        let geom = compile(&grid, LayerKind::Ground).unwrap();
        assert_eq!(geom.len(), 1);
        let r = geom.rects[0];
        assert_eq!(r.size, Vec2::new(10.0 * CELL.x, CELL.y));
        assert_eq!(r.left(), 0.0);
        assert_eq!(r.top(), 0.0);
        assert_eq!(r.center, Vec2::new(80.0, 4.0));
    }

    #[test]
    fn run_ending_on_bottom_row_covers_it() {
        let grid = ground_grid(&[
            "..", //
            "#.", //
            "##",
        ]);
        let geom = compile(&grid, LayerKind::Ground).unwrap();
        // Tall column first (height desc), then the lone bottom cell.
        assert_eq!(
            geom.rects,
            vec![
                CollisionRect::from_min_size(Vec2::new(0.0, 8.0), Vec2::new(16.0, 16.0)),
                CollisionRect::from_min_size(Vec2::new(16.0, 16.0), Vec2::new(16.0, 8.0)),
            ]
        );
        assert_exact_cover(&grid, &geom);
    }

    #[test]
    fn block_merges_into_single_rect() {
        let grid = ground_grid(&[
            "......", //
            ".####.", //
            ".####.", //
            "......",
        ]);
        let geom = compile(&grid, LayerKind::Ground).unwrap();
        assert_eq!(
            geom.rects,
            vec![CollisionRect::from_min_size(
                Vec2::new(16.0, 8.0),
                Vec2::new(64.0, 16.0)
            )]
        );
    }

    #[test]
    fn different_heights_do_not_merge() {
        let grid = ground_grid(&[
            ".#..", //
            "####",
        ]);
        let geom = compile(&grid, LayerKind::Ground).unwrap();
        // Column 1 is one 2-tall run; columns 0 and 2..4 are 1-tall but split by it.
        assert_eq!(geom.len(), 3);
        assert_eq!(geom.rects[0].size, Vec2::new(16.0, 16.0));
        assert_exact_cover(&grid, &geom);
        assert_maximal(&geom);
    }

    #[test]
    fn empty_layer_compiles_to_nothing() {
        let grid = ground_grid(&["....", "...."]);
        assert!(compile(&grid, LayerKind::Ground).unwrap().is_empty());
        assert!(compile(&grid, LayerKind::Background).unwrap().is_empty());
    }

    #[test]
    fn missing_layer_fails_fast() {
        let grid = ground_grid(&["##"]);
        let err = compile(&grid, LayerKind::Death).unwrap_err();
        assert_eq!(err, GridError::UnknownLayer { index: 3, available: 2 });
    }

    #[test]
    fn compile_layers_skips_decoration_and_missing_layers() {
        let grid = ground_grid(&["#.", "##"]);
        let set = compile_layers(&grid).unwrap();
        assert_eq!(set.get(LayerKind::Ground).len(), 2);
        assert!(set.get(LayerKind::Background).is_empty());
        assert!(set.get(LayerKind::Ladders).is_empty());
        assert!(set.get(LayerKind::Death).is_empty());
    }

    #[test]
    fn grid_validation() {
        assert_eq!(
            TileGrid::new(CELL, 0, 3, vec![]).unwrap_err(),
            GridError::ZeroDimension { columns: 0, rows: 3 }
        );
        assert_eq!(
            TileGrid::new(CELL, 2, 2, vec![vec![0; 4], vec![0; 3]]).unwrap_err(),
            GridError::DimensionMismatch { layer: 1, expected: 4, actual: 3 }
        );
        assert!(matches!(
            TileGrid::new(Vec2::new(0.0, 8.0), 1, 1, vec![vec![0]]),
            Err(GridError::InvalidCellSize { .. })
        ));
        assert_eq!(
            TileGrid::new(CELL, u32::MAX, u32::MAX, vec![]).unwrap_err(),
            GridError::TooLarge { columns: u32::MAX, rows: u32::MAX, limit: MAX_CELLS }
        );
        assert_eq!(TileGrid::cell_count(4096, 4096), Ok(MAX_CELLS));
        assert_eq!(
            TileGrid::from_signed(CELL, 2, 1, vec![vec![0, -3]]).unwrap_err(),
            GridError::NegativeTile { layer: 0, index: 1, value: -3 }
        );
        let grid = TileGrid::from_signed(CELL, 2, 1, vec![vec![0, 7]]).unwrap();
        assert_eq!(grid.tile(0, 1, 0), Some(7));
        assert_eq!(grid.tile(0, 2, 0), None);
        assert_eq!(grid.pixel_extent(), Vec2::new(32.0, 8.0));
    }

    #[test]
    fn random_grids_are_covered_exactly_and_merged_maximally() {
        let mut rng = StdRng::seed_from_u64(0x7113);
        for round in 0..200 {
            let columns = rng.random_range(1..24);
            let rows = rng.random_range(1..16);
            let density = [0.1, 0.5, 0.9][round % 3];
            let grid = random_grid(&mut rng, columns, rows, density);
            let geom = compile(&grid, LayerKind::Ground).unwrap();
            assert_exact_cover(&grid, &geom);
            assert_maximal(&geom);
        }
    }

    #[test]
    fn compilation_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(99);
        let grid = random_grid(&mut rng, 30, 20, 0.45);
        let a = compile(&grid, LayerKind::Ground).unwrap();
        let b = compile(&grid, LayerKind::Ground).unwrap();
        assert_eq!(a, b);
    }
}

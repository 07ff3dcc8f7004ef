//! BitmapTerrain: one boolean cell per screen unit.

use flak_core::types::Vector2;

use crate::Terrain;

/// Solid/empty grid covering the playfield. Cell `(col, row)` covers the
/// unit square starting at `(col, row)` in screen space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapTerrain {
    width: usize,
    height: usize,
    /// Row-major (top-to-bottom, left-to-right).
    cells: Vec<bool>,
}

impl BitmapTerrain {
    /// Empty sky, no ground anywhere.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Flat ground: every row at or below `ground_y` is solid.
    pub fn flat(width: usize, height: usize, ground_y: usize) -> Self {
        let mut terrain = Self::empty(width, height);
        for row in ground_y.min(height)..height {
            let start = row * width;
            terrain.cells[start..start + width].fill(true);
        }
        terrain
    }

    /// Ground surface given per column: column `c` is solid from row
    /// `height - heights[c]` down. Columns beyond `heights` stay empty.
    pub fn from_heights(height: usize, heights: &[usize]) -> Self {
        let width = heights.len();
        let mut terrain = Self::empty(width, height);
        for (col, &h) in heights.iter().enumerate() {
            let top = height.saturating_sub(h);
            for row in top..height {
                terrain.cells[row * width + col] = true;
            }
        }
        terrain
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of solid cells remaining.
    pub fn solid_cells(&self) -> usize {
        self.cells.iter().filter(|&&solid| solid).count()
    }

    /// Solid state of an integer cell. Out-of-grid cells are empty.
    pub fn get(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height && self.cells[row * self.width + col]
    }

    /// Set an integer cell. Out-of-grid writes are ignored.
    pub fn set(&mut self, col: usize, row: usize, solid: bool) {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = solid;
        }
    }

    /// Map a screen point to its cell, or None if off the grid.
    fn cell_of(&self, point: Vector2) -> Option<(usize, usize)> {
        if !point.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = point.x.floor() as usize;
        let row = point.y.floor() as usize;
        (col < self.width && row < self.height).then_some((col, row))
    }
}

impl Terrain for BitmapTerrain {
    fn is_supported(&self, point: Vector2) -> bool {
        self.cell_of(point)
            .is_some_and(|(col, row)| self.cells[row * self.width + col])
    }

    /// Clears every cell whose centre lies within `radius` of `centre`.
    fn destroy_circle(&mut self, centre: Vector2, radius: f64) {
        if !centre.is_finite() || radius.is_nan() || radius <= 0.0 || self.cells.is_empty() {
            return;
        }

        let clamp_col = |v: f64| v.clamp(0.0, (self.width - 1) as f64) as usize;
        let clamp_row = |v: f64| v.clamp(0.0, (self.height - 1) as f64) as usize;
        let (c0, c1) = (
            clamp_col((centre.x - radius).floor()),
            clamp_col((centre.x + radius).ceil()),
        );
        let (r0, r1) = (
            clamp_row((centre.y - radius).floor()),
            clamp_row((centre.y + radius).ceil()),
        );

        let radius_sq = radius * radius;
        for row in r0..=r1 {
            for col in c0..=c1 {
                let cell_centre = Vector2::new(col as f64 + 0.5, row as f64 + 0.5);
                if cell_centre.distance_squared(centre) <= radius_sq {
                    self.cells[row * self.width + col] = false;
                }
            }
        }
    }
}

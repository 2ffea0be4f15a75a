// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The single-threaded renderer.  It walks the grid in row-major
//! order on the calling thread and is the reference the threaded
//! renderer is checked against.

use error::ConfigError;
use grid::Grid;
use kernel::render_row;
use planes::{PlaneMapper, Viewport};

/// Holds the plane and the iteration limit.  Once built it is not
/// mutated, and rendering the same grid twice gives the same counts.
#[derive(Copy, Clone, Debug)]
pub struct SerialRenderer {
    plane: PlaneMapper,
    limit: u32,
}

impl SerialRenderer {
    /// Requires the width and height of the image, the viewport it
    /// covers, and the per-pixel iteration limit.
    pub fn new(width: usize, height: usize, viewport: Viewport, limit: u32) -> Result<Self, ConfigError> {
        Ok(SerialRenderer::with_plane(PlaneMapper::new(width, height, viewport)?, limit))
    }

    /// Builds a renderer over an existing mapping.
    pub fn with_plane(plane: PlaneMapper, limit: u32) -> Self {
        SerialRenderer { plane, limit }
    }

    /// The plane being rendered.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Fills every cell of `grid`.
    pub fn render(&self, grid: &mut Grid) {
        self.render_rows(grid, 0, self.plane.height());
    }

    /// Fills `count` rows starting at `start`, leaving the rest of the
    /// grid untouched.
    pub fn render_rows(&self, grid: &mut Grid, start: usize, count: usize) {
        assert!(
            grid.width() == self.plane.width() && grid.height() == self.plane.height(),
            "grid is {}x{}, plane is {}x{}",
            grid.width(),
            grid.height(),
            self.plane.width(),
            self.plane.height()
        );
        for (row, cells) in grid.rows_mut().enumerate().skip(start).take(count) {
            render_row(&self.plane, row, self.limit, cells);
        }
    }
}

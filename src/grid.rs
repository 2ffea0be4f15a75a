// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The output buffer: a row-major plane of iteration counts.

use std::slice::{Chunks, ChunksMut};

/// A width x height plane of iteration counts, one per pixel, stored
/// row-major.  The caller owns it and lends it to a renderer for
/// in-place writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// A zeroed grid.
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![0 as u32; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Resets every cell to zero ahead of a new render pass.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = 0;
        }
    }

    /// The count at row, column.
    pub fn get(&self, row: usize, column: usize) -> u32 {
        self.cells[row * self.width + column]
    }

    /// The whole buffer, row-major.
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    /// One slice per row, top to bottom.
    pub fn rows(&self) -> Chunks<u32> {
        self.cells.chunks(self.width.max(1))
    }

    /// One mutable slice per row.  The slices never overlap, so each
    /// may be handed to a different thread.
    pub fn rows_mut(&mut self) -> ChunksMut<u32> {
        self.cells.chunks_mut(self.width.max(1))
    }
}

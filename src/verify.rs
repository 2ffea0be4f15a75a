// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cell-by-cell comparison of two grids.  The kernel is
//! deterministic, so a correct threaded render is bit-identical to the
//! serial one; there is no tolerance.

use failure::Fail;
use grid::Grid;
use itertools::iproduct;

/// The first difference between an expected and an actual grid.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum Mismatch {
    /// The grids are not the same size, so no cell comparison was made.
    #[fail(
        display = "Mismatch : grid is {}x{}, Expected : {}x{}",
        actual_width, actual_height, expected_width, expected_height
    )]
    Shape {
        /// Width of the reference grid.
        expected_width: usize,
        /// Height of the reference grid.
        expected_height: usize,
        /// Width of the grid under test.
        actual_width: usize,
        /// Height of the grid under test.
        actual_height: usize,
    },
    /// A cell differs.
    #[fail(
        display = "Mismatch : [{}][{}], Expected : {}, Actual : {}",
        row, column, expected, actual
    )]
    Cell {
        /// Row of the first differing cell.
        row: usize,
        /// Column of the first differing cell.
        column: usize,
        /// The reference value.
        expected: u32,
        /// The value found.
        actual: u32,
    },
}

/// Scans row-major and stops at the first differing cell.
pub fn first_mismatch(expected: &Grid, actual: &Grid) -> Option<Mismatch> {
    if expected.width() != actual.width() || expected.height() != actual.height() {
        return Some(Mismatch::Shape {
            expected_width: expected.width(),
            expected_height: expected.height(),
            actual_width: actual.width(),
            actual_height: actual.height(),
        });
    }
    iproduct!(0..expected.height(), 0..expected.width())
        .find(|&(row, column)| expected.get(row, column) != actual.get(row, column))
        .map(|(row, column)| Mismatch::Cell {
            row,
            column,
            expected: expected.get(row, column),
            actual: actual.get(row, column),
        })
}

/// True when the grids are identical.  Otherwise logs the first
/// mismatch and returns false.
pub fn verify(expected: &Grid, actual: &Grid) -> bool {
    match first_mismatch(expected, actual) {
        None => true,
        Some(mismatch) => {
            error!("{}", mismatch);
            false
        }
    }
}

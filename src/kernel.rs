// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel, and the row loop both renderers share.

use num::Complex;
use planes::{Pixel, PlaneMapper};

/// The classic iterator function.  The orbit starts at the point
/// itself; returns the iteration at which it left the circle of radius
/// two, or `limit` if it never did.
#[inline]
pub fn escape_time(c: Complex<f64>, limit: u32) -> u32 {
    let mut z = c;
    for i in 0..limit {
        if z.norm_sqr() > 4.0 {
            return i;
        }
        z = z * z + c;
    }
    limit
}

/// Fills one row of the grid.  `cells` must be exactly one row wide.
pub fn render_row(plane: &PlaneMapper, row: usize, limit: u32, cells: &mut [u32]) {
    assert_eq!(cells.len(), plane.width(), "row {} is not one plane wide", row);
    for (column, cell) in cells.iter_mut().enumerate() {
        *cell = escape_time(plane.pixel_to_point(&Pixel(column, row)), limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planes::Viewport;

    #[test]
    fn interior_points_never_escape() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 256), 256);
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 256), 256);
        assert_eq!(escape_time(Complex::new(-0.1, 0.1), 1000), 1000);
    }

    #[test]
    fn far_points_escape_at_once() {
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 256), 0);
        assert_eq!(escape_time(Complex::new(-2.0, -2.0), 256), 0);
    }

    #[test]
    fn near_points_take_a_few_steps() {
        // 1 -> 2 -> 5
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 256), 2);
        // The radius test is strict: -2 stays on the circle forever.
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 50), 50);
    }

    #[test]
    fn zero_limit_is_zero() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 0), 0);
    }

    #[test]
    fn row_matches_pointwise_kernel() {
        let plane = PlaneMapper::new(16, 8, Viewport::full()).unwrap();
        let mut row = vec![0u32; 16];
        render_row(&plane, 3, 64, &mut row);
        for (column, value) in row.iter().enumerate() {
            let c = plane.pixel_to_point(&Pixel(column, 3));
            assert_eq!(*value, escape_time(c, 64));
        }
    }
}

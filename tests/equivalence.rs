// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate mandelthreads;

use mandelthreads::balance::BalanceReport;
use mandelthreads::{first_mismatch, verify, Grid, ParallelRenderer, PlaneMapper, SerialRenderer, Strategy, View, Viewport};

fn serial_grid(plane: PlaneMapper, limit: u32) -> Grid {
    let mut grid = Grid::new(plane.width(), plane.height());
    SerialRenderer::with_plane(plane, limit).render(&mut grid);
    grid
}

fn threaded_grid(plane: PlaneMapper, limit: u32, threads: usize) -> Grid {
    let mut grid = Grid::new(plane.width(), plane.height());
    ParallelRenderer::with_plane(plane, limit, threads)
        .unwrap()
        .render(&mut grid)
        .unwrap();
    grid
}

#[test]
fn threaded_matches_serial_for_both_views() {
    for view in &[View::Full, View::Zoomed] {
        let plane = PlaneMapper::new(200, 150, view.viewport()).unwrap();
        let expected = serial_grid(plane, 256);
        for &threads in &[1, 2, 3, 4, 8, 16] {
            let actual = threaded_grid(plane, 256, threads);
            assert_eq!(
                first_mismatch(&expected, &actual),
                None,
                "{:?} with {} threads",
                view,
                threads
            );
        }
    }
}

#[test]
fn surplus_threads_still_fill_the_grid() {
    let plane = PlaneMapper::new(50, 5, Viewport::full()).unwrap();
    let expected = serial_grid(plane, 128);
    let actual = threaded_grid(plane, 128, 12);
    assert!(verify(&expected, &actual));
}

#[test]
fn single_row_image() {
    let plane = PlaneMapper::new(300, 1, Viewport::full()).unwrap();
    assert!(verify(&serial_grid(plane, 64), &threaded_grid(plane, 64, 4)));
}

#[test]
fn reference_run_verifies() {
    let plane = PlaneMapper::new(1600, 1200, Viewport::new(-2.0, -1.0, 1.0, 1.0).unwrap()).unwrap();
    let expected = serial_grid(plane, 256);
    let actual = threaded_grid(plane, 256, 8);
    assert!(verify(&expected, &actual));

    // The cost of a row follows its distance from the real axis, so
    // contiguous bands of rows load the middle workers far more than
    // the outer ones.  Interleaving evens that out.
    let interleaved = BalanceReport::measure(&expected, Strategy::Interleaved, 8).unwrap();
    let blocked = BalanceReport::measure(&expected, Strategy::Blocked, 8).unwrap();
    assert!(
        interleaved.spread() < blocked.spread(),
        "interleaved spread {} is not below blocked spread {}",
        interleaved.spread(),
        blocked.spread()
    );
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The threaded renderer.  Each call is a fork-join: rows are dealt
//! out with an interleaved partition, workers 1..n run on fresh scoped
//! threads, worker 0 runs on the calling thread, and the scope joins
//! every spawned thread before the call returns, whether it succeeded
//! or not.

extern crate crossbeam;

use error::{ConfigError, RenderError};
use grid::Grid;
use kernel::render_row;
use partition::{Partition, RowSlice};
use planes::{PlaneMapper, Viewport};

/// Everything one worker needs, handed over explicitly.  The plane and
/// limit are shared read-only; the rows are owned outright, and no
/// other task holds any of them.
pub struct WorkerTask<'a> {
    /// This worker's id, in `0..workers`.
    pub worker: usize,
    /// The total number of workers in this render.
    pub workers: usize,
    plane: &'a PlaneMapper,
    limit: u32,
    rows: Vec<RowSlice<'a>>,
}

impl<'a> WorkerTask<'a> {
    /// Number of rows this task will fill.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True for a surplus worker with nothing to do.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders every owned row, consuming the task.  Returns the number
    /// of rows written.
    pub fn run(self) -> usize {
        let count = self.rows.len();
        for (row, cells) in self.rows {
            render_row(self.plane, row, self.limit, cells);
        }
        trace!("worker {}/{} rendered {} rows", self.worker, self.workers, count);
        count
    }
}

/// Builds the per-worker tasks for one render, in worker order.
pub fn tasks<'a>(plane: &'a PlaneMapper, limit: u32, threads: usize, grid: &'a mut Grid) -> Result<Vec<WorkerTask<'a>>, ConfigError> {
    let partition = Partition::interleaved(grid.height(), threads)?;
    Ok(partition
        .split(grid)
        .into_iter()
        .enumerate()
        .map(|(worker, rows)| WorkerTask {
            worker,
            workers: threads,
            plane,
            limit,
            rows,
        })
        .collect())
}

/// Renders `grid` over `plane` with `threads` workers and returns
/// once every row has been written.  The calling thread is worker 0.
///
/// If a thread cannot be started, or a worker panics, the error is
/// returned after the threads that did start have been joined; the
/// grid contents are then meaningless.
pub fn render_threaded(plane: &PlaneMapper, limit: u32, threads: usize, grid: &mut Grid) -> Result<(), RenderError> {
    assert!(
        grid.width() == plane.width() && grid.height() == plane.height(),
        "grid is {}x{}, plane is {}x{}",
        grid.width(),
        grid.height(),
        plane.width(),
        plane.height()
    );
    run_tasks(tasks(plane, limit, threads, grid)?)
}

/// Runs the first task on the calling thread and every other task on
/// its own scoped thread, then joins them all.  A spawn failure stops
/// further spawning; the threads already started are still joined
/// before the error is returned.
pub fn run_tasks(tasks: Vec<WorkerTask>) -> Result<(), RenderError> {
    let mut tasks = tasks.into_iter();
    let inline = tasks.next();

    let outcome = crossbeam::scope(|spawner| -> Result<(), RenderError> {
        for task in tasks {
            let worker = task.worker;
            spawner
                .builder()
                .name(format!("mandel-worker-{}", worker))
                .spawn(move |_| task.run())
                .map_err(|cause| RenderError::Spawn { worker, cause })?;
        }
        if let Some(task) = inline {
            task.run();
        }
        Ok(())
    });

    match outcome {
        Ok(result) => result,
        Err(_) => Err(RenderError::WorkerPanicked),
    }
}

/// Holds the plane, the iteration limit, and the worker count.
#[derive(Copy, Clone, Debug)]
pub struct ParallelRenderer {
    plane: PlaneMapper,
    limit: u32,
    threads: usize,
}

impl ParallelRenderer {
    /// Requires the width and height of the image, the viewport, the
    /// per-pixel iteration limit, and at least one worker.
    pub fn new(width: usize, height: usize, viewport: Viewport, limit: u32, threads: usize) -> Result<Self, ConfigError> {
        ParallelRenderer::with_plane(PlaneMapper::new(width, height, viewport)?, limit, threads)
    }

    /// Builds a renderer over an existing mapping.
    pub fn with_plane(plane: PlaneMapper, limit: u32, threads: usize) -> Result<Self, ConfigError> {
        if threads == 0 {
            return Err(ConfigError::InvalidThreadCount(0));
        }
        Ok(ParallelRenderer { plane, limit, threads })
    }

    /// The worker count.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Fills every cell of `grid` using a fresh set of worker threads.
    pub fn render(&self, grid: &mut Grid) -> Result<(), RenderError> {
        render_threaded(&self.plane, self.limit, self.threads, grid)
    }
}

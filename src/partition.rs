// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Row-to-worker assignment.
//!
//! The cost of a row depends heavily on where it sits: rows crossing
//! the body of the set run every pixel to the iteration limit, while
//! rows near the top and bottom of the default view escape almost
//! immediately.  Expensive rows come in contiguous bands, so handing
//! each worker a contiguous block of rows gives some workers nearly
//! all the work.  Dealing rows out like cards, row `r` to worker
//! `r mod n`, gives every worker a sample of every band.
//!
//! The contiguous `Blocked` strategy is kept for comparison; the
//! parallel renderer always deals rows out `Interleaved`.

use error::ConfigError;
use grid::Grid;

/// A row index paired with the cells of that row.
pub type RowSlice<'a> = (usize, &'a mut [u32]);

/// How rows are assigned to workers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Row `r` goes to worker `r mod workers`.
    Interleaved,
    /// Worker `w` gets the `w`th run of `ceil(rows / workers)`
    /// consecutive rows.
    Blocked,
}

/// A total map from the rows `0..rows` to the workers `0..workers`.
/// Every row belongs to exactly one worker.  Workers beyond the row
/// count get nothing.
#[derive(Copy, Clone, Debug)]
pub struct Partition {
    strategy: Strategy,
    rows: usize,
    workers: usize,
}

impl Partition {
    /// Fails if there are no workers to assign rows to.
    pub fn new(strategy: Strategy, rows: usize, workers: usize) -> Result<Partition, ConfigError> {
        if workers == 0 {
            return Err(ConfigError::InvalidThreadCount(0));
        }
        Ok(Partition {
            strategy,
            rows,
            workers,
        })
    }

    /// The assignment the parallel renderer uses.
    pub fn interleaved(rows: usize, workers: usize) -> Result<Partition, ConfigError> {
        Partition::new(Strategy::Interleaved, rows, workers)
    }

    /// Contiguous bands of rows, for comparison.
    pub fn blocked(rows: usize, workers: usize) -> Result<Partition, ConfigError> {
        Partition::new(Strategy::Blocked, rows, workers)
    }

    /// The strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of rows covered.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of workers rows are dealt to.
    pub fn workers(&self) -> usize {
        self.workers
    }

    fn block_size(&self) -> usize {
        (self.rows + self.workers - 1) / self.workers
    }

    /// The worker that owns `row`.
    pub fn worker_for_row(&self, row: usize) -> usize {
        assert!(row < self.rows, "row {} outside 0..{}", row, self.rows);
        match self.strategy {
            Strategy::Interleaved => row % self.workers,
            Strategy::Blocked => row / self.block_size(),
        }
    }

    /// The rows `worker` owns, in ascending order.  Empty for surplus
    /// workers.
    pub fn rows_for_worker(&self, worker: usize) -> Vec<usize> {
        assert!(worker < self.workers, "worker {} outside 0..{}", worker, self.workers);
        match self.strategy {
            Strategy::Interleaved => (worker..self.rows).step_by(self.workers).collect(),
            Strategy::Blocked => {
                let size = self.block_size();
                let start = (worker * size).min(self.rows);
                let end = ((worker + 1) * size).min(self.rows);
                (start..end).collect()
            }
        }
    }

    /// Deals the rows of `grid` out to the workers.  Bucket `w` holds
    /// worker `w`'s rows as mutable slices, in ascending row order.
    /// The slices come from splitting the grid's buffer, so no two
    /// buckets can ever alias the same cell.
    pub fn split<'a>(&self, grid: &'a mut Grid) -> Vec<Vec<RowSlice<'a>>> {
        assert_eq!(grid.height(), self.rows, "partition and grid disagree on row count");
        let mut buckets: Vec<Vec<RowSlice<'a>>> = (0..self.workers).map(|_| vec![]).collect();
        for (row, cells) in grid.rows_mut().enumerate() {
            buckets[self.worker_for_row(row)].push((row, cells));
        }
        buckets
    }
}

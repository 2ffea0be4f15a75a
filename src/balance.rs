// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Load-balance estimates.  The iteration counts in a rendered grid
//! are a good proxy for the time each pixel took, so summing them
//! over the rows a partition hands each worker estimates how long
//! that worker would run.

use itertools::{Itertools, MinMaxResult};
use std::fmt;

use error::ConfigError;
use grid::Grid;
use partition::{Partition, Strategy};

/// The summed iteration count of each row.
pub fn row_costs(grid: &Grid) -> Vec<u64> {
    grid.rows()
        .map(|row| row.iter().map(|&c| u64::from(c)).sum::<u64>())
        .collect()
}

/// The estimated cost of each worker under `partition`.
pub fn worker_costs(grid: &Grid, partition: &Partition) -> Vec<u64> {
    let rows = row_costs(grid);
    (0..partition.workers())
        .map(|worker| partition.rows_for_worker(worker).iter().map(|&r| rows[r]).sum::<u64>())
        .collect()
}

/// The difference between the busiest and the idlest worker.
pub fn spread(costs: &[u64]) -> u64 {
    match costs.iter().minmax() {
        MinMaxResult::NoElements | MinMaxResult::OneElement(_) => 0,
        MinMaxResult::MinMax(min, max) => max - min,
    }
}

/// Per-worker cost estimate for one strategy.
#[derive(Clone, Debug)]
pub struct BalanceReport {
    /// The strategy measured.
    pub strategy: Strategy,
    /// Estimated cost per worker, in worker order.
    pub costs: Vec<u64>,
}

impl BalanceReport {
    /// Estimates `strategy` with `workers` workers over a rendered grid.
    pub fn measure(grid: &Grid, strategy: Strategy, workers: usize) -> Result<BalanceReport, ConfigError> {
        let partition = Partition::new(strategy, grid.height(), workers)?;
        Ok(BalanceReport {
            strategy,
            costs: worker_costs(grid, &partition),
        })
    }

    /// Busiest minus idlest.
    pub fn spread(&self) -> u64 {
        spread(&self.costs)
    }

    /// The busiest worker's share of the total, as a multiple of a
    /// perfectly even share.  1.0 is perfect balance.
    pub fn imbalance(&self) -> f64 {
        let total: u64 = self.costs.iter().sum();
        match self.costs.iter().max() {
            Some(&max) if total > 0 => (max as f64) * (self.costs.len() as f64) / (total as f64),
            _ => 1.0,
        }
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{:?} partition]:\t\tspread {}, busiest worker {:.2}x an even share",
            self.strategy,
            self.spread(),
            self.imbalance()
        )
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Run configuration: what to render, with how many threads, and
//! where to put the images.

use std::path::PathBuf;

use error::ConfigError;
use planes::{PlaneMapper, View};

/// Worker count when none is given.
pub const DEFAULT_THREADS: usize = 8;
/// Image width when none is given.
pub const DEFAULT_WIDTH: usize = 1600;
/// Image height when none is given.
pub const DEFAULT_HEIGHT: usize = 1200;
/// Per-pixel iteration limit when none is given.
pub const DEFAULT_ITERATIONS: u32 = 256;
/// Timed trials per renderer when none is given.
pub const DEFAULT_TRIALS: usize = 5;

/// Everything a benchmark run needs.  Fixed for the whole run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Workers for the threaded renderer.
    pub threads: usize,
    /// Which preset viewport to render.
    pub view: View,
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Per-pixel iteration limit.
    pub max_iterations: u32,
    /// Timed trials per renderer; the fastest is reported.
    pub trials: usize,
    /// Directory the two images are written to.
    pub output: PathBuf,
    /// Also report the estimated per-worker load under each partition
    /// strategy.
    pub balance: bool,
}

impl Default for RunConfig {
    fn default() -> RunConfig {
        RunConfig {
            threads: DEFAULT_THREADS,
            view: View::Full,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_ITERATIONS,
            trials: DEFAULT_TRIALS,
            output: PathBuf::from("."),
            balance: false,
        }
    }
}

impl RunConfig {
    /// The pixel-to-plane mapping for this run.
    pub fn plane(&self) -> Result<PlaneMapper, ConfigError> {
        PlaneMapper::new(self.width, self.height, self.view.viewport())
    }
}

/// A thread count from the command line.  Zero and negative counts
/// are refused rather than left undefined.
pub fn thread_count(requested: i64) -> Result<usize, ConfigError> {
    if requested < 1 {
        return Err(ConfigError::InvalidThreadCount(requested));
    }
    Ok(requested as usize)
}

/// A trial count from the command line.
pub fn trial_count(requested: i64) -> Result<usize, ConfigError> {
    if requested < 1 {
        return Err(ConfigError::InvalidTrialCount(requested));
    }
    Ok(requested as usize)
}

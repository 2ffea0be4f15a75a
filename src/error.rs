// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error types.  Configuration problems are caught before any
//! rendering starts; render errors abort the render that raised them.
//! Neither is ever retried.

use failure::Fail;
use std::io;

/// Something about the requested run cannot be honoured.
#[derive(Debug, Fail)]
pub enum ConfigError {
    /// The view index named no preset.
    #[fail(display = "Invalid view index")]
    InvalidView(i64),
    /// A render needs at least one worker.
    #[fail(display = "Thread count must be at least 1, got {}", _0)]
    InvalidThreadCount(i64),
    /// At least one timed trial is needed to report a time.
    #[fail(display = "Trial count must be at least 1, got {}", _0)]
    InvalidTrialCount(i64),
    /// The viewport bounds were inverted.
    #[fail(display = "Bad viewport: {}", _0)]
    BadViewport(String),
    /// The pixel grid has no pixels, or is too large to address.
    #[fail(display = "Image size must be non-zero and fit in memory, got {}x{}", _0, _1)]
    BadSize(usize, usize),
}

/// A render could not produce a complete grid.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The request was invalid before any thread was started.
    #[fail(display = "{}", _0)]
    Config(#[cause] ConfigError),
    /// The operating system refused to start a worker thread.
    #[fail(display = "could not spawn worker {}: {}", worker, cause)]
    Spawn {
        /// Id of the worker that failed to start.
        worker: usize,
        /// The underlying error from the thread builder.
        #[cause]
        cause: io::Error,
    },
    /// A worker thread panicked before finishing its rows.
    #[fail(display = "a worker thread panicked")]
    WorkerPanicked,
}

impl From<ConfigError> for RenderError {
    fn from(err: ConfigError) -> RenderError {
        RenderError::Config(err)
    }
}

#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Threaded Mandelbrot renderer
//!
//! The Mandelbrot set is drawn by taking the complex number under
//! each pixel and repeatedly squaring it and adding it back, counting
//! how many rounds pass before it runs off towards infinity.  Every
//! pixel is independent of every other, so the work splits cleanly
//! across threads, but it does not split *evenly*: pixels inside the
//! set run all the way to the iteration limit while pixels far
//! outside it stop after a round or two, and the expensive pixels
//! cluster together in bands.
//!
//! This crate renders the same grid twice, once on a single thread
//! and once with a fixed number of worker threads that are dealt rows
//! in interleaved order, checks that the two grids are identical cell
//! for cell, and reports the speedup.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate num;
extern crate num_cpus;
#[macro_use]
extern crate tracing;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod balance;
pub mod config;
pub mod error;
pub mod grid;
pub mod harness;
pub mod kernel;
pub mod output;
pub mod parallel;
pub mod partition;
pub mod planes;
pub mod serial;
pub mod verify;

pub use error::{ConfigError, RenderError};
pub use grid::Grid;
pub use parallel::ParallelRenderer;
pub use partition::{Partition, Strategy};
pub use planes::{PlaneMapper, View, Viewport};
pub use serial::SerialRenderer;
pub use verify::{first_mismatch, verify, Mismatch};

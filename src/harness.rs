// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The benchmark harness.  Times the serial and the threaded renderer
//! over several trials each, keeps the fastest trial of each, writes
//! both images, and checks the threaded grid against the serial one.

extern crate num_cpus;

use failure::Error;
use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use balance::BalanceReport;
use config::RunConfig;
use error::ConfigError;
use grid::Grid;
use output::{write_image, SERIAL_IMAGE, THREAD_IMAGE};
use parallel::ParallelRenderer;
use partition::Strategy;
use serial::SerialRenderer;
use verify::{first_mismatch, Mismatch};

/// The outcome of a run.
#[derive(Debug)]
pub struct Report {
    /// Fastest serial trial.
    pub serial: Duration,
    /// Fastest threaded trial.
    pub thread: Duration,
    /// Worker count of the threaded renderer.
    pub threads: usize,
    /// The first cell where the threaded grid differed, if any.
    pub mismatch: Option<Mismatch>,
    /// Estimated per-worker load, when requested.
    pub balance: Vec<BalanceReport>,
}

fn millis(d: Duration) -> f64 {
    d.as_secs() as f64 * 1000.0 + f64::from(d.subsec_nanos()) / 1_000_000.0
}

impl Report {
    /// True when the threaded grid matched the serial grid exactly.
    pub fn verified(&self) -> bool {
        self.mismatch.is_none()
    }

    /// Serial time over threaded time.
    pub fn speedup(&self) -> f64 {
        millis(self.serial) / millis(self.thread)
    }

    /// The line reporting the speedup.
    pub fn speedup_line(&self) -> String {
        format!("\t\t\t\t({:.2}x speedup from {} threads)", self.speedup(), self.threads)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[mandelbrot serial]:\t\t[{:.3}] ms", millis(self.serial))?;
        write!(f, "[mandelbrot thread]:\t\t[{:.3}] ms", millis(self.thread))
    }
}

// Runs `pass` over a freshly zeroed grid `trials` times and returns
// the fastest.
fn fastest<F>(label: &str, trials: usize, grid: &mut Grid, mut pass: F) -> Result<Duration, Error>
where
    F: FnMut(&mut Grid) -> Result<(), Error>,
{
    let mut best: Option<Duration> = None;
    for trial in 0..trials {
        grid.clear();
        let start = Instant::now();
        pass(grid)?;
        let elapsed = start.elapsed();
        debug!("{} trial {}: {:.3} ms", label, trial, millis(elapsed));
        best = Some(best.map_or(elapsed, |b| b.min(elapsed)));
    }
    Ok(best.unwrap_or_default())
}

/// Runs the whole benchmark described by `config`.  Errors are
/// configuration, render, or I/O failures; a verification mismatch is
/// not an error but is recorded in the report.
pub fn run(config: &RunConfig) -> Result<Report, Error> {
    let plane = config.plane()?;
    if config.trials == 0 {
        return Err(ConfigError::InvalidTrialCount(0).into());
    }
    let serial = SerialRenderer::with_plane(plane, config.max_iterations);
    let parallel = ParallelRenderer::with_plane(plane, config.max_iterations, config.threads)?;

    let cpus = num_cpus::get();
    if config.threads > cpus {
        warn!("{} threads requested but only {} logical cpus are available", config.threads, cpus);
    }
    info!(
        "rendering {:?} at {}x{}, {} iterations, {} trials",
        config.view, config.width, config.height, config.max_iterations, config.trials
    );

    let mut serial_grid = Grid::new(config.width, config.height);
    let serial_time = fastest("serial", config.trials, &mut serial_grid, |grid| {
        serial.render(grid);
        Ok(())
    })?;
    write_image(config.output.join(SERIAL_IMAGE), &serial_grid, config.max_iterations)?;

    let mut thread_grid = Grid::new(config.width, config.height);
    let thread_time = fastest("thread", config.trials, &mut thread_grid, |grid| {
        parallel.render(grid).map_err(Error::from)
    })?;
    write_image(config.output.join(THREAD_IMAGE), &thread_grid, config.max_iterations)?;

    let mismatch = first_mismatch(&serial_grid, &thread_grid);

    let mut balance = vec![];
    if config.balance {
        for strategy in &[Strategy::Interleaved, Strategy::Blocked] {
            balance.push(BalanceReport::measure(&serial_grid, *strategy, config.threads)?);
        }
    }

    Ok(Report {
        serial: serial_time,
        thread: thread_time,
        threads: config.threads,
        mismatch,
        balance,
    })
}

/// Writes the end-of-run summary to `out` and returns the process
/// exit code: 0 when the threaded grid verified, 1 when it did not.
pub fn summarize<W: Write>(report: &Report, out: &mut W) -> io::Result<i32> {
    writeln!(out, "{}", report)?;
    if let Some(ref mismatch) = report.mismatch {
        writeln!(out, "{}", mismatch)?;
        writeln!(out, "Error : Output from threads does not match serial output")?;
        return Ok(1);
    }
    for balance in &report.balance {
        writeln!(out, "{}", balance)?;
    }
    writeln!(out, "{}", report.speedup_line())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planes::View;
    use std::path::Path;
    use tempfile::tempdir;

    fn small(output: &Path, threads: usize) -> RunConfig {
        RunConfig {
            threads,
            width: 96,
            height: 64,
            trials: 2,
            output: output.to_path_buf(),
            ..RunConfig::default()
        }
    }

    #[test]
    fn run_verifies_and_writes_both_images() {
        let dir = tempdir().unwrap();
        let report = run(&small(dir.path(), 4)).unwrap();
        assert!(report.verified());
        assert!(report.balance.is_empty());
        assert!(dir.path().join(SERIAL_IMAGE).exists());
        assert!(dir.path().join(THREAD_IMAGE).exists());
    }

    #[test]
    fn run_reports_balance_when_asked() {
        let dir = tempdir().unwrap();
        let config = RunConfig {
            balance: true,
            view: View::Zoomed,
            ..small(dir.path(), 3)
        };
        let report = run(&config).unwrap();
        assert_eq!(report.balance.len(), 2);
        assert_eq!(report.balance[0].strategy, Strategy::Interleaved);
        assert_eq!(report.balance[0].costs.len(), 3);
    }

    #[test]
    fn report_lines() {
        let report = Report {
            serial: Duration::from_millis(600),
            thread: Duration::from_millis(150),
            threads: 8,
            mismatch: None,
            balance: vec![],
        };
        assert_eq!(
            report.to_string(),
            "[mandelbrot serial]:\t\t[600.000] ms\n[mandelbrot thread]:\t\t[150.000] ms"
        );
        assert_eq!(report.speedup_line(), "\t\t\t\t(4.00x speedup from 8 threads)");
    }

    fn timed(mismatch: Option<Mismatch>) -> Report {
        Report {
            serial: Duration::from_millis(300),
            thread: Duration::from_millis(100),
            threads: 4,
            mismatch,
            balance: vec![],
        }
    }

    #[test]
    fn summary_of_a_verified_run_exits_zero() {
        let mut out = vec![];
        assert_eq!(summarize(&timed(None), &mut out).unwrap(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("(3.00x speedup from 4 threads)\n"));
        assert!(!text.contains("Error"));
    }

    #[test]
    fn summary_of_a_mismatch_exits_one_without_speedup() {
        let mismatch = Mismatch::Cell {
            row: 7,
            column: 2,
            expected: 256,
            actual: 0,
        };
        let mut out = vec![];
        assert_eq!(summarize(&timed(Some(mismatch)), &mut out).unwrap(), 1);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Mismatch : [7][2], Expected : 256, Actual : 0").count(), 1);
        assert!(text.contains("Error : Output from threads does not match serial output"));
        assert!(!text.contains("speedup"));
    }

    #[test]
    fn missing_output_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let config = small(&dir.path().join("not-there"), 2);
        assert!(run(&config).is_err());
    }
}

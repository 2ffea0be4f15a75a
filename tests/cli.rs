// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn mandelthreads() -> Command {
    Command::cargo_bin("mandelthreads").unwrap()
}

#[test]
fn small_run_reports_speedup_and_writes_images() {
    let dir = tempdir().unwrap();
    mandelthreads()
        .args(&["-t", "4", "-s", "160x120", "-n", "2", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[mandelbrot serial]"))
        .stdout(predicate::str::contains("[mandelbrot thread]"))
        .stdout(predicate::str::contains("speedup from 4 threads"));
    assert!(dir.path().join("mandelbrot-serial.ppm").exists());
    assert!(dir.path().join("mandelbrot-thread.ppm").exists());
}

#[test]
fn zoomed_view_runs() {
    let dir = tempdir().unwrap();
    mandelthreads()
        .args(&["--view", "2", "--threads", "3", "--size", "120x90", "--trials", "1", "--output"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn balance_report_names_both_strategies() {
    let dir = tempdir().unwrap();
    mandelthreads()
        .args(&["-s", "160x120", "-n", "1", "--balance", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Interleaved partition]"))
        .stdout(predicate::str::contains("[Blocked partition]"));
}

#[test]
fn invalid_view_exits_without_rendering() {
    let dir = tempdir().unwrap();
    mandelthreads()
        .args(&["--view", "3", "-o"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid view index"));
    assert!(!dir.path().join("mandelbrot-serial.ppm").exists());
}

#[test]
fn zero_threads_is_a_configuration_error() {
    mandelthreads()
        .args(&["-t", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Thread count must be at least 1"));
}

#[test]
fn negative_threads_is_a_configuration_error() {
    mandelthreads()
        .args(&["-t", "-2"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn help_exits_with_one() {
    mandelthreads()
        .arg("--help")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("--threads"));
}

#[test]
fn version_flag_is_not_accepted() {
    mandelthreads().arg("--version").assert().code(1);
}

#[test]
fn unaddressable_size_is_a_configuration_error() {
    mandelthreads()
        .args(&["-s", "4294967296x4294967296", "-n", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Image size"));
}

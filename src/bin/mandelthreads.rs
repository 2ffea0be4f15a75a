// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate mandelthreads;
extern crate tracing;
extern crate tracing_subscriber;

use clap::{App, AppSettings, Arg, ArgMatches};
use mandelthreads::config::{self, RunConfig};
use mandelthreads::{harness, ConfigError, View};
use std::io;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use tracing::Level;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

const THREADS: &str = "threads";
const VIEW: &str = "view";
const HELP: &str = "help";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const TRIALS: &str = "trials";
const OUTPUT: &str = "output";
const BALANCE: &str = "balance";
const VERBOSE: &str = "verbose";

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("mandelthreads")
        .version("0.1.0")
        .about("Serial and threaded Mandelbrot renderer")
        .setting(AppSettings::DisableHelpFlags)
        .setting(AppSettings::DisableVersion)
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .value_name("N")
                .allow_hyphen_values(true)
                .default_value("8")
                .validator(|s| validate_number::<i64>(&s, "Could not parse thread count"))
                .help("Use N threads"),
        )
        .arg(
            Arg::with_name(VIEW)
                .long(VIEW)
                .short("v")
                .takes_value(true)
                .value_name("INT")
                .allow_hyphen_values(true)
                .default_value("1")
                .validator(|s| validate_number::<i64>(&s, "Could not parse view index"))
                .help("Use specified view settings"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .value_name("WxH")
                .default_value("1600x1200")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .value_name("N")
                .default_value("256")
                .validator(|s| validate_number::<u32>(&s, "Could not parse iteration count"))
                .help("Maximum iterations per pixel"),
        )
        .arg(
            Arg::with_name(TRIALS)
                .long(TRIALS)
                .short("n")
                .takes_value(true)
                .value_name("N")
                .allow_hyphen_values(true)
                .default_value("5")
                .validator(|s| validate_number::<i64>(&s, "Could not parse trial count"))
                .help("Timed runs per renderer; the fastest is reported"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .value_name("DIR")
                .default_value(".")
                .help("Directory to write the images to"),
        )
        .arg(
            Arg::with_name(BALANCE)
                .long(BALANCE)
                .help("Report estimated per-worker load for each partition strategy"),
        )
        .arg(Arg::with_name(VERBOSE).long(VERBOSE).help("Log each trial"))
        .arg(Arg::with_name(HELP).long(HELP).short("?").help("This message"))
}

fn config_from(matches: &ArgMatches) -> Result<RunConfig, ConfigError> {
    // The validators have already run, so these parses cannot fail.
    let number = |name: &str| i64::from_str(matches.value_of(name).unwrap_or("")).unwrap_or(0);
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<usize>(s, 'x'))
        .unwrap_or((config::DEFAULT_WIDTH, config::DEFAULT_HEIGHT));
    let max_iterations = matches
        .value_of(ITERATIONS)
        .and_then(|s| u32::from_str(s).ok())
        .unwrap_or(config::DEFAULT_ITERATIONS);

    let config = RunConfig {
        threads: config::thread_count(number(THREADS))?,
        view: View::from_index(number(VIEW))?,
        width,
        height,
        max_iterations,
        trials: config::trial_count(number(TRIALS))?,
        output: PathBuf::from(matches.value_of(OUTPUT).unwrap_or(".")),
        balance: matches.is_present(BALANCE),
    };
    config.plane()?;
    Ok(config)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let mut usage = app();
    let matches = app().get_matches();
    if matches.is_present(HELP) {
        let _ = usage.print_help();
        println!();
        process::exit(1);
    }
    init_logging(matches.is_present(VERBOSE));

    let config = match config_from(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match harness::run(&config) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            process::exit(1);
        }
        Ok(report) => match harness::summarize(&report, &mut io::stdout()) {
            Ok(code) => process::exit(code),
            Err(e) => {
                eprintln!("Could not write the report: {}", e);
                process::exit(1);
            }
        },
    }
}

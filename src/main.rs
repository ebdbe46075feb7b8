// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate clap;
extern crate fractals;
#[macro_use]
extern crate tracing;
extern crate tracing_subscriber;

use clap::{App, AppSettings, Arg, ArgMatches, ErrorKind, SubCommand};
use fractals::{parse_number, render, render_double_colour, Fractal, Point, Viewport};
use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::process;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::EnvFilter;

const MANDELBROT: &str = "mandelbrot";
const JULIA: &str = "julia";
const REAL: &str = "real";
const IMAG: &str = "imag";
const COLOUR: &str = "colour";
const WIDTH: &str = "width";
const ITERATIONS: &str = "iterations";
const VERBOSE: &str = "verbose";

const DEFAULT_WIDTH: &str = "80";
const DEFAULT_ITERATIONS: &str = "256";
const MAX_WIDTH: usize = 10_000;
const MAX_ITERATIONS: usize = 65_536;

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match parse_number::<T>(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(e) => Err(e.to_string()),
    }
}

fn validate_finite(s: &str) -> Result<(), String> {
    match parse_number::<f64>(s) {
        Ok(v) if v.is_finite() => Ok(()),
        Ok(_) => Err(format!("{} is not a finite number", s)),
        Err(e) => Err(e.to_string()),
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    let colour = Arg::with_name(COLOUR)
        .long(COLOUR)
        .alias("color")
        .short("c")
        .help("Draw in 24-bit colour, two samples per character cell");
    let width = Arg::with_name(WIDTH)
        .long(WIDTH)
        .short("w")
        .takes_value(true)
        .default_value(DEFAULT_WIDTH)
        .validator(|s| {
            validate_range(
                &s,
                1,
                MAX_WIDTH,
                &format!("Width must be between 1 and {}", MAX_WIDTH),
            )
        })
        .help("Terminal width in columns");
    let iterations = Arg::with_name(ITERATIONS)
        .long(ITERATIONS)
        .short("i")
        .takes_value(true)
        .default_value(DEFAULT_ITERATIONS)
        .validator(|s| {
            validate_range(
                &s,
                1,
                MAX_ITERATIONS,
                &format!("Iteration count must be between 1 and {}", MAX_ITERATIONS),
            )
        })
        .help("Steps after which a point counts as bounded");

    App::new("fractals")
        .version(crate_version!())
        .about("Toy fractal renderer; the '-c' option adds colour, have fun!")
        .arg(
            Arg::with_name(VERBOSE)
                .long(VERBOSE)
                .short("v")
                .multiple(true)
                .global(true)
                .help("Log more to stderr (-v info, -vv debug)"),
        )
        .subcommand(
            SubCommand::with_name(MANDELBROT)
                .about("Draw the Mandelbrot set")
                .arg(colour.clone())
                .arg(width.clone())
                .arg(iterations.clone()),
        )
        .subcommand(
            SubCommand::with_name(JULIA)
                .about("Draw the Julia set for the constant <real> + <imag>i")
                .setting(AppSettings::AllowNegativeNumbers)
                .arg(
                    Arg::with_name(REAL)
                        .required(true)
                        .index(1)
                        .validator(|s| validate_finite(&s))
                        .help("Real part of the constant"),
                )
                .arg(
                    Arg::with_name(IMAG)
                        .required(true)
                        .index(2)
                        .validator(|s| validate_finite(&s))
                        .help("Imaginary part of the constant"),
                )
                .arg(colour)
                .arg(width)
                .arg(iterations),
        )
}

/// What to draw and how, resolved from the command line.
#[derive(Debug)]
struct Settings {
    fractal: Fractal,
    viewport: Viewport,
    colour: bool,
    width: usize,
}

impl Settings {
    fn from_matches(matches: &ArgMatches) -> fractals::Result<Option<Settings>> {
        let (name, sub) = match matches.subcommand() {
            (name, Some(sub)) => (name, sub),
            (_, None) => return Ok(None),
        };

        let colour = sub.is_present(COLOUR);
        let width = parse_number(sub.value_of(WIDTH).unwrap_or_default())?;
        let iterations = parse_number(sub.value_of(ITERATIONS).unwrap_or_default())?;

        let (fractal, viewport) = if name == JULIA {
            let c = Point::new(
                parse_number(sub.value_of(REAL).unwrap_or_default())?,
                parse_number(sub.value_of(IMAG).unwrap_or_default())?,
            );
            (
                Fractal::julia(c, iterations),
                Viewport::new(Point::new(-2.0, -1.2), Point::new(2.0, 1.2)),
            )
        } else if colour {
            (
                Fractal::mandelbrot(iterations),
                Viewport::new(Point::new(-2.15, -1.0), Point::new(0.85, 1.0)),
            )
        } else {
            (
                Fractal::mandelbrot(iterations),
                Viewport::new(Point::new(-2.0, -1.0), Point::new(1.0, 1.0)),
            )
        };

        Ok(Some(Settings {
            fractal,
            viewport,
            colour,
            width,
        }))
    }
}

fn verbosity(matches: &ArgMatches) -> u64 {
    let sub = matches
        .subcommand()
        .1
        .map_or(0, |sub| sub.occurrences_of(VERBOSE));
    matches.occurrences_of(VERBOSE).max(sub)
}

// RUST_LOG wins unless -v is given; without either only warnings show.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) if verbosity == 0 => filter,
        Ok(filter) => filter.add_directive(level.into()),
        Err(_) => EnvFilter::default().add_directive(level.into()),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn run(settings: &Settings) -> fractals::Result<()> {
    info!(
        fractal = %settings.fractal,
        colour = settings.colour,
        width = settings.width,
        "rendering"
    );
    debug!(viewport = ?settings.viewport, "viewport");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if settings.colour {
        render_double_colour(
            settings.fractal.unit_map(),
            &settings.viewport,
            settings.width,
            &mut out,
        )?;
    } else {
        render(
            settings.fractal.predicate(),
            &settings.viewport,
            settings.width,
            &mut out,
        )?;
    }
    out.flush()?;
    Ok(())
}

fn print_usage(app: &mut App) {
    if let Err(e) = app.print_help() {
        eprintln!("fractals: {}", e);
        process::exit(1);
    }
    println!();
}

// An unknown word or flag before any subcommand gets the usage text,
// not an error.  Mistakes inside a subcommand still fail.
fn unrecognized_at_top(err: &clap::Error, args: &[OsString]) -> bool {
    match err.kind {
        ErrorKind::UnknownArgument | ErrorKind::UnrecognizedSubcommand => !args
            .iter()
            .skip(1)
            .any(|a| a == MANDELBROT || a == JULIA),
        _ => false,
    }
}

fn main() {
    let args: Vec<OsString> = env::args_os().collect();
    let mut app = app();
    let matches = match app.clone().get_matches_from_safe(args.clone()) {
        Ok(matches) => matches,
        Err(ref e) if unrecognized_at_top(e, &args) => {
            print_usage(&mut app);
            return;
        }
        Err(e) => e.exit(),
    };
    init_logging(verbosity(&matches));

    let settings = match Settings::from_matches(&matches) {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            print_usage(&mut app);
            return;
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("fractals: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&settings) {
        error!("{}", e);
        eprintln!("fractals: {}", e);
        process::exit(1);
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: asks for a glass and reports how long it takes to fill.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use glass_pyramid::geometry::constants::{MAX_TARGET_ROW, MIN_TARGET_ROW};
use glass_pyramid::{FillSearch, Position, Pyramid, SearchConfig};

#[derive(Parser)]
#[command(
    name = "pyramid",
    about = "Time needed to fill a glass in a pyramid of overflowing glasses",
    version
)]
struct Cli {
    /// Row of the target glass, counted from 1 at the top
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(MIN_TARGET_ROW as u64..=MAX_TARGET_ROW as u64))]
    row: Option<u64>,

    /// Glass within the row, counted from 1 on the left
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    glass: Option<u64>,

    /// TOML file with search settings
    #[arg(short, long, env = "PYRAMID_CONFIG")]
    config: Option<PathBuf>,

    /// Override the search precision
    #[arg(short, long)]
    precision: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => SearchConfig::load_from(path)?,
        None => SearchConfig::default(),
    };
    if let Some(precision) = cli.precision {
        config = config.with_precision(precision)?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let row = match cli.row {
        Some(row) => row as usize,
        None => prompt_in_range(
            &format!("Row ({}-{}): ", MIN_TARGET_ROW, MAX_TARGET_ROW),
            &mut input,
            &mut output,
            MIN_TARGET_ROW,
            MAX_TARGET_ROW,
        )?,
    };
    let glass = match cli.glass {
        Some(glass) => glass as usize,
        None => prompt_in_range("Glass (min 1): ", &mut input, &mut output, 1, row)?,
    };

    let Some(position) = Position::from_one_based(row, glass) else {
        return Err(format!("Invalid row or column: glass must be between 1 and {}", row).into());
    };

    let mut pyramid = Pyramid::build(row)?;
    let target = pyramid.id_of(position.row(), position.column())?;
    let outcome = FillSearch::new(&config).run(&mut pyramid, target);

    writeln!(
        output,
        "It took {:.3} seconds.",
        outcome.fill_time(config.seconds_per_unit)
    )?;
    Ok(())
}

/// Ask until the answer is an integer in `min..=max`.
fn prompt_in_range<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
    min: usize,
    max: usize,
) -> io::Result<usize> {
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a value was given",
            ));
        }

        match line.trim().parse::<usize>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            _ => writeln!(output, "Please enter a value between {} and {}.", min, max)?,
        }
    }
}

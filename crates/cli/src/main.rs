//! # linfit
//!
//! Fits a least-squares line to a small dataset and predicts new values.
//!
//! With no arguments, fits the points `x = 1..5`, `y = 2x` and predicts
//! `x = 6` and `x = 7`:
//!
//! ```sh
//! cargo run --bin linfit
//! ```
//!
//! Set `RUST_LOG=debug` to see fitting details on stderr.

mod report;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use linfit_regression::{Config, Regressor};

use report::Report;

const DEMO_XS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const DEMO_YS: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

#[derive(Debug, Parser)]
#[command(name = "linfit")]
#[command(about = "Fit a least-squares line and predict with it", long_about = None)]
struct Cli {
    /// Training x values, comma-separated (defaults to 1,2,3,4,5)
    #[arg(long = "x", value_delimiter = ',', allow_hyphen_values = true, requires = "ys")]
    xs: Option<Vec<f64>>,

    /// Training y values, comma-separated (defaults to 2,4,6,8,10)
    #[arg(long = "y", value_delimiter = ',', allow_hyphen_values = true, requires = "xs")]
    ys: Option<Vec<f64>>,

    /// Inputs to predict, comma-separated
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [6.0, 7.0]
    )]
    predict: Vec<f64>,

    /// Force the line through the origin
    #[arg(long)]
    no_intercept: bool,

    /// Print a JSON object instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}

/// Fits the requested dataset and writes the report to `out`.
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let (xs, ys) = match (&cli.xs, &cli.ys) {
        (Some(xs), Some(ys)) => (xs.as_slice(), ys.as_slice()),
        _ => {
            info!("no training data given, using the demo dataset");
            (DEMO_XS.as_slice(), DEMO_YS.as_slice())
        }
    };

    let config = Config::default().with_intercept(!cli.no_intercept);
    let mut model = Regressor::new(config);
    let line = *model
        .fit_columns(xs, ys)
        .context("failed to fit a line to the training data")?;

    let predictions = model.predict(&cli.predict)?;
    let report = Report::new(line, model.summary()?, cli.predict.clone(), predictions);

    if cli.json {
        report.write_json(out)?;
    } else {
        report.write_text(out)?;
    }

    Ok(())
}

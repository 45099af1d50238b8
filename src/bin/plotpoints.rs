//! Plot the points of a k-means test case file.
//!
//! Usage: `plotpoints <input_file> [--output <image>]`

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use kmeans_testkit::plot::plot_points;
use kmeans_testkit::read_points;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Plot points from a K-means test case file.", long_about = None)]
struct Args {
    /// Path to the test case file containing the points
    input_file: PathBuf,

    /// Image to write (.png or .svg). Defaults to the input path with a .png extension.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().filter_or("RUST_LOG", "info"));

    let args = Args::parse();

    let points = read_points(&args.input_file)
        .with_context(|| format!("failed to load {}", args.input_file.display()))?;
    info!("Loaded {} points from {}", points.nrows(), args.input_file.display());

    let output = args
        .output
        .unwrap_or_else(|| args.input_file.with_extension("png"));
    plot_points(&output, &points.view())?;

    Ok(())
}

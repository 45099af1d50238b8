//! Plot the clusters found in a k-means program's text report.
//!
//! Writes `kmeans_clusters_<N>_clusters.png`, overwriting any previous plot
//! with the same cluster count.
//!
//! Usage: `visualize <cluster_output_file> [--output-dir <dir>]`

use clap::Parser;
use env_logger::Env;
use kmeans_testkit::plot::{plot_report, report_plot_filename};
use kmeans_testkit::read_report;
use log::info;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(version, about = "Plot clusters from a k-means program's output.", long_about = None)]
struct Args {
    /// Text report printed by the k-means program
    cluster_output_file: PathBuf,

    /// Directory the plot is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().filter_or("RUST_LOG", "info"));

    let args = Args::parse();

    let clusters = match read_report(&args.cluster_output_file) {
        Ok(clusters) => clusters,
        Err(e) => match e.read_failure_message() {
            Some(message) => {
                eprintln!("{}", message);
                process::exit(1);
            }
            None => return Err(e.into()),
        },
    };
    info!(
        "Parsed {} clusters from {}",
        clusters.len(),
        args.cluster_output_file.display()
    );

    let output = args.output_dir.join(report_plot_filename(clusters.len()));
    plot_report(&output, &clusters)?;

    Ok(())
}

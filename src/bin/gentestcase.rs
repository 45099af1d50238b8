//! Generate a synthetic k-means test case and write it as a points file.
//!
//! Usage: `gentestcase --nclusters 4 --npoints 1000 --disttype gaussian --seed 42 --outputfile points.txt`

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use kmeans_testkit::plot::plot_dataset;
use kmeans_testkit::{
    write_points, AxisRange, ClusterGenerator, DistributionType, GeneratorConfig,
};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Generate synthetic test data for k-means clustering.", long_about = None)]
struct Args {
    /// Number of clusters
    #[arg(long)]
    nclusters: usize,

    /// Total number of points (rounded down to a multiple of the cluster count)
    #[arg(long)]
    npoints: usize,

    /// Distribution of points around each center: gaussian, uniform or poisson
    #[arg(long, default_value_t = DistributionType::Gaussian)]
    disttype: DistributionType,

    /// Spread of points within each cluster
    #[arg(long, default_value_t = 1.0)]
    spread: f64,

    /// Distance between cluster centers
    #[arg(long, default_value_t = 10.0)]
    clusterdistance: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Range for x values as min,max (e.g. -5,5)
    #[arg(long, default_value = "-10,10", allow_hyphen_values = true)]
    xrange: AxisRange,

    /// Range for y values as min,max (e.g. -5,5)
    #[arg(long, default_value = "-10,10", allow_hyphen_values = true)]
    yrange: AxisRange,

    /// File to save the generated points to
    #[arg(long)]
    outputfile: PathBuf,

    /// Also render the labeled clusters to this image (.png or .svg)
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().filter_or("RUST_LOG", "info"));

    let args = Args::parse();

    let config = GeneratorConfig::new(args.nclusters, args.npoints)
        .with_distribution(args.disttype)
        .with_spread(args.spread)
        .with_cluster_distance(args.clusterdistance)
        .with_seed(args.seed)
        .with_x_range(args.xrange)
        .with_y_range(args.yrange);

    let generator = ClusterGenerator::new(config);
    let config = generator.config();
    if config.n_clusters > 0 && config.n_points % config.n_clusters != 0 {
        info!(
            "{} points do not divide into {} clusters; generating {}",
            config.n_points,
            config.n_clusters,
            config.points_per_cluster() * config.n_clusters
        );
    }

    let dataset = generator.generate()?;
    write_points(&args.outputfile, &dataset.points().view())?;

    if let Some(plot_path) = &args.plot {
        let title = format!(
            "Clusters with {} Distribution",
            capitalize(config.distribution.name())
        );
        plot_dataset(plot_path, &dataset, &title)
            .with_context(|| format!("failed to render {}", plot_path.display()))?;
    }

    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! # kmeans-testkit
//!
//! Tooling around an external k-means clustering program: synthetic test-case
//! generation, the plain-text point file it consumes, and a parser for the
//! cluster report it prints.
//!
//! ## Features
//!
//! - **Cluster generator**: gaussian, uniform or poisson clusters around
//!   zig-zagging centers, rounded and clipped into integer bounds
//! - **Explicit RNG**: seeded `ChaCha8Rng` by default, or any caller-owned `rand::Rng`
//! - **Point files**: count header followed by one `x y` line per point
//! - **Report parser**: two-state scanner over `**Cluster ... Center : (x, y)` blocks
//! - **Plots**: PNG/SVG scatter plots via plotters
//!
//! ## Example
//!
//! ```rust
//! use kmeans_testkit::{ClusterGenerator, DistributionType, GeneratorConfig};
//!
//! let config = GeneratorConfig::new(4, 400)
//!     .with_distribution(DistributionType::Gaussian)
//!     .with_spread(1.5)
//!     .with_seed(Some(42));
//!
//! let dataset = ClusterGenerator::new(config).generate().unwrap();
//! assert_eq!(dataset.len(), 400);
//! assert!(dataset.points().iter().all(|&v| (-10..=10).contains(&v)));
//! ```
//!
//! ## Parsing a cluster report
//!
//! ```rust
//! use kmeans_testkit::parse_report;
//!
//! let report = "**Cluster 0 Center : (1.0, 2.0)\n(3,4) (5,6)\n";
//! let clusters = parse_report(report).unwrap();
//! assert_eq!(clusters[0].center, (1.0, 2.0));
//! assert_eq!(clusters[0].points, vec![(3, 4), (5, 6)]);
//! ```

mod clamp;
mod config;
mod dataset;
mod error;
pub mod plot;
mod points_file;
mod report;
mod sampler;

pub use clamp::{clamp_coordinate, clamp_points};
pub use config::{AxisRange, DistributionType, GeneratorConfig};
pub use dataset::{ClusterGenerator, Dataset};
pub use error::TestkitError;
pub use points_file::{read_points, read_points_from, write_points, write_points_to};
pub use report::{parse_report, read_report, ReportCluster};
pub use sampler::{cluster_centers, sample_cluster, sample_clusters, sample_offsets};

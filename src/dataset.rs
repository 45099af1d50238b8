use crate::clamp::clamp_points;
use crate::config::GeneratorConfig;
use crate::error::TestkitError;
use crate::sampler::{cluster_centers, sample_clusters};
use log::info;
use ndarray::{concatenate, Array1, Array2, ArrayView2, Axis};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// A labeled point set.
///
/// `points` has shape `(n, 2)` and `labels[i]` is the cluster index that
/// generated row `i`. Rows are grouped by cluster in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Array2<i64>,
    labels: Array1<usize>,
}

impl Dataset {
    /// Concatenate clamped per-cluster groups in index order.
    ///
    /// Group `i` is labeled `i`. Groups may be empty.
    pub fn assemble(groups: &[Array2<i64>]) -> Result<Self, TestkitError> {
        if let Some(bad) = groups.iter().find(|g| g.ncols() != 2) {
            return Err(TestkitError::InvalidArgument(format!(
                "points must have 2 columns, got {}",
                bad.ncols()
            )));
        }

        let points = if groups.is_empty() {
            Array2::zeros((0, 2))
        } else {
            let views: Vec<ArrayView2<i64>> = groups.iter().map(|g| g.view()).collect();
            concatenate(Axis(0), &views).map_err(|e| {
                TestkitError::InvalidArgument(format!("cannot assemble groups: {}", e))
            })?
        };

        let labels = groups
            .iter()
            .enumerate()
            .flat_map(|(i, g)| std::iter::repeat(i).take(g.nrows()))
            .collect::<Array1<usize>>();

        Ok(Self { points, labels })
    }

    /// Points as an `(n, 2)` integer array
    pub fn points(&self) -> &Array2<i64> {
        &self.points
    }

    /// Cluster label of every point
    pub fn labels(&self) -> &Array1<usize> {
        &self.labels
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    /// Number of distinct clusters represented (highest label + 1)
    pub fn n_clusters(&self) -> usize {
        self.labels.iter().max().map_or(0, |&max| max + 1)
    }

    /// Iterate `(x, y, label)` triples in dataset order
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64, usize)> + '_ {
        self.points
            .outer_iter()
            .zip(self.labels.iter())
            .map(|(row, &label)| (row[0], row[1], label))
    }
}

/// Synthetic test-case generator for k-means programs.
///
/// Runs the full pipeline: centers, sampling, clamping and assembly.
///
/// # Example
///
/// ```
/// use kmeans_testkit::{ClusterGenerator, DistributionType, GeneratorConfig};
///
/// let config = GeneratorConfig::new(3, 10)
///     .with_distribution(DistributionType::Uniform)
///     .with_seed(Some(42));
///
/// let dataset = ClusterGenerator::new(config).generate().unwrap();
///
/// // 10 points over 3 clusters: the remainder is dropped
/// assert_eq!(dataset.len(), 9);
/// ```
pub struct ClusterGenerator {
    config: GeneratorConfig,
}

impl ClusterGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a dataset, seeding ChaCha8 from `config.seed` or from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the configuration does not validate.
    pub fn generate(&self) -> Result<Dataset, TestkitError> {
        let mut rng = match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        self.generate_with_rng(&mut rng)
    }

    /// Generate a dataset drawing from a caller-owned RNG.
    ///
    /// `config.seed` is ignored here; reproducibility is up to the caller's RNG.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Dataset, TestkitError> {
        let config = &self.config;
        config.validate()?;

        let start = Instant::now();
        let n_per_cluster = config.points_per_cluster();
        let centers = cluster_centers(config.n_clusters, config.cluster_distance);

        let raw_groups = sample_clusters(
            &centers,
            config.distribution,
            config.spread,
            n_per_cluster,
            rng,
        )?;

        let groups: Vec<Array2<i64>> = raw_groups
            .iter()
            .map(|raw| clamp_points(&raw.view(), config.x_range, config.y_range))
            .collect();

        let dataset = Dataset::assemble(&groups)?;

        info!(
            "Generated {} points ({} clusters x {}, {} distribution, spread {}) in {:.2?}",
            dataset.len(),
            config.n_clusters,
            n_per_cluster,
            config.distribution,
            config.spread,
            start.elapsed()
        );

        Ok(dataset)
    }
}

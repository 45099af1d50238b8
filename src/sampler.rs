use crate::config::{check_spread, DistributionType};
use crate::error::TestkitError;
use log::debug;
use ndarray::{Array1, Array2};
use ndarray_rand::rand_distr::{Normal, Poisson, Uniform};
use ndarray_rand::RandomExt;
use rand::Rng;

/// Compute the cluster centers, one row per cluster index.
///
/// Center `i` sits at `(i * cluster_distance, (i % 2) * cluster_distance)`,
/// so consecutive clusters zig-zag along the x axis.
pub fn cluster_centers(n_clusters: usize, cluster_distance: f64) -> Array2<f64> {
    let mut centers = Array2::zeros((n_clusters, 2));
    for (i, mut row) in centers.outer_iter_mut().enumerate() {
        row[0] = i as f64 * cluster_distance;
        row[1] = (i % 2) as f64 * cluster_distance;
    }
    centers
}

/// Draw `n_samples` zero-centered 2D offsets from the given distribution.
///
/// For Poisson the offsets are the raw draws (mean = `spread`), not shifted back to zero.
/// A negative, non-finite or (for uniform) overflowing spread is `InvalidArgument`.
pub fn sample_offsets<R: Rng + ?Sized>(
    distribution: DistributionType,
    spread: f64,
    n_samples: usize,
    rng: &mut R,
) -> Result<Array2<f64>, TestkitError> {
    check_spread(distribution, spread)?;
    let shape = (n_samples, 2);

    let offsets = match distribution {
        DistributionType::Gaussian => {
            let normal = Normal::new(0.0, spread).map_err(|e| {
                TestkitError::InvalidArgument(format!("gaussian spread {}: {}", spread, e))
            })?;
            Array2::random_using(shape, normal, rng)
        }
        DistributionType::Uniform => {
            Array2::random_using(shape, Uniform::new_inclusive(-spread, spread), rng)
        }
        // rand_distr rejects a zero rate; Poisson(0) is always 0
        DistributionType::Poisson if spread == 0.0 => Array2::zeros(shape),
        DistributionType::Poisson => {
            let poisson = Poisson::new(spread).map_err(|e| {
                TestkitError::InvalidArgument(format!("poisson rate {}: {}", spread, e))
            })?;
            Array2::random_using(shape, poisson, rng)
        }
    };

    Ok(offsets)
}

/// Sample raw (unclamped) points around a single center
pub fn sample_cluster<R: Rng + ?Sized>(
    center: &Array1<f64>,
    distribution: DistributionType,
    spread: f64,
    n_samples: usize,
    rng: &mut R,
) -> Result<Array2<f64>, TestkitError> {
    let offsets = sample_offsets(distribution, spread, n_samples, rng)?;
    Ok(offsets + center)
}

/// Sample every cluster in index order.
///
/// Returns one `(n_per_cluster, 2)` array per center. The RNG is consumed
/// cluster by cluster, so the same seed always gives the same groups.
pub fn sample_clusters<R: Rng + ?Sized>(
    centers: &Array2<f64>,
    distribution: DistributionType,
    spread: f64,
    n_per_cluster: usize,
    rng: &mut R,
) -> Result<Vec<Array2<f64>>, TestkitError> {
    let mut groups = Vec::with_capacity(centers.nrows());

    for (i, center) in centers.outer_iter().enumerate() {
        let center = center.to_owned();
        let group = sample_cluster(&center, distribution, spread, n_per_cluster, rng)?;
        debug!(
            "Cluster {}: center ({:.2}, {:.2}), {} {} samples",
            i,
            center[0],
            center[1],
            group.nrows(),
            distribution
        );
        groups.push(group);
    }

    Ok(groups)
}

use crate::error::TestkitError;
use std::fmt;
use std::str::FromStr;

/// Probability distribution used to scatter points around each cluster center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistributionType {
    /// Normal draw per axis, standard deviation = spread
    #[default]
    Gaussian,
    /// Uniform draw per axis over `[center - spread, center + spread]`
    Uniform,
    /// Poisson draw per axis with rate = spread, added to the center.
    /// Points end up centered around `center + spread`, not `center`.
    Poisson,
}

impl DistributionType {
    pub const ALL: [DistributionType; 3] = [
        DistributionType::Gaussian,
        DistributionType::Uniform,
        DistributionType::Poisson,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DistributionType::Gaussian => "gaussian",
            DistributionType::Uniform => "uniform",
            DistributionType::Poisson => "poisson",
        }
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionType {
    type Err = TestkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gaussian" => Ok(DistributionType::Gaussian),
            "uniform" => Ok(DistributionType::Uniform),
            "poisson" => Ok(DistributionType::Poisson),
            other => Err(TestkitError::InvalidArgument(format!(
                "Unsupported distribution type: {} (expected gaussian, uniform or poisson)",
                other
            ))),
        }
    }
}

/// Inclusive integer bounds for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    pub min: i64,
    pub max: i64,
}

impl AxisRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self { min: -10, max: 10 }
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

impl FromStr for AxisRange {
    type Err = TestkitError;

    /// Parse `"min,max"`. Bounds may be written as floats (`-10.0`) but must be integral.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TestkitError::InvalidArgument(format!("Invalid range '{}': expected min,max", s));

        let (min, max) = s.split_once(',').ok_or_else(invalid)?;
        let min = parse_bound(min).ok_or_else(invalid)?;
        let max = parse_bound(max).ok_or_else(invalid)?;

        Ok(Self { min, max })
    }
}

fn parse_bound(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let v = s.parse::<f64>().ok()?;
    (v.is_finite() && v.fract() == 0.0).then_some(v as i64)
}

/// Reject a spread the distribution cannot be built from.
///
/// Uniform spans `2 * spread`, which must stay finite.
pub(crate) fn check_spread(distribution: DistributionType, spread: f64) -> Result<(), TestkitError> {
    if !spread.is_finite() || spread < 0.0 {
        return Err(TestkitError::InvalidArgument(format!(
            "spread must be a finite non-negative number, got {}",
            spread
        )));
    }
    if distribution == DistributionType::Uniform && !(spread * 2.0).is_finite() {
        return Err(TestkitError::InvalidArgument(format!(
            "uniform spread {} is too large: the range width overflows",
            spread
        )));
    }
    Ok(())
}

/// Configuration for synthetic test-case generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of clusters
    pub n_clusters: usize,

    /// Total number of points requested. Each cluster receives
    /// `n_points / n_clusters` points; the remainder is dropped.
    pub n_points: usize,

    /// Distribution used around each center
    pub distribution: DistributionType,

    /// Dispersion parameter: standard deviation, half-width or Poisson rate
    pub spread: f64,

    /// Distance between consecutive cluster centers
    pub cluster_distance: f64,

    /// Random seed. `None` draws from OS entropy and output is not reproducible.
    pub seed: Option<u64>,

    /// Inclusive bounds for x coordinates
    pub x_range: AxisRange,

    /// Inclusive bounds for y coordinates
    pub y_range: AxisRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n_clusters: 3,
            n_points: 300,
            distribution: DistributionType::Gaussian,
            spread: 1.0,
            cluster_distance: 10.0,
            seed: None,
            x_range: AxisRange::default(),
            y_range: AxisRange::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with the given cluster and point counts
    pub fn new(n_clusters: usize, n_points: usize) -> Self {
        Self {
            n_clusters,
            n_points,
            ..Default::default()
        }
    }

    /// Set the distribution type
    pub fn with_distribution(mut self, distribution: DistributionType) -> Self {
        self.distribution = distribution;
        self
    }

    /// Set the spread
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    /// Set the distance between cluster centers
    pub fn with_cluster_distance(mut self, cluster_distance: f64) -> Self {
        self.cluster_distance = cluster_distance;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the x bounds
    pub fn with_x_range(mut self, x_range: AxisRange) -> Self {
        self.x_range = x_range;
        self
    }

    /// Set the y bounds
    pub fn with_y_range(mut self, y_range: AxisRange) -> Self {
        self.y_range = y_range;
        self
    }

    /// Number of points each cluster receives
    pub fn points_per_cluster(&self) -> usize {
        if self.n_clusters == 0 {
            0
        } else {
            self.n_points / self.n_clusters
        }
    }

    /// Check every parameter before any sampling happens
    pub fn validate(&self) -> Result<(), TestkitError> {
        if self.n_clusters == 0 {
            return Err(TestkitError::InvalidArgument(
                "number of clusters must be greater than 0".to_string(),
            ));
        }
        check_spread(self.distribution, self.spread)?;
        if !self.cluster_distance.is_finite() {
            return Err(TestkitError::InvalidArgument(format!(
                "cluster distance must be finite, got {}",
                self.cluster_distance
            )));
        }
        for (axis, range) in [("x", self.x_range), ("y", self.y_range)] {
            if range.min > range.max {
                return Err(TestkitError::InvalidArgument(format!(
                    "{} range min ({}) is greater than max ({})",
                    axis, range.min, range.max
                )));
            }
        }
        Ok(())
    }
}

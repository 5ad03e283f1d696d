//! GRASP engine configuration.

use std::time::Duration;

/// Configuration for the GRASP engine.
///
/// Construction- and search-specific parameters (greediness alpha, sample
/// size, acceptance epsilon) live on the strategy values themselves; this
/// config owns only what the outer loop needs.
///
/// # Examples
///
/// ```
/// use grasp_medoids::grasp::GraspConfig;
///
/// let config = GraspConfig::new(5)
///     .with_max_iterations(200)
///     .with_seed(42);
/// assert_eq!(config.target_size, 5);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Number of elements to select (k).
    pub target_size: usize,

    /// Number of construct-then-improve restarts.
    pub max_iterations: usize,

    /// Optional wall-clock budget, checked at the top of every iteration.
    ///
    /// One construction plus one local-search convergence always runs to
    /// completion once started, so the limit can be overshot by at most
    /// one iteration's worth of work.
    pub time_limit: Option<Duration>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl GraspConfig {
    /// Creates a configuration for selecting `target_size` elements.
    pub fn new(target_size: usize) -> Self {
        Self {
            target_size,
            max_iterations: 100,
            time_limit: None,
            seed: None,
        }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.target_size == 0 {
            return Err("target_size must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        Ok(())
    }
}

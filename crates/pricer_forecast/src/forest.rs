//! Random forest regressor.
//!
//! Bagged ensemble of [`RegressionTree`]s. Each tree is fitted on a bootstrap
//! resample of the training rows drawn from its own `StdRng`, seeded with
//! `seed + tree_index`, so the fitted forest depends only on the seed and not
//! on how rayon schedules the trees.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::ForecastError;
use crate::regressor::{check_training_set, feature_width, Regressor};
use crate::tree::{RegressionTree, TreeParams};

/// Default number of trees.
pub const DEFAULT_N_ESTIMATORS: usize = 100;

/// Default seed.
pub const DEFAULT_SEED: u64 = 42;

/// Maximum number of trees allowed.
pub const MAX_ESTIMATORS: usize = 10_000;

/// Random forest configuration.
///
/// Use [`RandomForestConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_forecast::RandomForestConfig;
///
/// let config = RandomForestConfig::builder()
///     .n_estimators(50)
///     .max_depth(8)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_estimators(), 50);
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomForestConfig {
    n_estimators: usize,
    tree: TreeParams,
    bootstrap: bool,
    seed: u64,
}

impl Default for RandomForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: DEFAULT_N_ESTIMATORS,
            tree: TreeParams::default(),
            bootstrap: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl RandomForestConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> RandomForestConfigBuilder {
        RandomForestConfigBuilder::default()
    }

    /// Number of trees.
    #[inline]
    pub fn n_estimators(&self) -> usize {
        self.n_estimators
    }

    /// Growth limits applied to every tree.
    #[inline]
    pub fn tree_params(&self) -> &TreeParams {
        &self.tree
    }

    /// Whether each tree sees a bootstrap resample.
    #[inline]
    pub fn bootstrap(&self) -> bool {
        self.bootstrap
    }

    /// Base seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::InvalidParameter` if:
    /// - `n_estimators` is 0 or greater than 10,000
    /// - `max_depth` is 0
    /// - `min_samples_split` is below 2 or `min_samples_leaf` is 0
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.n_estimators == 0 || self.n_estimators > MAX_ESTIMATORS {
            return Err(ForecastError::InvalidParameter {
                name: "n_estimators",
                value: format!("must be in [1, {}], got {}", MAX_ESTIMATORS, self.n_estimators),
            });
        }
        if self.tree.max_depth == Some(0) {
            return Err(ForecastError::InvalidParameter {
                name: "max_depth",
                value: "must be positive".to_string(),
            });
        }
        if self.tree.min_samples_split < 2 {
            return Err(ForecastError::InvalidParameter {
                name: "min_samples_split",
                value: format!("must be at least 2, got {}", self.tree.min_samples_split),
            });
        }
        if self.tree.min_samples_leaf == 0 {
            return Err(ForecastError::InvalidParameter {
                name: "min_samples_leaf",
                value: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`RandomForestConfig`].
///
/// Unset fields keep their defaults: 100 trees, unlimited depth,
/// `min_samples_split = 2`, `min_samples_leaf = 1`, bootstrap on, seed 42.
#[derive(Debug, Clone, Default)]
pub struct RandomForestConfigBuilder {
    config: RandomForestConfig,
}

impl RandomForestConfigBuilder {
    /// Sets the number of trees.
    #[inline]
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.config.n_estimators = n_estimators;
        self
    }

    /// Limits tree depth.
    #[inline]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.tree.max_depth = Some(max_depth);
        self
    }

    /// Sets the minimum samples required to split a node.
    #[inline]
    pub fn min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.config.tree.min_samples_split = min_samples_split;
        self
    }

    /// Sets the minimum samples per leaf.
    #[inline]
    pub fn min_samples_leaf(mut self, min_samples_leaf: usize) -> Self {
        self.config.tree.min_samples_leaf = min_samples_leaf;
        self
    }

    /// Enables or disables bootstrap resampling.
    #[inline]
    pub fn bootstrap(mut self, bootstrap: bool) -> Self {
        self.config.bootstrap = bootstrap;
        self
    }

    /// Sets the base seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<RandomForestConfig, ForecastError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Random forest regressor.
///
/// # Examples
/// ```
/// use pricer_forecast::{RandomForestConfig, RandomForestRegressor, Regressor};
///
/// let x: Vec<Vec<f64>> = (0..40).map(|i| vec![i as f64]).collect();
/// let y: Vec<f64> = (0..40).map(|i| if i < 20 { 0.1 } else { 0.3 }).collect();
///
/// let config = RandomForestConfig::builder().n_estimators(20).build().unwrap();
/// let mut forest = RandomForestRegressor::new(config);
/// forest.fit(&x, &y).unwrap();
///
/// let low = forest.predict_one(&[5.0]).unwrap();
/// let high = forest.predict_one(&[35.0]).unwrap();
/// assert!((low - 0.1).abs() < 1e-12);
/// assert!((high - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomForestRegressor {
    config: RandomForestConfig,
    trees: Vec<RegressionTree>,
    n_features: usize,
}

impl RandomForestRegressor {
    /// Creates an unfitted forest.
    pub fn new(config: RandomForestConfig) -> Self {
        Self {
            config,
            trees: Vec::new(),
            n_features: 0,
        }
    }

    /// Configuration.
    #[inline]
    pub fn config(&self) -> &RandomForestConfig {
        &self.config
    }

    /// Fitted trees.
    #[inline]
    pub fn trees(&self) -> &[RegressionTree] {
        &self.trees
    }

    /// True once `fit` has succeeded.
    #[inline]
    pub fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }

    fn draw_sample(&self, tree_index: usize, n: usize) -> Vec<usize> {
        if !self.config.bootstrap {
            return (0..n).collect();
        }
        let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(tree_index as u64));
        (0..n).map(|_| rng.gen_range(0..n)).collect()
    }
}

impl Regressor for RandomForestRegressor {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<(), ForecastError> {
        self.config.validate()?;
        let width = check_training_set(features, targets)?;

        let params = self.config.tree;
        let trees: Vec<RegressionTree> = (0..self.config.n_estimators)
            .into_par_iter()
            .map(|tree_index| {
                let sample = self.draw_sample(tree_index, features.len());
                let mut tree = RegressionTree::new(params);
                tree.fit_indices(features, targets, sample);
                tree
            })
            .collect();

        tracing::debug!(
            n_estimators = trees.len(),
            n_samples = features.len(),
            seed = self.config.seed,
            "Fitted random forest"
        );

        self.trees = trees;
        self.n_features = width;
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>, ForecastError> {
        if !self.is_fitted() {
            return Err(ForecastError::NotFitted);
        }
        if features.is_empty() {
            return Ok(Vec::new());
        }
        let width = feature_width(features)?;
        if width != self.n_features {
            return Err(ForecastError::DimensionMismatch {
                expected: self.n_features,
                actual: width,
            });
        }

        let n_trees = self.trees.len() as f64;
        let mut sums = vec![0.0; features.len()];
        for tree in &self.trees {
            for (sum, value) in sums.iter_mut().zip(tree.predict(features)?) {
                *sum += value;
            }
        }
        Ok(sums.into_iter().map(|s| s / n_trees).collect())
    }
}

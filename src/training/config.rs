//! Training configuration with builder pattern.
//!
//! [`ForestConfig`] composes every tunable of the analysis pipeline and
//! uses the `bon` crate for builder generation with validation at
//! build time.
//!
//! # Example
//!
//! ```
//! use adlift::training::ForestConfig;
//!
//! // All defaults
//! let config = ForestConfig::builder().build().unwrap();
//!
//! // Smaller, reproducible forest
//! let config = ForestConfig::builder()
//!     .n_trees(25)
//!     .max_depth(6)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;

use crate::utils::Parallelism;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Number of trees must be at least 1.
    InvalidNTrees,
    /// Max depth must be at least 1.
    InvalidMaxDepth,
    /// Minimum leaf size must be at least 1.
    InvalidMinSamplesLeaf,
    /// SMOTE neighborhood must be at least 1.
    InvalidSmoteNeighbors,
    /// Test fraction must lie in (0, 1).
    InvalidTestFraction(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNTrees => write!(f, "n_trees must be at least 1"),
            Self::InvalidMaxDepth => write!(f, "max_depth must be at least 1"),
            Self::InvalidMinSamplesLeaf => write!(f, "min_samples_leaf must be at least 1"),
            Self::InvalidSmoteNeighbors => write!(f, "smote_neighbors must be at least 1"),
            Self::InvalidTestFraction(v) => {
                write!(f, "test_fraction must be in (0, 1), got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// ForestConfig
// =============================================================================

/// Configuration for one analysis run.
///
/// Tree count and depth trade training cost against overfitting; they
/// are tunables, not correctness requirements. The seed pins every
/// random decision (split shuffling, bootstrap rows, feature subsets,
/// SMOTE interpolation) so repeated runs are byte-identical.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct ForestConfig {
    // === Ensemble shape ===
    /// Number of trees in the bag. Default: 100.
    #[builder(default = 100)]
    pub n_trees: u32,

    /// Maximum tree depth. Default: 12.
    #[builder(default = 12)]
    pub max_depth: u32,

    /// Minimum samples per leaf. Default: 1.
    #[builder(default = 1)]
    pub min_samples_leaf: usize,

    // === Class balancing ===
    /// SMOTE neighborhood size. Shrinks automatically when the minority
    /// class is small. Default: 5.
    #[builder(default = 5)]
    pub smote_neighbors: usize,

    // === Evaluation split ===
    /// Fraction of rows held out for accuracy measurement. Default: 0.2.
    #[builder(default = 0.2)]
    pub test_fraction: f32,

    // === Reproducibility ===
    /// Random seed. Default: 42.
    #[builder(default = 42)]
    pub seed: u64,

    // === Resource control ===
    /// Whether trees may be grown on the rayon pool. Default: sequential,
    /// matching the engine's single-threaded request model.
    #[builder(default = Parallelism::Sequential)]
    pub parallelism: Parallelism,
}

/// Custom finishing function that validates the config.
impl<S: forest_config_builder::IsComplete> ForestConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid.
    pub fn build(self) -> Result<ForestConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl ForestConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trees == 0 {
            return Err(ConfigError::InvalidNTrees);
        }
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }
        if self.min_samples_leaf == 0 {
            return Err(ConfigError::InvalidMinSamplesLeaf);
        }
        if self.smote_neighbors == 0 {
            return Err(ConfigError::InvalidSmoteNeighbors);
        }
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(ConfigError::InvalidTestFraction(self.test_fraction));
        }
        Ok(())
    }
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ForestConfig::builder().build().unwrap();
        assert_eq!(config.n_trees, 100);
        assert_eq!(config.max_depth, 12);
        assert_eq!(config.seed, 42);
        assert!((config.test_fraction - 0.2).abs() < 1e-6);
        assert_eq!(config.parallelism, Parallelism::Sequential);
    }

    #[test]
    fn invalid_n_trees_zero() {
        let result = ForestConfig::builder().n_trees(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidNTrees);
    }

    #[test]
    fn invalid_max_depth_zero() {
        let result = ForestConfig::builder().max_depth(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidMaxDepth);
    }

    #[test]
    fn invalid_min_samples_leaf_zero() {
        let result = ForestConfig::builder().min_samples_leaf(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidMinSamplesLeaf);
    }

    #[test]
    fn invalid_smote_neighbors_zero() {
        let result = ForestConfig::builder().smote_neighbors(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidSmoteNeighbors);
    }

    #[test]
    fn invalid_test_fraction_bounds() {
        for fraction in [0.0, 1.0, -0.1, 1.5] {
            let result = ForestConfig::builder().test_fraction(fraction).build();
            assert!(matches!(result, Err(ConfigError::InvalidTestFraction(_))));
        }
    }

    #[test]
    fn boundary_values_are_valid() {
        assert!(ForestConfig::builder().n_trees(1).build().is_ok());
        assert!(ForestConfig::builder().max_depth(1).build().is_ok());
        assert!(ForestConfig::builder().test_fraction(0.5).build().is_ok());
    }

    #[test]
    fn config_default_trait() {
        let config = ForestConfig::default();
        assert_eq!(config.n_trees, 100);
    }
}

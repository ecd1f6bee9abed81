//! Forest training and held-out evaluation.

use ndarray::ArrayView2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::repr::{Forest, Tree};
use crate::training::config::ForestConfig;
use crate::training::grower::{GrowerParams, TreeGrower};

/// Accuracy was requested over an empty evaluation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("evaluation set is empty")]
pub struct EmptyEvaluationSetError;

/// Bags independently grown trees into a [`Forest`].
///
/// Each tree derives its RNG stream from the configured seed and its
/// own index, so sequential and parallel training produce identical
/// forests.
pub struct ForestTrainer<'a> {
    config: &'a ForestConfig,
}

impl<'a> ForestTrainer<'a> {
    pub fn new(config: &'a ForestConfig) -> Self {
        Self { config }
    }

    /// Train a forest on a feature-major training matrix.
    pub fn train<'b>(&self, features: ArrayView2<'b, f32>, labels: &'b [f32]) -> Forest {
        debug_assert_eq!(features.ncols(), labels.len());

        let params = GrowerParams {
            max_depth: self.config.max_depth,
            min_samples_leaf: self.config.min_samples_leaf,
        };
        let seed = self.config.seed;

        let grow_one = |tree_idx: u32| -> Tree {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(tree_seed(seed, tree_idx));
            TreeGrower::new(features, labels, params).grow(&mut rng)
        };

        let trees: Vec<Tree> = if self.config.parallelism.is_parallel() {
            (0..self.config.n_trees).into_par_iter().map(grow_one).collect()
        } else {
            (0..self.config.n_trees).map(grow_one).collect()
        };

        tracing::debug!(
            n_trees = trees.len(),
            n_samples = labels.len(),
            "trained forest"
        );

        let mut forest = Forest::new(features.nrows());
        for tree in trees {
            forest.push_tree(tree);
        }
        forest
    }
}

/// Per-tree seed stream, decorrelated by a splitmix-style multiply.
#[inline]
fn tree_seed(seed: u64, tree_idx: u32) -> u64 {
    seed ^ (tree_idx as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Fraction of held-out samples the forest labels correctly.
///
/// # Errors
///
/// [`EmptyEvaluationSetError`] when the evaluation set has no rows.
pub fn evaluate(
    forest: &Forest,
    features: ArrayView2<'_, f32>,
    labels: &[f32],
) -> Result<f32, EmptyEvaluationSetError> {
    if labels.is_empty() {
        return Err(EmptyEvaluationSetError);
    }
    debug_assert_eq!(features.ncols(), labels.len());

    let mut row = vec![0.0f32; features.nrows()];
    let mut correct = 0usize;
    for (sample, &label) in labels.iter().enumerate() {
        for (feature, slot) in row.iter_mut().enumerate() {
            *slot = features[[feature, sample]];
        }
        if forest.predict(&row) == (label >= 0.5) {
            correct += 1;
        }
    }
    Ok(correct as f32 / labels.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Parallelism;
    use ndarray::Array2;

    /// Separable two-feature problem: positive iff x0 > 0.5.
    fn separable(n: usize) -> (Array2<f32>, Vec<f32>) {
        let mut features = Array2::<f32>::zeros((2, n));
        let mut labels = Vec::with_capacity(n);
        for i in 0..n {
            let x = i as f32 / n as f32;
            features[[0, i]] = x;
            features[[1, i]] = (i % 7) as f32;
            labels.push(if x > 0.5 { 1.0 } else { 0.0 });
        }
        (features, labels)
    }

    fn small_config(parallelism: Parallelism) -> ForestConfig {
        ForestConfig::builder()
            .n_trees(20)
            .max_depth(6)
            .seed(9)
            .parallelism(parallelism)
            .build()
            .unwrap()
    }

    #[test]
    fn trains_configured_tree_count() {
        let (features, labels) = separable(64);
        let config = small_config(Parallelism::Sequential);
        let forest = ForestTrainer::new(&config).train(features.view(), &labels);
        assert_eq!(forest.n_trees(), 20);
        assert_eq!(forest.n_features(), 2);
    }

    #[test]
    fn training_set_accuracy_is_high_on_separable_data() {
        let (features, labels) = separable(64);
        let config = small_config(Parallelism::Sequential);
        let forest = ForestTrainer::new(&config).train(features.view(), &labels);
        let accuracy = evaluate(&forest, features.view(), &labels).unwrap();
        assert!(accuracy >= 0.9, "got {accuracy}");
    }

    #[test]
    fn accuracy_is_bounded() {
        let (features, labels) = separable(32);
        let config = small_config(Parallelism::Sequential);
        let forest = ForestTrainer::new(&config).train(features.view(), &labels);
        let accuracy = evaluate(&forest, features.view(), &labels).unwrap();
        assert!((0.0..=1.0).contains(&accuracy));
    }

    #[test]
    fn empty_evaluation_set_fails() {
        let (features, labels) = separable(32);
        let config = small_config(Parallelism::Sequential);
        let forest = ForestTrainer::new(&config).train(features.view(), &labels);
        let empty = Array2::<f32>::zeros((2, 0));
        assert_eq!(
            evaluate(&forest, empty.view(), &[]),
            Err(EmptyEvaluationSetError)
        );
    }

    #[test]
    fn parallel_and_sequential_forests_agree() {
        let (features, labels) = separable(48);
        let sequential = ForestTrainer::new(&small_config(Parallelism::Sequential))
            .train(features.view(), &labels);
        let parallel = ForestTrainer::new(&small_config(Parallelism::Parallel))
            .train(features.view(), &labels);

        for i in 0..labels.len() {
            let row: Vec<f32> = features.column(i).iter().copied().collect();
            assert_eq!(sequential.predict_proba(&row), parallel.predict_proba(&row));
        }
    }

    #[test]
    fn repeated_training_is_identical() {
        let (features, labels) = separable(48);
        let config = small_config(Parallelism::Sequential);
        let a = ForestTrainer::new(&config).train(features.view(), &labels);
        let b = ForestTrainer::new(&config).train(features.view(), &labels);
        assert_eq!(a.trees(), b.trees());
    }
}

//! Single-tree growth.
//!
//! Grows one CART tree from a bootstrap sample of the training matrix:
//! Gini impurity, `sqrt(n_features)` random feature candidates per
//! split, thresholds at midpoints between consecutive distinct sorted
//! values.

use ndarray::ArrayView2;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::repr::Tree;

/// Stopping rules for tree growth.
#[derive(Debug, Clone, Copy)]
pub struct GrowerParams {
    /// Maximum tree depth.
    pub max_depth: u32,
    /// Minimum samples per leaf.
    pub min_samples_leaf: usize,
}

/// A winning split candidate.
struct SplitCandidate {
    feature: usize,
    threshold: f32,
    gain: f32,
}

/// Grows one decision tree over a borrowed training matrix.
///
/// The matrix is feature-major (`[n_features, n_samples]`); the grower
/// never copies it, only index lists.
pub struct TreeGrower<'a> {
    features: ArrayView2<'a, f32>,
    labels: &'a [f32],
    params: GrowerParams,
}

impl<'a> TreeGrower<'a> {
    pub fn new(features: ArrayView2<'a, f32>, labels: &'a [f32], params: GrowerParams) -> Self {
        debug_assert_eq!(features.ncols(), labels.len());
        Self { features, labels, params }
    }

    /// Grow one tree from a bootstrap sample drawn with `rng`.
    pub fn grow(&self, rng: &mut Xoshiro256PlusPlus) -> Tree {
        let n = self.labels.len();
        let rows: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();

        let mut tree = Tree::default();
        let root = self.grow_node(&mut tree, &rows, 0, rng);
        tree.seal(root);
        tree
    }

    fn grow_node(
        &self,
        tree: &mut Tree,
        rows: &[usize],
        depth: u32,
        rng: &mut Xoshiro256PlusPlus,
    ) -> u32 {
        let probability = self.positive_fraction(rows);
        let pure = probability == 0.0 || probability == 1.0;
        if pure || depth >= self.params.max_depth || rows.len() < 2 * self.params.min_samples_leaf
        {
            return tree.push_leaf(probability);
        }

        match self.best_split(rows, rng) {
            None => tree.push_leaf(probability),
            Some(split) => {
                let (left_rows, right_rows) = self.partition(rows, split.feature, split.threshold);
                let left = self.grow_node(tree, &left_rows, depth + 1, rng);
                let right = self.grow_node(tree, &right_rows, depth + 1, rng);
                tree.push_branch(split.feature, split.threshold, left, right, split.gain)
            }
        }
    }

    fn positive_fraction(&self, rows: &[usize]) -> f32 {
        let positives: f32 = rows.iter().map(|&r| self.labels[r]).sum();
        positives / rows.len() as f32
    }

    fn partition(&self, rows: &[usize], feature: usize, threshold: f32) -> (Vec<usize>, Vec<usize>) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for &row in rows {
            if self.features[[feature, row]] < threshold {
                left.push(row);
            } else {
                right.push(row);
            }
        }
        (left, right)
    }

    /// Find the best Gini split over a random feature subset.
    ///
    /// Features are shuffled with `rng`, truncated to
    /// `round(sqrt(n_features))`, and scanned in ascending column order
    /// so ties deterministically favor the earlier column.
    fn best_split(&self, rows: &[usize], rng: &mut Xoshiro256PlusPlus) -> Option<SplitCandidate> {
        let n_features = self.features.nrows();
        let n_candidates = ((n_features as f32).sqrt().round() as usize).max(1);

        let mut candidates: Vec<usize> = (0..n_features).collect();
        candidates.shuffle(rng);
        candidates.truncate(n_candidates);
        candidates.sort_unstable();

        let parent_gini = gini(self.positive_fraction(rows));
        let min_leaf = self.params.min_samples_leaf;
        let n = rows.len() as f32;

        let mut best: Option<SplitCandidate> = None;
        let mut sorted: Vec<(f32, f32)> = Vec::with_capacity(rows.len());

        for &feature in &candidates {
            sorted.clear();
            sorted.extend(
                rows.iter()
                    .map(|&r| (self.features[[feature, r]], self.labels[r])),
            );
            sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

            let total_pos: f32 = sorted.iter().map(|&(_, y)| y).sum();
            let mut left_pos = 0.0f32;

            for i in 1..sorted.len() {
                left_pos += sorted[i - 1].1;

                // No threshold separates equal values.
                if sorted[i].0 <= sorted[i - 1].0 {
                    continue;
                }
                if i < min_leaf || sorted.len() - i < min_leaf {
                    continue;
                }

                let n_left = i as f32;
                let n_right = n - n_left;
                let gini_left = gini(left_pos / n_left);
                let gini_right = gini((total_pos - left_pos) / n_right);
                let decrease =
                    parent_gini - (n_left / n) * gini_left - (n_right / n) * gini_right;
                if decrease <= 1e-12 {
                    continue;
                }

                let gain = n * decrease;
                if best.as_ref().map_or(true, |b| gain > b.gain) {
                    let threshold = 0.5 * (sorted[i - 1].0 + sorted[i].0);
                    best = Some(SplitCandidate { feature, threshold, gain });
                }
            }
        }

        best
    }
}

/// Binary Gini impurity for a positive fraction `p`.
#[inline]
fn gini(p: f32) -> f32 {
    2.0 * p * (1.0 - p)
}

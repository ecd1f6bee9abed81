//! Bagged forest of decision trees.

use super::tree::Tree;

/// An ensemble of independently grown decision trees.
///
/// Prediction averages the per-tree leaf probabilities; the binary
/// label is the average thresholded at 0.5, which for binary leaves is
/// the majority vote.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    trees: Vec<Tree>,
    n_features: usize,
}

impl Forest {
    /// Create an empty forest over a fixed feature count.
    pub fn new(n_features: usize) -> Self {
        Self { trees: Vec::new(), n_features }
    }

    /// Append a grown tree.
    pub fn push_tree(&mut self, tree: Tree) {
        self.trees.push(tree);
    }

    /// Number of trees.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Number of input features.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// The underlying trees.
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// Averaged success probability for one feature row.
    ///
    /// An empty forest predicts 0.0.
    pub fn predict_proba(&self, row: &[f32]) -> f32 {
        debug_assert_eq!(row.len(), self.n_features);
        if self.trees.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.trees.iter().map(|tree| tree.predict_row(row)).sum();
        sum / self.trees.len() as f32
    }

    /// Binary vote: `true` when the averaged probability is >= 0.5.
    pub fn predict(&self, row: &[f32]) -> bool {
        self.predict_proba(row) >= 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_tree(probability: f32) -> Tree {
        let mut tree = Tree::default();
        let root = tree.push_leaf(probability);
        tree.seal(root);
        tree
    }

    #[test]
    fn averages_tree_probabilities() {
        let mut forest = Forest::new(2);
        forest.push_tree(leaf_tree(1.0));
        forest.push_tree(leaf_tree(0.0));
        forest.push_tree(leaf_tree(0.5));
        assert!((forest.predict_proba(&[0.0, 0.0]) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn majority_vote_thresholds_at_half() {
        let mut forest = Forest::new(1);
        forest.push_tree(leaf_tree(1.0));
        forest.push_tree(leaf_tree(1.0));
        forest.push_tree(leaf_tree(0.0));
        assert!(forest.predict(&[0.0]));

        let mut forest = Forest::new(1);
        forest.push_tree(leaf_tree(0.0));
        forest.push_tree(leaf_tree(0.0));
        forest.push_tree(leaf_tree(1.0));
        assert!(!forest.predict(&[0.0]));
    }

    #[test]
    fn empty_forest_predicts_failure() {
        let forest = Forest::new(1);
        assert_eq!(forest.predict_proba(&[0.0]), 0.0);
        assert!(!forest.predict(&[0.0]));
    }
}

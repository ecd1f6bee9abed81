//! Array-backed binary decision tree.

/// A single tree node.
///
/// Branch nodes carry the split gain recorded at growth time so
/// feature importance can be derived without revisiting the training
/// data.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Internal split: `row[feature] < threshold` goes left.
    Branch {
        /// Feature column index.
        feature: usize,
        /// Split threshold.
        threshold: f32,
        /// Node index of the left child.
        left: u32,
        /// Node index of the right child.
        right: u32,
        /// Sample-weighted impurity decrease of this split.
        gain: f32,
    },
    /// Terminal node holding the success probability of its samples.
    Leaf {
        /// Fraction of positive training samples that reached this leaf.
        probability: f32,
    },
}

/// A decision tree stored as a flat node array.
///
/// Children are pushed before their parent, so the root is the last
/// node pushed; [`Tree::seal`] pins it. Traversal is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
    root: u32,
}

impl Tree {
    /// Append a leaf, returning its node index.
    pub fn push_leaf(&mut self, probability: f32) -> u32 {
        self.nodes.push(Node::Leaf { probability });
        (self.nodes.len() - 1) as u32
    }

    /// Append a branch over two existing children, returning its index.
    pub fn push_branch(
        &mut self,
        feature: usize,
        threshold: f32,
        left: u32,
        right: u32,
        gain: f32,
    ) -> u32 {
        debug_assert!((left as usize) < self.nodes.len());
        debug_assert!((right as usize) < self.nodes.len());
        self.nodes.push(Node::Branch { feature, threshold, left, right, gain });
        (self.nodes.len() - 1) as u32
    }

    /// Mark the given node as the root.
    pub fn seal(&mut self, root: u32) {
        debug_assert!((root as usize) < self.nodes.len());
        self.root = root;
    }

    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Walk the tree for one feature row, returning the leaf probability.
    pub fn predict_row(&self, row: &[f32]) -> f32 {
        let mut idx = self.root;
        loop {
            match &self.nodes[idx as usize] {
                Node::Leaf { probability } => return *probability,
                Node::Branch { feature, threshold, left, right, .. } => {
                    idx = if row[*feature] < *threshold { *left } else { *right };
                }
            }
        }
    }

    /// Add each branch's split gain into the per-feature accumulator.
    pub fn accumulate_gains(&self, gains: &mut [f64]) {
        for node in &self.nodes {
            if let Node::Branch { feature, gain, .. } = node {
                gains[*feature] += *gain as f64;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// x0 < 0.5 -> 0.9, else x1 < 0.3 -> 0.1, else 0.6
    fn two_split_tree() -> Tree {
        let mut tree = Tree::default();
        let leaf_a = tree.push_leaf(0.9);
        let leaf_b = tree.push_leaf(0.1);
        let leaf_c = tree.push_leaf(0.6);
        let inner = tree.push_branch(1, 0.3, leaf_b, leaf_c, 2.0);
        let root = tree.push_branch(0, 0.5, leaf_a, inner, 5.0);
        tree.seal(root);
        tree
    }

    #[test]
    fn predicts_by_walking_splits() {
        let tree = two_split_tree();
        assert_eq!(tree.predict_row(&[0.4, 0.0]), 0.9);
        assert_eq!(tree.predict_row(&[0.6, 0.2]), 0.1);
        assert_eq!(tree.predict_row(&[0.6, 0.4]), 0.6);
    }

    #[test]
    fn threshold_test_is_strictly_less() {
        let tree = two_split_tree();
        // Exactly at the threshold goes right.
        assert_eq!(tree.predict_row(&[0.5, 0.4]), 0.6);
    }

    #[test]
    fn gains_accumulate_per_feature() {
        let tree = two_split_tree();
        let mut gains = vec![0.0; 2];
        tree.accumulate_gains(&mut gains);
        assert_eq!(gains, vec![5.0, 2.0]);
    }

    #[test]
    fn single_leaf_tree() {
        let mut tree = Tree::default();
        let root = tree.push_leaf(0.42);
        tree.seal(root);
        assert_eq!(tree.predict_row(&[1.0, 2.0]), 0.42);
        assert_eq!(tree.n_nodes(), 1);
    }
}

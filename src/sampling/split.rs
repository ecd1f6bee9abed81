//! Deterministic train/test splitting.

use ndarray::{Array2, ArrayView2};
use rand::prelude::*;

/// Deterministic shuffled train/test split indices.
///
/// Returns `(train_idx, test_idx)`. The test set takes
/// `round(n_samples * test_fraction)` rows of a seeded shuffle.
pub fn split_indices(n_samples: usize, test_fraction: f32, seed: u64) -> (Vec<usize>, Vec<usize>) {
    assert!((0.0..1.0).contains(&test_fraction));
    let mut idx: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    idx.shuffle(&mut rng);

    let test_len = ((n_samples as f32) * test_fraction).round() as usize;
    let test_len = test_len.min(n_samples);
    let (test, train) = idx.split_at(test_len);
    (train.to_vec(), test.to_vec())
}

/// Gather the selected sample columns of a feature-major matrix,
/// together with their labels.
pub fn select_columns(
    features: ArrayView2<f32>,
    labels: &[f32],
    indices: &[usize],
) -> (Array2<f32>, Vec<f32>) {
    let n_features = features.nrows();
    let mut selected = Array2::<f32>::zeros((n_features, indices.len()));
    for (dst, &src) in indices.iter().enumerate() {
        selected.column_mut(dst).assign(&features.column(src));
    }
    let selected_labels = indices.iter().map(|&i| labels[i]).collect();
    (selected, selected_labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn split_is_deterministic() {
        let a = split_indices(100, 0.2, 7);
        let b = split_indices(100, 0.2, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn split_sizes_match_fraction() {
        let (train, test) = split_indices(100, 0.2, 42);
        assert_eq!(test.len(), 20);
        assert_eq!(train.len(), 80);
    }

    #[test]
    fn split_partitions_all_rows() {
        let (mut train, test) = split_indices(25, 0.3, 1);
        train.extend(test);
        train.sort_unstable();
        assert_eq!(train, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn different_seeds_differ() {
        let a = split_indices(100, 0.2, 1);
        let b = split_indices(100, 0.2, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn select_columns_gathers_samples() {
        // 2 features, 3 samples.
        let features = array![[1.0, 2.0, 3.0], [10.0, 20.0, 30.0]];
        let labels = [0.0, 1.0, 1.0];
        let (picked, y) = select_columns(features.view(), &labels, &[2, 0]);
        assert_eq!(picked, array![[3.0, 1.0], [30.0, 10.0]]);
        assert_eq!(y, vec![1.0, 0.0]);
    }
}

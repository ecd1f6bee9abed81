//! Synthetic minority oversampling (SMOTE).
//!
//! Balances a binary-labeled training matrix by interpolating new
//! minority-class samples between existing minority neighbors until
//! both classes are equal in count. Applied to the training split only;
//! oversampling the evaluation split would leak synthetic points into
//! the reported accuracy.

use ndarray::{s, Array2, ArrayView2};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

/// The minority class is too small for neighborhood interpolation.
///
/// Surfaced to the caller and training aborted; skipping the balance
/// step silently would change model behavior without signaling it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("minority class has {count} sample(s); oversampling needs at least {required}")]
pub struct InsufficientMinorityError {
    /// Observed minority-class sample count.
    pub count: usize,
    /// Minimum count the technique requires.
    pub required: usize,
}

/// Minimum minority size: one sample plus one neighbor.
const MIN_MINORITY: usize = 2;

/// Balance a binary-labeled, feature-major training matrix.
///
/// New minority samples are drawn on the segment between a random
/// minority sample and one of its `k_neighbors` nearest minority
/// neighbors (Euclidean distance in encoded feature space), until both
/// classes have equal counts. The neighborhood shrinks to
/// `minority_count - 1` when the class is smaller than `k_neighbors + 1`.
///
/// Returns the balanced `[n_features, n_samples]` matrix and label
/// vector; original samples keep their order, synthetic columns are
/// appended. Deterministic for a fixed `seed`.
///
/// # Errors
///
/// [`InsufficientMinorityError`] when either class is absent or the
/// minority class has fewer than 2 samples.
pub fn oversample_minority(
    features: ArrayView2<f32>,
    labels: &[f32],
    k_neighbors: usize,
    seed: u64,
) -> Result<(Array2<f32>, Vec<f32>), InsufficientMinorityError> {
    debug_assert_eq!(features.ncols(), labels.len());

    let positive: Vec<usize> = (0..labels.len()).filter(|&i| labels[i] >= 0.5).collect();
    let negative: Vec<usize> = (0..labels.len()).filter(|&i| labels[i] < 0.5).collect();

    let (minority, majority, minority_label) = if positive.len() <= negative.len() {
        (positive, negative, 1.0)
    } else {
        (negative, positive, 0.0)
    };

    if minority.len() == majority.len() {
        // Already balanced. Still an error if a class is missing entirely,
        // which can only happen here when both are empty.
        if minority.is_empty() {
            return Err(InsufficientMinorityError { count: 0, required: MIN_MINORITY });
        }
        return Ok((features.to_owned(), labels.to_vec()));
    }

    if minority.len() < MIN_MINORITY {
        return Err(InsufficientMinorityError {
            count: minority.len(),
            required: MIN_MINORITY,
        });
    }

    let k = k_neighbors.max(1).min(minority.len() - 1);
    let neighbors = nearest_minority_neighbors(features, &minority, k);

    let needed = majority.len() - minority.len();
    let n_features = features.nrows();
    let n_original = labels.len();

    let mut balanced = Array2::<f32>::zeros((n_features, n_original + needed));
    balanced.slice_mut(s![.., ..n_original]).assign(&features);
    let mut balanced_labels = labels.to_vec();

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    for synth in 0..needed {
        let slot = rng.gen_range(0..minority.len());
        let base = minority[slot];
        let neighbor = neighbors[slot][rng.gen_range(0..k)];
        let t = rng.gen::<f32>();

        let column = n_original + synth;
        for feature in 0..n_features {
            let a = features[[feature, base]];
            let b = features[[feature, neighbor]];
            balanced[[feature, column]] = a + t * (b - a);
        }
        balanced_labels.push(minority_label);
    }

    Ok((balanced, balanced_labels))
}

/// For each minority sample, the column indices of its `k` nearest
/// minority neighbors (excluding itself), closest first.
fn nearest_minority_neighbors(
    features: ArrayView2<f32>,
    minority: &[usize],
    k: usize,
) -> Vec<Vec<usize>> {
    minority
        .iter()
        .map(|&a| {
            let mut candidates: Vec<(f32, usize)> = minority
                .iter()
                .filter(|&&b| b != a)
                .map(|&b| (squared_distance(features, a, b), b))
                .collect();
            candidates.sort_by(|x, y| {
                x.0.partial_cmp(&y.0)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(x.1.cmp(&y.1))
            });
            candidates.truncate(k);
            candidates.into_iter().map(|(_, b)| b).collect()
        })
        .collect()
}

fn squared_distance(features: ArrayView2<f32>, a: usize, b: usize) -> f32 {
    (0..features.nrows())
        .map(|f| {
            let d = features[[f, a]] - features[[f, b]];
            d * d
        })
        .sum()
}

//! Feature importance extraction.

use serde::Serialize;

use crate::repr::Forest;

/// One ranked feature with its normalized importance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportanceEntry {
    /// Feature column name.
    pub feature: String,
    /// Normalized importance in [0, 1].
    pub score: f32,
}

/// Ranked feature importances for a trained forest.
///
/// Entries are sorted by score descending; ties keep the original
/// feature column order (stable sort), so the ranking is deterministic.
/// Scores are non-negative and sum to 1 within floating tolerance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureImportance {
    entries: Vec<ImportanceEntry>,
}

impl FeatureImportance {
    /// All entries, most important first.
    pub fn entries(&self) -> &[ImportanceEntry] {
        &self.entries
    }

    /// The top `k` entries.
    pub fn top_k(&self, k: usize) -> &[ImportanceEntry] {
        &self.entries[..k.min(self.entries.len())]
    }

    /// The highest-ranked feature.
    pub fn most_important(&self) -> &ImportanceEntry {
        &self.entries[0]
    }

    /// The lowest-ranked feature.
    pub fn least_important(&self) -> &ImportanceEntry {
        &self.entries[self.entries.len() - 1]
    }

    /// Consume into the entry vector.
    pub fn into_entries(self) -> Vec<ImportanceEntry> {
        self.entries
    }
}

/// Compute normalized gain importance for every feature of a forest.
///
/// When the forest never split (degenerate training data), all
/// features receive the uniform share `1 / n_features` so the
/// sum-to-one contract still holds.
pub fn compute_forest_importance(forest: &Forest, feature_names: &[&str]) -> FeatureImportance {
    let n_features = forest.n_features();
    debug_assert_eq!(feature_names.len(), n_features);

    let mut gains = vec![0.0f64; n_features];
    for tree in forest.trees() {
        tree.accumulate_gains(&mut gains);
    }

    let total: f64 = gains.iter().sum();
    let scores: Vec<f32> = if total > 0.0 {
        gains.iter().map(|&g| (g / total) as f32).collect()
    } else {
        vec![1.0 / n_features as f32; n_features]
    };

    let mut entries: Vec<ImportanceEntry> = feature_names
        .iter()
        .zip(scores)
        .map(|(&feature, score)| ImportanceEntry { feature: feature.to_owned(), score })
        .collect();
    // Stable sort: ties keep original column order.
    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    FeatureImportance { entries }
}

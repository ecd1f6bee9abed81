//! Explainability: gain-based feature importance.
//!
//! Importance is the fraction of total split gain (sample-weighted
//! impurity decrease) attributable to each feature across all trees,
//! normalized to sum to 1.

mod importance;

pub use importance::{compute_forest_importance, FeatureImportance, ImportanceEntry};

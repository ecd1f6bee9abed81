//! adlift: an explainable campaign-outcome prediction engine.
//!
//! Trains a bagged-decision-tree classifier on historical marketing
//! campaigns and answers a single question per request: will this
//! campaign succeed, and which features drove the call?
//!
//! # Key Types
//!
//! - [`CampaignRecord`] / [`Dataset`] - Typed campaign rows and the training table
//! - [`EncoderRegistry`] - Per-column categorical encoders, growable at inference
//! - [`ForestConfig`] - Training configuration builder
//! - [`AnalysisReport`] - Prediction, accuracy, and feature importances
//!
//! # Running an Analysis
//!
//! The whole pipeline (encode, balance, train, evaluate, predict) runs
//! per request through [`run_analysis`]:
//!
//! ```ignore
//! use adlift::{run_analysis, CampaignRecord, ForestConfig};
//!
//! let config = ForestConfig::builder().seed(42).build()?;
//! let record = CampaignRecord::new(20_000.0, "تلفزيون", "25-34", 30, "طبيعية");
//! let report = run_analysis(&dataset, &record, &config)?;
//! println!("{}: {:.1}% accurate", report.prediction, report.accuracy * 100.0);
//! ```
//!
//! Models and encoders live for one request; nothing is persisted and
//! nothing is shared across concurrent callers.

pub mod data;
pub mod error;
pub mod explainability;
pub mod inference;
pub mod pipeline;
pub mod report;
pub mod repr;
pub mod sampling;
pub mod testing;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Data types (for preparing training data and inference records)
pub use data::{CampaignRecord, DataError, Dataset, EncoderRegistry, FEATURE_NAMES};

// Top-level error
pub use error::EngineError;

// Explainability
pub use explainability::{FeatureImportance, ImportanceEntry};

// Inference
pub use inference::Prediction;

// Pipeline entry point
pub use pipeline::run_analysis;

// Report surface
pub use report::AnalysisReport;

// Training types
pub use training::{evaluate, ConfigError, ForestConfig, ForestTrainer};

// Shared utilities
pub use utils::Parallelism;

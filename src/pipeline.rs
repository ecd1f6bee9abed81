//! The end-to-end analysis pipeline.
//!
//! One `run_analysis` call owns its encoder registry and forest from
//! start to finish: fit encoders, encode, split, balance the training
//! split, train, measure held-out accuracy, rank importances, predict
//! the input record, assemble the report. Nothing is cached or shared
//! across calls, so concurrent requests simply run their own pipelines
//! over the same read-only dataset.

use crate::data::{CampaignRecord, Dataset, EncoderRegistry, FEATURE_NAMES};
use crate::error::EngineError;
use crate::explainability::compute_forest_importance;
use crate::inference::predict_record;
use crate::report::AnalysisReport;
use crate::sampling::{oversample_minority, select_columns, split_indices};
use crate::training::{evaluate, EmptyEvaluationSetError, ForestConfig, ForestTrainer};

/// Seed tag separating the SMOTE stream from the split/tree streams.
const SMOTE_STREAM: u64 = 0x5A07_E5EE_D000_0001;

/// Run the whole analysis pipeline for one campaign record.
///
/// The model is retrained from scratch on every call; with a fixed
/// `config.seed` the returned prediction and accuracy are identical
/// across repeated runs over the same inputs.
///
/// # Errors
///
/// Any [`EngineError`] condition aborts the run with no partial result:
/// empty dataset, degenerate split, unbalanceable minority class, or a
/// malformed inference record.
pub fn run_analysis(
    dataset: &Dataset,
    record: &CampaignRecord,
    config: &ForestConfig,
) -> Result<AnalysisReport, EngineError> {
    let span = tracing::info_span!("run_analysis", n_samples = dataset.n_samples());
    let _guard = span.enter();

    let mut registry = EncoderRegistry::fit(dataset.records());
    let (features, labels) = dataset.to_matrix(&registry)?;

    let (train_idx, test_idx) =
        split_indices(dataset.n_samples(), config.test_fraction, config.seed);
    if train_idx.is_empty() || test_idx.is_empty() {
        return Err(EmptyEvaluationSetError.into());
    }
    tracing::debug!(train = train_idx.len(), test = test_idx.len(), "split dataset");

    let (train_features, train_labels) = select_columns(features.view(), &labels, &train_idx);
    let (test_features, test_labels) = select_columns(features.view(), &labels, &test_idx);

    // Balance the training split only; the held-out split must stay
    // untouched or the reported accuracy is inflated.
    let (balanced_features, balanced_labels) = oversample_minority(
        train_features.view(),
        &train_labels,
        config.smote_neighbors,
        config.seed ^ SMOTE_STREAM,
    )?;
    tracing::debug!(
        before = train_labels.len(),
        after = balanced_labels.len(),
        "balanced training split"
    );

    let forest = ForestTrainer::new(config).train(balanced_features.view(), &balanced_labels);
    let accuracy = evaluate(&forest, test_features.view(), &test_labels)?;
    let importances = compute_forest_importance(&forest, &FEATURE_NAMES);

    let (prediction, probability) = predict_record(&forest, &mut registry, record)?;
    tracing::info!(%prediction, accuracy, "analysis complete");

    Ok(AnalysisReport::assemble(prediction, probability, accuracy, importances))
}

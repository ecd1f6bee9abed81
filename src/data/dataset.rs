//! The historical campaign table and its feature matrix.

use ndarray::Array2;

use crate::data::encoder::{EncoderRegistry, UnknownCategoryError};
use crate::data::record::{CampaignRecord, InvalidRecordError};

/// Number of feature columns in the fixed campaign schema.
pub const N_FEATURES: usize = 5;

/// Feature column names, in matrix column order.
///
/// This order is a contract: every feature vector the engine assembles
/// (training matrix and single-record inference alike) uses exactly
/// this layout.
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "budget",
    "channel",
    "audience_bracket",
    "duration_days",
    "market_condition",
];

/// Errors raised while assembling a training table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// A training table must contain at least one row.
    #[error("dataset is empty")]
    Empty,
    /// Every training row must carry an outcome label.
    #[error("training row {0} has no outcome label")]
    MissingOutcome(usize),
    /// A row failed its numeric invariants.
    #[error(transparent)]
    InvalidRecord(#[from] InvalidRecordError),
}

/// An ordered, non-empty collection of fully-labeled campaign rows.
///
/// The schema is fixed to the five [`FEATURE_NAMES`] columns plus the
/// binary outcome. The table is read-only once constructed; encoders
/// and models derived from it are owned per analysis request.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<CampaignRecord>,
}

impl Dataset {
    /// Build a training table, validating every row.
    ///
    /// # Errors
    ///
    /// - [`DataError::Empty`] for an empty row set
    /// - [`DataError::MissingOutcome`] if any row lacks a label
    /// - [`DataError::InvalidRecord`] if any row breaks an invariant
    pub fn from_records(records: Vec<CampaignRecord>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::Empty);
        }
        for (idx, record) in records.iter().enumerate() {
            record.validate()?;
            if record.outcome.is_none() {
                return Err(DataError::MissingOutcome(idx));
            }
        }
        Ok(Self { records })
    }

    /// Number of rows.
    pub fn n_samples(&self) -> usize {
        self.records.len()
    }

    /// The underlying rows.
    pub fn records(&self) -> &[CampaignRecord] {
        &self.records
    }

    /// Encode the table into a feature-major matrix plus label vector.
    ///
    /// Features are stored `[n_features, n_samples]` so each column of
    /// the matrix is one campaign; labels are `1.0` for success.
    ///
    /// # Errors
    ///
    /// [`UnknownCategoryError`] if the registry was not fit over this
    /// table (codes are not portable across separately-fit registries).
    pub fn to_matrix(
        &self,
        registry: &EncoderRegistry,
    ) -> Result<(Array2<f32>, Vec<f32>), UnknownCategoryError> {
        let n = self.records.len();
        let mut features = Array2::<f32>::zeros((N_FEATURES, n));
        let mut labels = Vec::with_capacity(n);

        for (sample, record) in self.records.iter().enumerate() {
            features[[0, sample]] = record.budget;
            features[[1, sample]] = registry.channel.transform(&record.channel)? as f32;
            features[[2, sample]] =
                registry.audience_bracket.transform(&record.audience_bracket)? as f32;
            features[[3, sample]] = record.duration_days as f32;
            features[[4, sample]] =
                registry.market_condition.transform(&record.market_condition)? as f32;
            labels.push(if record.outcome == Some(true) { 1.0 } else { 0.0 });
        }

        Ok((features, labels))
    }
}

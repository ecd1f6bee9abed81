//! Top-level error type for the analysis pipeline.

use crate::data::{DataError, InvalidRecordError, UnknownCategoryError};
use crate::sampling::InsufficientMinorityError;
use crate::training::{ConfigError, EmptyEvaluationSetError};

/// Any failure the pipeline can surface to the presentation layer.
///
/// The engine never retries or substitutes defaults for these
/// conditions; masking them would corrupt the reported accuracy or
/// prediction without notice. The caller must display a failure and
/// withhold numeric results.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The training table was empty or malformed.
    #[error(transparent)]
    Data(#[from] DataError),
    /// `transform` was called before `extend`; an adapter sequencing bug.
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategoryError),
    /// The minority class was too small to balance.
    #[error(transparent)]
    InsufficientMinority(#[from] InsufficientMinorityError),
    /// The train/test split was degenerate.
    #[error(transparent)]
    EmptyEvaluationSet(#[from] EmptyEvaluationSetError),
    /// The inference record broke a numeric invariant.
    #[error(transparent)]
    InvalidRecord(#[from] InvalidRecordError),
    /// The training configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

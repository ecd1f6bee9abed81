//! Campaign data handling.
//!
//! This module provides the typed row struct ([`CampaignRecord`]), the
//! training table ([`Dataset`]), and the per-column categorical
//! encoders ([`CategoryEncoder`], [`EncoderRegistry`]).

mod dataset;
mod encoder;
mod record;

pub use dataset::{DataError, Dataset, FEATURE_NAMES, N_FEATURES};
pub use encoder::{CategoryEncoder, EncoderRegistry, UnknownCategoryError};
pub use record::{CampaignRecord, InvalidRecordError};

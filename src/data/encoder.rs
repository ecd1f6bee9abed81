//! Per-column categorical encoders.
//!
//! Each categorical column gets its own [`CategoryEncoder`]; codes are
//! column-local and must never be compared across columns. The
//! [`EncoderRegistry`] bundles the three encoders a campaign table
//! needs and is fit once per training run.

use std::collections::HashMap;

use crate::data::record::CampaignRecord;

/// `transform` was called with a category the encoder has never seen.
///
/// Callers that may receive novel categories must call
/// [`CategoryEncoder::extend`] first; hitting this error is an adapter
/// sequencing bug, not a user-facing condition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown category {value:?} for column {column}")]
pub struct UnknownCategoryError {
    /// The categorical column the encoder belongs to.
    pub column: &'static str,
    /// The unmapped value.
    pub value: String,
}

// =============================================================================
// CategoryEncoder
// =============================================================================

/// A growable bijection from category strings to dense integer codes.
///
/// Codes are assigned `0..k-1` over the sorted distinct fit values;
/// later [`extend`] calls append new categories in arrival order. There
/// is no removal operation.
///
/// [`extend`]: CategoryEncoder::extend
#[derive(Debug, Clone)]
pub struct CategoryEncoder {
    column: &'static str,
    classes: Vec<String>,
    codes: HashMap<String, u32>,
}

impl CategoryEncoder {
    /// Fit an encoder over the distinct values of one column.
    pub fn fit<I, S>(column: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classes: Vec<String> = values.into_iter().map(|v| v.as_ref().to_owned()).collect();
        classes.sort();
        classes.dedup();
        let codes = classes
            .iter()
            .enumerate()
            .map(|(code, class)| (class.clone(), code as u32))
            .collect();
        Self { column, classes, codes }
    }

    /// Look up the code for a known category.
    ///
    /// # Errors
    ///
    /// [`UnknownCategoryError`] if the value was neither fit nor
    /// extended into this encoder.
    pub fn transform(&self, value: &str) -> Result<u32, UnknownCategoryError> {
        self.codes.get(value).copied().ok_or_else(|| UnknownCategoryError {
            column: self.column,
            value: value.to_owned(),
        })
    }

    /// Register a category, returning its code.
    ///
    /// Appends a fresh code equal to the current mapping size for novel
    /// values; idempotent for values already present.
    pub fn extend(&mut self, value: &str) -> u32 {
        if let Some(&code) = self.codes.get(value) {
            return code;
        }
        let code = self.classes.len() as u32;
        self.classes.push(value.to_owned());
        self.codes.insert(value.to_owned(), code);
        code
    }

    /// Number of known categories.
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Known categories, in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The column this encoder belongs to.
    pub fn column(&self) -> &'static str {
        self.column
    }
}

// =============================================================================
// EncoderRegistry
// =============================================================================

/// One independent encoder per categorical campaign column.
///
/// Built once per training run from the dataset's observed categories;
/// grows (never shrinks) when inference presents a novel category. A
/// trained forest is only valid paired with the exact registry that
/// encoded its training matrix.
#[derive(Debug, Clone)]
pub struct EncoderRegistry {
    /// Encoder for the `channel` column.
    pub channel: CategoryEncoder,
    /// Encoder for the `audience_bracket` column.
    pub audience_bracket: CategoryEncoder,
    /// Encoder for the `market_condition` column.
    pub market_condition: CategoryEncoder,
}

impl EncoderRegistry {
    /// Fit all three encoders from a set of training rows.
    pub fn fit(records: &[CampaignRecord]) -> Self {
        Self {
            channel: CategoryEncoder::fit("channel", records.iter().map(|r| r.channel.as_str())),
            audience_bracket: CategoryEncoder::fit(
                "audience_bracket",
                records.iter().map(|r| r.audience_bracket.as_str()),
            ),
            market_condition: CategoryEncoder::fit(
                "market_condition",
                records.iter().map(|r| r.market_condition.as_str()),
            ),
        }
    }
}

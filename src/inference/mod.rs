//! Single-record inference.
//!
//! Encodes one new campaign through the same per-column encoders the
//! model was trained with, extending them for categories the training
//! set never saw, and obtains the forest's vote. Extending before
//! transforming is mandatory: transforming first would fail on novel
//! categories.

use serde::Serialize;

use crate::data::{CampaignRecord, EncoderRegistry, InvalidRecordError, N_FEATURES};
use crate::repr::Forest;

/// The binary campaign forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prediction {
    Success,
    Failure,
}

impl Prediction {
    pub fn is_success(self) -> bool {
        matches!(self, Prediction::Success)
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prediction::Success => write!(f, "success"),
            Prediction::Failure => write!(f, "failure"),
        }
    }
}

/// Encode one record into a feature vector in the pinned column order
/// `[budget, channel, audience_bracket, duration_days, market_condition]`.
///
/// Novel categories are appended to the registry (growing it by one
/// code each) before their code is read; already-trained trees are
/// unaffected and route unseen codes like any out-of-range value.
///
/// # Errors
///
/// [`InvalidRecordError`] when the record breaks a numeric invariant.
pub fn encode_record(
    registry: &mut EncoderRegistry,
    record: &CampaignRecord,
) -> Result<[f32; N_FEATURES], InvalidRecordError> {
    record.validate()?;

    let channel = registry.channel.extend(&record.channel);
    let audience = registry.audience_bracket.extend(&record.audience_bracket);
    let market = registry.market_condition.extend(&record.market_condition);

    Ok([
        record.budget,
        channel as f32,
        audience as f32,
        record.duration_days as f32,
        market as f32,
    ])
}

/// Predict one record, returning the label and the averaged success
/// probability behind it.
pub fn predict_record(
    forest: &Forest,
    registry: &mut EncoderRegistry,
    record: &CampaignRecord,
) -> Result<(Prediction, f32), InvalidRecordError> {
    let row = encode_record(registry, record)?;
    let probability = forest.predict_proba(&row);
    let label = if probability >= 0.5 { Prediction::Success } else { Prediction::Failure };
    Ok((label, probability))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::Tree;

    fn training_rows() -> Vec<CampaignRecord> {
        vec![
            CampaignRecord::new(10_000.0, "تلفزيون", "25-34", 30, "طبيعية").with_outcome(true),
            CampaignRecord::new(2_000.0, "راديو", "18-24", 7, "أزمة اقتصادية").with_outcome(false),
        ]
    }

    /// Forest voting success iff budget >= 5000.
    fn budget_forest() -> Forest {
        let mut tree = Tree::default();
        let low = tree.push_leaf(0.0);
        let high = tree.push_leaf(1.0);
        let root = tree.push_branch(0, 5_000.0, low, high, 1.0);
        tree.seal(root);
        let mut forest = Forest::new(N_FEATURES);
        forest.push_tree(tree);
        forest
    }

    #[test]
    fn encodes_in_pinned_column_order() {
        let rows = training_rows();
        let mut registry = EncoderRegistry::fit(&rows);
        let record = CampaignRecord::new(20_000.0, "تلفزيون", "25-34", 30, "طبيعية");
        let row = encode_record(&mut registry, &record).unwrap();

        assert_eq!(row[0], 20_000.0);
        assert_eq!(row[1], registry.channel.transform("تلفزيون").unwrap() as f32);
        assert_eq!(row[3], 30.0);
        assert_eq!(
            row[4],
            registry.market_condition.transform("طبيعية").unwrap() as f32
        );
    }

    #[test]
    fn unseen_category_grows_registry_and_predicts() {
        let rows = training_rows();
        let mut registry = EncoderRegistry::fit(&rows);
        let known = registry.channel.n_classes();

        let record = CampaignRecord::new(20_000.0, "بودكاست", "25-34", 30, "طبيعية");
        let (label, probability) = predict_record(&budget_forest(), &mut registry, &record).unwrap();

        assert_eq!(registry.channel.n_classes(), known + 1);
        assert_eq!(label, Prediction::Success);
        assert!((0.0..=1.0).contains(&probability));
    }

    #[test]
    fn malformed_record_fails_fast() {
        let rows = training_rows();
        let mut registry = EncoderRegistry::fit(&rows);
        let record = CampaignRecord::new(-1.0, "راديو", "18-24", 7, "طبيعية");
        assert!(predict_record(&budget_forest(), &mut registry, &record).is_err());
        // The bad record must not have extended anything.
        assert_eq!(registry.channel.n_classes(), 2);
    }

    #[test]
    fn prediction_formats_lowercase() {
        assert_eq!(Prediction::Success.to_string(), "success");
        assert_eq!(Prediction::Failure.to_string(), "failure");
        assert!(Prediction::Success.is_success());
    }
}

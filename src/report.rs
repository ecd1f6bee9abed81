//! Report assembly.
//!
//! Pure data transformation: turns the pipeline's outputs into the
//! structured object the presentation layer renders. No prose is
//! generated here; narrative text and charts are the caller's job.

use serde::Serialize;

use crate::explainability::{FeatureImportance, ImportanceEntry};
use crate::inference::Prediction;

/// The structured result of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Binary forecast for the input record.
    pub prediction: Prediction,
    /// Averaged success probability behind the forecast.
    pub probability: f32,
    /// Held-out accuracy of the model that produced the forecast.
    pub accuracy: f32,
    /// Feature importances, most important first.
    pub importances: Vec<ImportanceEntry>,
}

impl AnalysisReport {
    /// Assemble a report from the pipeline's outputs.
    pub fn assemble(
        prediction: Prediction,
        probability: f32,
        accuracy: f32,
        importances: FeatureImportance,
    ) -> Self {
        Self {
            prediction,
            probability,
            accuracy,
            importances: importances.into_entries(),
        }
    }

    /// Importances in chart order: least important first, so a
    /// horizontal bar chart reads most-important at the top.
    pub fn chart_order(&self) -> impl Iterator<Item = &ImportanceEntry> {
        self.importances.iter().rev()
    }
}

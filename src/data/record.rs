//! Typed campaign rows.

use serde::{Deserialize, Serialize};

/// Errors produced when a record violates its numeric invariants.
///
/// A malformed record is rejected outright; no field is auto-corrected
/// and no partial prediction is returned for it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidRecordError {
    /// Budget must be positive and finite.
    #[error("budget must be positive and finite, got {0}")]
    Budget(f32),
    /// Duration must be at least one day.
    #[error("duration_days must be positive, got {0}")]
    Duration(u32),
}

/// One historical or to-be-predicted campaign observation.
///
/// Training rows carry an `outcome`; inference records leave it `None`.
///
/// # Invariants
///
/// `budget > 0` and `duration_days > 0`, checked by [`validate`].
///
/// [`validate`]: CampaignRecord::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    /// Campaign budget in currency units.
    pub budget: f32,
    /// Marketing channel (open categorical domain).
    pub channel: String,
    /// Target age bracket (open categorical domain).
    pub audience_bracket: String,
    /// Campaign duration in days.
    pub duration_days: u32,
    /// Market condition during the campaign (open categorical domain).
    pub market_condition: String,
    /// Binary outcome: `true` for success. `None` for inference records.
    pub outcome: Option<bool>,
}

impl CampaignRecord {
    /// Create an inference record (no outcome label).
    pub fn new(
        budget: f32,
        channel: impl Into<String>,
        audience_bracket: impl Into<String>,
        duration_days: u32,
        market_condition: impl Into<String>,
    ) -> Self {
        Self {
            budget,
            channel: channel.into(),
            audience_bracket: audience_bracket.into(),
            duration_days,
            market_condition: market_condition.into(),
            outcome: None,
        }
    }

    /// Attach an outcome label, turning this into a training row.
    pub fn with_outcome(mut self, success: bool) -> Self {
        self.outcome = Some(success);
        self
    }

    /// Check the numeric invariants.
    pub fn validate(&self) -> Result<(), InvalidRecordError> {
        if !(self.budget > 0.0) || !self.budget.is_finite() {
            return Err(InvalidRecordError::Budget(self.budget));
        }
        if self.duration_days == 0 {
            return Err(InvalidRecordError::Duration(self.duration_days));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_record() {
        let record = CampaignRecord::new(20_000.0, "تلفزيون", "25-34", 30, "طبيعية");
        assert!(record.validate().is_ok());
        assert_eq!(record.outcome, None);
    }

    #[test]
    fn with_outcome_labels_the_row() {
        let record = CampaignRecord::new(1_000.0, "راديو", "18-24", 7, "طبيعية").with_outcome(true);
        assert_eq!(record.outcome, Some(true));
    }

    #[test]
    fn rejects_zero_budget() {
        let record = CampaignRecord::new(0.0, "راديو", "18-24", 7, "طبيعية");
        assert!(matches!(record.validate(), Err(InvalidRecordError::Budget(_))));
    }

    #[test]
    fn rejects_negative_budget() {
        let record = CampaignRecord::new(-5.0, "راديو", "18-24", 7, "طبيعية");
        assert!(matches!(record.validate(), Err(InvalidRecordError::Budget(_))));
    }

    #[test]
    fn rejects_non_finite_budget() {
        let record = CampaignRecord::new(f32::NAN, "راديو", "18-24", 7, "طبيعية");
        assert!(matches!(record.validate(), Err(InvalidRecordError::Budget(_))));
        let record = CampaignRecord::new(f32::INFINITY, "راديو", "18-24", 7, "طبيعية");
        assert!(matches!(record.validate(), Err(InvalidRecordError::Budget(_))));
    }

    #[test]
    fn rejects_zero_duration() {
        let record = CampaignRecord::new(1_000.0, "راديو", "18-24", 0, "طبيعية");
        assert!(matches!(record.validate(), Err(InvalidRecordError::Duration(0))));
    }
}

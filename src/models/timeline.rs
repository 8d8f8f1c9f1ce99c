//! Weight target input model

use serde::{Deserialize, Serialize};

use super::biometrics::check_positive;
use crate::error::PreconditionViolation;

/// Current and target weight plus the desired weekly change, in kg
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalTimelineInput {
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub weekly_rate_kg: f64,
}

impl GoalTimelineInput {
    pub fn new(current_weight_kg: f64, target_weight_kg: f64, weekly_rate_kg: f64) -> Self {
        Self {
            current_weight_kg,
            target_weight_kg,
            weekly_rate_kg,
        }
    }

    pub fn validate(&self) -> Result<(), PreconditionViolation> {
        check_positive("current weight", self.current_weight_kg)?;
        check_positive("target weight", self.target_weight_kg)?;
        if !(self.weekly_rate_kg.is_finite() && self.weekly_rate_kg > 0.0) {
            return Err(PreconditionViolation::NonPositiveWeeklyRate(self.weekly_rate_kg));
        }
        Ok(())
    }
}

//! Activity input model

use serde::{Deserialize, Serialize};

use crate::error::PreconditionViolation;

/// Exercise intensity, expressed as kcal burned per minute
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    Vigorous,
}

impl Intensity {
    /// Calories per minute for this intensity
    pub fn multiplier(&self) -> f64 {
        match self {
            Intensity::Light => 5.0,
            Intensity::Moderate => 8.0,
            Intensity::Vigorous => 10.0,
        }
    }

    /// Map a raw multiplier back to its intensity, if it is one of 5, 8 or 10
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        [Intensity::Light, Intensity::Moderate, Intensity::Vigorous]
            .into_iter()
            .find(|i| i.multiplier() == multiplier)
    }
}

/// Daily exercise for a goal calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActivityInput {
    pub duration_minutes: f64,
    pub intensity: Intensity,
}

impl ActivityInput {
    pub fn new(duration_minutes: f64, intensity: Intensity) -> Self {
        Self {
            duration_minutes,
            intensity,
        }
    }

    /// Duration must be finite and non-negative
    pub fn validate(&self) -> Result<(), PreconditionViolation> {
        if self.duration_minutes.is_finite() && self.duration_minutes >= 0.0 {
            Ok(())
        } else {
            Err(PreconditionViolation::NegativeDuration(self.duration_minutes))
        }
    }
}

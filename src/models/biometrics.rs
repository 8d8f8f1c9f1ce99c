//! Biometrics model
//!
//! Body measurements used to derive basal metabolic rate. Metric units only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PreconditionViolation;

/// Biological sex, selecting the Mifflin-St Jeor offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = PreconditionViolation;

    /// Unknown values are rejected rather than mapped to a default
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(PreconditionViolation::UnknownSex(s.to_string())),
        }
    }
}

/// Body measurements for a goal calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Biometrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
}

impl Biometrics {
    pub fn new(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
        }
    }

    /// Positivity check on every measurement
    pub fn validate(&self) -> Result<(), PreconditionViolation> {
        check_positive("weight", self.weight_kg)?;
        check_positive("height", self.height_cm)?;
        check_positive("age", f64::from(self.age_years))?;
        Ok(())
    }
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), PreconditionViolation> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PreconditionViolation::NonPositiveBiometric { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str() {
        assert_eq!("male".parse::<Sex>(), Ok(Sex::Male));
        assert_eq!(" Female ".parse::<Sex>(), Ok(Sex::Female));
        assert_eq!(
            "other".parse::<Sex>(),
            Err(PreconditionViolation::UnknownSex("other".to_string()))
        );
    }

    #[test]
    fn test_sex_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"female\"");
        let sex: Sex = serde_json::from_str("\"male\"").unwrap();
        assert_eq!(sex, Sex::Male);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(Biometrics::new(70.0, 175.0, 30, Sex::Male).validate().is_ok());

        assert_eq!(
            Biometrics::new(0.0, 175.0, 30, Sex::Male).validate(),
            Err(PreconditionViolation::NonPositiveBiometric { field: "weight", value: 0.0 })
        );
        assert_eq!(
            Biometrics::new(70.0, -1.0, 30, Sex::Male).validate(),
            Err(PreconditionViolation::NonPositiveBiometric { field: "height", value: -1.0 })
        );
        assert_eq!(
            Biometrics::new(70.0, 175.0, 0, Sex::Female).validate(),
            Err(PreconditionViolation::NonPositiveBiometric { field: "age", value: 0.0 })
        );
    }
}

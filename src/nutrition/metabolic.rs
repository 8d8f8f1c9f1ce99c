//! Basal metabolic rate
//!
//! Mifflin-St Jeor equation (1990):
//! BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + sex offset
//! - Men: +5
//! - Women: -161

use crate::models::{Biometrics, Sex};

/// kcal per kg of body weight
pub const WEIGHT_COEFFICIENT: f64 = 10.0;
/// kcal per cm of height
pub const HEIGHT_COEFFICIENT: f64 = 6.25;
/// kcal per year of age
pub const AGE_COEFFICIENT: f64 = 5.0;
pub const MALE_OFFSET: f64 = 5.0;
pub const FEMALE_OFFSET: f64 = -161.0;

/// Compute BMR in kcal/day, rounded half away from zero.
///
/// Inputs are not checked for plausibility; see [`Biometrics::validate`].
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> i64 {
    let offset = match sex {
        Sex::Male => MALE_OFFSET,
        Sex::Female => FEMALE_OFFSET,
    };

    let bmr = WEIGHT_COEFFICIENT * weight_kg + HEIGHT_COEFFICIENT * height_cm
        - AGE_COEFFICIENT * f64::from(age_years)
        + offset;

    bmr.round() as i64
}

/// [`compute_bmr`] over a [`Biometrics`] value
pub fn bmr_for(biometrics: &Biometrics) -> i64 {
    compute_bmr(
        biometrics.weight_kg,
        biometrics.height_cm,
        biometrics.age_years,
        biometrics.sex,
    )
}

//! Exercise calorie adjustment

use crate::models::ActivityInput;

/// Calories burned: `round(duration_minutes * intensity_multiplier)`.
///
/// The multiplier is not checked against the 5/8/10 intensity set.
pub fn compute_exercise_adjustment(duration_minutes: f64, intensity_multiplier: f64) -> i64 {
    (duration_minutes * intensity_multiplier).round() as i64
}

/// [`compute_exercise_adjustment`] over an [`ActivityInput`]
pub fn adjustment_for(activity: &ActivityInput) -> i64 {
    compute_exercise_adjustment(activity.duration_minutes, activity.intensity.multiplier())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intensity;

    #[test]
    fn test_adjustment_for_each_intensity() {
        assert_eq!(compute_exercise_adjustment(30.0, 5.0), 150);
        assert_eq!(compute_exercise_adjustment(30.0, 8.0), 240);
        assert_eq!(compute_exercise_adjustment(30.0, 10.0), 300);
    }

    #[test]
    fn test_fractional_duration_rounds() {
        // 12.5 * 5 = 62.5
        assert_eq!(compute_exercise_adjustment(12.5, 5.0), 63);
        // 10.2 * 8 = 81.6
        assert_eq!(compute_exercise_adjustment(10.2, 8.0), 82);
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(compute_exercise_adjustment(0.0, 10.0), 0);
    }

    #[test]
    fn test_adjustment_for_input() {
        let activity = ActivityInput::new(45.0, Intensity::Moderate);
        assert_eq!(adjustment_for(&activity), 360);
    }
}

//! Target weight timeline projection

use serde::{Deserialize, Serialize};

use crate::error::PreconditionViolation;
use crate::models::GoalTimelineInput;

/// Result of a timeline projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TimelineOutcome {
    /// Current weight is at or below the target: maintenance or gain
    AlreadyAtOrPastGoal { target_weight_kg: f64 },
    /// Whole weeks until the target, partial weeks rounded up
    WeeksRemaining { weeks: u32, target_weight_kg: f64 },
}

/// Project weeks to reach `target_weight` at `weekly_rate` kg/week.
///
/// Rejects a weekly rate that is zero, negative or not finite.
pub fn project_timeline(
    current_weight: f64,
    target_weight: f64,
    weekly_rate: f64,
) -> Result<TimelineOutcome, PreconditionViolation> {
    if !(weekly_rate.is_finite() && weekly_rate > 0.0) {
        return Err(PreconditionViolation::NonPositiveWeeklyRate(weekly_rate));
    }

    let to_lose = current_weight - target_weight;
    if to_lose <= 0.0 {
        return Ok(TimelineOutcome::AlreadyAtOrPastGoal {
            target_weight_kg: target_weight,
        });
    }

    let weeks = (to_lose / weekly_rate).ceil() as u32;
    Ok(TimelineOutcome::WeeksRemaining {
        weeks,
        target_weight_kg: target_weight,
    })
}

/// [`project_timeline`] over a [`GoalTimelineInput`]
pub fn timeline_for(input: &GoalTimelineInput) -> Result<TimelineOutcome, PreconditionViolation> {
    project_timeline(
        input.current_weight_kg,
        input.target_weight_kg,
        input.weekly_rate_kg,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weeks_remaining() {
        assert_eq!(
            project_timeline(80.0, 75.0, 0.5),
            Ok(TimelineOutcome::WeeksRemaining { weeks: 10, target_weight_kg: 75.0 })
        );
    }

    #[test]
    fn test_partial_week_rounds_up() {
        assert_eq!(
            project_timeline(80.0, 75.0, 0.75),
            Ok(TimelineOutcome::WeeksRemaining { weeks: 7, target_weight_kg: 75.0 })
        );
    }

    #[test]
    fn test_already_past_goal() {
        assert_eq!(
            project_timeline(70.0, 75.0, 0.5),
            Ok(TimelineOutcome::AlreadyAtOrPastGoal { target_weight_kg: 75.0 })
        );
    }

    #[test]
    fn test_exactly_at_goal() {
        assert_eq!(
            project_timeline(75.0, 75.0, 0.5),
            Ok(TimelineOutcome::AlreadyAtOrPastGoal { target_weight_kg: 75.0 })
        );
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        assert_eq!(
            project_timeline(80.0, 75.0, 0.0),
            Err(PreconditionViolation::NonPositiveWeeklyRate(0.0))
        );
        assert_eq!(
            project_timeline(80.0, 75.0, -0.5),
            Err(PreconditionViolation::NonPositiveWeeklyRate(-0.5))
        );
        assert!(project_timeline(80.0, 75.0, f64::NAN).is_err());
    }

    #[test]
    fn test_timeline_for_input() {
        let input = GoalTimelineInput::new(92.0, 85.0, 1.0);
        assert_eq!(
            timeline_for(&input),
            Ok(TimelineOutcome::WeeksRemaining { weeks: 7, target_weight_kg: 85.0 })
        );
    }
}

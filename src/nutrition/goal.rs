//! Daily calorie goal
//!
//! The goal is maintenance calories: BMR plus exercise. It is never reduced
//! by the weekly weight-loss rate, which only feeds the timeline projection.

use serde::{Deserialize, Serialize};

use super::activity::adjustment_for;
use super::metabolic::bmr_for;
use crate::models::{ActivityInput, Biometrics};

/// A computed goal with the parts it was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalBreakdown {
    pub bmr: i64,
    pub exercise: i64,
    pub daily_goal: i64,
}

/// Compute the maintenance goal in kcal/day
pub fn compute_daily_goal(biometrics: &Biometrics, activity: &ActivityInput) -> i64 {
    goal_breakdown(biometrics, activity).daily_goal
}

/// Compute the goal alongside its BMR and exercise components
pub fn goal_breakdown(biometrics: &Biometrics, activity: &ActivityInput) -> GoalBreakdown {
    let bmr = bmr_for(biometrics);
    let exercise = adjustment_for(activity);

    GoalBreakdown {
        bmr,
        exercise,
        daily_goal: bmr + exercise,
    }
}

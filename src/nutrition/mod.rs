//! Nutrition calculation module
//!
//! Pure goal, macro and timeline calculations. Rounding is half away from
//! zero throughout.

pub mod activity;
pub mod goal;
pub mod macros;
pub mod metabolic;
pub mod timeline;

pub use activity::{adjustment_for, compute_exercise_adjustment};
pub use goal::{compute_daily_goal, goal_breakdown, GoalBreakdown};
pub use macros::{allocate_macros, MacroTargets};
pub use metabolic::{bmr_for, compute_bmr};
pub use timeline::{project_timeline, timeline_for, TimelineOutcome};

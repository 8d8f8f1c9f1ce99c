//! Display boundary
//!
//! Traits for the rendering and confirmation collaborators, plus the text of
//! the timeline and goal feedback messages.

use std::fmt;

use serde::Serialize;

use crate::models::{FoodLog, LogSummary};
use crate::nutrition::{MacroTargets, TimelineOutcome};

/// Consumer of rendered tracker state
pub trait DisplaySink {
    fn show_goal(&mut self, daily_goal: i64);
    fn show_macros(&mut self, macros: &MacroTargets);
    fn show_summary(&mut self, summary: &LogSummary);
    /// Entries in log order; position is the delete handle
    fn show_log(&mut self, log: &FoodLog);
    fn show_timeline(&mut self, message: &str);
    fn show_feedback(&mut self, message: &str);
}

/// Blocking yes/no prompt
pub trait Confirmation {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Prompt shown before clearing the food log
pub const RESET_PROMPT: &str = "Are you sure you want to reset the food log?";

/// Everything produced by one goal-setting action
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalReport {
    pub bmr: i64,
    pub exercise: i64,
    pub daily_goal: i64,
    pub macros: MacroTargets,
    pub timeline: TimelineOutcome,
}

impl GoalReport {
    /// Consolidated goal, breakdown, macro and timeline message
    pub fn feedback_message(&self) -> String {
        format!(
            "Daily calorie goal: {} kcal (BMR: {} kcal + Exercise: {} kcal)\n\
             Macros: Protein {} g, Carbs {} g, Fat {} g\n\
             {}",
            self.daily_goal,
            self.bmr,
            self.exercise,
            self.macros.protein_grams,
            self.macros.carb_grams,
            self.macros.fat_grams,
            self.timeline,
        )
    }
}

impl TimelineOutcome {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimelineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineOutcome::AlreadyAtOrPastGoal { target_weight_kg } => write!(
                f,
                "You have already reached your target weight of {} kg",
                target_weight_kg
            ),
            TimelineOutcome::WeeksRemaining {
                weeks,
                target_weight_kg,
            } => {
                let unit = if *weeks == 1 { "week" } else { "weeks" };
                write!(
                    f,
                    "Estimated time to reach {} kg: {} {}",
                    target_weight_kg, weeks, unit
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::allocate_macros;

    #[test]
    fn test_timeline_messages() {
        let weeks = TimelineOutcome::WeeksRemaining { weeks: 10, target_weight_kg: 75.0 };
        assert_eq!(weeks.message(), "Estimated time to reach 75 kg: 10 weeks");

        let one = TimelineOutcome::WeeksRemaining { weeks: 1, target_weight_kg: 74.5 };
        assert_eq!(one.message(), "Estimated time to reach 74.5 kg: 1 week");

        let reached = TimelineOutcome::AlreadyAtOrPastGoal { target_weight_kg: 75.0 };
        assert_eq!(reached.message(), "You have already reached your target weight of 75 kg");
    }

    #[test]
    fn test_feedback_message_contents() {
        let report = GoalReport {
            bmr: 1760,
            exercise: 240,
            daily_goal: 2000,
            macros: allocate_macros(2000),
            timeline: TimelineOutcome::WeeksRemaining { weeks: 10, target_weight_kg: 75.0 },
        };

        let message = report.feedback_message();
        assert!(message.contains("2000 kcal"));
        assert!(message.contains("BMR: 1760 kcal"));
        assert!(message.contains("Exercise: 240 kcal"));
        assert!(message.contains("Protein 125 g, Carbs 250 g, Fat 56 g"));
        assert!(message.ends_with("10 weeks"));
    }

    #[test]
    fn test_closure_confirmation() {
        let mut asked = Vec::new();
        let mut confirm = |prompt: &str| {
            asked.push(prompt.to_string());
            false
        };
        assert!(!confirm.confirm(RESET_PROMPT));
        assert_eq!(asked, vec![RESET_PROMPT.to_string()]);
    }
}

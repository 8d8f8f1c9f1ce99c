//! Data models
//!
//! Inputs to the goal calculation and the persisted food log.

mod activity;
mod biometrics;
mod food_entry;
mod timeline;

pub use activity::{ActivityInput, Intensity};
pub use biometrics::{Biometrics, Sex};
pub use food_entry::{FoodEntry, FoodLog, LogSummary};
pub use timeline::GoalTimelineInput;

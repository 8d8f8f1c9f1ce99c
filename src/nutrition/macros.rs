//! Macronutrient allocation
//!
//! Fixed percentage-of-calories split converted to grams with Atwater factors.

use serde::{Deserialize, Serialize};

/// Share of calories from carbohydrates
pub const CARB_CALORIE_SHARE: f64 = 0.50;
/// Share of calories from protein
pub const PROTEIN_CALORIE_SHARE: f64 = 0.25;
/// Share of calories from fat
pub const FAT_CALORIE_SHARE: f64 = 0.25;

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Gram targets per macronutrient
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_grams: i64,
    pub carb_grams: i64,
    pub fat_grams: i64,
}

impl MacroTargets {
    /// Calorie equivalent of the targets. Each macro is rounded on its own,
    /// so this only approximates the goal it was allocated from.
    pub fn calories(&self) -> f64 {
        self.protein_grams as f64 * KCAL_PER_G_PROTEIN
            + self.carb_grams as f64 * KCAL_PER_G_CARBS
            + self.fat_grams as f64 * KCAL_PER_G_FAT
    }
}

/// Split a daily goal into gram targets. A negative goal allocates nothing.
pub fn allocate_macros(daily_goal: i64) -> MacroTargets {
    let goal = daily_goal.max(0) as f64;

    MacroTargets {
        protein_grams: grams(goal, PROTEIN_CALORIE_SHARE, KCAL_PER_G_PROTEIN),
        carb_grams: grams(goal, CARB_CALORIE_SHARE, KCAL_PER_G_CARBS),
        fat_grams: grams(goal, FAT_CALORIE_SHARE, KCAL_PER_G_FAT),
    }
}

fn grams(goal: f64, share: f64, kcal_per_gram: f64) -> i64 {
    (goal * share / kcal_per_gram).round() as i64
}

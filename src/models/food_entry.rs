//! Food log model
//!
//! Consumed-food entries and the ordered log that holds them.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single consumed food. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    name: String,
    calories: i64,
}

impl FoodEntry {
    /// Create an entry, rejecting a blank name or non-positive calories.
    ///
    /// The name is stored trimmed.
    pub fn new(name: &str, calories: i64) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if calories <= 0 {
            return Err(ValidationError::NonPositiveCalories(calories));
        }

        Ok(Self {
            name: name.to_string(),
            calories,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calories(&self) -> i64 {
        self.calories
    }
}

/// Ordered food log. Position is the entry's identity for display and deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodLog {
    entries: Vec<FoodEntry>,
}

impl FoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FoodEntry> {
        self.entries.get(index)
    }

    /// Append to the end of the log
    pub fn push(&mut self, entry: FoodEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`, shifting later entries back by one.
    /// Out-of-range indexes leave the log untouched.
    pub fn remove(&mut self, index: usize) -> Option<FoodEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Total calories across all entries, saturating at `i64::MAX`
    pub fn total_calories(&self) -> i64 {
        self.entries
            .iter()
            .fold(0_i64, |total, e| total.saturating_add(e.calories))
    }

    /// Total calories, or `None` if the sum does not fit in an `i64`
    pub fn checked_total_calories(&self) -> Option<i64> {
        self.entries
            .iter()
            .try_fold(0_i64, |total, e| total.checked_add(e.calories))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoodEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a FoodLog {
    type Item = &'a FoodEntry;
    type IntoIter = std::slice::Iter<'a, FoodEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<FoodEntry> for FoodLog {
    fn from_iter<I: IntoIterator<Item = FoodEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Consumed and remaining calories against a goal.
///
/// `remaining` goes negative once the goal is exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSummary {
    pub consumed: i64,
    pub remaining: i64,
}

//! Food ledger
//!
//! Log mutations and the consumed/remaining summary. Totals are always
//! re-derived from the full log.

use crate::error::ValidationError;
use crate::models::{FoodEntry, FoodLog, LogSummary};

/// Sum the log and compare it against `goal`. Both figures saturate at the
/// `i64` bounds.
pub fn compute_summary(log: &FoodLog, goal: i64) -> LogSummary {
    let consumed = log.total_calories();
    LogSummary {
        consumed,
        remaining: goal.saturating_sub(consumed),
    }
}

/// Validate and append an entry. On error the log is unchanged.
///
/// Rejects an entry whose calories would push the log total past `i64::MAX`.
pub fn add_entry(log: &mut FoodLog, name: &str, calories: i64) -> Result<(), ValidationError> {
    let entry = FoodEntry::new(name, calories)?;
    log.checked_total_calories()
        .and_then(|total| total.checked_add(entry.calories()))
        .ok_or(ValidationError::CalorieTotalOverflow(calories))?;

    log.push(entry);
    Ok(())
}

/// Remove the entry at `index`. Out of range is a no-op returning `None`.
pub fn delete_entry(log: &mut FoodLog, index: usize) -> Option<FoodEntry> {
    log.remove(index)
}

/// Clear the log
pub fn reset_log(log: &mut FoodLog) {
    log.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_entries_summary() {
        let mut log = FoodLog::new();
        add_entry(&mut log, "Apple", 95).unwrap();
        add_entry(&mut log, "Bread", 120).unwrap();

        let summary = compute_summary(&log, 2000);
        assert_eq!(summary, LogSummary { consumed: 215, remaining: 1785 });
    }

    #[test]
    fn test_invalid_entry_leaves_log_unchanged() {
        let mut log = FoodLog::new();
        add_entry(&mut log, "Apple", 95).unwrap();

        assert_eq!(add_entry(&mut log, " ", 50), Err(ValidationError::EmptyName));
        assert_eq!(
            add_entry(&mut log, "Water", 0),
            Err(ValidationError::NonPositiveCalories(0))
        );
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_delete_first_shifts_second() {
        let mut log = FoodLog::new();
        add_entry(&mut log, "Apple", 95).unwrap();
        add_entry(&mut log, "Bread", 120).unwrap();

        let removed = delete_entry(&mut log, 0).unwrap();
        assert_eq!(removed.name(), "Apple");
        assert_eq!(log.get(0).map(FoodEntry::name), Some("Bread"));
        assert_eq!(compute_summary(&log, 2000), LogSummary { consumed: 120, remaining: 1880 });
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut log = FoodLog::new();
        add_entry(&mut log, "Apple", 95).unwrap();

        assert_eq!(delete_entry(&mut log, 1), None);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_over_goal_remaining_is_negative() {
        let mut log = FoodLog::new();
        add_entry(&mut log, "Pizza", 2300).unwrap();

        assert_eq!(compute_summary(&log, 2000), LogSummary { consumed: 2300, remaining: -300 });
    }

    #[test]
    fn test_total_overflow_is_rejected() {
        let mut log = FoodLog::new();
        add_entry(&mut log, "Huge", i64::MAX).unwrap();

        assert_eq!(
            add_entry(&mut log, "Apple", 1),
            Err(ValidationError::CalorieTotalOverflow(1))
        );
        assert_eq!(log.len(), 1);
        assert_eq!(compute_summary(&log, 2000), LogSummary {
            consumed: i64::MAX,
            remaining: 2000 - i64::MAX,
        });
    }

    #[test]
    fn test_remaining_saturates() {
        let mut log = FoodLog::new();
        add_entry(&mut log, "Huge", i64::MAX).unwrap();

        let summary = compute_summary(&log, -2);
        assert_eq!(summary.consumed, i64::MAX);
        assert_eq!(summary.remaining, i64::MIN);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let mut log = FoodLog::new();
        add_entry(&mut log, "Apple", 95).unwrap();

        assert_eq!(compute_summary(&log, 1800), compute_summary(&log, 1800));
    }

    #[test]
    fn test_reset_clears() {
        let mut log = FoodLog::new();
        add_entry(&mut log, "Apple", 95).unwrap();
        reset_log(&mut log);

        assert!(log.is_empty());
        assert_eq!(compute_summary(&log, 2000), LogSummary { consumed: 0, remaining: 2000 });
    }
}

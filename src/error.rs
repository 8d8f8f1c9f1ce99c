//! Error types
//!
//! Validation, precondition and storage failures surfaced by tracker operations.

use thiserror::Error;

use crate::storage::StorageError;

/// Invalid food entry input. The log is left unmodified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Food name must not be empty")]
    EmptyName,

    #[error("Calories must be greater than zero (got {0})")]
    NonPositiveCalories(i64),

    #[error("Adding {0} kcal would overflow the log's calorie total")]
    CalorieTotalOverflow(i64),
}

/// Degenerate numeric or categorical input to the calculation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreconditionViolation {
    #[error("Weekly rate must be a positive number of kg/week (got {0})")]
    NonPositiveWeeklyRate(f64),

    #[error("Unknown sex '{0}', expected 'male' or 'female'")]
    UnknownSex(String),

    #[error("Exercise duration must not be negative (got {0})")]
    NegativeDuration(f64),

    #[error("{field} must be positive (got {value})")]
    NonPositiveBiometric { field: &'static str, value: f64 },

    #[error("Computed daily goal is negative ({0} kcal)")]
    NegativeGoal(i64),
}

/// Umbrella error for tracker operations
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Precondition violation: {0}")]
    Precondition(#[from] PreconditionViolation),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

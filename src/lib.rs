//! Calorie Tracker Library
//!
//! Daily calorie goal derivation, macro allocation, weight timeline
//! projection and a persisted food log.

pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod storage;
pub mod tracker;

pub use config::{StorageKeys, TrackerConfig};
pub use display::{Confirmation, DisplaySink, GoalReport};
pub use error::{PreconditionViolation, TrackerError, TrackerResult, ValidationError};
pub use storage::{MemoryStorage, SqliteStorage, Storage, StorageError};
pub use tracker::{AppState, Tracker};

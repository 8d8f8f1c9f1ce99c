//! Tracker application state
//!
//! Owns the daily goal and food log, persists them through an injected
//! [`Storage`] provider and pushes rendered state to a [`DisplaySink`].
//! Every mutation writes first and commits to memory only after the write
//! succeeds, so a storage failure leaves the previous state in place.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{StorageKeys, TrackerConfig};
use crate::display::{Confirmation, DisplaySink, GoalReport, RESET_PROMPT};
use crate::error::{PreconditionViolation, TrackerResult};
use crate::ledger;
use crate::models::{ActivityInput, Biometrics, FoodEntry, FoodLog, GoalTimelineInput, LogSummary};
use crate::nutrition::{allocate_macros, goal_breakdown, timeline_for, MacroTargets};
use crate::storage::{SqliteStorage, Storage};

/// Process-wide tracker state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub daily_goal: i64,
    pub food_log: FoodLog,
}

impl AppState {
    pub fn summary(&self) -> LogSummary {
        ledger::compute_summary(&self.food_log, self.daily_goal)
    }

    pub fn macros(&self) -> MacroTargets {
        allocate_macros(self.daily_goal)
    }
}

pub struct Tracker<S: Storage> {
    storage: S,
    keys: StorageKeys,
    state: AppState,
}

impl<S: Storage> Tracker<S> {
    /// Load the persisted goal and log, defaulting to 0 and empty
    pub fn load(storage: S, keys: StorageKeys) -> TrackerResult<Self> {
        let daily_goal: i64 = storage.load(&keys.goal, 0)?;
        let food_log: FoodLog = storage.load(&keys.food_log, FoodLog::new())?;

        debug!(daily_goal, entries = food_log.len(), "tracker state loaded");

        Ok(Self {
            storage,
            keys,
            state: AppState {
                daily_goal,
                food_log,
            },
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn daily_goal(&self) -> i64 {
        self.state.daily_goal
    }

    pub fn food_log(&self) -> &FoodLog {
        &self.state.food_log
    }

    pub fn summary(&self) -> LogSummary {
        self.state.summary()
    }

    pub fn macros(&self) -> MacroTargets {
        self.state.macros()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Compute and persist a new daily goal.
    ///
    /// All inputs are validated before anything is computed or stored. A goal
    /// that comes out negative is rejected and nothing is written.
    pub fn set_goal(
        &mut self,
        biometrics: &Biometrics,
        activity: &ActivityInput,
        timeline: &GoalTimelineInput,
    ) -> TrackerResult<GoalReport> {
        biometrics.validate()?;
        activity.validate()?;
        timeline.validate()?;

        let breakdown = goal_breakdown(biometrics, activity);
        if breakdown.daily_goal < 0 {
            warn!(daily_goal = breakdown.daily_goal, bmr = breakdown.bmr, "rejected negative goal");
            return Err(PreconditionViolation::NegativeGoal(breakdown.daily_goal).into());
        }

        let report = GoalReport {
            bmr: breakdown.bmr,
            exercise: breakdown.exercise,
            daily_goal: breakdown.daily_goal,
            macros: allocate_macros(breakdown.daily_goal),
            timeline: timeline_for(timeline)?,
        };

        self.storage.save(&self.keys.goal, &report.daily_goal)?;
        self.state.daily_goal = report.daily_goal;

        info!(
            daily_goal = report.daily_goal,
            bmr = report.bmr,
            exercise = report.exercise,
            "daily goal set"
        );
        Ok(report)
    }

    /// Validate and append a food entry
    pub fn add_entry(&mut self, name: &str, calories: i64) -> TrackerResult<LogSummary> {
        let mut log = self.state.food_log.clone();
        if let Err(e) = ledger::add_entry(&mut log, name, calories) {
            warn!(error = %e, "rejected food entry");
            return Err(e.into());
        }

        self.commit_log(log)?;
        debug!(name = name.trim(), calories, "food entry added");
        Ok(self.summary())
    }

    /// Remove the entry at `index`.
    ///
    /// Out of range is a no-op: nothing is written and `None` is returned.
    pub fn delete_entry(&mut self, index: usize) -> TrackerResult<Option<FoodEntry>> {
        let mut log = self.state.food_log.clone();
        let Some(removed) = ledger::delete_entry(&mut log, index) else {
            warn!(index, len = log.len(), "delete index out of range");
            return Ok(None);
        };

        self.commit_log(log)?;
        debug!(index, name = removed.name(), "food entry deleted");
        Ok(Some(removed))
    }

    /// Clear the log after the user confirms. Returns whether it was cleared.
    pub fn reset_log<C: Confirmation + ?Sized>(&mut self, confirmation: &mut C) -> TrackerResult<bool> {
        if !confirmation.confirm(RESET_PROMPT) {
            debug!("food log reset cancelled");
            return Ok(false);
        }

        let mut log = self.state.food_log.clone();
        ledger::reset_log(&mut log);
        self.commit_log(log)?;

        info!("food log reset");
        Ok(true)
    }

    /// Push goal, macros, summary and log to the display
    pub fn render<D: DisplaySink + ?Sized>(&self, sink: &mut D) {
        sink.show_goal(self.state.daily_goal);
        sink.show_macros(&self.macros());
        sink.show_summary(&self.summary());
        sink.show_log(&self.state.food_log);
    }

    /// Push a goal report's timeline and feedback messages, then the state
    pub fn render_goal_report<D: DisplaySink + ?Sized>(&self, report: &GoalReport, sink: &mut D) {
        sink.show_timeline(&report.timeline.message());
        sink.show_feedback(&report.feedback_message());
        self.render(sink);
    }

    fn commit_log(&mut self, log: FoodLog) -> TrackerResult<()> {
        self.storage.save(&self.keys.food_log, &log)?;
        self.state.food_log = log;
        Ok(())
    }
}

impl Tracker<SqliteStorage> {
    /// Open the SQLite database named by `config` and load its state
    pub fn open(config: &TrackerConfig) -> TrackerResult<Self> {
        info!(path = %config.database_path.display(), "opening tracker database");
        let storage = SqliteStorage::open(&config.database_path)?;
        Self::load(storage, config.keys.clone())
    }
}

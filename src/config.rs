//! Runtime configuration
//!
//! Database location and storage keys, read from the environment.

use std::path::{Path, PathBuf};

/// Environment variable overriding the database file
pub const DATABASE_PATH_ENV: &str = "CALTRACK_DATABASE_PATH";
/// Environment variable overriding the goal storage key
pub const GOAL_KEY_ENV: &str = "CALTRACK_GOAL_KEY";
/// Environment variable overriding the food log storage key
pub const FOOD_LOG_KEY_ENV: &str = "CALTRACK_FOOD_LOG_KEY";

pub const DEFAULT_GOAL_KEY: &str = "calorie_goal";
pub const DEFAULT_FOOD_LOG_KEY: &str = "food_log";

/// Storage keys for the two persisted values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub goal: String,
    pub food_log: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL_KEY.to_string(),
            food_log: DEFAULT_FOOD_LOG_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub database_path: PathBuf,
    pub keys: StorageKeys,
}

impl TrackerConfig {
    /// Build the configuration from environment variables, falling back to
    /// defaults
    pub fn from_env() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));

        Self {
            database_path: resolve_database_path(std::env::var(DATABASE_PATH_ENV).ok(), exe_dir),
            keys: StorageKeys {
                goal: std::env::var(GOAL_KEY_ENV).unwrap_or_else(|_| DEFAULT_GOAL_KEY.to_string()),
                food_log: std::env::var(FOOD_LOG_KEY_ENV)
                    .unwrap_or_else(|_| DEFAULT_FOOD_LOG_KEY.to_string()),
            },
        }
    }
}

/// Explicit path wins; otherwise `data/calorie_tracker.db` under the project
/// root, found by stepping out of `target/{debug,release}`.
pub fn resolve_database_path(explicit: Option<String>, exe_dir: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }

    let mut path = exe_dir.unwrap_or_else(|| PathBuf::from("."));

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(Path::parent) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("data");
    path.push("calorie_tracker.db");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_database_path(
            Some("/tmp/custom.db".to_string()),
            Some(PathBuf::from("/opt/app/target/release")),
        );
        assert_eq!(path, PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn test_strips_target_dir() {
        let path = resolve_database_path(None, Some(PathBuf::from("/opt/app/target/debug")));
        assert_eq!(path, PathBuf::from("/opt/app/data/calorie_tracker.db"));
    }

    #[test]
    fn test_installed_binary_dir() {
        let path = resolve_database_path(Some("  ".to_string()), Some(PathBuf::from("/usr/local/bin")));
        assert_eq!(path, PathBuf::from("/usr/local/bin/data/calorie_tracker.db"));
    }

    #[test]
    fn test_default_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.goal, "calorie_goal");
        assert_eq!(keys.food_log, "food_log");
    }
}

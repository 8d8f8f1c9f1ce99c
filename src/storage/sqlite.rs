//! SQLite-backed storage provider
//!
//! Stores JSON values in the `kv_store` table.

use std::path::Path;

use rusqlite::params;

use super::{Storage, StorageResult};
use crate::db::{migrations, Database};

/// Persistent key-value storage on top of a pooled SQLite database
#[derive(Clone)]
pub struct SqliteStorage {
    db: Database,
}

impl SqliteStorage {
    /// Open the database file at `path`, creating parent directories and
    /// running migrations
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!(path = %path.display(), "opening sqlite storage");
        Self::with_database(Database::new(path)?)
    }

    /// Open a fresh in-memory database
    pub fn in_memory() -> StorageResult<Self> {
        Self::with_database(Database::in_memory()?)
    }

    fn with_database(db: Database) -> StorageResult<Self> {
        db.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            let version = migrations::get_schema_version(conn)?;
            tracing::debug!(version, "database schema ready");
            Ok(())
        })?;

        Ok(Self { db })
    }
}

impl Storage for SqliteStorage {
    fn save_raw(&self, key: &str, value: &str) -> StorageResult<()> {
        self.db.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO kv_store (key, value)
                VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = datetime('now')
                "#,
                params![key, value],
            )?;
            Ok(())
        })?;
        Ok(())
    }

    fn load_raw(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self.db.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT value FROM kv_store WHERE key = ?1")?;

            let result = stmt.query_row([key], |row| row.get::<_, String>(0));
            match result {
                Ok(value) => Ok(Some(value)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })?;
        Ok(value)
    }
}

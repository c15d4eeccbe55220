//! Load, save, and erase operations for the course collection snapshot.

use log::warn;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Course,
};

const SELECT_SNAPSHOT_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_SNAPSHOT_SQL: &str = "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)";
const DELETE_SNAPSHOT_SQL: &str = "DELETE FROM kv_store WHERE key = ?1";

impl super::Database {
    /// Loads the persisted course collection.
    ///
    /// A missing key or a payload that fails to parse degrades to the empty
    /// collection; corruption is logged but never surfaced as an error, so
    /// startup always succeeds.
    pub fn load_courses(&self) -> Result<Vec<Course>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_SNAPSHOT_SQL, params![super::STORAGE_KEY], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to read course snapshot")?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(courses) => Ok(courses),
            Err(e) => {
                warn!("Discarding unparseable course snapshot: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Serializes the full collection and writes it under the fixed key.
    ///
    /// Called after every mutation; the previous snapshot is replaced
    /// wholesale.
    pub fn save_courses(&mut self, courses: &[Course]) -> Result<()> {
        let payload = serde_json::to_string(courses)?;
        self.connection
            .execute(UPSERT_SNAPSHOT_SQL, params![super::STORAGE_KEY, payload])
            .db_context("Failed to write course snapshot")?;
        Ok(())
    }

    /// Erases the persisted snapshot entirely.
    pub fn clear_courses(&mut self) -> Result<()> {
        self.connection
            .execute(DELETE_SNAPSHOT_SQL, params![super::STORAGE_KEY])
            .db_context("Failed to erase course snapshot")?;
        Ok(())
    }

    /// Writes a raw payload under the fixed key, bypassing serialization.
    ///
    /// Test hook for exercising the corrupt-snapshot fallback.
    #[doc(hidden)]
    pub fn write_raw_snapshot(&mut self, payload: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_SNAPSHOT_SQL, params![super::STORAGE_KEY, payload])
            .db_context("Failed to write raw snapshot")?;
        Ok(())
    }
}

//! High-level course store API.
//!
//! This module provides the main [`CourseStore`] interface, the single owner
//! of the authoritative course collection. Every mutation runs as
//! load-snapshot, apply-in-memory, write-snapshot: the collection is read
//! from the key/value store, changed in memory, and written back in full
//! under the fixed key. Reads never persist.
//!
//! Operations are async and run the synchronous SQLite work on a blocking
//! task, keeping the store usable from async callers without holding a
//! connection across await points.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`CourseStore`] instances
//! - [`course_ops`]: Course-level operations (add, list, update, remove, clear)
//! - [`module_ops`]: Module-level operations (add, toggle seen)
//!
//! # Usage
//!
//! ```rust,no_run
//! use coursetime_core::{params::AddCourse, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("courses.db"))
//!     .build()
//!     .await?;
//!
//! let course = store
//!     .add_course(&AddCourse {
//!         title: "Operating Systems".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Created course {}", course.id);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;
use uuid::Uuid;

use crate::{
    db::Database,
    error::{Result, StoreError},
};

pub mod builder;
pub mod course_ops;
pub mod module_ops;

#[cfg(test)]
mod tests;

pub use builder::StoreBuilder;

/// Main store interface owning the course collection.
pub struct CourseStore {
    pub(crate) db_path: PathBuf,
}

impl CourseStore {
    /// Creates a new store with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Runs a closure against a fresh database handle on a blocking task.
    ///
    /// All store operations funnel through here; each gets its own
    /// connection for the duration of the call.
    pub(crate) async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Generates a fresh opaque identifier for courses and modules.
pub(crate) fn fresh_id() -> String {
    Uuid::new_v4().simple().to_string()
}

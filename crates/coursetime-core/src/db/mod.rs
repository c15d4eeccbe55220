//! Snapshot storage for the course collection.
//!
//! The persistence layer is a single SQLite table acting as a key/value
//! store, with the whole course collection JSON-serialized under one fixed
//! key. Every mutation rewrites the full value; there is no incremental
//! persistence.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod snapshot;

/// Fixed key the course collection snapshot is stored under.
pub const STORAGE_KEY: &str = "course_time_data";

/// Database connection and snapshot operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Creates the key/value table from the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}

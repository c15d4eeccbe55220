//! Core library for the CourseTime course tracking application.
//!
//! This crate provides the business logic for tracking courses and their
//! modules: data models, the snapshot key/value store, the [`CourseStore`]
//! owning all mutations, and display wrappers for terminal output.
//!
//! # State and persistence model
//!
//! The authoritative state is a newest-first sequence of [`models::Course`]
//! records. Every mutating operation serializes the entire collection as one
//! JSON array and writes it under a single fixed key in a SQLite key/value
//! table. A missing or corrupt snapshot loads as the empty collection; it
//! never aborts startup.
//!
//! A course's `status` is a derived cache: `completed` exactly when the
//! course has at least one module and all are seen. It is recomputed after
//! every change to the module list or a seen flag, never on read, and
//! metadata edits leave it alone.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use coursetime_core::{
//!     params::{AddCourse, AddModule},
//!     StoreBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("courses.db"))
//!     .build()
//!     .await?;
//!
//! let course = store
//!     .add_course(&AddCourse {
//!         title: "Algorithms".to_string(),
//!         instructor: Some("D. Knuth".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! store
//!     .add_module(&AddModule {
//!         course_id: course.id.clone(),
//!         title: "Week 1".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{CourseSummaries, CreateResult, DeleteResult, Modules, OperationStatus, UpdateResult};
pub use error::{Result, StoreError};
pub use models::{Course, CourseStatus, CourseSummary, Module, ViewFilter};
pub use params::{AddCourse, AddModule, Id, ListCourses, RemoveCourse, ToggleModule, UpdateCourse};
pub use store::{CourseStore, StoreBuilder};

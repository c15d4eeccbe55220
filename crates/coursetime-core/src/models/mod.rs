//! Data models for courses and modules.
//!
//! This module contains the core domain models of the CourseTime tracker.
//! Display implementations live in [`crate::display::models`] to keep data
//! structures and presentation logic separate.
//!
//! The serde derives on [`Course`] and [`Module`] define the persisted
//! snapshot layout: the whole collection serializes as one JSON array of
//! courses with modules nested under `modules`.

pub mod course;
pub mod filters;
pub mod module;
pub mod status;
pub mod summary;


// Re-export all public types at the models level
pub use course::Course;
pub use filters::ViewFilter;
pub use module::Module;
pub use status::CourseStatus;
pub use summary::CourseSummary;

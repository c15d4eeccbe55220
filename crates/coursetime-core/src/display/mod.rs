//! Display formatting for courses, modules, and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results
//! so the same data can be formatted differently by context (a dashboard
//! list vs. a single course card vs. a creation confirmation). All output is
//! markdown, rendered by the CLI's terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (CourseSummaries, Modules)
//! - [`results`]: Operation result wrappers (CreateResult, UpdateResult,
//!   DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`models`]: Display implementations for domain models

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{CourseSummaries, Modules};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;

/// Formats a timestamp in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
///
/// Wrapper over a borrowed [`Timestamp`] so display code can interpolate
/// creation times without converting eagerly.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

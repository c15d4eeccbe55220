//! View filter for querying courses.

use std::str::FromStr;

use super::{Course, CourseStatus};

/// Dashboard view filter over the course collection.
///
/// Filtering is a pure read: it preserves store order (newest first) and
/// triggers no persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFilter {
    /// Every course
    All,

    /// Courses not definitively completed
    #[default]
    InProgress,

    /// Courses with `Completed` status or derivably all-seen
    Completed,
}

impl ViewFilter {
    /// Whether a course satisfies this filter criterion.
    ///
    /// A course counts as completed when its cached status says so or when
    /// its module state is derivably all-seen (non-empty list, every module
    /// seen). `InProgress` is the exact complement, so the two criteria
    /// always partition the collection.
    pub fn matches(&self, course: &Course) -> bool {
        let completed = course.status == CourseStatus::Completed || course.all_seen();
        match self {
            ViewFilter::All => true,
            ViewFilter::Completed => completed,
            ViewFilter::InProgress => !completed,
        }
    }
}

impl FromStr for ViewFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ViewFilter::All),
            "inprogress" | "in_progress" => Ok(ViewFilter::InProgress),
            "completed" => Ok(ViewFilter::Completed),
            _ => Err(format!("Invalid view filter: {s}")),
        }
    }
}

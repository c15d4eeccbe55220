//! Course summary type with module statistics.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Course, CourseStatus};

/// Summary information about a course for list display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSummary {
    /// Course ID
    pub id: String,
    /// Title of the course
    pub title: String,
    /// Instructor name, if any
    pub instructor: Option<String>,
    /// Hosting platform, if any
    pub platform: Option<String>,
    /// Completion status
    pub status: CourseStatus,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Total number of modules
    pub total_modules: u32,
    /// Number of modules marked seen
    pub seen_modules: u32,
    /// Rounded completion percentage (0 when there are no modules)
    pub percent_complete: u32,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            title: course.title.clone(),
            instructor: course.instructor.clone(),
            platform: course.platform.clone(),
            status: course.status,
            created_at: course.created_at,
            total_modules: course.modules.len() as u32,
            seen_modules: course.seen_count() as u32,
            percent_complete: course.percent_complete(),
        }
    }
}

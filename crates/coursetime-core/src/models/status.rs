//! Completion status enumeration for courses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of course completion statuses.
///
/// The status is a derived cache of the all-seen condition over a course's
/// modules: a course is `Completed` exactly when it has at least one module
/// and every module has been seen. It is recomputed after every operation
/// that changes the module list or a seen flag, never on read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    /// Course still has unseen modules (or none at all)
    #[default]
    InProgress,

    /// Every module of the course has been seen
    Completed,
}

impl FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inprogress" | "in_progress" => Ok(CourseStatus::InProgress),
            "completed" => Ok(CourseStatus::Completed),
            _ => Err(format!("Invalid course status: {s}")),
        }
    }
}

impl CourseStatus {
    /// Convert to the snapshot string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::InProgress => "inprogress",
            CourseStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coursetime_core::models::CourseStatus;
    ///
    /// assert_eq!(CourseStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(CourseStatus::InProgress.with_icon(), "➤ In Progress");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            CourseStatus::Completed => "✓ Completed",
            CourseStatus::InProgress => "➤ In Progress",
        }
    }
}

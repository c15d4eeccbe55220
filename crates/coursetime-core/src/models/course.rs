//! Course model definition and derived state.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{CourseStatus, Module};

/// Represents a tracked course with metadata and an ordered module list.
///
/// Serialized field names match the persisted snapshot layout: `createdAt`
/// in camelCase, optional fields omitted when absent, `status` as a
/// lowercase string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Opaque unique identifier, assigned at creation
    pub id: String,

    /// Title of the course
    pub title: String,

    /// Optional instructor name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,

    /// Optional platform/site the course is hosted on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional text-encoded cover image, treated as an opaque payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Derived completion status (cache of the all-seen condition)
    #[serde(default)]
    pub status: CourseStatus,

    /// Modules in insertion order (= display order)
    #[serde(default)]
    pub modules: Vec<Module>,

    /// Timestamp when the course was created (UTC)
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

impl Course {
    /// True when the course has at least one module and all are seen.
    pub fn all_seen(&self) -> bool {
        !self.modules.is_empty() && self.modules.iter().all(|m| m.seen)
    }

    /// Number of modules marked as seen.
    pub fn seen_count(&self) -> usize {
        self.modules.iter().filter(|m| m.seen).count()
    }

    /// Rounded completion percentage, 0 when the course has no modules.
    pub fn percent_complete(&self) -> u32 {
        let total = self.modules.len();
        if total == 0 {
            return 0;
        }
        (self.seen_count() as f64 / total as f64 * 100.0).round() as u32
    }

    /// Recompute the derived status from the current module state.
    ///
    /// Invoked after every operation that changes the module list or a seen
    /// flag. Metadata edits never call this.
    pub fn recompute_status(&mut self) {
        self.status = if self.all_seen() {
            CourseStatus::Completed
        } else {
            CourseStatus::InProgress
        };
    }

    /// Look up a module by id.
    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// Look up a module by id, mutably.
    pub fn module_mut(&mut self, module_id: &str) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.id == module_id)
    }
}

//! Module model definition.

use serde::{Deserialize, Serialize};

/// Represents an individual module ("chapter") within a course.
///
/// Modules carry a single piece of mutable state: the `seen` flag. They are
/// appended to a course in watch order and are never deleted once added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Module {
    /// Opaque unique identifier, unique within the parent course
    pub id: String,

    /// Title of the module
    pub title: String,

    /// Optional free-text notes (links, remarks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Optional duration label (free text such as "12:34", not parsed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Whether the module has been watched
    #[serde(default)]
    pub seen: bool,
}

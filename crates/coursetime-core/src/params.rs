//! Parameter structures for course store operations
//!
//! Shared parameter structures usable across interfaces (CLI today, others
//! later) without framework-specific derives. Interface layers wrap these
//! with their own derives (clap args, etc.) and convert via `From` impls,
//! keeping the core free of UI framework dependencies.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, StoreError},
    models::ViewFilter,
};

/// Generic parameters for operations requiring just a course ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the course to operate on
    pub id: String,
}

/// Parameters for creating a new course.
///
/// The course always starts with an empty module list, `InProgress` status,
/// and `created_at` set to the current time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddCourse {
    /// Title of the course (required, non-empty after trimming)
    pub title: String,
    /// Optional instructor name
    pub instructor: Option<String>,
    /// Optional platform/site name
    pub platform: Option<String>,
    /// Optional free-text description
    pub description: Option<String>,
    /// Optional pre-encoded cover image payload (opaque to the store)
    pub image: Option<String>,
}

/// Parameters for patching course metadata.
///
/// Every field except `id` is optional; unspecified fields are left
/// unchanged. Metadata edits never alter `status` or the module list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourse {
    /// ID of the course to update (required)
    pub id: String,
    /// Updated title (must be non-empty when provided)
    pub title: Option<String>,
    /// Updated instructor name
    pub instructor: Option<String>,
    /// Updated platform name
    pub platform: Option<String>,
    /// Updated description
    pub description: Option<String>,
    /// Updated cover image payload
    pub image: Option<String>,
}

/// Parameters for adding a module to a course.
///
/// The module always starts with `seen = false` and is appended at the end
/// of the course's module list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddModule {
    /// ID of the course to add the module to
    pub course_id: String,
    /// Title of the module (required, non-empty after trimming)
    pub title: String,
    /// Optional free-text notes
    pub notes: Option<String>,
    /// Optional duration label
    pub duration: Option<String>,
}

/// Parameters for toggling a module's seen flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleModule {
    /// ID of the parent course
    pub course_id: String,
    /// ID of the module to toggle
    pub module_id: String,
}

/// Parameters for removing a course and all its modules.
///
/// The confirmation prompt is owned by the caller; the `confirmed` flag
/// records its outcome. The store refuses unconfirmed removals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveCourse {
    /// ID of the course to remove
    pub id: String,
    /// Whether the caller's confirmation prompt was accepted
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for listing courses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCourses {
    /// Which dashboard view to return
    #[serde(default, with = "filter_str")]
    pub filter: ViewFilter,
}

mod filter_str {
    //! Serialize the view filter as its lowercase criterion name.

    use std::str::FromStr;

    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::models::ViewFilter;

    pub fn serialize<S: Serializer>(filter: &ViewFilter, ser: S) -> Result<S::Ok, S::Error> {
        let name = match filter {
            ViewFilter::All => "all",
            ViewFilter::InProgress => "inprogress",
            ViewFilter::Completed => "completed",
        };
        ser.serialize_str(name)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<ViewFilter, D::Error> {
        let raw = String::deserialize(de)?;
        ViewFilter::from_str(&raw).map_err(D::Error::custom)
    }
}

/// Validate a required title field, returning the trimmed value.
///
/// Both course and module titles must be non-empty after trimming
/// whitespace. Callers are expected to validate before reaching the store,
/// but the store re-checks so that no caller can corrupt the collection.
pub(crate) fn validate_title(field: &str, title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(StoreError::invalid_input(
            field,
            "Title must not be empty or whitespace-only",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_title_trims_whitespace() {
        let title = validate_title("title", "  Rust in Action  ").unwrap();
        assert_eq!(title, "Rust in Action");
    }

    #[test]
    fn validate_title_rejects_empty() {
        let err = validate_title("title", "").unwrap_err();
        match err {
            StoreError::InvalidInput { field, .. } => assert_eq!(field, "title"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn validate_title_rejects_whitespace_only() {
        assert!(validate_title("title", " \t\n ").is_err());
    }

    #[test]
    fn list_courses_filter_roundtrips_as_string() {
        let params = ListCourses {
            filter: ViewFilter::Completed,
        };
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"completed\""));

        let back: ListCourses = serde_json::from_str(&json).unwrap();
        assert_eq!(back.filter, ViewFilter::Completed);
    }
}

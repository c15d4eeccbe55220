//! Tests for the store module.

use tempfile::TempDir;

use super::*;
use crate::{
    models::{CourseStatus, ViewFilter},
    params::{AddCourse, AddModule, Id, ListCourses, RemoveCourse, ToggleModule, UpdateCourse},
};

/// Helper function to create a test store backed by a temp database
async fn create_test_store() -> (TempDir, CourseStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

fn add_params(title: &str) -> AddCourse {
    AddCourse {
        title: title.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_add_course_prepends() {
    let (_temp_dir, store) = create_test_store().await;

    store.add_course(&add_params("First")).await.unwrap();
    store.add_course(&add_params("Second")).await.unwrap();
    store.add_course(&add_params("Third")).await.unwrap();

    let courses = store.list_courses(ViewFilter::All).await.unwrap();
    let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_add_course_starts_in_progress_with_no_modules() {
    let (_temp_dir, store) = create_test_store().await;

    let course = store
        .add_course(&AddCourse {
            title: "  Algorithms  ".to_string(),
            instructor: Some("D. Knuth".to_string()),
            platform: Some("Coursera".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(course.title, "Algorithms"); // trimmed
    assert_eq!(course.status, CourseStatus::InProgress);
    assert!(course.modules.is_empty());
    assert!(!course.id.is_empty());
}

#[tokio::test]
async fn test_add_course_rejects_empty_title() {
    let (_temp_dir, store) = create_test_store().await;

    let result = store.add_course(&add_params("   ")).await;
    assert!(matches!(
        result,
        Err(crate::StoreError::InvalidInput { .. })
    ));

    // The rejected call must not have touched the collection.
    let courses = store.list_courses(ViewFilter::All).await.unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn test_update_course_patches_only_given_fields() {
    let (_temp_dir, store) = create_test_store().await;

    let course = store
        .add_course(&AddCourse {
            title: "Networks".to_string(),
            instructor: Some("Old Instructor".to_string()),
            description: Some("Original description".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let updated = store
        .update_course(&UpdateCourse {
            id: course.id.clone(),
            instructor: Some("New Instructor".to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
        .expect("course should exist");

    assert_eq!(updated.title, "Networks");
    assert_eq!(updated.instructor.as_deref(), Some("New Instructor"));
    assert_eq!(updated.description.as_deref(), Some("Original description"));
    assert_eq!(updated.status, CourseStatus::InProgress);
}

#[tokio::test]
async fn test_update_course_unknown_id_is_noop() {
    let (_temp_dir, store) = create_test_store().await;
    store.add_course(&add_params("Only")).await.unwrap();

    let result = store
        .update_course(&UpdateCourse {
            id: "missing".to_string(),
            title: Some("Renamed".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(result.is_none());

    let courses = store.list_courses(ViewFilter::All).await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Only");
}

#[tokio::test]
async fn test_update_course_never_touches_status() {
    let (_temp_dir, store) = create_test_store().await;

    // Drive a course to Completed, then edit metadata.
    let course = store.add_course(&add_params("Compilers")).await.unwrap();
    let module = store
        .add_module(&AddModule {
            course_id: course.id.clone(),
            title: "Lexing".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();
    store
        .toggle_module_seen(&ToggleModule {
            course_id: course.id.clone(),
            module_id: module.id.clone(),
        })
        .await
        .unwrap();

    let updated = store
        .update_course(&UpdateCourse {
            id: course.id.clone(),
            description: Some("Now with a description".to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, CourseStatus::Completed);
    assert_eq!(updated.modules.len(), 1);
}

#[tokio::test]
async fn test_toggle_derives_completed_and_back() {
    let (_temp_dir, store) = create_test_store().await;

    let course = store.add_course(&add_params("Algorithms")).await.unwrap();
    let week1 = store
        .add_module(&AddModule {
            course_id: course.id.clone(),
            title: "Week1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();
    assert!(!week1.seen);

    // Only module seen: course completes.
    let after_toggle = store
        .toggle_module_seen(&ToggleModule {
            course_id: course.id.clone(),
            module_id: week1.id.clone(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after_toggle.status, CourseStatus::Completed);
    assert!(after_toggle.modules[0].seen);

    // Toggling back reverts to in-progress.
    let after_untoggle = store
        .toggle_module_seen(&ToggleModule {
            course_id: course.id.clone(),
            module_id: week1.id.clone(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after_untoggle.status, CourseStatus::InProgress);
    assert!(!after_untoggle.modules[0].seen);
}

#[tokio::test]
async fn test_add_module_to_completed_course_reverts_status() {
    let (_temp_dir, store) = create_test_store().await;

    let course = store.add_course(&add_params("Algorithms")).await.unwrap();
    let week1 = store
        .add_module(&AddModule {
            course_id: course.id.clone(),
            title: "Week1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();
    store
        .toggle_module_seen(&ToggleModule {
            course_id: course.id.clone(),
            module_id: week1.id,
        })
        .await
        .unwrap();

    // Adding a fresh module recomputes immediately, no toggle needed.
    store
        .add_module(&AddModule {
            course_id: course.id.clone(),
            title: "Week2".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();

    let reloaded = store
        .get_course(&Id {
            id: course.id.clone(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.status, CourseStatus::InProgress);
    assert_eq!(reloaded.modules.len(), 2);
    assert!(reloaded.modules[0].seen);
    assert!(!reloaded.modules[1].seen);
}

#[tokio::test]
async fn test_add_module_unknown_course_is_noop() {
    let (_temp_dir, store) = create_test_store().await;
    store.add_course(&add_params("Only")).await.unwrap();

    let result = store
        .add_module(&AddModule {
            course_id: "missing".to_string(),
            title: "Orphan".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(result.is_none());

    let courses = store.list_courses(ViewFilter::All).await.unwrap();
    assert!(courses[0].modules.is_empty());
}

#[tokio::test]
async fn test_toggle_unknown_ids_are_noops() {
    let (_temp_dir, store) = create_test_store().await;
    let course = store.add_course(&add_params("Solo")).await.unwrap();

    let unknown_course = store
        .toggle_module_seen(&ToggleModule {
            course_id: "missing".to_string(),
            module_id: "whatever".to_string(),
        })
        .await
        .unwrap();
    assert!(unknown_course.is_none());

    let unknown_module = store
        .toggle_module_seen(&ToggleModule {
            course_id: course.id.clone(),
            module_id: "missing".to_string(),
        })
        .await
        .unwrap();
    assert!(unknown_module.is_none());
}

#[tokio::test]
async fn test_remove_course_requires_confirmation() {
    let (_temp_dir, store) = create_test_store().await;
    let course = store.add_course(&add_params("Doomed")).await.unwrap();

    let result = store
        .remove_course(&RemoveCourse {
            id: course.id.clone(),
            confirmed: false,
        })
        .await;
    assert!(matches!(
        result,
        Err(crate::StoreError::InvalidInput { .. })
    ));

    // Still there.
    assert_eq!(store.list_courses(ViewFilter::All).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_course_removes_exactly_one() {
    let (_temp_dir, store) = create_test_store().await;

    store.add_course(&add_params("Keep A")).await.unwrap();
    let doomed = store.add_course(&add_params("Doomed")).await.unwrap();
    store.add_course(&add_params("Keep B")).await.unwrap();

    let removed = store
        .remove_course(&RemoveCourse {
            id: doomed.id.clone(),
            confirmed: true,
        })
        .await
        .unwrap()
        .expect("course should exist");
    assert_eq!(removed.title, "Doomed");

    let courses = store.list_courses(ViewFilter::All).await.unwrap();
    let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Keep B", "Keep A"]);
}

#[tokio::test]
async fn test_remove_course_unknown_id_is_noop() {
    let (_temp_dir, store) = create_test_store().await;
    store.add_course(&add_params("Survivor")).await.unwrap();

    let removed = store
        .remove_course(&RemoveCourse {
            id: "missing".to_string(),
            confirmed: true,
        })
        .await
        .unwrap();
    assert!(removed.is_none());
    assert_eq!(store.list_courses(ViewFilter::All).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_clear_all_empties_store() {
    let (_temp_dir, store) = create_test_store().await;

    store.add_course(&add_params("A")).await.unwrap();
    store.add_course(&add_params("B")).await.unwrap();

    store.clear_all().await.unwrap();

    let courses = store.list_courses(ViewFilter::All).await.unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn test_filters_partition_the_collection() {
    let (_temp_dir, store) = create_test_store().await;

    // Completed course: one seen module.
    let done = store.add_course(&add_params("Done")).await.unwrap();
    let m = store
        .add_module(&AddModule {
            course_id: done.id.clone(),
            title: "Only".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();
    store
        .toggle_module_seen(&ToggleModule {
            course_id: done.id.clone(),
            module_id: m.id,
        })
        .await
        .unwrap();

    // In-progress course with an unseen module, plus an empty course.
    let wip = store.add_course(&add_params("WIP")).await.unwrap();
    store
        .add_module(&AddModule {
            course_id: wip.id.clone(),
            title: "Unseen".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    store.add_course(&add_params("Empty")).await.unwrap();

    let all = store.list_courses(ViewFilter::All).await.unwrap();
    assert_eq!(all.len(), 3);

    let completed = store.list_courses(ViewFilter::Completed).await.unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "Done");

    let in_progress = store.list_courses(ViewFilter::InProgress).await.unwrap();
    let titles: Vec<&str> = in_progress.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Empty", "WIP"]);
}

#[tokio::test]
async fn test_list_summaries_includes_progress() {
    let (_temp_dir, store) = create_test_store().await;

    let course = store.add_course(&add_params("Stats")).await.unwrap();
    let m1 = store
        .add_module(&AddModule {
            course_id: course.id.clone(),
            title: "One".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();
    store
        .add_module(&AddModule {
            course_id: course.id.clone(),
            title: "Two".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    store
        .toggle_module_seen(&ToggleModule {
            course_id: course.id.clone(),
            module_id: m1.id,
        })
        .await
        .unwrap();

    let summaries = store
        .list_summaries(&ListCourses {
            filter: ViewFilter::All,
        })
        .await
        .unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_modules, 2);
    assert_eq!(summaries[0].seen_modules, 1);
    assert_eq!(summaries[0].percent_complete, 50);
}

#[tokio::test]
async fn test_get_course_not_found() {
    let (_temp_dir, store) = create_test_store().await;

    let result = store
        .get_course(&Id {
            id: "missing".to_string(),
        })
        .await
        .unwrap();
    assert!(result.is_none());
}

//! Course operations for the CourseStore.

use jiff::Timestamp;
use log::debug;

use super::{fresh_id, CourseStore};
use crate::{
    display::CourseSummaries,
    error::Result,
    models::{Course, CourseStatus, CourseSummary, ViewFilter},
    params::{self, AddCourse, Id, ListCourses, RemoveCourse, UpdateCourse},
};

impl CourseStore {
    /// Creates a new course and prepends it to the collection.
    ///
    /// The course starts with an empty module list, `InProgress` status, and
    /// the current time as its creation timestamp. Prepending keeps the
    /// collection ordered newest-first. The title is re-validated here so no
    /// caller can insert an empty one.
    pub async fn add_course(&self, params: &AddCourse) -> Result<Course> {
        let title = params::validate_title("title", &params.title)?;
        let params = params.clone();

        self.with_db(move |db| {
            let mut courses = db.load_courses()?;

            let course = Course {
                id: fresh_id(),
                title,
                instructor: params.instructor,
                platform: params.platform,
                description: params.description,
                image: params.image,
                status: CourseStatus::InProgress,
                modules: Vec::new(),
                created_at: Timestamp::now(),
            };

            courses.insert(0, course.clone());
            db.save_courses(&courses)?;
            Ok(course)
        })
        .await
    }

    /// Retrieves a single course by its ID.
    pub async fn get_course(&self, params: &Id) -> Result<Option<Course>> {
        let id = params.id.clone();

        self.with_db(move |db| {
            let courses = db.load_courses()?;
            Ok(courses.into_iter().find(|c| c.id == id))
        })
        .await
    }

    /// Lists courses matching the given view filter, in store order.
    pub async fn list_courses(&self, filter: ViewFilter) -> Result<Vec<Course>> {
        self.with_db(move |db| {
            let courses = db.load_courses()?;
            Ok(courses.into_iter().filter(|c| filter.matches(c)).collect())
        })
        .await
    }

    /// Lists filtered courses as display-ready summaries with module counts.
    pub async fn list_summaries(&self, params: &ListCourses) -> Result<CourseSummaries> {
        let courses = self.list_courses(params.filter).await?;
        let summaries: Vec<CourseSummary> = courses.iter().map(Into::into).collect();
        Ok(CourseSummaries(summaries))
    }

    /// Applies a metadata patch to a course.
    ///
    /// Only the fields present in the patch change; `status` and the module
    /// list are never touched. Returns `None` without persisting anything
    /// when the course ID is unknown.
    pub async fn update_course(&self, params: &UpdateCourse) -> Result<Option<Course>> {
        let title = match &params.title {
            Some(t) => Some(params::validate_title("title", t)?),
            None => None,
        };
        let params = params.clone();

        self.with_db(move |db| {
            let mut courses = db.load_courses()?;

            let Some(course) = courses.iter_mut().find(|c| c.id == params.id) else {
                debug!("update_course: unknown course id {}", params.id);
                return Ok(None);
            };

            if let Some(title) = title {
                course.title = title;
            }
            if let Some(instructor) = params.instructor {
                course.instructor = Some(instructor);
            }
            if let Some(platform) = params.platform {
                course.platform = Some(platform);
            }
            if let Some(description) = params.description {
                course.description = Some(description);
            }
            if let Some(image) = params.image {
                course.image = Some(image);
            }

            let updated = course.clone();
            db.save_courses(&courses)?;
            Ok(Some(updated))
        })
        .await
    }

    /// Removes a course and all its modules.
    ///
    /// The confirmation prompt belongs to the caller; an unconfirmed request
    /// is rejected before the collection is touched. Returns the removed
    /// course, or `None` when the ID is unknown.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if `confirmed` is false
    pub async fn remove_course(&self, params: &RemoveCourse) -> Result<Option<Course>> {
        if !params.confirmed {
            return Err(crate::StoreError::invalid_input(
                "confirmed",
                "Course removal requires explicit confirmation. \
                 Set 'confirmed' to true to proceed.",
            ));
        }
        let id = params.id.clone();

        self.with_db(move |db| {
            let mut courses = db.load_courses()?;

            let Some(position) = courses.iter().position(|c| c.id == id) else {
                debug!("remove_course: unknown course id {id}");
                return Ok(None);
            };

            let removed = courses.remove(position);
            db.save_courses(&courses)?;
            Ok(Some(removed))
        })
        .await
    }

    /// Empties the collection and erases the persisted snapshot.
    pub async fn clear_all(&self) -> Result<()> {
        self.with_db(|db| db.clear_courses()).await
    }
}

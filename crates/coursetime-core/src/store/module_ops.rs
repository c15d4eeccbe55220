//! Module operations for the CourseStore.

use log::debug;

use super::{fresh_id, CourseStore};
use crate::{
    error::Result,
    models::{Course, Module},
    params::{self, AddModule, ToggleModule},
};

impl CourseStore {
    /// Appends a new module to a course.
    ///
    /// The module starts unseen, at the end of the course's module list.
    /// The parent's status is recomputed immediately, so adding a module to
    /// a completed course reverts it to in-progress without waiting for the
    /// next toggle. Returns the created module, or `None` when the course ID
    /// is unknown (nothing persisted).
    pub async fn add_module(&self, params: &AddModule) -> Result<Option<Module>> {
        let title = params::validate_title("title", &params.title)?;
        let params = params.clone();

        self.with_db(move |db| {
            let mut courses = db.load_courses()?;

            let Some(course) = courses.iter_mut().find(|c| c.id == params.course_id) else {
                debug!("add_module: unknown course id {}", params.course_id);
                return Ok(None);
            };

            let module = Module {
                id: fresh_id(),
                title,
                notes: params.notes,
                duration: params.duration,
                seen: false,
            };

            course.modules.push(module.clone());
            course.recompute_status();

            db.save_courses(&courses)?;
            Ok(Some(module))
        })
        .await
    }

    /// Flips the seen flag of a module and recomputes the parent's status.
    ///
    /// The status becomes `Completed` exactly when the module list is
    /// non-empty and every module is seen, otherwise `InProgress`. Returns
    /// the updated course, or `None` when the course or module ID is unknown
    /// (nothing persisted).
    pub async fn toggle_module_seen(&self, params: &ToggleModule) -> Result<Option<Course>> {
        let params = params.clone();

        self.with_db(move |db| {
            let mut courses = db.load_courses()?;

            let Some(course) = courses.iter_mut().find(|c| c.id == params.course_id) else {
                debug!("toggle_module_seen: unknown course id {}", params.course_id);
                return Ok(None);
            };

            let Some(module) = course.module_mut(&params.module_id) else {
                debug!("toggle_module_seen: unknown module id {}", params.module_id);
                return Ok(None);
            };

            module.seen = !module.seen;
            course.recompute_status();

            let updated = course.clone();
            db.save_courses(&courses)?;
            Ok(Some(updated))
        })
        .await
    }
}

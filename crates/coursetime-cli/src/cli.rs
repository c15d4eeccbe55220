//! Command definitions and handlers for the CourseTime CLI.
//!
//! Argument structs carry the clap-specific concerns (flags, aliases, help
//! text) and convert into the framework-free parameter types from
//! `coursetime_core::params`. The [`Cli`] type dispatches parsed commands
//! against the store and renders the outcome.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::{Args, Subcommand, ValueEnum};
use coursetime_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    models::ViewFilter,
    params::{AddCourse, AddModule, Id, ListCourses, RemoveCourse, ToggleModule, UpdateCourse},
    CourseStore,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Add a new course to the catalog
#[derive(Args)]
pub struct AddCourseArgs {
    /// Title of the course
    pub title: String,
    /// Name of the instructor teaching the course
    #[arg(short, long)]
    pub instructor: Option<String>,
    /// Platform hosting the course (e.g. Coursera, YouTube)
    #[arg(short, long)]
    pub platform: Option<String>,
    /// Optional description providing more context about the course
    #[arg(short, long)]
    pub description: Option<String>,
    /// Cover image as a URL or data URL
    #[arg(long, conflicts_with = "image_file")]
    pub image: Option<String>,
    /// Read the cover image from a local file and embed it as a data URL
    #[arg(long)]
    pub image_file: Option<PathBuf>,
}

impl AddCourseArgs {
    /// Convert CLI arguments to core parameters, resolving --image-file
    /// into an embedded data URL.
    pub fn into_params(self) -> Result<AddCourse> {
        let image = resolve_image(self.image, self.image_file)?;
        Ok(AddCourse {
            title: self.title,
            instructor: self.instructor,
            platform: self.platform,
            description: self.description,
            image,
        })
    }
}

/// List courses in the catalog
#[derive(Args)]
pub struct ListCoursesArgs {
    /// Which courses to show
    #[arg(short, long, value_enum, default_value_t = FilterArg::All)]
    pub filter: FilterArg,
}

impl From<ListCoursesArgs> for ListCourses {
    fn from(val: ListCoursesArgs) -> Self {
        ListCourses {
            filter: val.filter.into(),
        }
    }
}

/// Show full details of a specific course
#[derive(Args)]
pub struct ShowCourseArgs {
    /// ID of the course to display
    #[arg(help = "Unique identifier of the course to show details for")]
    pub id: String,
}

impl From<ShowCourseArgs> for Id {
    fn from(val: ShowCourseArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a course's metadata
///
/// Only the fields passed as flags are touched; everything else, including
/// the module list and completion status, is left exactly as it was.
#[derive(Args)]
pub struct UpdateCourseArgs {
    /// ID of the course to update
    pub id: String,
    /// Updated title for the course
    #[arg(short, long)]
    pub title: Option<String>,
    /// Updated instructor name
    #[arg(short, long)]
    pub instructor: Option<String>,
    /// Updated platform name
    #[arg(short, long)]
    pub platform: Option<String>,
    /// Updated description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Updated cover image as a URL or data URL
    #[arg(long, conflicts_with = "image_file")]
    pub image: Option<String>,
    /// Read the updated cover image from a local file
    #[arg(long)]
    pub image_file: Option<PathBuf>,
}

impl UpdateCourseArgs {
    pub fn into_params(self) -> Result<UpdateCourse> {
        let image = resolve_image(self.image, self.image_file)?;
        Ok(UpdateCourse {
            id: self.id,
            title: self.title,
            instructor: self.instructor,
            platform: self.platform,
            description: self.description,
            image,
        })
    }
}

/// Remove a course permanently
#[derive(Args)]
pub struct RemoveCourseArgs {
    /// ID of the course to remove
    #[arg(help = "Unique identifier of the course to permanently remove")]
    pub id: String,
    /// Confirm the removal (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<RemoveCourseArgs> for RemoveCourse {
    fn from(val: RemoveCourseArgs) -> Self {
        RemoveCourse {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum CourseCommands {
    /// Add a new course to the catalog
    #[command(alias = "a")]
    Add(AddCourseArgs),
    /// List courses
    #[command(aliases = ["l", "ls"])]
    List(ListCoursesArgs),
    /// Show full details of a specific course
    #[command(alias = "s")]
    Show(ShowCourseArgs),
    /// Update a course's metadata
    #[command(alias = "u")]
    Update(UpdateCourseArgs),
    /// Remove a course permanently
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveCourseArgs),
}

/// Add a new module to a course
#[derive(Args)]
pub struct AddModuleArgs {
    /// ID of the course to add the module to
    pub course_id: String,
    /// Title of the module
    pub title: String,
    /// Optional notes about the module
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Optional duration label (e.g. "45:00" or "1h 20m")
    #[arg(short, long)]
    pub duration: Option<String>,
}

impl From<AddModuleArgs> for AddModule {
    fn from(val: AddModuleArgs) -> Self {
        AddModule {
            course_id: val.course_id,
            title: val.title,
            notes: val.notes,
            duration: val.duration,
        }
    }
}

/// Toggle a module between seen and unseen
///
/// Flipping the last unseen module marks the whole course as completed;
/// flipping any module back reopens it.
#[derive(Args)]
pub struct ToggleModuleArgs {
    /// ID of the course the module belongs to
    pub course_id: String,
    /// ID of the module to toggle
    pub module_id: String,
}

impl From<ToggleModuleArgs> for ToggleModule {
    fn from(val: ToggleModuleArgs) -> Self {
        ToggleModule {
            course_id: val.course_id,
            module_id: val.module_id,
        }
    }
}

#[derive(Subcommand)]
pub enum ModuleCommands {
    /// Add a new module to a course
    #[command(alias = "a")]
    Add(AddModuleArgs),
    /// Toggle a module between seen and unseen
    #[command(alias = "t")]
    Toggle(ToggleModuleArgs),
}

/// Command-line argument representation of the course view filter
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum FilterArg {
    /// Show every course
    All,
    /// Show only courses still in progress
    Inprogress,
    /// Show only completed courses
    Completed,
}

impl From<FilterArg> for ViewFilter {
    fn from(val: FilterArg) -> Self {
        match val {
            FilterArg::All => ViewFilter::All,
            FilterArg::Inprogress => ViewFilter::InProgress,
            FilterArg::Completed => ViewFilter::Completed,
        }
    }
}

/// Command dispatcher wiring the parsed CLI commands to the course store.
pub struct Cli {
    store: CourseStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: CourseStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub async fn handle_course_command(self, command: CourseCommands) -> Result<()> {
        match command {
            CourseCommands::Add(args) => {
                let params = args.into_params()?;
                let course = self.store.add_course(&params).await?;
                self.renderer.render(&CreateResult::new(course).to_string())
            }
            CourseCommands::List(args) => self.list_courses(&args.into()).await,
            CourseCommands::Show(args) => {
                let params: Id = args.into();
                match self.store.get_course(&params).await? {
                    Some(course) => self.renderer.render(&course.to_string()),
                    None => self.render_not_found("course", &params.id),
                }
            }
            CourseCommands::Update(args) => {
                let params = args.into_params()?;
                let changes = describe_changes(&params);
                if changes.is_empty() {
                    bail!("Nothing to update; pass at least one field flag");
                }
                match self.store.update_course(&params).await? {
                    Some(course) => self
                        .renderer
                        .render(&UpdateResult::with_changes(course, changes).to_string()),
                    None => self.render_not_found("course", &params.id),
                }
            }
            CourseCommands::Remove(args) => {
                let params: RemoveCourse = args.into();
                if !params.confirmed {
                    bail!("Refusing to remove a course without --confirm");
                }
                match self.store.remove_course(&params).await? {
                    Some(course) => self.renderer.render(&DeleteResult::new(course).to_string()),
                    None => self.render_not_found("course", &params.id),
                }
            }
        }
    }

    pub async fn handle_module_command(self, command: ModuleCommands) -> Result<()> {
        match command {
            ModuleCommands::Add(args) => {
                let params: AddModule = args.into();
                match self.store.add_module(&params).await? {
                    Some(module) => self.renderer.render(&CreateResult::new(module).to_string()),
                    None => self.render_not_found("course", &params.course_id),
                }
            }
            ModuleCommands::Toggle(args) => {
                let params: ToggleModule = args.into();
                match self.store.toggle_module_seen(&params).await? {
                    Some(course) => {
                        let mut changes = Vec::new();
                        if let Some(module) = course.module(&params.module_id) {
                            let state = if module.seen { "seen" } else { "unseen" };
                            changes.push(format!("Marked module '{}' as {state}", module.title));
                        }
                        changes.push(format!("Course status: {}", course.status.with_icon()));
                        self.renderer
                            .render(&UpdateResult::with_changes(course, changes).to_string())
                    }
                    None => self.render_not_found("module", &params.module_id),
                }
            }
        }
    }

    pub async fn clear_all(self, confirm: bool) -> Result<()> {
        if !confirm {
            bail!("Refusing to clear all course data without --confirm");
        }
        self.store.clear_all().await?;
        self.renderer
            .render(&OperationStatus::success("All course data cleared").to_string())
    }

    pub async fn list_courses(self, params: &ListCourses) -> Result<()> {
        let summaries = self.store.list_summaries(params).await?;
        let heading = match params.filter {
            ViewFilter::All => "# Courses",
            ViewFilter::InProgress => "# Courses In Progress",
            ViewFilter::Completed => "# Completed Courses",
        };
        self.renderer.render(&format!("{heading}\n\n{summaries}"))
    }

    /// Unknown IDs are reported as a message, not an error exit. The store
    /// treats them as no-ops and so does the CLI.
    fn render_not_found(&self, kind: &str, id: &str) -> Result<()> {
        self.renderer
            .render(&OperationStatus::failure(format!("No {kind} found with ID: {id}")).to_string())
    }
}

/// Pick the image value: an explicit URL wins, otherwise read and embed the
/// file contents as a base64 data URL.
fn resolve_image(image: Option<String>, image_file: Option<PathBuf>) -> Result<Option<String>> {
    match (image, image_file) {
        (Some(url), _) => Ok(Some(url)),
        (None, Some(path)) => encode_image_file(&path).map(Some),
        (None, None) => Ok(None),
    }
}

fn encode_image_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    debug!("Embedding {} byte image from {}", bytes.len(), path.display());

    let mime = match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };

    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

fn describe_changes(params: &UpdateCourse) -> Vec<String> {
    let mut changes = Vec::new();
    if params.title.is_some() {
        changes.push("Updated title".to_string());
    }
    if params.instructor.is_some() {
        changes.push("Updated instructor".to_string());
    }
    if params.platform.is_some() {
        changes.push("Updated platform".to_string());
    }
    if params.description.is_some() {
        changes.push("Updated description".to_string());
    }
    if params.image.is_some() {
        changes.push("Updated cover image".to_string());
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_arg_conversion() {
        assert_eq!(ViewFilter::from(FilterArg::All), ViewFilter::All);
        assert_eq!(
            ViewFilter::from(FilterArg::Inprogress),
            ViewFilter::InProgress
        );
        assert_eq!(
            ViewFilter::from(FilterArg::Completed),
            ViewFilter::Completed
        );
    }

    #[test]
    fn test_explicit_image_url_wins_over_file() {
        let resolved = resolve_image(
            Some("https://example.com/cover.png".to_string()),
            Some(PathBuf::from("/nonexistent/cover.png")),
        )
        .unwrap();
        assert_eq!(resolved.as_deref(), Some("https://example.com/cover.png"));
    }

    #[test]
    fn test_image_file_is_embedded_as_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, b"hi").unwrap();

        let resolved = resolve_image(None, Some(path)).unwrap().unwrap();
        assert_eq!(resolved, "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_missing_image_file_is_an_error() {
        let result = resolve_image(None, Some(PathBuf::from("/nonexistent/cover.png")));
        assert!(result.is_err());
    }

    #[test]
    fn test_describe_changes_tracks_only_provided_fields() {
        let params = UpdateCourse {
            id: "c1".to_string(),
            title: Some("New".to_string()),
            platform: Some("edX".to_string()),
            ..Default::default()
        };
        let changes = describe_changes(&params);
        assert_eq!(changes, ["Updated title", "Updated platform"]);
    }
}

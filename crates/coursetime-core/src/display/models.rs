//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so data structures and markdown
//! presentation stay separate. Course output reads like a dashboard card:
//! title, instructor/platform line, seen/total progress with percentage,
//! then the module checklist.

use std::fmt;

use super::LocalDateTime;
use crate::models::{Course, CourseStatus, CourseSummary, Module};

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        if let Some(instructor) = &self.instructor {
            writeln!(f, "- Instructor: {instructor}")?;
        }
        if let Some(platform) = &self.platform {
            writeln!(f, "- Platform: {platform}")?;
        }
        writeln!(
            f,
            "- Progress: {}/{} modules ({}%)",
            self.seen_count(),
            self.modules.len(),
            self.percent_complete()
        )?;
        if self.image.is_some() {
            writeln!(f, "- Cover image: attached")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.modules.is_empty() {
            writeln!(f, "\nNo modules in this course yet.")?;
        } else {
            writeln!(f, "\n## Modules")?;
            writeln!(f)?;
            for module in &self.modules {
                write!(f, "{module}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.seen { "x" } else { " " };
        write!(f, "- [{marker}] {} (ID: {})", self.title, self.id)?;
        if let Some(duration) = &self.duration {
            write!(f, " — {duration}")?;
        }
        writeln!(f)?;

        if let Some(notes) = &self.notes {
            writeln!(f, "  {notes}")?;
        }

        Ok(())
    }
}

impl fmt::Display for CourseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} ({}/{} modules, {}%)",
            self.title, self.seen_modules, self.total_modules, self.percent_complete
        )?;
        writeln!(f)?;

        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f, "- **Status**: {}", self.status.with_icon())?;

        match (&self.instructor, &self.platform) {
            (Some(instructor), Some(platform)) => {
                writeln!(f, "- **By**: {instructor} on {platform}")?;
            }
            (Some(instructor), None) => writeln!(f, "- **By**: {instructor}")?,
            (None, Some(platform)) => writeln!(f, "- **On**: {platform}")?,
            (None, None) => {}
        }

        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections a Display implementation with graceful
//! empty-collection handling, without bolting title logic onto the models.

use std::{fmt, ops::Index};

use crate::models::{CourseSummary, Module};

/// Newtype wrapper for displaying collections of course summaries.
///
/// Formats each summary with the [`CourseSummary`] Display impl and prints
/// a friendly placeholder for an empty dashboard.
pub struct CourseSummaries(pub Vec<CourseSummary>);

impl CourseSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of course summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the course summary at the given index.
    pub fn get(&self, index: usize) -> Option<&CourseSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the course summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, CourseSummary> {
        self.0.iter()
    }
}

impl Index<usize> for CourseSummaries {
    type Output = CourseSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for CourseSummaries {
    type Item = CourseSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CourseSummaries {
    type Item = &'a CourseSummary;
    type IntoIter = std::slice::Iter<'a, CourseSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CourseSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No courses found.")
        } else {
            for course in &self.0 {
                write!(f, "{course}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a course's module checklist.
pub struct Modules(pub Vec<Module>);

impl Modules {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of modules in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the modules.
    pub fn iter(&self) -> std::slice::Iter<'_, Module> {
        self.0.iter()
    }
}

impl fmt::Display for Modules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No modules found.")
        } else {
            for module in &self.0 {
                write!(f, "{module}")?;
            }
            Ok(())
        }
    }
}

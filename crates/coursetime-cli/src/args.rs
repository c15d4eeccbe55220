use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CourseCommands, ModuleCommands};

/// Main command-line interface for the CourseTime course tracker
///
/// CourseTime keeps a personal catalog of online courses and the modules
/// inside them. Marking modules as seen drives each course's completion
/// status, so the tracker always knows which courses are still in progress
/// and which are done.
#[derive(Parser)]
#[command(version, about, name = "ct")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/coursetime/coursetime.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the CourseTime CLI
///
/// The CLI is organized into three command categories:
/// - `course`: Operations on whole courses (add, list, show, update, remove)
/// - `module`: Operations on modules within a course (add, toggle)
/// - `clear`: Wipe the entire catalog
///
/// Running `ct` without a command lists the courses still in progress.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage courses
    #[command(alias = "c")]
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Manage modules within courses
    #[command(alias = "m")]
    Module {
        #[command(subcommand)]
        command: ModuleCommands,
    },
    /// Remove every course and module from the catalog
    Clear {
        /// Confirm the wipe (required to prevent accidental data loss)
        #[arg(long)]
        confirm: bool,
    },
}

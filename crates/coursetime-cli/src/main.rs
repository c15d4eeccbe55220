//! CourseTime CLI Application
//!
//! Command-line interface for the CourseTime course tracking tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use coursetime_core::{models::ViewFilter, params::ListCourses, StoreBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = StoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize course store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("CourseTime started");

    match command {
        Some(Course { command }) => {
            Cli::new(store, renderer)
                .handle_course_command(command)
                .await
        }
        Some(Module { command }) => {
            Cli::new(store, renderer)
                .handle_module_command(command)
                .await
        }
        Some(Clear { confirm }) => Cli::new(store, renderer).clear_all(confirm).await,
        None => {
            // Bare invocation shows the dashboard's default view.
            Cli::new(store, renderer)
                .list_courses(&ListCourses {
                    filter: ViewFilter::InProgress,
                })
                .await
        }
    }
}

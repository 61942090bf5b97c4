//! enroll CLI Application
//!
//! Command-line interface for managing a course registration plan and
//! reconciling an enrollment page with it.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use enroll_core::PlanStoreBuilder;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = PlanStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open plan store")?;

    let cli = Cli::new(store, TerminalRenderer::new(!no_color));

    info!("enroll started");

    match command {
        Some(Commands::Plan { command }) => cli.handle_plan_command(command).await,
        Some(Commands::Run(args)) => cli.run(args).await,
        None => cli.show_plan().await,
    }
}

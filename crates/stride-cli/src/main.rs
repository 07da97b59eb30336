//! Stride CLI Application
//!
//! Command-line interface for the Stride training coach.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, PlanCommands};
use log::info;
use renderer::TerminalRenderer;
use stride_core::{StrideClientBuilder, StrideError};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        server_url,
        settings_file,
        no_color,
        command,
    } = Args::parse();

    let client = StrideClientBuilder::new()
        .with_settings_file(settings_file)
        .with_server_url(server_url)
        .build()
        .context("Failed to initialize client")?;

    let renderer = TerminalRenderer::new(!no_color, client.settings().current().theme);
    let cli = Cli::new(client, renderer);

    info!("Stride started");

    let result = match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Goal { command }) => cli.handle_goal_command(command).await,
        Some(Schedule { command }) => cli.handle_schedule_command(command).await,
        Some(Profile { command }) => cli.handle_profile_command(command).await,
        Some(Routine { command }) => cli.handle_routine_command(command).await,
        Some(Settings { command }) => cli.handle_settings_command(command),
        None => cli.handle_plan_command(PlanCommands::Show).await,
    };

    if let Err(err) = &result {
        if err
            .downcast_ref::<StrideError>()
            .is_some_and(StrideError::is_transient)
        {
            eprintln!("Nothing was changed. Check the coach service and try again.");
        }
    }
    result
}

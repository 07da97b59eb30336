use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    GoalCommands, PlanCommands, ProfileCommands, RoutineCommands, ScheduleCommands,
    SettingsCommands,
};

/// Command-line client for the Stride training coach
///
/// Shows the coach's plan for today and tomorrow, lets you talk the plan
/// through with the coach, and edits your goals, routines, weekly schedule
/// and profile. Everything is stored by the coach service.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Base URL of the coach service. Overrides the settings file.
    #[arg(long, global = true)]
    pub server_url: Option<String>,

    /// Path to the settings file. Defaults to
    /// $XDG_CONFIG_HOME/stride/settings.json
    #[arg(long, global = true)]
    pub settings_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stride CLI
///
/// Without a command, the current plan is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show or revise the coach's plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage goals, events and routines
    #[command(alias = "g")]
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Show or edit the weekly schedule and the week ahead
    #[command(alias = "s")]
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Show or change the athlete profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Work with routine text offline
    #[command(alias = "r")]
    Routine {
        #[command(subcommand)]
        command: RoutineCommands,
    },
    /// Show or change local settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

//! Command definitions and handlers.
//!
//! Argument structs carry clap attributes and convert into core types
//! (`GoalDraft`, `DaySlot`, `BlockEdit`, `ProfileChanges`) so the core crate
//! stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Types → Sessions → Display → Renderer
//! ```

use anyhow::{anyhow, bail, Context, Result};
use clap::{builder::PossibleValuesParser, Args, Subcommand, ValueEnum};
use jiff::{civil::Date, Zoned};
use log::debug;
use stride_core::{
    display::{DayCard, SyncReports, Transcript, WeekAhead},
    models::{parse_weekday, Height, ScheduleEntry, Weight, AI_MODELS},
    BlockEdit, CreateResult, DaySlot, DeleteResult, GoalDraft, GoalType, Goals, OperationStatus,
    ProfileChanges, RevisionOutcome, Routine, RoutineDraft, StrideClient, Theme, Units,
    UpdateResult,
};
use tokio::io::{self, AsyncBufReadExt, AsyncReadExt, BufReader};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Plan
// ============================================================================

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate (or fetch) and show the plan
    #[command(alias = "s")]
    Show,
    /// Ask the coach to change one day of the plan
    #[command(alias = "r")]
    Revise(ReviseArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DayArg {
    Today,
    Tomorrow,
}

impl From<DayArg> for DaySlot {
    fn from(val: DayArg) -> Self {
        match val {
            DayArg::Today => DaySlot::Today,
            DayArg::Tomorrow => DaySlot::Tomorrow,
        }
    }
}

/// Ask the coach to change one day of the plan
#[derive(Args)]
pub struct ReviseArgs {
    #[arg(short, long, value_enum, default_value = "today", help = "Day to revise")]
    pub day: DayArg,
    #[arg(required = true, help = "What you would like to change")]
    pub message: Vec<String>,
}

// ============================================================================
// Goals
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum GoalTypeArg {
    ShortTerm,
    LongTerm,
    Preference,
}

impl From<GoalTypeArg> for GoalType {
    fn from(val: GoalTypeArg) -> Self {
        match val {
            GoalTypeArg::ShortTerm => GoalType::ShortTerm,
            GoalTypeArg::LongTerm => GoalType::LongTerm,
            GoalTypeArg::Preference => GoalType::Preference,
        }
    }
}

/// Add a goal, event or routine
///
/// A goal with `--date` is saved as an event. A goal with `--routine-name`
/// and at least one `--step` is saved as a routine.
#[derive(Args)]
pub struct AddGoalArgs {
    #[arg(help = "Goal description (not needed for routines)")]
    pub description: Option<String>,
    #[arg(short = 't', long = "type", value_enum, default_value = "short-term")]
    pub goal_type: GoalTypeArg,
    #[arg(short, long, help = "Target date (YYYY-MM-DD); makes the goal an event")]
    pub date: Option<Date>,
    #[arg(long, conflicts_with = "date", help = "Routine name")]
    pub routine_name: Option<String>,
    #[arg(
        long = "step",
        conflicts_with = "date",
        help = "Routine step, repeat for each step in order"
    )]
    pub steps: Vec<String>,
}

impl TryFrom<AddGoalArgs> for GoalDraft {
    type Error = anyhow::Error;

    fn try_from(val: AddGoalArgs) -> Result<Self> {
        if val.date.is_some() && (val.routine_name.is_some() || !val.steps.is_empty()) {
            bail!("A routine cannot have a target date");
        }
        let mut draft = match (val.routine_name, val.description) {
            (Some(name), _) => {
                let routine = Routine::new(name, val.steps);
                if routine.steps.iter().all(|s| s.trim().is_empty()) {
                    bail!("A routine needs at least one --step");
                }
                GoalDraft::from_routine(&routine)
            }
            (None, Some(description)) if !description.trim().is_empty() => {
                GoalDraft::new(description, val.goal_type.into())
            }
            (None, _) => bail!("A goal needs a description or --routine-name"),
        };
        draft.target_date = val.date;
        Ok(draft)
    }
}

/// Edit an existing goal
#[derive(Args)]
pub struct EditGoalArgs {
    #[arg(help = "ID of the goal to edit")]
    pub id: u64,
    #[arg(long, help = "New description")]
    pub description: Option<String>,
    #[arg(short = 't', long = "type", value_enum)]
    pub goal_type: Option<GoalTypeArg>,
    #[arg(short, long, help = "New target date (YYYY-MM-DD)")]
    pub date: Option<Date>,
    #[arg(long, conflicts_with = "date", help = "Remove the target date")]
    pub clear_date: bool,
    #[arg(long, help = "New routine name")]
    pub routine_name: Option<String>,
    #[arg(long = "step", help = "Replace the routine steps, repeat for each step")]
    pub steps: Vec<String>,
}

impl EditGoalArgs {
    /// Apply the requested edits to `draft`, returning a description of each
    /// change.
    ///
    /// Routine edits on plain text keep the text: unless new steps are given,
    /// each non-blank line becomes a step.
    fn apply(self, draft: &mut GoalDraft) -> Result<Vec<String>> {
        let mut changes = Vec::new();

        if let Some(description) = self.description {
            draft.description = description;
            changes.push("Updated description".to_string());
        }

        if let Some(date) = self.date {
            draft.target_date = Some(date);
            changes.push(format!("Set target date to {date}"));
        } else if self.clear_date {
            draft.target_date = None;
            changes.push("Removed target date".to_string());
        }

        if self.routine_name.is_some() || !self.steps.is_empty() {
            if draft.target_date.is_some() {
                bail!(
                    "Goal {} has a target date; a routine cannot (use --clear-date)",
                    self.id
                );
            }
            let mut routine = match Routine::parse(&draft.description) {
                Ok(routine) => RoutineDraft::from_routine(&routine),
                Err(_) if self.steps.is_empty() => {
                    let steps = draft
                        .description
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(str::to_string)
                        .collect();
                    changes.push("Moved description into routine steps".to_string());
                    RoutineDraft::from_routine(&Routine::new("", steps))
                }
                Err(_) => RoutineDraft::new(draft.description.trim()),
            };
            if let Some(name) = self.routine_name {
                routine.rename(name);
                changes.push("Renamed routine".to_string());
            }
            if !self.steps.is_empty() {
                routine = RoutineDraft::from_routine(&Routine::new(routine.name(), self.steps));
                changes.push("Replaced routine steps".to_string());
            }
            if routine.steps().iter().all(|step| step.trim().is_empty()) {
                bail!("A routine needs at least one --step");
            }
            draft.description = routine.to_description();
            draft.goal_type = GoalType::Preference;
        }

        if let Some(goal_type) = self.goal_type {
            draft.goal_type = goal_type.into();
            changes.push(format!("Changed type to {}", draft.goal_type));
        }

        Ok(changes)
    }
}

#[derive(Args)]
pub struct ListGoalsArgs {
    #[arg(long, help = "Include completed goals and past events")]
    pub all: bool,
}

#[derive(Args)]
pub struct CompleteGoalArgs {
    #[arg(help = "ID of the goal")]
    pub id: u64,
    #[arg(long, help = "Mark the goal active again")]
    pub undo: bool,
}

#[derive(Args)]
pub struct DeleteGoalArgs {
    #[arg(help = "ID of the goal to delete")]
    pub id: u64,
}

#[derive(Subcommand)]
pub enum GoalCommands {
    /// List active goals, upcoming events first
    #[command(alias = "l")]
    List(ListGoalsArgs),
    /// Add a goal, event or routine
    #[command(alias = "a")]
    Add(AddGoalArgs),
    /// Edit a goal
    #[command(alias = "e")]
    Edit(EditGoalArgs),
    /// Mark a goal completed
    #[command(alias = "c")]
    Complete(CompleteGoalArgs),
    /// Delete a goal
    #[command(alias = "d")]
    Delete(DeleteGoalArgs),
}

// ============================================================================
// Schedule
// ============================================================================

/// Set one day of the weekly schedule
#[derive(Args)]
pub struct SetEntryArgs {
    #[arg(help = "Weekday: 0-6 (Monday = 0) or a name such as mon")]
    pub day: String,
    #[arg(help = "Activity label, empty for a free day")]
    pub label: String,
    #[arg(help = "Planned minutes")]
    pub minutes: u32,
}

impl SetEntryArgs {
    fn into_entry(self) -> Result<(usize, ScheduleEntry)> {
        let day = parse_weekday(&self.day)?;
        Ok((day, ScheduleEntry::new(self.label, self.minutes)))
    }
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Show the weekly schedule
    Show,
    /// Set one day and save immediately
    Set(SetEntryArgs),
    /// Read `day label minutes` lines from stdin and save them debounced
    Edit,
    /// Show the dated workout blocks of the coming week
    Week(WeekArgs),
    /// Edit one workout block of the coming week
    Block(EditBlockArgs),
    /// Rebuild the coming week's blocks from the weekly schedule
    Reset,
}

#[derive(Args)]
pub struct WeekArgs {
    #[arg(long, help = "First day to show (YYYY-MM-DD), defaults to today")]
    pub from: Option<Date>,
}

/// Edit one workout block of the coming week
#[derive(Args)]
pub struct EditBlockArgs {
    #[arg(help = "ID of the block, as shown by `schedule week`")]
    pub id: u64,
    #[arg(short = 't', long = "type", help = "Activity type, e.g. Gym or Running")]
    pub block_type: Option<String>,
    #[arg(short, long, help = "Planned minutes")]
    pub minutes: Option<u32>,
    #[arg(short, long, help = "Notes, empty to clear")]
    pub notes: Option<String>,
    #[arg(long, conflicts_with = "not_done", help = "Mark the block completed")]
    pub done: bool,
    #[arg(long, help = "Mark the block not completed")]
    pub not_done: bool,
}

impl From<EditBlockArgs> for BlockEdit {
    fn from(val: EditBlockArgs) -> Self {
        let completed = match (val.done, val.not_done) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        BlockEdit {
            block_type: val.block_type,
            minutes: val.minutes,
            notes: val.notes,
            completed,
        }
    }
}

/// Parse a `day label minutes` line. The label may contain spaces.
fn parse_entry_line(line: &str) -> Result<(usize, ScheduleEntry)> {
    let line = line.trim();
    let (day, rest) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("expected `day label minutes`, got '{line}'"))?;
    let (label, minutes) = rest
        .trim()
        .rsplit_once(char::is_whitespace)
        .map_or(("", rest.trim()), |(label, minutes)| (label.trim(), minutes));
    let minutes: u32 = minutes
        .parse()
        .with_context(|| format!("invalid minutes '{minutes}'"))?;

    Ok((parse_weekday(day)?, ScheduleEntry::new(label, minutes)))
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
    Other,
}

impl GenderArg {
    fn as_str(self) -> &'static str {
        match self {
            GenderArg::Male => "Male",
            GenderArg::Female => "Female",
            GenderArg::Other => "Other",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum UnitsArg {
    Imperial,
    Metric,
}

impl From<UnitsArg> for Units {
    fn from(val: UnitsArg) -> Self {
        match val {
            UnitsArg::Imperial => Units::Imperial,
            UnitsArg::Metric => Units::Metric,
        }
    }
}

/// Change profile fields
///
/// Height and weight are read in the units being set, or the profile's
/// current units when `--units` is not given.
#[derive(Args)]
pub struct ProfileSetArgs {
    #[arg(long)]
    pub age: Option<u32>,
    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,
    #[arg(long, conflicts_with = "height_cm", help = "Height, feet part (imperial)")]
    pub height_ft: Option<u32>,
    #[arg(
        long,
        requires = "height_ft",
        value_parser = clap::value_parser!(u32).range(0..12),
        help = "Height, inches part (imperial)"
    )]
    pub height_in: Option<u32>,
    #[arg(long, help = "Height in centimetres (metric)")]
    pub height_cm: Option<u32>,
    #[arg(long, help = "Weight in pounds (imperial) or kilograms (metric)")]
    pub weight: Option<u32>,
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,
    #[arg(long, value_parser = PossibleValuesParser::new(AI_MODELS), help = "Coach model")]
    pub model: Option<String>,
}

impl ProfileSetArgs {
    /// Changes to send, with measurements read in `current` units unless
    /// new units are requested.
    fn into_changes(self, current: Units) -> Result<ProfileChanges> {
        let units = self.units.map(Units::from);
        let entry_units = units.unwrap_or(current);

        let height = match (self.height_ft, self.height_cm) {
            (Some(_), Some(_)) => bail!("Give the height in feet or in centimetres, not both"),
            (Some(feet), None) => {
                if entry_units == Units::Metric {
                    bail!("Use --height-cm with metric units");
                }
                Some(Height::FeetInches {
                    feet,
                    inches: self.height_in.unwrap_or(0),
                })
            }
            (None, Some(cm)) => {
                if entry_units == Units::Imperial {
                    bail!("Use --height-ft and --height-in with imperial units");
                }
                Some(Height::Centimetres(cm))
            }
            (None, None) => None,
        };

        Ok(ProfileChanges {
            age: self.age,
            gender: self.gender.map(|gender| gender.as_str().to_string()),
            height,
            weight: self.weight.map(|value| Weight::entered(value, entry_units)),
            units,
            openai_model: self.model,
        })
    }
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the athlete profile
    Show,
    /// Change profile fields
    Set(ProfileSetArgs),
}

// ============================================================================
// Routine and settings
// ============================================================================

#[derive(Subcommand)]
pub enum RoutineCommands {
    /// Check whether the text on stdin is a routine
    Check,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(val: ThemeArg) -> Self {
        match val {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

#[derive(Args)]
pub struct ThemeArgs {
    #[arg(value_enum, help = "Theme to use; toggles when omitted")]
    pub theme: Option<ThemeArg>,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,
    /// Set or toggle the color theme
    Theme(ThemeArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against a configured client and renders the results.
pub struct Cli {
    client: StrideClient,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(client: StrideClient, renderer: TerminalRenderer) -> Self {
        Self { client, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        let mut session = self.client.plan_session();
        session.refresh().await.context("Failed to load plan")?;

        match command {
            PlanCommands::Show => {
                if let Some(plan) = session.plan() {
                    self.renderer.render(&plan.to_string())?;
                }
                if !session.sync_report().is_empty() {
                    let reports = SyncReports(session.sync_report());
                    self.renderer.render(&format!("## Tracker sync\n\n{reports}"))?;
                }
                Ok(())
            }
            PlanCommands::Revise(args) => {
                let slot = DaySlot::from(args.day);
                let message = args.message.join(" ");
                let outcome = session.revise(slot, &message).await;
                self.renderer
                    .render(&Transcript(session.conversation(slot)).to_string())?;

                match outcome.context("Failed to revise plan")? {
                    RevisionOutcome::Ignored => {
                        let status = OperationStatus::failure("Nothing to send".to_string());
                        self.renderer.render(&status.to_string())
                    }
                    RevisionOutcome::Replied { day_replaced, .. } => {
                        let index = slot.index();
                        match session.plan().and_then(|plan| plan.day(index)) {
                            Some(day) if day_replaced => {
                                self.renderer.render(&DayCard { index, day }.to_string())
                            }
                            _ => Ok(()),
                        }
                    }
                }
            }
        }
    }

    pub async fn handle_goal_command(&self, command: GoalCommands) -> Result<()> {
        let mut book = self.client.goal_book();
        book.refresh().await.context("Failed to load goals")?;

        match command {
            GoalCommands::List(args) => {
                let markdown = if args.all {
                    Goals(book.goals().to_vec()).to_string()
                } else {
                    book.board(Zoned::now().date()).to_string()
                };
                self.renderer.render(&markdown)
            }
            GoalCommands::Add(args) => {
                let draft = GoalDraft::try_from(args)?;
                let goal = book.create(&draft).await.context("Failed to add goal")?;
                self.renderer.render(&CreateResult::new(goal).to_string())
            }
            GoalCommands::Edit(args) => {
                let id = args.id;
                let existing = book
                    .find(id)
                    .ok_or_else(|| anyhow!("Goal with ID {id} not found"))?;
                let mut draft = GoalDraft::from_goal(existing);
                let changes = args.apply(&mut draft)?;
                if changes.is_empty() {
                    let status = OperationStatus::failure("No changes requested".to_string());
                    return self.renderer.render(&status.to_string());
                }
                let goal = book.update(id, &draft).await.context("Failed to update goal")?;
                self.renderer
                    .render(&UpdateResult::with_changes(goal, changes).to_string())
            }
            GoalCommands::Complete(args) => {
                let goal = book
                    .set_completed(args.id, !args.undo)
                    .await
                    .context("Failed to update goal")?;
                let change = if args.undo {
                    "Marked active"
                } else {
                    "Marked completed"
                };
                self.renderer
                    .render(&UpdateResult::with_changes(goal, vec![change.to_string()]).to_string())
            }
            GoalCommands::Delete(args) => {
                let goal = book
                    .find(args.id)
                    .cloned()
                    .ok_or_else(|| anyhow!("Goal with ID {} not found", args.id))?;
                book.delete(goal.id).await.context("Failed to delete goal")?;
                self.renderer.render(&DeleteResult::new(goal).to_string())
            }
        }
    }

    pub async fn handle_schedule_command(&self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Week(args) => self.show_week(args).await,
            ScheduleCommands::Block(args) => self.edit_block(args).await,
            ScheduleCommands::Reset => self.reset_week().await,
            command => self.edit_schedule(command).await,
        }
    }

    async fn edit_schedule(&self, command: ScheduleCommands) -> Result<()> {
        let mut editor = self
            .client
            .schedule_editor()
            .await
            .context("Failed to load schedule")?;

        match command {
            ScheduleCommands::Set(args) => {
                let (day, entry) = args.into_entry()?;
                editor.set_entry(day, entry)?;
                editor.flush().await.context("Failed to save schedule")?;
            }
            ScheduleCommands::Edit => {
                let mut lines = BufReader::new(io::stdin()).lines();
                while let Some(line) = lines.next_line().await? {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match parse_entry_line(&line) {
                        Ok((day, entry)) => editor.set_entry(day, entry)?,
                        Err(e) => eprintln!("Skipping line: {e:#}"),
                    }
                }
                debug!("Input finished, flushing schedule");
                editor.flush().await.context("Failed to save schedule")?;
                editor.settled().await;
            }
            ScheduleCommands::Show
            | ScheduleCommands::Week(_)
            | ScheduleCommands::Block(_)
            | ScheduleCommands::Reset => {}
        }

        self.renderer.render(&editor.schedule().to_string())?;
        self.renderer
            .render(&format!("\n*{}*\n", editor.status()))
    }

    async fn show_week(&self, args: WeekArgs) -> Result<()> {
        let start = args.from.unwrap_or_else(|| Zoned::now().date());
        let mut week = self.client.week_planner();
        let blocks = week.refresh(start).await.context("Failed to load week")?;
        self.renderer.render(&WeekAhead(blocks).to_string())
    }

    async fn edit_block(&self, args: EditBlockArgs) -> Result<()> {
        let id = args.id;
        let edit = BlockEdit::from(args);
        if edit.is_empty() {
            let status = OperationStatus::failure("No changes requested".to_string());
            return self.renderer.render(&status.to_string());
        }

        let mut week = self.client.week_planner();
        week.refresh(Zoned::now().date())
            .await
            .context("Failed to load week")?;
        week.edit(id, &edit)
            .await
            .context("Failed to update workout block")?;
        self.renderer.render(&WeekAhead(week.blocks()).to_string())
    }

    async fn reset_week(&self) -> Result<()> {
        let mut week = self.client.week_planner();
        let blocks = week.reset().await.context("Failed to reset week")?;
        self.renderer.render(&WeekAhead(blocks).to_string())?;
        let status = OperationStatus::success("Week rebuilt from the weekly schedule".to_string());
        self.renderer.render(&status.to_string())
    }

    pub async fn handle_profile_command(&self, command: ProfileCommands) -> Result<()> {
        let mut session = self
            .client
            .profile_session()
            .await
            .context("Failed to load profile")?;

        match command {
            ProfileCommands::Show => self.renderer.render(&session.profile().to_string()),
            ProfileCommands::Set(args) => {
                let changes = args.into_changes(session.profile().units())?;
                if changes.is_empty() {
                    let status = OperationStatus::failure("No changes requested".to_string());
                    return self.renderer.render(&status.to_string());
                }
                let profile = session
                    .apply(&changes)
                    .await
                    .context("Failed to save profile")?;
                self.renderer.render(&profile.to_string())
            }
        }
    }

    pub async fn handle_routine_command(&self, command: RoutineCommands) -> Result<()> {
        match command {
            RoutineCommands::Check => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text).await?;

                let markdown = match Routine::parse(&text) {
                    Ok(routine) => {
                        let mut markdown = format!("## {}\n\n", routine.name);
                        for (n, step) in routine.steps.iter().enumerate() {
                            markdown.push_str(&format!("{}. {step}\n", n + 1));
                        }
                        markdown.push_str(&format!("\n```\n{routine}\n```\n"));
                        markdown
                    }
                    Err(e) => format!("Plain text: {e}\n"),
                };
                self.renderer.render(&markdown)
            }
        }
    }

    pub fn handle_settings_command(&self, command: SettingsCommands) -> Result<()> {
        let store = self.client.settings();
        let settings = match command {
            SettingsCommands::Show => store.current(),
            SettingsCommands::Theme(args) => {
                let theme = args
                    .theme
                    .map_or_else(|| store.current().theme.toggled(), Theme::from);
                store
                    .update(|settings| settings.theme = theme)
                    .context("Failed to save settings")?
            }
        };

        self.renderer.render(&format!(
            "## Settings\n\n- **Theme**: {}\n- **Server**: {}\n- **Save delay**: {} ms\n- **File**: {}\n",
            settings.theme,
            settings.server_url,
            settings.debounce_ms,
            store.path().display()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_line() {
        let (day, entry) = parse_entry_line("wed  Long run  90").unwrap();
        assert_eq!(day, 2);
        assert_eq!(entry, ScheduleEntry::new("Long run", 90));

        let (day, entry) = parse_entry_line("6 0").unwrap();
        assert_eq!(day, 6);
        assert!(entry.is_free());

        assert!(parse_entry_line("funday Gym 45").is_err());
        assert!(parse_entry_line("mon Gym lots").is_err());
        assert!(parse_entry_line("mon").is_err());
    }

    #[test]
    fn test_add_args_into_draft() {
        let args = AddGoalArgs {
            description: None,
            goal_type: GoalTypeArg::ShortTerm,
            date: None,
            routine_name: Some("Core".to_string()),
            steps: vec!["Plank".to_string(), "Dead bug".to_string()],
        };
        let draft = GoalDraft::try_from(args).unwrap();
        assert_eq!(draft.goal_type, GoalType::Preference);
        assert_eq!(draft.description, "Core:\n- Plank\n- Dead bug");

        let args = AddGoalArgs {
            description: None,
            goal_type: GoalTypeArg::ShortTerm,
            date: None,
            routine_name: Some("Core".to_string()),
            steps: vec![],
        };
        assert!(GoalDraft::try_from(args).is_err());
    }

    #[test]
    fn test_edit_args_replace_steps() {
        let mut draft = GoalDraft::new("Core:\n- Plank", GoalType::Preference);
        let args = EditGoalArgs {
            id: 1,
            description: None,
            goal_type: None,
            date: None,
            clear_date: false,
            routine_name: None,
            steps: vec!["Side plank".to_string(), "Bird dog".to_string()],
        };

        let changes = args.apply(&mut draft).unwrap();
        assert_eq!(changes, ["Replaced routine steps"]);
        assert_eq!(draft.description, "Core:\n- Side plank\n- Bird dog");
    }

    fn edit_args(id: u64) -> EditGoalArgs {
        EditGoalArgs {
            id,
            description: None,
            goal_type: None,
            date: None,
            clear_date: false,
            routine_name: None,
            steps: vec![],
        }
    }

    #[test]
    fn test_edit_args_name_keeps_plain_text() {
        let mut draft = GoalDraft::new("Foam roll\n\nStretch calves", GoalType::ShortTerm);
        let args = EditGoalArgs {
            routine_name: Some("Recovery".to_string()),
            ..edit_args(2)
        };

        let changes = args.apply(&mut draft).unwrap();
        assert_eq!(changes, ["Moved description into routine steps", "Renamed routine"]);
        assert_eq!(draft.description, "Recovery:\n- Foam roll\n- Stretch calves");
        assert_eq!(draft.goal_type, GoalType::Preference);

        let mut blank = GoalDraft::new("  ", GoalType::ShortTerm);
        let args = EditGoalArgs {
            routine_name: Some("Empty".to_string()),
            ..edit_args(3)
        };
        assert!(args.apply(&mut blank).is_err());
    }

    #[test]
    fn test_routine_rejects_target_date() {
        let args = AddGoalArgs {
            description: None,
            goal_type: GoalTypeArg::ShortTerm,
            date: Some(jiff::civil::date(2026, 5, 2)),
            routine_name: Some("Race warmup".to_string()),
            steps: vec!["Strides".to_string()],
        };
        assert!(GoalDraft::try_from(args).is_err());

        let mut event = GoalDraft::new("Half marathon", GoalType::LongTerm);
        event.target_date = Some(jiff::civil::date(2026, 5, 2));
        let args = EditGoalArgs {
            steps: vec!["Strides".to_string()],
            ..edit_args(4)
        };
        assert!(args.apply(&mut event.clone()).is_err());

        let args = EditGoalArgs {
            clear_date: true,
            steps: vec!["Strides".to_string()],
            ..edit_args(4)
        };
        args.apply(&mut event).unwrap();
        assert_eq!(event.target_date, None);
        assert_eq!(event.description, "Half marathon:\n- Strides");
    }

    fn profile_args() -> ProfileSetArgs {
        ProfileSetArgs {
            age: None,
            gender: None,
            height_ft: None,
            height_in: None,
            height_cm: None,
            weight: None,
            units: None,
            model: None,
        }
    }

    #[test]
    fn test_profile_args_read_in_entry_units() {
        let args = ProfileSetArgs {
            height_ft: Some(5),
            height_in: Some(11),
            weight: Some(176),
            ..profile_args()
        };
        let changes = args.into_changes(Units::Imperial).unwrap();
        assert_eq!(changes.height.map(Height::to_cm), Some(180));
        assert_eq!(changes.weight.map(Weight::to_kg), Some(80));

        // Switching to metric reads the new values as metric.
        let args = ProfileSetArgs {
            height_cm: Some(180),
            weight: Some(80),
            units: Some(UnitsArg::Metric),
            ..profile_args()
        };
        let changes = args.into_changes(Units::Imperial).unwrap();
        assert_eq!(changes.height, Some(Height::Centimetres(180)));
        assert_eq!(changes.weight, Some(Weight::Kilograms(80)));
        assert_eq!(changes.units, Some(Units::Metric));

        let args = ProfileSetArgs {
            height_cm: Some(180),
            ..profile_args()
        };
        assert!(args.into_changes(Units::Imperial).is_err());
        assert!(profile_args().into_changes(Units::Metric).unwrap().is_empty());
    }

    #[test]
    fn test_block_args_into_edit() {
        let args = EditBlockArgs {
            id: 3,
            block_type: None,
            minutes: Some(30),
            notes: None,
            done: false,
            not_done: true,
        };
        let edit = BlockEdit::from(args);
        assert_eq!(edit.minutes, Some(30));
        assert_eq!(edit.completed, Some(false));
    }
}

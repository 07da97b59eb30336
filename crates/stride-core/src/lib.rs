//! Core library for the Stride personal-training client.
//!
//! Stride shows and edits a user's goals, weekly activity schedule and the
//! daily plan generated by a remote AI coach. Everything is persisted by the
//! coach service; this crate keeps a local copy and decides how changes
//! travel back.
//!
//! # Building blocks
//!
//! - [`normalize()`]: renders any [`PlanValue`] to display text and never fails
//! - [`Intensity`]: substring classification of free-text intensity labels
//! - [`routine`]: the `Name:` / `- step` text format for routines and a
//!   step-by-step editor over it
//! - [`sync`]: debounced, coalescing persistence for rapid edits
//! - [`Plan::apply_revision`]: single-day replacement that shares every
//!   untouched day with the previous plan
//! - [`session`]: stateful owners of the plan, goals, schedule, week-ahead
//!   blocks and profile on top of a [`CoachService`]
//! - [`display`]: markdown rendering for everything above
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stride_core::StrideClientBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StrideClientBuilder::new()
//!     .with_server_url(Some("http://localhost:8000".to_string()))
//!     .build()?;
//!
//! let mut plan = client.plan_session();
//! println!("{}", plan.refresh().await?);
//!
//! let mut schedule = client.schedule_editor().await?;
//! schedule.set_entry(0, stride_core::models::ScheduleEntry::new("Gym", 60))?;
//! schedule.flush().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod display;
pub mod error;
pub mod models;
pub mod normalize;
pub mod routine;
pub mod service;
pub mod session;
pub mod settings;
pub mod sync;

// Re-export commonly used types
pub use client::{StrideClient, StrideClientBuilder};
pub use display::{CreateResult, DeleteResult, Goals, OperationStatus, UpdateResult};
pub use error::{Result, StrideError};
pub use models::{
    BlockEdit, DayBlock, DaySlot, Goal, GoalBoard, GoalDraft, GoalType, Intensity, Plan,
    PlanValue, Profile, ProfileChanges, ScheduleEntry, Units, WeeklySchedule, WorkoutBlock,
};
pub use normalize::normalize;
pub use routine::{NotARoutine, Routine, RoutineDraft, StepMove};
pub use service::{CoachService, HttpCoachClient};
pub use session::{
    GoalBook, PlanSession, ProfileSession, RevisionOutcome, ScheduleEditor, WeekPlanner,
};
pub use settings::{Settings, SettingsStore, Theme};
pub use sync::{DebouncedSync, SnapshotSink, SyncStatus};

//! Data models for plans, goals, the weekly schedule, workout blocks and the
//! athlete profile.
//!
//! Display implementations for these models live in [`crate::display`] so the
//! data structures stay free of presentation logic.
//!
//! # Shapes from the coach
//!
//! Plan days are produced by a generative service, so every day field is a
//! [`PlanValue`]: a closed recursive type covering text, numbers, lists and
//! ordered mappings. Rendering goes through [`crate::normalize()`], which
//! accepts every variant.
//!
//! # Examples
//!
//! ```rust
//! use stride_core::models::{DayBlock, Intensity, Plan};
//!
//! let days: Vec<DayBlock> = serde_json::from_str(
//!     r#"[{"block_type": "Gym", "intensity": "High"}, {"block_type": "Rest"}]"#,
//! )
//! .unwrap();
//! let plan = Plan::new(days).unwrap();
//! assert_eq!(plan.day(0).unwrap().intensity_level(), Intensity::High);
//! ```

pub mod block;
pub mod board;
pub mod conversation;
pub mod day;
pub mod goal;
pub mod intensity;
pub mod plan;
pub mod profile;
pub mod schedule;
pub mod value;

pub use block::{block_type, BlockEdit, WorkoutBlock, BLOCK_TYPES};
pub use board::GoalBoard;
pub use conversation::{ChatMessage, RevisionReply, RevisionRequest, Role};
pub use day::{day_label, DayBlock, DaySlot};
pub use goal::{Goal, GoalCategory, GoalDraft, GoalPayload, GoalStatus, GoalType};
pub use intensity::Intensity;
pub use plan::{GeneratedPlan, Plan, PlanResponse, SyncReport, MAX_PLAN_DAYS, MIN_PLAN_DAYS};
pub use profile::{
    Height, Profile, ProfileChanges, ProfileUpdate, Units, Weight, AI_MODELS, DEFAULT_AI_MODEL,
};
pub use schedule::{
    parse_weekday, ScheduleDocument, ScheduleEntry, WeeklySchedule, DAYS_PER_WEEK, WEEKDAY_NAMES,
};
pub use value::PlanValue;

//! Stateful owners of the plan, the goals, the schedule and the profile.
//!
//! Each session wraps a shared [`CoachService`](crate::service::CoachService)
//! and keeps the last known good state locally:
//!
//! - [`PlanSession`] holds the generated plan and one revision conversation
//!   per day slot.
//! - [`GoalBook`] holds the goal list and re-fetches it after every
//!   successful mutation.
//! - [`ScheduleEditor`] applies schedule edits optimistically and persists
//!   them through [`DebouncedSync`](crate::sync::DebouncedSync).
//! - [`WeekPlanner`] holds the dated workout blocks of the coming week.
//! - [`ProfileSession`] holds the athlete profile.
//!
//! A failed call never clears local state.

mod goals;
mod plan;
mod profile;
mod schedule;
mod week;

pub use goals::GoalBook;
pub use plan::{PlanSession, RevisionOutcome, REVISION_FAILURE_REPLY};
pub use profile::ProfileSession;
pub use schedule::{ScheduleEditor, ScheduleSink};
pub use week::WeekPlanner;

//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get newtype wrappers. Everything renders
//! to markdown so the terminal renderer can style it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │    Markdown     │
//! │ (Plan, Goal,    │───▶│ (DayCard, Goals,│───▶│     Output      │
//! │  Schedule)      │    │  CreateResult)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: goal lists, revision transcripts, sync reports and the
//!   week-ahead table
//! - [`results`]: operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: confirmation messages and schedule save status
//! - [`datetime`]: calendar date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use stride_core::display::OperationStatus;
//!
//! let success = OperationStatus::success("Schedule saved".to_string());
//! assert_eq!(success.to_string(), "Success: Schedule saved\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Goals, SyncReports, Transcript, WeekAhead};
pub use datetime::{BlockDate, GoalDate, PlanDate};
pub use models::DayCard;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;

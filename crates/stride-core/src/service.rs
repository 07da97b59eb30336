//! Request/response interface to the coach service.
//!
//! Everything behind this trait (authentication, tracker integrations, plan
//! generation) is external. [`HttpCoachClient`] talks to the service over
//! HTTP; tests substitute in-memory implementations.

mod http;

use async_trait::async_trait;
use jiff::civil::Date;

pub use http::HttpCoachClient;

use crate::{
    error::Result,
    models::{
        ChatMessage, DaySlot, Goal, GoalDraft, PlanResponse, Profile, ProfileUpdate,
        RevisionReply, ScheduleDocument, WorkoutBlock,
    },
};

/// Operations offered by the coach service.
#[async_trait]
pub trait CoachService: Send + Sync {
    /// Generate (or fetch the cached) multi-day plan.
    async fn generate_plan(&self) -> Result<PlanResponse>;

    /// Ask the coach to revise one day, sending the whole conversation
    /// including the newest user turn.
    async fn revise_day(&self, day: DaySlot, conversation: &[ChatMessage]) -> Result<RevisionReply>;

    async fn list_goals(&self) -> Result<Vec<Goal>>;

    async fn create_goal(&self, draft: &GoalDraft) -> Result<Goal>;

    async fn update_goal(&self, id: u64, draft: &GoalDraft) -> Result<Goal>;

    async fn delete_goal(&self, id: u64) -> Result<()>;

    async fn get_schedule(&self) -> Result<ScheduleDocument>;

    async fn put_schedule(&self, document: &ScheduleDocument) -> Result<ScheduleDocument>;

    /// Dated workout blocks from `start` on, ordered by date. The service
    /// creates missing days of the coming week from the schedule template.
    async fn list_blocks(&self, start: Date) -> Result<Vec<WorkoutBlock>>;

    async fn update_block(&self, block: &WorkoutBlock) -> Result<WorkoutBlock>;

    /// Recreate the next seven days of blocks from the schedule template.
    async fn reset_blocks(&self) -> Result<Vec<WorkoutBlock>>;

    async fn get_profile(&self) -> Result<Profile>;

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile>;
}

const _: () = {
    fn _assert_object_safe(_: &dyn CoachService) {}
};

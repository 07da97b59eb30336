#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use jiff::civil::Date;
use stride_core::{
    models::{
        ChatMessage, DaySlot, Goal, GoalDraft, PlanResponse, Profile, ProfileUpdate,
        RevisionReply, ScheduleDocument, WorkoutBlock,
    },
    CoachService, Result, StrideError,
};
use tokio::time::Instant;

/// Scripted state behind [`FakeCoach`].
#[derive(Default)]
pub struct FakeState {
    /// Returned by `generate_plan`; `None` fails like an unreachable service
    pub plan_response: Option<PlanResponse>,
    /// Returned by `revise_day`; `None` fails the request
    pub revision: Option<RevisionReply>,
    pub revision_requests: Vec<(DaySlot, Vec<ChatMessage>)>,
    pub goals: Vec<Goal>,
    pub next_goal_id: u64,
    pub fail_writes: bool,
    pub fail_reads: bool,
    pub schedule: ScheduleDocument,
    pub schedule_writes: Vec<(Instant, ScheduleDocument)>,
    pub blocks: Vec<WorkoutBlock>,
    /// What `reset_blocks` rebuilds the week from
    pub template_blocks: Vec<WorkoutBlock>,
    pub block_writes: Vec<WorkoutBlock>,
    pub profile: Profile,
    pub profile_updates: Vec<ProfileUpdate>,
}

/// In-memory coach service.
#[derive(Default)]
pub struct FakeCoach {
    state: Mutex<FakeState>,
}

impl FakeCoach {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake state poisoned")
    }

    fn check_write(&self, operation: &str) -> Result<()> {
        if self.state().fail_writes {
            return Err(StrideError::persistence(operation).with_cause("503 (unavailable)"));
        }
        Ok(())
    }

    fn check_read(&self) -> Result<()> {
        if self.state().fail_reads {
            return Err(StrideError::Configuration {
                message: "offline".to_string(),
            });
        }
        Ok(())
    }

    /// Store a draft the way the service does, with the type from its payload.
    fn to_goal(id: u64, draft: &GoalDraft) -> Goal {
        Goal {
            id,
            description: draft.description.clone(),
            goal_type: draft.payload().goal_type,
            target_date: draft.target_date,
            is_completed: draft.is_completed,
        }
    }
}

#[async_trait]
impl CoachService for FakeCoach {
    async fn generate_plan(&self) -> Result<PlanResponse> {
        self.state()
            .plan_response
            .clone()
            .ok_or_else(|| StrideError::generation(StrideError::GENERIC_GENERATION_FAILURE))
    }

    async fn revise_day(&self, day: DaySlot, conversation: &[ChatMessage]) -> Result<RevisionReply> {
        let mut state = self.state();
        state.revision_requests.push((day, conversation.to_vec()));
        state
            .revision
            .clone()
            .ok_or_else(|| StrideError::persistence("revise plan").with_cause("500 (boom)"))
    }

    async fn list_goals(&self) -> Result<Vec<Goal>> {
        self.check_read()?;
        Ok(self.state().goals.clone())
    }

    async fn create_goal(&self, draft: &GoalDraft) -> Result<Goal> {
        self.check_write("create goal")?;
        let mut state = self.state();
        state.next_goal_id += 1;
        let goal = Self::to_goal(state.next_goal_id, draft);
        state.goals.push(goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, id: u64, draft: &GoalDraft) -> Result<Goal> {
        self.check_write("update goal")?;
        let mut state = self.state();
        let goal = Self::to_goal(id, draft);
        let slot = state
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| StrideError::persistence("update goal").with_cause("404 (Goal not found)"))?;
        *slot = goal.clone();
        Ok(goal)
    }

    async fn delete_goal(&self, id: u64) -> Result<()> {
        self.check_write("delete goal")?;
        self.state().goals.retain(|g| g.id != id);
        Ok(())
    }

    async fn get_schedule(&self) -> Result<ScheduleDocument> {
        self.check_read()?;
        Ok(self.state().schedule.clone())
    }

    async fn put_schedule(&self, document: &ScheduleDocument) -> Result<ScheduleDocument> {
        self.check_write("save schedule")?;
        let mut state = self.state();
        state.schedule_writes.push((Instant::now(), document.clone()));
        state.schedule = document.clone();
        Ok(document.clone())
    }

    async fn list_blocks(&self, start: Date) -> Result<Vec<WorkoutBlock>> {
        self.check_read()?;
        Ok(self
            .state()
            .blocks
            .iter()
            .filter(|block| block.date >= start)
            .cloned()
            .collect())
    }

    async fn update_block(&self, block: &WorkoutBlock) -> Result<WorkoutBlock> {
        self.check_write("update workout block")?;
        let mut state = self.state();
        state.block_writes.push(block.clone());
        let slot = state
            .blocks
            .iter_mut()
            .find(|b| b.id == block.id)
            .ok_or_else(|| {
                StrideError::persistence("update workout block").with_cause("404 (Block not found)")
            })?;
        *slot = block.clone();
        Ok(block.clone())
    }

    async fn reset_blocks(&self) -> Result<Vec<WorkoutBlock>> {
        self.check_write("reset week")?;
        let mut state = self.state();
        state.blocks = state.template_blocks.clone();
        Ok(state.blocks.clone())
    }

    async fn get_profile(&self) -> Result<Profile> {
        self.check_read()?;
        Ok(self.state().profile.clone())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile> {
        self.check_write("save profile")?;
        let mut state = self.state();
        state.profile_updates.push(update.clone());
        let profile = &mut state.profile;
        if let Some(age) = update.age {
            profile.age = Some(age);
        }
        if let Some(gender) = &update.gender {
            profile.gender = Some(gender.clone());
        }
        if let Some(height) = update.height {
            profile.height = Some(height);
        }
        if let Some(weight) = update.weight {
            profile.weight = Some(weight);
        }
        if let Some(model) = &update.openai_model {
            profile.openai_model = Some(model.clone());
        }
        if let Some(settings) = &update.settings {
            profile.settings = Some(settings.clone());
        }
        Ok(profile.clone())
    }
}

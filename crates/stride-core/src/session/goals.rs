use std::sync::Arc;

use jiff::civil::Date;
use log::{debug, warn};

use crate::{
    error::{Result, StrideError},
    models::{Goal, GoalBoard, GoalDraft},
    service::CoachService,
};

/// Local copy of the goal list, kept in step with the service.
pub struct GoalBook {
    service: Arc<dyn CoachService>,
    goals: Vec<Goal>,
}

impl GoalBook {
    pub fn new(service: Arc<dyn CoachService>) -> Self {
        Self {
            service,
            goals: Vec::new(),
        }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn find(&self, id: u64) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Goals grouped for display as of `today`.
    pub fn board(&self, today: Date) -> GoalBoard {
        GoalBoard::partition(&self.goals, today)
    }

    /// Fetch the goal list, replacing the local copy on success.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Transport` if the list cannot be fetched; the
    /// local copy is kept.
    pub async fn refresh(&mut self) -> Result<&[Goal]> {
        self.goals = self.service.list_goals().await?;
        debug!("Loaded {} goals", self.goals.len());
        Ok(&self.goals)
    }

    /// # Errors
    ///
    /// Returns `StrideError::Persistence` if the service rejects the goal.
    pub async fn create(&mut self, draft: &GoalDraft) -> Result<Goal> {
        let created = self.service.create_goal(draft).await?;
        self.resync(|goals| goals.push(created.clone())).await;
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns `StrideError::Persistence` if the service rejects the update.
    pub async fn update(&mut self, id: u64, draft: &GoalDraft) -> Result<Goal> {
        let updated = self.service.update_goal(id, draft).await?;
        self.resync(|goals| replace(goals, &updated)).await;
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns `StrideError::Persistence` if the service rejects the delete.
    pub async fn delete(&mut self, id: u64) -> Result<()> {
        self.service.delete_goal(id).await?;
        self.resync(|goals| goals.retain(|goal| goal.id != id)).await;
        Ok(())
    }

    /// Mark a known goal completed (or active again).
    ///
    /// # Errors
    ///
    /// Returns `StrideError::NotFound` if the goal is not in the local list,
    /// or `StrideError::Persistence` if the update fails.
    pub async fn set_completed(&mut self, id: u64, completed: bool) -> Result<Goal> {
        let goal = self.find(id).ok_or(StrideError::NotFound { kind: "Goal", id })?;
        let mut draft = GoalDraft::from_goal(goal);
        draft.is_completed = completed;
        self.update(id, &draft).await
    }

    /// Re-fetch after a successful mutation. If the fetch fails, `apply`
    /// brings the local copy up to date with the mutation instead.
    async fn resync<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut Vec<Goal>),
    {
        if let Err(e) = self.refresh().await {
            warn!("Goal list refresh failed, applying change locally: {e}");
            apply(&mut self.goals);
        }
    }
}

fn replace(goals: &mut [Goal], updated: &Goal) {
    if let Some(slot) = goals.iter_mut().find(|goal| goal.id == updated.id) {
        *slot = updated.clone();
    }
}

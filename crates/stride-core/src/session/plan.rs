use std::{collections::BTreeMap, sync::Arc};

use log::{debug, warn};

use crate::{
    error::Result,
    models::{ChatMessage, DaySlot, GeneratedPlan, Plan, SyncReport},
    service::CoachService,
};

/// Assistant turn recorded when a revision request fails.
pub const REVISION_FAILURE_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// What a call to [`PlanSession::revise`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionOutcome {
    /// The message was blank and nothing was sent.
    Ignored,
    /// The coach replied; `day_replaced` tells whether the plan changed.
    Replied { reply: String, day_replaced: bool },
}

/// The generated plan plus a revision conversation per day.
pub struct PlanSession {
    service: Arc<dyn CoachService>,
    plan: Option<Plan>,
    sync: BTreeMap<String, SyncReport>,
    conversations: [Vec<ChatMessage>; 2],
}

impl PlanSession {
    pub fn new(service: Arc<dyn CoachService>) -> Self {
        Self {
            service,
            plan: None,
            sync: BTreeMap::new(),
            conversations: [Vec::new(), Vec::new()],
        }
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Integration sync results reported with the last generated plan.
    pub fn sync_report(&self) -> &BTreeMap<String, SyncReport> {
        &self.sync
    }

    pub fn conversation(&self, slot: DaySlot) -> &[ChatMessage] {
        &self.conversations[slot.index()]
    }

    /// Ask the coach for a plan and replace the current one on success.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Generation` with the coach's message (or a
    /// generic one) when no plan was produced. The previous plan is kept.
    pub async fn refresh(&mut self) -> Result<&Plan> {
        let response = self.service.generate_plan().await?;
        let GeneratedPlan { plan, sync } = response.into_plan()?;

        for (integration, report) in &sync {
            if let Some(error) = &report.error {
                warn!("{integration} sync reported: {error}");
            }
        }

        debug!("Loaded plan with {} days", plan.len());
        self.sync = sync;
        Ok(self.plan.insert(plan))
    }

    /// Send `text` to the coach as the next turn of `slot`'s conversation.
    ///
    /// The whole conversation, including the new turn, is sent. A returned
    /// day replaces that slot of the plan; every other day is kept as is.
    ///
    /// # Errors
    ///
    /// Returns the service error. The conversation then ends with
    /// [`REVISION_FAILURE_REPLY`] and the plan is unchanged.
    pub async fn revise(&mut self, slot: DaySlot, text: &str) -> Result<RevisionOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(RevisionOutcome::Ignored);
        }

        let index = slot.index();
        self.conversations[index].push(ChatMessage::user(text));

        let reply = match self.service.revise_day(slot, &self.conversations[index]).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Revision of {} failed: {e}", slot.as_str());
                self.conversations[index].push(ChatMessage::assistant(REVISION_FAILURE_REPLY));
                return Err(e);
            }
        };

        self.conversations[index].push(ChatMessage::assistant(reply.reply.clone()));

        let day_replaced = match reply.revised_day() {
            Some(day) => match self.plan.as_ref() {
                Some(plan) => {
                    let revised = plan.apply_revision(index, day)?;
                    self.plan = Some(revised);
                    true
                }
                None => {
                    debug!("Revised day received without a loaded plan");
                    false
                }
            },
            None => false,
        };

        Ok(RevisionOutcome::Replied {
            reply: reply.reply,
            day_replaced,
        })
    }
}

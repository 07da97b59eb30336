use std::sync::Arc;

use jiff::civil::Date;
use log::debug;

use crate::{
    error::{Result, StrideError},
    models::{BlockEdit, WorkoutBlock},
    service::CoachService,
};

/// The dated workout blocks of the coming week.
pub struct WeekPlanner {
    service: Arc<dyn CoachService>,
    blocks: Vec<WorkoutBlock>,
}

impl WeekPlanner {
    pub fn new(service: Arc<dyn CoachService>) -> Self {
        Self {
            service,
            blocks: Vec::new(),
        }
    }

    pub fn blocks(&self) -> &[WorkoutBlock] {
        &self.blocks
    }

    pub fn find(&self, id: u64) -> Option<&WorkoutBlock> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Fetch blocks from `start` on.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Transport` if the blocks cannot be fetched; the
    /// local copy is kept.
    pub async fn refresh(&mut self, start: Date) -> Result<&[WorkoutBlock]> {
        self.blocks = self.service.list_blocks(start).await?;
        debug!("Loaded {} workout blocks from {start}", self.blocks.len());
        Ok(&self.blocks)
    }

    /// Apply `edit` to a known block and save it. The local copy takes the
    /// service's answer.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::NotFound` for a block not in the local list,
    /// `StrideError::InvalidInput` for an unknown type, or
    /// `StrideError::Persistence` if the save fails.
    pub async fn edit(&mut self, id: u64, edit: &BlockEdit) -> Result<WorkoutBlock> {
        let block = self.find(id).ok_or(StrideError::NotFound {
            kind: "Workout block",
            id,
        })?;
        let edited = edit.apply_to(block)?;

        let saved = self.service.update_block(&edited).await?;
        if let Some(slot) = self.blocks.iter_mut().find(|block| block.id == id) {
            *slot = saved.clone();
        }
        Ok(saved)
    }

    /// Throw away edits and rebuild the coming week from the template.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Persistence` if the reset fails.
    pub async fn reset(&mut self) -> Result<&[WorkoutBlock]> {
        self.blocks = self.service.reset_blocks().await?;
        Ok(&self.blocks)
    }
}

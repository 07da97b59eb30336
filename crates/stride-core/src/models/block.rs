//! Dated workout blocks for the week ahead.
//!
//! Unlike the [`WeeklySchedule`](super::WeeklySchedule) template, blocks are
//! concrete days. The service creates them from the template and they can
//! then be edited one at a time.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StrideError};

/// Activity types offered when editing a block.
pub const BLOCK_TYPES: [&str; 7] = [
    "Gym", "Ultimate", "Cycling", "Running", "Recovery", "Rest", "Other",
];

/// Canonical spelling of a block type, matched case-insensitively.
///
/// # Errors
///
/// Returns `StrideError::InvalidInput` for a type outside [`BLOCK_TYPES`].
pub fn block_type(raw: &str) -> Result<&'static str> {
    let raw = raw.trim();
    BLOCK_TYPES
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(raw))
        .ok_or_else(|| {
            StrideError::invalid_input("type").with_reason(format!(
                "'{raw}' is not one of {}",
                BLOCK_TYPES.join(", ")
            ))
        })
}

/// One scheduled workout day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutBlock {
    pub id: u64,
    pub date: Date,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub planned_duration_minutes: u32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

/// Changes to a single block. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockEdit {
    pub block_type: Option<String>,
    pub minutes: Option<u32>,
    /// An empty string clears the notes
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

impl BlockEdit {
    pub fn is_empty(&self) -> bool {
        self.block_type.is_none()
            && self.minutes.is_none()
            && self.notes.is_none()
            && self.completed.is_none()
    }

    /// The block with these changes applied.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if the new type is unknown.
    pub fn apply_to(&self, block: &WorkoutBlock) -> Result<WorkoutBlock> {
        let mut edited = block.clone();
        if let Some(raw) = &self.block_type {
            edited.block_type = block_type(raw)?.to_string();
        }
        if let Some(minutes) = self.minutes {
            edited.planned_duration_minutes = minutes;
        }
        if let Some(notes) = &self.notes {
            let notes = notes.trim();
            edited.notes = (!notes.is_empty()).then(|| notes.to_string());
        }
        if let Some(completed) = self.completed {
            edited.is_completed = completed;
        }
        Ok(edited)
    }
}

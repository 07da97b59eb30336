//! Collection wrapper types for displaying groups of domain objects.

use std::{collections::BTreeMap, fmt};

use super::datetime::BlockDate;
use crate::models::{ChatMessage, Goal, Role, SyncReport, WorkoutBlock};

/// Newtype wrapper for displaying a flat goal list.
///
/// # Examples
///
/// ```rust
/// use stride_core::{display::Goals, models::{Goal, GoalType}};
///
/// let goals = Goals(vec![Goal {
///     id: 1,
///     description: "Run 5k under 25 minutes".to_string(),
///     goal_type: GoalType::ShortTerm,
///     target_date: None,
///     is_completed: false,
/// }]);
/// assert!(goals.to_string().contains("### 1. Run 5k under 25 minutes"));
/// ```
pub struct Goals(pub Vec<Goal>);

impl Goals {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No goals found.");
        }
        for goal in &self.0 {
            write!(f, "{goal}")?;
        }
        Ok(())
    }
}

/// A revision conversation, one paragraph per turn.
pub struct Transcript<'a>(pub &'a [ChatMessage]);

impl fmt::Display for Transcript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in self.0 {
            let speaker = match message.role {
                Role::User => "You",
                Role::Assistant => "Coach",
            };
            writeln!(f, "**{speaker}:** {}", message.content)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tracker sync results reported alongside a generated plan.
pub struct SyncReports<'a>(pub &'a BTreeMap<String, SyncReport>);

impl fmt::Display for SyncReports<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (integration, report) in self.0 {
            match (&report.error, report.synced) {
                (Some(error), _) => writeln!(f, "- {integration}: {error}")?,
                (None, Some(count)) => writeln!(f, "- {integration}: synced {count} activities")?,
                (None, None) => writeln!(f, "- {integration}: up to date")?,
            }
        }
        Ok(())
    }
}

/// The week ahead as a table, one row per dated block.
pub struct WeekAhead<'a>(pub &'a [WorkoutBlock]);

impl fmt::Display for WeekAhead<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No workout blocks scheduled.");
        }
        writeln!(f, "| # | Date | Activity | Minutes | Notes |")?;
        writeln!(f, "|--:|------|----------|--------:|-------|")?;
        for block in self.0 {
            let done = if block.is_completed { " ✅" } else { "" };
            let notes = block
                .notes
                .as_deref()
                .map(|notes| notes.replace('|', "/").replace('\n', " "))
                .unwrap_or_default();
            writeln!(
                f,
                "| {} | {} | {}{done} | {} | {notes} |",
                block.id,
                BlockDate(&block.date),
                block.block_type,
                block.planned_duration_minutes
            )?;
        }
        Ok(())
    }
}

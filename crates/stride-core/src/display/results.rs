//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::models::goal_headline;
use crate::models::Goal;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use stride_core::{display::CreateResult, models::{Goal, GoalType}};
///
/// let goal = Goal {
///     id: 7,
///     description: "Stretch daily".to_string(),
///     goal_type: GoalType::Preference,
///     target_date: None,
///     is_completed: false,
/// };
/// assert!(CreateResult::new(goal).to_string().starts_with("Created goal with ID: 7"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Goal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created goal with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Goal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated goal with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Goal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted goal '{}' (ID: {})",
            goal_headline(&self.resource),
            self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalType;

    fn goal() -> Goal {
        Goal {
            id: 2,
            description: "Core:\n- Plank".to_string(),
            goal_type: GoalType::Preference,
            target_date: None,
            is_completed: true,
        }
    }

    #[test]
    fn test_update_lists_changes() {
        let text = UpdateResult::with_changes(goal(), vec!["Marked completed".to_string()]).to_string();
        assert!(text.starts_with("Updated goal with ID: 2"));
        assert!(text.contains("Changes made:\n- Marked completed"));
        assert!(text.contains("✅ Core"));
    }

    #[test]
    fn test_delete_uses_headline() {
        assert_eq!(
            DeleteResult::new(goal()).to_string(),
            "Deleted goal 'Core' (ID: 2)\n"
        );
    }
}

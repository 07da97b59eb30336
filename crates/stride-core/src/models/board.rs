//! Grouping of goals for the goal list view.

use jiff::civil::Date;

use super::Goal;

/// Active goals split into upcoming events and undated goals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoalBoard {
    /// Events on or after the reference day, soonest first
    pub events: Vec<Goal>,
    /// Goals without a date (preferences, routines, habits), in service order
    pub undated: Vec<Goal>,
}

impl GoalBoard {
    /// Partition goals as of `today`.
    ///
    /// Completed goals and events dated before `today` are left out.
    pub fn partition(goals: &[Goal], today: Date) -> Self {
        let mut board = Self::default();

        for goal in goals.iter().filter(|g| !g.is_completed) {
            match goal.target_date {
                Some(date) if date < today => {}
                Some(_) => board.events.push(goal.clone()),
                None => board.undated.push(goal.clone()),
            }
        }

        board.events.sort_by_key(|g| g.target_date);
        board
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.undated.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len() + self.undated.len()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::GoalType;

    fn goal(id: u64, target_date: Option<Date>, is_completed: bool) -> Goal {
        Goal {
            id,
            description: format!("goal {id}"),
            goal_type: GoalType::ShortTerm,
            target_date,
            is_completed,
        }
    }

    #[test]
    fn test_partition_filters_and_sorts() {
        let today = date(2026, 3, 10);
        let goals = vec![
            goal(1, Some(date(2026, 4, 1)), false),
            goal(2, None, false),
            goal(3, Some(date(2026, 3, 9)), false),
            goal(4, Some(date(2026, 3, 10)), false),
            goal(5, None, true),
            goal(6, None, false),
        ];

        let board = GoalBoard::partition(&goals, today);

        let event_ids: Vec<u64> = board.events.iter().map(|g| g.id).collect();
        let undated_ids: Vec<u64> = board.undated.iter().map(|g| g.id).collect();
        assert_eq!(event_ids, [4, 1]);
        assert_eq!(undated_ids, [2, 6]);
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn test_empty_board() {
        let board = GoalBoard::partition(&[goal(1, None, true)], date(2026, 1, 1));
        assert!(board.is_empty());
    }
}

//! Goal model, its derived category and status, and write payloads.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::routine::Routine;

/// Stored goal type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    #[default]
    ShortTerm,
    LongTerm,
    /// Standing preference or habit. Routines are stored as preferences.
    #[serde(alias = "routine")]
    Preference,
    /// Type written for goals saved with a target date
    Event,
    #[serde(other)]
    Other,
}

impl FromStr for GoalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "short_term" | "short" => Ok(GoalType::ShortTerm),
            "long_term" | "long" => Ok(GoalType::LongTerm),
            "preference" | "routine" => Ok(GoalType::Preference),
            "event" => Ok(GoalType::Event),
            "other" => Ok(GoalType::Other),
            _ => Err(format!("Invalid goal type: {s}")),
        }
    }
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::ShortTerm => "short_term",
            GoalType::LongTerm => "long_term",
            GoalType::Preference => "preference",
            GoalType::Event => "event",
            GoalType::Other => "other",
        }
    }
}

/// Completion status, derived from `is_completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
        }
    }
}

/// How a goal is grouped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalCategory {
    /// Any goal with a target date, whatever its stored type
    Event,
    /// A preference whose description parses as a routine
    Routine,
    Preference,
    ShortTerm,
    LongTerm,
    Other,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Event => "event",
            GoalCategory::Routine => "routine",
            GoalCategory::Preference => "preference",
            GoalCategory::ShortTerm => "short_term",
            GoalCategory::LongTerm => "long_term",
            GoalCategory::Other => "other",
        }
    }
}

/// A goal persisted by the coach service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: u64,

    /// Free text; routines are stored here in their text form
    pub description: String,

    #[serde(rename = "type", default)]
    pub goal_type: GoalType,

    #[serde(default, with = "target_date")]
    pub target_date: Option<Date>,

    #[serde(default)]
    pub is_completed: bool,
}

impl Goal {
    pub fn status(&self) -> GoalStatus {
        if self.is_completed {
            GoalStatus::Completed
        } else {
            GoalStatus::Active
        }
    }

    pub fn is_event(&self) -> bool {
        self.target_date.is_some()
    }

    /// Structured routine view of a preference goal's description.
    pub fn routine(&self) -> Option<Routine> {
        match self.goal_type {
            GoalType::Preference => Routine::parse(&self.description).ok(),
            _ => None,
        }
    }

    pub fn category(&self) -> GoalCategory {
        if self.is_event() {
            return GoalCategory::Event;
        }
        match self.goal_type {
            GoalType::Preference if self.routine().is_some() => GoalCategory::Routine,
            GoalType::Preference => GoalCategory::Preference,
            GoalType::ShortTerm => GoalCategory::ShortTerm,
            GoalType::LongTerm => GoalCategory::LongTerm,
            // A stored "event" whose date was cleared has nothing left to group by.
            GoalType::Event | GoalType::Other => GoalCategory::Other,
        }
    }
}

/// Fields of a goal being created or edited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoalDraft {
    pub description: String,
    pub goal_type: GoalType,
    /// Present only for event goals
    pub target_date: Option<Date>,
    pub is_completed: bool,
}

impl GoalDraft {
    pub fn new(description: impl Into<String>, goal_type: GoalType) -> Self {
        Self {
            description: description.into(),
            goal_type,
            ..Default::default()
        }
    }

    /// A routine goal: stored as a preference with the routine's text form.
    pub fn from_routine(routine: &Routine) -> Self {
        Self::new(routine.serialize(), GoalType::Preference)
    }

    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            description: goal.description.clone(),
            goal_type: goal.goal_type,
            target_date: goal.target_date,
            is_completed: goal.is_completed,
        }
    }

    /// Wire payload for create/update calls.
    pub fn payload(&self) -> GoalPayload<'_> {
        let goal_type = if self.target_date.is_some() {
            GoalType::Event
        } else {
            self.goal_type
        };
        let status = if self.is_completed {
            GoalStatus::Completed
        } else {
            GoalStatus::Active
        };

        GoalPayload {
            description: &self.description,
            goal_type,
            target_date: self.target_date,
            is_completed: self.is_completed,
            status,
        }
    }
}

/// Body of goal create/update requests.
#[derive(Debug, Serialize)]
pub struct GoalPayload<'a> {
    pub description: &'a str,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    #[serde(with = "target_date")]
    pub target_date: Option<Date>,
    pub is_completed: bool,
    pub status: GoalStatus,
}

/// Target dates travel as ISO datetimes; only the calendar date is kept.
mod target_date {
    use jiff::civil::Date;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&format!("{date}T00:00:00")),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| s.get(..10).and_then(|d| d.parse().ok())))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use serde_json::json;

    use super::*;

    fn goal(goal_type: GoalType, description: &str) -> Goal {
        Goal {
            id: 1,
            description: description.to_string(),
            goal_type,
            target_date: None,
            is_completed: false,
        }
    }

    #[test]
    fn test_deserialize_service_goal() {
        let goal: Goal = serde_json::from_value(json!({
            "id": 7,
            "description": "Half marathon",
            "type": "long_term",
            "status": "active",
            "target_date": "2026-10-04T00:00:00",
            "is_completed": false,
            "user_id": 1
        }))
        .unwrap();

        assert_eq!(goal.target_date, Some(date(2026, 10, 4)));
        assert_eq!(goal.category(), GoalCategory::Event);
        assert_eq!(goal.status(), GoalStatus::Active);
    }

    #[test]
    fn test_unknown_type_is_other() {
        let goal: Goal =
            serde_json::from_value(json!({"id": 1, "description": "x", "type": "habit"}))
                .unwrap();
        assert_eq!(goal.goal_type, GoalType::Other);
    }

    #[test]
    fn test_routine_type_alias_is_preference() {
        let goal: Goal = serde_json::from_value(
            json!({"id": 1, "description": "Core:\n- plank", "type": "routine"}),
        )
        .unwrap();
        assert_eq!(goal.goal_type, GoalType::Preference);
        assert_eq!(goal.category(), GoalCategory::Routine);
    }

    #[test]
    fn test_category_partition() {
        assert_eq!(
            goal(GoalType::Preference, "Mobility:\n- hips\n- ankles").category(),
            GoalCategory::Routine
        );
        assert_eq!(
            goal(GoalType::Preference, "No running on Sundays").category(),
            GoalCategory::Preference
        );
        assert_eq!(
            goal(GoalType::ShortTerm, "Core:\n- plank").category(),
            GoalCategory::ShortTerm
        );

        let mut dated = goal(GoalType::Preference, "Mobility:\n- hips");
        dated.target_date = Some(date(2026, 1, 1));
        assert_eq!(dated.category(), GoalCategory::Event);
    }

    #[test]
    fn test_event_payload_sends_event_type() {
        let mut draft = GoalDraft::new("10k race", GoalType::ShortTerm);
        draft.target_date = Some(date(2026, 5, 17));

        let body = serde_json::to_value(draft.payload()).unwrap();
        assert_eq!(body["type"], "event");
        assert_eq!(body["target_date"], "2026-05-17T00:00:00");
        assert_eq!(body["status"], "active");
    }

    #[test]
    fn test_completed_payload_status() {
        let mut draft = GoalDraft::new("Stretch daily", GoalType::Preference);
        draft.is_completed = true;

        let body = serde_json::to_value(draft.payload()).unwrap();
        assert_eq!(body["type"], "preference");
        assert_eq!(body["target_date"], serde_json::Value::Null);
        assert_eq!(body["status"], "completed");
    }

    #[test]
    fn test_goal_type_from_str() {
        assert_eq!("short-term".parse::<GoalType>().unwrap(), GoalType::ShortTerm);
        assert_eq!("Routine".parse::<GoalType>().unwrap(), GoalType::Preference);
        assert!("someday".parse::<GoalType>().is_err());
    }
}

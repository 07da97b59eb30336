//! One day of a generated activity plan.

use std::str::FromStr;

use jiff::civil::Date;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{Intensity, PlanValue};

/// One day's slice of the generated activity plan.
///
/// Every field except `date` is whatever shape the coach produced. A day that
/// arrives as something other than a mapping becomes an empty day, and an
/// unparseable date becomes `None`, so deserialization never fails on the
/// contents of a day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PlanValue")]
pub struct DayBlock {
    /// Calendar date the day is planned for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,

    /// Scheduled activity label (e.g. "Gym", "Rest")
    pub block_type: PlanValue,

    /// Free-text intensity, see [`DayBlock::intensity_level`]
    pub intensity: PlanValue,

    /// Headline of the day
    pub focus: PlanValue,

    /// Activity steps
    pub routine: PlanValue,

    /// Optional coach notes
    #[serde(skip_serializing_if = "PlanValue::is_null")]
    pub notes: PlanValue,
}

impl DayBlock {
    /// Classified intensity of this day.
    pub fn intensity_level(&self) -> Intensity {
        Intensity::classify(&self.intensity)
    }
}

impl From<PlanValue> for DayBlock {
    fn from(value: PlanValue) -> Self {
        let PlanValue::Map(entries) = value else {
            debug!("Plan day is not a mapping, treating it as empty");
            return Self::default();
        };

        let mut day = Self::default();
        for (key, field) in entries {
            match key.as_str() {
                "date" => day.date = parse_plan_date(&field),
                "block_type" => day.block_type = field,
                "intensity" => day.intensity = field,
                "focus" => day.focus = field,
                "routine" => day.routine = field,
                "notes" => day.notes = field,
                other => debug!("Ignoring unknown plan day field '{other}'"),
            }
        }
        day
    }
}

/// Accept `YYYY-MM-DD`, optionally followed by a time component.
fn parse_plan_date(value: &PlanValue) -> Option<Date> {
    let text = value.as_text()?.trim();
    text.parse::<Date>()
        .ok()
        .or_else(|| text.get(..10)?.parse().ok())
}

/// Day slots that can be revised through the coach conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DaySlot {
    Today,
    Tomorrow,
}

impl DaySlot {
    /// Position of the slot within a plan.
    pub fn index(&self) -> usize {
        match self {
            DaySlot::Today => 0,
            DaySlot::Tomorrow => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DaySlot::Today => "today",
            DaySlot::Tomorrow => "tomorrow",
        }
    }
}

impl FromStr for DaySlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(DaySlot::Today),
            "tomorrow" => Ok(DaySlot::Tomorrow),
            _ => Err(format!("Invalid day: {s} (expected today or tomorrow)")),
        }
    }
}

/// Heading label for the day at `index` within a plan.
pub fn day_label(index: usize) -> String {
    match index {
        0 => "TODAY".to_string(),
        1 => "TOMORROW".to_string(),
        n => format!("DAY {}", n + 1),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_deserializes_known_fields() {
        let day: DayBlock = serde_json::from_str(
            r#"{"date": "2026-03-02", "block_type": "Gym", "intensity": "High",
                "focus": "Legs", "routine": ["squat", "lunge"], "extra": 1}"#,
        )
        .unwrap();

        assert_eq!(day.date, Some(date(2026, 3, 2)));
        assert_eq!(day.block_type, PlanValue::from("Gym"));
        assert_eq!(day.intensity_level(), Intensity::High);
        assert_eq!(day.routine, PlanValue::from(vec!["squat", "lunge"]));
        assert!(day.notes.is_null());
    }

    #[test]
    fn test_malformed_day_becomes_empty() {
        let day: DayBlock = serde_json::from_str("null").unwrap();
        assert_eq!(day, DayBlock::default());

        let day: DayBlock = serde_json::from_str(r#"["not", "a", "day"]"#).unwrap();
        assert_eq!(day, DayBlock::default());
    }

    #[test]
    fn test_lenient_dates() {
        let day: DayBlock =
            serde_json::from_str(r#"{"date": "2026-03-02T12:00:00"}"#).unwrap();
        assert_eq!(day.date, Some(date(2026, 3, 2)));

        let day: DayBlock = serde_json::from_str(r#"{"date": "next tuesday"}"#).unwrap();
        assert_eq!(day.date, None);

        let day: DayBlock = serde_json::from_str(r#"{"date": 20260302}"#).unwrap();
        assert_eq!(day.date, None);
    }

    #[test]
    fn test_day_slot_parsing() {
        assert_eq!("Today".parse::<DaySlot>().unwrap(), DaySlot::Today);
        assert_eq!("tomorrow".parse::<DaySlot>().unwrap().index(), 1);
        assert!("yesterday".parse::<DaySlot>().is_err());
    }

    #[test]
    fn test_day_labels() {
        assert_eq!(day_label(0), "TODAY");
        assert_eq!(day_label(1), "TOMORROW");
        assert_eq!(day_label(2), "DAY 3");
    }
}

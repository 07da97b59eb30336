//! Weekly activity schedule template.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::PlanValue;
use crate::{
    error::{Result, StrideError},
    normalize::normalize,
};

/// Number of weekday slots in a schedule.
pub const DAYS_PER_WEEK: usize = 7;

/// Short weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Planned activity for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleEntry {
    /// Activity label, empty for a free day
    pub label: String,
    pub minutes: u32,
}

impl ScheduleEntry {
    pub fn new(label: impl Into<String>, minutes: u32) -> Self {
        Self {
            label: label.into(),
            minutes,
        }
    }

    pub fn is_free(&self) -> bool {
        self.label.trim().is_empty() && self.minutes == 0
    }
}

/// A total mapping from weekday index (Monday = 0) to a [`ScheduleEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklySchedule {
    entries: [ScheduleEntry; DAYS_PER_WEEK],
}

impl WeeklySchedule {
    /// An all-free week.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: usize) -> Option<&ScheduleEntry> {
        self.entries.get(day)
    }

    /// Set the entry for `day`.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if `day` is not 0–6.
    pub fn set(&mut self, day: usize, entry: ScheduleEntry) -> Result<()> {
        let slot = self.entries.get_mut(day).ok_or_else(|| {
            StrideError::invalid_input("day").with_reason(format!("{day} is not a weekday index 0-6"))
        })?;
        *slot = entry;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ScheduleEntry)> {
        self.entries.iter().enumerate()
    }

    /// Build from the service document, filling gaps with free days.
    ///
    /// Entries are `[label, minutes]` pairs keyed by the weekday index as a
    /// string. Keys outside 0–6 are skipped; malformed values become free days.
    pub fn from_document(document: &ScheduleDocument) -> Self {
        let mut schedule = Self::new();
        for (key, value) in &document.schedule {
            let Some(day) = key.trim().parse::<usize>().ok().filter(|d| *d < DAYS_PER_WEEK) else {
                debug!("Skipping schedule key '{key}'");
                continue;
            };
            schedule.entries[day] = entry_from_value(value);
        }
        schedule
    }

    /// Full seven-day document for the service.
    pub fn to_document(&self) -> ScheduleDocument {
        let schedule = self
            .iter()
            .map(|(day, entry)| {
                (
                    day.to_string(),
                    PlanValue::List(vec![
                        PlanValue::from(entry.label.as_str()),
                        PlanValue::from(entry.minutes),
                    ]),
                )
            })
            .collect();
        ScheduleDocument { schedule }
    }
}

fn entry_from_value(value: &PlanValue) -> ScheduleEntry {
    let PlanValue::List(parts) = value else {
        return ScheduleEntry::default();
    };

    let label = parts.first().map(normalize).unwrap_or_default();
    let minutes = match parts.get(1) {
        Some(PlanValue::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(PlanValue::Text(text)) => text.trim().parse().unwrap_or(0),
        _ => 0,
    };

    ScheduleEntry {
        label,
        minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
    }
}

/// Wire shape of the schedule endpoints: `{"schedule": {"0": ["Gym", 45]}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduleDocument {
    #[serde(default)]
    pub schedule: BTreeMap<String, PlanValue>,
}

/// Parse a weekday given as an index (`0`–`6`) or a name (`mon`, `Monday`).
///
/// # Errors
///
/// Returns `StrideError::InvalidInput` for anything else.
pub fn parse_weekday(input: &str) -> Result<usize> {
    let input = input.trim();
    if let Ok(day) = input.parse::<usize>() {
        if day < DAYS_PER_WEEK {
            return Ok(day);
        }
    }

    const FULL_NAMES: [&str; DAYS_PER_WEEK] = [
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ];

    let lowered = input.to_lowercase();
    FULL_NAMES
        .iter()
        .zip(WEEKDAY_NAMES)
        .position(|(full, short)| lowered == *full || lowered == short.to_lowercase())
        .ok_or_else(|| {
            StrideError::invalid_input("day")
                .with_reason(format!("'{input}' is not a weekday (0-6 or Mon-Sun)"))
        })
}

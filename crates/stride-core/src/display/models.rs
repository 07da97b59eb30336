//! Display implementations for domain models.
//!
//! Plan days render every field through [`normalize`], so whatever shape the
//! coach produced ends up as plain text and empty fields are left out.

use std::fmt;

use super::datetime::{GoalDate, PlanDate};
use crate::{
    models::{
        day_label, DayBlock, Goal, GoalBoard, GoalCategory, GoalStatus, GoalType, Height,
        Intensity, Plan, Profile, Units, Weight, WeeklySchedule, WEEKDAY_NAMES,
    },
    normalize::normalize,
};

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A plan day shown under its position label (`TODAY`, `TOMORROW`, ...).
pub struct DayCard<'a> {
    pub index: usize,
    pub day: &'a DayBlock,
}

impl fmt::Display for DayCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.day;
        match &day.date {
            Some(date) => writeln!(f, "## {} · {}", day_label(self.index), PlanDate(date))?,
            None => writeln!(f, "## {}", day_label(self.index))?,
        }
        writeln!(f)?;

        let block_type = normalize(&day.block_type);
        if !block_type.is_empty() {
            writeln!(f, "- **Activity**: {block_type}")?;
        }
        writeln!(f, "- **Intensity**: {}", day.intensity_level().with_icon())?;

        let focus = normalize(&day.focus);
        if !focus.is_empty() {
            writeln!(f, "- **Focus**: {focus}")?;
        }

        let routine = normalize(&day.routine);
        let steps = split_numbered_steps(&routine);
        if !steps.is_empty() {
            writeln!(f)?;
            writeln!(f, "### Routine")?;
            writeln!(f)?;
            for step in steps {
                writeln!(f, "{step}")?;
            }
        }

        let notes = normalize(&day.notes);
        if !notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "> 💡 {}", notes.replace('\n', "\n> "))?;
        }

        writeln!(f)
    }
}

impl fmt::Display for DayBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DayCard { index: 0, day: self })
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, day) in self.days().iter().enumerate() {
            write!(f, "{}", DayCard { index, day })?;
        }
        Ok(())
    }
}

/// Split routine text into lines, breaking before every `N. ` marker.
///
/// Coaches often send numbered steps run together on one line
/// (`1. Warm up 2. Squats`); this puts each on its own line.
pub(crate) fn split_numbered_steps(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut cuts = vec![0];

    for (i, b) in bytes.iter().enumerate() {
        let starts_number = b.is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit());
        if !starts_number || i == 0 {
            continue;
        }
        let digits = bytes[i..].iter().take_while(|c| c.is_ascii_digit()).count();
        let rest = &bytes[i + digits..];
        if rest.len() >= 2 && rest[0] == b'.' && rest[1].is_ascii_whitespace() {
            cuts.push(i);
        }
    }
    cuts.push(text.len());

    cuts.windows(2)
        .flat_map(|w| text[w[0]..w[1]].lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// First line of the description, or the routine name for routines.
pub(crate) fn goal_headline(goal: &Goal) -> String {
    match goal.routine() {
        Some(routine) => routine.name,
        None => goal
            .description
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string(),
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_completed { "✅ " } else { "" };
        writeln!(
            f,
            "### {}. {marker}{} ({})",
            self.id,
            goal_headline(self),
            self.category()
        )?;
        writeln!(f)?;

        if let Some(date) = &self.target_date {
            writeln!(f, "- **Target date**: {}", GoalDate(date))?;
        }
        writeln!(f, "- **Status**: {}", self.status())?;

        match self.routine() {
            Some(routine) => {
                writeln!(f)?;
                for (n, step) in routine.steps.iter().enumerate() {
                    writeln!(f, "{}. {step}", n + 1)?;
                }
            }
            None => {
                let rest: Vec<&str> = self
                    .description
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .skip(1)
                    .collect();
                if !rest.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "{}", rest.join("\n"))?;
                }
            }
        }

        writeln!(f)
    }
}

impl fmt::Display for GoalBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No active goals.");
        }

        if !self.events.is_empty() {
            writeln!(f, "## Upcoming events")?;
            writeln!(f)?;
            for goal in &self.events {
                write!(f, "{goal}")?;
            }
        }

        if !self.undated.is_empty() {
            writeln!(f, "## Goals and preferences")?;
            writeln!(f)?;
            for goal in &self.undated {
                write!(f, "{goal}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for WeeklySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Day | Activity | Minutes |")?;
        writeln!(f, "|-----|----------|--------:|")?;
        for (day, entry) in self.iter() {
            if entry.is_free() {
                writeln!(f, "| {} | *free* | |", WEEKDAY_NAMES[day])?;
            } else {
                writeln!(f, "| {} | {} | {} |", WEEKDAY_NAMES[day], entry.label, entry.minutes)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Height::Centimetres(cm) => write!(f, "{cm} cm"),
            Height::FeetInches { feet, inches } => write!(f, "{feet} ft {inches} in"),
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Kilograms(kg) => write!(f, "{kg} kg"),
            Weight::Pounds(lbs) => write!(f, "{lbs} lbs"),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let connected = |on: bool| if on { "connected" } else { "not connected" };

        writeln!(f, "## Profile")?;
        writeln!(f)?;
        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            writeln!(f, "- **Name**: {name}")?;
        }
        writeln!(f, "- **Email**: {}", self.email)?;
        if let Some(age) = self.age {
            writeln!(f, "- **Age**: {age}")?;
        }
        if let Some(gender) = &self.gender {
            writeln!(f, "- **Gender**: {gender}")?;
        }
        if let Some(height) = self.height_in_units() {
            writeln!(f, "- **Height**: {height}")?;
        }
        if let Some(weight) = self.weight_in_units() {
            writeln!(f, "- **Weight**: {weight}")?;
        }
        writeln!(f, "- **Units**: {}", self.units())?;
        writeln!(f, "- **AI model**: {}", self.ai_model())?;
        writeln!(f, "- **Strava**: {}", connected(self.strava_connected))?;
        writeln!(f, "- **WHOOP**: {}", connected(self.whoop_connected))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{PlanValue, ScheduleEntry};

    #[test]
    fn test_split_numbered_steps() {
        assert_eq!(
            split_numbered_steps("1. Warm up 2. Squats 5x5 3. Cool down"),
            ["1. Warm up", "2. Squats 5x5", "3. Cool down"]
        );
        assert_eq!(split_numbered_steps("Rest day"), ["Rest day"]);
        assert_eq!(split_numbered_steps("9. a 10. b"), ["9. a", "10. b"]);
        assert_eq!(split_numbered_steps("Run 5.5km easy"), ["Run 5.5km easy"]);
        assert!(split_numbered_steps("").is_empty());
    }

    #[test]
    fn test_day_card_rendering() {
        let day = DayBlock {
            date: Some(date(2026, 1, 5)),
            block_type: PlanValue::from("Gym"),
            intensity: PlanValue::from("High"),
            focus: PlanValue::Null,
            routine: PlanValue::from(vec!["1. Squat", "2. Bench"]),
            notes: PlanValue::from("Hydrate"),
        };

        let text = DayCard { index: 1, day: &day }.to_string();
        assert!(text.starts_with("## TOMORROW · Monday, Jan 5"));
        assert!(text.contains("- **Activity**: Gym"));
        assert!(text.contains("🔴 High"));
        assert!(!text.contains("**Focus**"));
        assert!(text.contains("1. Squat\n2. Bench"));
        assert!(text.contains("> 💡 Hydrate"));
    }

    #[test]
    fn test_malformed_day_still_renders() {
        let day = DayBlock::from(PlanValue::from(42_i64));
        let text = day.to_string();
        assert!(text.contains("## TODAY"));
        assert!(text.contains("⚪ Unknown"));
    }

    #[test]
    fn test_goal_rendering() {
        let routine = Goal {
            id: 4,
            description: "Mobility:\n- Hips\n- Ankles".to_string(),
            goal_type: GoalType::Preference,
            target_date: None,
            is_completed: false,
        };
        let text = routine.to_string();
        assert!(text.starts_with("### 4. Mobility (routine)"));
        assert!(text.contains("1. Hips\n2. Ankles"));

        let event = Goal {
            id: 5,
            description: "Half marathon".to_string(),
            goal_type: GoalType::Event,
            target_date: Some(date(2026, 5, 2)),
            is_completed: false,
        };
        assert!(event.to_string().contains("Sat, May 2 2026"));
    }

    #[test]
    fn test_schedule_table() {
        let mut schedule = WeeklySchedule::new();
        schedule.set(0, ScheduleEntry::new("Gym", 45)).unwrap();
        let text = schedule.to_string();
        assert!(text.contains("| Mon | Gym | 45 |"));
        assert!(text.contains("| Sun | *free* | |"));
    }

    #[test]
    fn test_profile_in_preferred_units() {
        let mut profile = Profile {
            email: "runner@example.com".to_string(),
            height: Some(180),
            weight: Some(80),
            strava_connected: true,
            ..Default::default()
        };
        let text = profile.to_string();
        assert!(text.contains("- **Height**: 5 ft 11 in"));
        assert!(text.contains("- **Weight**: 176 lbs"));
        assert!(text.contains("- **AI model**: gpt-4o"));
        assert!(text.contains("- **Strava**: connected"));
        assert!(text.contains("- **WHOOP**: not connected"));
        assert!(!text.contains("**Age**"));

        let mut settings = serde_json::Map::new();
        settings.insert("units".to_string(), "metric".into());
        profile.settings = Some(settings);
        let text = profile.to_string();
        assert!(text.contains("- **Height**: 180 cm"));
        assert!(text.contains("- **Weight**: 80 kg"));
        assert!(text.contains("- **Units**: metric"));
    }
}

//! Text codec for routines: a name followed by an ordered list of steps.
//!
//! A routine is stored in a goal's free-text description using this grammar:
//!
//! ```text
//! Morning mobility:
//! - Cat-cow x10
//! - Hip circles
//! ```
//!
//! The first non-blank line ends with `:` and names the routine; every later
//! non-blank line starts with `"- "` and holds one step. Parsing is
//! all-or-nothing: text that does not follow the grammar is [`NotARoutine`]
//! and should be edited as plain text instead.
//!
//! Names and steps are single lines in this format. When serializing, any
//! line break inside a name or step is folded into one space, so
//! `parse(serialize(r))` gives back `r` with each part trimmed and folded.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::error::{Result, StrideError};

const STEP_PREFIX: &str = "- ";

/// The description does not follow the routine grammar.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("description is not a routine")]
pub struct NotARoutine;

/// A named, ordered list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub name: String,
    pub steps: Vec<String>,
}

impl Routine {
    pub fn new(name: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Parse a description into a routine.
    ///
    /// # Errors
    ///
    /// Returns [`NotARoutine`] when there are fewer than two non-blank lines,
    /// the first line does not end with `:`, or any later line does not start
    /// with `"- "`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stride_core::routine::{NotARoutine, Routine};
    ///
    /// let routine = Routine::parse("Core:\n- Plank\n\n- Dead bug").unwrap();
    /// assert_eq!(routine.name, "Core");
    /// assert_eq!(routine.steps, ["Plank", "Dead bug"]);
    ///
    /// assert_eq!(Routine::parse("Title:\n- a\nbad\n- b"), Err(NotARoutine));
    /// ```
    pub fn parse(description: &str) -> std::result::Result<Self, NotARoutine> {
        let mut lines = description
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        let name = lines.next().and_then(|line| line.strip_suffix(':')).ok_or(NotARoutine)?;

        let steps = lines
            .map(|line| line.strip_prefix(STEP_PREFIX).map(str::to_string).ok_or(NotARoutine))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if steps.is_empty() {
            return Err(NotARoutine);
        }

        Ok(Self {
            name: name.to_string(),
            steps,
        })
    }

    /// Serialize back into description text.
    ///
    /// Blank steps are dropped and line breaks inside the name or a step
    /// become single spaces. With a blank name or no remaining steps the
    /// result is just the name, so an in-progress edit degrades to plain
    /// text.
    pub fn serialize(&self) -> String {
        serialize_parts(&self.name, &self.steps)
    }
}

impl FromStr for Routine {
    type Err = NotARoutine;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Trim `text` and join its lines with single spaces.
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn serialize_parts<S: AsRef<str>>(name: &str, steps: &[S]) -> String {
    let name = single_line(name);
    let steps: Vec<String> = steps
        .iter()
        .map(|step| single_line(step.as_ref()))
        .filter(|step| !step.is_empty())
        .collect();

    if name.is_empty() || steps.is_empty() {
        return name;
    }

    let mut text = format!("{name}:");
    for step in &steps {
        text.push('\n');
        text.push_str(STEP_PREFIX);
        text.push_str(step);
    }
    text
}

/// Direction for [`RoutineDraft::move_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMove {
    Up,
    Down,
}

/// A routine being edited step by step.
///
/// Drafts loaded from an existing routine keep an empty slot at the end for
/// the next step. Blank slots are dropped when the draft is serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineDraft {
    name: String,
    steps: Vec<String>,
}

impl RoutineDraft {
    /// A fresh draft with one empty step slot.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: vec![String::new()],
        }
    }

    pub fn from_routine(routine: &Routine) -> Self {
        let mut steps = routine.steps.clone();
        steps.push(String::new());
        Self {
            name: routine.name.clone(),
            steps,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn add_step(&mut self) {
        self.steps.push(String::new());
    }

    /// Replace the text of step `index`.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if `index` is out of range.
    pub fn update_step(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let slot = self.steps.get_mut(index).ok_or_else(|| step_out_of_range(index))?;
        *slot = text.into();
        Ok(())
    }

    /// Remove step `index`, returning its text.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if `index` is out of range.
    pub fn remove_step(&mut self, index: usize) -> Result<String> {
        if index >= self.steps.len() {
            return Err(step_out_of_range(index));
        }
        Ok(self.steps.remove(index))
    }

    /// Swap step `index` with its neighbour. Moving past either end is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if `index` is out of range.
    pub fn move_step(&mut self, index: usize, direction: StepMove) -> Result<()> {
        if index >= self.steps.len() {
            return Err(step_out_of_range(index));
        }
        let target = match direction {
            StepMove::Up => index.checked_sub(1),
            StepMove::Down => Some(index + 1).filter(|t| *t < self.steps.len()),
        };
        if let Some(target) = target {
            self.steps.swap(index, target);
        }
        Ok(())
    }

    /// Description text for saving.
    pub fn to_description(&self) -> String {
        serialize_parts(&self.name, &self.steps)
    }
}

fn step_out_of_range(index: usize) -> StrideError {
    StrideError::invalid_input("step").with_reason(format!("no step at position {index}"))
}

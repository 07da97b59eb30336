//! Multi-day plan model and the generation response envelope.

use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};

use super::{DayBlock, PlanValue};
use crate::error::{Result, StrideError};

/// Fewest days a generated plan may hold.
pub const MIN_PLAN_DAYS: usize = 2;

/// Most days a generated plan may hold.
pub const MAX_PLAN_DAYS: usize = 3;

/// An ordered run of 2–3 generated days, conventionally today and tomorrow.
///
/// Days are shared behind [`Arc`] so that revising one day produces a new plan
/// in which every other day is the very same allocation as before.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    days: Vec<Arc<DayBlock>>,
}

impl Plan {
    /// Build a plan, rejecting day counts outside 2–3.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Generation` when the day count is out of range.
    pub fn new(days: Vec<DayBlock>) -> Result<Self> {
        if !(MIN_PLAN_DAYS..=MAX_PLAN_DAYS).contains(&days.len()) {
            return Err(StrideError::generation(format!(
                "Received invalid plan format from AI Coach ({} days).",
                days.len()
            )));
        }
        Ok(Self {
            days: days.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn days(&self) -> &[Arc<DayBlock>] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Option<&DayBlock> {
        self.days.get(index).map(AsRef::as_ref)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Replace the day at `index` wholesale with `revised`.
    ///
    /// The receiver is left untouched and the days at every other index are
    /// shared with the returned plan.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if `index` is outside the plan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use stride_core::models::{DayBlock, Plan, PlanValue};
    ///
    /// let day = |focus: &str| DayBlock { focus: PlanValue::from(focus), ..Default::default() };
    /// let plan = Plan::new(vec![day("legs"), day("rest")]).unwrap();
    ///
    /// let revised = plan.apply_revision(1, day("swim")).unwrap();
    /// assert!(Arc::ptr_eq(&plan.days()[0], &revised.days()[0]));
    /// assert_eq!(revised.day(1).unwrap().focus, PlanValue::from("swim"));
    /// assert_eq!(plan.day(1).unwrap().focus, PlanValue::from("rest"));
    /// ```
    pub fn apply_revision(&self, index: usize, revised: DayBlock) -> Result<Plan> {
        if index >= self.days.len() {
            return Err(StrideError::invalid_input("index").with_reason(format!(
                "day {index} is outside a {}-day plan",
                self.days.len()
            )));
        }

        let mut days = self.days.clone();
        days[index] = Arc::new(revised);
        Ok(Plan { days })
    }
}

/// Per-integration outcome of the data sync the service runs before planning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncReport {
    #[serde(default)]
    pub synced: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Raw response of the plan generation call.
///
/// The service sends either `plan` or a human-readable `message` (older
/// deployments use `error` for the same purpose), plus optional sync results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanResponse {
    #[serde(default)]
    pub plan: PlanValue,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub sync: Option<BTreeMap<String, SyncReport>>,
}

/// A successfully generated plan together with its sync report.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    pub plan: Plan,
    pub sync: BTreeMap<String, SyncReport>,
}

impl PlanResponse {
    /// Interpret the response as a plan or a generation failure.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Generation` carrying the service message, or a
    /// generic message when the response holds neither a plan nor a message.
    pub fn into_plan(self) -> Result<GeneratedPlan> {
        let sync = self.sync.unwrap_or_default();
        match self.plan {
            PlanValue::List(days) => {
                let plan = Plan::new(days.into_iter().map(DayBlock::from).collect())?;
                Ok(GeneratedPlan { plan, sync })
            }
            _ => {
                let message = self
                    .message
                    .or(self.error)
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| StrideError::GENERIC_GENERATION_FAILURE.to_string());
                Err(StrideError::generation(message))
            }
        }
    }
}

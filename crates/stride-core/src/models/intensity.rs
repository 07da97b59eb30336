//! Intensity classification for generated days.

use serde::{Deserialize, Serialize};

use super::PlanValue;
use crate::normalize::normalize;

/// Coarse intensity bucket of a planned day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
    Unknown,
}

impl Intensity {
    /// Classify free-text intensity by case-insensitive substring match.
    ///
    /// `"low"` is checked first, then `"mod"`/`"med"`, then `"high"`, so a
    /// value such as "low to high" is [`Intensity::Low`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stride_core::models::{Intensity, PlanValue};
    ///
    /// assert_eq!(Intensity::classify(&PlanValue::from("low to high")), Intensity::Low);
    /// assert_eq!(Intensity::classify(&PlanValue::from("Moderate")), Intensity::Moderate);
    /// assert_eq!(Intensity::classify(&PlanValue::from("")), Intensity::Unknown);
    /// ```
    pub fn classify(value: &PlanValue) -> Self {
        Self::classify_text(&normalize(value))
    }

    /// Classify an already-rendered intensity label.
    pub fn classify_text(text: &str) -> Self {
        let text = text.to_lowercase();
        if text.contains("low") {
            Intensity::Low
        } else if text.contains("mod") || text.contains("med") {
            Intensity::Moderate
        } else if text.contains("high") {
            Intensity::High
        } else {
            Intensity::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
            Intensity::Unknown => "unknown",
        }
    }

    /// Get the bucket with a colored marker for terminal display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            Intensity::Low => "🟢 Low",
            Intensity::Moderate => "🟡 Moderate",
            Intensity::High => "🔴 High",
            Intensity::Unknown => "⚪ Unknown",
        }
    }
}

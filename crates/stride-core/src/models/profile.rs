//! The athlete profile kept by the service, and unit conversion for it.
//!
//! The service stores height in whole centimetres and weight in whole
//! kilograms. Imperial values are converted on the way in and out, rounding
//! to whole units each way.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::StrideError;

/// Coach models the service accepts.
pub const AI_MODELS: [&str; 3] = ["gpt-4o", "gpt-4-turbo", "gpt-3.5-turbo"];

/// Model shown when the profile has none.
pub const DEFAULT_AI_MODEL: &str = "gpt-4o";

const CM_PER_INCH: f64 = 2.54;
const LBS_PER_KG: f64 = 2.20462;

/// Unit system used to show and enter measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Imperial,
    Metric,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Imperial => "imperial",
            Units::Metric => "metric",
        }
    }
}

impl FromStr for Units {
    type Err = StrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "imperial" => Ok(Units::Imperial),
            "metric" => Ok(Units::Metric),
            other => Err(StrideError::invalid_input("units")
                .with_reason(format!("'{other}' is not imperial or metric"))),
        }
    }
}

/// A height in either unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    Centimetres(u32),
    FeetInches { feet: u32, inches: u32 },
}

impl Height {
    /// Express `cm` in `units`. Inches round to the nearest whole inch and
    /// carry into feet at 12.
    pub fn from_cm(cm: u32, units: Units) -> Self {
        match units {
            Units::Metric => Height::Centimetres(cm),
            Units::Imperial => {
                let total = f64::from(cm) / CM_PER_INCH;
                let mut feet = (total / 12.0).floor() as u32;
                let mut inches = (total % 12.0).round() as u32;
                if inches == 12 {
                    feet += 1;
                    inches = 0;
                }
                Height::FeetInches { feet, inches }
            }
        }
    }

    /// Whole centimetres, as stored by the service.
    pub fn to_cm(self) -> u32 {
        match self {
            Height::Centimetres(cm) => cm,
            Height::FeetInches { feet, inches } => {
                (f64::from(feet * 12 + inches) * CM_PER_INCH).round() as u32
            }
        }
    }
}

/// A body weight in either unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Kilograms(u32),
    Pounds(u32),
}

impl Weight {
    pub fn from_kg(kg: u32, units: Units) -> Self {
        match units {
            Units::Metric => Weight::Kilograms(kg),
            Units::Imperial => Weight::Pounds((f64::from(kg) * LBS_PER_KG).round() as u32),
        }
    }

    /// A value entered in `units`.
    pub fn entered(value: u32, units: Units) -> Self {
        match units {
            Units::Metric => Weight::Kilograms(value),
            Units::Imperial => Weight::Pounds(value),
        }
    }

    /// Whole kilograms, as stored by the service.
    pub fn to_kg(self) -> u32 {
        match self {
            Weight::Kilograms(kg) => kg,
            Weight::Pounds(lbs) => (f64::from(lbs) / LBS_PER_KG).round() as u32,
        }
    }
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Centimetres
    #[serde(default)]
    pub height: Option<u32>,
    /// Kilograms
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub openai_model: Option<String>,
    /// Free-form client settings; other clients keep their own keys here
    #[serde(default)]
    pub settings: Option<Map<String, Value>>,
    #[serde(rename = "strava_access_token", default, deserialize_with = "token_present")]
    pub strava_connected: bool,
    #[serde(rename = "whoop_access_token", default, deserialize_with = "token_present")]
    pub whoop_connected: bool,
}

fn token_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token.is_some_and(|t| !t.is_empty()))
}

impl Profile {
    /// Preferred unit system, imperial unless the profile says otherwise.
    pub fn units(&self) -> Units {
        self.settings
            .as_ref()
            .and_then(|settings| settings.get("units"))
            .and_then(Value::as_str)
            .and_then(|units| units.parse().ok())
            .unwrap_or_default()
    }

    pub fn ai_model(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_AI_MODEL)
    }

    /// Height in the preferred units. A stored zero counts as unset.
    pub fn height_in_units(&self) -> Option<Height> {
        self.height
            .filter(|cm| *cm > 0)
            .map(|cm| Height::from_cm(cm, self.units()))
    }

    pub fn weight_in_units(&self) -> Option<Weight> {
        self.weight
            .filter(|kg| *kg > 0)
            .map(|kg| Weight::from_kg(kg, self.units()))
    }
}

/// Requested profile changes. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub height: Option<Height>,
    pub weight: Option<Weight>,
    pub units: Option<Units>,
    pub openai_model: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Request body for these changes, with measurements in metric.
    ///
    /// The service replaces the whole settings object, so a units change is
    /// merged into the settings `current` already has.
    pub fn to_update(&self, current: &Profile) -> ProfileUpdate {
        let settings = self.units.map(|units| {
            let mut settings = current.settings.clone().unwrap_or_default();
            settings.insert("units".to_string(), Value::from(units.as_str()));
            settings
        });

        ProfileUpdate {
            age: self.age,
            gender: self.gender.clone(),
            height: self.height.map(Height::to_cm),
            weight: self.weight.map(Weight::to_kg),
            openai_model: self.openai_model.clone(),
            settings,
        }
    }
}

/// Body of profile update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Map<String, Value>>,
}

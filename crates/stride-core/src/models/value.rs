//! Loosely-shaped values produced by the AI coach.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Any JSON-like value a generated plan field may hold.
///
/// Plan fields come from a generative service and can be a string, a number,
/// a list, or a nested mapping of arbitrary depth. Mappings keep the key order
/// in which the service sent them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum PlanValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    List(Vec<PlanValue>),
    Map(Vec<(String, PlanValue)>),
}

impl PlanValue {
    /// Returns true when the value is absent.
    pub fn is_null(&self) -> bool {
        matches!(self, PlanValue::Null)
    }

    /// Borrow the text of a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PlanValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Look up a key of a `Map` value. The first matching entry wins.
    pub fn get(&self, key: &str) -> Option<&PlanValue> {
        match self {
            PlanValue::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<Value> for PlanValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => PlanValue::Null,
            Value::Bool(b) => PlanValue::Bool(b),
            Value::Number(n) => PlanValue::Number(n),
            Value::String(s) => PlanValue::Text(s),
            Value::Array(items) => PlanValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                PlanValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<PlanValue> for Value {
    fn from(value: PlanValue) -> Self {
        match value {
            PlanValue::Null => Value::Null,
            PlanValue::Bool(b) => Value::Bool(b),
            PlanValue::Number(n) => Value::Number(n),
            PlanValue::Text(s) => Value::String(s),
            PlanValue::List(items) => Value::Array(items.into_iter().map(Into::into).collect()),
            PlanValue::Map(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (k, v) in entries {
                    map.insert(k, v.into());
                }
                Value::Object(map)
            }
        }
    }
}

impl From<&str> for PlanValue {
    fn from(text: &str) -> Self {
        PlanValue::Text(text.to_string())
    }
}

impl From<String> for PlanValue {
    fn from(text: String) -> Self {
        PlanValue::Text(text)
    }
}

impl From<i64> for PlanValue {
    fn from(n: i64) -> Self {
        PlanValue::Number(n.into())
    }
}

impl From<u32> for PlanValue {
    fn from(n: u32) -> Self {
        PlanValue::Number(n.into())
    }
}

impl<T: Into<PlanValue>> From<Vec<T>> for PlanValue {
    fn from(items: Vec<T>) -> Self {
        PlanValue::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_keeps_service_key_order() {
        let value: PlanValue =
            serde_json::from_str(r#"{"warmup": "jog", "main": "squats", "cooldown": "stretch"}"#)
                .unwrap();

        let PlanValue::Map(entries) = value else {
            panic!("expected a mapping");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["warmup", "main", "cooldown"]);
    }

    #[test]
    fn test_serializes_back_to_same_json() {
        let raw = r#"{"sets":[3,"x",{"reps":10}],"done":false,"note":null}"#;
        let value: PlanValue = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), raw);
    }

    #[test]
    fn test_get_reads_first_matching_key() {
        let value: PlanValue = serde_json::from_str(r#"{"a": 1, "b": "two"}"#).unwrap();
        assert_eq!(value.get("b").and_then(PlanValue::as_text), Some("two"));
        assert!(value.get("missing").is_none());
        assert!(PlanValue::from("text").get("a").is_none());
    }
}

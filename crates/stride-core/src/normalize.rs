//! Rendering of loosely-shaped plan values into display text.
//!
//! [`normalize`] is total: every [`PlanValue`] produces a string, and no shape
//! the coach service can send makes it fail. Text passes through untouched,
//! numbers use their canonical decimal form, lists put one element per line,
//! and mappings emit `key: value` lines for entries whose value renders to
//! something non-empty.

use crate::models::PlanValue;

/// Nesting level beyond which remaining structure is dropped.
pub const MAX_DEPTH: usize = 32;

/// Convert a plan value into stable, human-readable text.
///
/// # Examples
///
/// ```rust
/// use stride_core::{normalize, PlanValue};
///
/// let value: PlanValue =
///     serde_json::from_str(r#"{"warmup": "10 min jog", "skip": "", "sets": [3, 4]}"#).unwrap();
/// assert_eq!(normalize(&value), "warmup: 10 min jog\nsets: 3\n4");
/// ```
pub fn normalize(value: &PlanValue) -> String {
    normalize_at(value, 0)
}

fn normalize_at(value: &PlanValue, depth: usize) -> String {
    if depth > MAX_DEPTH {
        return String::new();
    }

    match value {
        PlanValue::Text(text) => text.clone(),
        PlanValue::Number(n) => n.to_string(),
        PlanValue::List(items) => items
            .iter()
            .map(|item| normalize_at(item, depth + 1))
            .collect::<Vec<_>>()
            .join("\n"),
        PlanValue::Map(entries) => entries
            .iter()
            .filter_map(|(key, item)| {
                let text = normalize_at(item, depth + 1);
                (!text.is_empty()).then(|| format!("{key}: {text}"))
            })
            .collect::<Vec<_>>()
            .join("\n"),
        PlanValue::Null | PlanValue::Bool(_) => String::new(),
    }
}

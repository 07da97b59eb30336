//! Conversation messages exchanged when revising a day with the coach.

use serde::{Deserialize, Serialize};

use super::{DayBlock, DaySlot, PlanValue};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of a revision conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Body of a revision request: the slot and the full history including the
/// newest user turn.
#[derive(Debug, Serialize)]
pub struct RevisionRequest<'a> {
    pub day: DaySlot,
    pub messages: &'a [ChatMessage],
}

/// The coach's answer to a revision request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevisionReply {
    #[serde(default)]
    pub reply: String,
    /// Complete replacement day, when the coach changed the plan
    #[serde(default)]
    pub plan: PlanValue,
}

impl RevisionReply {
    /// The replacement day, if the reply carries one.
    pub fn revised_day(&self) -> Option<DayBlock> {
        match &self.plan {
            PlanValue::Map(_) => Some(DayBlock::from(self.plan.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_body_shape() {
        let messages = vec![
            ChatMessage::user("Make it shorter"),
            ChatMessage::assistant("Done, 30 minutes."),
        ];
        let body = serde_json::to_value(RevisionRequest {
            day: DaySlot::Tomorrow,
            messages: &messages,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "day": "tomorrow",
                "messages": [
                    {"role": "user", "content": "Make it shorter"},
                    {"role": "assistant", "content": "Done, 30 minutes."}
                ]
            })
        );
    }

    #[test]
    fn test_reply_without_plan() {
        let reply: RevisionReply =
            serde_json::from_value(json!({"reply": "Generate a plan first.", "plan": null}))
                .unwrap();
        assert!(reply.revised_day().is_none());
    }

    #[test]
    fn test_reply_with_plan() {
        let reply: RevisionReply = serde_json::from_value(json!({
            "reply": "Swapped to a swim.",
            "plan": {"block_type": "Swim", "intensity": "low"}
        }))
        .unwrap();

        let day = reply.revised_day().unwrap();
        assert_eq!(day.block_type, PlanValue::from("Swim"));
    }
}

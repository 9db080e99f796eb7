//! Message wire types

use agentdesk_core::{MessageRole, ToolCallPayload, ToolResultPayload};
use serde::{Deserialize, Serialize};

use super::{lenient, null_default};

/// Message as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub chat_id: String,
    pub role: MessageRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Payloads that do not decode are treated as absent.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tool_call: Option<ToolCallPayload>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tool_result: Option<ToolResultPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request to append a message.
///
/// `content` is omitted when unset (the store defaults it to `""`); the
/// payloads are sent as `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCreateDto {
    pub chat_id: String,
    pub role: MessageRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub tool_call: Option<ToolCallPayload>,
    pub tool_result: Option<ToolResultPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_tool_call_message() {
        let dto: MessageDto = serde_json::from_value(json!({
            "id": "m1",
            "chat_id": "c1",
            "role": "tool_call",
            "content": "",
            "tool_call": {"tool_name": "search", "arguments": {"q": "rust"}, "call_id": "x"},
            "tool_result": null,
            "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(dto.role, MessageRole::ToolCall);
        let call = dto.tool_call.unwrap();
        assert_eq!(call.tool_name, "search");
        assert_eq!(call.arguments["q"], "rust");
        assert!(dto.tool_result.is_none());
    }

    #[test]
    fn malformed_tool_call_is_dropped() {
        let dto: MessageDto = serde_json::from_value(json!({
            "id": "m2",
            "chat_id": "c1",
            "role": "tool_call",
            "tool_call": {"arguments": {}}
        }))
        .unwrap();
        assert_eq!(dto.id.as_deref(), Some("m2"));
        assert!(dto.tool_call.is_none());
    }

    #[test]
    fn create_omits_unset_content() {
        let value = serde_json::to_value(MessageCreateDto {
            chat_id: "c1".to_string(),
            role: MessageRole::User,
            content: None,
            tool_call: None,
            tool_result: None,
        })
        .unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("content"));
        assert!(object["tool_call"].is_null());
        assert_eq!(object["role"], "user");
    }
}

use agentdesk_api::{MessageCreateDto, MessageDto};
use agentdesk_core::{parse_timestamp, to_iso, Message, MessageCreate};

use super::non_empty;

pub fn to_message(dto: MessageDto) -> Message {
    Message {
        id: dto.id.unwrap_or_default(),
        chat_id: dto.chat_id,
        role: dto.role,
        content: dto.content.unwrap_or_default(),
        tool_call: dto.tool_call,
        tool_result: dto.tool_result,
        created_at: parse_timestamp(dto.created_at.as_deref()),
    }
}

pub fn to_message_create_dto(model: &MessageCreate) -> MessageCreateDto {
    MessageCreateDto {
        chat_id: model.chat_id.clone(),
        role: model.role,
        content: model.content.clone(),
        tool_call: model.tool_call.clone(),
        tool_result: model.tool_result.clone(),
    }
}

pub fn to_message_dto(message: &Message) -> MessageDto {
    MessageDto {
        id: non_empty(&message.id),
        chat_id: message.chat_id.clone(),
        role: message.role,
        content: Some(message.content.clone()),
        tool_call: message.tool_call.clone(),
        tool_result: message.tool_result.clone(),
        created_at: to_iso(message.created_at.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentdesk_core::{MessageRole, ToolResultPayload};
    use serde_json::json;

    #[test]
    fn missing_content_becomes_empty_string() {
        let message = to_message(
            serde_json::from_value(json!({"id": "m1", "chat_id": "c1", "role": "assistant"}))
                .unwrap(),
        );
        assert_eq!(message.content, "");
        assert_eq!(message.role, MessageRole::Assistant);
    }

    #[test]
    fn tool_result_passes_through() {
        let create = MessageCreate {
            chat_id: "c1".to_string(),
            role: MessageRole::ToolResult,
            content: None,
            tool_call: None,
            tool_result: Some(ToolResultPayload {
                tool_name: "search".to_string(),
                result: json!({"hits": 3}),
                call_id: Some("x".to_string()),
                is_error: false,
                error_message: None,
            }),
        };
        let value = serde_json::to_value(to_message_create_dto(&create)).unwrap();
        assert_eq!(value["role"], "tool_result");
        assert_eq!(value["tool_result"]["result"]["hits"], 3);
        assert!(value.get("content").is_none());
    }
}

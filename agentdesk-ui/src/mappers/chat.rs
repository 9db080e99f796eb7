use agentdesk_api::{ChatCreateDto, ChatDto};
use agentdesk_core::{parse_timestamp, to_iso, Chat};

use super::non_empty;

pub fn to_chat(dto: ChatDto) -> Chat {
    Chat {
        id: dto.id.unwrap_or_default(),
        agent_id: dto.agent_id,
        created_at: parse_timestamp(dto.created_at.as_deref()),
        updated_at: parse_timestamp(dto.updated_at.as_deref()),
    }
}

pub fn to_chat_create_dto(agent_id: &str) -> ChatCreateDto {
    ChatCreateDto {
        agent_id: agent_id.to_string(),
    }
}

pub fn to_chat_dto(chat: &Chat) -> ChatDto {
    ChatDto {
        id: non_empty(&chat.id),
        agent_id: chat.agent_id.clone(),
        created_at: to_iso(chat.created_at.as_ref()),
        updated_at: to_iso(chat.updated_at.as_ref()),
    }
}

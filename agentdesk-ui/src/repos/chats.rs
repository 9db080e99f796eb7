use super::{list_or_empty, require, StoreRepository};
use crate::error::RepoResult;
use crate::mappers::{to_chat, to_chat_create_dto};
use agentdesk_api::ListChatsQuery;
use agentdesk_core::Chat;
use tracing::info;

impl StoreRepository {
    /// Chats, optionally restricted to one agent. `None` or `""` sends no
    /// filter.
    pub async fn list_chats(&self, agent_id: Option<&str>) -> RepoResult<Vec<Chat>> {
        let query = agent_id
            .filter(|id| !id.is_empty())
            .map(|id| ListChatsQuery {
                agent_id: id.to_string(),
            });
        let envelope = self.api.list_chats(query.as_ref()).await?;
        Ok(list_or_empty("list chats", envelope)
            .into_iter()
            .map(to_chat)
            .collect())
    }

    pub async fn get_chat(&self, chat_id: &str) -> RepoResult<Chat> {
        let envelope = self.api.get_chat(chat_id).await?;
        require("get chat", envelope).map(to_chat)
    }

    /// Open a new chat with `agent_id`.
    pub async fn create_chat(&self, agent_id: &str) -> RepoResult<Chat> {
        let envelope = self.api.create_chat(&to_chat_create_dto(agent_id)).await?;
        let chat = require("create chat", envelope).map(to_chat)?;
        info!(chat_id = %chat.id, agent_id, "Created chat");
        Ok(chat)
    }
}

use super::{list_or_empty, require, StoreRepository};
use crate::error::RepoResult;
use crate::mappers::{to_message, to_message_create_dto};
use agentdesk_core::{Message, MessageCreate};

impl StoreRepository {
    /// Messages of a chat in the order the store returns them.
    pub async fn list_messages(&self, chat_id: &str) -> RepoResult<Vec<Message>> {
        let envelope = self.api.list_messages(chat_id).await?;
        Ok(list_or_empty("list messages", envelope)
            .into_iter()
            .map(to_message)
            .collect())
    }

    pub async fn add_message(&self, payload: &MessageCreate) -> RepoResult<Message> {
        let envelope = self.api.add_message(&to_message_create_dto(payload)).await?;
        require("add message", envelope).map(to_message)
    }
}

//! Transport seam between the repository layer and the agent store.

use crate::api_client::ApiClientError;
use crate::types::{
    AgentCreateDto, AgentDto, AgentUpdateDto, ChatCreateDto, ChatDto, Envelope, ListAgentsQuery,
    ListChatsQuery, ListPayload, MessageCreateDto, MessageDto, ToolCreateDto, ToolDto,
    ToolUpdateDto,
};
use async_trait::async_trait;

/// Result of a single store call.
pub type EnvelopeResult<T> = Result<Envelope<T>, ApiClientError>;

/// One method per agent store endpoint.
///
/// Implementations only move bytes: they report transport failures
/// (network, non-2xx, undecodable bodies) as `Err` and hand back whatever
/// body arrived, possibly none, in the envelope. Interpreting an absent body
/// is the caller's job.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// `GET /agents`. `None` sends no query string at all.
    async fn list_agents(&self, query: Option<&ListAgentsQuery>)
        -> EnvelopeResult<ListPayload<AgentDto>>;

    /// `GET /agents/{agent_id}`
    async fn get_agent(&self, agent_id: &str) -> EnvelopeResult<AgentDto>;

    /// `POST /agents`
    async fn create_agent(&self, body: &AgentCreateDto) -> EnvelopeResult<AgentDto>;

    /// `PATCH /agents/{agent_id}`
    async fn update_agent(&self, agent_id: &str, body: &AgentUpdateDto)
        -> EnvelopeResult<AgentDto>;

    /// `DELETE /agents/{agent_id}`
    async fn delete_agent(&self, agent_id: &str) -> EnvelopeResult<serde_json::Value>;

    /// `GET /agents/{agent_id}/tools`
    async fn list_agent_tools(&self, agent_id: &str) -> EnvelopeResult<ListPayload<ToolDto>>;

    /// `POST /agents/{agent_id}/tools/{tool_id}`
    async fn attach_tool(&self, agent_id: &str, tool_id: &str)
        -> EnvelopeResult<serde_json::Value>;

    /// `DELETE /agents/{agent_id}/tools/{tool_id}`
    async fn detach_tool(&self, agent_id: &str, tool_id: &str)
        -> EnvelopeResult<serde_json::Value>;

    /// `GET /chats`. `None` sends no query string at all.
    async fn list_chats(&self, query: Option<&ListChatsQuery>)
        -> EnvelopeResult<ListPayload<ChatDto>>;

    /// `GET /chats/{chat_id}`
    async fn get_chat(&self, chat_id: &str) -> EnvelopeResult<ChatDto>;

    /// `POST /chats`
    async fn create_chat(&self, body: &ChatCreateDto) -> EnvelopeResult<ChatDto>;

    /// `GET /messages/by-chat/{chat_id}`
    async fn list_messages(&self, chat_id: &str) -> EnvelopeResult<ListPayload<MessageDto>>;

    /// `POST /messages`
    async fn add_message(&self, body: &MessageCreateDto) -> EnvelopeResult<MessageDto>;

    /// `GET /tools`
    async fn list_tools(&self) -> EnvelopeResult<ListPayload<ToolDto>>;

    /// `GET /tools/{tool_id}`
    async fn get_tool(&self, tool_id: &str) -> EnvelopeResult<ToolDto>;

    /// `POST /tools`
    async fn create_tool(&self, body: &ToolCreateDto) -> EnvelopeResult<ToolDto>;

    /// `PATCH /tools/{tool_id}`
    async fn update_tool(&self, tool_id: &str, body: &ToolUpdateDto) -> EnvelopeResult<ToolDto>;

    /// `DELETE /tools/{tool_id}`
    async fn delete_tool(&self, tool_id: &str) -> EnvelopeResult<serde_json::Value>;
}

//! Agent-related wire types

use agentdesk_core::{ContextMode, JsonMap};
use serde::{Deserialize, Serialize};

use super::{lenient, null_default};

/// Agent as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Model configuration; an empty or partial object decodes as `None`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub model: Option<AgentModelConfigDto>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub context_tool: Option<AgentContextToolDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// LLM configuration of an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentModelConfigDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
    #[serde(default)]
    pub params: Option<JsonMap>,
}

/// Context tool reference of an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentContextToolDto {
    pub tool_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ContextMode>,
    #[serde(default)]
    pub config: Option<JsonMap>,
}

/// Request to create an agent.
///
/// `enabled` is omitted when unset so the store default applies; the nested
/// records and `instructions` are always sent, as `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCreateDto {
    pub name: String,
    pub role: String,
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub model: Option<AgentModelConfigDto>,
    pub context_tool: Option<AgentContextToolDto>,
}

/// Request to update an agent. Every key is sent; unset fields go out as
/// explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentUpdateDto {
    pub name: Option<String>,
    pub role: Option<String>,
    pub instructions: Option<String>,
    pub enabled: Option<bool>,
    pub model: Option<AgentModelConfigDto>,
    pub context_tool: Option<AgentContextToolDto>,
}

/// Query for `GET /agents`. Only built when a filter is actually requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAgentsQuery {
    pub enabled: bool,
}

//! Domain entity structures
//!
//! These are the shapes the presentation layer works with. Field names are
//! camelCase on the serde side because the views consume them as such; the
//! snake_case wire DTOs never leak past the mapping layer.

use crate::{ContextMode, HttpMethod, JsonMap, MessageRole, Timestamp, ToolTransport};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// AGENTS
// ============================================================================

/// An agent as shown in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub role: String,
    pub instructions: Option<String>,
    pub enabled: bool,
    pub model: Option<AgentModelConfig>,
    pub context_tool: Option<AgentContextTool>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// LLM configuration attached to an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentModelConfig {
    pub provider: Option<String>,
    pub model: String,
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<u32>,
    #[serde(default)]
    pub params: JsonMap,
}

impl AgentModelConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            provider: None,
            model: model.into(),
            temperature: None,
            max_output_tokens: None,
            params: JsonMap::new(),
        }
    }
}

/// Tool whose output is injected into the agent's context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentContextTool {
    pub tool_id: String,
    #[serde(default)]
    pub mode: ContextMode,
    #[serde(default)]
    pub config: JsonMap,
}

impl AgentContextTool {
    pub fn new(tool_id: impl Into<String>, mode: ContextMode) -> Self {
        Self {
            tool_id: tool_id.into(),
            mode,
            config: JsonMap::new(),
        }
    }
}

/// Payload for creating an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCreate {
    pub name: String,
    pub role: String,
    pub instructions: Option<String>,
    /// `None` leaves the server default (enabled) in place.
    pub enabled: Option<bool>,
    pub model: Option<AgentModelConfig>,
    pub context_tool: Option<AgentContextTool>,
}

impl AgentCreate {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            instructions: None,
            enabled: None,
            model: None,
            context_tool: None,
        }
    }
}

/// Partial update of an agent. Every field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub instructions: Option<String>,
    pub enabled: Option<bool>,
    pub model: Option<AgentModelConfig>,
    pub context_tool: Option<AgentContextTool>,
}

// ============================================================================
// CHATS & MESSAGES
// ============================================================================

/// A chat session. Always belongs to exactly one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub agent_id: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// A message within a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub role: MessageRole,
    pub content: String,
    pub tool_call: Option<ToolCallPayload>,
    pub tool_result: Option<ToolResultPayload>,
    pub created_at: Option<Timestamp>,
}

/// Payload for appending a message to a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCreate {
    pub chat_id: String,
    pub role: MessageRole,
    /// `None` lets the store default to an empty string.
    pub content: Option<String>,
    pub tool_call: Option<ToolCallPayload>,
    pub tool_result: Option<ToolResultPayload>,
}

impl MessageCreate {
    pub fn text(chat_id: impl Into<String>, role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            role,
            content: Some(content.into()),
            tool_call: None,
            tool_result: None,
        }
    }
}

/// Tool invocation recorded on a `tool_call` message.
///
/// Shared verbatim with the wire format, so it keeps snake_case keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallPayload {
    pub tool_name: String,
    #[serde(default)]
    pub arguments: JsonMap,
    #[serde(default)]
    pub call_id: Option<String>,
}

/// Tool outcome recorded on a `tool_result` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResultPayload {
    pub tool_name: String,
    #[serde(default)]
    pub result: serde_json::Value,
    #[serde(default)]
    pub call_id: Option<String>,
    #[serde(default)]
    pub is_error: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

// ============================================================================
// TOOLS
// ============================================================================

/// How a tool is reached. The `transport` tag is the only discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transport", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ToolEndpoint {
    Http {
        url: String,
        method: HttpMethod,
        headers: BTreeMap<String, String>,
        target: Option<String>,
    },
    Mcp {
        mcp_server: String,
        mcp_tool: String,
    },
    Internal {
        target: Option<String>,
    },
}

impl ToolEndpoint {
    pub fn transport(&self) -> ToolTransport {
        match self {
            ToolEndpoint::Http { .. } => ToolTransport::Http,
            ToolEndpoint::Mcp { .. } => ToolTransport::Mcp,
            ToolEndpoint::Internal { .. } => ToolTransport::Internal,
        }
    }

    /// `GET` endpoint with no headers.
    pub fn http(url: impl Into<String>) -> Self {
        ToolEndpoint::Http {
            url: url.into(),
            method: HttpMethod::Get,
            headers: BTreeMap::new(),
            target: None,
        }
    }
}

/// A tool as shown in the UI.
///
/// `contract` and `response` are passed through untouched; the store is the
/// only party that validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub endpoint: Option<ToolEndpoint>,
    pub contract: Option<serde_json::Value>,
    pub response: Option<serde_json::Value>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// Payload for creating a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCreate {
    pub name: String,
    pub description: String,
    pub enabled: Option<bool>,
    pub endpoint: Option<ToolEndpoint>,
    pub contract: Option<serde_json::Value>,
    pub response: Option<serde_json::Value>,
}

impl ToolCreate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            enabled: None,
            endpoint: None,
            contract: None,
            response: None,
        }
    }
}

/// Partial update of a tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
    pub endpoint: Option<ToolEndpoint>,
    pub contract: Option<serde_json::Value>,
    pub response: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_serializes_with_single_tag() {
        let endpoint = ToolEndpoint::Mcp {
            mcp_server: "srv".to_string(),
            mcp_tool: "search".to_string(),
        };
        let value = serde_json::to_value(&endpoint).unwrap();
        assert_eq!(value, json!({"transport": "mcp", "mcpServer": "srv", "mcpTool": "search"}));
        assert_eq!(endpoint.transport(), ToolTransport::Mcp);
    }

    #[test]
    fn http_endpoint_helper_defaults_to_get() {
        match ToolEndpoint::http("https://example.com") {
            ToolEndpoint::Http { method, headers, target, .. } => {
                assert_eq!(method, HttpMethod::Get);
                assert!(headers.is_empty());
                assert!(target.is_none());
            }
            other => panic!("unexpected endpoint {:?}", other),
        }
    }

    #[test]
    fn agent_serializes_camel_case_for_views() {
        let agent = Agent {
            id: "a1".to_string(),
            name: "Bot".to_string(),
            role: "assistant".to_string(),
            instructions: None,
            enabled: true,
            model: None,
            context_tool: Some(AgentContextTool::new("t1", ContextMode::Tool)),
            created_at: None,
            updated_at: None,
        };
        let value = serde_json::to_value(&agent).unwrap();
        assert_eq!(value["contextTool"]["toolId"], "t1");
        assert!(value.get("context_tool").is_none());
    }
}

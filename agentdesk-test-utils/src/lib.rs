//! agentdesk Test Utilities
//!
//! Shared test infrastructure for the agentdesk workspace:
//! - [`MockStoreApi`], an in-memory `StoreApi` that records calls and
//!   replays canned bodies
//! - Proptest generators for wire DTOs
//! - Wire-format fixtures for common scenarios
//! - Assertions over transport results

pub use agentdesk_api::{
    AgentContextToolDto, AgentDto, AgentModelConfigDto, ApiClientError, ChatDto, ClientConfig,
    Envelope, EnvelopeResult, ListAgentsQuery, ListChatsQuery, ListPayload, MessageDto,
    StoreApi, ToolDto, ToolEndpointDto,
};
pub use agentdesk_core::{
    ContextMode, HttpMethod, JsonMap, MessageRole, Timestamp, ToolCallPayload, ToolResultPayload,
    ToolTransport,
};

use agentdesk_api::{
    AgentCreateDto, AgentUpdateDto, ChatCreateDto, MessageCreateDto, ToolCreateDto, ToolUpdateDto,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

// ============================================================================
// MOCK STORE
// ============================================================================

/// One call received by [`MockStoreApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Name of the `StoreApi` method, e.g. `"list_agents"`.
    pub operation: &'static str,
    /// Path parameters in URL order.
    pub params: Vec<String>,
    /// Query as JSON; `None` when no query was sent at all.
    pub query: Option<Value>,
    pub body: Option<Value>,
}

/// What [`MockStoreApi`] answers for an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum MockResponse {
    /// 200 with this JSON body. `Value::Null` counts as no body.
    Body(Value),
    /// 2xx without a body.
    Empty(u16),
    /// Non-2xx answer.
    Failure { status: u16, message: String },
}

/// In-memory `StoreApi`.
///
/// Operations without a configured response answer `200` with no body.
#[derive(Debug, Default)]
pub struct MockStoreApi {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<HashMap<&'static str, MockResponse>>,
}

impl MockStoreApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, operation: &'static str, body: Value) -> Self {
        self.set_response(operation, MockResponse::Body(body));
        self
    }

    pub fn with_empty(self, operation: &'static str) -> Self {
        self.set_response(operation, MockResponse::Empty(204));
        self
    }

    pub fn with_failure(
        self,
        operation: &'static str,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        self.set_response(
            operation,
            MockResponse::Failure {
                status,
                message: message.into(),
            },
        );
        self
    }

    pub fn set_response(&self, operation: &'static str, response: MockResponse) {
        lock(&self.responses).insert(operation, response);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn calls_to(&self, operation: &str) -> Vec<RecordedCall> {
        lock(&self.calls)
            .iter()
            .filter(|call| call.operation == operation)
            .cloned()
            .collect()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        lock(&self.calls).last().cloned()
    }

    fn call<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        params: &[&str],
        query: Option<Value>,
        body: Option<Value>,
    ) -> EnvelopeResult<T> {
        lock(&self.calls).push(RecordedCall {
            operation,
            params: params.iter().map(|p| p.to_string()).collect(),
            query,
            body,
        });

        let response = lock(&self.responses).get(operation).cloned();
        match response {
            Some(MockResponse::Body(body)) => {
                let data = serde_json::from_value::<Option<T>>(body)?;
                Ok(Envelope::new(data, 200))
            }
            Some(MockResponse::Empty(status)) => Ok(Envelope::empty(status)),
            Some(MockResponse::Failure { status, message }) => {
                Err(ApiClientError::Status { status, message })
            }
            None => Ok(Envelope::empty(200)),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_json<S: Serialize>(value: &S) -> Result<Value, ApiClientError> {
    Ok(serde_json::to_value(value)?)
}

#[async_trait]
impl StoreApi for MockStoreApi {
    async fn list_agents(
        &self,
        query: Option<&ListAgentsQuery>,
    ) -> EnvelopeResult<ListPayload<AgentDto>> {
        self.call("list_agents", &[], query.map(to_json).transpose()?, None)
    }

    async fn get_agent(&self, agent_id: &str) -> EnvelopeResult<AgentDto> {
        self.call("get_agent", &[agent_id], None, None)
    }

    async fn create_agent(&self, body: &AgentCreateDto) -> EnvelopeResult<AgentDto> {
        self.call("create_agent", &[], None, Some(to_json(body)?))
    }

    async fn update_agent(
        &self,
        agent_id: &str,
        body: &AgentUpdateDto,
    ) -> EnvelopeResult<AgentDto> {
        self.call("update_agent", &[agent_id], None, Some(to_json(body)?))
    }

    async fn delete_agent(&self, agent_id: &str) -> EnvelopeResult<Value> {
        self.call("delete_agent", &[agent_id], None, None)
    }

    async fn list_agent_tools(&self, agent_id: &str) -> EnvelopeResult<ListPayload<ToolDto>> {
        self.call("list_agent_tools", &[agent_id], None, None)
    }

    async fn attach_tool(&self, agent_id: &str, tool_id: &str) -> EnvelopeResult<Value> {
        self.call("attach_tool", &[agent_id, tool_id], None, None)
    }

    async fn detach_tool(&self, agent_id: &str, tool_id: &str) -> EnvelopeResult<Value> {
        self.call("detach_tool", &[agent_id, tool_id], None, None)
    }

    async fn list_chats(
        &self,
        query: Option<&ListChatsQuery>,
    ) -> EnvelopeResult<ListPayload<ChatDto>> {
        self.call("list_chats", &[], query.map(to_json).transpose()?, None)
    }

    async fn get_chat(&self, chat_id: &str) -> EnvelopeResult<ChatDto> {
        self.call("get_chat", &[chat_id], None, None)
    }

    async fn create_chat(&self, body: &ChatCreateDto) -> EnvelopeResult<ChatDto> {
        self.call("create_chat", &[], None, Some(to_json(body)?))
    }

    async fn list_messages(&self, chat_id: &str) -> EnvelopeResult<ListPayload<MessageDto>> {
        self.call("list_messages", &[chat_id], None, None)
    }

    async fn add_message(&self, body: &MessageCreateDto) -> EnvelopeResult<MessageDto> {
        self.call("add_message", &[], None, Some(to_json(body)?))
    }

    async fn list_tools(&self) -> EnvelopeResult<ListPayload<ToolDto>> {
        self.call("list_tools", &[], None, None)
    }

    async fn get_tool(&self, tool_id: &str) -> EnvelopeResult<ToolDto> {
        self.call("get_tool", &[tool_id], None, None)
    }

    async fn create_tool(&self, body: &ToolCreateDto) -> EnvelopeResult<ToolDto> {
        self.call("create_tool", &[], None, Some(to_json(body)?))
    }

    async fn update_tool(&self, tool_id: &str, body: &ToolUpdateDto) -> EnvelopeResult<ToolDto> {
        self.call("update_tool", &[tool_id], None, Some(to_json(body)?))
    }

    async fn delete_tool(&self, tool_id: &str) -> EnvelopeResult<Value> {
        self.call("delete_tool", &[tool_id], None, None)
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for the store's wire DTOs.
    //!
    //! Generated records are what a well-behaved store would send: ids are
    //! always present and timestamps use the millisecond RFC3339 form the
    //! mapping layer writes back, so populated fields survive a round trip
    //! byte for byte.

    use super::*;
    use chrono::SecondsFormat;
    use proptest::prelude::*;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    /// Generate a random UUID.
    pub fn arb_uuid() -> impl Strategy<Value = Uuid> {
        any::<[u8; 16]>().prop_map(Uuid::from_bytes)
    }

    /// Generate an entity id as the store formats it.
    pub fn arb_id() -> impl Strategy<Value = String> {
        arb_uuid().prop_map(|id| id.to_string())
    }

    /// Generate a Timestamp (2020-2030, millisecond precision).
    pub fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
        (1_577_836_800_000i64..1_893_456_000_000i64)
            .prop_filter_map("timestamp out of range", chrono::DateTime::from_timestamp_millis)
    }

    /// Generate a wire timestamp string.
    pub fn arb_wire_timestamp() -> impl Strategy<Value = String> {
        arb_timestamp().prop_map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn arb_name() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9 _-]{0,31}"
    }

    pub fn arb_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?]{0,120}"
    }

    /// Generate a small free-form JSON object with scalar values.
    pub fn arb_json_map() -> impl Strategy<Value = JsonMap> {
        let scalar = prop_oneof![
            any::<bool>().prop_map(Value::from),
            any::<i32>().prop_map(Value::from),
            "[a-z0-9]{0,12}".prop_map(Value::from),
        ];
        prop::collection::btree_map("[a-z_]{1,12}", scalar, 0..4)
            .prop_map(|entries| entries.into_iter().collect())
    }

    /// Generate an arbitrary JSON value for pass-through fields.
    pub fn arb_json_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            arb_json_map().prop_map(Value::Object),
            prop::collection::vec("[a-z]{0,8}".prop_map(Value::from), 0..4).prop_map(Value::Array),
            "[a-z]{0,8}".prop_map(Value::from),
        ]
    }

    pub fn arb_message_role() -> impl Strategy<Value = MessageRole> {
        prop::sample::select(MessageRole::all().to_vec())
    }

    pub fn arb_context_mode() -> impl Strategy<Value = ContextMode> {
        prop_oneof![
            Just(ContextMode::System),
            Just(ContextMode::User),
            Just(ContextMode::Tool),
        ]
    }

    pub fn arb_http_method() -> impl Strategy<Value = HttpMethod> {
        prop::sample::select(HttpMethod::all().to_vec())
    }

    pub fn arb_tool_transport() -> impl Strategy<Value = ToolTransport> {
        prop_oneof![
            Just(ToolTransport::Http),
            Just(ToolTransport::Mcp),
            Just(ToolTransport::Internal),
        ]
    }

    /// Generate a model configuration. `params` is always populated.
    pub fn arb_model_config_dto() -> impl Strategy<Value = AgentModelConfigDto> {
        (
            prop::option::of("[a-z]{2,12}"),
            "[a-z0-9.:-]{1,24}",
            prop::option::of((0u32..=200).prop_map(|t| f64::from(t) / 100.0)),
            prop::option::of(1u32..200_000),
            arb_json_map(),
        )
            .prop_map(|(provider, model, temperature, max_output_tokens, params)| {
                AgentModelConfigDto {
                    provider,
                    model,
                    temperature,
                    max_output_tokens,
                    params: Some(params),
                }
            })
    }

    pub fn arb_context_tool_dto() -> impl Strategy<Value = AgentContextToolDto> {
        (arb_id(), prop::option::of(arb_context_mode()), arb_json_map()).prop_map(
            |(tool_id, mode, config)| AgentContextToolDto {
                tool_id,
                mode,
                config: Some(config),
            },
        )
    }

    /// Generate an AgentDto.
    pub fn arb_agent_dto() -> impl Strategy<Value = AgentDto> {
        (
            arb_id(),
            arb_name(),
            arb_name(),
            prop::option::of(arb_text()),
            prop::option::of(any::<bool>()),
            prop::option::of(arb_model_config_dto()),
            prop::option::of(arb_context_tool_dto()),
            prop::option::of(arb_wire_timestamp()),
            prop::option::of(arb_wire_timestamp()),
        )
            .prop_map(
                |(
                    id,
                    name,
                    role,
                    instructions,
                    enabled,
                    model,
                    context_tool,
                    created_at,
                    updated_at,
                )| AgentDto {
                    id: Some(id),
                    name,
                    role,
                    instructions,
                    enabled,
                    model,
                    context_tool,
                    created_at,
                    updated_at,
                },
            )
    }

    pub fn arb_chat_dto() -> impl Strategy<Value = ChatDto> {
        (
            arb_id(),
            arb_id(),
            prop::option::of(arb_wire_timestamp()),
            prop::option::of(arb_wire_timestamp()),
        )
            .prop_map(|(id, agent_id, created_at, updated_at)| ChatDto {
                id: Some(id),
                agent_id,
                created_at,
                updated_at,
            })
    }

    pub fn arb_tool_call_payload() -> impl Strategy<Value = ToolCallPayload> {
        (arb_name(), arb_json_map(), prop::option::of(arb_id())).prop_map(
            |(tool_name, arguments, call_id)| ToolCallPayload {
                tool_name,
                arguments,
                call_id,
            },
        )
    }

    pub fn arb_tool_result_payload() -> impl Strategy<Value = ToolResultPayload> {
        (
            arb_name(),
            arb_json_value(),
            prop::option::of(arb_id()),
            any::<bool>(),
            prop::option::of(arb_text()),
        )
            .prop_map(
                |(tool_name, result, call_id, is_error, error_message)| ToolResultPayload {
                    tool_name,
                    result,
                    call_id,
                    is_error,
                    error_message,
                },
            )
    }

    pub fn arb_message_dto() -> impl Strategy<Value = MessageDto> {
        (
            arb_id(),
            arb_id(),
            arb_message_role(),
            prop::option::of(arb_text()),
            prop::option::of(arb_tool_call_payload()),
            prop::option::of(arb_tool_result_payload()),
            prop::option::of(arb_wire_timestamp()),
        )
            .prop_map(
                |(id, chat_id, role, content, tool_call, tool_result, created_at)| MessageDto {
                    id: Some(id),
                    chat_id,
                    role,
                    content,
                    tool_call,
                    tool_result,
                    created_at,
                },
            )
    }

    fn arb_headers() -> impl Strategy<Value = BTreeMap<String, String>> {
        prop::collection::btree_map("[a-z][a-z-]{0,15}", "[a-zA-Z0-9]{0,16}", 0..3)
    }

    /// Generate a flat endpoint record. Any subset of fields may be set,
    /// including fields foreign to the transport.
    pub fn arb_tool_endpoint_dto() -> impl Strategy<Value = ToolEndpointDto> {
        (
            arb_tool_transport(),
            prop::option::of("https://[a-z]{3,10}\\.example\\.com/[a-z]{0,8}"),
            prop::option::of(arb_http_method()),
            prop::option::of(arb_headers()),
            prop::option::of("[a-z-]{1,12}"),
            prop::option::of("[a-z_]{1,12}"),
            prop::option::of("[a-z_.]{1,16}"),
        )
            .prop_map(
                |(transport, url, method, headers, mcp_server, mcp_tool, target)| ToolEndpointDto {
                    transport,
                    url,
                    method,
                    headers,
                    mcp_server,
                    mcp_tool,
                    target,
                },
            )
    }

    /// Generate a ToolDto whose endpoint, when present, is a flat record.
    pub fn arb_tool_dto() -> impl Strategy<Value = ToolDto> {
        (
            arb_id(),
            arb_name(),
            arb_text(),
            prop::option::of(any::<bool>()),
            prop::option::of(arb_tool_endpoint_dto()),
            prop::option::of(arb_json_value()),
            prop::option::of(arb_json_value()),
            prop::option::of(arb_wire_timestamp()),
            prop::option::of(arb_wire_timestamp()),
        )
            .prop_map(
                |(
                    id,
                    name,
                    description,
                    enabled,
                    endpoint,
                    contract,
                    response,
                    created_at,
                    updated_at,
                )| ToolDto {
                    id: Some(id),
                    name,
                    description,
                    enabled,
                    endpoint: endpoint.and_then(|dto| serde_json::to_value(dto).ok()),
                    contract,
                    response,
                    created_at,
                    updated_at,
                },
            )
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Wire-format bodies as the store sends them.

    use super::*;
    use serde_json::json;

    /// Client config pointing at a local store.
    pub fn local_config() -> ClientConfig {
        ClientConfig::new("http://127.0.0.1:8000")
    }

    pub fn agent_json(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "role": "assistant",
            "instructions": "Answer briefly.",
            "enabled": true,
            "model": {
                "provider": "ollama",
                "model": "llama3",
                "temperature": 0.2,
                "max_output_tokens": null,
                "params": {}
            },
            "context_tool": null,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-02T12:30:00"
        })
    }

    /// The agent every mapper walkthrough starts from: no model, a context
    /// tool, and only `created_at` set.
    pub fn scenario_agent_json() -> Value {
        json!({
            "id": "a1",
            "name": "Bot",
            "role": "assistant",
            "context_tool": {"tool_id": "t1", "mode": "tool", "config": {}},
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn chat_json(id: &str, agent_id: &str) -> Value {
        json!({
            "id": id,
            "agent_id": agent_id,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00"
        })
    }

    pub fn message_json(id: &str, chat_id: &str, role: MessageRole, content: &str) -> Value {
        json!({
            "id": id,
            "chat_id": chat_id,
            "role": role.as_str(),
            "content": content,
            "tool_call": null,
            "tool_result": null,
            "created_at": "2024-01-01T00:00:05"
        })
    }

    pub fn http_tool_json(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "description": format!("{} over HTTP", name),
            "enabled": true,
            "endpoint": {
                "transport": "http",
                "url": "https://api.example.com/run",
                "method": "POST",
                "headers": {"x-api-key": "secret"},
                "target": null,
                "timeout": null,
                "static_inputs": {}
            },
            "contract": {"input": {"type": "object", "properties": {}}},
            "response": null,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": null
        })
    }

    pub fn mcp_tool_json(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "description": "",
            "enabled": false,
            "endpoint": {"transport": "mcp", "mcp_server": "files", "mcp_tool": name},
            "contract": null,
            "response": null
        })
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions over transport results and recorded calls.

    use super::*;

    /// Assert that a transport result is a non-2xx answer with `status`.
    #[track_caller]
    pub fn assert_status<T: std::fmt::Debug>(result: &Result<T, ApiClientError>, status: u16) {
        match result {
            Err(ApiClientError::Status { status: got, .. }) => {
                assert_eq!(*got, status, "Wrong HTTP status");
            }
            other => panic!("Expected HTTP {} error, got: {:?}", status, other),
        }
    }

    /// Assert that `operation` was called exactly once and return the call.
    #[track_caller]
    pub fn assert_called_once(mock: &MockStoreApi, operation: &str) -> RecordedCall {
        let mut calls = mock.calls_to(operation);
        assert_eq!(calls.len(), 1, "Expected one call to {}, got {:?}", operation, calls);
        calls.remove(0)
    }

    /// Assert that nothing reached the store.
    #[track_caller]
    pub fn assert_no_calls(mock: &MockStoreApi) {
        let calls = mock.calls();
        assert!(calls.is_empty(), "Expected no store calls, got {:?}", calls);
    }
}

#[cfg(test)]
mod tests {
    use super::assertions::*;
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn mock_replays_configured_body() {
        let mock = MockStoreApi::new().with_body("get_agent", agent_json("a1", "Bot"));
        let envelope = mock.get_agent("a1").await.unwrap();
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.data.unwrap().name, "Bot");

        let call = assert_called_once(&mock, "get_agent");
        assert_eq!(call.params, vec!["a1".to_string()]);
        assert!(call.query.is_none());
    }

    #[tokio::test]
    async fn mock_defaults_to_empty_body() {
        let mock = MockStoreApi::new();
        let envelope = mock.list_tools().await.unwrap();
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn mock_treats_null_body_as_absent() {
        let mock = MockStoreApi::new().with_body("get_chat", Value::Null);
        assert!(mock.get_chat("c1").await.unwrap().data.is_none());
    }

    #[tokio::test]
    async fn mock_records_queries_and_failures() {
        let mock = MockStoreApi::new().with_failure("list_chats", 500, "boom");
        let query = ListChatsQuery {
            agent_id: "a1".to_string(),
        };
        let result = mock.list_chats(Some(&query)).await;
        assert_status(&result, 500);
        assert_eq!(mock.last_call().unwrap().query, Some(json!({"agent_id": "a1"})));
    }

    #[tokio::test]
    async fn mock_rejects_undecodable_bodies() {
        let mock = MockStoreApi::new().with_body("get_tool", json!("not a tool"));
        let result = mock.get_tool("t1").await;
        assert!(matches!(result, Err(ApiClientError::Serde(_))));
    }
}

//! REST client for the agent store.

use crate::config::{AuthConfig, ClientConfig};
use crate::traits::{EnvelopeResult, StoreApi};
use crate::types::{
    AgentCreateDto, AgentDto, AgentUpdateDto, ChatCreateDto, ChatDto, Envelope, ErrorBody,
    ListAgentsQuery, ListChatsQuery, ListPayload, MessageCreateDto, MessageDto, ToolCreateDto,
    ToolDto, ToolUpdateDto,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Config error: {0}")]
    Config(String),
}

impl ApiClientError {
    /// HTTP status for errors the store answered with.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiClientError::Status { status, .. } => Some(*status),
            ApiClientError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// `StoreApi` over HTTP. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: Url,
    auth_header: HeaderMap,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let base_url = Url::parse(config.base_url())
            .map_err(|e| ApiClientError::Config(format!("invalid api_base_url: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiClientError::Config(format!(
                "api_base_url cannot be a base: {}",
                base_url
            )));
        }

        let auth_header = build_auth_headers(&config.auth)?;
        Ok(Self {
            client,
            base_url,
            auth_header,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiClientError::Config("api_base_url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T, Q>(&self, segments: &[&str], query: Option<&Q>) -> EnvelopeResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let mut request = self.client.get(url.clone());
        if let Some(query) = query {
            request = request.query(query);
        }
        self.execute(Method::GET, url, request).await
    }

    async fn send_json<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> EnvelopeResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(method, url, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        request: RequestBuilder,
    ) -> EnvelopeResult<T> {
        tracing::debug!(method = %method, url = %url, "store request");
        let response = request.headers(self.auth_header.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        tracing::debug!(
            method = %method,
            url = %url,
            status,
            bytes = body.len(),
            "store response"
        );
        decode_envelope(status, &body)
    }
}

#[async_trait]
impl StoreApi for RestClient {
    async fn list_agents(
        &self,
        query: Option<&ListAgentsQuery>,
    ) -> EnvelopeResult<ListPayload<AgentDto>> {
        self.get(&["agents"], query).await
    }

    async fn get_agent(&self, agent_id: &str) -> EnvelopeResult<AgentDto> {
        self.get::<_, ()>(&["agents", agent_id], None).await
    }

    async fn create_agent(&self, body: &AgentCreateDto) -> EnvelopeResult<AgentDto> {
        self.send_json(Method::POST, &["agents"], Some(body)).await
    }

    async fn update_agent(
        &self,
        agent_id: &str,
        body: &AgentUpdateDto,
    ) -> EnvelopeResult<AgentDto> {
        self.send_json(Method::PATCH, &["agents", agent_id], Some(body))
            .await
    }

    async fn delete_agent(&self, agent_id: &str) -> EnvelopeResult<serde_json::Value> {
        self.send_json::<_, ()>(Method::DELETE, &["agents", agent_id], None)
            .await
    }

    async fn list_agent_tools(&self, agent_id: &str) -> EnvelopeResult<ListPayload<ToolDto>> {
        self.get::<_, ()>(&["agents", agent_id, "tools"], None).await
    }

    async fn attach_tool(
        &self,
        agent_id: &str,
        tool_id: &str,
    ) -> EnvelopeResult<serde_json::Value> {
        self.send_json::<_, ()>(Method::POST, &["agents", agent_id, "tools", tool_id], None)
            .await
    }

    async fn detach_tool(
        &self,
        agent_id: &str,
        tool_id: &str,
    ) -> EnvelopeResult<serde_json::Value> {
        self.send_json::<_, ()>(Method::DELETE, &["agents", agent_id, "tools", tool_id], None)
            .await
    }

    async fn list_chats(
        &self,
        query: Option<&ListChatsQuery>,
    ) -> EnvelopeResult<ListPayload<ChatDto>> {
        self.get(&["chats"], query).await
    }

    async fn get_chat(&self, chat_id: &str) -> EnvelopeResult<ChatDto> {
        self.get::<_, ()>(&["chats", chat_id], None).await
    }

    async fn create_chat(&self, body: &ChatCreateDto) -> EnvelopeResult<ChatDto> {
        self.send_json(Method::POST, &["chats"], Some(body)).await
    }

    async fn list_messages(&self, chat_id: &str) -> EnvelopeResult<ListPayload<MessageDto>> {
        self.get::<_, ()>(&["messages", "by-chat", chat_id], None)
            .await
    }

    async fn add_message(&self, body: &MessageCreateDto) -> EnvelopeResult<MessageDto> {
        self.send_json(Method::POST, &["messages"], Some(body)).await
    }

    async fn list_tools(&self) -> EnvelopeResult<ListPayload<ToolDto>> {
        self.get::<_, ()>(&["tools"], None).await
    }

    async fn get_tool(&self, tool_id: &str) -> EnvelopeResult<ToolDto> {
        self.get::<_, ()>(&["tools", tool_id], None).await
    }

    async fn create_tool(&self, body: &ToolCreateDto) -> EnvelopeResult<ToolDto> {
        self.send_json(Method::POST, &["tools"], Some(body)).await
    }

    async fn update_tool(&self, tool_id: &str, body: &ToolUpdateDto) -> EnvelopeResult<ToolDto> {
        self.send_json(Method::PATCH, &["tools", tool_id], Some(body))
            .await
    }

    async fn delete_tool(&self, tool_id: &str) -> EnvelopeResult<serde_json::Value> {
        self.send_json::<_, ()>(Method::DELETE, &["tools", tool_id], None)
            .await
    }
}

/// Turn a raw HTTP response into an envelope.
///
/// Non-2xx is a transport failure. A 2xx with an empty body or a JSON `null`
/// is a successful call without data.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> EnvelopeResult<T> {
    if !(200..300).contains(&status) {
        return Err(ApiClientError::Status {
            status,
            message: error_message(body),
        });
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Envelope::empty(status));
    }
    let data = serde_json::from_slice::<Option<T>>(body)?;
    Ok(Envelope::new(data, status))
}

fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    }
}

fn build_auth_headers(auth: &AuthConfig) -> Result<HeaderMap, ApiClientError> {
    let mut headers = HeaderMap::new();
    if let Some(api_key) = &auth.api_key {
        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(api_key).map_err(|e| ApiClientError::Config(e.to_string()))?,
        );
    }
    if let Some(jwt) = &auth.jwt {
        let value = format!("Bearer {}", jwt);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&value).map_err(|e| ApiClientError::Config(e.to_string()))?,
        );
    }
    Ok(headers)
}

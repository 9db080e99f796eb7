//! Tool wire types

use agentdesk_core::{HttpMethod, ToolTransport};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::null_default;

/// Tool as returned by the store.
///
/// The store declares `endpoint`, `contract` and `response` as free-form
/// objects, so they stay untyped here; the mapping layer narrows `endpoint`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Endpoint configuration in the store's flat shape.
///
/// Which fields are meaningful depends on `transport`; fields that do not
/// belong to the transport are left out on serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEndpointDto {
    pub transport: ToolTransport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_tool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl ToolEndpointDto {
    /// An endpoint with only the transport tag set.
    pub fn bare(transport: ToolTransport) -> Self {
        Self {
            transport,
            url: None,
            method: None,
            headers: None,
            mcp_server: None,
            mcp_tool: None,
            target: None,
        }
    }
}

/// Request to create a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCreateDto {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub endpoint: Option<ToolEndpointDto>,
    pub contract: Option<serde_json::Value>,
    pub response: Option<serde_json::Value>,
}

/// Request to update a tool. Unset fields go out as explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolUpdateDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
    pub endpoint: Option<ToolEndpointDto>,
    pub contract: Option<serde_json::Value>,
    pub response: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_dto_skips_foreign_fields() {
        let dto = ToolEndpointDto {
            mcp_server: Some("srv".to_string()),
            mcp_tool: Some("lookup".to_string()),
            ..ToolEndpointDto::bare(ToolTransport::Mcp)
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"transport": "mcp", "mcp_server": "srv", "mcp_tool": "lookup"})
        );
    }

    #[test]
    fn unknown_transport_is_rejected() {
        let parsed = serde_json::from_value::<ToolEndpointDto>(json!({"transport": "grpc"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn update_sends_nulls() {
        let value = serde_json::to_value(ToolUpdateDto::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert!(object.values().all(|v| v.is_null()));
    }
}

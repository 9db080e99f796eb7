use agentdesk_api::{ToolCreateDto, ToolDto, ToolEndpointDto, ToolUpdateDto};
use agentdesk_core::{
    parse_timestamp, to_iso, HttpMethod, Tool, ToolCreate, ToolEndpoint, ToolTransport, ToolUpdate,
};
use serde_json::Value;
use tracing::debug;

use super::non_empty;

// ============================================================================
// ENDPOINTS
// ============================================================================

/// Narrow a flat endpoint record to its variant. Fields foreign to the
/// transport are dropped; http defaults to `GET` with no headers.
pub fn to_tool_endpoint(dto: &ToolEndpointDto) -> ToolEndpoint {
    match dto.transport {
        ToolTransport::Http => ToolEndpoint::Http {
            url: dto.url.clone().unwrap_or_default(),
            method: dto.method.unwrap_or(HttpMethod::Get),
            headers: dto.headers.clone().unwrap_or_default(),
            target: dto.target.clone(),
        },
        ToolTransport::Mcp => ToolEndpoint::Mcp {
            mcp_server: dto.mcp_server.clone().unwrap_or_default(),
            mcp_tool: dto.mcp_tool.clone().unwrap_or_default(),
        },
        ToolTransport::Internal => ToolEndpoint::Internal {
            target: dto.target.clone(),
        },
    }
}

pub fn to_tool_endpoint_dto(endpoint: &ToolEndpoint) -> ToolEndpointDto {
    match endpoint {
        ToolEndpoint::Http {
            url,
            method,
            headers,
            target,
        } => ToolEndpointDto {
            url: Some(url.clone()),
            method: Some(*method),
            headers: Some(headers.clone()),
            target: target.clone(),
            ..ToolEndpointDto::bare(ToolTransport::Http)
        },
        ToolEndpoint::Mcp {
            mcp_server,
            mcp_tool,
        } => ToolEndpointDto {
            mcp_server: Some(mcp_server.clone()),
            mcp_tool: Some(mcp_tool.clone()),
            ..ToolEndpointDto::bare(ToolTransport::Mcp)
        },
        ToolEndpoint::Internal { target } => ToolEndpointDto {
            target: target.clone(),
            ..ToolEndpointDto::bare(ToolTransport::Internal)
        },
    }
}

/// Turn the store's free-form `endpoint` object into a [`ToolEndpoint`].
///
/// `None` means "no endpoint configured". Non-objects, objects without a
/// `transport` key and objects whose fields do not fit their transport all
/// normalize to `None` without raising.
pub fn normalize_endpoint(raw: Option<&Value>) -> Option<ToolEndpoint> {
    let raw = raw?;
    let object = raw.as_object()?;
    if !object.contains_key("transport") {
        return None;
    }
    match serde_json::from_value::<ToolEndpointDto>(raw.clone()) {
        Ok(dto) => Some(to_tool_endpoint(&dto)),
        Err(err) => {
            debug!(error = %err, "Ignoring unrecognised tool endpoint");
            None
        }
    }
}

fn endpoint_value(endpoint: &ToolEndpoint) -> Option<Value> {
    serde_json::to_value(to_tool_endpoint_dto(endpoint)).ok()
}

// ============================================================================
// TOOLS
// ============================================================================

pub fn to_tool(dto: ToolDto) -> Tool {
    Tool {
        id: dto.id.unwrap_or_default(),
        name: dto.name,
        description: dto.description,
        enabled: dto.enabled.unwrap_or(true),
        endpoint: normalize_endpoint(dto.endpoint.as_ref()),
        contract: dto.contract,
        response: dto.response,
        created_at: parse_timestamp(dto.created_at.as_deref()),
        updated_at: parse_timestamp(dto.updated_at.as_deref()),
    }
}

pub fn to_tool_create_dto(model: &ToolCreate) -> ToolCreateDto {
    ToolCreateDto {
        name: model.name.clone(),
        description: model.description.clone(),
        enabled: model.enabled,
        endpoint: model.endpoint.as_ref().map(to_tool_endpoint_dto),
        contract: model.contract.clone(),
        response: model.response.clone(),
    }
}

pub fn to_tool_update_dto(model: &ToolUpdate) -> ToolUpdateDto {
    ToolUpdateDto {
        name: model.name.clone(),
        description: model.description.clone(),
        enabled: model.enabled,
        endpoint: model.endpoint.as_ref().map(to_tool_endpoint_dto),
        contract: model.contract.clone(),
        response: model.response.clone(),
    }
}

pub fn to_tool_dto(tool: &Tool) -> ToolDto {
    ToolDto {
        id: non_empty(&tool.id),
        name: tool.name.clone(),
        description: tool.description.clone(),
        enabled: Some(tool.enabled),
        endpoint: tool.endpoint.as_ref().and_then(endpoint_value),
        contract: tool.contract.clone(),
        response: tool.response.clone(),
        created_at: to_iso(tool.created_at.as_ref()),
        updated_at: to_iso(tool.updated_at.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn http_endpoint_defaults_method_and_headers() {
        let endpoint = normalize_endpoint(Some(&json!({
            "transport": "http",
            "url": "https://api.example.com/search"
        })));
        assert_eq!(endpoint, Some(ToolEndpoint::http("https://api.example.com/search")));
    }

    #[test]
    fn http_endpoint_keeps_method_headers_and_target() {
        let endpoint = normalize_endpoint(Some(&json!({
            "transport": "http",
            "url": "https://api.example.com",
            "method": "POST",
            "headers": {"x-token": "abc"},
            "target": "run",
            "timeout": null,
            "static_inputs": {}
        })))
        .unwrap();
        let mut headers = BTreeMap::new();
        headers.insert("x-token".to_string(), "abc".to_string());
        assert_eq!(
            endpoint,
            ToolEndpoint::Http {
                url: "https://api.example.com".to_string(),
                method: HttpMethod::Post,
                headers,
                target: Some("run".to_string()),
            }
        );
    }

    #[test]
    fn lower_case_method_is_accepted() {
        let endpoint = normalize_endpoint(Some(&json!({
            "transport": "http",
            "url": "https://api.example.com",
            "method": "post"
        })));
        match endpoint {
            Some(ToolEndpoint::Http { method, .. }) => assert_eq!(method, HttpMethod::Post),
            other => panic!("expected http endpoint, got {:?}", other),
        }
    }

    #[test]
    fn mcp_endpoint_drops_foreign_fields() {
        let endpoint = normalize_endpoint(Some(&json!({
            "transport": "mcp",
            "mcp_server": "srv",
            "mcp_tool": "lookup",
            "url": "https://ignored"
        })));
        assert_eq!(
            endpoint,
            Some(ToolEndpoint::Mcp {
                mcp_server: "srv".to_string(),
                mcp_tool: "lookup".to_string(),
            })
        );
    }

    #[test]
    fn internal_endpoint_target_is_optional() {
        assert_eq!(
            normalize_endpoint(Some(&json!({"transport": "internal"}))),
            Some(ToolEndpoint::Internal { target: None })
        );
    }

    #[test]
    fn unrecognised_shapes_normalize_to_none() {
        for raw in [
            json!({}),
            json!({"url": "https://api.example.com"}),
            json!({"transport": "grpc"}),
            json!({"transport": 7}),
            json!("http"),
            json!([{"transport": "http"}]),
            Value::Null,
        ] {
            assert_eq!(normalize_endpoint(Some(&raw)), None, "{}", raw);
        }
        assert_eq!(normalize_endpoint(None), None);
    }

    #[test]
    fn tool_passes_contract_through() {
        let tool = to_tool(
            serde_json::from_value(json!({
                "id": "t1",
                "name": "search",
                "description": "Web search",
                "endpoint": {"transport": "internal", "target": "search"},
                "contract": {"input": {"type": "object"}},
                "response": null
            }))
            .unwrap(),
        );
        assert!(tool.enabled);
        assert_eq!(tool.contract, Some(json!({"input": {"type": "object"}})));
        assert!(tool.response.is_none());
        assert_eq!(
            tool.endpoint,
            Some(ToolEndpoint::Internal {
                target: Some("search".to_string())
            })
        );
    }

    #[test]
    fn update_dto_carries_flat_endpoint() {
        let update = ToolUpdate {
            endpoint: Some(ToolEndpoint::Mcp {
                mcp_server: "srv".to_string(),
                mcp_tool: "lookup".to_string(),
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(to_tool_update_dto(&update)).unwrap();
        assert_eq!(
            value["endpoint"],
            json!({"transport": "mcp", "mcp_server": "srv", "mcp_tool": "lookup"})
        );
        assert!(value["name"].is_null());
        assert!(value["contract"].is_null());
    }

    #[test]
    fn create_dto_sends_http_defaults_explicitly() {
        let mut create = ToolCreate::new("search", "Web search");
        create.endpoint = Some(ToolEndpoint::http("https://api.example.com"));
        let value = serde_json::to_value(to_tool_create_dto(&create)).unwrap();
        assert_eq!(
            value["endpoint"],
            json!({"transport": "http", "url": "https://api.example.com", "method": "GET", "headers": {}})
        );
        assert!(value.get("enabled").is_none());
    }
}

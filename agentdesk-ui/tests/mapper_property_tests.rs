//! Property tests for the mapping layer.
//!
//! Populated wire fields survive `to_x_dto(to_x(dto))`; absent fields come
//! back as their documented default.

use agentdesk_api::ToolEndpointDto;
use agentdesk_core::{HttpMethod, ToolTransport};
use agentdesk_test_utils::generators::*;
use agentdesk_ui::mappers::*;
use proptest::prelude::*;

/// What an endpoint record looks like after passing through the domain.
fn normalized(dto: &ToolEndpointDto) -> ToolEndpointDto {
    match dto.transport {
        ToolTransport::Http => ToolEndpointDto {
            url: Some(dto.url.clone().unwrap_or_default()),
            method: Some(dto.method.unwrap_or(HttpMethod::Get)),
            headers: Some(dto.headers.clone().unwrap_or_default()),
            target: dto.target.clone(),
            ..ToolEndpointDto::bare(ToolTransport::Http)
        },
        ToolTransport::Mcp => ToolEndpointDto {
            mcp_server: Some(dto.mcp_server.clone().unwrap_or_default()),
            mcp_tool: Some(dto.mcp_tool.clone().unwrap_or_default()),
            ..ToolEndpointDto::bare(ToolTransport::Mcp)
        },
        ToolTransport::Internal => ToolEndpointDto {
            target: dto.target.clone(),
            ..ToolEndpointDto::bare(ToolTransport::Internal)
        },
    }
}

proptest! {
    #[test]
    fn agent_round_trip(dto in arb_agent_dto()) {
        let back = to_agent_dto(&to_agent(dto.clone()));
        let context_tool = dto.context_tool.clone().map(|tool| agentdesk_api::AgentContextToolDto {
            mode: Some(tool.mode.unwrap_or_default()),
            ..tool
        });
        let expected = agentdesk_api::AgentDto {
            enabled: Some(dto.enabled.unwrap_or(true)),
            context_tool,
            ..dto
        };
        prop_assert_eq!(back, expected);
    }

    #[test]
    fn chat_round_trip(dto in arb_chat_dto()) {
        prop_assert_eq!(to_chat_dto(&to_chat(dto.clone())), dto);
    }

    #[test]
    fn message_round_trip(dto in arb_message_dto()) {
        let back = to_message_dto(&to_message(dto.clone()));
        let expected = agentdesk_api::MessageDto {
            content: Some(dto.content.clone().unwrap_or_default()),
            ..dto
        };
        prop_assert_eq!(back, expected);
    }

    #[test]
    fn tool_round_trip(dto in arb_tool_dto()) {
        let tool = to_tool(dto.clone());
        prop_assert_eq!(tool.enabled, dto.enabled.unwrap_or(true));

        let back = to_tool_dto(&tool);
        prop_assert_eq!(&back.id, &dto.id);
        prop_assert_eq!(&back.contract, &dto.contract);
        prop_assert_eq!(&back.response, &dto.response);
        prop_assert_eq!(&back.created_at, &dto.created_at);
        let expected_endpoint = dto
            .endpoint
            .as_ref()
            .map(|raw| serde_json::from_value::<ToolEndpointDto>(raw.clone()).unwrap())
            .map(|flat| serde_json::to_value(normalized(&flat)).unwrap());
        prop_assert_eq!(back.endpoint, expected_endpoint);
    }

    #[test]
    fn endpoint_round_trip_is_normalized(dto in arb_tool_endpoint_dto()) {
        let endpoint = to_tool_endpoint(&dto);
        prop_assert_eq!(endpoint.transport(), dto.transport);
        prop_assert_eq!(to_tool_endpoint_dto(&endpoint), normalized(&dto));
    }

    #[test]
    fn normalized_endpoint_is_a_fixed_point(dto in arb_tool_endpoint_dto()) {
        let once = to_tool_endpoint(&dto);
        let twice = to_tool_endpoint(&to_tool_endpoint_dto(&once));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn raw_endpoint_objects_normalize_like_records(dto in arb_tool_endpoint_dto()) {
        let raw = serde_json::to_value(&dto).unwrap();
        prop_assert_eq!(normalize_endpoint(Some(&raw)), Some(to_tool_endpoint(&dto)));
    }

    #[test]
    fn objects_without_transport_have_no_endpoint(map in arb_json_map()) {
        prop_assume!(!map.contains_key("transport"));
        let raw = serde_json::Value::Object(map);
        prop_assert_eq!(normalize_endpoint(Some(&raw)), None);
    }

    #[test]
    fn update_dtos_never_drop_keys(name in proptest::option::of(arb_name())) {
        let agent = to_agent_update_dto(&agentdesk_core::AgentUpdate {
            name: name.clone(),
            ..Default::default()
        });
        let tool = to_tool_update_dto(&agentdesk_core::ToolUpdate {
            name,
            ..Default::default()
        });
        let agent = serde_json::to_value(agent).unwrap();
        let tool = serde_json::to_value(tool).unwrap();
        prop_assert_eq!(agent.as_object().unwrap().len(), 6);
        prop_assert_eq!(tool.as_object().unwrap().len(), 6);
        prop_assert_eq!(&agent["name"], &tool["name"]);
    }
}

use agentdesk_api::{
    AgentContextToolDto, AgentCreateDto, AgentDto, AgentModelConfigDto, AgentUpdateDto,
};
use agentdesk_core::{
    parse_timestamp, to_iso, Agent, AgentContextTool, AgentCreate, AgentModelConfig, AgentUpdate,
};

use super::non_empty;

pub fn to_agent(dto: AgentDto) -> Agent {
    Agent {
        id: dto.id.unwrap_or_default(),
        name: dto.name,
        role: dto.role,
        instructions: dto.instructions,
        enabled: dto.enabled.unwrap_or(true),
        model: dto.model.map(to_agent_model_config),
        context_tool: dto.context_tool.map(to_agent_context_tool),
        created_at: parse_timestamp(dto.created_at.as_deref()),
        updated_at: parse_timestamp(dto.updated_at.as_deref()),
    }
}

pub fn to_agent_model_config(dto: AgentModelConfigDto) -> AgentModelConfig {
    AgentModelConfig {
        provider: dto.provider,
        model: dto.model,
        temperature: dto.temperature,
        max_output_tokens: dto.max_output_tokens,
        params: dto.params.unwrap_or_default(),
    }
}

pub fn to_agent_context_tool(dto: AgentContextToolDto) -> AgentContextTool {
    AgentContextTool {
        tool_id: dto.tool_id,
        mode: dto.mode.unwrap_or_default(),
        config: dto.config.unwrap_or_default(),
    }
}

pub fn to_agent_model_config_dto(model: &AgentModelConfig) -> AgentModelConfigDto {
    AgentModelConfigDto {
        provider: model.provider.clone(),
        model: model.model.clone(),
        temperature: model.temperature,
        max_output_tokens: model.max_output_tokens,
        params: Some(model.params.clone()),
    }
}

pub fn to_agent_context_tool_dto(tool: &AgentContextTool) -> AgentContextToolDto {
    AgentContextToolDto {
        tool_id: tool.tool_id.clone(),
        mode: Some(tool.mode),
        config: Some(tool.config.clone()),
    }
}

pub fn to_agent_create_dto(model: &AgentCreate) -> AgentCreateDto {
    AgentCreateDto {
        name: model.name.clone(),
        role: model.role.clone(),
        instructions: model.instructions.clone(),
        enabled: model.enabled,
        model: model.model.as_ref().map(to_agent_model_config_dto),
        context_tool: model.context_tool.as_ref().map(to_agent_context_tool_dto),
    }
}

pub fn to_agent_update_dto(model: &AgentUpdate) -> AgentUpdateDto {
    AgentUpdateDto {
        name: model.name.clone(),
        role: model.role.clone(),
        instructions: model.instructions.clone(),
        enabled: model.enabled,
        model: model.model.as_ref().map(to_agent_model_config_dto),
        context_tool: model.context_tool.as_ref().map(to_agent_context_tool_dto),
    }
}

/// Full agent back to the store's response shape.
pub fn to_agent_dto(agent: &Agent) -> AgentDto {
    AgentDto {
        id: non_empty(&agent.id),
        name: agent.name.clone(),
        role: agent.role.clone(),
        instructions: agent.instructions.clone(),
        enabled: Some(agent.enabled),
        model: agent.model.as_ref().map(to_agent_model_config_dto),
        context_tool: agent.context_tool.as_ref().map(to_agent_context_tool_dto),
        created_at: to_iso(agent.created_at.as_ref()),
        updated_at: to_iso(agent.updated_at.as_ref()),
    }
}

use super::{list_or_empty, require, StoreRepository};
use crate::error::RepoResult;
use crate::mappers::{to_agent, to_agent_create_dto, to_agent_update_dto, to_tool};
use agentdesk_api::ListAgentsQuery;
use agentdesk_core::{Agent, AgentCreate, AgentUpdate, Tool};
use tracing::{debug, info};

impl StoreRepository {
    /// Agents, optionally filtered by `enabled`. `None` sends no filter.
    pub async fn list_agents(&self, enabled: Option<bool>) -> RepoResult<Vec<Agent>> {
        let query = enabled.map(|enabled| ListAgentsQuery { enabled });
        let envelope = self.api.list_agents(query.as_ref()).await?;
        let agents: Vec<Agent> = list_or_empty("list agents", envelope)
            .into_iter()
            .map(to_agent)
            .collect();
        debug!(count = agents.len(), ?enabled, "Listed agents");
        Ok(agents)
    }

    pub async fn get_agent(&self, agent_id: &str) -> RepoResult<Agent> {
        let envelope = self.api.get_agent(agent_id).await?;
        require("get agent", envelope).map(to_agent)
    }

    pub async fn create_agent(&self, payload: &AgentCreate) -> RepoResult<Agent> {
        let envelope = self.api.create_agent(&to_agent_create_dto(payload)).await?;
        let agent = require("create agent", envelope).map(to_agent)?;
        info!(agent_id = %agent.id, name = %agent.name, "Created agent");
        Ok(agent)
    }

    pub async fn update_agent(&self, agent_id: &str, payload: &AgentUpdate) -> RepoResult<Agent> {
        let envelope = self
            .api
            .update_agent(agent_id, &to_agent_update_dto(payload))
            .await?;
        require("update agent", envelope).map(to_agent)
    }

    pub async fn delete_agent(&self, agent_id: &str) -> RepoResult<()> {
        self.api.delete_agent(agent_id).await?;
        info!(agent_id, "Deleted agent");
        Ok(())
    }

    /// Tools attached to an agent.
    pub async fn list_agent_tools(&self, agent_id: &str) -> RepoResult<Vec<Tool>> {
        let envelope = self.api.list_agent_tools(agent_id).await?;
        Ok(list_or_empty("list agent tools", envelope)
            .into_iter()
            .map(to_tool)
            .collect())
    }

    pub async fn attach_tool(&self, agent_id: &str, tool_id: &str) -> RepoResult<()> {
        self.api.attach_tool(agent_id, tool_id).await?;
        debug!(agent_id, tool_id, "Attached tool");
        Ok(())
    }

    pub async fn detach_tool(&self, agent_id: &str, tool_id: &str) -> RepoResult<()> {
        self.api.detach_tool(agent_id, tool_id).await?;
        debug!(agent_id, tool_id, "Detached tool");
        Ok(())
    }
}

use super::{list_or_empty, require, StoreRepository};
use crate::error::RepoResult;
use crate::mappers::{to_tool, to_tool_create_dto, to_tool_update_dto};
use agentdesk_core::{Tool, ToolCreate, ToolUpdate};
use tracing::info;

impl StoreRepository {
    pub async fn list_tools(&self) -> RepoResult<Vec<Tool>> {
        let envelope = self.api.list_tools().await?;
        Ok(list_or_empty("list tools", envelope)
            .into_iter()
            .map(to_tool)
            .collect())
    }

    pub async fn get_tool(&self, tool_id: &str) -> RepoResult<Tool> {
        let envelope = self.api.get_tool(tool_id).await?;
        require("get tool", envelope).map(to_tool)
    }

    pub async fn create_tool(&self, payload: &ToolCreate) -> RepoResult<Tool> {
        let envelope = self.api.create_tool(&to_tool_create_dto(payload)).await?;
        let tool = require("create tool", envelope).map(to_tool)?;
        info!(tool_id = %tool.id, name = %tool.name, "Created tool");
        Ok(tool)
    }

    pub async fn update_tool(&self, tool_id: &str, payload: &ToolUpdate) -> RepoResult<Tool> {
        let envelope = self
            .api
            .update_tool(tool_id, &to_tool_update_dto(payload))
            .await?;
        require("update tool", envelope).map(to_tool)
    }

    pub async fn delete_tool(&self, tool_id: &str) -> RepoResult<()> {
        self.api.delete_tool(tool_id).await?;
        info!(tool_id, "Deleted tool");
        Ok(())
    }
}

//! Agent operations: lifecycle, tool list, system prompt, memory blocks,
//! embedding configuration, and message history.

use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::error::ConsoleError;
use crate::model::{
    Agent, CoreMemory, EmbeddingConfig, LlmConfig, MemoryBlock, Message, Source, ToolDescriptor,
};
use crate::repo::{decode, decode_list};
use crate::transport::{invoke, routes, Transport};

/// Payload for agent creation. Serialized as-is; the service fills in
/// identifiers and timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAgentRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub llm_config: LlmConfig,
    pub embedding_config: EmbeddingConfig,
    pub tools: Vec<String>,
    pub system: String,
    pub memory: CoreMemory,
}

/// Outcome of a read-modify-write tool-list mutation. The no-op cases are
/// distinguishable so the operator sees "already attached" rather than a
/// silent success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolChange {
    Updated(Vec<String>),
    AlreadyPresent,
    NotPresent,
}

pub struct AgentRepo<'t, T: Transport> {
    transport: &'t T,
}

impl<'t, T: Transport> AgentRepo<'t, T> {
    pub fn new(transport: &'t T) -> Self {
        Self { transport }
    }

    pub fn list(&self) -> Result<Vec<Agent>, ConsoleError> {
        decode_list(
            invoke(self.transport, routes::list_agents())?,
            "agents",
            "agent",
        )
    }

    pub fn get(&self, agent_id: &str) -> Result<Agent, ConsoleError> {
        decode(invoke(self.transport, routes::get_agent(agent_id))?, "agent")
    }

    pub fn create(&self, request: &CreateAgentRequest) -> Result<Agent, ConsoleError> {
        let payload = serde_json::to_value(request)
            .map_err(|e| ConsoleError::Validation(format!("invalid agent payload: {}", e)))?;
        let agent: Agent = decode(
            invoke(self.transport, routes::create_agent(payload))?,
            "agent",
        )?;
        info!(agent_id = %agent.id, name = %agent.name, "agent created");
        Ok(agent)
    }

    /// Delete cascades to the agent's memory and message state on the remote
    /// side; callers must confirm before reaching this point.
    pub fn delete(&self, agent_id: &str) -> Result<(), ConsoleError> {
        invoke(self.transport, routes::delete_agent(agent_id))?;
        info!(%agent_id, "agent deleted");
        Ok(())
    }

    pub fn list_tools(&self, agent_id: &str) -> Result<Vec<ToolDescriptor>, ConsoleError> {
        decode_list(
            invoke(self.transport, routes::agent_tools(agent_id))?,
            "tools",
            "tool",
        )
    }

    /// Add a tool by name. The service has no single-tool primitive, so this
    /// is a read-modify-write: fetch the current list, extend it, replace it
    /// wholesale. Set semantics: an already-present name is a no-op.
    pub fn add_tool(&self, agent_id: &str, tool_name: &str) -> Result<ToolChange, ConsoleError> {
        let agent = self.get(agent_id)?;
        if agent.tools.iter().any(|t| t == tool_name) {
            return Ok(ToolChange::AlreadyPresent);
        }
        let mut tools = agent.tools;
        tools.push(tool_name.to_string());
        self.replace_tools(agent_id, tools)
    }

    /// Remove a tool by name, with the same read-modify-write shape.
    pub fn remove_tool(&self, agent_id: &str, tool_name: &str) -> Result<ToolChange, ConsoleError> {
        let agent = self.get(agent_id)?;
        if !agent.tools.iter().any(|t| t == tool_name) {
            return Ok(ToolChange::NotPresent);
        }
        let tools: Vec<String> = agent
            .tools
            .into_iter()
            .filter(|t| t != tool_name)
            .collect();
        self.replace_tools(agent_id, tools)
    }

    fn replace_tools(
        &self,
        agent_id: &str,
        tools: Vec<String>,
    ) -> Result<ToolChange, ConsoleError> {
        invoke(
            self.transport,
            routes::update_agent(agent_id, json!({ "tools": &tools })),
        )?;
        info!(%agent_id, count = tools.len(), "tool list replaced");
        Ok(ToolChange::Updated(tools))
    }

    pub fn update_system_prompt(&self, agent_id: &str, system: &str) -> Result<(), ConsoleError> {
        invoke(
            self.transport,
            routes::update_agent(agent_id, json!({ "system": system })),
        )?;
        info!(%agent_id, "system prompt updated");
        Ok(())
    }

    /// Replace one named memory block wholesale, preserving its limit.
    pub fn update_memory_block(
        &self,
        agent_id: &str,
        label: &str,
        value: &str,
    ) -> Result<(), ConsoleError> {
        let agent = self.get(agent_id)?;
        let limit = agent
            .memory
            .block(label)
            .map(|b| b.limit)
            .unwrap_or_else(|| MemoryBlock::new(label, "").limit);
        let block = MemoryBlock {
            label: label.to_string(),
            value: value.to_string(),
            limit,
        };
        let mut memory = CoreMemory::default();
        memory.memory.insert(label.to_string(), block);
        let memory = serde_json::to_value(&memory)
            .map_err(|e| ConsoleError::Validation(format!("invalid memory payload: {}", e)))?;
        invoke(self.transport, routes::update_agent_memory(agent_id, memory))?;
        info!(%agent_id, %label, "memory block replaced");
        Ok(())
    }

    /// Swap in a new embedding configuration value; the old one is replaced,
    /// never edited.
    pub fn update_embedding_config(
        &self,
        agent_id: &str,
        config: &EmbeddingConfig,
    ) -> Result<(), ConsoleError> {
        invoke(
            self.transport,
            routes::update_agent(agent_id, json!({ "embedding_config": config })),
        )?;
        info!(%agent_id, model = %config.embedding_model, "embedding config updated");
        Ok(())
    }

    pub fn attached_sources(&self, agent_id: &str) -> Result<Vec<Source>, ConsoleError> {
        decode_list(
            invoke(self.transport, routes::agent_sources(agent_id))?,
            "sources",
            "source",
        )
    }

    pub fn messages(&self, agent_id: &str, limit: usize) -> Result<Vec<Message>, ConsoleError> {
        decode_list(
            invoke(self.transport, routes::agent_messages(agent_id, limit))?,
            "messages",
            "message",
        )
    }
}

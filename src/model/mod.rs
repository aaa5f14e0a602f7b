//! Wire types for the agent service.
//!
//! These mirror the service's JSON records. The server routinely grows extra
//! fields, so deserialization is tolerant: unknown fields are ignored or
//! captured in flattened maps, and absent fields default rather than fail.

pub mod presets;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A conversational agent as the service reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub llm_config: Option<LlmConfig>,
    #[serde(default)]
    pub embedding_config: Option<EmbeddingConfig>,
    /// Names of tools attached to this agent, in server order.
    #[serde(default)]
    pub tools: Vec<String>,
    /// System prompt text.
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub memory: CoreMemory,
}

/// LLM endpoint configuration. A value object: replaced wholesale on an
/// agent, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub model_endpoint_type: String,
    pub model_endpoint: String,
    pub context_window: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put_inner_thoughts_in_kwargs: Option<bool>,
}

/// Embedding endpoint configuration. Same replacement semantics as
/// [`LlmConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    pub embedding_endpoint_type: String,
    pub embedding_endpoint: String,
    pub embedding_model: String,
    pub embedding_dim: u32,
    pub embedding_chunk_size: u32,
}

/// Core memory: named block slots, canonically `persona` and `human`.
/// The service nests the block map under a `memory` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoreMemory {
    #[serde(default)]
    pub memory: BTreeMap<String, MemoryBlock>,
}

impl CoreMemory {
    pub fn block(&self, label: &str) -> Option<&MemoryBlock> {
        self.memory.get(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub label: String,
    pub value: String,
    #[serde(default = "default_block_limit")]
    pub limit: u32,
}

fn default_block_limit() -> u32 {
    2000
}

impl MemoryBlock {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            limit: default_block_limit(),
        }
    }
}

/// One archival memory entry. Insert/delete only, no in-place edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A data source. Servers attach arbitrary metadata; keep it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, Value>,
}

/// A file uploaded into a data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    pub id: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Upload is asynchronous on the server: the response is a job descriptor,
/// not a completed file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadJob {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, Value>,
}

/// A descriptor for a tool as the service lists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, rename = "type")]
    pub tool_type: Option<String>,
}

/// One message from an agent's history. Immutable: the console only reads.
///
/// `role` stays a raw string here; some servers send `user`, others
/// `MessageRole.user`. [`crate::render::Role::parse`] owns the mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    pub id: Option<String>,
    pub function: ToolCallFunction,
}

/// The arguments stay a serialized JSON string, exactly as the service sends
/// them; parsing is the renderer's best-effort concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallFunction {
    pub name: String,
    #[serde(default)]
    pub arguments: String,
}

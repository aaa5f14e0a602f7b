//! Known-good LLM and embedding configurations offered during agent
//! creation, plus the default memory blocks and tool set for a basic agent.

use std::collections::BTreeMap;

use crate::model::{CoreMemory, EmbeddingConfig, LlmConfig, MemoryBlock};

/// LLM presets the create-agent flow offers, in menu order.
pub fn llm_presets() -> Vec<(&'static str, LlmConfig)> {
    vec![
        (
            "GPT-4",
            LlmConfig {
                model: "gpt-4".to_string(),
                model_endpoint_type: "openai".to_string(),
                model_endpoint: "https://api.openai.com/v1".to_string(),
                context_window: 8192,
                put_inner_thoughts_in_kwargs: Some(true),
            },
        ),
        (
            "Claude-3",
            LlmConfig {
                model: "claude-3-opus-20240229".to_string(),
                model_endpoint_type: "anthropic".to_string(),
                model_endpoint: "https://api.anthropic.com/v1".to_string(),
                context_window: 200000,
                put_inner_thoughts_in_kwargs: Some(true),
            },
        ),
        ("Letta-free", default_llm_config()),
    ]
}

/// Embedding presets the create-agent and embedding-model flows offer.
pub fn embedding_presets() -> Vec<(&'static str, EmbeddingConfig)> {
    vec![
        ("Letta-free", default_embedding_config()),
        (
            "OpenAI",
            EmbeddingConfig {
                embedding_endpoint_type: "openai".to_string(),
                embedding_endpoint: "https://api.openai.com/v1".to_string(),
                embedding_model: "text-embedding-ada-002".to_string(),
                embedding_dim: 1536,
                embedding_chunk_size: 300,
            },
        ),
    ]
}

pub fn default_llm_config() -> LlmConfig {
    LlmConfig {
        model: "letta-free".to_string(),
        model_endpoint_type: "openai".to_string(),
        model_endpoint: "https://inference.memgpt.ai".to_string(),
        context_window: 16384,
        put_inner_thoughts_in_kwargs: Some(true),
    }
}

pub fn default_embedding_config() -> EmbeddingConfig {
    EmbeddingConfig {
        embedding_endpoint_type: "hugging-face".to_string(),
        embedding_endpoint: "https://embeddings.memgpt.ai".to_string(),
        embedding_model: "letta-free".to_string(),
        embedding_dim: 1024,
        embedding_chunk_size: 300,
    }
}

/// Default persona/human blocks for a freshly created agent.
pub fn default_memory() -> CoreMemory {
    let mut blocks = BTreeMap::new();
    blocks.insert(
        "persona".to_string(),
        MemoryBlock::new("persona", "I am a helpful AI assistant."),
    );
    blocks.insert(
        "human".to_string(),
        MemoryBlock::new("human", "The human I am talking to."),
    );
    CoreMemory { memory: blocks }
}

/// Tools every basic agent starts with.
pub fn default_tools() -> Vec<String> {
    vec!["send_message".to_string(), "conversation_search".to_string()]
}

/// Tool names the service ships with; offered when attaching tools.
pub const KNOWN_TOOLS: &[&str] = &[
    "send_message",
    "conversation_search",
    "archival_memory_insert",
    "archival_memory_search",
    "core_memory_append",
    "core_memory_replace",
];

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";

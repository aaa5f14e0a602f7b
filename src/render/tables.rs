//! Format resource listings and detail views as text.

use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

use crate::model::{
    Agent, CoreMemory, EmbeddingConfig, FileMetadata, Passage, Source, ToolDescriptor,
};

/// Format a section heading with bold/underline.
pub fn section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn timestamp(value: &Option<chrono::DateTime<chrono::Utc>>) -> String {
    value
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format the agent listing as a table with a totals line.
pub fn format_agent_table(agents: &[Agent]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", section_heading("Agents")));
    if agents.is_empty() {
        out.push_str("No agents found.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Name", "ID", "Model", "Created"]);
    for (i, agent) in agents.iter().enumerate() {
        let model = agent
            .llm_config
            .as_ref()
            .map(|c| c.model.clone())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            (i + 1).to_string(),
            agent.name.clone(),
            agent.id.clone(),
            model,
            timestamp(&agent.created_at),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} agents.\n", agents.len()));
    out
}

/// Full configuration view for one agent.
pub fn format_agent_details(agent: &Agent, attached_sources: &[Source]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", section_heading("Agent Details")));
    out.push_str(&format!("  Name: {}\n", agent.name));
    out.push_str(&format!("  ID: {}\n", agent.id));
    if let Some(ref description) = agent.description {
        out.push_str(&format!("  Description: {}\n", description));
    }
    out.push_str(&format!("  Created: {}\n", timestamp(&agent.created_at)));
    if let Some(ref llm) = agent.llm_config {
        out.push_str(&format!("\n{}\n", section_heading("LLM")));
        out.push_str(&format!("  Model: {}\n", llm.model));
        out.push_str(&format!("  Endpoint type: {}\n", llm.model_endpoint_type));
        out.push_str(&format!("  Endpoint: {}\n", llm.model_endpoint));
        out.push_str(&format!("  Context window: {}\n", llm.context_window));
    }
    if let Some(ref embedding) = agent.embedding_config {
        out.push('\n');
        out.push_str(&format_embedding_config(embedding, "Embedding"));
    }
    if !agent.tools.is_empty() {
        out.push_str(&format!("\n{}\n", section_heading("Tools")));
        for tool in &agent.tools {
            out.push_str(&format!("  - {}\n", tool));
        }
    }
    out.push('\n');
    out.push_str(&format_memory_blocks(&agent.memory));
    out.push_str(&format!("\n{}\n", section_heading("Attached sources")));
    if attached_sources.is_empty() {
        out.push_str("  none\n");
    } else {
        for source in attached_sources {
            out.push_str(&format!("  - {} (ID: {})\n", source.name, source.id));
        }
    }
    out
}

pub fn format_memory_blocks(memory: &CoreMemory) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", section_heading("Core memory")));
    if memory.memory.is_empty() {
        out.push_str("  no blocks\n");
        return out;
    }
    for (label, block) in &memory.memory {
        out.push_str(&format!(
            "  [{}] ({}/{} chars)\n  {}\n",
            label,
            block.value.chars().count(),
            block.limit,
            block.value
        ));
    }
    out
}

pub fn format_source_table(sources: &[Source]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", section_heading("Data Sources")));
    if sources.is_empty() {
        out.push_str("No sources found.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Name", "ID"]);
    for (i, source) in sources.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            source.name.clone(),
            source.id.clone(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} sources.\n", sources.len()));
    out
}

/// Detail view of one source, including whatever extra metadata the server
/// attached.
pub fn format_source_details(source: &Source) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", section_heading("Source Details")));
    out.push_str(&format!("  Name: {}\n", source.name));
    out.push_str(&format!("  ID: {}\n", source.id));
    for (key, value) in &source.metadata {
        // user_id is server bookkeeping, not operator-relevant
        if key == "user_id" {
            continue;
        }
        out.push_str(&format!("  {}: {}\n", key, value));
    }
    out
}

pub fn format_file_table(files: &[FileMetadata]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", section_heading("Files")));
    if files.is_empty() {
        out.push_str("No files found in this source.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Name", "Type", "Size", "Created"]);
    for (i, file) in files.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            file.file_name.clone().unwrap_or_else(|| "-".to_string()),
            file.file_type.clone().unwrap_or_else(|| "-".to_string()),
            file.file_size
                .map(|s| format!("{} bytes", s))
                .unwrap_or_else(|| "-".to_string()),
            timestamp(&file.created_at),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} files.\n", files.len()));
    out
}

pub fn format_passage_table(passages: &[Passage]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", section_heading("Archival Memory")));
    if passages.is_empty() {
        out.push_str("No memories found.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "ID", "Content", "Created"]);
    for (i, passage) in passages.iter().enumerate() {
        let preview: String = passage.text.chars().take(60).collect();
        let preview = if passage.text.chars().count() > 60 {
            format!("{}...", preview)
        } else {
            preview
        };
        table.add_row(vec![
            (i + 1).to_string(),
            passage.id.clone(),
            preview,
            timestamp(&passage.created_at),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} memories.\n", passages.len()));
    out
}

pub fn format_tool_table(tools: &[ToolDescriptor]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", section_heading("Tools")));
    if tools.is_empty() {
        out.push_str("No tools found for this agent.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Name", "Type", "ID"]);
    for (i, tool) in tools.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            tool.name.clone(),
            tool.tool_type.clone().unwrap_or_else(|| "-".to_string()),
            tool.id.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} tools.\n", tools.len()));
    out
}

pub fn format_embedding_config(config: &EmbeddingConfig, title: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", section_heading(title)));
    out.push_str(&format!("  Model: {}\n", config.embedding_model));
    out.push_str(&format!("  Endpoint type: {}\n", config.embedding_endpoint_type));
    out.push_str(&format!("  Endpoint: {}\n", config.embedding_endpoint));
    out.push_str(&format!("  Dimension: {}\n", config.embedding_dim));
    out.push_str(&format!("  Chunk size: {}\n", config.embedding_chunk_size));
    out
}

pub fn format_embedding_model_table(models: &[EmbeddingConfig]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", section_heading("Available Embedding Models")));
    if models.is_empty() {
        out.push_str("No embedding models available.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Model", "Type", "Dimension", "Chunk size"]);
    for (i, model) in models.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            model.embedding_model.clone(),
            model.embedding_endpoint_type.clone(),
            model.embedding_dim.to_string(),
            model.embedding_chunk_size.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} models.\n", models.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn empty_listings_say_so() {
        assert!(format_agent_table(&[]).contains("No agents found."));
        assert!(format_source_table(&[]).contains("No sources found."));
        assert!(format_file_table(&[]).contains("No files found"));
    }

    #[test]
    fn source_details_skip_user_id() {
        let mut metadata = BTreeMap::new();
        metadata.insert("user_id".to_string(), serde_json::json!("user-1"));
        metadata.insert("embedding_dim".to_string(), serde_json::json!(1024));
        let source = Source {
            id: "s1".to_string(),
            name: "Docs".to_string(),
            metadata,
        };
        let text = format_source_details(&source);
        assert!(!text.contains("user_id"));
        assert!(text.contains("embedding_dim"));
    }

    #[test]
    fn passage_preview_is_bounded() {
        let passage = Passage {
            id: "passage-1".to_string(),
            text: "y".repeat(200),
            created_at: None,
        };
        let text = format_passage_table(&[passage]);
        assert!(text.contains(&format!("{}...", "y".repeat(60))));
        assert!(!text.contains(&"y".repeat(61)));
    }
}

//! Message classification.
//!
//! Raw message records embed further serialized payloads: a user message's
//! text is often a JSON object with `message` and `time` fields, a tool
//! result carries `status`/`message`, an assistant tool call serializes its
//! arguments as a JSON string. Classification parses these best-effort and
//! substitutes raw text on any failure; one malformed record must never
//! abort rendering of the rest of a batch.

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde_json::Value;

use crate::model::Message;

/// Maximum characters of a system message shown before truncation.
const SYSTEM_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    Tool,
    System,
    Other,
}

impl Role {
    /// Map a raw role field to the known enumeration. Some servers prefix
    /// the value with an enum type name (`MessageRole.user`); strip it.
    pub fn parse(raw: &str) -> Self {
        let role = raw
            .rsplit('.')
            .next()
            .unwrap_or(raw)
            .trim()
            .to_ascii_lowercase();
        match role.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            "tool" => Role::Tool,
            "system" => Role::System,
            _ => Role::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
            Role::System => "system",
            Role::Other => "other",
        }
    }
}

/// A display-ready message.
#[derive(Debug, Clone)]
pub struct RenderedMessage {
    pub role: Role,
    pub display_text: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Classify one raw message. Never fails: every parse attempt is isolated
/// and falls back to the raw payload.
pub fn classify(message: &Message) -> RenderedMessage {
    let role = Role::parse(&message.role);
    let display_text = match role {
        Role::User => user_text(&message.text),
        Role::Tool => tool_text(&message.text),
        Role::Assistant => assistant_text(message),
        Role::System => system_text(&message.text),
        Role::Other => message.text.clone(),
    };
    RenderedMessage {
        role,
        display_text,
        timestamp: message.created_at,
    }
}

fn user_text(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(data)) => {
            let message = field_or(&data, "message", "No message");
            let time = field_or(&data, "time", "Unknown");
            format!("{} (Time: {})", message, time)
        }
        _ => raw.to_string(),
    }
}

fn tool_text(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(data)) => {
            let status = field_or(&data, "status", "Unknown");
            let message = field_or(&data, "message", "None");
            format!("Status: {}, Message: {}", status, message)
        }
        _ => raw.to_string(),
    }
}

fn assistant_text(message: &Message) -> String {
    let mut text = message.text.clone();
    let Some(call) = message.tool_calls.as_ref().and_then(|calls| calls.first()) else {
        return text;
    };
    match serde_json::from_str::<Value>(&call.function.arguments) {
        Ok(Value::Object(args)) => {
            let response = field_or(&args, "message", "");
            text.push_str(&format!("\nResponse: {}", response));
        }
        _ => text.push_str("\n[could not parse tool call]"),
    }
    text
}

fn system_text(raw: &str) -> String {
    if raw.chars().count() > SYSTEM_PREVIEW_CHARS {
        let preview: String = raw.chars().take(SYSTEM_PREVIEW_CHARS).collect();
        format!("{}...", preview)
    } else {
        raw.to_string()
    }
}

fn field_or(data: &serde_json::Map<String, Value>, key: &str, default: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => default.to_string(),
    }
}

/// Terminal rendering with the role color scheme: user blue, tool yellow,
/// assistant green, system magenta, everything else plain; timestamps white.
pub fn render_colored(rendered: &RenderedMessage) -> String {
    let tagged = format!("[{}] {}", rendered.role.label(), rendered.display_text);
    let body = match rendered.role {
        Role::User => tagged.blue().to_string(),
        Role::Tool => tagged.yellow().to_string(),
        Role::Assistant => tagged.green().to_string(),
        Role::System => tagged.magenta().to_string(),
        Role::Other => tagged,
    };
    match rendered.timestamp {
        Some(ts) => format!("{}\n{}", body, format!("Timestamp: {}", ts).white()),
        None => body,
    }
}

//! Agentops: Interactive Administration Console
//!
//! A single-operator console for a stateful conversational-agent service.
//! Lists, inspects, and mutates server-side resources (agents, tools, memory
//! blocks, archival passages, data sources, files, message history) through
//! a repeated list, select, confirm, mutate interaction pattern.

pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod model;
pub mod render;
pub mod repo;
pub mod tooling;
pub mod transport;

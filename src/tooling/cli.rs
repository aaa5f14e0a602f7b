//! Command-line interface. Each subcommand enters the interactive menu for
//! one administration area.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{ConfigLoader, ConsoleConfig};
use crate::error::ConsoleError;
use crate::menu::DialoguerPrompter;
use crate::tooling::flows::{self, FlowContext};
use crate::transport::HttpTransport;

/// Agentops - administration console for a conversational-agent service
#[derive(Parser)]
#[command(name = "agentops")]
#[command(about = "Interactive administration console for a conversational-agent service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the agent service (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage agents (list, inspect, create, update, delete)
    Agents,
    /// Manage tools attached to agents
    Tools,
    /// View and update core memory blocks
    Memory,
    /// Manage archival memory passages
    Archival,
    /// Manage data sources, their files, and agent attachments
    Sources,
    /// Browse embedding models and agent embedding configurations
    Models,
    /// View an agent's message history
    Messages,
}

pub struct CliContext {
    config: ConsoleConfig,
    transport: HttpTransport,
}

impl CliContext {
    pub fn new(cli: &Cli) -> Result<Self, ConsoleError> {
        let mut config = ConfigLoader::load(cli.config.as_deref())?;
        if let Some(url) = &cli.base_url {
            config.base_url = url.clone();
        }
        let transport = HttpTransport::new(&config.base_url, config.timeout_secs)?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<(), ConsoleError> {
        tracing::debug!(base_url = %self.transport.base_url(), "starting console session");
        let ctx = FlowContext {
            transport: &self.transport,
            attach_style: self.config.attach_style,
            message_limit: self.config.message_limit,
        };
        let mut prompter = DialoguerPrompter;
        match command {
            Commands::Agents => flows::agents::run(&ctx, &mut prompter),
            Commands::Tools => flows::tools::run(&ctx, &mut prompter),
            Commands::Memory => flows::memory::run(&ctx, &mut prompter),
            Commands::Archival => flows::archival::run(&ctx, &mut prompter),
            Commands::Sources => flows::sources::run(&ctx, &mut prompter),
            Commands::Models => flows::models::run(&ctx, &mut prompter),
            Commands::Messages => flows::messages::run(&ctx, &mut prompter),
        }
    }
}

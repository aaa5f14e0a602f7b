//! Agent administration menu.

use crate::error::ConsoleError;
use crate::menu::{run_action, Prompter};
use crate::model::presets;
use crate::model::Agent;
use crate::render::tables::{format_agent_details, format_agent_table};
use crate::repo::CreateAgentRequest;
use crate::tooling::flows::{
    agent_labels, menu_round, pick_agent, report_error, report_outcome, FlowContext,
};
use crate::transport::Transport;

const MENU: &[&str] = &[
    "List agents",
    "View agent details",
    "Create agent (basic)",
    "Create agent (advanced)",
    "Update system prompt",
    "Delete agent",
];

pub fn run<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    loop {
        let Some(choice) = menu_round(prompter, "Agent Management", MENU)? else {
            return Ok(());
        };
        let result = match choice {
            0 => list(ctx),
            1 => view(ctx, prompter),
            2 => create_basic(ctx, prompter),
            3 => create_advanced(ctx, prompter),
            4 => update_system_prompt(ctx, prompter),
            5 => delete(ctx, prompter),
            _ => unreachable!(),
        };
        if let Err(err) = result {
            report_error(&err);
        }
    }
}

fn list<T: Transport>(ctx: &FlowContext<'_, T>) -> Result<(), ConsoleError> {
    let agents = ctx.agents().list()?;
    print!("{}", format_agent_table(&agents));
    Ok(())
}

fn view<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    // Re-fetch for the full record; listings can be slimmed down.
    let agent = ctx.agents().get(&agent.id)?;
    let attached = ctx.agents().attached_sources(&agent.id)?;
    print!("{}", format_agent_details(&agent, &attached));
    Ok(())
}

fn prompt_identity<P: Prompter>(
    prompter: &mut P,
) -> Result<(String, Option<String>), ConsoleError> {
    let name = prompter.read_line("Agent name")?;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ConsoleError::Validation("agent name cannot be empty".to_string()));
    }
    let description = prompter.read_line("Description (optional)")?;
    let description = Some(description.trim().to_string()).filter(|d| !d.is_empty());
    Ok((name, description))
}

fn report_created(agent: &Agent) {
    println!("Agent created: {} (ID: {})", agent.name, agent.id);
}

fn create_basic<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let (name, description) = prompt_identity(prompter)?;
    let request = CreateAgentRequest {
        name,
        description,
        llm_config: presets::default_llm_config(),
        embedding_config: presets::default_embedding_config(),
        tools: presets::default_tools(),
        system: presets::DEFAULT_SYSTEM_PROMPT.to_string(),
        memory: presets::default_memory(),
    };
    let agent = ctx.agents().create(&request)?;
    report_created(&agent);
    Ok(())
}

fn create_advanced<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    use crate::menu::{select, SelectOutcome};

    let (name, description) = prompt_identity(prompter)?;

    let llm_presets = presets::llm_presets();
    let llm_labels: Vec<String> = llm_presets.iter().map(|(n, _)| n.to_string()).collect();
    let llm_config = match select(prompter, "LLM models", &llm_labels)? {
        SelectOutcome::Chosen(index) => llm_presets[index].1.clone(),
        _ => return Ok(()),
    };

    let embedding_presets = presets::embedding_presets();
    let embedding_labels: Vec<String> = embedding_presets
        .iter()
        .map(|(n, _)| n.to_string())
        .collect();
    let embedding_config = match select(prompter, "embedding models", &embedding_labels)? {
        SelectOutcome::Chosen(index) => embedding_presets[index].1.clone(),
        _ => return Ok(()),
    };

    let tools_line =
        prompter.read_line("Tools (comma-separated, empty for defaults)")?;
    let tools: Vec<String> = if tools_line.trim().is_empty() {
        presets::default_tools()
    } else {
        tools_line
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    };

    let system_line = prompter.read_line("System prompt (empty for default)")?;
    let system = if system_line.trim().is_empty() {
        presets::DEFAULT_SYSTEM_PROMPT.to_string()
    } else {
        system_line.trim().to_string()
    };

    let request = CreateAgentRequest {
        name,
        description,
        llm_config,
        embedding_config,
        tools,
        system,
        memory: presets::default_memory(),
    };
    let agent = ctx.agents().create(&request)?;
    report_created(&agent);
    Ok(())
}

fn update_system_prompt<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    let current = ctx.agents().get(&agent.id)?;
    println!(
        "Current system prompt:\n{}",
        current.system.as_deref().unwrap_or("(none)")
    );
    let system = prompter.read_line("New system prompt")?;
    if system.trim().is_empty() {
        return Err(ConsoleError::Validation(
            "system prompt cannot be empty".to_string(),
        ));
    }
    ctx.agents().update_system_prompt(&agent.id, system.trim())?;
    println!("System prompt updated for {}.", agent.name);
    Ok(())
}

/// Delete cascades to the agent's memory and messages on the server, so this
/// goes through the confirmation gate.
fn delete<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let agents = ctx.agents().list()?;
    let labels = agent_labels(&agents);
    let outcome = run_action(
        prompter,
        "agents",
        &labels,
        true,
        |index| {
            format!(
                "Delete '{}'? This also removes its memory and message history",
                agents[index].name
            )
        },
        |index| {
            ctx.agents().delete(&agents[index].id)?;
            Ok(agents[index].name.clone())
        },
    )?;
    report_outcome(outcome, |name| format!("Agent '{}' deleted.", name));
    Ok(())
}

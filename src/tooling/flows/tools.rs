//! Tool management menu: list, add, remove tools on an agent.

use crate::error::ConsoleError;
use crate::menu::Prompter;
use crate::model::presets::KNOWN_TOOLS;
use crate::render::tables::format_tool_table;
use crate::repo::ToolChange;
use crate::tooling::flows::{menu_round, pick_agent, report_error, FlowContext};
use crate::transport::Transport;

const MENU: &[&str] = &["List agent tools", "Add tool to agent", "Remove tool from agent"];

pub fn run<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    loop {
        let Some(choice) = menu_round(prompter, "Agent Tool Management", MENU)? else {
            return Ok(());
        };
        let result = match choice {
            0 => list(ctx, prompter),
            1 => add(ctx, prompter),
            2 => remove(ctx, prompter),
            _ => unreachable!(),
        };
        if let Err(err) = result {
            report_error(&err);
        }
    }
}

fn list<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    let tools = ctx.agents().list_tools(&agent.id)?;
    print!("{}", format_tool_table(&tools));
    Ok(())
}

fn prompt_tool_name<P: Prompter>(prompter: &mut P) -> Result<String, ConsoleError> {
    println!("Known tools: {}", KNOWN_TOOLS.join(", "));
    let name = prompter.read_line("Tool name")?;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ConsoleError::Validation("tool name cannot be empty".to_string()));
    }
    Ok(name)
}

fn add<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    let tool_name = prompt_tool_name(prompter)?;
    match ctx.agents().add_tool(&agent.id, &tool_name)? {
        ToolChange::Updated(tools) => {
            println!("Tool '{}' added. Agent now has {} tools.", tool_name, tools.len())
        }
        ToolChange::AlreadyPresent => println!("Tool '{}' already attached to agent.", tool_name),
        ToolChange::NotPresent => unreachable!("add never reports NotPresent"),
    }
    Ok(())
}

fn remove<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    let tools = ctx.agents().list_tools(&agent.id)?;
    print!("{}", format_tool_table(&tools));
    if tools.is_empty() {
        return Ok(());
    }
    let tool_name = prompt_tool_name(prompter)?;
    match ctx.agents().remove_tool(&agent.id, &tool_name)? {
        ToolChange::Updated(tools) => {
            println!("Tool '{}' removed. Agent now has {} tools.", tool_name, tools.len())
        }
        ToolChange::NotPresent => println!("Tool '{}' not found on agent.", tool_name),
        ToolChange::AlreadyPresent => unreachable!("remove never reports AlreadyPresent"),
    }
    Ok(())
}

//! Core memory menu: view and replace the persona/human blocks.

use crate::error::ConsoleError;
use crate::menu::Prompter;
use crate::render::tables::format_memory_blocks;
use crate::tooling::flows::{menu_round, pick_agent, report_error, FlowContext};
use crate::transport::Transport;

const MENU: &[&str] = &[
    "View core memory",
    "Update persona block",
    "Update human block",
];

pub fn run<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    loop {
        let Some(choice) = menu_round(prompter, "Core Memory Management", MENU)? else {
            return Ok(());
        };
        let result = match choice {
            0 => view(ctx, prompter),
            1 => update_block(ctx, prompter, "persona"),
            2 => update_block(ctx, prompter, "human"),
            _ => unreachable!(),
        };
        if let Err(err) = result {
            report_error(&err);
        }
    }
}

fn view<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    let agent = ctx.agents().get(&agent.id)?;
    print!("{}", format_memory_blocks(&agent.memory));
    Ok(())
}

/// Replace one named block wholesale. The block's character limit is
/// preserved; the value must fit it.
fn update_block<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
    label: &str,
) -> Result<(), ConsoleError> {
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    let current = ctx.agents().get(&agent.id)?;
    if let Some(block) = current.memory.block(label) {
        println!("Current {} block:\n{}", label, block.value);
    }
    let value = prompter.read_line(&format!("New {} value", label))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ConsoleError::Validation(format!(
            "{} block value cannot be empty",
            label
        )));
    }
    if let Some(block) = current.memory.block(label) {
        let limit = block.limit as usize;
        if value.chars().count() > limit {
            return Err(ConsoleError::Validation(format!(
                "{} block is limited to {} characters",
                label, limit
            )));
        }
    }
    ctx.agents().update_memory_block(&agent.id, label, value)?;
    println!("{} block updated for {}.", label, agent.name);
    Ok(())
}

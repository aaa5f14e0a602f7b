//! Embedding model menu: browse the server catalog, inspect and update an
//! agent's embedding configuration.

use crate::error::ConsoleError;
use crate::menu::{select, Prompter, SelectOutcome};
use crate::render::tables::{format_embedding_config, format_embedding_model_table};
use crate::tooling::flows::{menu_round, pick_agent, report_error, FlowContext};
use crate::transport::Transport;

const MENU: &[&str] = &[
    "List available embedding models",
    "View agent's current embedding config",
    "Update agent's embedding config",
];

pub fn run<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    loop {
        let Some(choice) = menu_round(prompter, "Embedding Model Management", MENU)? else {
            return Ok(());
        };
        let result = match choice {
            0 => list(ctx),
            1 => view(ctx, prompter),
            2 => update(ctx, prompter),
            _ => unreachable!(),
        };
        if let Err(err) = result {
            report_error(&err);
        }
    }
}

fn list<T: Transport>(ctx: &FlowContext<'_, T>) -> Result<(), ConsoleError> {
    let models = ctx.catalog().embedding_models()?;
    print!("{}", format_embedding_model_table(&models));
    Ok(())
}

fn view<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    let agent = ctx.agents().get(&agent.id)?;
    match agent.embedding_config {
        Some(ref config) => print!("{}", format_embedding_config(config, "Embedding Configuration")),
        None => println!("Agent has no embedding configuration."),
    }
    Ok(())
}

fn update<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    // The server's catalog is authoritative; presets exist only for agent
    // creation when the catalog endpoint is unavailable.
    let models = ctx.catalog().embedding_models()?;
    let labels: Vec<String> = models
        .iter()
        .map(|m| format!("{} ({}d)", m.embedding_model, m.embedding_dim))
        .collect();
    let SelectOutcome::Chosen(index) = select(prompter, "embedding models", &labels)? else {
        return Ok(());
    };
    ctx.agents().update_embedding_config(&agent.id, &models[index])?;
    println!(
        "Embedding config of '{}' set to {}.",
        agent.name, models[index].embedding_model
    );
    Ok(())
}

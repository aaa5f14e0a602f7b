//! Archival memory menu for one agent: list, view, insert, delete passages.

use owo_colors::OwoColorize;

use crate::error::ConsoleError;
use crate::menu::{run_action, Prompter};
use crate::render::tables::format_passage_table;
use crate::tooling::flows::{menu_round, pick_agent, report_error, report_outcome, FlowContext};
use crate::transport::Transport;

const MENU: &[&str] = &[
    "List all memories",
    "View specific memory",
    "Add new memory",
    "Delete memory",
];

pub fn run<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    loop {
        let title = format!("Archival Memory Management for {}", agent.name);
        let Some(choice) = menu_round(prompter, &title, MENU)? else {
            return Ok(());
        };
        let result = match choice {
            0 => list(ctx, &agent.id),
            1 => view(ctx, prompter, &agent.id),
            2 => insert(ctx, prompter, &agent.id),
            3 => delete(ctx, prompter, &agent.id),
            _ => unreachable!(),
        };
        if let Err(err) = result {
            report_error(&err);
        }
    }
}

fn list<T: Transport>(ctx: &FlowContext<'_, T>, agent_id: &str) -> Result<(), ConsoleError> {
    let passages = ctx.archival().list(agent_id)?;
    print!("{}", format_passage_table(&passages));
    Ok(())
}

fn view<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
    agent_id: &str,
) -> Result<(), ConsoleError> {
    use crate::menu::{select, SelectOutcome};

    let passages = ctx.archival().list(agent_id)?;
    let labels: Vec<String> = passages.iter().map(|p| p.id.clone()).collect();
    let SelectOutcome::Chosen(index) = select(prompter, "memories", &labels)? else {
        return Ok(());
    };
    let passage = &passages[index];
    println!("{}", "Memory Contents:".blue());
    println!("ID: {}", passage.id);
    println!("Content: {}", passage.text);
    if let Some(created) = passage.created_at {
        println!("Created At: {}", created);
    }
    Ok(())
}

fn insert<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
    agent_id: &str,
) -> Result<(), ConsoleError> {
    let text = prompter.read_line("Memory content")?;
    let text = text.trim();
    if text.is_empty() {
        return Err(ConsoleError::Validation(
            "memory content cannot be empty".to_string(),
        ));
    }
    let passage = ctx.archival().insert(agent_id, text)?;
    println!("Memory added with ID: {}", passage.id);
    Ok(())
}

fn delete<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
    agent_id: &str,
) -> Result<(), ConsoleError> {
    let passages = ctx.archival().list(agent_id)?;
    let labels: Vec<String> = passages
        .iter()
        .map(|p| {
            let preview: String = p.text.chars().take(40).collect();
            format!("{} ({})", p.id, preview)
        })
        .collect();
    let outcome = run_action(
        prompter,
        "memories",
        &labels,
        true,
        |index| format!("Delete memory '{}'?", passages[index].id),
        |index| {
            ctx.archival().delete(agent_id, &passages[index].id)?;
            Ok(passages[index].id.clone())
        },
    )?;
    report_outcome(outcome, |id| format!("Memory '{}' deleted.", id));
    Ok(())
}

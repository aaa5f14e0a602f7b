//! Data source menu: source lifecycle, agent attachments, and files.

use std::path::Path;

use crate::error::ConsoleError;
use crate::menu::{run_action, Prompter};
use crate::render::tables::{format_file_table, format_source_details, format_source_table};
use crate::tooling::flows::{
    menu_round, pick_agent, pick_source, report_error, report_outcome, source_labels, FlowContext,
};
use crate::transport::Transport;

const MENU: &[&str] = &[
    "List all sources",
    "Create new source",
    "Delete source",
    "View source details and attached agents",
    "Attach source to agent",
    "Detach source from agent",
    "Upload file to source",
    "List files in source",
    "Delete file from source",
];

pub fn run<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    loop {
        let Some(choice) = menu_round(prompter, "Data Source Management", MENU)? else {
            return Ok(());
        };
        let result = match choice {
            0 => list(ctx),
            1 => create(ctx, prompter),
            2 => delete(ctx, prompter),
            3 => view(ctx, prompter),
            4 => attach(ctx, prompter),
            5 => detach(ctx, prompter),
            6 => upload_file(ctx, prompter),
            7 => list_files(ctx, prompter),
            8 => delete_file(ctx, prompter),
            _ => unreachable!(),
        };
        if let Err(err) = result {
            report_error(&err);
        }
    }
}

fn list<T: Transport>(ctx: &FlowContext<'_, T>) -> Result<(), ConsoleError> {
    let sources = ctx.sources().list()?;
    print!("{}", format_source_table(&sources));
    Ok(())
}

fn create<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let name = prompter.read_line("Name for new source")?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ConsoleError::Validation("source name cannot be empty".to_string()));
    }
    let source = ctx.sources().create(name)?;
    println!("Source created: {} (ID: {})", source.name, source.id);
    Ok(())
}

fn delete<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let sources = ctx.sources().list()?;
    let labels = source_labels(&sources);
    let outcome = run_action(
        prompter,
        "sources",
        &labels,
        true,
        |index| format!("Are you sure you want to delete '{}'?", sources[index].name),
        |index| {
            ctx.sources().delete(&sources[index].id)?;
            Ok(sources[index].name.clone())
        },
    )?;
    report_outcome(outcome, |name| format!("Source '{}' deleted.", name));
    Ok(())
}

fn view<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(source) = pick_source(ctx, prompter)? else {
        return Ok(());
    };
    print!("{}", format_source_details(&source));
    let attached = ctx.sources().attached_agents(&source.id)?;
    if attached.is_empty() {
        println!("No agents attached to this source.");
    } else {
        println!("Attached agents:");
        for agent in attached {
            println!("- {} (ID: {})", agent.name, agent.id);
        }
    }
    Ok(())
}

fn attach<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(source) = pick_source(ctx, prompter)? else {
        return Ok(());
    };
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    ctx.sources().attach(&source.id, &agent.id)?;
    println!("Source '{}' attached to '{}'.", source.name, agent.name);
    Ok(())
}

fn detach<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(source) = pick_source(ctx, prompter)? else {
        return Ok(());
    };
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    ctx.sources().detach(&source.id, &agent.id)?;
    println!("Source '{}' detached from '{}'.", source.name, agent.name);
    Ok(())
}

fn upload_file<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(source) = pick_source(ctx, prompter)? else {
        return Ok(());
    };
    let path_line = prompter.read_line("Path to file")?;
    let path = Path::new(path_line.trim());
    let job = ctx.sources().upload_file(&source.id, path)?;
    match job.id {
        Some(id) => println!("File upload submitted. Job ID: {}", id),
        None => println!("File upload submitted."),
    }
    Ok(())
}

fn list_files<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(source) = pick_source(ctx, prompter)? else {
        return Ok(());
    };
    let files = ctx.sources().list_files(&source.id)?;
    print!("{}", format_file_table(&files));
    Ok(())
}

fn delete_file<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(source) = pick_source(ctx, prompter)? else {
        return Ok(());
    };
    let files = ctx.sources().list_files(&source.id)?;
    let labels: Vec<String> = files
        .iter()
        .map(|f| f.file_name.clone().unwrap_or_else(|| f.id.clone()))
        .collect();
    let outcome = run_action(
        prompter,
        "files",
        &labels,
        true,
        |index| format!("Are you sure you want to delete '{}'?", labels[index]),
        |index| {
            ctx.sources().delete_file(&source.id, &files[index].id)?;
            Ok(labels[index].clone())
        },
    )?;
    report_outcome(outcome, |name| format!("File '{}' deleted.", name));
    Ok(())
}

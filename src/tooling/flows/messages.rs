//! Message history view with role color coding.

use crate::error::ConsoleError;
use crate::menu::Prompter;
use crate::render::{classify, render_colored};
use crate::tooling::flows::{pick_agent, FlowContext};
use crate::transport::Transport;

pub fn run<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<(), ConsoleError> {
    let Some(agent) = pick_agent(ctx, prompter)? else {
        return Ok(());
    };
    let messages = ctx.agents().messages(&agent.id, ctx.message_limit)?;
    if messages.is_empty() {
        println!("No messages found for this agent.");
        return Ok(());
    }
    println!("\nMessage history for {}:", agent.name);
    for message in &messages {
        println!("\n---");
        println!("{}", render_colored(&classify(message)));
    }
    Ok(())
}

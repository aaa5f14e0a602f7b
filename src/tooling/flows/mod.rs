//! Interactive menu flows, one per administration area.
//!
//! Every flow follows the same discipline: the resource snapshot is
//! discarded and re-fetched at the start of each menu cycle, each action
//! issues at most one logical operation at a time, and any error from an
//! action is reported in one line and returns control to the enclosing menu.

pub mod agents;
pub mod archival;
pub mod memory;
pub mod messages;
pub mod models;
pub mod sources;
pub mod tools;

use owo_colors::OwoColorize;

use crate::error::ConsoleError;
use crate::menu::{select, MenuOutcome, Prompter, SelectOutcome};
use crate::model::{Agent, Source};
use crate::repo::{AgentRepo, ArchivalRepo, ModelCatalog, SourceRepo};
use crate::transport::{AttachStyle, Transport};

/// Shared handles for one console session.
pub struct FlowContext<'t, T: Transport> {
    pub transport: &'t T,
    pub attach_style: AttachStyle,
    pub message_limit: usize,
}

impl<'t, T: Transport> FlowContext<'t, T> {
    pub fn agents(&self) -> AgentRepo<'t, T> {
        AgentRepo::new(self.transport)
    }

    pub fn sources(&self) -> SourceRepo<'t, T> {
        SourceRepo::new(self.transport, self.attach_style)
    }

    pub fn archival(&self) -> ArchivalRepo<'t, T> {
        ArchivalRepo::new(self.transport)
    }

    pub fn catalog(&self) -> ModelCatalog<'t, T> {
        ModelCatalog::new(self.transport)
    }
}

/// One round of a top-level area menu. Returns the chosen option index, or
/// None when the operator exits.
pub(crate) fn menu_round<P: Prompter>(
    prompter: &mut P,
    title: &str,
    options: &[&str],
) -> Result<Option<usize>, ConsoleError> {
    println!("\n{}", title.blue().bold());
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    match select(prompter, "actions", &labels)? {
        SelectOutcome::Chosen(index) => Ok(Some(index)),
        SelectOutcome::Cancelled | SelectOutcome::Empty => Ok(None),
    }
}

/// Report one action's error and keep the session alive.
pub(crate) fn report_error(err: &ConsoleError) {
    eprintln!("{}", format!("Error: {}", err).red());
}

/// Report a finished menu action.
pub(crate) fn report_outcome<R>(outcome: MenuOutcome<R>, success: impl FnOnce(R) -> String) {
    match outcome {
        MenuOutcome::Failed(err) => report_error(&err),
        other => {
            if let Some(line) = outcome_line(other, success) {
                println!("{}", line);
            }
        }
    }
}

fn outcome_line<R>(outcome: MenuOutcome<R>, success: impl FnOnce(R) -> String) -> Option<String> {
    match outcome {
        MenuOutcome::Completed(result) => Some(success(result).green().to_string()),
        MenuOutcome::Cancelled => Some("Cancelled.".to_string()),
        // `select` already told the operator the listing was empty.
        MenuOutcome::NothingToDo => None,
        MenuOutcome::Failed(_) => None,
    }
}

pub(crate) fn agent_labels(agents: &[Agent]) -> Vec<String> {
    agents
        .iter()
        .map(|a| format!("{} (ID: {})", a.name, a.id))
        .collect()
}

pub(crate) fn source_labels(sources: &[Source]) -> Vec<String> {
    sources
        .iter()
        .map(|s| format!("{} (ID: {})", s.name, s.id))
        .collect()
}

/// Pick one agent from a fresh listing. Returns None on cancel or when no
/// agents exist.
pub(crate) fn pick_agent<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<Option<Agent>, ConsoleError> {
    let mut agents = ctx.agents().list()?;
    match select(prompter, "agents", &agent_labels(&agents))? {
        SelectOutcome::Chosen(index) => Ok(Some(agents.swap_remove(index))),
        SelectOutcome::Cancelled | SelectOutcome::Empty => Ok(None),
    }
}

/// Pick one source from a fresh listing.
pub(crate) fn pick_source<T: Transport, P: Prompter>(
    ctx: &FlowContext<'_, T>,
    prompter: &mut P,
) -> Result<Option<Source>, ConsoleError> {
    let mut sources = ctx.sources().list()?;
    match select(prompter, "sources", &source_labels(&sources))? {
        SelectOutcome::Chosen(index) => Ok(Some(sources.swap_remove(index))),
        SelectOutcome::Cancelled | SelectOutcome::Empty => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_outcome_reports_the_success_line() {
        let line = outcome_line(MenuOutcome::Completed("Docs".to_string()), |name| {
            format!("Source '{}' deleted.", name)
        });
        assert!(line.unwrap().contains("Source 'Docs' deleted."));
    }

    #[test]
    fn cancelled_outcome_reports_once() {
        let line = outcome_line(MenuOutcome::<()>::Cancelled, |_| String::new());
        assert_eq!(line.as_deref(), Some("Cancelled."));
    }

    #[test]
    fn empty_listing_outcome_adds_no_second_line() {
        let line = outcome_line(MenuOutcome::<()>::NothingToDo, |_| String::new());
        assert!(line.is_none());
    }
}

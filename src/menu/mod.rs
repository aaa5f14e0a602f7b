//! The reusable list → select → confirm → execute control flow.
//!
//! Every resource menu in the console runs through this one state machine:
//! `Listing → AwaitingSelection → (Confirming) → Executing → Done`. The
//! confirmation gate for destructive operations lives here and nowhere else,
//! and cancellation always takes effect before any network call is issued.

use owo_colors::OwoColorize;

use crate::error::ConsoleError;

/// Input seam. Production prompts through `dialoguer`; tests script answers.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;
    fn confirm(&mut self, prompt: &str) -> Result<bool, ConsoleError>;
}

/// Interactive prompter over `dialoguer`.
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ConsoleError::Config(format!("Failed to get user input: {}", e)))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| ConsoleError::Config(format!("Failed to get user input: {}", e)))
    }
}

/// Result of a selection round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Zero-based index into the listed collection.
    Chosen(usize),
    /// Operator entered the sentinel (0).
    Cancelled,
    /// Nothing to list.
    Empty,
}

/// Terminal outcome of a full menu action.
#[derive(Debug)]
pub enum MenuOutcome<R> {
    Completed(R),
    Cancelled,
    NothingToDo,
    Failed(ConsoleError),
}

enum FlowState {
    Listing,
    AwaitingSelection,
    Confirming(usize),
    Executing(usize),
}

/// Render an ordered 1-based listing and accept a selection. Invalid input
/// re-prompts with a diagnostic, with no bound on retries; `0` cancels.
pub fn select<P: Prompter>(
    prompter: &mut P,
    title: &str,
    labels: &[String],
) -> Result<SelectOutcome, ConsoleError> {
    if labels.is_empty() {
        println!("No {} found.", title);
        return Ok(SelectOutcome::Empty);
    }
    println!("\n{}", format!("Available {}:", title).bold());
    for (i, label) in labels.iter().enumerate() {
        println!("{}. {}", i + 1, label);
    }
    loop {
        let line = prompter.read_line("Enter number (0 to cancel)")?;
        let choice: i64 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Please enter a valid number.");
                continue;
            }
        };
        if choice == 0 {
            return Ok(SelectOutcome::Cancelled);
        }
        let index = choice - 1;
        if index < 0 || index as usize >= labels.len() {
            println!("Invalid selection. Please try again.");
            continue;
        }
        return Ok(SelectOutcome::Chosen(index as usize));
    }
}

/// Drive the full machine for one action against a listed collection.
///
/// `destructive` routes the flow through the Confirming state; anything but
/// an explicit affirmative cancels with zero mutating calls issued. Action
/// failures are reported through [`MenuOutcome::Failed`] so the session
/// continues at the enclosing menu.
pub fn run_action<P, R, F>(
    prompter: &mut P,
    title: &str,
    labels: &[String],
    destructive: bool,
    confirm_prompt: impl Fn(usize) -> String,
    action: F,
) -> Result<MenuOutcome<R>, ConsoleError>
where
    P: Prompter,
    F: FnOnce(usize) -> Result<R, ConsoleError>,
{
    let mut action = Some(action);
    let mut state = FlowState::Listing;
    loop {
        state = match state {
            FlowState::Listing => FlowState::AwaitingSelection,
            FlowState::AwaitingSelection => match select(prompter, title, labels)? {
                SelectOutcome::Empty => return Ok(MenuOutcome::NothingToDo),
                SelectOutcome::Cancelled => return Ok(MenuOutcome::Cancelled),
                SelectOutcome::Chosen(index) if destructive => FlowState::Confirming(index),
                SelectOutcome::Chosen(index) => FlowState::Executing(index),
            },
            FlowState::Confirming(index) => {
                if prompter.confirm(&confirm_prompt(index))? {
                    FlowState::Executing(index)
                } else {
                    return Ok(MenuOutcome::Cancelled);
                }
            }
            FlowState::Executing(index) => {
                let action = action.take().expect("action runs at most once");
                return Ok(match action(index) {
                    Ok(result) => MenuOutcome::Completed(result),
                    Err(err) => MenuOutcome::Failed(err),
                });
            }
        };
    }
}

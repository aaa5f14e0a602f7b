//! CLI Tooling
//!
//! Command-line entry points and the interactive per-area menu flows.

pub mod cli;
pub mod flows;

pub use cli::{Cli, CliContext, Commands};

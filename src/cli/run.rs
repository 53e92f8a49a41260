//! Dispatch to the command handler for the parsed arguments.
//!
//! Returns `Ok(CommandResult)` with the command's summary and exit behavior,
//! or `Err` if the command fails (e.g., invalid locale, load or parse errors).

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, merge::merge},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

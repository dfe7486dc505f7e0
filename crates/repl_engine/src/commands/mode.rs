use repl_contract::CommandResult;

use crate::{registry::Command, session::ReplSession};

/// Toggles between brief and verbose history output. Extra arguments are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeCommand;

impl Command for ModeCommand {
    fn run(&self, session: &mut ReplSession, _argv: &[String], command_text: &str) -> CommandResult {
        let verbose = session.toggle_verbosity();
        let label = if verbose { "verbose" } else { "brief" };
        CommandResult::text(command_text, format!("mode changed to {label}"), verbose)
    }
}

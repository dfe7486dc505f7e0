use repl_contract::CommandResult;

use crate::{registry::Command, session::ReplSession};

use super::{expect_args, NO_FILE_LOADED, VIEW};

/// Shows the loaded dataset as a table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewCommand;

impl Command for ViewCommand {
    fn run(&self, session: &mut ReplSession, argv: &[String], command_text: &str) -> CommandResult {
        let verbose = session.is_verbose();
        if let Err(err) = expect_args(VIEW, argv, 0) {
            return CommandResult::text(command_text, err.to_string(), verbose);
        }

        match session.loaded_table() {
            Some(table) => CommandResult::table(command_text, table.clone(), verbose),
            None => CommandResult::text(command_text, NO_FILE_LOADED, verbose),
        }
    }
}

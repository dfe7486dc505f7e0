use std::rc::Rc;

use repl_contract::CommandResult;
use repl_host::DatasetSource;

use crate::{registry::Command, session::ReplSession};

use super::{expect_args, NO_FILE_LOADED, SEARCH};

/// Status text when a search has no matching rows.
pub const NO_SEARCH_RESULTS: &str = "No search results found.";

/// Looks up `(column, term)` in the precomputed index of the loaded dataset.
#[derive(Clone)]
pub struct SearchCommand {
    source: Rc<dyn DatasetSource>,
}

impl SearchCommand {
    /// Creates the command over `source`.
    pub fn new(source: Rc<dyn DatasetSource>) -> Self {
        Self { source }
    }
}

impl Command for SearchCommand {
    fn run(&self, session: &mut ReplSession, argv: &[String], command_text: &str) -> CommandResult {
        let verbose = session.is_verbose();
        if let Err(err) = expect_args(SEARCH, argv, 2) {
            return CommandResult::text(command_text, err.to_string(), verbose);
        }

        let Some(loaded) = session.loaded() else {
            return CommandResult::text(command_text, NO_FILE_LOADED, verbose);
        };

        match self.source.lookup_search(&loaded.name, &argv[1], &argv[2]) {
            Some(rows) if !rows.is_empty() => CommandResult::table(command_text, rows, verbose),
            _ => CommandResult::text(command_text, NO_SEARCH_RESULTS, verbose),
        }
    }
}

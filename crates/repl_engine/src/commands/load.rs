use std::rc::Rc;

use repl_contract::CommandResult;
use repl_host::DatasetSource;

use crate::{registry::Command, session::ReplSession};

use super::{expect_args, LOAD_FILE};

/// Replaces the session dataset with a named table from the dataset source.
#[derive(Clone)]
pub struct LoadFileCommand {
    source: Rc<dyn DatasetSource>,
}

impl LoadFileCommand {
    /// Creates the command over `source`.
    pub fn new(source: Rc<dyn DatasetSource>) -> Self {
        Self { source }
    }
}

impl Command for LoadFileCommand {
    fn run(&self, session: &mut ReplSession, argv: &[String], command_text: &str) -> CommandResult {
        let verbose = session.is_verbose();
        if let Err(err) = expect_args(LOAD_FILE, argv, 1) {
            return CommandResult::text(command_text, err.to_string(), verbose);
        }

        let name = &argv[1];
        let text = match self.source.lookup_file(name) {
            Some(table) => {
                session.set_loaded_table(name.as_str(), table);
                format!("Successfully loaded {name}.")
            }
            None => format!("Could not find {name}."),
        };
        CommandResult::text(command_text, text, verbose)
    }
}

#[cfg(test)]
mod tests {
    use repl_contract::{Row, Table};
    use repl_host::MemoryDatasetSource;

    use super::*;

    fn string_csv() -> Table {
        Table::new([
            Row::new(["tim", "nelson", "instructor"]),
            Row::new(["john", "doe", "student"]),
            Row::new(["jane", "doe", "student"]),
        ])
    }

    fn command() -> LoadFileCommand {
        LoadFileCommand::new(Rc::new(
            MemoryDatasetSource::default().with_file("stringCSV.csv", string_csv()),
        ))
    }

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn known_file_replaces_loaded_table() {
        let mut session = ReplSession::new();
        let result = command().run(&mut session, &argv(&["load", "stringCSV.csv"]), "load");
        assert_eq!(result.command, "load");
        assert_eq!(result.output.as_text(), Some("Successfully loaded stringCSV.csv."));
        assert_eq!(session.loaded_table(), Some(&string_csv()));
        assert_eq!(session.loaded().map(|loaded| loaded.name.as_str()), Some("stringCSV.csv"));
    }

    #[test]
    fn unknown_file_keeps_previous_table() {
        let mut session = ReplSession::new();
        command().run(&mut session, &argv(&["load_file", "stringCSV.csv"]), "load_file stringCSV.csv");

        let result = command().run(&mut session, &argv(&["load_file", "test.csv"]), "load_file test.csv");
        assert_eq!(result.output.as_text(), Some("Could not find test.csv."));
        assert_eq!(session.loaded_table(), Some(&string_csv()));
    }

    #[test]
    fn wrong_arity_reports_usage() {
        let mut session = ReplSession::new();
        let result = command().run(
            &mut session,
            &argv(&["load", "stringCSV.csv", "test"]),
            "load",
        );
        assert_eq!(
            result.output.as_text(),
            Some("Exception: load_file expected 1 argument but found 2.")
        );
        assert!(session.loaded_table().is_none());

        let result = command().run(&mut session, &argv(&["load_file"]), "load_file");
        assert_eq!(
            result.output.as_text(),
            Some("Exception: load_file expected 1 argument but found 0.")
        );
    }

    #[test]
    fn result_carries_current_verbosity() {
        let mut session = ReplSession::new();
        session.set_verbosity(true);
        let result = command().run(&mut session, &argv(&["load_file", "x.csv"]), "load_file x.csv");
        assert!(result.verbose);
    }
}

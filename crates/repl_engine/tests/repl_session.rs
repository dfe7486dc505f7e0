use std::rc::Rc;

use pretty_assertions::assert_eq;
use repl_contract::{CommandOutput, CommandResult, Row, Table};
use repl_engine::{CommandRegistry, Repl, ReplConfig, ReplSession};
use repl_host::mock_dataset_source;

const MOCK_COMMAND_TEXT: &str = "mock arg0 arg1 arg2";
const MOCK_COMMAND_OUTPUT: &str = "args passed into the mock command: mock, arg0, arg1, arg2";

fn mock_command(session: &mut ReplSession, argv: &[String], command_text: &str) -> CommandResult {
    CommandResult::text(
        command_text,
        format!("args passed into the mock command: {}", argv.join(", ")),
        session.is_verbose(),
    )
}

fn builtin_repl() -> Repl {
    let source = mock_dataset_source().expect("bundled fixture");
    Repl::new(&ReplConfig::default(), Rc::new(source))
}

fn mock_repl() -> Repl {
    Repl::with_registry(
        &ReplConfig::default(),
        CommandRegistry::new().with("mock", mock_command),
    )
}

fn last_output(repl: &Repl) -> &CommandOutput {
    &repl.history().last().expect("history entry").output
}

fn string_csv() -> Table {
    Table::new([
        Row::new(["tim", "nelson", "instructor"]),
        Row::new(["john", "doe", "student"]),
        Row::new(["jane", "doe", "student"]),
    ])
}

#[test]
fn load_then_view_shows_the_loaded_table() {
    let mut repl = builtin_repl();

    repl.submit("view");
    assert_eq!(last_output(&repl).as_text(), Some("No CSV file loaded."));

    repl.submit("load_file stringCSV.csv");
    assert_eq!(
        last_output(&repl).as_text(),
        Some("Successfully loaded stringCSV.csv.")
    );
    assert_eq!(repl.session().loaded_table(), Some(&string_csv()));

    repl.submit("view");
    assert_eq!(last_output(&repl).as_table(), repl.session().loaded_table());
}

#[test]
fn failed_load_keeps_previous_dataset() {
    let mut repl = builtin_repl();
    repl.submit("load_file stringCSV.csv");
    repl.submit("load_file test.csv");
    assert_eq!(last_output(&repl).as_text(), Some("Could not find test.csv."));
    assert_eq!(repl.session().loaded_table(), Some(&string_csv()));

    repl.submit("load_file stringCSV.csv test");
    assert_eq!(
        last_output(&repl).as_text(),
        Some("Exception: load_file expected 1 argument but found 2.")
    );
}

#[test]
fn search_scenarios_against_bundled_fixtures() {
    let mut repl = builtin_repl();

    repl.submit("search 1 tim");
    assert_eq!(last_output(&repl).as_text(), Some("No CSV file loaded."));

    repl.submit("search tim");
    assert_eq!(
        last_output(&repl).as_text(),
        Some("Exception: search expected 2 arguments but found 1.")
    );

    repl.submit("load_file stringCSV.csv");
    repl.submit("search 0 tim");
    assert_eq!(
        last_output(&repl).as_table(),
        Some(&Table::new([Row::new(["tim", "nelson", "instructor"])]))
    );

    repl.submit("search 1 tim");
    assert_eq!(last_output(&repl).as_text(), Some("No search results found."));

    repl.submit("load_file numberCSV.csv");
    repl.submit("search 2 4");
    assert_eq!(
        last_output(&repl).as_table(),
        Some(&Table::new([Row::new([2, 3, 4]), Row::new([5, 3, 4])]))
    );
}

#[test]
fn empty_dataset_views_as_empty_table() {
    let mut repl = builtin_repl();
    repl.submit("load_file emptyCSV.csv");
    let html = repl.submit("view");
    assert_eq!(last_output(&repl).as_table(), Some(&Table::default()));
    assert!(html.ends_with("<div class=\"command-output\"><table></table></div>"));
}

#[test]
fn mode_toggles_verbosity_through_dispatch() {
    let mut repl = builtin_repl();
    repl.submit("mode");
    assert!(repl.session().is_verbose());
    assert_eq!(last_output(&repl).as_text(), Some("mode changed to verbose"));

    repl.submit("mode");
    assert!(!repl.session().is_verbose());
    assert_eq!(last_output(&repl).as_text(), Some("mode changed to brief"));
}

#[test]
fn brief_history_has_no_labels() {
    let mut repl = mock_repl();
    repl.submit(MOCK_COMMAND_TEXT);
    let html = repl.submit(MOCK_COMMAND_TEXT);

    assert_eq!(html.matches(MOCK_COMMAND_OUTPUT).count(), 2);
    assert!(!html.contains("Command:"));
    assert!(!html.contains("Output:"));
}

#[test]
fn verbose_history_echoes_command_and_labels_output() {
    let mut repl = mock_repl();
    repl.session_mut().set_verbosity(true);
    repl.submit(MOCK_COMMAND_TEXT);
    let html = repl.submit(MOCK_COMMAND_TEXT);

    assert_eq!(html.matches(&format!("Command: {MOCK_COMMAND_TEXT}")).count(), 2);
    assert_eq!(html.matches("Output:").count(), 2);
    assert_eq!(html.matches(MOCK_COMMAND_OUTPUT).count(), 2);
}

#[test]
fn toggling_verbosity_does_not_restyle_earlier_entries() {
    let mut repl = mock_repl();
    repl.submit(MOCK_COMMAND_TEXT);
    repl.session_mut().set_verbosity(true);
    let html = repl.submit(MOCK_COMMAND_TEXT);

    assert_eq!(html.matches(MOCK_COMMAND_OUTPUT).count(), 2);
    assert_eq!(html.matches("Command:").count(), 1);
    assert_eq!(html.matches("Output:").count(), 1);

    repl.session_mut().set_verbosity(false);
    assert_eq!(repl.render(), html);
}

#[test]
fn quoted_arguments_reach_the_handler_unquoted() {
    let mut repl = mock_repl();
    repl.submit("\"mock\" \"arg0\" \"arg1\" \"arg2\"");
    assert_eq!(last_output(&repl).as_text(), Some(MOCK_COMMAND_OUTPUT));

    repl.submit("\"mock\" \"arg1 arg1\" \"arg2\"");
    assert_eq!(
        last_output(&repl).as_text(),
        Some("args passed into the mock command: mock, arg1 arg1, arg2")
    );
}

#[test]
fn explicit_resets_isolate_scenarios() {
    let mut repl = builtin_repl();
    repl.submit("mode");
    repl.submit("load_file stringCSV.csv");

    let session = repl.session_mut();
    session.clear_history();
    session.reset_mode();
    session.reset_loaded_table();

    assert!(repl.history().is_empty());
    assert!(!repl.session().is_verbose());
    assert!(repl.session().loaded_table().is_none());
    assert_eq!(repl.render(), "");
}

//! History dispatch and full-redraw rendering.

use leptos::logging;
use repl_contract::CommandResult;
use repl_tokenizer::ParsedLine;

use crate::{
    registry::CommandRegistry,
    render::{RenderStrategy, ResultRenderer},
    session::ReplSession,
};

/// Status text appended when a blank line is submitted.
pub const EMPTY_SUBMISSION: &str = "submitted empty string";

/// Status text appended when the first token names no registered command.
pub fn command_not_found(name: &str) -> String {
    format!("command {name} not found")
}

/// Tokenizes `line`, runs the matching handler, and appends the outcome to history.
///
/// Blank lines and unknown commands append a text entry instead. Those entries use the
/// session's current verbosity.
pub fn push_history_entry(registry: &CommandRegistry, session: &mut ReplSession, line: &str) {
    let parsed = ParsedLine::parse(line);
    let verbose = session.is_verbose();

    let result = match parsed.command() {
        None => CommandResult::text(line, EMPTY_SUBMISSION, verbose),
        Some(name) => match registry.get(name) {
            Some(handler) => handler.run(session, &parsed.argv, line),
            None => {
                logging::warn!("repl: unknown command `{name}`");
                CommandResult::text(line, command_not_found(name), verbose)
            }
        },
    };

    session.push_result(result);
    logging::log!(
        "repl: `{}` -> {} history entries",
        parsed.command().unwrap_or_default(),
        session.history().len()
    );
}

/// Renders every history entry, oldest first, as one HTML fragment.
///
/// The output replaces the whole history pane, so entries are never duplicated across
/// renders.
pub fn render_history<R>(session: &ReplSession, renderer: &ResultRenderer<R>) -> String
where
    ResultRenderer<R>: RenderStrategy<CommandResult>,
{
    session
        .history()
        .iter()
        .map(|entry| renderer.render(entry))
        .collect()
}

/// Dispatches `line` and returns the re-rendered history.
pub fn update_history_and_render<R>(
    registry: &CommandRegistry,
    session: &mut ReplSession,
    renderer: &ResultRenderer<R>,
    line: &str,
) -> String
where
    ResultRenderer<R>: RenderStrategy<CommandResult>,
{
    push_history_entry(registry, session, line);
    render_history(session, renderer)
}

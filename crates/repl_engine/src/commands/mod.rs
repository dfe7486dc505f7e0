//! Built-in REPL commands.

use std::rc::Rc;

use repl_host::DatasetSource;

use crate::{error::CommandUsageError, registry::CommandRegistry};

mod load;
mod mode;
mod search;
mod view;

pub use load::LoadFileCommand;
pub use mode::ModeCommand;
pub use search::{SearchCommand, NO_SEARCH_RESULTS};
pub use view::ViewCommand;

/// `mode` command name.
pub const MODE: &str = "mode";
/// `load_file` command name.
pub const LOAD_FILE: &str = "load_file";
/// `view` command name.
pub const VIEW: &str = "view";
/// `search` command name.
pub const SEARCH: &str = "search";

/// Status text when `view` or `search` runs before any dataset is loaded.
pub const NO_FILE_LOADED: &str = "No CSV file loaded.";

/// Registry holding `mode`, `load_file`, `view`, and `search` backed by `source`.
pub fn builtin_registry(source: Rc<dyn DatasetSource>) -> CommandRegistry {
    CommandRegistry::new()
        .with(MODE, ModeCommand)
        .with(LOAD_FILE, LoadFileCommand::new(source.clone()))
        .with(VIEW, ViewCommand)
        .with(SEARCH, SearchCommand::new(source))
}

/// Checks that `argv` holds `expected` arguments after the command name.
fn expect_args(
    command: &'static str,
    argv: &[String],
    expected: usize,
) -> Result<(), CommandUsageError> {
    let found = argv.len().saturating_sub(1);
    if found == expected {
        Ok(())
    } else {
        leptos::logging::warn!("{command}: expected {expected} argument(s), found {found}");
        Err(CommandUsageError::ArgumentCount {
            command,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use repl_host::NoopDatasetSource;

    use super::*;

    #[test]
    fn builtin_registry_lists_all_commands() {
        let registry = builtin_registry(Rc::new(NoopDatasetSource));
        assert_eq!(registry.names(), vec![LOAD_FILE, MODE, SEARCH, VIEW]);
    }

    #[test]
    fn arity_counts_tokens_after_the_name() {
        let argv = ["search".to_string(), "tim".to_string()];
        assert_eq!(
            expect_args(SEARCH, &argv, 2),
            Err(CommandUsageError::ArgumentCount {
                command: SEARCH,
                expected: 2,
                found: 1,
            })
        );
        assert_eq!(expect_args(VIEW, &argv[..1], 0), Ok(()));
    }
}

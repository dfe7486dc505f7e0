//! Engine error types.
//!
//! None of these escape a command handler. Usage errors are turned into history text.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Invalid command usage reported back to the user as result text.
pub enum CommandUsageError {
    /// The command received the wrong number of arguments.
    #[error(
        "Exception: {command} expected {expected} {noun} but found {found}.",
        noun = argument_noun(.expected)
    )]
    ArgumentCount {
        /// Canonical command name.
        command: &'static str,
        /// Required argument count.
        expected: usize,
        /// Supplied argument count.
        found: usize,
    },
}

fn argument_noun(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

/// Launch configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `repl` launch object could not be decoded.
    #[error("invalid repl config: {0}")]
    Invalid(#[source] serde_json::Error),
}

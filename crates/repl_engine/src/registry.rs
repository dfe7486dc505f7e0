//! Command handler contract and name-keyed registry.

use std::{collections::BTreeMap, fmt, rc::Rc};

use repl_contract::CommandResult;

use crate::session::ReplSession;

/// A command handler.
///
/// `argv` holds every token of the line, command name first. `command_text` is the raw line
/// and is echoed back in verbose history entries. Handlers are total: usage problems are
/// reported in the returned result.
pub trait Command {
    /// Runs the command against `session`.
    fn run(&self, session: &mut ReplSession, argv: &[String], command_text: &str) -> CommandResult;
}

impl<F> Command for F
where
    F: Fn(&mut ReplSession, &[String], &str) -> CommandResult,
{
    fn run(&self, session: &mut ReplSession, argv: &[String], command_text: &str) -> CommandResult {
        self(session, argv, command_text)
    }
}

/// Mapping from command name to handler.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Rc<dyn Command>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name` and returns any handler it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl Command + 'static,
    ) -> Option<Rc<dyn Command>> {
        self.commands.insert(name.into(), Rc::new(handler))
    }

    /// Builder form of [`CommandRegistry::register`].
    pub fn with(mut self, name: impl Into<String>, handler: impl Command + 'static) -> Self {
        self.register(name, handler);
        self
    }

    /// Removes the handler registered under `name`.
    pub fn unregister(&mut self, name: &str) -> Option<Rc<dyn Command>> {
        self.commands.remove(name)
    }

    /// Looks up a handler by name.
    pub fn get(&self, name: &str) -> Option<Rc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

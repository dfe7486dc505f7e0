//! Headless REPL engine: command registry, session state, and history rendering.
//!
//! A submitted line is tokenized and dispatched to a registered [`Command`]. The handler's
//! [`CommandResult`] is appended to the [`ReplSession`] history, and the whole history is then
//! re-rendered to HTML through a [`ResultRenderer`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use repl_contract::CommandResult;
use repl_host::DatasetSource;

pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod registry;
pub mod render;
pub mod session;

pub use commands::builtin_registry;
pub use config::{HistoryClassNames, MarkupPolicy, ReplConfig};
pub use error::{CommandUsageError, ConfigError};
pub use history::{push_history_entry, render_history, update_history_and_render};
pub use registry::{Command, CommandRegistry};
pub use render::{OutputRenderer, ParagraphRenderer, RenderStrategy, ResultRenderer, TableRenderer};
pub use session::{LoadedTable, ReplSession};

/// A registry, a session, and the history renderer, wired together for a UI shell.
#[derive(Debug, Clone)]
pub struct Repl {
    registry: CommandRegistry,
    session: ReplSession,
    renderer: ResultRenderer<OutputRenderer>,
}

impl Repl {
    /// Creates a REPL with the built-in commands over `source`.
    pub fn new(config: &ReplConfig, source: Rc<dyn DatasetSource>) -> Self {
        Self::with_registry(config, builtin_registry(source))
    }

    /// Creates a REPL over a caller-supplied registry.
    pub fn with_registry(config: &ReplConfig, registry: CommandRegistry) -> Self {
        Self {
            registry,
            session: ReplSession::with_config(config),
            renderer: ResultRenderer::from_config(config),
        }
    }

    /// Dispatches `line` and returns the full history markup.
    pub fn submit(&mut self, line: &str) -> String {
        update_history_and_render(&self.registry, &mut self.session, &self.renderer, line)
    }

    /// Full history markup without dispatching anything.
    pub fn render(&self) -> String {
        render_history(&self.session, &self.renderer)
    }

    /// Registered commands.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Mutable access to the registered commands.
    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// Session state.
    pub fn session(&self) -> &ReplSession {
        &self.session
    }

    /// Mutable session state, for counters and explicit resets.
    pub fn session_mut(&mut self) -> &mut ReplSession {
        &mut self.session
    }

    /// History entries, oldest first.
    pub fn history(&self) -> &[CommandResult] {
        self.session.history()
    }
}

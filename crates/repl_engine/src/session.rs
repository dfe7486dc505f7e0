//! Mutable REPL session state.

use repl_contract::{CommandResult, Table};

use crate::config::ReplConfig;

/// Dataset currently loaded into the session.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    /// Name the dataset was loaded under.
    pub name: String,
    /// Loaded rows.
    pub table: Table,
}

/// Verbosity flag, loaded dataset, result history, and diagnostic counters.
///
/// Only command handlers and the explicit reset operations mutate a session.
#[derive(Debug, Clone, Default)]
pub struct ReplSession {
    verbose: bool,
    start_verbose: bool,
    loaded: Option<LoadedTable>,
    history: Vec<CommandResult>,
    max_history: Option<usize>,
    press_count: u64,
    click_count: u64,
}

impl ReplSession {
    /// Creates a brief-mode session with no dataset and empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from `config`.
    pub fn with_config(config: &ReplConfig) -> Self {
        Self {
            verbose: config.start_verbose,
            start_verbose: config.start_verbose,
            max_history: config.max_history,
            ..Self::default()
        }
    }

    /// Current verbosity.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Sets verbosity. Entries already in history keep their own flag.
    pub fn set_verbosity(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Flips verbosity and returns the new value.
    pub fn toggle_verbosity(&mut self) -> bool {
        self.verbose = !self.verbose;
        self.verbose
    }

    /// Restores the starting verbosity.
    pub fn reset_mode(&mut self) {
        self.verbose = self.start_verbose;
    }

    /// Loaded dataset, if any.
    pub fn loaded(&self) -> Option<&LoadedTable> {
        self.loaded.as_ref()
    }

    /// Loaded rows, if any.
    pub fn loaded_table(&self) -> Option<&Table> {
        self.loaded.as_ref().map(|loaded| &loaded.table)
    }

    /// Replaces the loaded dataset.
    pub fn set_loaded_table(&mut self, name: impl Into<String>, table: Table) {
        self.loaded = Some(LoadedTable {
            name: name.into(),
            table,
        });
    }

    /// Forgets the loaded dataset.
    pub fn reset_loaded_table(&mut self) {
        self.loaded = None;
    }

    /// History entries, oldest first.
    pub fn history(&self) -> &[CommandResult] {
        &self.history
    }

    /// Appends an entry, dropping the oldest entries past the configured bound.
    pub fn push_result(&mut self, result: CommandResult) {
        self.history.push(result);
        if let Some(max) = self.max_history {
            if self.history.len() > max {
                let overflow = self.history.len() - max;
                self.history.drain(0..overflow);
            }
        }
    }

    /// Empties the history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Counts one keypress in the command box and returns the running total.
    pub fn record_keypress(&mut self) -> u64 {
        self.press_count = self.press_count.saturating_add(1);
        self.press_count
    }

    /// Counts one submit click and returns the running total.
    pub fn record_click(&mut self) -> u64 {
        self.click_count = self.click_count.saturating_add(1);
        self.click_count
    }

    /// Keypresses seen so far.
    pub fn press_count(&self) -> u64 {
        self.press_count
    }

    /// Submit clicks seen so far.
    pub fn click_count(&self) -> u64 {
        self.click_count
    }

    /// Clears history, mode, and loaded dataset.
    pub fn reset(&mut self) {
        self.clear_history();
        self.reset_mode();
        self.reset_loaded_table();
    }
}

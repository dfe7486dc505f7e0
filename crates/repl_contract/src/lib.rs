//! Shared REPL data contracts used by the headless engine, dataset hosts, and console UI.
//!
//! This crate is intentionally runtime-agnostic. It defines the tabular data model and the
//! command result envelope without depending on Leptos, browser APIs, or rendering code.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// One table cell: either text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Free-form text cell.
    Text(String),
    /// Numeric cell.
    Number(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Ordered sequence of cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    /// Row cells in column order.
    pub cells: Vec<Cell>,
}

impl Row {
    /// Builds a row from anything convertible into cells.
    pub fn new<C: Into<Cell>>(cells: impl IntoIterator<Item = C>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered sequence of rows.
///
/// A table with zero rows is a loaded-but-empty dataset and is distinct from "no table".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    /// Table rows in order.
    pub rows: Vec<Row>,
}

impl Table {
    /// Builds a table from rows.
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has zero rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Payload produced by a command, tagged by shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum CommandOutput {
    /// Status or error text, rendered as a paragraph.
    Text(String),
    /// Tabular data, rendered as a table.
    Table(Table),
}

impl CommandOutput {
    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Table(_) => None,
        }
    }

    /// Returns the table payload, if any.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            Self::Text(_) => None,
        }
    }
}

/// Uniform envelope produced for every history entry.
///
/// `verbose` records the session verbosity at emission time and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult<T = CommandOutput> {
    /// Raw command line or canonical command name.
    pub command: String,
    /// Command payload.
    pub output: T,
    /// Verbosity captured when the result was created.
    pub verbose: bool,
}

impl<T> CommandResult<T> {
    /// Creates a result envelope.
    pub fn new(command: impl Into<String>, output: T, verbose: bool) -> Self {
        Self {
            command: command.into(),
            output,
            verbose,
        }
    }
}

impl CommandResult {
    /// Text result rendered as a paragraph.
    pub fn text(command: impl Into<String>, text: impl Into<String>, verbose: bool) -> Self {
        Self::new(command, CommandOutput::Text(text.into()), verbose)
    }

    /// Table result rendered as a table.
    pub fn table(command: impl Into<String>, table: Table, verbose: bool) -> Self {
        Self::new(command, CommandOutput::Table(table), verbose)
    }
}

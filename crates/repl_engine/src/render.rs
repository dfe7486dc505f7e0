//! Value-to-HTML render strategies.
//!
//! Every strategy turns a borrowed value into an HTML fragment string. [`ResultRenderer`]
//! wraps any inner strategy, so the history wrapper never needs to know the payload type.

use std::borrow::Cow;

use repl_contract::{Cell, CommandOutput, CommandResult, Row, Table};

use crate::config::{HistoryClassNames, MarkupPolicy, ReplConfig};

/// Converts a value of type `T` into an HTML fragment.
pub trait RenderStrategy<T: ?Sized> {
    /// Renders `value` as an HTML fragment (not a full document).
    fn render(&self, value: &T) -> String;
}

impl MarkupPolicy {
    /// Applies the policy to user-provided text.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Verbatim => Cow::Borrowed(text),
            Self::Escaped if !text.contains(['&', '<', '>']) => Cow::Borrowed(text),
            Self::Escaped => Cow::Owned(
                text.replace('&', "&amp;")
                    .replace('<', "&lt;")
                    .replace('>', "&gt;"),
            ),
        }
    }
}

/// Wraps text in a paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphRenderer {
    markup: MarkupPolicy,
}

impl ParagraphRenderer {
    /// Creates a paragraph renderer with the given markup policy.
    pub fn new(markup: MarkupPolicy) -> Self {
        Self { markup }
    }
}

impl RenderStrategy<str> for ParagraphRenderer {
    fn render(&self, value: &str) -> String {
        format!("<p>{}</p>", self.markup.apply(value))
    }
}

impl RenderStrategy<String> for ParagraphRenderer {
    fn render(&self, value: &String) -> String {
        RenderStrategy::<str>::render(self, value)
    }
}

/// Renders rows of cells as an HTML table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer {
    markup: MarkupPolicy,
}

impl TableRenderer {
    /// Creates a table renderer with the given markup policy.
    pub fn new(markup: MarkupPolicy) -> Self {
        Self { markup }
    }

    fn render_cell(&self, cell: &Cell) -> String {
        match cell {
            Cell::Text(text) => format!("<td>{}</td>", self.markup.apply(text)),
            Cell::Number(_) => format!("<td>{cell}</td>"),
        }
    }
}

impl RenderStrategy<Row> for TableRenderer {
    fn render(&self, value: &Row) -> String {
        let cells = value
            .cells
            .iter()
            .map(|cell| self.render_cell(cell))
            .collect::<Vec<_>>();
        format!("<tr>{}</tr>", cells.join("\n"))
    }
}

impl RenderStrategy<Table> for TableRenderer {
    fn render(&self, value: &Table) -> String {
        let rows = value
            .rows
            .iter()
            .map(|row| RenderStrategy::<Row>::render(self, row))
            .collect::<Vec<_>>();
        format!("<table>{}</table>", rows.join("\n"))
    }
}

/// Picks the paragraph or table strategy from the payload tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputRenderer {
    paragraph: ParagraphRenderer,
    table: TableRenderer,
}

impl OutputRenderer {
    /// Creates an output renderer whose strategies share one markup policy.
    pub fn new(markup: MarkupPolicy) -> Self {
        Self {
            paragraph: ParagraphRenderer::new(markup),
            table: TableRenderer::new(markup),
        }
    }
}

impl RenderStrategy<CommandOutput> for OutputRenderer {
    fn render(&self, value: &CommandOutput) -> String {
        match value {
            CommandOutput::Text(text) => self.paragraph.render(text.as_str()),
            CommandOutput::Table(table) => self.table.render(table),
        }
    }
}

/// Wraps a rendered payload according to the verbosity frozen on its [`CommandResult`].
#[derive(Debug, Clone, Default)]
pub struct ResultRenderer<R> {
    inner: R,
    classes: HistoryClassNames,
    markup: MarkupPolicy,
}

impl<R> ResultRenderer<R> {
    /// Wraps `inner` with the given class names and markup policy.
    pub fn new(inner: R, classes: HistoryClassNames, markup: MarkupPolicy) -> Self {
        Self {
            inner,
            classes,
            markup,
        }
    }

    /// Inner payload strategy.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl ResultRenderer<OutputRenderer> {
    /// History renderer for [`CommandOutput`] payloads built from `config`.
    pub fn from_config(config: &ReplConfig) -> Self {
        Self::new(
            OutputRenderer::new(config.markup),
            config.classes.clone(),
            config.markup,
        )
    }
}

impl<T, R> RenderStrategy<CommandResult<T>> for ResultRenderer<R>
where
    R: RenderStrategy<T>,
{
    fn render(&self, value: &CommandResult<T>) -> String {
        let output = self.inner.render(&value.output);
        let classes = &self.classes;
        if value.verbose {
            format!(
                "<div><p class=\"{}\">Command: {}</p><div class=\"{}\"><span class=\"{}\">Output:</span>{output}</div></div>",
                classes.command_text,
                self.markup.apply(&value.command),
                classes.command_output,
                classes.command_output_label,
            )
        } else {
            format!("<div class=\"{}\">{output}</div>", classes.command_output)
        }
    }
}

//! Headless command-line tokenizer for the browser-hosted REPL.
//!
//! Only the small subset the REPL needs is supported: whitespace-delimited words and
//! double-quoted spans. There is no escaping, and tokenizing never fails.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};

const QUOTE: char = '"';

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParsedLine {
    /// All tokens, command name first.
    pub argv: Vec<String>,
}

impl ParsedLine {
    /// Tokenizes `line`.
    pub fn parse(line: &str) -> Self {
        Self {
            argv: parse_args(line),
        }
    }

    /// Whether the line held no tokens.
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// Command name token.
    pub fn command(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Tokens after the command name.
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }
}

/// Splits a raw command line into argument tokens.
///
/// A `"..."` span that has a closing quote is one token with the enclosing quotes removed.
/// Any other run of non-whitespace is taken as-is, including stray quote characters.
pub fn parse_args(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = line;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        let end = quoted_span_end(rest).unwrap_or_else(|| word_end(rest));
        let (raw, tail) = rest.split_at(end);
        tokens.push(strip_quotes(raw).to_string());
        rest = tail;
    }

    tokens
}

/// Byte length of a closed quoted span at the start of `input`.
fn quoted_span_end(input: &str) -> Option<usize> {
    let body = input.strip_prefix(QUOTE)?;
    body.find(QUOTE).map(|close| close + 2 * QUOTE.len_utf8())
}

fn word_end(input: &str) -> usize {
    input.find(char::is_whitespace).unwrap_or(input.len())
}

fn strip_quotes(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with(QUOTE) && token.ends_with(QUOTE) {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

//! REPL configuration read from app launch parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// Launch-parameter key holding the REPL configuration object.
pub const LAUNCH_PARAMS_KEY: &str = "repl";

/// How user-provided text is inserted into rendered markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkupPolicy {
    /// Text is inserted as-is, so markup inside arguments is interpreted by the browser.
    #[default]
    Verbatim,
    /// `&`, `<` and `>` are replaced with entities.
    Escaped,
}

/// CSS class names applied to history entry markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryClassNames {
    /// Class of the echoed `Command:` line in verbose entries.
    pub command_text: String,
    /// Class of the output block.
    pub command_output: String,
    /// Class of the `Output:` label in verbose entries.
    pub command_output_label: String,
}

impl Default for HistoryClassNames {
    fn default() -> Self {
        Self {
            command_text: "command-text".to_string(),
            command_output: "command-output".to_string(),
            command_output_label: "command-output-label".to_string(),
        }
    }
}

/// Session and rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Verbosity the session starts in and returns to on reset.
    pub start_verbose: bool,
    /// Markup insertion policy for rendered text.
    pub markup: MarkupPolicy,
    /// Class names for history markup.
    pub classes: HistoryClassNames,
    /// Optional bound on retained history entries; oldest entries are dropped first.
    pub max_history: Option<usize>,
}

impl ReplConfig {
    /// Reads the optional `repl` object from app launch parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the object does not match [`ReplConfig`].
    pub fn from_launch_params(params: &Value) -> Result<Self, ConfigError> {
        match params.get(LAUNCH_PARAMS_KEY) {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(raw) => serde_json::from_value(raw.clone()).map_err(ConfigError::Invalid),
        }
    }
}

/// Per-binding configuration for the confirmation guard
use serde::Deserialize;
use std::fmt;

/// Prompt text used when a binding is created without a message
pub const DEFAULT_MESSAGE: &str = "Are you sure?";

/// The prompt text of a single binding, resolved once at bind time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmMessage(String);

impl ConfirmMessage {
    /// Resolve an optional caller message. An explicit message is kept
    /// verbatim, even when empty.
    pub fn resolve(message: Option<String>) -> ConfirmMessage {
        ConfirmMessage(message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_MESSAGE
    }
}

impl Default for ConfirmMessage {
    fn default() -> Self {
        ConfirmMessage::resolve(None)
    }
}

impl fmt::Display for ConfirmMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bind options as passed from JavaScript, e.g. `{ message: "Delete?" }`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardOptions {
    pub message: Option<String>,
}

impl GuardOptions {
    pub fn with_message(message: impl Into<String>) -> GuardOptions {
        GuardOptions {
            message: Some(message.into()),
        }
    }

    pub fn resolve(self) -> ConfirmMessage {
        ConfirmMessage::resolve(self.message)
    }
}

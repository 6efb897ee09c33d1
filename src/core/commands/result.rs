//! Command execution result type.

use crate::models::OutputLine;

/// A side effect requested by a command, applied in order by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Print a line of output.
    Line(OutputLine),
    /// Clear the terminal viewport.
    Clear,
    /// Open a URL in a new browsing context.
    Open(String),
    /// Fetch an image and render it inline.
    Image(String),
}

/// Result of executing a command.
///
/// Commands never touch the terminal themselves; they describe what should
/// happen and the dispatcher carries it out, awaiting asynchronous effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub effects: Vec<Effect>,
}

impl CommandResult {
    /// Create a result that only prints lines.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            effects: lines.into_iter().map(Effect::Line).collect(),
        }
    }

    /// Create a result with a single effect.
    pub fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
        }
    }
}

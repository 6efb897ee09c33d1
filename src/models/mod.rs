//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`OutputLine`], [`Mark`] - Styled terminal output
//! - [`TerminalEvent`], [`KeyEvent`], [`Key`] - Input delivered by the terminal widget

mod terminal;

pub use terminal::{Key, KeyEvent, Mark, OutputLine, TerminalEvent};

//! UI components built with Leptos.
//!
//! - [`TerminalView`] - xterm.js terminal driving the command session

pub mod terminal;

pub use terminal::TerminalView;

//! Core logic of the terminal, independent of the browser.
//!
//! This module provides:
//! - [`registry`] name/alias resolution and grouped help
//! - [`history`] de-duplicated command history with a recall cursor
//! - [`editor`] pending-input buffer and echo rules
//! - [`Session`] turning input events into command runs
//!
//! The terminal widget and browser effects are reached only through the
//! [`Terminal`] and [`Platform`] traits.

pub mod commands;
mod dispatch;
pub mod editor;
pub mod error;
pub mod history;
pub mod host;
pub mod output;
pub mod registry;
mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use host::{FetchedImage, Platform, Terminal};
pub use session::Session;

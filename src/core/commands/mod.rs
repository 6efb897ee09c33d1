//! Built-in commands.
//!
//! This module provides:
//! - `CommandResult` and `Effect` describing what a command wants done
//! - `register_builtins` populating a registry with the fixed command set
//!
//! # Architecture
//!
//! Commands are plain functions registered by name. They read the registry
//! and history through a `CommandContext` and return effects; the dispatcher
//! applies those effects to the terminal and platform.

mod execute;
mod result;

pub use result::{CommandResult, Effect};

use execute::{
    execute_clear, execute_help, execute_history, execute_image, execute_source, execute_to,
};

use super::error::RegistryError;
use super::registry::CommandRegistry;

/// Register the fixed command set. Aliases name their canonical command.
pub fn register_builtins(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
    registry
        .register("help", execute_help, "print this command list")?
        .register("h", execute_help, "help")?
        .register("source", execute_source, "print the source repository")?
        .register("to", execute_to, "open <url> in a new tab")?
        .register("cls", execute_clear, "clear the terminal")?
        .register("clear", execute_clear, "cls")?
        .register("c", execute_clear, "cls")?
        .register("history", execute_history, "list executed commands")?
        .register("image", execute_image, "preview the image at <url>")?
        .register("img", execute_image, "image")?
        .register("pic", execute_image, "image")?;
    Ok(())
}

/// Registry holding only the built-in commands.
pub fn builtin_registry() -> Result<CommandRegistry, RegistryError> {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry)?;
    Ok(registry)
}

// =============================================================================
// Tests
// =============================================================================

//! Command registry with alias-aware help rendering.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::config::HELP_NAME_WIDTH;

use super::commands::CommandResult;
use super::error::RegistryError;
use super::history::HistoryRing;

/// Read-only view handed to a running command.
pub struct CommandContext<'a> {
    pub registry: &'a CommandRegistry,
    pub history: &'a HistoryRing,
}

/// A command body. Receives the optional single positional argument.
pub type Handler = Rc<dyn Fn(&CommandContext<'_>, Option<&str>) -> CommandResult>;

/// How an entry's help description is stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Description {
    /// The entry owns its description text.
    Canonical(String),
    /// The entry shares the description of the named canonical command.
    Alias(String),
}

/// A registered command.
#[derive(Clone)]
pub struct CommandEntry {
    pub name: String,
    pub description: Description,
    handler: Handler,
}

impl CommandEntry {
    pub fn invoke(&self, ctx: &CommandContext<'_>, arg: Option<&str>) -> CommandResult {
        (self.handler)(ctx, arg)
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Mapping from command name to handler and description.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous entry.
    ///
    /// If `description` is the name of a registered command, the new entry
    /// becomes an alias of that command's canonical entry.
    pub fn register<F>(
        &mut self,
        name: &str,
        handler: F,
        description: &str,
    ) -> Result<&mut Self, RegistryError>
    where
        F: Fn(&CommandContext<'_>, Option<&str>) -> CommandResult + 'static,
    {
        if name.is_empty()
            || name.chars().any(char::is_whitespace)
            || name.to_lowercase() != name
        {
            return Err(RegistryError::InvalidName(name.to_string()));
        }

        let description = match self.canonical_name(description) {
            Some(target) if target == name => self
                .description_of(target)
                .map(|text| Description::Canonical(text.to_string()))
                .unwrap_or_else(|| Description::Canonical(description.to_string())),
            Some(target) => Description::Alias(target.to_string()),
            None => Description::Canonical(description.to_string()),
        };

        self.commands.insert(
            name.to_string(),
            CommandEntry {
                name: name.to_string(),
                description,
                handler: Rc::new(handler),
            },
        );
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    /// Name of the canonical entry `name` resolves to.
    ///
    /// Alias chains are followed; a chain that loops or dangles yields `None`.
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        let mut current = name;
        for _ in 0..=self.commands.len() {
            match &self.commands.get(current)?.description {
                Description::Canonical(_) => return Some(current),
                Description::Alias(target) => current = target.as_str(),
            }
        }
        None
    }

    /// Resolved description text for `name`.
    pub fn description_of(&self, name: &str) -> Option<&str> {
        let canonical = self.canonical_name(name)?;
        match &self.commands.get(canonical)?.description {
            Description::Canonical(text) => Some(text.as_str()),
            Description::Alias(_) => None,
        }
    }

    /// Registered names in lexical order, recomputed on every call.
    pub fn list(&self) -> std::vec::IntoIter<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names.into_iter()
    }

    /// Render the grouped command listing.
    ///
    /// Sorted names sharing a canonical command are joined as `a/b/c` on one
    /// line; a group closes when the next name resolves elsewhere.
    pub fn help_lines(&self) -> Vec<String> {
        let mut lines = vec!["docs:".to_string()];
        let mut group: Vec<&str> = Vec::new();
        let mut group_key: Option<&str> = None;

        let flush = |lines: &mut Vec<String>, group: &mut Vec<&str>, key: Option<&str>| {
            if let Some(key) = key
                && !group.is_empty()
            {
                let description = self.description_of(key).unwrap_or_default();
                lines.push(format!(
                    "   {:<width$} {}",
                    group.join("/"),
                    description,
                    width = HELP_NAME_WIDTH
                ));
            }
            group.clear();
        };

        for name in self.list() {
            let key = self.canonical_name(name).unwrap_or(name);
            if group_key != Some(key) {
                flush(&mut lines, &mut group, group_key);
                group_key = Some(key);
            }
            group.push(name);
        }
        flush(&mut lines, &mut group, group_key);

        lines
    }
}

#[cfg(test)]
impl CommandRegistry {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

//! Built-in command bodies.
//!
//! Each function matches the registry's handler signature and returns the
//! effects the dispatcher should apply.

use crate::config::SOURCE_URL;
use crate::core::registry::CommandContext;
use crate::models::OutputLine;
use crate::utils::{is_image_url, normalize_link};

use super::{CommandResult, Effect};

/// Execute `help`: grouped command listing.
pub fn execute_help(ctx: &CommandContext<'_>, _arg: Option<&str>) -> CommandResult {
    CommandResult::output(
        ctx.registry
            .help_lines()
            .into_iter()
            .map(OutputLine::text)
            .collect(),
    )
}

/// Execute `source`: print the repository URL.
pub fn execute_source(_ctx: &CommandContext<'_>, _arg: Option<&str>) -> CommandResult {
    CommandResult::output(vec![OutputLine::text(SOURCE_URL)])
}

/// Execute `to`: open a link in a new tab.
pub fn execute_to(_ctx: &CommandContext<'_>, arg: Option<&str>) -> CommandResult {
    let Some(target) = arg else {
        return CommandResult::output(vec![OutputLine::text("tips: to <url>")]);
    };

    match normalize_link(target) {
        Ok(url) => CommandResult::effect(Effect::Open(url)),
        Err(e) => CommandResult::output(vec![
            OutputLine::warn(format!("to: {}", e)),
            OutputLine::text("tips: to <url>"),
        ]),
    }
}

/// Execute `cls`: clear the viewport.
pub fn execute_clear(_ctx: &CommandContext<'_>, _arg: Option<&str>) -> CommandResult {
    CommandResult::effect(Effect::Clear)
}

/// Execute `history`: list dispatched command names, oldest first.
pub fn execute_history(ctx: &CommandContext<'_>, _arg: Option<&str>) -> CommandResult {
    CommandResult::output(ctx.history.names().map(OutputLine::text).collect())
}

/// Execute `image`: preview an image inline.
pub fn execute_image(_ctx: &CommandContext<'_>, arg: Option<&str>) -> CommandResult {
    match arg {
        None => CommandResult::output(vec![OutputLine::text("tips: image <url>")]),
        Some(url) if is_image_url(url) => CommandResult::effect(Effect::Image(url.to_string())),
        Some(_) => CommandResult::output(vec![OutputLine::warn("Invalid Image Link.")]),
    }
}

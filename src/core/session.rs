//! One terminal session: owned state plus the event loop that drives it.

use futures::{Stream, StreamExt};

use super::commands::builtin_registry;
use super::dispatch::{DispatchOutcome, Dispatcher};
use super::editor::{Feed, LineEditor};
use super::error::RegistryError;
use super::history::{Direction, HistoryRing};
use super::host::{Platform, Terminal};
use super::output;
use super::registry::CommandRegistry;
use crate::models::{Key, KeyEvent, TerminalEvent};

/// Registry, history and pending input for a single terminal.
///
/// Events are handled strictly one after another: a command that awaits a
/// fetch holds the loop until it finishes, so dispatches never overlap.
pub struct Session<T: Terminal, P: Platform> {
    terminal: T,
    platform: P,
    registry: CommandRegistry,
    history: HistoryRing,
    editor: LineEditor,
}

impl<T: Terminal, P: Platform> Session<T, P> {
    pub fn new(terminal: T, platform: P, registry: CommandRegistry) -> Self {
        Self {
            terminal,
            platform,
            registry,
            history: HistoryRing::new(),
            editor: LineEditor::new(),
        }
    }

    /// Session with the built-in command set.
    pub fn with_builtins(terminal: T, platform: P) -> Result<Self, RegistryError> {
        Ok(Self::new(terminal, platform, builtin_registry()?))
    }

    /// Print the banner and the first prompt.
    pub fn start(&self) {
        self.terminal.write(&output::banner());
        output::prompt(&self.terminal);
    }

    /// Print the banner, then handle events until the stream ends.
    pub async fn run(&mut self, events: impl Stream<Item = TerminalEvent>) {
        self.start();
        let mut events = std::pin::pin!(events);
        while let Some(event) = events.next().await {
            self.handle(event).await;
        }
        log::debug!("terminal event stream closed");
    }

    /// Handle a single event to completion.
    pub async fn handle(&mut self, event: TerminalEvent) {
        match event {
            TerminalEvent::Data(chunk) => self.on_data(&chunk).await,
            TerminalEvent::Key(key) => self.on_key(key).await,
            TerminalEvent::Resize { cols, rows } => self.terminal.resize(cols, rows),
        }
    }

    async fn on_data(&mut self, chunk: &str) {
        if self.editor.feed(chunk, &self.terminal) == Feed::PasteRequested {
            match self.platform.read_clipboard().await {
                Some(text) => self.editor.paste(&text, &self.terminal),
                None => log::debug!("paste requested but clipboard is unavailable"),
            }
        }
    }

    async fn on_key(&mut self, event: KeyEvent) {
        match event.key {
            Key::Enter => match self.submit().await {
                DispatchOutcome::Executed(name) => log::debug!("ran {name}"),
                DispatchOutcome::Unknown(name) => log::debug!("unknown command: {name}"),
                DispatchOutcome::Empty => {}
            },
            Key::Backspace => self.editor.backspace(&self.terminal),
            Key::ArrowUp => self.recall(Direction::Backward),
            Key::ArrowDown => self.recall(Direction::Forward),
            Key::Char('r') if event.ctrl => self.platform.reload(),
            Key::F11 => {
                self.terminal.write("pressed F11");
                for line in self.registry.help_lines() {
                    output::write_line(&self.terminal, &line, true);
                }
                output::prompt(&self.terminal);
            }
            _ => {}
        }
    }

    /// Submit the pending input and clear it.
    pub async fn submit(&mut self) -> DispatchOutcome {
        let buffer = self.editor.take();
        Dispatcher {
            registry: &self.registry,
            history: &mut self.history,
            terminal: &self.terminal,
            platform: &self.platform,
        }
        .submit(&buffer)
        .await
    }

    fn recall(&mut self, direction: Direction) {
        self.editor
            .recall_into(&mut self.history, direction, &self.terminal);
    }

}

#[cfg(test)]
impl<T: Terminal, P: Platform> Session<T, P> {
    pub fn pending(&self) -> &str {
        self.editor.pending()
    }

    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }
}

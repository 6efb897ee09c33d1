//! Pending-input line editor.
//!
//! Accumulates raw data chunks from the terminal, echoes what it keeps, and
//! drops navigation/function-key sequences the prompt does not handle.

use super::history::{Direction, HistoryRing};
use super::host::Terminal;

/// Erases one cell to the left of the cursor.
pub const DESTRUCTIVE_BACKSPACE: &str = "\x08 \x08";

/// Ctrl+V, forwarded to the paste collaborator instead of echoed.
pub const PASTE_REQUEST: &str = "\x16";

/// Control characters dropped outright: DEL and Ctrl+R.
const IGNORED_CONTROLS: &[&str] = &["\x7f", "\x12"];

/// Starts every escape sequence: arrows, Home/End, Delete, paging,
/// function keys, modified keys and a bare Esc.
const ESCAPE: char = '\x1b';

/// Cursor-movement sequences; a chunk containing any of them is dropped.
const ARROW_SEQUENCES: &[&str] = &["\x1b[A", "\x1b[B", "\x1b[C", "\x1b[D"];

/// What [`LineEditor::feed`] did with a chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feed {
    /// Appended and echoed.
    Accepted,
    /// Dropped without echo.
    Ignored,
    /// The chunk asked for clipboard contents.
    PasteRequested,
}

/// Whether a raw chunk should be dropped without touching the buffer.
pub fn is_ignorable(chunk: &str) -> bool {
    chunk.is_empty()
        || chunk.starts_with(ESCAPE)
        || IGNORED_CONTROLS.contains(&chunk)
        || ARROW_SEQUENCES.iter().any(|seq| chunk.contains(seq))
        || chunk.contains(['\r', '\n'])
}

/// The line being typed since the last submission.
#[derive(Clone, Debug, Default)]
pub struct LineEditor {
    pending: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Accept a raw data chunk from the terminal.
    pub fn feed(&mut self, chunk: &str, term: &impl Terminal) -> Feed {
        if chunk == PASTE_REQUEST {
            return Feed::PasteRequested;
        }
        if is_ignorable(chunk) {
            return Feed::Ignored;
        }
        self.pending.push_str(chunk);
        term.write(chunk);
        Feed::Accepted
    }

    /// Append pasted text (right-trimmed) and echo it.
    pub fn paste(&mut self, text: &str, term: &impl Terminal) {
        let text = text.trim_end();
        if text.is_empty() || text.contains(['\r', '\n']) {
            return;
        }
        self.pending.push_str(text);
        term.write(text);
    }

    /// Remove the last character, erasing it on screen.
    pub fn backspace(&mut self, term: &impl Terminal) {
        if self.pending.pop().is_some() {
            term.write(DESTRUCTIVE_BACKSPACE);
        }
    }

    /// Hand over the pending input, leaving the editor empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.pending)
    }

    /// Replace the pending input with the next history entry.
    ///
    /// Nothing changes when the history is empty.
    pub fn recall_into(
        &mut self,
        history: &mut HistoryRing,
        direction: Direction,
        term: &impl Terminal,
    ) {
        let Some(name) = history.recall(direction) else {
            return;
        };

        let erase = DESTRUCTIVE_BACKSPACE.repeat(self.pending.chars().count());
        term.write(&format!("{}{}", erase, name));
        self.pending = name.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::RecordingTerminal;

    #[test]
    fn test_feed_appends_and_echoes() {
        let term = RecordingTerminal::new();
        let mut editor = LineEditor::new();
        assert_eq!(editor.feed("h", &term), Feed::Accepted);
        assert_eq!(editor.feed("elp", &term), Feed::Accepted);
        assert_eq!(editor.pending(), "help");
        assert_eq!(term.output(), "help");
    }

    #[test]
    fn test_feed_drops_control_sequences() {
        let term = RecordingTerminal::new();
        let mut editor = LineEditor::new();
        for chunk in [
            "\x7f", "\x12", "\x1b[A", "\x1b[D", "\x1b[23~", "\x1bOP", "\x1b[H", "\x1b[F", "\r",
            "a\r\nb", "",
        ] {
            assert_eq!(editor.feed(chunk, &term), Feed::Ignored, "{chunk:?}");
        }
        assert_eq!(editor.pending(), "");
        assert_eq!(term.writes(), 0);
    }

    #[test]
    fn test_feed_drops_any_escape_sequence() {
        let term = RecordingTerminal::new();
        let mut editor = LineEditor::new();
        editor.feed("help", &term);
        term.reset();

        for chunk in [
            "\x1b[3~", "\x1b[5~", "\x1b[6~", "\x1bOR", "\x1b[1;5C", "\x1b[2~", "\x1b",
        ] {
            assert_eq!(editor.feed(chunk, &term), Feed::Ignored, "{chunk:?}");
        }
        assert_eq!(editor.pending(), "help");
        assert_eq!(term.writes(), 0);
    }

    #[test]
    fn test_feed_drops_embedded_arrow() {
        let term = RecordingTerminal::new();
        let mut editor = LineEditor::new();
        assert_eq!(editor.feed("a\x1b[B", &term), Feed::Ignored);
        assert_eq!(editor.pending(), "");
    }

    #[test]
    fn test_feed_paste_request() {
        let term = RecordingTerminal::new();
        let mut editor = LineEditor::new();
        assert_eq!(editor.feed(PASTE_REQUEST, &term), Feed::PasteRequested);
        assert_eq!(term.writes(), 0);

        editor.paste("example.com  \n", &term);
        assert_eq!(editor.pending(), "example.com");
        assert_eq!(term.output(), "example.com");
    }

    #[test]
    fn test_paste_rejects_multiline() {
        let term = RecordingTerminal::new();
        let mut editor = LineEditor::new();
        editor.paste("one\ntwo", &term);
        assert_eq!(editor.pending(), "");
        assert_eq!(term.writes(), 0);
    }

    #[test]
    fn test_backspace() {
        let term = RecordingTerminal::new();
        let mut editor = LineEditor::new();
        editor.feed("hé", &term);
        term.reset();

        editor.backspace(&term);
        assert_eq!(editor.pending(), "h");
        editor.backspace(&term);
        editor.backspace(&term);
        assert_eq!(editor.pending(), "");
        assert_eq!(term.output(), DESTRUCTIVE_BACKSPACE.repeat(2));
    }

    #[test]
    fn test_take_clears() {
        let term = RecordingTerminal::new();
        let mut editor = LineEditor::new();
        editor.feed("to x.com", &term);
        assert_eq!(editor.take(), "to x.com");
        assert_eq!(editor.pending(), "");
    }

    #[test]
    fn test_recall_replaces_pending() {
        let term = RecordingTerminal::new();
        let mut history = HistoryRing::new();
        history.record("help");
        history.record("source");
        history.reset_cursor();

        let mut editor = LineEditor::new();
        editor.feed("ab", &term);
        term.reset();

        editor.recall_into(&mut history, Direction::Backward, &term);
        assert_eq!(editor.pending(), "source");
        assert_eq!(
            term.output(),
            format!("{}source", DESTRUCTIVE_BACKSPACE.repeat(2))
        );

        term.reset();
        editor.recall_into(&mut history, Direction::Backward, &term);
        assert_eq!(editor.pending(), "help");
        assert_eq!(
            term.output(),
            format!("{}help", DESTRUCTIVE_BACKSPACE.repeat(6))
        );
    }

    #[test]
    fn test_recall_empty_history() {
        let term = RecordingTerminal::new();
        let mut history = HistoryRing::new();
        let mut editor = LineEditor::new();
        editor.feed("ab", &term);
        term.reset();

        editor.recall_into(&mut history, Direction::Forward, &term);
        assert_eq!(editor.pending(), "ab");
        assert_eq!(term.writes(), 0);
        assert_eq!(history.cursor(), None);
    }
}

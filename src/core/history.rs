//! Deduplicated command history with cyclic recall.

use std::collections::HashSet;

/// Direction of a history recall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward older entries (ArrowUp).
    Backward,
    /// Toward more recent entries (ArrowDown).
    Forward,
}

/// Ordered record of distinct, successfully dispatched command names.
///
/// The cursor is `None` until the first dispatch; afterwards it is parked
/// just past the newest entry so the next backward recall yields it.
#[derive(Clone, Debug, Default)]
pub struct HistoryRing {
    entries: Vec<String>,
    seen: HashSet<String>,
    cursor: Option<usize>,
}

impl HistoryRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` unless it was recorded before.
    ///
    /// Returns `true` if the ring grew.
    pub fn record(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.entries.push(name.to_string());
        true
    }

    /// Move the cursor one step and return the entry under it.
    ///
    /// Wraps at both ends. An empty ring leaves the cursor untouched.
    pub fn recall(&mut self, direction: Direction) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;

        let next = match (direction, self.cursor) {
            (Direction::Forward, None) => 0,
            (Direction::Forward, Some(i)) if i >= last => 0,
            (Direction::Forward, Some(i)) => i + 1,
            (Direction::Backward, None | Some(0)) => last,
            (Direction::Backward, Some(i)) => (i - 1).min(last),
        };

        self.cursor = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Park the cursor just past the newest entry.
    pub fn reset_cursor(&mut self) {
        self.cursor = Some(self.entries.len());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Recorded names, oldest first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

}

#[cfg(test)]
impl HistoryRing {
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

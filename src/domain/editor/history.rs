//! Linear undo history

use std::time::SystemTime;

/// One historical content value retained for undo.
/// Immutable once created; owned exclusively by the history.
#[derive(Debug, Clone)]
pub struct Snapshot {
    content: String,
    at: SystemTime,
}

impl Snapshot {
    fn new(content: String) -> Self {
        Self {
            content,
            at: SystemTime::now(),
        }
    }

    /// The text captured in this snapshot
    pub fn content(&self) -> &str {
        &self.content
    }

    /// When the snapshot was taken
    pub fn taken_at(&self) -> SystemTime {
        self.at
    }
}

/// An ordered sequence of snapshots plus a cursor into it.
///
/// Writing a new snapshot discards everything after the cursor, so there
/// is no redo: editing after an undo permanently truncates forward history.
/// The visible editor content is always the snapshot at the cursor.
#[derive(Debug)]
pub struct UndoHistory {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl UndoHistory {
    /// Create a history seeded with the initial content
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            snapshots: vec![Snapshot::new(initial.into())],
            cursor: 0,
        }
    }

    /// The content at the cursor
    pub fn current(&self) -> &str {
        self.snapshots[self.cursor].content()
    }

    /// Record a new snapshot. A write equal to the current snapshot is a
    /// no-op so redundant replacements do not pollute the history.
    pub fn push(&mut self, content: &str) {
        if content == self.current() {
            return;
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(Snapshot::new(content.to_owned()));
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot and return the content there, or `None`
    /// when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.snapshots[self.cursor].content())
    }

    /// Whether an undo would move the cursor
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Number of retained snapshots
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_holds_initial_snapshot() {
        let history = UndoHistory::new("hello");
        assert_eq!(history.current(), "hello");
        assert_eq!(history.depth(), 1);
        assert!(!history.can_undo());
    }

    #[test]
    fn push_advances_current() {
        let mut history = UndoHistory::new("");
        history.push("a");
        history.push("ab");
        assert_eq!(history.current(), "ab");
        assert_eq!(history.depth(), 3);
    }

    #[test]
    fn push_identical_content_is_noop() {
        let mut history = UndoHistory::new("same");
        history.push("same");
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn undo_steps_back_through_edits() {
        let mut history = UndoHistory::new("");
        history.push("a");
        history.push("ab");

        assert_eq!(history.undo(), Some("a"));
        assert_eq!(history.undo(), Some(""));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn undo_at_oldest_is_noop() {
        let mut history = UndoHistory::new("only");
        assert_eq!(history.undo(), None);
        assert_eq!(history.current(), "only");
    }

    #[test]
    fn push_after_undo_truncates_forward_history() {
        let mut history = UndoHistory::new("");
        history.push("a");
        history.push("ab");
        history.undo();

        history.push("ax");
        assert_eq!(history.current(), "ax");
        assert_eq!(history.depth(), 3);

        // "ab" is gone for good
        assert_eq!(history.undo(), Some("a"));
        assert_eq!(history.undo(), Some(""));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn repeated_undo_reaches_n_edits_back() {
        let mut history = UndoHistory::new("");
        for text in ["1", "12", "123", "1234"] {
            history.push(text);
        }

        history.undo();
        history.undo();
        assert_eq!(history.current(), "12");
    }

    #[test]
    fn snapshots_carry_timestamps() {
        let before = SystemTime::now();
        let history = UndoHistory::new("x");
        assert!(history.snapshots[0].taken_at() >= before);
    }
}

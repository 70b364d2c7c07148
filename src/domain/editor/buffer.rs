//! Editor text buffer and selection

use thiserror::Error;

/// Error when a selection or slice range is out of bounds
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid range {start}..{end} for buffer of length {len}")]
pub struct SelectionRangeError {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

/// A caret or highlighted range within the buffer, in character offsets.
/// `start == end` denotes a caret with no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// A collapsed selection (caret) at the given offset
    pub const fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Whether nothing is highlighted
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The current text content plus the active selection. No history.
///
/// Offsets are character offsets, not byte offsets; byte ranges are
/// derived internally so multi-byte content slices correctly.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    content: String,
    selection: Selection,
}

impl TextBuffer {
    /// Create an empty buffer with the caret at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial content and the caret at 0
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            selection: Selection::default(),
        }
    }

    /// The full current text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The active selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Content length in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the buffer holds no text
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Replace the whole content. Selection endpoints beyond the new
    /// length are clamped to the new length.
    pub fn replace(&mut self, new_text: impl Into<String>) {
        self.content = new_text.into();
        let len = self.char_len();
        self.selection.start = self.selection.start.min(len);
        self.selection.end = self.selection.end.min(len);
    }

    /// Set the active selection, rejecting invalid bounds
    pub fn set_selection(&mut self, start: usize, end: usize) -> Result<(), SelectionRangeError> {
        let len = self.char_len();
        if start > end || end > len {
            return Err(SelectionRangeError { start, end, len });
        }
        self.selection = Selection { start, end };
        Ok(())
    }

    /// Collapse the selection to a caret, clamping to the content length
    pub fn set_caret(&mut self, at: usize) {
        self.selection = Selection::caret(at.min(self.char_len()));
    }

    /// Select the entire content
    pub fn select_all(&mut self) -> Selection {
        self.selection = Selection {
            start: 0,
            end: self.char_len(),
        };
        self.selection
    }

    /// Substring between two character offsets
    pub fn slice(&self, start: usize, end: usize) -> Result<&str, SelectionRangeError> {
        let len = self.char_len();
        if start > end || end > len {
            return Err(SelectionRangeError { start, end, len });
        }
        Ok(&self.content[self.byte_index(start)..self.byte_index(end)])
    }

    /// The highlighted text; empty for a caret
    pub fn selected_text(&self) -> &str {
        let Selection { start, end } = self.selection;
        &self.content[self.byte_index(start)..self.byte_index(end)]
    }

    /// Text before the selection start
    pub fn before_selection(&self) -> &str {
        &self.content[..self.byte_index(self.selection.start)]
    }

    /// Text after the selection end
    pub fn after_selection(&self) -> &str {
        &self.content[self.byte_index(self.selection.end)..]
    }

    /// Byte index of a character offset. Offsets past the last character
    /// map to the end of the string; callers validate bounds first.
    fn byte_index(&self, char_offset: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_offset)
            .map_or(self.content.len(), |(byte, _)| byte)
    }
}

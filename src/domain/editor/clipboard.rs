//! Selection clipboard arithmetic
//!
//! Pure functions computing the edits behind copy/cut/paste. The system
//! clipboard register itself lives behind a port; these only decide what
//! text moves and where the caret lands.

use super::buffer::TextBuffer;

/// The edit produced by cutting the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutEdit {
    /// Text destined for the system clipboard
    pub clipboard_text: String,
    /// Buffer content with the selection removed
    pub new_content: String,
    /// Caret position after the cut (the cut point)
    pub caret: usize,
}

/// The edit produced by pasting over the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteEdit {
    /// Buffer content with the selection replaced by the pasted text
    pub new_content: String,
    /// Caret position after the paste (selection start + pasted length)
    pub caret: usize,
}

/// The selected text, or `None` when the selection is empty.
/// Copy on an empty selection is a silent no-op, never an error.
pub fn copy_selection(buffer: &TextBuffer) -> Option<String> {
    if buffer.selection().is_empty() {
        return None;
    }
    Some(buffer.selected_text().to_owned())
}

/// Remove the selection, collapsing the caret to the cut point.
/// `None` when the selection is empty.
pub fn cut_selection(buffer: &TextBuffer) -> Option<CutEdit> {
    if buffer.selection().is_empty() {
        return None;
    }
    let mut new_content =
        String::with_capacity(buffer.before_selection().len() + buffer.after_selection().len());
    new_content.push_str(buffer.before_selection());
    new_content.push_str(buffer.after_selection());

    Some(CutEdit {
        clipboard_text: buffer.selected_text().to_owned(),
        new_content,
        caret: buffer.selection().start,
    })
}

/// Replace the selection with `text`, inserting at the caret when the
/// selection is empty.
pub fn paste_over_selection(buffer: &TextBuffer, text: &str) -> PasteEdit {
    let mut new_content = String::with_capacity(
        buffer.before_selection().len() + text.len() + buffer.after_selection().len(),
    );
    new_content.push_str(buffer.before_selection());
    new_content.push_str(text);
    new_content.push_str(buffer.after_selection());

    PasteEdit {
        new_content,
        caret: buffer.selection().start + text.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with_selection(content: &str, start: usize, end: usize) -> TextBuffer {
        let mut buffer = TextBuffer::with_content(content);
        buffer.set_selection(start, end).unwrap();
        buffer
    }

    #[test]
    fn copy_empty_selection_is_none() {
        let buffer = TextBuffer::with_content("hello");
        assert_eq!(copy_selection(&buffer), None);
    }

    #[test]
    fn copy_returns_selected_text() {
        let buffer = buffer_with_selection("hello world", 6, 11);
        assert_eq!(copy_selection(&buffer), Some("world".to_string()));
    }

    #[test]
    fn cut_empty_selection_is_none() {
        let buffer = TextBuffer::with_content("hello");
        assert_eq!(cut_selection(&buffer), None);
    }

    #[test]
    fn cut_removes_selection_and_collapses_caret() {
        let buffer = buffer_with_selection("hello world", 5, 11);
        let edit = cut_selection(&buffer).unwrap();
        assert_eq!(edit.clipboard_text, " world");
        assert_eq!(edit.new_content, "hello");
        assert_eq!(edit.caret, 5);
    }

    #[test]
    fn paste_at_caret_inserts() {
        let buffer = buffer_with_selection("helloworld", 5, 5);
        let edit = paste_over_selection(&buffer, ", ");
        assert_eq!(edit.new_content, "hello, world");
        assert_eq!(edit.caret, 7);
    }

    #[test]
    fn paste_replaces_selection() {
        let buffer = buffer_with_selection("hello world", 0, 5);
        let edit = paste_over_selection(&buffer, "goodbye");
        assert_eq!(edit.new_content, "goodbye world");
        assert_eq!(edit.caret, 7);
    }

    #[test]
    fn cut_then_paste_round_trips() {
        let buffer = buffer_with_selection("one two three", 4, 8);
        let cut = cut_selection(&buffer).unwrap();

        let mut after_cut = TextBuffer::with_content(cut.new_content.clone());
        after_cut.set_selection(cut.caret, cut.caret).unwrap();
        let paste = paste_over_selection(&after_cut, &cut.clipboard_text);

        assert_eq!(paste.new_content, "one two three");
    }

    #[test]
    fn paste_caret_counts_characters_not_bytes() {
        let buffer = buffer_with_selection("ab", 1, 1);
        let edit = paste_over_selection(&buffer, "नमस्ते");
        assert_eq!(edit.new_content, "aनमस्तेb");
        assert_eq!(edit.caret, 7);
    }
}

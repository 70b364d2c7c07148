//! Editor session use case

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use crate::domain::editor::clipboard::{copy_selection, cut_selection, paste_over_selection};
use crate::domain::editor::{
    AlreadyInProgress, RewriteCoordinator, RewriteKind, RewriteStatus, Selection,
    SelectionRangeError, SpeechEvent, TextBuffer, TranscriptMerger, UndoHistory,
};
use crate::domain::Language;

use super::ports::{ClipboardDevice, ClipboardError, RewriteError, TextRewriter};

/// Errors from editor session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Busy(#[from] AlreadyInProgress),

    #[error("Rewrite failed: {0}")]
    Rewrite(#[from] RewriteError),

    #[error("Clipboard failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Nothing to rewrite: the note is empty")]
    EmptyNote,
}

/// Mutable session state. Everything in here mutates synchronously while
/// the lock is held; the lock is never held across an await, which keeps
/// the single-writer discipline of the event loop model.
struct EditorState {
    buffer: TextBuffer,
    history: UndoHistory,
    merger: TranscriptMerger,
    coordinator: RewriteCoordinator,
    language: Language,
}

impl EditorState {
    /// The single mutation funnel: every writer (keystrokes, transcript
    /// merges, rewrite results, cut and paste) routes its replacement
    /// through here. Updates the buffer, pushes to history, and lets the
    /// buffer clamp the selection.
    fn apply_replacement(&mut self, new_text: &str) {
        self.buffer.replace(new_text);
        self.history.push(new_text);
    }
}

/// Interactive editing session facade.
///
/// Composes the buffer, undo history, transcript merger, and rewrite
/// coordinator; the presentation layer talks to this object and nothing
/// below it. Created when the note screen opens and dropped, state and
/// all, when the user leaves it.
pub struct EditorSession<R, C>
where
    R: TextRewriter,
    C: ClipboardDevice,
{
    rewriter: R,
    clipboard: C,
    state: Mutex<EditorState>,
}

impl<R, C> EditorSession<R, C>
where
    R: TextRewriter,
    C: ClipboardDevice,
{
    /// Create an empty session
    pub fn new(rewriter: R, clipboard: C, language: Language) -> Self {
        Self {
            rewriter,
            clipboard,
            state: Mutex::new(EditorState {
                buffer: TextBuffer::new(),
                history: UndoHistory::new(""),
                merger: TranscriptMerger::new(),
                coordinator: RewriteCoordinator::new(),
                language,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, EditorState> {
        // The lock is only ever taken between suspension points, so a
        // poisoned lock can only come from a panicking test assertion.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The full current text
    pub fn content(&self) -> String {
        self.state().buffer.content().to_owned()
    }

    /// The active selection
    pub fn selection(&self) -> Selection {
        self.state().buffer.selection()
    }

    /// The editing language
    pub fn language(&self) -> Language {
        self.state().language
    }

    /// Switch the editing language (the translate target flips with it)
    pub fn set_language(&self, language: Language) {
        self.state().language = language;
    }

    /// Replace the whole note text. This is the entry point every
    /// mutation source funnels through.
    pub fn apply_replacement(&self, new_text: &str) {
        self.state().apply_replacement(new_text);
    }

    /// Step back one edit, returning the restored content, or `None`
    /// when there is nothing to undo. The restored snapshot is applied
    /// to the buffer without re-pushing so the undo itself never
    /// pollutes the history.
    pub fn undo(&self) -> Option<String> {
        let mut state = self.state();
        let restored = state.history.undo()?.to_owned();
        state.buffer.replace(restored.clone());
        Some(restored)
    }

    /// Whether an undo would change the content
    pub fn can_undo(&self) -> bool {
        self.state().history.can_undo()
    }

    /// Set the selection range, in character offsets
    pub fn set_selection(&self, start: usize, end: usize) -> Result<(), SelectionRangeError> {
        self.state().buffer.set_selection(start, end)
    }

    /// Select the entire note
    pub fn select_all(&self) -> Selection {
        self.state().buffer.select_all()
    }

    /// Copy the selection to the system clipboard. Returns the copied
    /// text, or `None` (with no side effect) on an empty selection.
    /// A clipboard failure leaves everything untouched.
    pub async fn copy(&self) -> Result<Option<String>, ClipboardError> {
        let selected = {
            let state = self.state();
            copy_selection(&state.buffer)
        };
        let Some(text) = selected else {
            return Ok(None);
        };
        self.clipboard.set_text(&text).await?;
        Ok(Some(text))
    }

    /// Cut the selection to the system clipboard, collapsing the caret
    /// to the cut point. Returns the cut text, or `None` on an empty
    /// selection. The clipboard write happens before the buffer mutates,
    /// so a clipboard failure is a complete no-op.
    pub async fn cut(&self) -> Result<Option<String>, ClipboardError> {
        let edit = {
            let state = self.state();
            cut_selection(&state.buffer)
        };
        let Some(edit) = edit else {
            return Ok(None);
        };
        self.clipboard.set_text(&edit.clipboard_text).await?;

        let mut state = self.state();
        state.apply_replacement(&edit.new_content);
        state.buffer.set_caret(edit.caret);
        Ok(Some(edit.clipboard_text))
    }

    /// Paste the system clipboard over the selection (or at the caret),
    /// placing the caret after the pasted text. Returns the new content,
    /// or `None` when the clipboard is empty.
    pub async fn paste(&self) -> Result<Option<String>, ClipboardError> {
        let text = self.clipboard.get_text().await?;
        if text.is_empty() {
            return Ok(None);
        }

        let mut state = self.state();
        let edit = paste_over_selection(&state.buffer, &text);
        state.apply_replacement(&edit.new_content);
        state.buffer.set_caret(edit.caret);
        Ok(Some(edit.new_content))
    }

    /// Consume one recognition event. Interim results are ignored; final
    /// ones merge into the note. Returns whether the content changed.
    pub fn on_speech_event(&self, event: &SpeechEvent) -> bool {
        if !event.is_final {
            return false;
        }
        self.merge_transcript(&event.transcript)
    }

    /// Merge a finalized transcript fragment. Returns whether the content
    /// changed (empty and repeated fragments are skipped).
    pub fn merge_transcript(&self, transcript: &str) -> bool {
        let mut state = self.state();
        let current = state.buffer.content().to_owned();
        match state.merger.merge(&current, transcript) {
            Some(merged) => {
                state.apply_replacement(&merged);
                true
            }
            None => false,
        }
    }

    /// Issue an asynchronous rewrite of the whole note.
    ///
    /// At most one request per kind may be in flight; a second issue
    /// fails with [`AlreadyInProgress`] before any network activity.
    /// When the response arrives, the result is applied only if the
    /// content still matches what the request was issued against;
    /// otherwise it is discarded and the outcome is `Superseded`. The
    /// request itself is never cancelled, only ignored when stale.
    pub async fn rewrite(&self, kind: RewriteKind) -> Result<RewriteStatus, SessionError> {
        let (issued, language) = {
            let mut state = self.state();
            let issued = state.buffer.content().to_owned();
            if issued.trim().is_empty() {
                return Err(SessionError::EmptyNote);
            }
            state.coordinator.begin(kind, &issued)?;
            (issued, state.language)
        };

        let result = match kind {
            RewriteKind::Enhance => self.rewriter.enhance(&issued, language).await,
            RewriteKind::Translate => self.rewriter.translate(&issued, language.opposite()).await,
        };

        let mut state = self.state();
        match result {
            Ok(rewritten) => {
                let current = state.buffer.content().to_owned();
                let status = state.coordinator.settle_ok(kind, &current);
                if status == RewriteStatus::Applied {
                    state.apply_replacement(&rewritten);
                }
                Ok(status)
            }
            Err(e) => {
                state.coordinator.settle_err(kind);
                Err(SessionError::Rewrite(e))
            }
        }
    }

    /// The current status of a rewrite slot, for the presentation layer
    pub fn rewrite_status(&self, kind: RewriteKind) -> RewriteStatus {
        self.state().coordinator.status(kind)
    }

    /// Whether a rewrite of this kind is in flight
    pub fn is_rewrite_pending(&self, kind: RewriteKind) -> bool {
        self.state().coordinator.is_pending(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // Mock implementations for testing
    struct MockRewriter;

    #[async_trait]
    impl TextRewriter for MockRewriter {
        async fn enhance(&self, text: &str, _lang: Language) -> Result<String, RewriteError> {
            Ok(format!("enhanced: {}", text))
        }

        async fn translate(&self, text: &str, target: Language) -> Result<String, RewriteError> {
            Ok(format!("{}: {}", target.code(), text))
        }
    }

    struct MockClipboard;

    #[async_trait]
    impl ClipboardDevice for MockClipboard {
        async fn get_text(&self) -> Result<String, ClipboardError> {
            Ok("pasted".to_string())
        }

        async fn set_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn session() -> EditorSession<MockRewriter, MockClipboard> {
        EditorSession::new(MockRewriter, MockClipboard, Language::En)
    }

    #[test]
    fn apply_replacement_updates_content() {
        let session = session();
        session.apply_replacement("hello");
        assert_eq!(session.content(), "hello");
    }

    #[test]
    fn undo_restores_previous_content() {
        let session = session();
        session.apply_replacement("a");
        session.apply_replacement("ab");

        assert_eq!(session.undo(), Some("a".to_string()));
        assert_eq!(session.content(), "a");
    }

    #[test]
    fn undo_on_fresh_session_is_none() {
        let session = session();
        assert_eq!(session.undo(), None);
    }

    #[test]
    fn undo_does_not_push_history() {
        let session = session();
        session.apply_replacement("a");
        session.undo();
        // undoing the undo target is not possible: already at oldest
        assert_eq!(session.undo(), None);
        assert_eq!(session.content(), "");
    }

    #[test]
    fn replacement_clamps_stale_selection() {
        let session = session();
        session.apply_replacement("hello world");
        session.set_selection(6, 11).unwrap();
        session.apply_replacement("hi");
        assert_eq!(session.selection(), Selection::caret(2));
    }

    #[tokio::test]
    async fn copy_with_empty_selection_is_noop() {
        let session = session();
        session.apply_replacement("hello");
        assert_eq!(session.copy().await.unwrap(), None);
        assert_eq!(session.content(), "hello");
    }

    #[tokio::test]
    async fn cut_removes_selection_and_collapses_caret() {
        let session = session();
        session.apply_replacement("hello world");
        session.set_selection(5, 11).unwrap();

        let cut = session.cut().await.unwrap();
        assert_eq!(cut.as_deref(), Some(" world"));
        assert_eq!(session.content(), "hello");
        assert_eq!(session.selection(), Selection::caret(5));
    }

    #[tokio::test]
    async fn paste_replaces_selection_and_moves_caret() {
        let session = session();
        session.apply_replacement("say word here");
        session.set_selection(4, 8).unwrap();

        let new_content = session.paste().await.unwrap();
        assert_eq!(new_content.as_deref(), Some("say pasted here"));
        assert_eq!(session.selection(), Selection::caret(10));
    }

    #[test]
    fn interim_speech_events_are_ignored() {
        let session = session();
        assert!(!session.on_speech_event(&SpeechEvent::interim("hello")));
        assert_eq!(session.content(), "");
    }

    #[test]
    fn final_speech_events_merge() {
        let session = session();
        assert!(session.on_speech_event(&SpeechEvent::finalized("hello")));
        assert!(session.on_speech_event(&SpeechEvent::finalized("world")));
        assert_eq!(session.content(), "hello world");
    }

    #[test]
    fn duplicate_transcript_does_not_change_content() {
        let session = session();
        session.merge_transcript("same");
        assert!(!session.merge_transcript("same"));
        assert_eq!(session.content(), "same");
    }

    #[tokio::test]
    async fn enhance_applies_when_content_unchanged() {
        let session = session();
        session.apply_replacement("draft");

        let status = session.rewrite(RewriteKind::Enhance).await.unwrap();
        assert_eq!(status, RewriteStatus::Applied);
        assert_eq!(session.content(), "enhanced: draft");
    }

    #[tokio::test]
    async fn translate_targets_opposite_language() {
        let session = session();
        session.apply_replacement("namaste");

        session.rewrite(RewriteKind::Translate).await.unwrap();
        assert_eq!(session.content(), "hi: namaste");

        session.set_language(Language::Hi);
        session.apply_replacement("hello");
        session.rewrite(RewriteKind::Translate).await.unwrap();
        assert_eq!(session.content(), "en: hello");
    }

    #[tokio::test]
    async fn rewrite_of_empty_note_is_rejected() {
        let session = session();
        let err = session.rewrite(RewriteKind::Enhance).await.unwrap_err();
        assert!(matches!(err, SessionError::EmptyNote));
        assert_eq!(
            session.rewrite_status(RewriteKind::Enhance),
            RewriteStatus::Idle
        );
    }

    #[tokio::test]
    async fn rewrite_failure_leaves_content_untouched() {
        struct FailingRewriter;

        #[async_trait]
        impl TextRewriter for FailingRewriter {
            async fn enhance(&self, _: &str, _: Language) -> Result<String, RewriteError> {
                Err(RewriteError::ApiError("boom".to_string()))
            }

            async fn translate(&self, _: &str, _: Language) -> Result<String, RewriteError> {
                Err(RewriteError::ApiError("boom".to_string()))
            }
        }

        let session = EditorSession::new(FailingRewriter, MockClipboard, Language::En);
        session.apply_replacement("keep me");

        let err = session.rewrite(RewriteKind::Enhance).await.unwrap_err();
        assert!(matches!(err, SessionError::Rewrite(_)));
        assert_eq!(session.content(), "keep me");
        assert_eq!(
            session.rewrite_status(RewriteKind::Enhance),
            RewriteStatus::Failed
        );
    }
}
